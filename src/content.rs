//! Static site content: owner identity, skills, project records and
//! contact details. Declared once, never mutated.

pub const OWNER_NAME: &str = "Muhammad Hussaini Accama";
pub const OWNER_INITIALS: &str = "MA";
pub const HEADLINE: &str = "AI Data Annotator & Language Specialist";
pub const LANGUAGE_PAIR: &str = "Hausa ↔ English";
pub const SUMMARY: &str = "Detail-oriented data annotator specializing in speech data, AI \
     annotation, and multilingual subtitle translation. Native Hausa speaker \
     with experience in QA and text classification.";

pub const AVATAR_PATH: &str = "/passport-photo.jpeg";
pub const CV_PATH: &str = "/AI-Annotation-CV.pdf";

pub const EMAIL: &str = "accamamuhammad17@gmail.com";
pub const PHONE: &str = "+234 903 377 3440";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/muhammad-accama-172b03266";

pub const TOOLS: &[&str] = &[
    "Label Studio",
    "Subtitle Edit",
    "Google Sheets",
    "Excel",
    "Basic QA workflows",
];

/// External URL substantiating a project's work product.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ProofLink {
    pub url: &'static str,
    /// Shown to the user as "View {label}".
    pub label: &'static str,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub tools: &'static [&'static str],
    pub proof: Option<ProofLink>,
}

/// Showcase entries, rendered in this order.
pub const PROJECTS: &[Project] = &[
    Project {
        title: "Hausa → English Subtitle Translation",
        description: "Transcribed and translated Hausa interview videos into English \
             subtitles, ensuring accurate timing, readability, and cultural context.",
        details: &[
            "Total duration: ~40 minutes",
            "Files produced: .srt subtitle files",
            "Focus: dialect accuracy, subtitle timing, readability",
        ],
        tools: &["Subtitle Edit", "VLC", "Google Sheets"],
        proof: Some(ProofLink {
            url: "https://docs.google.com/spreadsheets/d/1zPXkMxMXt0d_FB0dKVRXNxbR-6Aw7bZam8UjEJ4LuYU/edit?usp=sharing",
            label: "Google Sheets",
        }),
    },
    Project {
        title: "Text Classification & Annotation",
        description: "Annotated English text samples for intent classification using \
             Label Studio, following consistent labeling guidelines.",
        details: &[
            "~200 text samples",
            "Manual QA and label consistency checks",
            "Progress tracked in Google Sheets",
        ],
        tools: &["Label Studio", "Google Sheets"],
        proof: None,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_keep_their_declared_order() {
        let titles: Vec<&str> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(
            titles,
            [
                "Hausa → English Subtitle Translation",
                "Text Classification & Annotation",
            ]
        );
    }

    #[test]
    fn proof_links_carry_a_type_label() {
        let with_proof: Vec<&Project> =
            PROJECTS.iter().filter(|p| p.proof.is_some()).collect();
        assert_eq!(with_proof.len(), 1);
        let proof = with_proof[0].proof.unwrap();
        assert_eq!(proof.label, "Google Sheets");
        assert!(proof.url.starts_with("https://"));
    }

    #[test]
    fn every_project_has_details_and_tools() {
        for project in PROJECTS {
            assert!(!project.details.is_empty(), "{}", project.title);
            assert!(!project.tools.is_empty(), "{}", project.title);
        }
    }
}
