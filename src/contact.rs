//! Contact form state and the email relay it submits to.
//!
//! The relay is EmailJS, treated as an opaque collaborator: we POST the
//! three field values plus fixed identifiers and either get a 2xx or we
//! don't. One attempt per submit, no retry, no cancellation.

use serde::Serialize;
use thiserror::Error;

pub const RELAY_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
pub const RELAY_SERVICE_ID: &str = "service_portfolio";
pub const RELAY_TEMPLATE_ID: &str = "template_contact";
/// EmailJS public key. Safe to ship to the browser.
pub const RELAY_PUBLIC_KEY: &str = "kX4nQ7vTzE2pYw9Lb";

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("request could not be delivered: {0}")]
    Transport(String),
    #[error("relay rejected the message with status {0}")]
    Rejected(u16),
}

/// The three fields while being edited. Cleared on successful submission.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct MessageDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl MessageDraft {
    /// Client-side precondition: no relay attempt until every field holds
    /// something other than whitespace.
    pub fn is_complete(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .all(|field| !field.trim().is_empty())
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent,
    Failed,
}

#[derive(Clone, PartialEq, Default, Debug)]
pub struct ContactForm {
    pub draft: MessageDraft,
    pub status: SubmitStatus,
}

impl ContactForm {
    pub fn with_draft(&self, draft: MessageDraft) -> Self {
        Self {
            draft,
            status: self.status,
        }
    }

    pub fn submitting(&self) -> Self {
        Self {
            draft: self.draft.clone(),
            status: SubmitStatus::Sending,
        }
    }

    /// Success clears the fields; failure keeps them so nothing has to be
    /// retyped. The error detail goes to the log only.
    pub fn resolved(&self, outcome: Result<(), RelayError>) -> Self {
        match outcome {
            Ok(()) => Self {
                draft: MessageDraft::default(),
                status: SubmitStatus::Sent,
            },
            Err(err) => {
                log::error!("contact relay failed: {err}");
                Self {
                    draft: self.draft.clone(),
                    status: SubmitStatus::Failed,
                }
            }
        }
    }
}

#[derive(Serialize)]
struct RelayRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: TemplateParams<'a>,
}

#[derive(Serialize)]
struct TemplateParams<'a> {
    from_name: &'a str,
    reply_to: &'a str,
    message: &'a str,
}

impl<'a> RelayRequest<'a> {
    fn for_draft(draft: &'a MessageDraft) -> Self {
        Self {
            service_id: RELAY_SERVICE_ID,
            template_id: RELAY_TEMPLATE_ID,
            user_id: RELAY_PUBLIC_KEY,
            template_params: TemplateParams {
                from_name: &draft.name,
                reply_to: &draft.email,
                message: &draft.message,
            },
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub async fn send(draft: &MessageDraft) -> Result<(), RelayError> {
    use gloo_net::http::Request;

    let response = Request::post(RELAY_ENDPOINT)
        .json(&RelayRequest::for_draft(draft))
        .map_err(|err| RelayError::Transport(err.to_string()))?
        .send()
        .await
        .map_err(|err| RelayError::Transport(err.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(RelayError::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> MessageDraft {
        MessageDraft {
            name: "Aisha".into(),
            email: "aisha@example.com".into(),
            message: "Hello".into(),
        }
    }

    #[test]
    fn draft_is_incomplete_until_every_field_is_filled() {
        let mut draft = MessageDraft::default();
        assert!(!draft.is_complete());
        draft.name = "Aisha".into();
        draft.email = "aisha@example.com".into();
        assert!(!draft.is_complete());
        draft.message = "   ".into();
        assert!(!draft.is_complete(), "whitespace does not count");
        draft.message = "Hello".into();
        assert!(draft.is_complete());
    }

    #[test]
    fn successful_relay_clears_the_fields() {
        let form = ContactForm::default()
            .with_draft(filled())
            .submitting()
            .resolved(Ok(()));
        assert_eq!(form.status, SubmitStatus::Sent);
        assert_eq!(form.draft, MessageDraft::default());
    }

    #[test]
    fn failed_relay_preserves_the_fields() {
        let form = ContactForm::default()
            .with_draft(filled())
            .submitting()
            .resolved(Err(RelayError::Rejected(500)));
        assert_eq!(form.status, SubmitStatus::Failed);
        assert_eq!(form.draft.name, "Aisha");
        assert_eq!(form.draft.email, "aisha@example.com");
        assert_eq!(form.draft.message, "Hello");
    }

    #[test]
    fn relay_request_carries_fixed_identifiers_and_the_draft() {
        let draft = filled();
        let body = serde_json::to_value(RelayRequest::for_draft(&draft)).unwrap();
        assert_eq!(body["service_id"], RELAY_SERVICE_ID);
        assert_eq!(body["template_id"], RELAY_TEMPLATE_ID);
        assert_eq!(body["user_id"], RELAY_PUBLIC_KEY);
        assert_eq!(body["template_params"]["from_name"], "Aisha");
        assert_eq!(body["template_params"]["reply_to"], "aisha@example.com");
        assert_eq!(body["template_params"]["message"], "Hello");
    }
}
