//! Section identifiers and viewport-visibility tracking.
//!
//! The page is three fixed scrollable regions. An intersection observer on
//! the browser side reports which regions cross [`VISIBILITY_THRESHOLD`];
//! the state transitions themselves live here so they stay testable off the
//! wasm target.

/// Fraction of a region's area that must be in the viewport before it
/// counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    Home,
    Projects,
    Contact,
}

impl Section {
    /// Document order, top of the page first.
    pub const ALL: [Section; 3] = [Self::Home, Self::Projects, Self::Contact];

    /// The DOM id of the region this section renders into.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "home" => Some(Self::Home),
            "projects" => Some(Self::Projects),
            "contact" => Some(Self::Contact),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Home => 0,
            Self::Projects => 1,
            Self::Contact => 2,
        }
    }
}

/// Per-section intersection status. Keyed by section index, so no entry
/// outside the fixed set can ever exist and entries are never removed.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct VisibilityMap {
    flags: [bool; Section::ALL.len()],
}

impl VisibilityMap {
    pub fn is_visible(self, section: Section) -> bool {
        self.flags[section.index()]
    }

    fn set(&mut self, section: Section, visible: bool) {
        self.flags[section.index()] = visible;
    }
}

/// One observer entry: a region whose intersection status just crossed the
/// watched threshold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Observation {
    pub section: Section,
    pub intersecting: bool,
}

/// Tracker state: the visibility map plus the derived active section.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TrackerState {
    pub visibility: VisibilityMap,
    pub active: Section,
}

impl Default for TrackerState {
    fn default() -> Self {
        Self {
            visibility: VisibilityMap::default(),
            active: Section::Home,
        }
    }
}

impl TrackerState {
    /// Fold one observation batch into the state. Every entry updates the
    /// visibility map; among entries that became intersecting, the topmost
    /// section in document order wins the active slot, so a batch carrying
    /// several transitions resolves the same way every time.
    pub fn observe(&self, batch: &[Observation]) -> Self {
        let mut next = *self;
        for observation in batch {
            next.visibility
                .set(observation.section, observation.intersecting);
        }
        for section in Section::ALL {
            if batch
                .iter()
                .any(|o| o.section == section && o.intersecting)
            {
                next.active = section;
                break;
            }
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(section: Section) -> Observation {
        Observation {
            section,
            intersecting: true,
        }
    }

    fn gone(section: Section) -> Observation {
        Observation {
            section,
            intersecting: false,
        }
    }

    #[test]
    fn section_ids_round_trip() {
        for section in Section::ALL {
            assert_eq!(Section::from_str(section.as_str()), Some(section));
        }
        assert_eq!(Section::from_str("about"), None);
    }

    #[test]
    fn starts_on_home_with_nothing_visible() {
        let state = TrackerState::default();
        assert_eq!(state.active, Section::Home);
        for section in Section::ALL {
            assert!(!state.visibility.is_visible(section));
        }
    }

    #[test]
    fn intersecting_section_becomes_active() {
        let state = TrackerState::default().observe(&[seen(Section::Projects)]);
        assert_eq!(state.active, Section::Projects);
        assert!(state.visibility.is_visible(Section::Projects));
        assert!(!state.visibility.is_visible(Section::Home));
    }

    #[test]
    fn leaving_a_section_keeps_the_last_active() {
        let state = TrackerState::default()
            .observe(&[seen(Section::Contact)])
            .observe(&[gone(Section::Contact)]);
        assert_eq!(state.active, Section::Contact);
        assert!(!state.visibility.is_visible(Section::Contact));
    }

    #[test]
    fn visibility_updates_are_incremental() {
        let state = TrackerState::default()
            .observe(&[seen(Section::Home)])
            .observe(&[seen(Section::Projects)]);
        assert!(state.visibility.is_visible(Section::Home));
        assert!(state.visibility.is_visible(Section::Projects));
    }

    #[test]
    fn simultaneous_transitions_resolve_to_the_topmost_section() {
        // Fast programmatic scroll can put two regions in one batch; the
        // tie-break must not depend on entry order.
        let forward = TrackerState::default()
            .observe(&[seen(Section::Home), seen(Section::Projects)]);
        let reverse = TrackerState::default()
            .observe(&[seen(Section::Projects), seen(Section::Home)]);
        assert_eq!(forward.active, Section::Home);
        assert_eq!(reverse.active, Section::Home);
    }

    #[test]
    fn batch_with_only_departures_leaves_active_untouched() {
        let state = TrackerState::default()
            .observe(&[seen(Section::Projects)])
            .observe(&[gone(Section::Home), gone(Section::Projects)]);
        assert_eq!(state.active, Section::Projects);
    }
}
