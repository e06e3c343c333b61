use std::fmt;

use crate::shared::image_ref::{ImageRef, ResultMapping};

/// Which mutually-exclusive operation currently holds the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Busy {
    #[default]
    Idle,
    Uploading,
    Classifying,
    Resetting,
}

impl fmt::Display for Busy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Busy::Idle => "idle",
            Busy::Uploading => "uploading",
            Busy::Classifying => "classifying",
            Busy::Resetting => "resetting",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

/// Transient outcome of the last settled operation. Replaced on every
/// settlement, cleared when the next operation starts, never
/// accumulated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            message: message.into(),
        }
    }
}

/// Single source of truth for everything a view renders: the cached
/// server collections, the latest result grouping, the busy flag and
/// the transient notice. The server copy is authoritative; this cache
/// is only ever replaced from fresh server reads, never patched image
/// by image.
#[derive(Debug, Clone, Default)]
pub struct OrchestrationState {
    pub reference: Vec<ImageRef>,
    pub dataset: Vec<ImageRef>,
    pub results: ResultMapping,
    pub busy: Busy,
    pub notice: Option<Notice>,
}

impl OrchestrationState {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        self.busy == Busy::Idle
    }

    /// Replaces all three server-derived sections at once.
    pub fn replace_all(
        &mut self,
        reference: Vec<ImageRef>,
        dataset: Vec<ImageRef>,
        results: ResultMapping,
    ) {
        self.reference = reference;
        self.dataset = dataset;
        self.results = results;
    }

    /// Drops every cached collection and result, as after a confirmed
    /// server-side reset.
    pub fn clear(&mut self) {
        self.reference.clear();
        self.dataset.clear();
        self.results.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_state_is_idle_with_nothing_cached() {
        let state = OrchestrationState::empty();
        assert!(state.is_idle());
        assert!(state.reference.is_empty());
        assert!(state.dataset.is_empty());
        assert!(state.results.is_empty());
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_clear_drops_collections_but_not_flags() {
        let mut state = OrchestrationState::empty();
        state.reference.push(ImageRef::new("a.jpg"));
        state.dataset.push(ImageRef::new("b.jpg"));
        state
            .results
            .insert("alice".to_string(), vec![ImageRef::new("b.jpg")]);
        state.busy = Busy::Resetting;
        state.notice = Some(Notice::success("done"));

        state.clear();

        assert!(state.reference.is_empty());
        assert!(state.dataset.is_empty());
        assert!(state.results.is_empty());
        assert_eq!(state.busy, Busy::Resetting);
        assert!(state.notice.is_some());
    }

    #[test]
    fn test_notice_constructors_carry_severity() {
        assert_eq!(Notice::success("ok").severity, Severity::Success);
        assert_eq!(Notice::error("no").severity, Severity::Error);
    }
}
