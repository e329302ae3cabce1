//! Page-level UI state.
//!
//! The search term, which modal is open and which forms are expanded are held
//! in one immutable value. Every interaction returns a new [`UiState`]; the
//! renderers read it and never touch anything else.

use crate::types::EventId;
use crate::validation::{EventForm, InquiryForm};

/// Sponsor modal bound to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SponsorModal {
    pub event_id: EventId,
    /// Amount as typed; empty when the modal has just been opened.
    pub amount: String,
}

/// Inline inquiry form expanded under one event card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenInquiry {
    pub event_id: EventId,
    pub draft: InquiryForm,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    /// Raw sponsor search box value.
    pub search_term: String,
    /// Create-event form; `Some` while expanded, holding what was typed.
    pub create_form: Option<EventForm>,
    pub sponsor_modal: Option<SponsorModal>,
    /// At most one inquiry form is open at a time.
    pub inquiry_form: Option<OpenInquiry>,
}

impl UiState {
    pub fn with_search(self, term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..self
        }
    }

    pub fn is_create_form_open(&self) -> bool {
        self.create_form.is_some()
    }

    /// Expand an empty create form, or collapse it if already expanded.
    pub fn toggle_create_form(self) -> Self {
        let create_form = match self.create_form {
            Some(_) => None,
            None => Some(EventForm::default()),
        };
        Self {
            create_form,
            ..self
        }
    }

    /// Keep the create form open with the values the user typed.
    pub fn with_create_draft(self, draft: EventForm) -> Self {
        Self {
            create_form: Some(draft),
            ..self
        }
    }

    pub fn close_create_form(self) -> Self {
        Self {
            create_form: None,
            ..self
        }
    }

    /// Open the sponsor modal for `event_id` with a cleared amount.
    pub fn open_sponsor_modal(self, event_id: impl Into<EventId>) -> Self {
        Self {
            sponsor_modal: Some(SponsorModal {
                event_id: event_id.into(),
                amount: String::new(),
            }),
            ..self
        }
    }

    /// Keep the modal open after a rejected amount.
    pub fn with_sponsor_amount(self, event_id: impl Into<EventId>, amount: impl Into<String>) -> Self {
        Self {
            sponsor_modal: Some(SponsorModal {
                event_id: event_id.into(),
                amount: amount.into(),
            }),
            ..self
        }
    }

    pub fn close_sponsor_modal(self) -> Self {
        Self {
            sponsor_modal: None,
            ..self
        }
    }

    /// Toggle the inquiry form for `event_id`; any other open form closes.
    pub fn toggle_inquiry_form(self, event_id: impl Into<EventId>) -> Self {
        let event_id = event_id.into();
        let inquiry_form = match self.inquiry_form {
            Some(ref open) if open.event_id == event_id => None,
            _ => Some(OpenInquiry {
                event_id,
                draft: InquiryForm::default(),
            }),
        };
        Self {
            inquiry_form,
            ..self
        }
    }

    /// Keep the inquiry form for `event_id` open with the typed values.
    pub fn with_inquiry_draft(self, event_id: impl Into<EventId>, draft: InquiryForm) -> Self {
        Self {
            inquiry_form: Some(OpenInquiry {
                event_id: event_id.into(),
                draft,
            }),
            ..self
        }
    }

    pub fn close_inquiry_form(self) -> Self {
        Self {
            inquiry_form: None,
            ..self
        }
    }

    /// Draft for the inquiry form under `event_id`, if that form is open.
    pub fn inquiry_draft_for(&self, event_id: &str) -> Option<&InquiryForm> {
        self.inquiry_form
            .as_ref()
            .filter(|open| open.event_id == event_id)
            .map(|open| &open.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_form_toggles() {
        let ui = UiState::default().toggle_create_form();
        assert!(ui.is_create_form_open());
        assert!(!ui.toggle_create_form().is_create_form_open());
    }

    #[test]
    fn opening_modal_clears_amount() {
        let ui = UiState::default()
            .with_sponsor_amount("1", "-5")
            .open_sponsor_modal("2");

        let modal = ui.sponsor_modal.unwrap();
        assert_eq!(modal.event_id, "2");
        assert!(modal.amount.is_empty());
    }

    #[test]
    fn only_one_inquiry_form_is_open() {
        let ui = UiState::default()
            .toggle_inquiry_form("1")
            .toggle_inquiry_form("2");

        assert!(ui.inquiry_draft_for("1").is_none());
        assert!(ui.inquiry_draft_for("2").is_some());
    }

    #[test]
    fn toggling_same_inquiry_form_closes_it() {
        let ui = UiState::default()
            .toggle_inquiry_form("1")
            .toggle_inquiry_form("1");
        assert!(ui.inquiry_form.is_none());
    }

    #[test]
    fn transitions_preserve_search_term() {
        let ui = UiState::default()
            .with_search("tech")
            .open_sponsor_modal("1")
            .close_sponsor_modal();
        assert_eq!(ui.search_term, "tech");
    }
}
