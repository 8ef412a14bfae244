//! Capture form for new records
//!
//! Validation is input gating only: an incomplete form simply refuses to
//! submit, it never reports an error.

use chrono::NaiveDate;

use super::types::{Candidate, Details, RecordType};
use crate::utils::debug_enabled;

#[derive(Debug, Clone, Default)]
pub(crate) struct CaptureForm {
    pub(crate) record_type: Option<RecordType>,
    pub(crate) title: String,
    pub(crate) date: Option<NaiveDate>,
    pub(crate) description: String,
}

impl CaptureForm {
    /// Whether the submit action is enabled
    pub(crate) fn can_submit(&self) -> bool {
        self.record_type.is_some() && !self.title.trim().is_empty() && self.date.is_some()
    }

    /// Build the candidate for the current field values, if complete
    pub(crate) fn candidate(&self) -> Option<Candidate> {
        if !self.can_submit() {
            return None;
        }
        Some(Candidate {
            record_type: self.record_type?,
            title: self.title.trim().to_string(),
            date: self.date?,
            description: (!self.description.trim().is_empty())
                .then(|| self.description.clone()),
            details: Details::default(),
        })
    }

    /// Submit the form. On success `on_add` is called exactly once and the
    /// fields are cleared; the selected type is left to the caller.
    pub(crate) fn submit<F: FnOnce(Candidate)>(&mut self, on_add: F) -> bool {
        let Some(candidate) = self.candidate() else {
            if debug_enabled() {
                eprintln!("[debug] form submission ignored: title or date missing");
            }
            return false;
        };
        on_add(candidate);
        self.clear_fields();
        true
    }

    pub(crate) fn clear_fields(&mut self) {
        self.title.clear();
        self.date = None;
        self.description.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn filled(title: &str, d: Option<&str>) -> CaptureForm {
        CaptureForm {
            record_type: Some(RecordType::Operation),
            title: title.to_string(),
            date: d.map(date),
            description: String::new(),
        }
    }

    #[test]
    fn submit_emits_one_candidate_with_empty_details() {
        let mut form = filled("  Knee surgery ", Some("2024-03-15"));
        form.description = "Meniscus".to_string();
        let mut emitted = Vec::new();
        assert!(form.submit(|c| emitted.push(c)));
        assert_eq!(emitted.len(), 1);
        let c = &emitted[0];
        assert_eq!(c.record_type, RecordType::Operation);
        assert_eq!(c.title, "Knee surgery");
        assert_eq!(c.date, date("2024-03-15"));
        assert_eq!(c.description.as_deref(), Some("Meniscus"));
        assert!(c.details.is_empty());
    }

    #[test]
    fn submit_clears_fields_but_keeps_type() {
        let mut form = filled("X-ray", Some("2024-01-02"));
        form.description = "left hand".to_string();
        assert!(form.submit(|_| {}));
        assert!(form.title.is_empty());
        assert!(form.date.is_none());
        assert!(form.description.is_empty());
        assert_eq!(form.record_type, Some(RecordType::Operation));
    }

    #[test]
    fn empty_title_is_rejected() {
        let mut form = filled("", Some("2024-01-02"));
        let mut calls = 0;
        assert!(!form.submit(|_| calls += 1));
        assert_eq!(calls, 0);
    }

    #[test]
    fn whitespace_title_is_rejected() {
        let form = filled("   ", Some("2024-01-02"));
        assert!(!form.can_submit());
        assert!(form.candidate().is_none());
    }

    #[test]
    fn missing_date_is_rejected_and_fields_kept() {
        let mut form = filled("Ibuprofen", None);
        let mut calls = 0;
        assert!(!form.submit(|_| calls += 1));
        assert_eq!(calls, 0);
        assert_eq!(form.title, "Ibuprofen");
    }

    #[test]
    fn missing_type_is_rejected() {
        let form = CaptureForm {
            title: "Report".to_string(),
            date: Some(date("2024-01-02")),
            ..Default::default()
        };
        assert!(!form.can_submit());
    }

    #[test]
    fn description_kept_as_entered() {
        let mut form = filled("Report", Some("2024-01-02"));
        form.description = " left knee, follow-up ".to_string();
        let c = form.candidate().unwrap();
        assert_eq!(c.description.as_deref(), Some(" left knee, follow-up "));
    }

    #[test]
    fn blank_description_becomes_none() {
        let mut form = filled("Report", Some("2024-01-02"));
        form.description = "  ".to_string();
        let c = form.candidate().unwrap();
        assert!(c.description.is_none());
    }
}
