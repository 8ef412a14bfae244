//! Top-level application state: the store plus the add-record dialog

use super::form::CaptureForm;
use super::store::RecordStore;
use super::types::{RecordId, RecordType};

#[derive(Debug, Clone, Default)]
pub(crate) struct Dashboard {
    store: RecordStore,
    form: CaptureForm,
    dialog_open: bool,
}

impl Dashboard {
    pub(crate) fn new(store: RecordStore) -> Self {
        Dashboard {
            store,
            form: CaptureForm::default(),
            dialog_open: false,
        }
    }

    pub(crate) fn store(&self) -> &RecordStore {
        &self.store
    }

    pub(crate) fn selected_type(&self) -> Option<RecordType> {
        self.form.record_type
    }

    pub(crate) fn is_dialog_open(&self) -> bool {
        self.dialog_open
    }

    /// Form fields are editable only while the dialog is open
    pub(crate) fn form_mut(&mut self) -> Option<&mut CaptureForm> {
        self.dialog_open.then_some(&mut self.form)
    }

    pub(crate) fn form(&self) -> &CaptureForm {
        &self.form
    }

    pub(crate) fn open_add_dialog(&mut self, record_type: RecordType) {
        self.form.record_type = Some(record_type);
        self.dialog_open = true;
    }

    /// Close without submitting. Typed fields survive until the next submit.
    pub(crate) fn close_dialog(&mut self) {
        self.dialog_open = false;
        self.form.record_type = None;
    }

    /// Submit the dialog's form into the store
    pub(crate) fn submit_dialog(&mut self) -> Option<RecordId> {
        if !self.dialog_open {
            return None;
        }
        let store = &mut self.store;
        let mut added = None;
        if self.form.submit(|candidate| added = Some(store.add(candidate).id)) {
            self.close_dialog();
        }
        added
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fill(dashboard: &mut Dashboard, title: &str, date: Option<&str>) {
        let form = dashboard.form_mut().unwrap();
        form.title = title.to_string();
        form.date = date.map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap());
    }

    #[test]
    fn open_sets_selected_type() {
        let mut d = Dashboard::new(RecordStore::new());
        assert!(!d.is_dialog_open());
        d.open_add_dialog(RecordType::Document);
        assert!(d.is_dialog_open());
        assert_eq!(d.selected_type(), Some(RecordType::Document));
    }

    #[test]
    fn submit_adds_and_closes() {
        let mut d = Dashboard::new(RecordStore::seeded());
        d.open_add_dialog(RecordType::Medication);
        fill(&mut d, "Paracetamol", Some("2024-05-02"));
        let id = d.submit_dialog().unwrap();
        assert_eq!(d.store().len(), 4);
        assert_eq!(d.store().list()[0].id, id);
        assert!(!d.is_dialog_open());
        assert_eq!(d.selected_type(), None);
        assert!(d.form().title.is_empty());
    }

    #[test]
    fn incomplete_submit_keeps_dialog_open() {
        let mut d = Dashboard::new(RecordStore::new());
        d.open_add_dialog(RecordType::Operation);
        fill(&mut d, "Appendectomy", None);
        assert!(d.submit_dialog().is_none());
        assert!(d.store().is_empty());
        assert!(d.is_dialog_open());
    }

    #[test]
    fn submit_without_open_dialog_is_noop() {
        let mut d = Dashboard::new(RecordStore::new());
        assert!(d.form_mut().is_none());
        assert!(d.submit_dialog().is_none());
    }

    #[test]
    fn close_clears_type_keeps_fields() {
        let mut d = Dashboard::new(RecordStore::new());
        d.open_add_dialog(RecordType::Operation);
        fill(&mut d, "Draft", None);
        d.close_dialog();
        assert_eq!(d.selected_type(), None);
        assert_eq!(d.form().title, "Draft");
    }
}
