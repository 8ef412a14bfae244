//! Core module - record model, store, capture form and timeline grouping

mod dashboard;
mod form;
mod store;
mod timeline;
mod types;

pub(crate) use dashboard::Dashboard;
pub(crate) use form::CaptureForm;
pub(crate) use store::RecordStore;
pub(crate) use timeline::Timeline;
pub(crate) use types::{Record, RecordId, RecordType, Tone};
