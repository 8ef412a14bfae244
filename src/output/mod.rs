mod csv;
mod format;
mod json;
mod table;

pub(crate) use csv::{output_list_csv, output_timeline_csv, output_types_csv};
pub(crate) use format::Locale;
pub(crate) use json::{output_list_json, output_timeline_json, output_types_json};
pub(crate) use table::{TableOptions, render_list, render_timeline, render_types};
