use comfy_table::{Attribute, Cell, Color, Table};
use std::fmt::Write;

use crate::consts::EMPTY_CELL;
use crate::core::{Record, RecordStore, RecordType, Timeline};
use crate::output::format::{
    Locale, create_styled_table, header_cell, styled_cell, tone_color, type_cell,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct TableOptions {
    pub(crate) use_color: bool,
    pub(crate) compact: bool,
    pub(crate) locale: Locale,
}

fn details_text(record: &Record) -> String {
    record
        .details
        .iter()
        .map(|(k, v)| format!("{k}: {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn build_header(opts: &TableOptions, with_id: bool) -> Vec<Cell> {
    let c = opts.use_color;
    let mut h = Vec::new();
    if with_id {
        h.push(header_cell("ID", c));
    }
    h.extend([
        header_cell("Date", c),
        header_cell("Type", c),
        header_cell("Title", c),
    ]);
    if !opts.compact {
        h.extend([header_cell("Description", c), header_cell("Details", c)]);
    }
    h
}

fn add_record_row(table: &mut Table, record: &Record, opts: &TableOptions, with_id: bool) {
    let mut row = Vec::new();
    if with_id {
        row.push(Cell::new(record.id));
    }
    row.extend([
        Cell::new(opts.locale.format_date(record.date)),
        type_cell(record.record_type, opts.locale, opts.use_color),
        styled_cell(&record.title, None, true),
    ]);
    if !opts.compact {
        let details = if record.details.is_empty() {
            EMPTY_CELL.to_string()
        } else {
            details_text(record)
        };
        row.extend([
            Cell::new(record.description.as_deref().unwrap_or(EMPTY_CELL)),
            Cell::new(details),
        ]);
    }
    table.add_row(row);
}

fn records_table<'a>(
    records: impl IntoIterator<Item = &'a Record>,
    opts: &TableOptions,
    with_id: bool,
) -> Table {
    let mut table = create_styled_table();
    table.set_header(build_header(opts, with_id));
    for record in records {
        add_record_row(&mut table, record, opts, with_id);
    }
    table
}

fn bucket_heading(text: &str, use_color: bool) -> String {
    if use_color {
        format!("\x1b[1;36m{text}\x1b[0m")
    } else {
        text.to_string()
    }
}

/// Render the grouped timeline: a heading and a table per month
pub(crate) fn render_timeline(timeline: &Timeline<'_>, opts: TableOptions) -> String {
    let mut out = String::new();
    if timeline.is_empty() {
        let _ = writeln!(out, "\n  {}\n", opts.locale.empty_message());
        return out;
    }

    let _ = writeln!(
        out,
        "\n  {}\n",
        bucket_heading(opts.locale.timeline_heading(), opts.use_color)
    );
    for bucket in timeline.buckets() {
        let label = opts.locale.bucket_label(bucket.year, bucket.month);
        let _ = writeln!(out, "  {}", bucket_heading(&label, opts.use_color));
        let table = records_table(bucket.records.iter().copied(), &opts, false);
        let _ = writeln!(out, "{table}\n");
    }
    let _ = writeln!(out, "  {} record(s)", timeline.total());
    out
}

/// Render the flat, date-descending list
pub(crate) fn render_list(store: &RecordStore, opts: TableOptions) -> String {
    if store.is_empty() {
        return format!("\n  {}\n", opts.locale.empty_message());
    }
    format!("{}\n", records_table(store.list(), &opts, true))
}

/// Render the record type lookup table (the quick-add buttons)
pub(crate) fn render_types(opts: TableOptions) -> String {
    let c = opts.use_color;
    let mut table = create_styled_table();
    table.set_header(vec![
        header_cell("Key", c),
        header_cell("Icon", c),
        header_cell("Label", c),
        header_cell("Action", c),
    ]);
    for t in RecordType::ALL {
        let meta = t.meta();
        let color: Option<Color> = c.then(|| tone_color(meta.tone));
        table.add_row(vec![
            Cell::new(meta.key).add_attribute(Attribute::Bold),
            styled_cell(meta.icon, color, false),
            styled_cell(opts.locale.type_label(t), color, false),
            Cell::new(opts.locale.add_label(t)),
        ]);
    }
    format!("{table}\n")
}
