use std::fmt::Write;

use crate::consts::DATE_FORMAT;
use crate::core::{Record, RecordType, Timeline};
use crate::output::format::Locale;

const TIMELINE_HEADER: &str = "year,month,date,id,type,title,description,details";
const LIST_HEADER: &str = "id,date,type,title,description,details";

fn csv_escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') || s.contains('\r') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// `key=value` pairs joined with `; `
fn details_field(record: &Record) -> String {
    let joined = record
        .details
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("; ");
    csv_escape(&joined)
}

/// Columns shared by every record row, after `id` and `date`
fn record_fields(record: &Record) -> String {
    format!(
        "{},{},{},{}",
        record.record_type,
        csv_escape(&record.title),
        csv_escape(record.description.as_deref().unwrap_or("")),
        details_field(record),
    )
}

/// One row per record, in timeline order, tagged with its bucket
pub(crate) fn output_timeline_csv(timeline: &Timeline<'_>) -> String {
    let mut out = format!("{TIMELINE_HEADER}\n");
    for bucket in timeline.buckets() {
        for record in &bucket.records {
            let _ = writeln!(
                out,
                "{},{},{},{},{}",
                bucket.year,
                bucket.month,
                record.date.format(DATE_FORMAT),
                record.id,
                record_fields(record)
            );
        }
    }
    out
}

/// Flat date-descending list, one row per record
pub(crate) fn output_list_csv(records: &[Record]) -> String {
    let mut out = format!("{LIST_HEADER}\n");
    for record in records {
        let _ = writeln!(
            out,
            "{},{},{}",
            record.id,
            record.date.format(DATE_FORMAT),
            record_fields(record)
        );
    }
    out
}

pub(crate) fn output_types_csv(locale: Locale) -> String {
    let mut out = String::from("key,icon,label,add_label\n");
    for t in RecordType::ALL {
        let _ = writeln!(
            out,
            "{},{},{},{}",
            t.key(),
            t.meta().icon,
            csv_escape(locale.type_label(t)),
            csv_escape(locale.add_label(t)),
        );
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordStore;

    #[test]
    fn csv_escape_quotes_special_chars() {
        assert_eq!(csv_escape("plain"), "plain");
        assert_eq!(csv_escape("a,b"), "\"a,b\"");
        assert_eq!(csv_escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn timeline_csv_rows_follow_buckets() {
        let store = RecordStore::seeded();
        let csv = output_timeline_csv(&Timeline::build(store.list()));
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], TIMELINE_HEADER);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("2024,4,2024-04-01,3,rehabilitation,"));
        assert!(lines[2].starts_with("2024,3,2024-03-16,2,medication,"));
        assert!(lines[3].starts_with("2024,3,2024-03-15,1,operation,"));
    }

    #[test]
    fn timeline_csv_carries_details() {
        let store = RecordStore::seeded();
        let csv = output_timeline_csv(&Timeline::build(store.list()));
        let rehab = csv.lines().nth(1).unwrap();
        assert!(rehab.ends_with(",facility=FyzioKlinika Praha; sessions=10"));
        let operation = csv.lines().nth(3).unwrap();
        assert!(operation.ends_with(",hospital=Nemocnice Na Homolce; doctor=MUDr. Novák"));
    }

    #[test]
    fn empty_timeline_csv_is_header_only() {
        let csv = output_timeline_csv(&Timeline::build(&[]));
        assert_eq!(csv, format!("{TIMELINE_HEADER}\n"));
    }

    #[test]
    fn list_csv_is_date_descending_with_ids_first() {
        let store = RecordStore::seeded();
        let csv = output_list_csv(store.list());
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines[0], LIST_HEADER);
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("3,2024-04-01,rehabilitation,Rehabilitace kolene,"));
        assert!(lines[3].starts_with("1,2024-03-15,operation,"));
    }

    #[test]
    fn types_csv_lists_every_type() {
        let csv = output_types_csv(Locale::Cs);
        let lines: Vec<_> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[1], "operation,✚,Operace,Přidat operaci");
    }
}
