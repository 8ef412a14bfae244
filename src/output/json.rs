use serde::Serialize;

use crate::core::{Record, RecordType, Timeline};
use crate::output::format::Locale;

#[derive(Serialize)]
struct BucketJson<'a> {
    year: i32,
    month: u32,
    label: String,
    records: &'a [&'a Record],
}

#[derive(Serialize)]
struct TimelineJson<'a> {
    empty: bool,
    total: usize,
    buckets: Vec<BucketJson<'a>>,
}

#[derive(Serialize)]
struct TypeJson {
    key: &'static str,
    icon: &'static str,
    label: &'static str,
    add_label: &'static str,
}

fn to_pretty<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| "null".to_string())
}

pub(crate) fn output_timeline_json(timeline: &Timeline<'_>, locale: Locale) -> String {
    let buckets = timeline
        .buckets()
        .iter()
        .map(|b| BucketJson {
            year: b.year,
            month: b.month,
            label: locale.bucket_label(b.year, b.month),
            records: &b.records,
        })
        .collect();
    to_pretty(&TimelineJson {
        empty: timeline.is_empty(),
        total: timeline.total(),
        buckets,
    })
}

pub(crate) fn output_list_json(records: &[Record]) -> String {
    to_pretty(&records)
}

pub(crate) fn output_types_json(locale: Locale) -> String {
    let types: Vec<_> = RecordType::ALL
        .into_iter()
        .map(|t| TypeJson {
            key: t.key(),
            icon: t.meta().icon,
            label: locale.type_label(t),
            add_label: locale.add_label(t),
        })
        .collect();
    to_pretty(&types)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::RecordStore;
    use serde_json::Value;

    #[test]
    fn timeline_json_shape() {
        let store = RecordStore::seeded();
        let timeline = Timeline::build(store.list());
        let rendered = output_timeline_json(&timeline, Locale::En);
        let json: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["empty"], false);
        assert_eq!(json["total"], 3);
        let buckets = json["buckets"].as_array().unwrap();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0]["label"], "April 2024");
        assert_eq!(buckets[1]["month"], 3);
        let march = buckets[1]["records"].as_array().unwrap();
        assert_eq!(march[0]["date"], "2024-03-16");
        assert_eq!(march[1]["date"], "2024-03-15");
        assert_eq!(march[1]["details"]["doctor"], "MUDr. Novák");
    }

    #[test]
    fn empty_timeline_json_flags_empty_state() {
        let rendered = output_timeline_json(&Timeline::build(&[]), Locale::En);
        let json: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(json["empty"], true);
        assert_eq!(json["total"], 0);
        assert!(json["buckets"].as_array().unwrap().is_empty());
    }

    #[test]
    fn types_json_localized() {
        let json: Value = serde_json::from_str(&output_types_json(Locale::Cs)).unwrap();
        let arr = json.as_array().unwrap();
        assert_eq!(arr.len(), 4);
        assert_eq!(arr[0]["key"], "operation");
        assert_eq!(arr[0]["label"], "Operace");
    }

    #[test]
    fn list_json_is_date_descending() {
        let store = RecordStore::seeded();
        let json: Value = serde_json::from_str(&output_list_json(store.list())).unwrap();
        let ids: Vec<_> = json
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![3, 2, 1]);
    }
}
