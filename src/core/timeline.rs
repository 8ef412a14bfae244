//! Year/month grouping for the timeline view
//!
//! Buckets are ordered newest first. Records inside a bucket keep the order
//! they were passed in, which the store already keeps date-descending.

use chrono::Datelike;
use std::collections::BTreeMap;

use super::types::Record;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Bucket<'a> {
    pub(crate) year: i32,
    /// One-indexed (1 = January)
    pub(crate) month: u32,
    pub(crate) records: Vec<&'a Record>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Timeline<'a> {
    Empty,
    Buckets(Vec<Bucket<'a>>),
}

fn bucket_key(record: &Record) -> (i32, u32) {
    (record.date.year(), record.date.month())
}

impl<'a> Timeline<'a> {
    pub(crate) fn build(records: &'a [Record]) -> Self {
        if records.is_empty() {
            return Timeline::Empty;
        }

        let mut grouped: BTreeMap<(i32, u32), Vec<&'a Record>> = BTreeMap::new();
        for record in records {
            grouped.entry(bucket_key(record)).or_default().push(record);
        }

        let buckets = grouped
            .into_iter()
            .rev()
            .map(|((year, month), records)| Bucket {
                year,
                month,
                records,
            })
            .collect();
        Timeline::Buckets(buckets)
    }

    pub(crate) fn buckets(&self) -> &[Bucket<'a>] {
        match self {
            Timeline::Empty => &[],
            Timeline::Buckets(b) => b,
        }
    }

    pub(crate) fn is_empty(&self) -> bool {
        matches!(self, Timeline::Empty)
    }

    pub(crate) fn total(&self) -> usize {
        self.buckets().iter().map(|b| b.records.len()).sum()
    }
}
