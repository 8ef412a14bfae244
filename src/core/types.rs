//! Core data types for medical timeline records
//!
//! A record's type only drives presentation; all structural behavior keys off
//! the date.

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::consts::DATE_FORMAT;
use crate::error::AppError;

/// Closed set of record kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum RecordType {
    Operation,
    Medication,
    Rehabilitation,
    Document,
}

/// Display tone, mapped to a terminal color by the output layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Tone {
    Primary,
    Accent,
    Success,
    Muted,
}

/// Per-type display metadata
#[derive(Debug)]
pub(crate) struct TypeMeta {
    pub(crate) key: &'static str,
    pub(crate) icon: &'static str,
    pub(crate) tone: Tone,
    pub(crate) label_en: &'static str,
    pub(crate) label_cs: &'static str,
    pub(crate) add_label_en: &'static str,
    pub(crate) add_label_cs: &'static str,
}

/// Indexed by `RecordType as usize`
static TYPE_META: [TypeMeta; 4] = [
    TypeMeta {
        key: "operation",
        icon: "✚",
        tone: Tone::Primary,
        label_en: "Operation",
        label_cs: "Operace",
        add_label_en: "Add operation",
        add_label_cs: "Přidat operaci",
    },
    TypeMeta {
        key: "medication",
        icon: "℞",
        tone: Tone::Accent,
        label_en: "Medication",
        label_cs: "Lék",
        add_label_en: "Add medication",
        add_label_cs: "Přidat lék",
    },
    TypeMeta {
        key: "rehabilitation",
        icon: "↻",
        tone: Tone::Success,
        label_en: "Rehabilitation",
        label_cs: "Rehabilitace",
        add_label_en: "Add rehabilitation",
        add_label_cs: "Přidat rehabilitaci",
    },
    TypeMeta {
        key: "document",
        icon: "▤",
        tone: Tone::Muted,
        label_en: "Document",
        label_cs: "Dokument",
        add_label_en: "Add document",
        add_label_cs: "Přidat dokument",
    },
];

impl RecordType {
    pub(crate) const ALL: [RecordType; 4] = [
        RecordType::Operation,
        RecordType::Medication,
        RecordType::Rehabilitation,
        RecordType::Document,
    ];

    pub(crate) fn meta(self) -> &'static TypeMeta {
        &TYPE_META[self as usize]
    }

    pub(crate) fn key(self) -> &'static str {
        self.meta().key
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RecordType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        RecordType::ALL
            .into_iter()
            .find(|t| t.key().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| AppError::UnknownRecordType {
                input: trimmed.to_string(),
            })
    }
}

/// Session-unique record identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub(crate) struct RecordId(pub(crate) u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single informational detail value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub(crate) enum DetailValue {
    Text(String),
    Number(i64),
}

impl fmt::Display for DetailValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DetailValue::Text(s) => f.write_str(s),
            DetailValue::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for DetailValue {
    fn from(s: &str) -> Self {
        DetailValue::Text(s.to_string())
    }
}

impl From<i64> for DetailValue {
    fn from(n: i64) -> Self {
        DetailValue::Number(n)
    }
}

/// Free-form details keyed by name, kept in insertion order
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct Details {
    entries: Vec<(String, DetailValue)>,
}

impl Details {
    /// Insert or replace; a replaced key keeps its slot.
    pub(crate) fn insert(&mut self, key: impl Into<String>, value: impl Into<DetailValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&str, &DetailValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for Details {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

fn serialize_date<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&date.format(DATE_FORMAT))
}

/// Record payload before an id is assigned
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) record_type: RecordType,
    pub(crate) title: String,
    pub(crate) date: NaiveDate,
    pub(crate) description: Option<String>,
    pub(crate) details: Details,
}

/// A single timeline entry
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct Record {
    pub(crate) id: RecordId,
    #[serde(rename = "type")]
    pub(crate) record_type: RecordType,
    pub(crate) title: String,
    #[serde(serialize_with = "serialize_date")]
    pub(crate) date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) description: Option<String>,
    pub(crate) details: Details,
}

impl Record {
    pub(crate) fn from_candidate(id: RecordId, candidate: Candidate) -> Self {
        Record {
            id,
            record_type: candidate.record_type,
            title: candidate.title,
            date: candidate.date,
            description: candidate.description,
            details: candidate.details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meta_table_matches_variants() {
        for t in RecordType::ALL {
            assert_eq!(t.meta().key, t.to_string());
        }
    }

    #[test]
    fn record_type_parses_case_insensitive() {
        assert_eq!(
            "Medication".parse::<RecordType>().unwrap(),
            RecordType::Medication
        );
        assert_eq!(
            " document ".parse::<RecordType>().unwrap(),
            RecordType::Document
        );
    }

    #[test]
    fn record_type_unknown_is_error() {
        let err = "surgery".parse::<RecordType>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown record type: surgery");
    }

    #[test]
    fn details_keep_insertion_order() {
        let mut d = Details::default();
        d.insert("hospital", "Homolka");
        d.insert("doctor", "Novák");
        d.insert("hospital", "Motol");
        let keys: Vec<_> = d.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["hospital", "doctor"]);
        assert_eq!(d.iter().next().unwrap().1.to_string(), "Motol");
    }

    #[test]
    fn record_serializes_type_and_date() {
        let mut details = Details::default();
        details.insert("sessions", 10_i64);
        let record = Record {
            id: RecordId(7),
            record_type: RecordType::Rehabilitation,
            title: "Knee rehab".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 4, 1).unwrap(),
            description: None,
            details,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["type"], "rehabilitation");
        assert_eq!(json["date"], "2024-04-01");
        assert_eq!(json["details"]["sessions"], 10);
        assert!(json.get("description").is_none());
    }
}
