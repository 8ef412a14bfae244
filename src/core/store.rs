//! In-memory record store
//!
//! The store is the single owner of the record collection and exposes one
//! mutation, [`RecordStore::add`]. The collection is kept date-descending.

use chrono::NaiveDate;

use super::types::{Candidate, Details, Record, RecordId, RecordType};
use crate::utils::debug_enabled;

/// Monotonic id source, unique for the lifetime of the store
#[derive(Debug, Clone)]
pub(crate) struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub(crate) fn starting_at(next: u64) -> Self {
        IdGenerator { next }
    }

    pub(crate) fn next_id(&mut self) -> RecordId {
        let id = RecordId(self.next);
        self.next += 1;
        id
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        IdGenerator::starting_at(1)
    }
}

#[derive(Debug, Clone, Default)]
pub(crate) struct RecordStore {
    records: Vec<Record>,
    ids: IdGenerator,
}

impl RecordStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the example records shown on first start
    pub(crate) fn seeded() -> Self {
        let mut store = RecordStore::new();
        for candidate in seed_candidates() {
            store.add(candidate);
        }
        store
    }

    /// Assign a fresh id, insert, and re-sort by date descending.
    pub(crate) fn add(&mut self, candidate: Candidate) -> &Record {
        let id = self.ids.next_id();
        self.records.push(Record::from_candidate(id, candidate));
        // Stable sort: equal dates keep insertion order.
        self.records.sort_by(|a, b| b.date.cmp(&a.date));

        if debug_enabled() {
            eprintln!("[debug] added record {id}, {} total", self.len());
        }

        // The id was just inserted, so the lookup cannot miss.
        let pos = self
            .records
            .iter()
            .position(|r| r.id == id)
            .unwrap_or(self.records.len() - 1);
        &self.records[pos]
    }

    pub(crate) fn list(&self) -> &[Record] {
        &self.records
    }

    pub(crate) fn get(&self, id: RecordId) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    pub(crate) fn len(&self) -> usize {
        self.records.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn seed_candidate(
    record_type: RecordType,
    title: &str,
    (y, m, d): (i32, u32, u32),
    description: &str,
    details: &[(&str, SeedValue)],
) -> Option<Candidate> {
    let mut map = Details::default();
    for (key, value) in details {
        match value {
            SeedValue::Text(s) => map.insert(*key, *s),
            SeedValue::Number(n) => map.insert(*key, *n),
        }
    }
    Some(Candidate {
        record_type,
        title: title.to_string(),
        date: NaiveDate::from_ymd_opt(y, m, d)?,
        description: Some(description.to_string()),
        details: map,
    })
}

enum SeedValue {
    Text(&'static str),
    Number(i64),
}

fn seed_candidates() -> Vec<Candidate> {
    [
        seed_candidate(
            RecordType::Operation,
            "Operace pravého kolene",
            (2024, 3, 15),
            "Artroskopická operace menisku",
            &[
                ("hospital", SeedValue::Text("Nemocnice Na Homolce")),
                ("doctor", SeedValue::Text("MUDr. Novák")),
            ],
        ),
        seed_candidate(
            RecordType::Medication,
            "Ibuprofen 400mg",
            (2024, 3, 16),
            "3x denně po jídle",
            &[
                ("duration", SeedValue::Text("14 dní")),
                ("prescribedBy", SeedValue::Text("MUDr. Novák")),
            ],
        ),
        seed_candidate(
            RecordType::Rehabilitation,
            "Rehabilitace kolene",
            (2024, 4, 1),
            "10 sezení - posilování a mobilizace",
            &[
                ("facility", SeedValue::Text("FyzioKlinika Praha")),
                ("sessions", SeedValue::Number(10)),
            ],
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}
