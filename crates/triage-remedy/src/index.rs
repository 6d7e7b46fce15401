//! Immutable normalized-name index over a remedy table.
//!
//! Keys are derived once, when the index is built, from the display names of
//! the table rows. The rows themselves are never touched.

use std::collections::HashMap;

use triage_contracts::{corpus::normalize_disease_name, remedy::MatchOutcome};

#[derive(Debug, Clone, Default)]
pub struct NormalizedIndex {
    /// Normalized name of every row, in table order.
    keys: Vec<String>,
    /// Normalized name → row indices, ascending.
    exact: HashMap<String, Vec<usize>>,
}

impl NormalizedIndex {
    pub fn build<'a>(names: impl IntoIterator<Item = &'a str>) -> Self {
        let keys: Vec<String> = names.into_iter().map(normalize_disease_name).collect();
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        for (idx, key) in keys.iter().enumerate() {
            exact.entry(key.clone()).or_default().push(idx);
        }
        Self { keys, exact }
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Match `disease` against the indexed rows.
    ///
    /// 1. Exact: rows whose normalized name equals the normalized query.
    /// 2. Substring, only if (1) found nothing: rows whose normalized name
    ///    contains the query. `"flu"` will also hit `"influenza"`.
    ///
    /// A query that is blank after trimming matches nothing.
    pub fn lookup(&self, disease: &str) -> MatchOutcome {
        let key = normalize_disease_name(disease);
        if key.is_empty() {
            return MatchOutcome::None;
        }

        if let Some(indices) = self.exact.get(&key) {
            return MatchOutcome::Exact { indices: indices.clone() };
        }

        let indices: Vec<usize> = self
            .keys
            .iter()
            .enumerate()
            .filter(|(_, k)| k.contains(key.as_str()))
            .map(|(idx, _)| idx)
            .collect();

        if indices.is_empty() {
            MatchOutcome::None
        } else {
            MatchOutcome::Substring { indices }
        }
    }
}
