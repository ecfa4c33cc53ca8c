use std::collections::BTreeSet;

use super::{Presence, PresenceKey, PresenceMatrix, normalize_variable};
use crate::catalog::SourceRecord;

/// Why a record was left out of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedReason {
    /// The variable field has no alphanumeric token.
    NoVariableToken,
    /// The frequency field is blank.
    EmptyFrequency,
}

impl std::fmt::Display for MalformedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MalformedReason::NoVariableToken => write!(f, "no variable name"),
            MalformedReason::EmptyFrequency => write!(f, "empty frequency"),
        }
    }
}

/// A record excluded from the matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedRecord {
    pub record: SourceRecord,
    pub reason: MalformedReason,
}

/// The matrix together with the records that could not be placed in it.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub matrix: PresenceMatrix,
    pub malformed: Vec<MalformedRecord>,
}

/// Build the presence matrix from collected records.
///
/// Malformed records are dropped silently; use [`build_with_diagnostics`] to
/// see them.
pub fn build(records: &[SourceRecord]) -> PresenceMatrix {
    build_with_diagnostics(records).matrix
}

/// Build the presence matrix and report which records were dropped.
///
/// 1. Normalize each variable and deduplicate on the normalized triplet
/// 2. Collect the sorted distinct keys and sources
/// 3. Fill a `No` grid, then mark every fact `Yes`
pub fn build_with_diagnostics(records: &[SourceRecord]) -> BuildOutcome {
    let mut malformed = Vec::new();

    // Dedup happens on the normalized variable, never on the raw string
    let mut facts: BTreeSet<(PresenceKey, &str)> = BTreeSet::new();
    for record in records {
        let Some(variable) = normalize_variable(&record.variable) else {
            malformed.push(MalformedRecord {
                record: record.clone(),
                reason: MalformedReason::NoVariableToken,
            });
            continue;
        };
        if record.frequency.trim().is_empty() {
            malformed.push(MalformedRecord {
                record: record.clone(),
                reason: MalformedReason::EmptyFrequency,
            });
            continue;
        }
        facts.insert((
            PresenceKey::new(variable, record.frequency.as_str()),
            record.source.as_str(),
        ));
    }

    // Pass 1: axes
    let rows: Vec<PresenceKey> = facts
        .iter()
        .map(|(key, _)| key.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let columns: Vec<String> = facts
        .iter()
        .map(|(_, source)| *source)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect();

    // Pass 2: dense grid
    let width = columns.len();
    let mut cells = vec![Presence::No; rows.len() * width];
    for (key, source) in &facts {
        let (Ok(row), Ok(column)) = (
            rows.binary_search(key),
            columns.binary_search_by(|c| c.as_str().cmp(*source)),
        ) else {
            continue;
        };
        cells[row * width + column] = Presence::Yes;
    }

    BuildOutcome {
        matrix: PresenceMatrix::from_parts(rows, columns, cells),
        malformed,
    }
}
