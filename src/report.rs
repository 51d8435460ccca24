//! Report model: the dispatched registry, ready for rendering.

use crate::diagnostics;
use crate::dispatch::Dispatcher;
use crate::entity::Kind;
use crate::registry::Registry;

use regex::Regex;
use serde::Serialize;
use std::collections::BTreeMap;

/// One dispatched entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Position in the registry (kept when a filter skips entities).
    pub index: usize,
    pub kind: Kind,
    /// Discriminant as written; differs from `kind` for unknown entities.
    pub tag: String,
    pub label: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub capabilities: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub entries: Vec<Entry>,
    pub totals: Totals,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    /// Entities in the registry.
    pub entities: usize,
    /// Entities that passed the filter.
    pub reported: usize,
    pub devices: usize,
    pub staff: usize,
    pub unknown: usize,
    pub by_kind: BTreeMap<Kind, usize>,
}

/// Dispatch every registry entity whose label matches `filter` (all of them
/// when there is no filter), in registry order.
pub fn build_report(
    registry: &Registry,
    dispatcher: &Dispatcher,
    filter: Option<&Regex>,
) -> Report {
    if registry.is_empty() {
        diagnostics::warn("registry is empty, nothing to report");
    }

    let mut entries: Vec<Entry> = Vec::new();
    let mut by_kind: BTreeMap<Kind, usize> = BTreeMap::new();

    for (index, entity) in registry.iter().enumerate() {
        if let Some(re) = filter {
            if !re.is_match(entity.label()) {
                continue;
            }
        }

        let entry = dispatcher.dispatch(index, entity);
        *by_kind.entry(entry.kind).or_insert(0) += 1;
        entries.push(entry);
    }

    if let Some(re) = filter {
        if entries.is_empty() {
            diagnostics::warn(format!(
                "filter {:?} matched none of the {} entities",
                re.as_str(),
                registry.len()
            ));
        }
    }

    Report {
        totals: Totals {
            entities: registry.len(),
            reported: entries.len(),
            devices: count_where(&by_kind, Kind::is_device),
            staff: count_where(&by_kind, Kind::is_staff),
            unknown: by_kind.get(&Kind::Unknown).copied().unwrap_or(0),
            by_kind,
        },
        entries,
    }
}

fn count_where(by_kind: &BTreeMap<Kind, usize>, pred: fn(Kind) -> bool) -> usize {
    by_kind
        .iter()
        .filter(|(kind, _)| pred(**kind))
        .map(|(_, count)| *count)
        .sum()
}
