//! Immutable, validated snapshot of one exported reaction network.
//!
//! [`NetworkModel`] is built once per analysis call from a raw
//! [`NetworkRecord`] and never mutated afterwards. Construction is where
//! all structural validation happens: duplicate species ids and links that
//! reference unknown ids fail with [`MalformedNetwork`], so every consumer
//! downstream (graph builder, analyzer, reporting) can assume a closed,
//! total id space.
//!
//! Label and count maps are insertion-ordered [`IndexMap`]s: iteration
//! order equals node order in the input record, which is what the
//! abundance-ranking tie-break and the analyzer's per-species collections
//! rely on.

use std::cmp::Reverse;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::MalformedNetwork;
use crate::id::SpeciesId;
use crate::record::{NetworkRecord, ReactionRecord};

/// Validated, read-only network snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkModel {
    /// Species id -> expression label, in input node order.
    labels: IndexMap<SpeciesId, String>,
    /// Species id -> observed population count, in input node order.
    counts: IndexMap<SpeciesId, u64>,
    /// All observed reactions, in input link order, duplicates retained.
    links: Vec<ReactionRecord>,
}

impl NetworkModel {
    /// Validates a raw record and freezes it into a model.
    ///
    /// Fails with [`MalformedNetwork::DuplicateSpecies`] if two node
    /// entries share an id, and with [`MalformedNetwork::UnknownSpecies`]
    /// if any link references an id (source, target, or non-open result)
    /// that has no node entry.
    pub fn from_record(record: NetworkRecord) -> Result<Self, MalformedNetwork> {
        let mut labels = IndexMap::with_capacity(record.nodes.len());
        let mut counts = IndexMap::with_capacity(record.nodes.len());

        for node in record.nodes {
            if labels.contains_key(&node.id) {
                return Err(MalformedNetwork::DuplicateSpecies { id: node.id });
            }
            labels.insert(node.id, node.label);
            counts.insert(node.id, node.count);
        }

        for link in &record.links {
            let referenced = [link.source, link.target]
                .into_iter()
                .chain(link.result.product());
            for id in referenced {
                if !labels.contains_key(&id) {
                    return Err(MalformedNetwork::UnknownSpecies { id });
                }
            }
        }

        Ok(NetworkModel {
            labels,
            counts,
            links: record.links,
        })
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Number of distinct species.
    pub fn species_count(&self) -> usize {
        self.labels.len()
    }

    /// Species ids in input node order.
    pub fn species_ids(&self) -> impl Iterator<Item = SpeciesId> + '_ {
        self.labels.keys().copied()
    }

    /// Expression label for a species.
    pub fn label(&self, id: SpeciesId) -> Option<&str> {
        self.labels.get(&id).map(String::as_str)
    }

    /// Observed population count for a species.
    pub fn count(&self, id: SpeciesId) -> Option<u64> {
        self.counts.get(&id).copied()
    }

    /// Id -> label map, in input node order.
    pub fn labels(&self) -> &IndexMap<SpeciesId, String> {
        &self.labels
    }

    /// Id -> count map, in input node order.
    pub fn counts(&self) -> &IndexMap<SpeciesId, u64> {
        &self.counts
    }

    /// All observed reactions in input order, duplicates retained.
    pub fn links(&self) -> &[ReactionRecord] {
        &self.links
    }

    /// Sum of all population counts.
    pub fn total_population(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Species ranked by count descending. The sort is stable, so ties
    /// keep their input node order.
    pub fn species_by_abundance(&self) -> Vec<(SpeciesId, u64)> {
        let mut ranked: Vec<(SpeciesId, u64)> =
            self.counts.iter().map(|(&id, &count)| (id, count)).collect();
        ranked.sort_by_key(|&(_, count)| Reverse(count));
        ranked
    }
}
