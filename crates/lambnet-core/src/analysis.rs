//! Structural analysis of a reaction network.
//!
//! [`analyze`] walks the observed link list once and derives closure
//! statistics, the leak list, per-species product sets, constant-function
//! detection, and identity detection. It never fails on a validated
//! model: degenerate inputs (no species, no reactions) produce zero counts
//! and empty collections, and the closure ratio is defined as 0 when no
//! reactions were observed.
//!
//! Duplicate `(source, target)` observations are deliberately NOT
//! collapsed here: `total_reactions` counts every listed link once, and
//! `leaks` keeps repeated pairs in input order. Pair collapsing is a graph
//! and matrix concern, not an analysis one.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};

use crate::id::SpeciesId;
use crate::model::NetworkModel;
use crate::record::Outcome;

/// Result of analyzing one reaction network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkAnalysis {
    /// Count of all observed links, duplicates included.
    pub total_reactions: usize,
    /// Count of links whose product is a tracked species.
    pub closed_reactions: usize,
    /// Count of links whose product leaked out of the population.
    pub open_reactions: usize,
    /// `closed_reactions / total_reactions`, or 0 when nothing was observed.
    pub closure_ratio: f64,
    /// `(source, target)` of every open link, in input order, duplicates
    /// retained.
    pub leaks: Vec<(SpeciesId, SpeciesId)>,
    /// For every species, the distinct products it yields when applied as
    /// a function. Species that never produce anything map to an empty set.
    pub producers: IndexMap<SpeciesId, IndexSet<SpeciesId>>,
    /// Species that always transform any argument into the same single
    /// product ("constant functions"), mapped to that product. A species
    /// with no productive links is not universal.
    pub universal_nodes: IndexMap<SpeciesId, SpeciesId>,
    /// Species whose every application returns its argument unchanged.
    /// A species never applied as a function is vacuously identity-like.
    pub identity_like: Vec<SpeciesId>,
}

/// Analyzes the network, deriving every [`NetworkAnalysis`] field in input
/// (node/link) order. Pure; reads the model without modifying it.
pub fn analyze(model: &NetworkModel) -> NetworkAnalysis {
    let total_reactions = model.links().len();

    let mut closed_reactions = 0;
    let mut leaks = Vec::new();
    let mut producers: IndexMap<SpeciesId, IndexSet<SpeciesId>> = model
        .species_ids()
        .map(|id| (id, IndexSet::new()))
        .collect();

    for link in model.links() {
        match link.result {
            Outcome::Product(product) => {
                closed_reactions += 1;
                producers.entry(link.source).or_default().insert(product);
            }
            Outcome::Open => leaks.push((link.source, link.target)),
        }
    }

    let open_reactions = total_reactions - closed_reactions;
    let closure_ratio = if total_reactions > 0 {
        closed_reactions as f64 / total_reactions as f64
    } else {
        0.0
    };

    // A constant function produces exactly one distinct product. Zero
    // productive links does not qualify.
    let universal_nodes = producers
        .iter()
        .filter(|(_, products)| products.len() == 1)
        .map(|(&id, products)| (id, products[0]))
        .collect();

    // Identity check requires result == target on every outgoing link; an
    // open outgoing link always disqualifies. No outgoing links at all is
    // vacuously identity-like.
    let identity_like = model
        .species_ids()
        .filter(|&id| {
            model
                .links()
                .iter()
                .filter(|link| link.source == id)
                .all(|link| link.result == Outcome::Product(link.target))
        })
        .collect();

    NetworkAnalysis {
        total_reactions,
        closed_reactions,
        open_reactions,
        closure_ratio,
        leaks,
        producers,
        universal_nodes,
        identity_like,
    }
}
