//! Directed reaction graphs derived from a validated network model.
//!
//! Two petgraph `StableGraph` instances are built side by side:
//! - the **closed** graph keeps only reactions whose product is itself a
//!   tracked species (edge weight = product id);
//! - the **full** graph keeps every reaction, with the outcome on the edge
//!   so open reactions stay distinguishable.
//!
//! Both graphs collapse duplicate `(source, target)` pairs to a single
//! edge, last write wins -- repeated observations of the same pair resolve
//! to the most recently listed result. Every species in the model appears
//! as a node in both graphs even when it has no incident edges; isolated
//! species are valid network members.
//!
//! External [`SpeciesId`]s are not petgraph indices. The builder keeps an
//! id-to-index map per graph, mirroring how the model validates ids once
//! so traversals never need to re-check them.

use std::collections::HashMap;

use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::Directed;
use serde::{Deserialize, Serialize};

use crate::error::MalformedNetwork;
use crate::id::SpeciesId;
use crate::model::NetworkModel;
use crate::record::Outcome;

/// Edge payload in the full graph: the reaction outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionEdge {
    pub outcome: Outcome,
}

impl ReactionEdge {
    /// Returns `true` if this reaction stays inside the population.
    pub fn is_closed(&self) -> bool {
        self.outcome.is_closed()
    }
}

/// The closed and full reaction graphs over one network model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReactionGraphs {
    closed: StableGraph<SpeciesId, SpeciesId, Directed, u32>,
    full: StableGraph<SpeciesId, ReactionEdge, Directed, u32>,
    closed_indices: HashMap<SpeciesId, NodeIndex<u32>>,
    full_indices: HashMap<SpeciesId, NodeIndex<u32>>,
}

impl ReactionGraphs {
    /// Builds both graphs from a validated model. Pure transformation; the
    /// model is not modified.
    ///
    /// Fails with [`MalformedNetwork::UnknownSpecies`] if a link references
    /// a species absent from the model. A model constructed through
    /// [`NetworkModel::from_record`] cannot trigger this, but the builder
    /// re-checks rather than assume its input's provenance.
    pub fn build(model: &NetworkModel) -> Result<Self, MalformedNetwork> {
        let mut closed = StableGraph::default();
        let mut full = StableGraph::default();
        let mut closed_indices = HashMap::with_capacity(model.species_count());
        let mut full_indices = HashMap::with_capacity(model.species_count());

        for id in model.species_ids() {
            closed_indices.insert(id, closed.add_node(id));
            full_indices.insert(id, full.add_node(id));
        }

        for link in model.links() {
            let src = *full_indices
                .get(&link.source)
                .ok_or(MalformedNetwork::UnknownSpecies { id: link.source })?;
            let tgt = *full_indices
                .get(&link.target)
                .ok_or(MalformedNetwork::UnknownSpecies { id: link.target })?;

            // Overwrites any earlier edge for the same pair.
            full.update_edge(
                src,
                tgt,
                ReactionEdge {
                    outcome: link.result,
                },
            );

            if let Outcome::Product(product) = link.result {
                let src = *closed_indices
                    .get(&link.source)
                    .ok_or(MalformedNetwork::UnknownSpecies { id: link.source })?;
                let tgt = *closed_indices
                    .get(&link.target)
                    .ok_or(MalformedNetwork::UnknownSpecies { id: link.target })?;
                closed.update_edge(src, tgt, product);
            }
        }

        Ok(ReactionGraphs {
            closed,
            full,
            closed_indices,
            full_indices,
        })
    }

    // -----------------------------------------------------------------------
    // Read-only accessors
    // -----------------------------------------------------------------------

    /// The closed reaction graph (product-bearing reactions only).
    pub fn closed(&self) -> &StableGraph<SpeciesId, SpeciesId, Directed, u32> {
        &self.closed
    }

    /// The full reaction graph (all reactions, outcome on the edge).
    pub fn full(&self) -> &StableGraph<SpeciesId, ReactionEdge, Directed, u32> {
        &self.full
    }

    /// Node index of a species in the closed graph.
    pub fn closed_index(&self, id: SpeciesId) -> Option<NodeIndex<u32>> {
        self.closed_indices.get(&id).copied()
    }

    /// Node index of a species in the full graph.
    pub fn full_index(&self, id: SpeciesId) -> Option<NodeIndex<u32>> {
        self.full_indices.get(&id).copied()
    }

    /// Resolved product of `source(target)` in the closed graph, if that
    /// pair ever produced a tracked species.
    pub fn closed_result(&self, source: SpeciesId, target: SpeciesId) -> Option<SpeciesId> {
        let src = self.closed_index(source)?;
        let tgt = self.closed_index(target)?;
        let edge = self.closed.find_edge(src, tgt)?;
        self.closed.edge_weight(edge).copied()
    }

    /// Resolved outcome of `source(target)` in the full graph, if that pair
    /// was ever observed.
    pub fn full_outcome(&self, source: SpeciesId, target: SpeciesId) -> Option<Outcome> {
        let src = self.full_index(source)?;
        let tgt = self.full_index(target)?;
        let edge = self.full.find_edge(src, tgt)?;
        self.full.edge_weight(edge).map(|e| e.outcome)
    }

    /// Edge count of the closed graph.
    pub fn closed_edge_count(&self) -> usize {
        self.closed.edge_count()
    }

    /// Edge count of the full graph.
    pub fn full_edge_count(&self) -> usize {
        self.full.edge_count()
    }
}
