//! Rendering errors for the reporting layer.

use lambnet_core::SpeciesId;
use thiserror::Error;

/// A model that cannot be rendered by a given artifact.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The reaction matrix addresses cells by id, so it requires the ids
    /// to be exactly `0..species_count`. Sparse id spaces are refused
    /// rather than silently re-indexed.
    #[error("reaction matrix requires dense ids 0..{species_count}, found id {id}")]
    SparseIds { species_count: usize, id: SpeciesId },
}
