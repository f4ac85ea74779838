//! Structural validation errors for reaction network input.
//!
//! Uses `thiserror` for structured, matchable error variants. A malformed
//! record fails the whole call -- no partial model or analysis is ever
//! produced. Degenerate but well-formed inputs (zero species, zero
//! reactions) are not errors; they yield zero/empty results downstream.

use thiserror::Error;

use crate::id::SpeciesId;

/// A network record that violates the structural contract.
#[derive(Debug, Error)]
pub enum MalformedNetwork {
    /// Two node entries carry the same species id.
    #[error("duplicate species id: {id}")]
    DuplicateSpecies { id: SpeciesId },

    /// A link references a species id (as source, target, or product)
    /// that has no node entry.
    #[error("link references unknown species id: {id}")]
    UnknownSpecies { id: SpeciesId },
}
