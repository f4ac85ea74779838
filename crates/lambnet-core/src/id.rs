//! Stable species identifier.
//!
//! A [`SpeciesId`] is the external id assigned by the simulator's graph
//! export -- it is NOT a petgraph index. The graph layer keeps its own
//! id-to-index maps, so a `SpeciesId` stays meaningful across both the
//! closed and full reaction graphs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identity of one species (one distinct expression) in the exported
/// network. Unique within a record; typically but not necessarily dense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpeciesId(pub u32);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
