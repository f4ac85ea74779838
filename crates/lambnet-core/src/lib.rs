//! Core reaction network analysis for a combinatorial-chemistry soup.
//!
//! Consumes the simulator's exported network record (species nodes plus
//! pairwise application reactions), validates it into an immutable
//! [`NetworkModel`], derives the closed/full reaction graphs, and computes
//! structural properties: closure statistics, leak enumeration, constant
//! functions, and identity-like species.
//!
//! The crate is a pure computation library: no file I/O, no subprocess
//! calls, no rendering. One analysis call consumes one immutable record
//! and returns one immutable result.

pub mod analysis;
pub mod error;
pub mod graph;
pub mod id;
pub mod label;
pub mod model;
pub mod record;

// Re-export commonly used types
pub use analysis::{analyze, NetworkAnalysis};
pub use error::MalformedNetwork;
pub use graph::{ReactionEdge, ReactionGraphs};
pub use id::SpeciesId;
pub use label::{shorten, DEFAULT_LABEL_WIDTH};
pub use model::NetworkModel;
pub use record::{NetworkRecord, Outcome, ReactionRecord, SpeciesRecord};
