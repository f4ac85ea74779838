//! Raw input records for an exported reaction network.
//!
//! These types mirror the simulator's JSON export field-for-field:
//! a `nodes` array of `{id, label, count}` entries and a `links` array of
//! `{source, target, result}` entries, where `result = -1` marks a reaction
//! whose product fell outside the tracked population. The sentinel is
//! confined to the serde boundary -- inside the crate a reaction outcome is
//! always the typed [`Outcome`] enum.
//!
//! Records are unvalidated; [`crate::model::NetworkModel`] performs
//! structural validation at construction.

use serde::{Deserialize, Serialize};

use crate::id::SpeciesId;

/// External sentinel for a reaction product outside the tracked species set.
const OPEN_SENTINEL: i64 = -1;

/// Outcome of applying one species to another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum Outcome {
    /// The product is itself a tracked species.
    Product(SpeciesId),
    /// The product fell outside the tracked population ("leak").
    Open,
}

impl Outcome {
    /// Returns `true` if the reaction stays inside the population.
    pub fn is_closed(&self) -> bool {
        matches!(self, Outcome::Product(_))
    }

    /// Returns the product species id, or `None` for an open reaction.
    pub fn product(&self) -> Option<SpeciesId> {
        match self {
            Outcome::Product(id) => Some(*id),
            Outcome::Open => None,
        }
    }
}

impl From<Outcome> for i64 {
    fn from(outcome: Outcome) -> i64 {
        match outcome {
            Outcome::Product(id) => i64::from(id.0),
            Outcome::Open => OPEN_SENTINEL,
        }
    }
}

impl TryFrom<i64> for Outcome {
    type Error = String;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        match raw {
            OPEN_SENTINEL => Ok(Outcome::Open),
            id if (0..=i64::from(u32::MAX)).contains(&id) => {
                Ok(Outcome::Product(SpeciesId(id as u32)))
            }
            other => Err(format!(
                "invalid reaction result {other}, expected -1 or a species id"
            )),
        }
    }
}

/// One species entry: an opaque expression label and its observed
/// population count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: SpeciesId,
    pub label: String,
    pub count: u64,
}

/// One observed reaction: `source(target) -> result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReactionRecord {
    /// The species applied as a function.
    pub source: SpeciesId,
    /// The species used as the argument.
    pub target: SpeciesId,
    pub result: Outcome,
}

/// The full exported document, as parsed. Node and link order is
/// meaningful: abundance ties rank by node order, and duplicate
/// `(source, target)` pairs resolve last-occurrence-wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkRecord {
    pub nodes: Vec<SpeciesRecord>,
    pub links: Vec<ReactionRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_sentinel_deserializes() {
        let outcome: Outcome = serde_json::from_str("-1").unwrap();
        assert_eq!(outcome, Outcome::Open);
        assert!(!outcome.is_closed());
        assert_eq!(outcome.product(), None);
    }

    #[test]
    fn product_deserializes() {
        let outcome: Outcome = serde_json::from_str("3").unwrap();
        assert_eq!(outcome, Outcome::Product(SpeciesId(3)));
        assert!(outcome.is_closed());
        assert_eq!(outcome.product(), Some(SpeciesId(3)));
    }

    #[test]
    fn negative_result_other_than_sentinel_rejected() {
        let err = serde_json::from_str::<Outcome>("-2");
        assert!(err.is_err());
    }

    #[test]
    fn outcome_serializes_back_to_external_form() {
        assert_eq!(serde_json::to_string(&Outcome::Open).unwrap(), "-1");
        assert_eq!(
            serde_json::to_string(&Outcome::Product(SpeciesId(5))).unwrap(),
            "5"
        );
    }

    #[test]
    fn record_parses_export_format() {
        let json = r#"{
            "nodes": [
                {"id": 0, "label": "\\v1.\\v1", "count": 5},
                {"id": 1, "label": "\\v1.\\v2.\\v1", "count": 3}
            ],
            "links": [
                {"source": 0, "target": 1, "result": 1},
                {"source": 1, "target": 0, "result": -1}
            ]
        }"#;
        let record: NetworkRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.nodes.len(), 2);
        assert_eq!(record.nodes[0].label, "\\v1.\\v1");
        assert_eq!(record.nodes[1].count, 3);
        assert_eq!(record.links[0].result, Outcome::Product(SpeciesId(1)));
        assert_eq!(record.links[1].result, Outcome::Open);
    }

    #[test]
    fn record_roundtrips_through_json() {
        let record = NetworkRecord {
            nodes: vec![SpeciesRecord {
                id: SpeciesId(0),
                label: "\\v1.\\v1".into(),
                count: 2,
            }],
            links: vec![ReactionRecord {
                source: SpeciesId(0),
                target: SpeciesId(0),
                result: Outcome::Open,
            }],
        };
        let json = serde_json::to_string(&record).unwrap();
        let back: NetworkRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, back);
    }
}
