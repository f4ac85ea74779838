//! Property tests for the analysis invariants.
//!
//! Generates arbitrary well-formed network records (dense ids, in-range
//! links) and checks the arithmetic and classification contracts that must
//! hold for every input, plus the rejection of out-of-range references.

use proptest::collection::vec;
use proptest::option;
use proptest::prelude::*;

use lambnet_core::{
    analyze, shorten, MalformedNetwork, NetworkModel, NetworkRecord, Outcome, ReactionRecord,
    SpeciesId, SpeciesRecord,
};

fn arb_record() -> impl Strategy<Value = NetworkRecord> {
    (1u32..10).prop_flat_map(|n| {
        let nodes = vec(0u64..100, n as usize).prop_map(move |counts| {
            counts
                .into_iter()
                .enumerate()
                .map(|(i, count)| SpeciesRecord {
                    id: SpeciesId(i as u32),
                    label: format!("\\v{i}.\\v{i}"),
                    count,
                })
                .collect::<Vec<_>>()
        });
        let links = vec((0..n, 0..n, option::of(0..n)), 0..40).prop_map(|raw| {
            raw.into_iter()
                .map(|(source, target, result)| ReactionRecord {
                    source: SpeciesId(source),
                    target: SpeciesId(target),
                    result: match result {
                        Some(product) => Outcome::Product(SpeciesId(product)),
                        None => Outcome::Open,
                    },
                })
                .collect::<Vec<_>>()
        });
        (nodes, links).prop_map(|(nodes, links)| NetworkRecord { nodes, links })
    })
}

proptest! {
    #[test]
    fn reaction_counts_add_up(record in arb_record()) {
        let model = NetworkModel::from_record(record).unwrap();
        let analysis = analyze(&model);

        prop_assert_eq!(
            analysis.closed_reactions + analysis.open_reactions,
            analysis.total_reactions
        );
        if analysis.total_reactions > 0 {
            prop_assert!(analysis.closure_ratio >= 0.0);
            prop_assert!(analysis.closure_ratio <= 1.0);
        } else {
            prop_assert_eq!(analysis.closure_ratio, 0.0);
        }
        prop_assert_eq!(analysis.leaks.len(), analysis.open_reactions);
    }

    #[test]
    fn inert_species_is_identity_like_never_universal(record in arb_record()) {
        let model = NetworkModel::from_record(record).unwrap();
        let analysis = analyze(&model);

        for id in model.species_ids() {
            let has_outgoing = model.links().iter().any(|link| link.source == id);
            if !has_outgoing {
                prop_assert!(analysis.identity_like.contains(&id));
                prop_assert!(!analysis.universal_nodes.contains_key(&id));
            }
        }
    }

    #[test]
    fn every_producer_set_is_within_the_species_set(record in arb_record()) {
        let model = NetworkModel::from_record(record).unwrap();
        let analysis = analyze(&model);

        prop_assert_eq!(analysis.producers.len(), model.species_count());
        for products in analysis.producers.values() {
            for product in products {
                prop_assert!(model.label(*product).is_some());
            }
        }
    }

    #[test]
    fn out_of_range_source_is_rejected(record in arb_record(), offset in 0u32..5) {
        let unknown = SpeciesId(record.nodes.len() as u32 + offset);
        let mut record = record;
        record.links.push(ReactionRecord {
            source: unknown,
            target: SpeciesId(0),
            result: Outcome::Open,
        });

        let err = NetworkModel::from_record(record).unwrap_err();
        let is_unknown_species = matches!(
            err,
            MalformedNetwork::UnknownSpecies { id } if id == unknown
        );
        prop_assert!(is_unknown_species);
    }

    #[test]
    fn shorten_is_identity_on_short_labels(label in ".{0,12}") {
        prop_assume!(label.chars().count() <= 12);
        let once = shorten(&label, 12);
        prop_assert_eq!(&once, &label);
        prop_assert_eq!(shorten(&once, 12), once);
    }
}
