//! Property-based tests for network_centrality.
//!
//! These tests verify invariants that should hold for any graph:
//! - Ranking is sorted descending with ties broken by vertex index
//! - Distances have a zero diagonal and are symmetric on undirected graphs
//! - Every measure scores every vertex
//! - Undefined topology values never leak out as NaN

use network_centrality::{
    rank, AnalysisSession, CentralityMeasure, Distance, Network, ScoreMap,
};
use proptest::prelude::*;

/// Arbitrary graph: up to 9 vertices, random edges (parallel edges and self-loops allowed).
fn arb_network() -> impl Strategy<Value = Network> {
    (0usize..10, any::<bool>()).prop_flat_map(|(n, directed)| {
        let edge = if n == 0 {
            Just((0usize, 0usize)).boxed()
        } else {
            (0..n, 0..n).boxed()
        };
        let max_edges = if n == 0 { 0 } else { 20 };
        prop::collection::vec(edge, 0..=max_edges)
            .prop_map(move |edges| Network::from_edges(n, &edges, directed).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn ranking_is_sorted_and_deterministic(
        scores in prop::collection::vec(prop_oneof![Just(0.0f64), Just(1.0), Just(2.5), -100.0f64..100.0], 0..30)
    ) {
        let ranked = rank(&ScoreMap::new(scores.clone()));
        prop_assert_eq!(ranked.len(), scores.len());
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].score >= pair[1].score);
            if pair[0].score == pair[1].score {
                prop_assert!(pair[0].vertex < pair[1].vertex);
            }
        }
        prop_assert_eq!(rank(&ScoreMap::new(scores)), ranked);
    }

    #[test]
    fn distances_have_zero_diagonal(net in arb_network()) {
        let session = AnalysisSession::new(&net).unwrap();
        let oracle = session.oracle();
        for v in 0..oracle.vertex_count() {
            prop_assert_eq!(oracle.distance(v, v).unwrap(), Distance::Finite(0));
        }
    }

    #[test]
    fn undirected_distances_are_symmetric(net in arb_network()) {
        prop_assume!(!network_centrality::GraphProvider::is_directed(&net));
        let session = AnalysisSession::new(&net).unwrap();
        let oracle = session.oracle();
        let n = oracle.vertex_count();
        for s in 0..n {
            for t in 0..n {
                prop_assert_eq!(oracle.distance(s, t).unwrap(), oracle.distance(t, s).unwrap());
            }
        }
    }

    #[test]
    fn every_measure_scores_every_vertex(net in arb_network()) {
        let session = AnalysisSession::new(&net).unwrap();
        let n = session.oracle().vertex_count();
        for measure in CentralityMeasure::ALL {
            let ranking = session.centrality(measure).unwrap();
            prop_assert_eq!(ranking.len(), n);
            prop_assert!(ranking.iter().all(|r| r.score.is_finite()), "{} produced a non-finite score", measure);
        }
    }

    #[test]
    fn topology_values_are_finite_or_undefined(net in arb_network()) {
        let session = AnalysisSession::new(&net).unwrap();
        let params = session.topology_parameters().unwrap();
        for measure in [
            params.average_shortest_path_length,
            params.average_neighbor_count,
            params.centralization,
            params.heterogeneity,
            params.clustering_coefficient,
        ] {
            if let Some(v) = measure.value() {
                prop_assert!(v.is_finite());
            }
        }
        prop_assert!(params.density.is_finite());
        prop_assert!(params.radius <= params.diameter);
    }
}
