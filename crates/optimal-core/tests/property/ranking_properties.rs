use optimal_core::PartialOrder;
use proptest::prelude::*;

/// Up to eight distinct constraint names split into non-empty strata.
fn strata() -> impl Strategy<Value = Vec<Vec<String>>> {
    (1usize..8)
        .prop_flat_map(|n| {
            (
                Just(n),
                proptest::collection::vec(0usize..n, n),
            )
        })
        .prop_map(|(n, assignment)| {
            let mut groups: Vec<Vec<String>> = vec![Vec::new(); n];
            for (c, &s) in assignment.iter().enumerate() {
                groups[s].push(format!("C{c}"));
            }
            groups.retain(|g| !g.is_empty());
            groups
        })
}

proptest! {
    #[test]
    fn rendering_parses_back_to_the_same_order(groups in strata()) {
        let order = PartialOrder::stratify(groups).unwrap();
        let parsed: PartialOrder = order.to_string().parse().unwrap();
        prop_assert_eq!(parsed, order);
    }

    #[test]
    fn dominance_is_asymmetric(groups in strata()) {
        let order = PartialOrder::stratify(groups).unwrap();
        let names: Vec<&str> = order.constraints().collect();
        for a in &names {
            prop_assert!(!order.dominates(a, a));
            for b in &names {
                prop_assert!(!(order.dominates(a, b) && order.dominates(b, a)));
            }
        }
    }

    #[test]
    fn graph_round_trip_preserves_order(groups in strata()) {
        let order = PartialOrder::stratify(groups).unwrap();
        prop_assert_eq!(order.to_dominance_graph().to_partial_order().unwrap(), order);
    }
}
