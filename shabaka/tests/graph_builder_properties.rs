use std::collections::HashSet;

use proptest::prelude::*;
use shabaka::TransactionRecord;
use shabaka::graph::build;

/// Strategy for addresses drawn from a small pool, so repeats are common
fn arbitrary_address() -> impl Strategy<Value = String> {
    (0u8..12).prop_map(|n| format!("0x{:040x}", n))
}

/// Strategy for receivers, sometimes absent or blank
fn arbitrary_receiver() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        6 => arbitrary_address().prop_map(Some),
        1 => Just(None),
        1 => Just(Some(String::new())),
    ]
}

fn arbitrary_batch() -> impl Strategy<Value = Vec<TransactionRecord>> {
    prop::collection::vec(
        (arbitrary_address(), arbitrary_receiver()).prop_map(|(from, to)| TransactionRecord {
            from_address: Some(from),
            to_address: to,
            ..Default::default()
        }),
        0..=40,
    )
}

fn distinct_addresses(batch: &[TransactionRecord]) -> HashSet<String> {
    let mut addresses = HashSet::new();
    for record in batch {
        addresses.insert(record.from_address.clone().unwrap());
        if let Some(to) = record.to_address.as_ref().filter(|to| !to.is_empty()) {
            addresses.insert(to.clone());
        }
    }
    addresses
}

proptest! {
    /// Property: same input, same graph
    #[test]
    fn prop_build_is_deterministic(batch in arbitrary_batch(), limit in 0usize..50) {
        let first = build(&batch, limit).unwrap();
        let second = build(&batch, limit).unwrap();
        prop_assert_eq!(first.to_data(), second.to_data());
    }

    /// Property: one node per distinct address in the processed prefix
    #[test]
    fn prop_nodes_match_distinct_addresses(batch in arbitrary_batch(), limit in 0usize..50) {
        let graph = build(&batch, limit).unwrap();
        let prefix = &batch[..limit.min(batch.len())];
        let expected = distinct_addresses(prefix);

        let labels: HashSet<String> = graph.nodes().map(|node| node.label.clone()).collect();
        prop_assert_eq!(graph.node_count(), expected.len());
        prop_assert_eq!(labels, expected);
    }

    /// Property: links reference existing nodes, one per record with a receiver
    #[test]
    fn prop_links_are_valid(batch in arbitrary_batch(), limit in 0usize..50) {
        let graph = build(&batch, limit).unwrap();
        let prefix = &batch[..limit.min(batch.len())];

        for link in graph.links() {
            prop_assert!(link.source < graph.node_count());
            prop_assert!(link.target < graph.node_count());
        }
        prop_assert_eq!(graph.link_count(), prefix.iter().filter(|r| r.receiver().is_some()).count());
    }

    /// Property: link endpoints point at the addresses of their record, in order
    #[test]
    fn prop_links_follow_records(batch in arbitrary_batch()) {
        let graph = build(&batch, batch.len()).unwrap();
        let with_receiver: Vec<&TransactionRecord> = batch.iter().filter(|r| r.receiver().is_some()).collect();

        for (link, record) in graph.links().zip(with_receiver) {
            prop_assert_eq!(Some(graph.node(link.source).unwrap().label.as_str()), record.sender());
            prop_assert_eq!(Some(graph.node(link.target).unwrap().label.as_str()), record.receiver());
        }
    }

    /// Property: nothing past the limit leaks into the graph
    #[test]
    fn prop_prefix_limiting(batch in arbitrary_batch(), limit in 0usize..50) {
        let limited = build(&batch, limit).unwrap();
        let truncated: Vec<TransactionRecord> = batch.iter().take(limit).cloned().collect();
        let from_prefix = build(&truncated, usize::MAX).unwrap();

        prop_assert_eq!(limited.to_data(), from_prefix.to_data());
    }
}
