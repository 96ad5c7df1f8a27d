use std::collections::HashMap;

use petgraph::graph::NodeIndex;
use tracing::debug;

use crate::config::AddressAnnotation;
use crate::config::GraphConfig;
use crate::error::GraphError;
use crate::model::TransactionGraph;
use crate::model::TransactionRecord;

/// Turns a page of transaction records into a [`TransactionGraph`].
///
/// Only the first `limit` records are read. Addresses are interned into
/// nodes in first-seen order and every record with a receiver becomes one
/// directed link, self-transfers included.
#[derive(Debug, Clone)]
pub struct GraphBuilder {
    limit: usize,
    annotations: HashMap<String, AddressAnnotation>,
}

impl GraphBuilder {
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            annotations: HashMap::new(),
        }
    }

    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.transaction_limit).with_annotations(config.annotations.iter().cloned())
    }

    pub fn with_annotations(
        mut self,
        annotations: impl IntoIterator<Item = AddressAnnotation>,
    ) -> Self {
        self.annotations
            .extend(annotations.into_iter().map(|annotation| (annotation.address.clone(), annotation)));
        self
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn build(
        &self,
        transactions: &[TransactionRecord],
    ) -> Result<TransactionGraph, GraphError> {
        let mut graph = TransactionGraph::new();
        // Scoped to this call, never shared between builds
        let mut address_to_node: HashMap<&str, NodeIndex> = HashMap::new();

        let processed = self.limit.min(transactions.len());
        for (index, record) in transactions[..processed].iter().enumerate() {
            let from = record.sender().ok_or(GraphError::InvalidRecord { index })?;
            let from_idx = self.intern(&mut graph, &mut address_to_node, from);

            if let Some(to) = record.receiver() {
                let to_idx = self.intern(&mut graph, &mut address_to_node, to);
                graph.add_link(from_idx, to_idx);
            }
        }

        debug!(
            "graph_builder::build::records::{}::processed::{}::nodes::{}::links::{}",
            transactions.len(),
            processed,
            graph.node_count(),
            graph.link_count()
        );

        Ok(graph)
    }

    /// Builds the replacement for `current`. `current` is only read, so a
    /// renderer holding it keeps a consistent view until it is swapped out.
    pub fn rebuild(
        &self,
        current: &TransactionGraph,
        transactions: &[TransactionRecord],
    ) -> Result<TransactionGraph, GraphError> {
        let next = self.build(transactions)?;
        debug!(
            "graph_builder::rebuild::replacing::nodes::{}::links::{}::with::nodes::{}::links::{}",
            current.node_count(),
            current.link_count(),
            next.node_count(),
            next.link_count()
        );
        Ok(next)
    }

    fn intern<'a>(
        &self,
        graph: &mut TransactionGraph,
        address_to_node: &mut HashMap<&'a str, NodeIndex>,
        address: &'a str,
    ) -> NodeIndex {
        // Key presence decides, never the stored index: node 0 is a valid hit
        *address_to_node
            .entry(address)
            .or_insert_with(|| graph.add_node(address, self.annotations.get(address)))
    }
}

/// Builds a graph from the first `limit` records.
pub fn build(
    transactions: &[TransactionRecord],
    limit: usize,
) -> Result<TransactionGraph, GraphError> {
    GraphBuilder::new(limit).build(transactions)
}

/// Pure replacement step for a new search: `current` is left untouched.
pub fn rebuild(
    current: &TransactionGraph,
    transactions: &[TransactionRecord],
    limit: usize,
) -> Result<TransactionGraph, GraphError> {
    GraphBuilder::new(limit).rebuild(current, transactions)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::Link;
    use crate::test_utils::assertions::TestAssertions;
    use crate::test_utils::fixtures::TestFixtures;

    fn link_pairs(graph: &TransactionGraph) -> Vec<(usize, usize)> {
        graph.links().map(|link| (link.source, link.target)).collect()
    }

    fn labels(graph: &TransactionGraph) -> Vec<&str> {
        graph.nodes().map(|node| node.label.as_str()).collect()
    }

    #[test]
    fn test_chain_with_shortcut() {
        let records = TestFixtures::records(&[("0xA", "0xB"), ("0xB", "0xC"), ("0xA", "0xC")]);
        let graph = build(&records, 3).unwrap();

        assert_eq!(labels(&graph), vec!["0xA", "0xB", "0xC"]);
        assert_eq!(graph.nodes().map(|n| n.id).collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(link_pairs(&graph), vec![(0, 1), (1, 2), (0, 2)]);
        assert!(graph.links().all(|link| link.weight == 1));
        TestAssertions::assert_graph_consistent(&graph);
    }

    #[test]
    fn test_self_transfer_is_kept() {
        let records = TestFixtures::records(&[("0xA", "0xA")]);
        let graph = build(&records, 1).unwrap();

        assert_eq!(labels(&graph), vec!["0xA"]);
        assert_eq!(graph.links().copied().collect::<Vec<_>>(), vec![Link { source: 0, target: 0, weight: 1 }]);
    }

    #[test]
    fn test_empty_receiver_adds_no_link() {
        let records = TestFixtures::records(&[("0xA", "")]);
        let graph = build(&records, 1).unwrap();

        assert_eq!(labels(&graph), vec!["0xA"]);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_absent_receiver_adds_no_link() {
        let records = vec![TestFixtures::contract_creation("0xA")];
        let graph = build(&records, 1).unwrap();

        assert_eq!(graph.node_count(), 1);
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_empty_batch_gives_empty_graph() {
        let graph = build(&[], 20).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.link_count(), 0);
    }

    #[test]
    fn test_first_address_seen_again_is_not_duplicated() {
        // 0xA holds node id 0
        let records = TestFixtures::records(&[("0xA", "0xB"), ("0xC", "0xA"), ("0xA", "0xB")]);
        let graph = build(&records, 3).unwrap();

        assert_eq!(labels(&graph), vec!["0xA", "0xB", "0xC"]);
        assert_eq!(link_pairs(&graph), vec![(0, 1), (2, 0), (0, 1)]);
    }

    #[test]
    fn test_limit_is_clamped_to_batch() {
        let records = TestFixtures::records(&[("0xA", "0xB")]);
        let graph = build(&records, 20).unwrap();
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.link_count(), 1);
    }

    #[test]
    fn test_records_past_limit_are_ignored() {
        let records = TestFixtures::records(&[("0xA", "0xB"), ("0xB", "0xC"), ("0xD", "0xE")]);
        let graph = build(&records, 2).unwrap();

        assert_eq!(labels(&graph), vec!["0xA", "0xB", "0xC"]);
        assert!(graph.find_by_address("0xD").is_none());
        assert!(graph.find_by_address("0xE").is_none());
    }

    #[test]
    fn test_zero_limit_gives_empty_graph() {
        let records = TestFixtures::records(&[("0xA", "0xB")]);
        assert!(build(&records, 0).unwrap().is_empty());
    }

    #[test]
    fn test_missing_sender_fails_with_index() {
        let mut records = TestFixtures::records(&[("0xA", "0xB"), ("0xB", "0xC")]);
        records[1].from_address = None;

        assert_eq!(build(&records, 2).unwrap_err(), GraphError::InvalidRecord { index: 1 });
    }

    #[test]
    fn test_blank_sender_fails() {
        let records = TestFixtures::records(&[("", "0xB")]);
        assert_eq!(build(&records, 1).unwrap_err(), GraphError::InvalidRecord { index: 0 });
    }

    #[test]
    fn test_invalid_record_past_limit_is_not_read() {
        let mut records = TestFixtures::records(&[("0xA", "0xB"), ("0xB", "0xC")]);
        records[1].from_address = None;

        assert!(build(&records, 1).is_ok());
    }

    #[test]
    fn test_build_is_deterministic() {
        let records = TestFixtures::evm_records(12, 5);
        let first = build(&records, 10).unwrap();
        let second = build(&records, 10).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.to_data(), second.to_data());
    }

    #[test]
    fn test_rebuild_leaves_current_untouched() {
        let current = build(&TestFixtures::records(&[("0xA", "0xB")]), 20).unwrap();
        let snapshot = current.clone();

        let next = rebuild(&current, &TestFixtures::records(&[("0xC", "0xD"), ("0xD", "0xE")]), 20).unwrap();

        assert_eq!(current, snapshot);
        assert_eq!(labels(&next), vec!["0xC", "0xD", "0xE"]);
    }

    #[test]
    fn test_annotations_apply_to_matching_addresses() {
        let annotation = AddressAnnotation {
            address: "0xB".to_string(),
            color: Some("#00FF00".to_string()),
            icon: None,
        };
        let builder = GraphBuilder::new(20).with_annotations([annotation]);
        let graph = builder.build(&TestFixtures::records(&[("0xA", "0xB")])).unwrap();

        assert_eq!(graph.node(0).unwrap().color, None);
        assert_eq!(graph.node(1).unwrap().color.as_deref(), Some("#00FF00"));
    }

    #[test]
    fn test_from_config_uses_limit() {
        let config = GraphConfig {
            transaction_limit: 1,
            annotations: vec![],
        };
        let builder = GraphBuilder::from_config(&config);
        let graph = builder.build(&TestFixtures::records(&[("0xA", "0xB"), ("0xC", "0xD")])).unwrap();

        assert_eq!(builder.limit(), 1);
        assert_eq!(graph.node_count(), 2);
    }
}
