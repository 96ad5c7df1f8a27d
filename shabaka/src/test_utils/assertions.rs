use std::collections::HashSet;

use crate::model::TransactionGraph;

/// Custom assertions for domain-specific testing
pub struct TestAssertions;

impl TestAssertions {
    /// Dense ids, unique addresses, every link endpoint present
    pub fn assert_graph_consistent(graph: &TransactionGraph) {
        let mut seen = HashSet::new();
        for (position, node) in graph.nodes().enumerate() {
            assert_eq!(node.id, position, "Node {} sits at position {}", node.id, position);
            assert!(seen.insert(node.label.as_str()), "Address {} has more than one node", node.label);
            assert!(!node.label.is_empty(), "Node {} has an empty label", node.id);
        }

        for link in graph.links() {
            assert!(
                link.source < graph.node_count(),
                "Link source {} out of range ({} nodes)",
                link.source,
                graph.node_count()
            );
            assert!(
                link.target < graph.node_count(),
                "Link target {} out of range ({} nodes)",
                link.target,
                graph.node_count()
            );
        }
    }
}
