use std::time::Duration;

use super::helpers::DelayedSource;
use crate::config::AddressAnnotation;
use crate::model::Node;
use crate::model::NodePosition;
use crate::model::TransactionRecord;

/// Test fixtures for creating consistent test data
pub struct TestFixtures;

impl TestFixtures {
    /// Records for `(from, to)` pairs, an empty `to` meaning no receiver
    pub fn records(pairs: &[(&str, &str)]) -> Vec<TransactionRecord> {
        pairs.iter().map(|(from, to)| TransactionRecord::new(*from, *to)).collect()
    }

    pub fn contract_creation(from: &str) -> TransactionRecord {
        TransactionRecord {
            from_address: Some(from.to_string()),
            to_address: None,
            ..Default::default()
        }
    }

    /// A well-formed 42-character EVM address
    pub fn evm_address(seed: usize) -> String {
        format!("0x{:040x}", seed)
    }

    /// `count` transfers between `distinct` addresses
    pub fn evm_records(
        count: usize,
        distinct: usize,
    ) -> Vec<TransactionRecord> {
        (0..count)
            .map(|i| TransactionRecord::new(Self::evm_address(i % distinct), Self::evm_address((i * 7 + 3) % distinct)))
            .collect()
    }

    pub fn node(
        id: usize,
        address: &str,
    ) -> Node {
        Node::new(id, address)
    }

    pub fn node_with_icon(
        id: usize,
        address: &str,
        icon: &str,
    ) -> Node {
        let mut node = Node::new(id, address);
        node.icon = Some(icon.to_string());
        node
    }

    pub fn annotation(
        address: &str,
        icon: &str,
    ) -> AddressAnnotation {
        AddressAnnotation {
            address: address.to_string(),
            color: None,
            icon: Some(icon.to_string()),
        }
    }

    pub fn positions_on_line(count: usize) -> Vec<NodePosition> {
        (0..count).map(|i| NodePosition::at(i as f64 * 50.0, 0.0)).collect()
    }

    /// A source answering each address after its own delay
    pub fn delayed_source(responses: Vec<(&str, Duration, Vec<TransactionRecord>)>) -> DelayedSource {
        DelayedSource::new(responses)
    }
}
