use petgraph::graph::DiGraph;
use petgraph::graph::NodeIndex;
use serde::Deserialize;
use serde::Serialize;

use crate::config::AddressAnnotation;
use crate::constants::LINK_WEIGHT;
use crate::constants::NODE_GROUP;
use crate::constants::NODE_VALUE;
use crate::model::address::abbreviate_address;

/// A unique address in the transaction graph.
///
/// Field names on the wire follow what force-graph renderers read: the short
/// label is `name`, the glow override is `code` and the icon is `imgSrc`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: usize,
    pub label: String,
    #[serde(rename = "name")]
    pub display_name: String,
    pub group: u32,
    pub value: u32,
    #[serde(rename = "code", default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "imgSrc", default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Node {
    pub fn new(
        id: usize,
        address: &str,
    ) -> Self {
        Self {
            id,
            label: address.to_string(),
            display_name: abbreviate_address(address),
            group: NODE_GROUP,
            value: NODE_VALUE,
            color: None,
            icon: None,
        }
    }

    pub fn with_annotation(
        mut self,
        annotation: &AddressAnnotation,
    ) -> Self {
        self.color = annotation.color.clone();
        self.icon = annotation.icon.clone();
        self
    }
}

/// A directed edge for one transaction, endpoints referenced by node id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub source: usize,
    pub target: usize,
    #[serde(rename = "value")]
    pub weight: u32,
}

/// Owned `{nodes, links}` document, the shape handed to a layout engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphData {
    pub nodes: Vec<Node>,
    pub links: Vec<Link>,
}

#[derive(Serialize)]
struct GraphDataRef<'a> {
    nodes: Vec<&'a Node>,
    links: Vec<&'a Link>,
}

/// Nodes and links of one build. Backed by a petgraph `DiGraph`, whose
/// dense node indices are the node ids.
#[derive(Debug, Clone, Default)]
pub struct TransactionGraph {
    graph: DiGraph<Node, Link>,
}

impl TransactionGraph {
    pub fn new() -> Self {
        Self { graph: DiGraph::new() }
    }

    /// Appends a node for `address`; its id is the current node count.
    pub(crate) fn add_node(
        &mut self,
        address: &str,
        annotation: Option<&AddressAnnotation>,
    ) -> NodeIndex {
        let mut node = Node::new(self.graph.node_count(), address);
        if let Some(annotation) = annotation {
            node = node.with_annotation(annotation);
        }
        let idx = self.graph.add_node(node);
        debug_assert_eq!(idx.index(), self.graph[idx].id);
        idx
    }

    pub(crate) fn add_link(
        &mut self,
        source: NodeIndex,
        target: NodeIndex,
    ) {
        let link = Link {
            source: source.index(),
            target: target.index(),
            weight: LINK_WEIGHT,
        };
        self.graph.add_edge(source, target, link);
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Nodes in id order
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.graph.node_weights()
    }

    /// Links in insertion order
    pub fn links(&self) -> impl Iterator<Item = &Link> {
        self.graph.edge_weights()
    }

    pub fn node(
        &self,
        id: usize,
    ) -> Option<&Node> {
        self.graph.node_weight(NodeIndex::new(id))
    }

    pub fn find_by_address(
        &self,
        address: &str,
    ) -> Option<&Node> {
        self.nodes().find(|node| node.label == address)
    }

    pub fn to_data(&self) -> GraphData {
        GraphData {
            nodes: self.nodes().cloned().collect(),
            links: self.links().copied().collect(),
        }
    }
}

impl PartialEq for TransactionGraph {
    fn eq(
        &self,
        other: &Self,
    ) -> bool {
        self.nodes().eq(other.nodes()) && self.links().eq(other.links())
    }
}

impl Serialize for TransactionGraph {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        GraphDataRef {
            nodes: self.nodes().collect(),
            links: self.links().collect(),
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn test_serializes_as_nodes_and_links() {
        let mut graph = TransactionGraph::new();
        let a = graph.add_node("0x71C7656EC7ab88b098defB751B7401B5f6d8976F", None);
        let b = graph.add_node("0xB", None);
        graph.add_link(a, b);

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(
            value,
            json!({
                "nodes": [
                    {
                        "id": 0,
                        "label": "0x71C7656EC7ab88b098defB751B7401B5f6d8976F",
                        "name": "0x7...76F",
                        "group": 1,
                        "value": 6
                    },
                    { "id": 1, "label": "0xB", "name": "0xB", "group": 1, "value": 6 }
                ],
                "links": [{ "source": 0, "target": 1, "value": 1 }]
            })
        );
    }

    #[test]
    fn test_annotation_sets_color_and_icon() {
        let annotation = AddressAnnotation {
            address: "0xA".to_string(),
            color: Some("#F7931A".to_string()),
            icon: Some("cex.png".to_string()),
        };
        let mut graph = TransactionGraph::new();
        graph.add_node("0xA", Some(&annotation));

        let node = graph.node(0).unwrap();
        assert_eq!(node.color.as_deref(), Some("#F7931A"));
        assert_eq!(node.icon.as_deref(), Some("cex.png"));
        assert_eq!(node.group, 1);

        let value = serde_json::to_value(&graph).unwrap();
        assert_eq!(value["nodes"][0]["code"], "#F7931A");
        assert_eq!(value["nodes"][0]["imgSrc"], "cex.png");
    }

    #[test]
    fn test_to_data_matches_serialized_form() {
        let mut graph = TransactionGraph::new();
        let a = graph.add_node("0xA", None);
        graph.add_link(a, a);

        let data = graph.to_data();
        assert_eq!(serde_json::to_value(&data).unwrap(), serde_json::to_value(&graph).unwrap());
        assert_eq!(data.links, vec![Link { source: 0, target: 0, weight: 1 }]);
    }
}
