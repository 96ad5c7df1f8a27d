use tracing::debug;

use super::DrawingContext;
use super::NodePaint;
use super::paint_node;
use crate::config::NodeStyle;
use crate::model::NodePosition;
use crate::model::TransactionGraph;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub painted: usize,
    pub degraded: usize,
    pub skipped: usize,
}

/// Paints every node of `graph` in id order. `positions` is indexed by node
/// id; nodes without a usable position are skipped and the rest of the frame
/// still gets drawn.
pub fn paint_frame<C: DrawingContext>(
    graph: &TransactionGraph,
    positions: &[NodePosition],
    ctx: &mut C,
    global_scale: f64,
    style: &NodeStyle,
) -> FrameStats {
    let mut stats = FrameStats::default();

    for node in graph.nodes() {
        let Some(position) = positions.get(node.id) else {
            stats.skipped += 1;
            continue;
        };

        match paint_node(node, position, ctx, global_scale, style) {
            NodePaint::Full => stats.painted += 1,
            NodePaint::TextOnly => {
                stats.painted += 1;
                stats.degraded += 1;
            },
            NodePaint::Skipped => stats.skipped += 1,
        }
    }

    if stats.skipped > 0 {
        debug!("render::paint_frame::skipped::{}::of::{}", stats.skipped, graph.node_count());
    }

    stats
}
