use std::time::Duration;

use crate::model::NodePosition;
use crate::model::TransactionGraph;

/// Force-directed layout engine driven by [`Simulation`](super::Simulation).
///
/// The physics lives outside this crate. The engine is configured once,
/// handed each new graph through `reset`, and advanced one tick at a time;
/// it must leave `fx`/`fy` untouched.
pub trait LayoutEngine {
    /// Many-body force strength, negative values repel
    fn set_charge_strength(
        &mut self,
        strength: f64,
    );

    /// Preferred length of every link
    fn set_link_distance(
        &mut self,
        distance: f64,
    );

    /// Loads a graph and returns initial positions indexed by node id.
    fn reset(
        &mut self,
        graph: &TransactionGraph,
    ) -> Vec<NodePosition>;

    fn tick(
        &mut self,
        positions: &mut [NodePosition],
    );

    /// Animates the view so every node is visible. View only.
    fn zoom_to_fit(
        &mut self,
        duration: Duration,
        padding: f64,
    );
}
