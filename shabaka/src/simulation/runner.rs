use std::sync::Arc;

use tracing::debug;
use tracing::info;

use super::LayoutEngine;
use crate::config::NodeStyle;
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::model::NodePosition;
use crate::model::TransactionGraph;
use crate::render::DrawingContext;
use crate::render::FrameStats;
use crate::render::paint_frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationState {
    Running,
    Settled,
}

/// One layout run over one graph.
///
/// Forces are applied to the engine once, on construction. Every `load`
/// throws away the previous run's positions and tick count; after
/// `cooldown_ticks` ticks the layout settles and stays put until the next
/// `load`. Positions live here, never on the graph, so the graph itself is
/// read-only for the whole run.
pub struct Simulation<E: LayoutEngine> {
    engine: E,
    config: SimulationConfig,
    graph: Arc<TransactionGraph>,
    positions: Vec<NodePosition>,
    ticks: u32,
    state: SimulationState,
}

impl<E: LayoutEngine> Simulation<E> {
    pub fn new(
        mut engine: E,
        config: SimulationConfig,
    ) -> Self {
        engine.set_charge_strength(config.charge_strength);
        engine.set_link_distance(config.link_distance);
        info!(
            "simulation::configured::charge_strength::{}::link_distance::{}::cooldown_ticks::{}",
            config.charge_strength, config.link_distance, config.cooldown_ticks
        );

        Self {
            engine,
            config,
            graph: Arc::new(TransactionGraph::new()),
            positions: Vec::new(),
            ticks: 0,
            state: SimulationState::Settled,
        }
    }

    /// Starts a fresh run for `graph`, discarding the previous one.
    pub fn load(
        &mut self,
        graph: Arc<TransactionGraph>,
    ) {
        self.positions = self.engine.reset(&graph);
        self.positions.resize(graph.node_count(), NodePosition::default());
        self.graph = graph;
        self.ticks = 0;
        self.state = if self.config.cooldown_ticks == 0 { SimulationState::Settled } else { SimulationState::Running };
        debug!("simulation::load::nodes::{}::links::{}", self.graph.node_count(), self.graph.link_count());
    }

    /// Advances the layout by one tick. Returns `false` once settled.
    pub fn step(&mut self) -> bool {
        if self.state == SimulationState::Settled {
            return false;
        }

        self.engine.tick(&mut self.positions);
        for position in self.positions.iter_mut().filter(|p| p.is_pinned()) {
            position.hold_pin();
        }

        self.ticks += 1;
        if self.ticks >= self.config.cooldown_ticks {
            self.state = SimulationState::Settled;
            debug!("simulation::settled::after_ticks::{}", self.ticks);
        }
        true
    }

    /// One animation frame: a tick, then a paint of every node.
    pub fn frame<C: DrawingContext>(
        &mut self,
        ctx: &mut C,
        global_scale: f64,
        style: &NodeStyle,
    ) -> FrameStats {
        self.step();
        paint_frame(&self.graph, &self.positions, ctx, global_scale, style)
    }

    /// Moves a node while it is being dragged.
    pub fn drag(
        &mut self,
        node_id: usize,
        x: f64,
        y: f64,
    ) -> Result<(), SimulationError> {
        let position = self.positions.get_mut(node_id).ok_or(SimulationError::UnknownNode(node_id))?;
        position.x = x;
        position.y = y;
        if position.is_pinned() {
            position.pin();
        }
        Ok(())
    }

    /// Pins a released node where it was dropped.
    pub fn drag_end(
        &mut self,
        node_id: usize,
    ) -> Result<(), SimulationError> {
        let position = self.positions.get_mut(node_id).ok_or(SimulationError::UnknownNode(node_id))?;
        position.pin();
        debug!("simulation::drag_end::pinned::{}::at::{}::{}", node_id, position.x, position.y);
        Ok(())
    }

    /// Refits the view to the whole graph. Graph and positions are untouched.
    pub fn background_click(&mut self) {
        self.engine
            .zoom_to_fit(self.config.zoom_to_fit_duration(), self.config.zoom_to_fit_padding);
    }

    pub fn graph(&self) -> &Arc<TransactionGraph> {
        &self.graph
    }

    pub fn positions(&self) -> &[NodePosition] {
        &self.positions
    }

    pub fn ticks(&self) -> u32 {
        self.ticks
    }

    pub fn state(&self) -> SimulationState {
        self.state
    }

    pub fn is_settled(&self) -> bool {
        self.state == SimulationState::Settled
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}
