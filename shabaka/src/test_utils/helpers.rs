use std::collections::HashMap;
use std::collections::HashSet;
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;

use crate::Result;
use crate::error::RenderError;
use crate::model::NodePosition;
use crate::model::TransactionGraph;
use crate::model::TransactionRecord;
use crate::render::DrawingContext;
use crate::render::TextBaseline;
use crate::simulation::LayoutEngine;
use crate::source::TransactionSource;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Font(String),
    MeasureText(String),
    FillStyle(String),
    BeginPath,
    Arc { x: f64, y: f64, radius: f64 },
    ShadowColor(String),
    ShadowBlur(f64),
    Fill,
    TextBaseline(TextBaseline),
    FillText { text: String, x: f64, y: f64 },
    LoadImage(String),
    DrawImage { src: String, x: f64, y: f64, width: f64, height: f64 },
}

/// Drawing surface that records every call. Text is measured as a fixed
/// width per character; images are their source string.
#[derive(Debug, Default)]
pub struct RecordingContext {
    pub ops: Vec<DrawOp>,
    failing_loads: HashSet<String>,
    failing_draws: HashSet<String>,
}

impl RecordingContext {
    pub const CHAR_WIDTH: f64 = 6.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_load(
        mut self,
        src: &str,
    ) -> Self {
        self.failing_loads.insert(src.to_string());
        self
    }

    pub fn failing_draw(
        mut self,
        src: &str,
    ) -> Self {
        self.failing_draws.insert(src.to_string());
        self
    }

    pub fn filled_text(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl DrawingContext for RecordingContext {
    type Image = String;

    fn begin_path(&mut self) {
        self.ops.push(DrawOp::BeginPath);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        _start_angle: f64,
        _end_angle: f64,
    ) {
        self.ops.push(DrawOp::Arc { x, y, radius });
    }

    fn fill(&mut self) {
        self.ops.push(DrawOp::Fill);
    }

    fn set_fill_style(
        &mut self,
        color: &str,
    ) {
        self.ops.push(DrawOp::FillStyle(color.to_string()));
    }

    fn set_shadow_color(
        &mut self,
        color: &str,
    ) {
        self.ops.push(DrawOp::ShadowColor(color.to_string()));
    }

    fn set_shadow_blur(
        &mut self,
        blur: f64,
    ) {
        self.ops.push(DrawOp::ShadowBlur(blur));
    }

    fn set_font(
        &mut self,
        font: &str,
    ) {
        self.ops.push(DrawOp::Font(font.to_string()));
    }

    fn set_text_baseline(
        &mut self,
        baseline: TextBaseline,
    ) {
        self.ops.push(DrawOp::TextBaseline(baseline));
    }

    fn measure_text(
        &mut self,
        text: &str,
    ) -> f64 {
        self.ops.push(DrawOp::MeasureText(text.to_string()));
        text.chars().count() as f64 * Self::CHAR_WIDTH
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
    ) {
        self.ops.push(DrawOp::FillText { text: text.to_string(), x, y });
    }

    fn load_image(
        &mut self,
        src: &str,
    ) -> std::result::Result<Self::Image, RenderError> {
        self.ops.push(DrawOp::LoadImage(src.to_string()));
        if self.failing_loads.contains(src) {
            return Err(RenderError::IconLoadFailure {
                src: src.to_string(),
                reason: "404".to_string(),
            });
        }
        Ok(src.to_string())
    }

    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> std::result::Result<(), RenderError> {
        if self.failing_draws.contains(image) {
            return Err(RenderError::IconDrawFailure {
                src: image.clone(),
                reason: "decode error".to_string(),
            });
        }
        self.ops.push(DrawOp::DrawImage {
            src: image.clone(),
            x,
            y,
            width,
            height,
        });
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    ChargeStrength(f64),
    LinkDistance(f64),
    Reset { nodes: usize, links: usize },
    ZoomToFit { duration: Duration, padding: f64 },
}

/// Layout engine that lays nodes on a line and nudges every node by (1, 1)
/// per tick, pinned or not.
#[derive(Debug, Default)]
pub struct ScriptedLayoutEngine {
    pub calls: Vec<EngineCall>,
    pub ticks: u32,
}

impl LayoutEngine for ScriptedLayoutEngine {
    fn set_charge_strength(
        &mut self,
        strength: f64,
    ) {
        self.calls.push(EngineCall::ChargeStrength(strength));
    }

    fn set_link_distance(
        &mut self,
        distance: f64,
    ) {
        self.calls.push(EngineCall::LinkDistance(distance));
    }

    fn reset(
        &mut self,
        graph: &TransactionGraph,
    ) -> Vec<NodePosition> {
        self.calls.push(EngineCall::Reset {
            nodes: graph.node_count(),
            links: graph.link_count(),
        });
        (0..graph.node_count()).map(|i| NodePosition::at(i as f64 * 10.0, 0.0)).collect()
    }

    fn tick(
        &mut self,
        positions: &mut [NodePosition],
    ) {
        self.ticks += 1;
        for position in positions.iter_mut() {
            position.x += 1.0;
            position.y += 1.0;
        }
    }

    fn zoom_to_fit(
        &mut self,
        duration: Duration,
        padding: f64,
    ) {
        self.calls.push(EngineCall::ZoomToFit { duration, padding });
    }
}

/// Answers each known address after its own delay
pub struct DelayedSource {
    responses: HashMap<String, (Duration, Vec<TransactionRecord>)>,
}

impl DelayedSource {
    pub fn new(responses: Vec<(&str, Duration, Vec<TransactionRecord>)>) -> Self {
        Self {
            responses: responses
                .into_iter()
                .map(|(address, delay, records)| (address.to_string(), (delay, records)))
                .collect(),
        }
    }
}

#[async_trait]
impl TransactionSource for DelayedSource {
    async fn fetch_transactions(
        &self,
        address: &str,
    ) -> Result<Vec<TransactionRecord>> {
        let (delay, records) = self
            .responses
            .get(address)
            .ok_or_else(|| anyhow!("no response scripted for {}", address))?;
        tokio::time::sleep(*delay).await;
        Ok(records.clone())
    }
}
