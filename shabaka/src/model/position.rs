use serde::Deserialize;
use serde::Serialize;

/// Layout state of one node, written by the layout engine every tick.
///
/// `fx`/`fy` pin the node: when set, the simulation holds the node there.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NodePosition {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub fx: Option<f64>,
    pub fy: Option<f64>,
}

impl NodePosition {
    pub fn at(
        x: f64,
        y: f64,
    ) -> Self {
        Self { x, y, ..Default::default() }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    pub fn is_pinned(&self) -> bool {
        self.fx.is_some() || self.fy.is_some()
    }

    pub fn pin(&mut self) {
        self.fx = Some(self.x);
        self.fy = Some(self.y);
    }

    /// Moves a pinned node back onto its pin and zeroes its velocity.
    pub fn hold_pin(&mut self) {
        if let Some(fx) = self.fx {
            self.x = fx;
            self.vx = 0.0;
        }
        if let Some(fy) = self.fy {
            self.y = fy;
            self.vy = 0.0;
        }
    }
}
