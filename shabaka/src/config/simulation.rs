use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

use crate::constants::CHARGE_STRENGTH;
use crate::constants::COOLDOWN_TICKS;
use crate::constants::LINK_DISTANCE;
use crate::constants::ZOOM_TO_FIT_DURATION_MS;
use crate::constants::ZOOM_TO_FIT_PADDING;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SimulationConfig {
    pub charge_strength: f64,
    pub link_distance: f64,
    pub cooldown_ticks: u32,
    pub zoom_to_fit_duration_ms: u64,
    pub zoom_to_fit_padding: f64,
}

impl SimulationConfig {
    pub fn zoom_to_fit_duration(&self) -> Duration {
        Duration::from_millis(self.zoom_to_fit_duration_ms)
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            charge_strength: CHARGE_STRENGTH,
            link_distance: LINK_DISTANCE,
            cooldown_ticks: COOLDOWN_TICKS,
            zoom_to_fit_duration_ms: ZOOM_TO_FIT_DURATION_MS,
            zoom_to_fit_padding: ZOOM_TO_FIT_PADDING,
        }
    }
}
