use serde::Deserialize;
use serde::Serialize;

use crate::constants::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub node: NodeStyle,
    pub link: LinkStyle,
}

/// Read-only constants used by the node painter.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct NodeStyle {
    pub radius_per_value: f64,
    pub fill_color: String,
    pub glow_color: String,
    pub shadow_blur: f64,
    pub text_color: String,
    pub font_family: String,
    pub font_size: f64,
    pub icon_size: f64,
}

impl Default for NodeStyle {
    fn default() -> Self {
        Self {
            radius_per_value: NODE_RADIUS_PER_VALUE,
            fill_color: NODE_FILL_COLOR.to_string(),
            glow_color: NODE_GLOW_COLOR.to_string(),
            shadow_blur: NODE_SHADOW_BLUR,
            text_color: NODE_TEXT_COLOR.to_string(),
            font_family: NODE_FONT_FAMILY.to_string(),
            font_size: NODE_FONT_SIZE,
            icon_size: NODE_ICON_SIZE,
        }
    }
}

/// Link styling handed to the layout engine, which draws links itself.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct LinkStyle {
    pub width: f64,
    pub color: String,
    pub curvature: f64,
    pub directional_particles: u32,
    pub directional_particle_width: f64,
    pub directional_arrow_length: f64,
    pub directional_arrow_rel_pos: f64,
    pub directional_arrow_color: String,
}

impl Default for LinkStyle {
    fn default() -> Self {
        Self {
            width: LINK_WIDTH,
            color: LINK_COLOR.to_string(),
            curvature: LINK_CURVATURE,
            directional_particles: LINK_DIRECTIONAL_PARTICLES,
            directional_particle_width: LINK_DIRECTIONAL_PARTICLE_WIDTH,
            directional_arrow_length: LINK_ARROW_LENGTH,
            directional_arrow_rel_pos: LINK_ARROW_REL_POS,
            directional_arrow_color: LINK_ARROW_COLOR.to_string(),
        }
    }
}
