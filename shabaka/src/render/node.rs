use tracing::warn;

use super::DrawingContext;
use super::TextBaseline;
use crate::config::NodeStyle;
use crate::constants::FULL_CIRCLE;
use crate::model::Node;
use crate::model::NodePosition;

/// What a single `paint_node` call ended up drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodePaint {
    /// Circle and label, plus the icon when the node has one
    Full,
    /// Circle and label; the node's icon could not be loaded or drawn
    TextOnly,
    /// Nothing, the position is not usable yet
    Skipped,
}

/// Zoom factor used for sizing. Anything non-finite or non-positive falls
/// back to 1 so a bad zoom never produces an infinite font.
pub fn effective_scale(global_scale: f64) -> f64 {
    if global_scale.is_finite() && global_scale > 0.0 { global_scale } else { 1.0 }
}

/// Paints one node at its simulation position.
///
/// Draws a glowing filled circle of radius `value * radius_per_value`, the
/// abbreviated address centred on the node, and the node icon to the left of
/// the text. Label and icon shrink with zoom (`size / scale`) so they stay
/// legible. Only the surface is touched.
pub fn paint_node<C: DrawingContext>(
    node: &Node,
    position: &NodePosition,
    ctx: &mut C,
    global_scale: f64,
    style: &NodeStyle,
) -> NodePaint {
    if !position.is_finite() {
        return NodePaint::Skipped;
    }

    let scale = effective_scale(global_scale);
    let (x, y) = (position.x, position.y);

    let font_size = style.font_size / scale;
    ctx.set_font(&format!("{}px {}", font_size, style.font_family));
    let text_width = ctx.measure_text(&node.display_name);
    let icon_size = style.icon_size / scale;

    // circle
    ctx.set_fill_style(&style.fill_color);
    ctx.begin_path();
    ctx.arc(x, y, f64::from(node.value) * style.radius_per_value, 0.0, FULL_CIRCLE);
    ctx.set_shadow_color(node.color.as_deref().unwrap_or(&style.glow_color));
    ctx.set_shadow_blur(style.shadow_blur);
    ctx.fill();
    ctx.set_shadow_blur(0.0);

    // text
    ctx.set_text_baseline(TextBaseline::Middle);
    ctx.set_fill_style(&style.text_color);
    ctx.fill_text(&node.display_name, x - text_width / 2.0 + icon_size, y);

    let Some(src) = node.icon.as_deref() else {
        return NodePaint::Full;
    };

    // icon
    let drawn = ctx.load_image(src).and_then(|image| {
        ctx.draw_image(
            &image,
            x - icon_size / 2.0 - text_width / 2.0,
            y - icon_size / 2.0,
            icon_size,
            icon_size,
        )
    });

    match drawn {
        Ok(()) => NodePaint::Full,
        Err(e) => {
            warn!("render::paint_node::node::{}::icon_degraded::{}", node.id, e);
            NodePaint::TextOnly
        },
    }
}
