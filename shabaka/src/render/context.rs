use crate::error::RenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
    Alphabetic,
    Bottom,
}

/// The 2D drawing surface a frame is painted on.
///
/// Mirrors the subset of a canvas 2D context the node painter needs. Path and
/// text calls cannot fail; image loading and compositing can, and callers
/// treat those failures as non-fatal.
pub trait DrawingContext {
    type Image;

    fn begin_path(&mut self);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    );
    fn fill(&mut self);

    fn set_fill_style(
        &mut self,
        color: &str,
    );
    fn set_shadow_color(
        &mut self,
        color: &str,
    );
    fn set_shadow_blur(
        &mut self,
        blur: f64,
    );

    fn set_font(
        &mut self,
        font: &str,
    );
    fn set_text_baseline(
        &mut self,
        baseline: TextBaseline,
    );
    /// Width of `text` in the current font
    fn measure_text(
        &mut self,
        text: &str,
    ) -> f64;
    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
    );

    fn load_image(
        &mut self,
        src: &str,
    ) -> Result<Self::Image, RenderError>;
    fn draw_image(
        &mut self,
        image: &Self::Image,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<(), RenderError>;
}
