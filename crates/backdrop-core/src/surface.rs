use crate::color::Hsla;
use glam::Vec2;

/// Colour stop for a radial gradient; `offset` in [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorStop {
    pub offset: f32,
    pub color: Hsla,
}

/// Drawing target. Coordinates are CSS pixels; the implementation applies
/// the device pixel ratio itself.
pub trait Surface {
    /// Built gradient, kept by the renderer between frames.
    type Gradient;

    fn resize(&mut self, width: f64, height: f64, device_pixel_ratio: f64);
    fn clear(&mut self);
    fn radial_gradient(&mut self, center: Vec2, radius: f32, stops: &[ColorStop]) -> Self::Gradient;
    fn fill_with_gradient(&mut self, gradient: &Self::Gradient);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Hsla);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Hsla);
    fn fill_text(&mut self, at: Vec2, text: &str, color: Hsla);
}
