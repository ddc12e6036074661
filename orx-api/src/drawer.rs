use crate::{ColorBuffer, ColorRGBa, Matrix44};
use euclid::default::Point3D;

/// Immediate-mode drawing interface of the host framework.
pub trait Drawer {
    fn projection(&self) -> Matrix44;

    fn set_projection(&mut self, projection: Matrix44);

    fn view(&self) -> Matrix44;

    fn set_view(&mut self, view: Matrix44);

    fn model(&self) -> Matrix44;

    fn set_model(&mut self, model: Matrix44);

    /// Saves projection, view and model.
    fn push_transforms(&mut self);

    fn pop_transforms(&mut self);

    /// Saves fill and stroke.
    fn push_style(&mut self);

    fn pop_style(&mut self);

    fn set_fill(&mut self, fill: Option<ColorRGBa>);

    fn set_stroke(&mut self, stroke: Option<ColorRGBa>);

    /// Orthographic projection over the current target, identity view and model.
    fn ortho(&mut self);

    fn clear(&mut self, color: ColorRGBa);

    fn line_segments(&mut self, segments: &[(Point3D<f64>, Point3D<f64>)]);

    fn image(&mut self, image: &dyn ColorBuffer);
}

/// Runs `f` with transforms and style restored afterwards.
pub fn isolated<F>(drawer: &mut dyn Drawer, f: F)
    where F: FnOnce(&mut dyn Drawer)
{
    drawer.push_transforms();
    drawer.push_style();
    f(drawer);
    drawer.pop_style();
    drawer.pop_transforms();
}
