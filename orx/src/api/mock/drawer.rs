use super::graphics::GraphicsLogPtr;
use orx_api::{ColorBuffer, ColorRGBa, Drawer, Matrix44, Point3D};

// A draw call and the render target bound while it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear {
        color: ColorRGBa,
        target: Option<u64>,
    },
    LineSegments {
        count: usize,
        stroke: Option<ColorRGBa>,
        model: Matrix44,
        target: Option<u64>,
    },
    Image {
        texture: u64,
        projection: Matrix44,
        target: Option<u64>,
    },
}

/// Drawer double tracking transforms and style, recording draw calls.
pub struct MockDrawer {
    width: u32,
    height: u32,
    projection: Matrix44,
    view: Matrix44,
    model: Matrix44,
    fill: Option<ColorRGBa>,
    stroke: Option<ColorRGBa>,
    transforms: Vec<(Matrix44, Matrix44, Matrix44)>,
    styles: Vec<(Option<ColorRGBa>, Option<ColorRGBa>)>,
    log: GraphicsLogPtr,
    pub calls: Vec<DrawCall>,
}

impl MockDrawer {
    pub fn new(width: u32, height: u32, log: GraphicsLogPtr) -> MockDrawer {
        MockDrawer {
            width: width,
            height: height,
            projection: Matrix44::identity(),
            view: Matrix44::identity(),
            model: Matrix44::identity(),
            fill: Some(ColorRGBa::WHITE),
            stroke: Some(ColorRGBa::BLACK),
            transforms: Vec::new(),
            styles: Vec::new(),
            log: log,
            calls: Vec::new(),
        }
    }

    pub fn fill(&self) -> Option<ColorRGBa> {
        self.fill
    }

    pub fn stroke(&self) -> Option<ColorRGBa> {
        self.stroke
    }

    /// Depth of pushed transforms plus pushed styles; zero when balanced.
    pub fn stack_depth(&self) -> usize {
        self.transforms.len() + self.styles.len()
    }

    fn bound_target(&self) -> Option<u64> {
        self.log.borrow().bound_target()
    }
}

impl Drawer for MockDrawer {
    fn projection(&self) -> Matrix44 {
        self.projection
    }

    fn set_projection(&mut self, projection: Matrix44) {
        self.projection = projection;
    }

    fn view(&self) -> Matrix44 {
        self.view
    }

    fn set_view(&mut self, view: Matrix44) {
        self.view = view;
    }

    fn model(&self) -> Matrix44 {
        self.model
    }

    fn set_model(&mut self, model: Matrix44) {
        self.model = model;
    }

    fn push_transforms(&mut self) {
        self.transforms.push((self.projection, self.view, self.model));
    }

    fn pop_transforms(&mut self) {
        if let Some((projection, view, model)) = self.transforms.pop() {
            self.projection = projection;
            self.view = view;
            self.model = model;
        }
    }

    fn push_style(&mut self) {
        self.styles.push((self.fill, self.stroke));
    }

    fn pop_style(&mut self) {
        if let Some((fill, stroke)) = self.styles.pop() {
            self.fill = fill;
            self.stroke = stroke;
        }
    }

    fn set_fill(&mut self, fill: Option<ColorRGBa>) {
        self.fill = fill;
    }

    fn set_stroke(&mut self, stroke: Option<ColorRGBa>) {
        self.stroke = stroke;
    }

    fn ortho(&mut self) {
        self.projection = Matrix44::ortho(0.0, self.width as f64, self.height as f64, 0.0, -1.0, 1.0);
        self.view = Matrix44::identity();
        self.model = Matrix44::identity();
    }

    fn clear(&mut self, color: ColorRGBa) {
        let target = self.bound_target();
        self.calls.push(DrawCall::Clear { color, target });
    }

    fn line_segments(&mut self, segments: &[(Point3D<f64>, Point3D<f64>)]) {
        let target = self.bound_target();
        self.calls.push(DrawCall::LineSegments {
            count: segments.len(),
            stroke: self.stroke,
            model: self.model,
            target: target,
        });
    }

    fn image(&mut self, image: &dyn ColorBuffer) {
        let target = self.bound_target();
        self.calls.push(DrawCall::Image {
            texture: image.texture_handle(),
            projection: self.projection,
            target: target,
        });
    }
}
