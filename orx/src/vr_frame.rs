use crate::vr_session::VRSession;
use orx_api::{isolated, ColorRGBa, Drawer, Eye, Matrix44, Point3D};

type Segment = (Point3D<f64>, Point3D<f64>);

/// Floor grid and axis cross drawn into each eye for orientation.
#[derive(Debug, Clone)]
pub struct GridOverlay {
    lines: Vec<Segment>,
}

impl GridOverlay {
    pub fn new(half_extent: i32) -> GridOverlay {
        let e = half_extent as f64;
        let mut lines = Vec::with_capacity(2 * (2 * half_extent as usize + 1));
        for i in -half_extent..=half_extent {
            let x = i as f64;
            lines.push((Point3D::new(x, 0.0, -e), Point3D::new(x, 0.0, e)));
            lines.push((Point3D::new(-e, 0.0, x), Point3D::new(e, 0.0, x)));
        }
        GridOverlay {
            lines: lines,
        }
    }

    pub fn lines(&self) -> &[Segment] {
        &self.lines
    }

    /// Draws the grid at height `offset_y`.
    pub fn draw(&self, drawer: &mut dyn Drawer, offset_y: f64) {
        let origin = Point3D::origin();
        isolated(drawer, |drawer| {
            drawer.set_model(Matrix44::translation(0.0, offset_y, 0.0));

            drawer.set_fill(Some(ColorRGBa::BLACK));
            drawer.set_stroke(Some(ColorRGBa::BLACK));
            drawer.line_segments(&self.lines);

            // Axis cross
            drawer.set_stroke(Some(ColorRGBa::RED));
            drawer.line_segments(&[(origin, Point3D::new(1.0, 0.0, 0.0))]);

            drawer.set_stroke(Some(ColorRGBa::GREEN));
            drawer.line_segments(&[(origin, Point3D::new(0.0, 1.0, 0.0))]);

            drawer.set_stroke(Some(ColorRGBa::BLUE));
            drawer.line_segments(&[(origin, Point3D::new(0.0, 0.0, 1.0))]);
        });
    }
}

impl VRSession {
    /// Renders `scene` once per eye into the eye targets, left first, and
    /// submits both targets to the compositor.
    ///
    /// Without an active session `scene` runs once with the drawer untouched.
    pub fn render_frame<F>(&mut self, drawer: &mut dyn Drawer, mut scene: F)
        where F: FnMut(&mut dyn Drawer)
    {
        if !self.is_active() {
            debug!("VR session is {:?}, rendering monocular", self.state);
            scene(drawer);
            return;
        }
        let targets = match self.targets {
            Some(ref mut targets) => targets,
            None => {
                debug!("No eye render targets, rendering monocular");
                scene(drawer);
                return;
            }
        };

        for &eye in Eye::ALL.iter() {
            self.hmd.current_eye = eye;
            drawer.set_projection(self.hmd.projection());
            drawer.set_view(self.hmd.view());

            let target = targets.target_mut(eye);
            target.bind();
            scene(drawer);
            if self.config.show_grid {
                self.grid.draw(drawer, self.config.grid_offset_y);
            }
            target.unbind();
        }

        self.submit();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_covers_both_axes() {
        let grid = GridOverlay::new(10);
        assert_eq!(grid.lines().len(), 42);
        assert!(grid.lines().contains(&(Point3D::new(-10.0, 0.0, -10.0), Point3D::new(-10.0, 0.0, 10.0))));
        assert!(grid.lines().contains(&(Point3D::new(-10.0, 0.0, 10.0), Point3D::new(10.0, 0.0, 10.0))));
    }
}
