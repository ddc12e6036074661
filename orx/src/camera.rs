use euclid::default::{Point3D, Vector3D};
use orx_api::{Drawer, Extension, ExtensionError, InputEvent, Key, Matrix44, MouseButton, Program};
use std::f64::consts::PI;

// Keyboard steps, scaled by the controls' key speed
const KEY_DELTA: f64 = 0.05;
const KEY_ANGLE_DEGREES: f64 = 5.0;

// Mouse sensitivities
const DRAG_DEGREES_PER_PIXEL: f64 = 0.25;
const PAN_PER_PIXEL: f64 = 0.002;
const DOLLY_PER_SCROLL: f64 = 0.1;

const MIN_RADIUS: f64 = 0.01;
const POLAR_EPSILON: f64 = 1e-3;

/// Camera orbiting a look-at point on a sphere.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalCamera {
    pub look_at: Point3D<f64>,
    radius: f64,
    // around +Y, zero looks down -Z from +Z
    azimuth: f64,
    // from +Y
    polar: f64,
    pub fov: f64,
    pub near: f64,
    pub far: f64,
}

impl OrbitalCamera {
    pub fn new(eye: Point3D<f64>, look_at: Point3D<f64>, fov: f64, near: f64, far: f64) -> OrbitalCamera {
        let offset = eye - look_at;
        let radius = offset.length().max(MIN_RADIUS);
        let polar = (offset.y / radius).max(-1.0).min(1.0).acos();
        OrbitalCamera {
            look_at: look_at,
            radius: radius,
            azimuth: offset.x.atan2(offset.z),
            polar: clamp_polar(polar),
            fov: fov,
            near: near,
            far: far,
        }
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn eye(&self) -> Point3D<f64> {
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = self.azimuth.sin_cos();
        self.look_at + Vector3D::new(
            self.radius * sin_polar * sin_azimuth,
            self.radius * cos_polar,
            self.radius * sin_polar * cos_azimuth,
        )
    }

    /// Orbits around the look-at point, angles in degrees.
    pub fn rotate(&mut self, azimuth_degrees: f64, polar_degrees: f64) {
        self.azimuth = (self.azimuth + azimuth_degrees.to_radians()) % (2.0 * PI);
        self.polar = clamp_polar(self.polar + polar_degrees.to_radians());
    }

    /// Moves towards (positive) or away from the look-at point.
    pub fn dolly(&mut self, distance: f64) {
        self.radius = (self.radius - distance).max(MIN_RADIUS);
    }

    /// Moves eye and look-at point together, in camera space.
    pub fn pan(&mut self, x: f64, y: f64, z: f64) {
        let (right, up, forward) = self.basis();
        self.look_at = self.look_at + right * x + up * y + forward * z;
    }

    fn basis(&self) -> (Vector3D<f64>, Vector3D<f64>, Vector3D<f64>) {
        let forward = (self.look_at - self.eye()).normalize();
        let right = forward.cross(Vector3D::new(0.0, 1.0, 0.0)).normalize();
        let up = right.cross(forward);
        (right, up, forward)
    }

    pub fn view_matrix(&self) -> Matrix44 {
        look_at(self.eye(), self.look_at, Vector3D::new(0.0, 1.0, 0.0))
    }

    pub fn projection_matrix(&self, aspect: f64) -> Matrix44 {
        perspective(self.fov, aspect, self.near, self.far)
    }

    pub fn before_draw(&self, drawer: &mut dyn Drawer, program: &dyn Program) {
        let aspect = if program.height() == 0 {
            1.0
        } else {
            program.width() as f64 / program.height() as f64
        };
        drawer.push_transforms();
        drawer.set_projection(self.projection_matrix(aspect));
        drawer.set_view(self.view_matrix());
    }

    pub fn after_draw(&self, drawer: &mut dyn Drawer) {
        drawer.pop_transforms();
    }
}

fn clamp_polar(polar: f64) -> f64 {
    polar.max(POLAR_EPSILON).min(PI - POLAR_EPSILON)
}

/// Perspective projection, vertical field of view in degrees.
pub fn perspective(fov_degrees: f64, aspect: f64, near: f64, far: f64) -> Matrix44 {
    let f = 1.0 / (fov_degrees.to_radians() / 2.0).tan();
    let nf = 1.0 / (near - far);
    Matrix44::new(
        f / aspect, 0.0, 0.0,                   0.0,
        0.0,        f,   0.0,                   0.0,
        0.0,        0.0, (far + near) * nf,     -1.0,
        0.0,        0.0, 2.0 * far * near * nf, 0.0,
    )
}

pub fn look_at(eye: Point3D<f64>, target: Point3D<f64>, up: Vector3D<f64>) -> Matrix44 {
    let z = (eye - target).normalize();
    let x = up.cross(z).normalize();
    let y = z.cross(x);
    let e = eye.to_vector();
    Matrix44::new(
        x.x,        y.x,        z.x,        0.0,
        x.y,        y.y,        z.y,        0.0,
        x.z,        y.z,        z.z,        0.0,
        -x.dot(e),  -y.dot(e),  -z.dot(e),  1.0,
    )
}

/// Mouse and keyboard interaction for an [`OrbitalCamera`].
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalControls {
    pub user_interaction: bool,
    pub key_speed: f64,
}

impl OrbitalControls {
    pub fn new(user_interaction: bool, key_speed: f64) -> OrbitalControls {
        OrbitalControls {
            user_interaction: user_interaction,
            key_speed: key_speed,
        }
    }

    pub fn handle(&self, camera: &mut OrbitalCamera, events: &[InputEvent]) {
        if !self.user_interaction {
            return;
        }
        for event in events {
            match *event {
                InputEvent::MouseDragged { button: MouseButton::Left, dx, dy } => {
                    camera.rotate(-dx * DRAG_DEGREES_PER_PIXEL, -dy * DRAG_DEGREES_PER_PIXEL);
                },
                InputEvent::MouseDragged { button: MouseButton::Right, dx, dy } => {
                    let scale = PAN_PER_PIXEL * camera.radius();
                    camera.pan(-dx * scale, dy * scale, 0.0);
                },
                InputEvent::MouseDragged { .. } => {},
                InputEvent::MouseScrolled { dy } => {
                    let factor = (1.0 - DOLLY_PER_SCROLL).powf(dy);
                    camera.dolly(camera.radius() * (1.0 - factor));
                },
                InputEvent::KeyDown(key) | InputEvent::KeyRepeat(key) => self.handle_key(camera, key),
                InputEvent::KeyUp(_) => {},
            }
        }
    }

    fn handle_key(&self, camera: &mut OrbitalCamera, key: Key) {
        let delta = KEY_DELTA * self.key_speed;
        let angle = KEY_ANGLE_DEGREES * self.key_speed;
        match key {
            Key::Up => camera.pan(0.0, 0.0, delta),
            Key::Down => camera.pan(0.0, 0.0, -delta),
            Key::Left => camera.pan(-delta, 0.0, 0.0),
            Key::Right => camera.pan(delta, 0.0, 0.0),
            Key::W => camera.rotate(0.0, -angle),
            Key::S => camera.rotate(0.0, angle),
            Key::A => camera.rotate(angle, 0.0),
            Key::D => camera.rotate(-angle, 0.0),
            Key::Other(_) => {},
        }
    }
}

/// Extension that provides orbital camera view and controls.
#[derive(Debug, Clone)]
pub struct Orbital {
    pub enabled: bool,
    pub eye: Point3D<f64>,
    pub look_at: Point3D<f64>,
    pub near: f64,
    pub far: f64,
    pub fov: f64,
    pub user_interaction: bool,
    pub key_speed: f64,
    camera: Option<OrbitalCamera>,
    controls: Option<OrbitalControls>,
}

impl Default for Orbital {
    fn default() -> Orbital {
        Orbital {
            enabled: true,
            eye: Point3D::new(0.0, 0.0, 10.0),
            look_at: Point3D::origin(),
            near: 0.1,
            far: 1000.0,
            fov: 90.0,
            user_interaction: true,
            key_speed: 1.0,
            camera: None,
            controls: None,
        }
    }
}

impl Orbital {
    /// The camera, built from the public fields on first use.
    pub fn camera(&mut self) -> &mut OrbitalCamera {
        let (eye, look_at, fov, near, far) = (self.eye, self.look_at, self.fov, self.near, self.far);
        self.camera.get_or_insert_with(|| OrbitalCamera::new(eye, look_at, fov, near, far))
    }

    pub fn controls(&mut self) -> &mut OrbitalControls {
        let (user_interaction, key_speed) = (self.user_interaction, self.key_speed);
        self.controls.get_or_insert_with(|| OrbitalControls::new(user_interaction, key_speed))
    }
}

impl Extension for Orbital {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn setup(&mut self, _program: &mut dyn Program) -> Result<(), ExtensionError> {
        self.camera();
        self.controls();
        Ok(())
    }

    fn before_draw(&mut self, drawer: &mut dyn Drawer, program: &mut dyn Program)
                   -> Result<(), ExtensionError> {
        let (user_interaction, key_speed) = (self.user_interaction, self.key_speed);
        let controls = {
            let controls = self.controls();
            controls.user_interaction = user_interaction;
            controls.key_speed = key_speed;
            controls.clone()
        };
        let camera = self.camera();
        controls.handle(camera, program.input_events());
        camera.before_draw(drawer, program);
        Ok(())
    }

    fn after_draw(&mut self, drawer: &mut dyn Drawer, _program: &mut dyn Program)
                  -> Result<(), ExtensionError> {
        self.camera().after_draw(drawer);
        Ok(())
    }
}
