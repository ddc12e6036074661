use crate::config::VRConfig;
use crate::hmd::{HmdEvents, HmdState};
use crate::vr_session::VRSession;
use orx_api::{Drawer, Extension, ExtensionError, Program, VRRuntime};

/// Renders the program to a VR headset.
///
/// Register it with the host loop and call [`VRExtension::draw`] from the
/// program's draw function; the scene is drawn once per eye with the
/// drawer's projection and view set for that eye.
pub struct VRExtension {
    session: VRSession,
}

impl VRExtension {
    pub fn new(runtime: Box<dyn VRRuntime>, config: VRConfig) -> VRExtension {
        VRExtension {
            session: VRSession::new(runtime, config),
        }
    }

    #[cfg(feature = "openvr")]
    pub fn openvr(config: VRConfig) -> VRExtension {
        use orx_api::VRRuntimeCreator;
        VRExtension::new(crate::api::OpenVRRuntimeCreator::new().new_runtime(), config)
    }

    pub fn session(&self) -> &VRSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut VRSession {
        &mut self.session
    }

    pub fn hmd(&self) -> &HmdState {
        self.session.hmd()
    }

    pub fn events_mut(&mut self) -> &mut HmdEvents {
        self.session.events_mut()
    }

    pub fn set_show_grid(&mut self, show_grid: bool) {
        self.session.config_mut().show_grid = show_grid;
    }

    /// Draws `scene` for the left eye and then the right eye and submits
    /// both to the compositor. Falls back to a single plain call when VR is
    /// not available.
    pub fn draw<F>(&mut self, drawer: &mut dyn Drawer, scene: F)
        where F: FnMut(&mut dyn Drawer)
    {
        self.session.render_frame(drawer, scene);
    }

    pub fn teardown(&mut self) {
        self.session.teardown();
    }
}

impl Extension for VRExtension {
    fn setup(&mut self, program: &mut dyn Program) -> Result<(), ExtensionError> {
        debug!("Initializing VR");
        self.session.initialize(program.graphics())?;
        Ok(())
    }

    // The head pose is read as late as possible before rendering to keep
    // motion-to-photon latency low.
    fn before_draw(&mut self, _drawer: &mut dyn Drawer, _program: &mut dyn Program)
                   -> Result<(), ExtensionError> {
        self.session.poll_pose();
        Ok(())
    }

    fn after_draw(&mut self, _drawer: &mut dyn Drawer, _program: &mut dyn Program)
                  -> Result<(), ExtensionError> {
        if !self.session.frame_submitted() {
            self.session.submit();
        }
        self.session.events_mut().deliver();
        Ok(())
    }
}
