use crate::config::VRConfig;
use crate::hmd::{HmdEvent, HmdEvents, HmdState};
use crate::vr_frame::GridOverlay;
use orx_api::{Eye, GraphicsContext, GraphicsError, Matrix44, RenderTarget, RenderTargetDescriptor,
              VREvent, VRError, VRRuntime, VRTexture, HMD_DEVICE_INDEX};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Uninitialized,
    Active,
    // Terminal; VR is never re-enabled automatically
    Disabled,
}

// Offscreen targets of both eyes, allocated at the same size.
pub(crate) struct EyeTargets {
    left: Box<dyn RenderTarget>,
    right: Box<dyn RenderTarget>,
    width: u32,
    height: u32,
}

impl EyeTargets {
    fn allocate(graphics: &mut dyn GraphicsContext, width: u32, height: u32)
                -> Result<EyeTargets, GraphicsError> {
        let left = graphics.create_render_target(RenderTargetDescriptor::color(width, height))?;
        let right = match graphics.create_render_target(RenderTargetDescriptor::color(width, height)) {
            Ok(right) => right,
            Err(err) => {
                left.destroy();
                return Err(err);
            }
        };
        Ok(EyeTargets {
            left: left,
            right: right,
            width: width,
            height: height,
        })
    }

    fn destroy(self) {
        self.left.destroy();
        self.right.destroy();
    }

    pub(crate) fn target(&self, eye: Eye) -> &dyn RenderTarget {
        match eye {
            Eye::Left => &*self.left,
            Eye::Right => &*self.right,
        }
    }

    pub(crate) fn target_mut(&mut self, eye: Eye) -> &mut dyn RenderTarget {
        match eye {
            Eye::Left => &mut *self.left,
            Eye::Right => &mut *self.right,
        }
    }

    fn texture(&self, eye: Eye) -> Option<VRTexture> {
        self.target(eye)
            .color_buffer(0)
            .map(|buffer| VRTexture::opengl(buffer.texture_handle()))
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct FrameStatus {
    pub index: u64,
    // a pose was obtained for this frame
    pub posed: bool,
    pub submitted: bool,
}

/// Owns the runtime handle, the eye render targets and the HMD state for
/// the lifetime of a program.
pub struct VRSession {
    runtime: Box<dyn VRRuntime>,
    pub(crate) config: VRConfig,
    pub(crate) state: SessionState,
    pub(crate) hmd: HmdState,
    pub(crate) events: HmdEvents,
    pub(crate) targets: Option<EyeTargets>,
    pub(crate) frame: FrameStatus,
    pub(crate) grid: GridOverlay,
}

impl VRSession {
    pub fn new(runtime: Box<dyn VRRuntime>, config: VRConfig) -> VRSession {
        let grid = GridOverlay::new(10);
        VRSession {
            runtime: runtime,
            config: config,
            state: SessionState::Uninitialized,
            hmd: HmdState::default(),
            events: HmdEvents::default(),
            targets: None,
            frame: FrameStatus::default(),
            grid: grid,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == SessionState::Active
    }

    pub fn hmd(&self) -> &HmdState {
        &self.hmd
    }

    pub fn events(&self) -> &HmdEvents {
        &self.events
    }

    pub fn events_mut(&mut self) -> &mut HmdEvents {
        &mut self.events
    }

    pub fn config(&self) -> &VRConfig {
        &self.config
    }

    /// Clip planes and the fallback size take effect on the next `initialize`.
    pub fn config_mut(&mut self) -> &mut VRConfig {
        &mut self.config
    }

    pub fn frame_index(&self) -> u64 {
        self.frame.index
    }

    pub fn frame_submitted(&self) -> bool {
        self.frame.submitted
    }

    pub fn render_target_size(&self) -> Option<(u32, u32)> {
        self.targets.as_ref().map(|targets| (targets.width, targets.height))
    }

    pub fn render_target(&self, eye: Eye) -> Option<&dyn RenderTarget> {
        self.targets.as_ref().map(|targets| targets.target(eye))
    }

    /// Opens the runtime, loads the HMD geometry and allocates the eye targets.
    ///
    /// Must be called after the graphics context is current. Runtime failures
    /// disable the session and still return `Ok`, the host keeps running
    /// without VR. On an active session this re-reads the HMD geometry; a
    /// failure to reallocate resized targets is returned as an error.
    pub fn initialize(&mut self, graphics: &mut dyn GraphicsContext) -> Result<SessionState, VRError> {
        match self.state {
            SessionState::Disabled => {
                debug!("VR session is disabled, skipping initialization");
                return Ok(SessionState::Disabled);
            },
            SessionState::Active => {
                if !self.runtime.is_initialized() {
                    error!("Disabling VR, runtime is no longer initialized");
                    self.teardown();
                    return Ok(SessionState::Disabled);
                }
                return match self.load_display(graphics) {
                    Ok(()) => Ok(SessionState::Active),
                    Err(err @ VRError::Graphics(_)) => Err(err),
                    Err(err) => {
                        error!("Disabling VR after runtime failure: {}", err);
                        self.teardown();
                        Ok(SessionState::Disabled)
                    }
                };
            },
            SessionState::Uninitialized => {}
        }

        debug!("Initializing VR runtime");
        if let Err(err) = self.runtime.initialize() {
            error!("Disabling because no VR support due to: {} \
                    (see https://github.com/ValveSoftware/openvr/wiki/HmdError)", err);
            self.state = SessionState::Disabled;
            return Ok(SessionState::Disabled);
        }
        if let Some(path) = self.runtime.runtime_path() {
            debug!("using runtime: {}", path);
        }

        if let Err(err) = self.load_display(graphics) {
            error!("Disabling VR: {}", err);
            self.release_targets();
            self.runtime.shutdown();
            self.state = SessionState::Disabled;
            return Ok(SessionState::Disabled);
        }

        self.state = SessionState::Active;
        info!("VR session active, rendering {:?} per eye", self.render_target_size());
        Ok(SessionState::Active)
    }

    fn load_display(&mut self, graphics: &mut dyn GraphicsContext) -> Result<(), VRError> {
        let recommended = self.runtime.recommended_render_target_size()?;
        let (width, height) = self.config.render_target_size(recommended);
        debug!("Suggested render target size: {}x{}", width, height);

        let (near_z, far_z) = (self.config.near_z, self.config.far_z);
        let projection_left = self.runtime.projection_matrix(Eye::Left, near_z, far_z)?.to_matrix44();
        let projection_right = self.runtime.projection_matrix(Eye::Right, near_z, far_z)?.to_matrix44();
        debug!("projection left: {:?}", projection_left);
        debug!("projection right: {:?}", projection_right);

        let eye_left = self.runtime.eye_to_head_transform(Eye::Left)?.to_matrix44();
        let eye_right = self.runtime.eye_to_head_transform(Eye::Right)?.to_matrix44();
        debug!("eye left: {:?}", eye_left);
        debug!("eye right: {:?}", eye_right);

        self.ensure_targets(graphics, width, height)?;

        self.hmd.projection_left = projection_left;
        self.hmd.projection_right = projection_right;
        self.hmd.eye_left = eye_left;
        self.hmd.eye_right = eye_right;
        Ok(())
    }

    fn ensure_targets(&mut self, graphics: &mut dyn GraphicsContext, width: u32, height: u32)
                      -> Result<(), GraphicsError> {
        if let Some(ref targets) = self.targets {
            if targets.width == width && targets.height == height {
                return Ok(());
            }
        }
        // stale targets go before new ones are allocated
        self.release_targets();
        self.targets = Some(EyeTargets::allocate(graphics, width, height)?);
        Ok(())
    }

    fn release_targets(&mut self) {
        if let Some(targets) = self.targets.take() {
            debug!("Destroying {}x{} eye render targets", targets.width, targets.height);
            targets.destroy();
        }
    }

    /// Waits for the compositor's predicted head pose and recomputes the
    /// per-eye views. Returns false when the frame has to be dropped.
    pub fn poll_pose(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        self.frame.index += 1;
        self.frame.posed = false;
        self.frame.submitted = false;

        self.poll_runtime_events();
        if !self.is_active() {
            return false;
        }

        let poses = match self.runtime.wait_get_poses() {
            Ok(poses) => poses,
            Err(err) => {
                warn!("Dropping frame {}: {}", self.frame.index, err);
                return false;
            }
        };

        let head = match poses.get(HMD_DEVICE_INDEX) {
            Some(pose) if pose.pose_is_valid => pose.device_to_absolute_tracking.to_matrix44(),
            Some(_) => Matrix44::identity(),
            None => {
                warn!("Dropping frame {}: {}", self.frame.index, VRError::NoPose);
                return false;
            }
        };

        self.hmd.update_views(&head);
        self.frame.posed = true;
        self.events.queue(HmdEvent::Updated {
            frame: self.frame.index,
            view_left: self.hmd.view_left,
            view_right: self.hmd.view_right,
        });
        true
    }

    fn poll_runtime_events(&mut self) {
        let mut quit = false;
        for event in self.runtime.poll_events() {
            if event == VREvent::Quit {
                quit = true;
            }
            self.events.queue(HmdEvent::Runtime(event));
        }
        if quit {
            warn!("VR runtime requested quit");
            self.teardown();
        }
    }

    /// Hands both eye textures to the compositor. Failures drop the frame and
    /// leave the session active.
    pub fn submit(&mut self) -> bool {
        if !self.is_active() {
            return false;
        }
        if self.frame.submitted {
            return true;
        }
        if !self.frame.posed {
            debug!("Not submitting frame {} without a pose", self.frame.index);
            return false;
        }
        let targets = match self.targets {
            Some(ref targets) => targets,
            None => return false,
        };

        let mut submitted = true;
        for &eye in Eye::ALL.iter() {
            let result = match targets.texture(eye) {
                Some(texture) => self.runtime.submit(eye, &texture),
                None => Err(VRError::Compositor(format!("{:?} eye target has no color buffer", eye))),
            };
            if let Err(err) = result {
                warn!("Dropping frame {}, {:?} eye not submitted: {}", self.frame.index, eye, err);
                submitted = false;
            }
        }
        // never retried within the same frame
        self.frame.submitted = true;
        submitted
    }

    /// Releases the eye targets and shuts the runtime down. Idempotent.
    pub fn teardown(&mut self) {
        match self.state {
            SessionState::Disabled => return,
            SessionState::Uninitialized => {
                self.state = SessionState::Disabled;
                return;
            },
            SessionState::Active => {}
        }
        self.state = SessionState::Disabled;
        self.release_targets();
        self.runtime.shutdown();
        info!("Cleaned up VR");
    }
}

impl Drop for VRSession {
    fn drop(&mut self) {
        self.teardown();
    }
}
