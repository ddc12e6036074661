use openvr_rs as openvr;
use openvr::compositor::texture::{self, Handle, Texture};
use openvr::system::event::Event;
use orx_api::{Eye, HmdMatrix34, HmdMatrix44, TrackedDevicePose, VREvent, VRError, VRRuntime, VRTexture,
              MAX_TRACKED_DEVICE_COUNT};

// OpenVR runtime implementation
pub struct OpenVRRuntime {
    context: Option<openvr::Context>,
    system: Option<openvr::System>,
    compositor: Option<openvr::Compositor>,
}

impl OpenVRRuntime {
    pub fn new() -> OpenVRRuntime {
        OpenVRRuntime {
            context: None,
            system: None,
            compositor: None,
        }
    }

    fn system(&self) -> Result<&openvr::System, VRError> {
        self.system.as_ref().ok_or(VRError::NotInitialized)
    }

    fn compositor(&self) -> Result<&openvr::Compositor, VRError> {
        self.compositor.as_ref().ok_or(VRError::NotInitialized)
    }
}

fn openvr_eye(eye: Eye) -> openvr::Eye {
    match eye {
        Eye::Left => openvr::Eye::Left,
        Eye::Right => openvr::Eye::Right,
    }
}

fn convert_pose(pose: &openvr::TrackedDevicePose) -> TrackedDevicePose {
    TrackedDevicePose {
        device_to_absolute_tracking: HmdMatrix34 { m: *pose.device_to_absolute_tracking() },
        velocity: *pose.velocity(),
        angular_velocity: *pose.angular_velocity(),
        pose_is_valid: pose.pose_is_valid(),
        device_is_connected: pose.device_is_connected(),
    }
}

fn convert_event(device: u32, event: Event) -> Option<VREvent> {
    match event {
        Event::TrackedDeviceActivated => Some(VREvent::DeviceActivated(device)),
        Event::TrackedDeviceDeactivated => Some(VREvent::DeviceDeactivated(device)),
        Event::TrackedDeviceUpdated => Some(VREvent::DeviceUpdated(device)),
        Event::TrackedDeviceUserInteractionStarted => Some(VREvent::Mounted),
        Event::TrackedDeviceUserInteractionEnded => Some(VREvent::Unmounted),
        Event::Quit(_) => Some(VREvent::Quit),
        _ => None,
    }
}

impl VRRuntime for OpenVRRuntime {
    fn initialize(&mut self) -> Result<(), VRError> {
        if self.context.is_some() {
            return Ok(());
        }

        let context = unsafe { openvr::init(openvr::ApplicationType::Scene) }
            .map_err(|e| VRError::Init(format!("{:?}", e)))?;

        let interfaces = context.system().and_then(|system| {
            context.compositor().map(|compositor| (system, compositor))
        });
        match interfaces {
            Ok((system, compositor)) => {
                self.system = Some(system);
                self.compositor = Some(compositor);
                self.context = Some(context);
                Ok(())
            },
            Err(e) => {
                unsafe { context.shutdown(); }
                Err(VRError::Init(format!("OpenVR interface unavailable: {:?}", e)))
            }
        }
    }

    fn shutdown(&mut self) {
        self.compositor = None;
        self.system = None;
        if let Some(context) = self.context.take() {
            // Has to happen before the graphics context goes away
            unsafe { context.shutdown(); }
        }
    }

    fn is_initialized(&self) -> bool {
        self.context.is_some()
    }

    fn recommended_render_target_size(&self) -> Result<(u32, u32), VRError> {
        Ok(self.system()?.recommended_render_target_size())
    }

    fn projection_matrix(&self, eye: Eye, near_z: f32, far_z: f32) -> Result<HmdMatrix44, VRError> {
        let m = self.system()?.projection_matrix(openvr_eye(eye), near_z, far_z);
        Ok(HmdMatrix44 { m: m })
    }

    fn eye_to_head_transform(&self, eye: Eye) -> Result<HmdMatrix34, VRError> {
        let m = self.system()?.eye_to_head_transform(openvr_eye(eye));
        Ok(HmdMatrix34 { m: m })
    }

    fn wait_get_poses(&mut self) -> Result<Vec<TrackedDevicePose>, VRError> {
        let poses = self.compositor()?
                        .wait_get_poses()
                        .map_err(|e| VRError::Compositor(format!("{:?}", e)))?;
        Ok(poses.render.iter().take(MAX_TRACKED_DEVICE_COUNT).map(convert_pose).collect())
    }

    fn submit(&mut self, eye: Eye, texture: &VRTexture) -> Result<(), VRError> {
        let color_space = match texture.color_space {
            orx_api::ColorSpace::Auto => texture::ColorSpace::Auto,
            orx_api::ColorSpace::Gamma => texture::ColorSpace::Gamma,
            orx_api::ColorSpace::Linear => texture::ColorSpace::Linear,
        };
        let native = Texture {
            handle: Handle::OpenGLTexture(texture.handle as usize),
            color_space: color_space,
        };
        let bounds = texture::Bounds {
            min: (texture.bounds[0], texture.bounds[1]),
            max: (texture.bounds[2], texture.bounds[3]),
        };
        unsafe {
            self.compositor()?
                .submit(openvr_eye(eye), &native, Some(&bounds), None)
                .map_err(|e| VRError::Compositor(format!("{:?}", e)))
        }
    }

    fn poll_events(&mut self) -> Vec<VREvent> {
        let mut result = Vec::new();
        let system = match self.system {
            Some(ref system) => system,
            None => return result,
        };
        while let Some((info, _pose)) = system.poll_next_event_with_pose(openvr::TrackingUniverseOrigin::Standing) {
            if let Some(event) = convert_event(info.tracked_device_index, info.event) {
                result.push(event);
            }
        }
        result
    }
}

impl Drop for OpenVRRuntime {
    fn drop(&mut self) {
        self.shutdown();
    }
}
