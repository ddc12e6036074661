use super::MockVRControlMsg;
use orx_api::{Eye, HmdMatrix34, HmdMatrix44, TrackedDevicePose, VREvent, VRError, VRRuntime, VRTexture};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// Scripted headset behaviour and a record of every runtime call.
#[derive(Debug)]
pub struct MockVRState {
    pub fail_init: Option<String>,
    pub fail_queries: bool,
    pub fail_poses: bool,
    pub fail_submit: bool,
    pub runtime_path: Option<String>,
    pub render_target_size: (u32, u32),
    pub projection_left: HmdMatrix44,
    pub projection_right: HmdMatrix44,
    pub eye_left: HmdMatrix34,
    pub eye_right: HmdMatrix34,
    pub head_pose: Option<TrackedDevicePose>,
    pub events: VecDeque<VREvent>,

    pub initialized: bool,
    pub init_calls: u32,
    pub shutdown_calls: u32,
    pub wait_calls: u32,
    pub projection_queries: Vec<(Eye, f32, f32)>,
    pub submitted: Vec<(Eye, VRTexture)>,
}

impl Default for MockVRState {
    fn default() -> MockVRState {
        // Simulates an HTC Vive
        MockVRState {
            fail_init: None,
            fail_queries: false,
            fail_poses: false,
            fail_submit: false,
            runtime_path: Some("mock://openvr".into()),
            render_target_size: (1512, 1680),
            projection_left: HmdMatrix44 {
                m: [[0.75620246, 0.0, -0.05713458, 0.0],
                    [0.0, 0.68050665, -0.0021225351, 0.0],
                    [0.0, 0.0, -1.0000999, -0.10000999],
                    [0.0, 0.0, -1.0, 0.0]],
            },
            projection_right: HmdMatrix44 {
                m: [[0.75646526, 0.0, 0.055611316, 0.0],
                    [0.0, 0.68069947, -0.005315368, 0.0],
                    [0.0, 0.0, -1.0000999, -0.10000999],
                    [0.0, 0.0, -1.0, 0.0]],
            },
            eye_left: HmdMatrix34::from_translation(-0.035949998, 0.0, 0.015),
            eye_right: HmdMatrix34::from_translation(0.035949998, 0.0, 0.015),
            head_pose: Some(TrackedDevicePose::valid(HmdMatrix34::from_translation(0.5, 1.7, -0.3))),
            events: VecDeque::new(),
            initialized: false,
            init_calls: 0,
            shutdown_calls: 0,
            wait_calls: 0,
            projection_queries: Vec::new(),
            submitted: Vec::new(),
        }
    }
}

impl MockVRState {
    pub fn handle_msg(&mut self, msg: MockVRControlMsg) {
        match msg {
            MockVRControlMsg::SetHeadPose(pose) => {
                self.head_pose = Some(TrackedDevicePose::valid(pose));
            },
            MockVRControlMsg::LoseTracking => {
                if let Some(ref mut pose) = self.head_pose {
                    pose.pose_is_valid = false;
                }
            },
            MockVRControlMsg::RemoveHeadPose => {
                self.head_pose = None;
            },
            MockVRControlMsg::SetProjectionMatrices(left, right) => {
                self.projection_left = left;
                self.projection_right = right;
            },
            MockVRControlMsg::SetEyeToHeadTransforms(left, right) => {
                self.eye_left = left;
                self.eye_right = right;
            },
            MockVRControlMsg::SetRenderTargetSize(width, height) => {
                self.render_target_size = (width, height);
            },
            MockVRControlMsg::FailInit(reason) => {
                self.fail_init = Some(reason);
            },
            MockVRControlMsg::FailQueries(fail) => {
                self.fail_queries = fail;
            },
            MockVRControlMsg::FailPoses(fail) => {
                self.fail_poses = fail;
            },
            MockVRControlMsg::FailSubmit(fail) => {
                self.fail_submit = fail;
            },
            MockVRControlMsg::QueueEvent(event) => {
                self.events.push_back(event);
            },
        }
    }

    fn check_queries(&self) -> Result<(), VRError> {
        if !self.initialized {
            return Err(VRError::NotInitialized);
        }
        if self.fail_queries {
            return Err(VRError::Init("IVRSystem interface unavailable".into()));
        }
        Ok(())
    }
}

pub struct MockVRRuntime {
    state: Rc<RefCell<MockVRState>>,
}

impl MockVRRuntime {
    pub fn new() -> MockVRRuntime {
        MockVRRuntime {
            state: Default::default(),
        }
    }

    pub fn state_handle(&self) -> Rc<RefCell<MockVRState>> {
        self.state.clone()
    }
}

impl VRRuntime for MockVRRuntime {
    fn initialize(&mut self) -> Result<(), VRError> {
        let mut state = self.state.borrow_mut();
        state.init_calls += 1;
        if let Some(ref reason) = state.fail_init {
            return Err(VRError::Init(reason.clone()));
        }
        state.initialized = true;
        Ok(())
    }

    fn shutdown(&mut self) {
        let mut state = self.state.borrow_mut();
        state.shutdown_calls += 1;
        state.initialized = false;
    }

    fn is_initialized(&self) -> bool {
        self.state.borrow().initialized
    }

    fn runtime_path(&self) -> Option<String> {
        self.state.borrow().runtime_path.clone()
    }

    fn recommended_render_target_size(&self) -> Result<(u32, u32), VRError> {
        let state = self.state.borrow();
        state.check_queries()?;
        Ok(state.render_target_size)
    }

    fn projection_matrix(&self, eye: Eye, near_z: f32, far_z: f32) -> Result<HmdMatrix44, VRError> {
        let mut state = self.state.borrow_mut();
        state.check_queries()?;
        state.projection_queries.push((eye, near_z, far_z));
        Ok(match eye {
            Eye::Left => state.projection_left,
            Eye::Right => state.projection_right,
        })
    }

    fn eye_to_head_transform(&self, eye: Eye) -> Result<HmdMatrix34, VRError> {
        let state = self.state.borrow();
        state.check_queries()?;
        Ok(match eye {
            Eye::Left => state.eye_left,
            Eye::Right => state.eye_right,
        })
    }

    fn wait_get_poses(&mut self) -> Result<Vec<TrackedDevicePose>, VRError> {
        let mut state = self.state.borrow_mut();
        state.wait_calls += 1;
        if !state.initialized {
            return Err(VRError::NotInitialized);
        }
        if state.fail_poses {
            return Err(VRError::Compositor("WaitGetPoses failed".into()));
        }
        Ok(state.head_pose.iter().cloned().collect())
    }

    fn submit(&mut self, eye: Eye, texture: &VRTexture) -> Result<(), VRError> {
        let mut state = self.state.borrow_mut();
        if !state.initialized {
            return Err(VRError::NotInitialized);
        }
        if state.fail_submit {
            return Err(VRError::Compositor(format!("Submit failed for {:?} eye", eye)));
        }
        state.submitted.push((eye, *texture));
        Ok(())
    }

    fn poll_events(&mut self) -> Vec<VREvent> {
        self.state.borrow_mut().events.drain(..).collect()
    }
}
