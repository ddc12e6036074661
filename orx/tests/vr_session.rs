extern crate orx;

use orx::api::{DrawCall, MockGraphics, MockProgram, MockVRControlMsg, MockVRRuntimeCreator, MockVRState};
use orx::hmd::MAX_PENDING_EVENTS;
use orx::{Drawer, Eye, GraphicsError, HmdEvent, HmdMatrix34, HmdMatrix44, Matrix44, Point3D, Program,
          RenderTarget, SessionState, VRConfig, VREvent, VRError, VRSession};
use std::cell::RefCell;
use std::rc::Rc;

fn new_session() -> (VRSession, Rc<RefCell<MockVRState>>) {
    let (runtime, state) = MockVRRuntimeCreator::new_runtime_with_remote();
    (VRSession::new(runtime, VRConfig::default()), state)
}

fn active_session(program: &mut MockProgram) -> (VRSession, Rc<RefCell<MockVRState>>) {
    let (mut session, state) = new_session();
    assert_eq!(session.initialize(program.graphics()), Ok(SessionState::Active));
    (session, state)
}

fn send(state: &Rc<RefCell<MockVRState>>, msg: MockVRControlMsg) {
    state.borrow_mut().handle_msg(msg);
}

#[test]
fn initialization_failure_disables_vr() {
    let (mut session, state) = new_session();
    send(&state, MockVRControlMsg::FailInit("HmdNotFound".into()));
    let mut graphics = MockGraphics::new();

    assert_eq!(session.initialize(&mut graphics), Ok(SessionState::Disabled));
    assert_eq!(session.state(), SessionState::Disabled);
    assert!(graphics.log().borrow().render_targets.is_empty());
    assert_eq!(state.borrow().shutdown_calls, 0);

    // never retried
    assert_eq!(session.initialize(&mut graphics), Ok(SessionState::Disabled));
    assert_eq!(state.borrow().init_calls, 1);
}

#[test]
fn hmd_state_is_identity_before_initialization() {
    let (session, _state) = new_session();
    let hmd = session.hmd();
    assert_eq!(session.state(), SessionState::Uninitialized);
    assert_eq!(hmd.current_eye, Eye::Left);
    assert_eq!(hmd.projection(), Matrix44::identity());
    assert_eq!(hmd.view(), Matrix44::identity());
    assert_eq!(hmd.eye_left, Matrix44::identity());
    assert_eq!(hmd.eye_right, Matrix44::identity());
}

#[test]
fn initialization_loads_runtime_geometry() {
    let mut program = MockProgram::new(640, 480);
    let (session, state) = active_session(&mut program);
    let state = state.borrow();
    let hmd = session.hmd();

    assert_eq!(hmd.projection_left, state.projection_left.to_matrix44());
    assert_eq!(hmd.projection_right, state.projection_right.to_matrix44());
    assert_eq!(hmd.eye_left, state.eye_left.to_matrix44());
    assert_eq!(hmd.eye_right, state.eye_right.to_matrix44());
    assert_eq!(state.projection_queries, vec![(Eye::Left, 0.1, 500.0), (Eye::Right, 0.1, 500.0)]);

    assert_eq!(session.render_target_size(), Some((1512, 1680)));
    for &eye in Eye::ALL.iter() {
        let target = session.render_target(eye).unwrap();
        assert_eq!((target.width(), target.height()), (1512, 1680));
        assert!(target.color_buffer(0).is_some());
    }
    let log = program.log();
    let log = log.borrow();
    assert_eq!(log.render_targets.len(), 2);
    for &(_, descriptor) in &log.render_targets {
        assert_eq!((descriptor.width, descriptor.height), (1512, 1680));
        assert_eq!(descriptor.color_buffers, 1);
    }
}

#[test]
fn zero_recommended_size_uses_fallback() {
    let (mut session, state) = new_session();
    send(&state, MockVRControlMsg::SetRenderTargetSize(0, 0));
    let mut graphics = MockGraphics::new();
    assert_eq!(session.initialize(&mut graphics), Ok(SessionState::Active));
    assert_eq!(session.render_target_size(), Some((2048, 2048)));
}

#[test]
fn first_allocation_failure_disables_and_shuts_down() {
    let (mut session, state) = new_session();
    let mut graphics = MockGraphics::new();
    // left eye succeeds, right eye fails
    graphics.log().borrow_mut().fail_allocation_after = Some(1);

    assert_eq!(session.initialize(&mut graphics), Ok(SessionState::Disabled));
    assert_eq!(state.borrow().shutdown_calls, 1);
    let log = graphics.log();
    let log = log.borrow();
    assert_eq!(log.render_targets.len(), 1);
    assert!(log.live_render_targets().is_empty());
}

#[test]
fn disabled_session_draws_scene_once_without_touching_the_drawer() {
    let (mut session, state) = new_session();
    send(&state, MockVRControlMsg::FailInit("HmdNotFound".into()));
    let mut program = MockProgram::new(640, 480);
    session.initialize(program.graphics()).unwrap();

    let mut drawer = program.drawer();
    let mut calls = 0;
    session.render_frame(&mut drawer, |_| calls += 1);

    assert_eq!(calls, 1);
    assert_eq!(drawer.projection(), Matrix44::identity());
    assert_eq!(drawer.view(), Matrix44::identity());
    assert!(drawer.calls.is_empty());
    assert!(state.borrow().submitted.is_empty());
}

#[test]
fn uninitialized_session_draws_scene_once() {
    let (mut session, state) = new_session();
    let program = MockProgram::new(640, 480);
    let mut drawer = program.drawer();

    assert!(!session.poll_pose());
    let mut calls = 0;
    session.render_frame(&mut drawer, |_| calls += 1);

    assert_eq!(calls, 1);
    assert!(!session.submit());
    assert_eq!(state.borrow().wait_calls, 0);
}

#[test]
fn active_session_renders_each_eye_into_its_target() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let log = program.log();
    let mut drawer = program.drawer();

    assert!(session.poll_pose());
    let mut seen = Vec::new();
    session.render_frame(&mut drawer, |d| {
        seen.push((d.projection(), d.view(), log.borrow().bound_target()));
    });

    let (left_target, right_target) = {
        let log = log.borrow();
        (log.render_targets[0].0, log.render_targets[1].0)
    };
    let hmd = session.hmd();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0], (hmd.projection_left, hmd.view_left, Some(left_target)));
    assert_eq!(seen[1], (hmd.projection_right, hmd.view_right, Some(right_target)));
    assert_ne!(seen[0].0, seen[1].0);
    assert_ne!(seen[0].1, seen[1].1);
    assert_eq!(log.borrow().bound_target(), None);
    assert_eq!(log.borrow().binds, vec![left_target, right_target]);

    let (left_color, right_color) = {
        let log = log.borrow();
        (log.color_buffers[0].0, log.color_buffers[1].0)
    };
    let submitted: Vec<_> = state.borrow().submitted.iter().map(|&(eye, texture)| (eye, texture.handle)).collect();
    assert_eq!(submitted, vec![(Eye::Left, left_color), (Eye::Right, right_color)]);
    assert!(session.frame_submitted());
}

#[test]
fn grid_overlay_is_drawn_per_eye() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, _state) = active_session(&mut program);
    let mut drawer = program.drawer();

    session.poll_pose();
    session.render_frame(&mut drawer, |_| {});

    let grids: Vec<_> = drawer.calls.iter().filter_map(|call| match *call {
        DrawCall::LineSegments { count: 42, model, target, .. } => Some((model, target)),
        _ => None,
    }).collect();
    assert_eq!(grids.len(), 2);
    assert_eq!(grids[0].0, Matrix44::translation(0.0, -2.0, 0.0));
    assert_ne!(grids[0].1, grids[1].1);
    assert_eq!(drawer.stack_depth(), 0);
    assert_eq!(drawer.model(), Matrix44::identity());

    drawer.calls.clear();
    session.config_mut().show_grid = false;
    session.poll_pose();
    session.render_frame(&mut drawer, |_| {});
    assert!(drawer.calls.is_empty());
}

#[test]
fn teardown_is_idempotent() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);

    session.teardown();
    session.teardown();

    assert_eq!(session.state(), SessionState::Disabled);
    assert_eq!(state.borrow().shutdown_calls, 1);
    let log = program.log();
    let log = log.borrow();
    assert!(log.live_render_targets().is_empty());
    for &(id, _) in &log.render_targets {
        assert_eq!(log.times_destroyed(id), 1);
    }

    drop(session);
    assert_eq!(state.borrow().shutdown_calls, 1);
}

#[test]
fn dropping_an_active_session_tears_it_down() {
    let mut program = MockProgram::new(640, 480);
    let (session, state) = active_session(&mut program);
    drop(session);
    assert_eq!(state.borrow().shutdown_calls, 1);
    assert!(program.log().borrow().live_render_targets().is_empty());
}

#[test]
fn identity_head_pose_yields_eye_offsets_as_views() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::SetHeadPose(HmdMatrix34::default()));

    assert!(session.poll_pose());
    assert_eq!(session.hmd().view_left, session.hmd().eye_left);
    assert_eq!(session.hmd().view_right, session.hmd().eye_right);
}

#[test]
fn invalid_head_pose_is_treated_as_identity() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::LoseTracking);

    assert!(session.poll_pose());
    assert_eq!(session.hmd().view_left, session.hmd().eye_left);
}

#[test]
fn head_pose_moves_both_views() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::SetEyeToHeadTransforms(HmdMatrix34::default(), HmdMatrix34::default()));
    send(&state, MockVRControlMsg::SetHeadPose(HmdMatrix34::from_translation(0.0, 1.5, 0.0)));
    session.initialize(program.graphics()).unwrap();

    assert!(session.poll_pose());
    assert_eq!(session.hmd().view_left, Matrix44::translation(0.0, 1.5, 0.0));
    assert_eq!(session.hmd().view_right, Matrix44::translation(0.0, 1.5, 0.0));
}

#[test]
fn failed_pose_poll_skips_submission() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let mut drawer = program.drawer();
    send(&state, MockVRControlMsg::FailPoses(true));

    assert!(!session.poll_pose());
    let mut calls = 0;
    session.render_frame(&mut drawer, |_| calls += 1);

    assert_eq!(calls, 2);
    assert!(state.borrow().submitted.is_empty());
    assert!(session.is_active());
}

#[test]
fn missing_head_pose_drops_the_frame() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::RemoveHeadPose);

    assert!(!session.poll_pose());
    assert!(!session.submit());
    assert!(state.borrow().submitted.is_empty());
    assert!(session.is_active());
}

#[test]
fn submit_failure_keeps_session_active() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let mut drawer = program.drawer();

    send(&state, MockVRControlMsg::FailSubmit(true));
    session.poll_pose();
    session.render_frame(&mut drawer, |_| {});
    assert!(state.borrow().submitted.is_empty());
    assert!(session.is_active());
    // not retried within the frame
    assert!(session.frame_submitted());

    send(&state, MockVRControlMsg::FailSubmit(false));
    session.poll_pose();
    assert_eq!(session.frame_index(), 2);
    assert!(!session.frame_submitted());
    session.render_frame(&mut drawer, |_| {});
    assert_eq!(state.borrow().submitted.len(), 2);
}

#[test]
fn reinitialization_reallocates_resized_targets() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let log = program.log();
    let stale: Vec<u64> = log.borrow().render_targets.iter().map(|&(id, _)| id).collect();

    send(&state, MockVRControlMsg::SetRenderTargetSize(1024, 1024));
    assert_eq!(session.initialize(program.graphics()), Ok(SessionState::Active));

    assert_eq!(session.render_target_size(), Some((1024, 1024)));
    let log = log.borrow();
    for id in stale {
        assert_eq!(log.times_destroyed(id), 1);
    }
    assert_eq!(log.render_targets.len(), 4);
    assert_eq!(log.live_render_targets().len(), 2);
    assert_eq!(state.borrow().init_calls, 1);
}

#[test]
fn reinitialization_rereads_matrices_and_keeps_same_size_targets() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let projection = HmdMatrix44 {
        m: [[2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, -1.0, -0.2],
            [0.0, 0.0, -1.0, 0.0]],
    };
    send(&state, MockVRControlMsg::SetProjectionMatrices(projection, projection));
    session.config_mut().near_z = 0.5;

    assert_eq!(session.initialize(program.graphics()), Ok(SessionState::Active));
    assert_eq!(session.hmd().projection_left, projection.to_matrix44());
    assert_eq!(state.borrow().projection_queries.last(), Some(&(Eye::Right, 0.5, 500.0)));
    assert_eq!(program.log().borrow().render_targets.len(), 2);
}

#[test]
fn failed_reallocation_while_active_is_fatal() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::SetRenderTargetSize(800, 600));
    program.log().borrow_mut().fail_next_allocation();

    match session.initialize(program.graphics()) {
        Err(VRError::Graphics(GraphicsError::Allocation { width: 800, height: 600, .. })) => {},
        other => panic!("unexpected result {:?}", other),
    }
    assert_eq!(session.render_target_size(), None);
    assert!(program.log().borrow().live_render_targets().is_empty());
}

#[test]
fn runtime_failure_on_reinitialization_disables() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::FailQueries(true));

    assert_eq!(session.initialize(program.graphics()), Ok(SessionState::Disabled));
    assert_eq!(state.borrow().shutdown_calls, 1);
    assert!(program.log().borrow().live_render_targets().is_empty());
}

#[test]
fn quit_event_tears_session_down() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    send(&state, MockVRControlMsg::QueueEvent(VREvent::Quit));

    assert!(!session.poll_pose());
    assert_eq!(session.state(), SessionState::Disabled);
    assert_eq!(state.borrow().shutdown_calls, 1);
    assert_eq!(state.borrow().wait_calls, 0);
    assert_eq!(session.events().pending(), 1);
}

#[test]
fn runtime_and_pose_events_are_delivered_in_order() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let received = Rc::new(RefCell::new(Vec::new()));
    let sink = received.clone();
    session.events_mut().listen(move |event, _| sink.borrow_mut().push(event.clone()));
    send(&state, MockVRControlMsg::QueueEvent(VREvent::Mounted));

    assert!(session.poll_pose());
    assert!(received.borrow().is_empty());
    assert_eq!(session.events_mut().deliver(), 2);

    let received = received.borrow();
    assert_eq!(received[0], HmdEvent::Runtime(VREvent::Mounted));
    match received[1] {
        HmdEvent::Updated { frame, view_left, .. } => {
            assert_eq!(frame, 1);
            assert_eq!(view_left, session.hmd().view_left);
        },
        ref other => panic!("unexpected event {:?}", other),
    }
}

#[test]
fn identity_runtime_geometry_leaves_hmd_state_identity() {
    let (mut session, state) = new_session();
    send(&state, MockVRControlMsg::SetProjectionMatrices(HmdMatrix44::default(), HmdMatrix44::default()));
    send(&state, MockVRControlMsg::SetEyeToHeadTransforms(HmdMatrix34::default(), HmdMatrix34::default()));
    send(&state, MockVRControlMsg::SetHeadPose(HmdMatrix34::default()));
    let mut graphics = MockGraphics::new();

    assert_eq!(session.initialize(&mut graphics), Ok(SessionState::Active));
    assert!(session.poll_pose());
    let hmd = session.hmd();
    for &eye in Eye::ALL.iter() {
        assert_eq!(hmd.projection_for(eye), Matrix44::identity());
        assert_eq!(hmd.eye_offset(eye), Matrix44::identity());
        assert_eq!(hmd.view_for(eye), Matrix44::identity());
    }
}

#[test]
fn views_apply_the_head_pose_before_the_eye_offset() {
    let (mut session, state) = new_session();
    send(&state, MockVRControlMsg::SetEyeToHeadTransforms(HmdMatrix34::from_translation(1.0, 0.0, 0.0),
                                                          HmdMatrix34::from_translation(-1.0, 0.0, 0.0)));
    // quarter turn about +Y, one meter forward
    send(&state, MockVRControlMsg::SetHeadPose(HmdMatrix34 {
        m: [[0.0, 0.0, 1.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-1.0, 0.0, 0.0, -1.0]],
    }));
    let mut graphics = MockGraphics::new();
    session.initialize(&mut graphics).unwrap();

    assert!(session.poll_pose());
    let origin = Point3D::origin();
    let hmd = session.hmd();
    assert_eq!(hmd.view_left.transform_point3d(origin), Some(Point3D::new(1.0, 0.0, -1.0)));
    assert_eq!(hmd.view_right.transform_point3d(origin), Some(Point3D::new(-1.0, 0.0, -1.0)));
}

#[test]
fn pending_events_stay_bounded_without_delivery() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    let mut drawer = program.drawer();

    for frame in 0..1000 {
        if frame % 10 == 0 {
            send(&state, MockVRControlMsg::QueueEvent(VREvent::DeviceUpdated(frame)));
        }
        assert!(session.poll_pose());
        session.render_frame(&mut drawer, |_| {});
    }

    assert!(session.events().pending() <= MAX_PENDING_EVENTS);
    let updates = Rc::new(RefCell::new(Vec::new()));
    let sink = updates.clone();
    session.events_mut().listen(move |event, _| {
        if let HmdEvent::Updated { frame, .. } = *event {
            sink.borrow_mut().push(frame);
        }
    });
    session.events_mut().deliver();
    assert_eq!(*updates.borrow(), vec![1000]);
}

#[test]
fn grid_offset_follows_the_config() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, _state) = active_session(&mut program);
    let mut drawer = program.drawer();

    session.config_mut().grid_offset_y = -5.0;
    assert_eq!(session.initialize(program.graphics()), Ok(SessionState::Active));
    session.poll_pose();
    session.render_frame(&mut drawer, |_| {});

    let models: Vec<_> = drawer.calls.iter().filter_map(|call| match *call {
        DrawCall::LineSegments { count: 42, model, .. } => Some(model),
        _ => None,
    }).collect();
    assert_eq!(models, vec![Matrix44::translation(0.0, -5.0, 0.0); 2]);
}

#[test]
fn reinitialization_disables_when_runtime_went_away() {
    let mut program = MockProgram::new(640, 480);
    let (mut session, state) = active_session(&mut program);
    state.borrow_mut().initialized = false;

    assert_eq!(session.initialize(program.graphics()), Ok(SessionState::Disabled));
    assert!(program.log().borrow().live_render_targets().is_empty());
    assert_eq!(state.borrow().projection_queries.len(), 2);
}
