use orx_api::{Eye, Matrix44, VREvent};
use std::collections::VecDeque;
use std::fmt;

/// Per-eye projection, eye offset and view matrices plus the active eye.
///
/// `projection()` and `view()` always follow `current_eye`.
#[derive(Debug, Clone, PartialEq)]
pub struct HmdState {
    pub current_eye: Eye,
    pub projection_left: Matrix44,
    pub projection_right: Matrix44,

    // relative to head
    pub eye_left: Matrix44,
    pub eye_right: Matrix44,

    pub view_left: Matrix44,
    pub view_right: Matrix44,
}

impl Default for HmdState {
    fn default() -> HmdState {
        HmdState {
            current_eye: Eye::Left,
            projection_left: Matrix44::identity(),
            projection_right: Matrix44::identity(),
            eye_left: Matrix44::identity(),
            eye_right: Matrix44::identity(),
            view_left: Matrix44::identity(),
            view_right: Matrix44::identity(),
        }
    }
}

impl HmdState {
    pub fn projection(&self) -> Matrix44 {
        self.projection_for(self.current_eye)
    }

    pub fn view(&self) -> Matrix44 {
        self.view_for(self.current_eye)
    }

    pub fn projection_for(&self, eye: Eye) -> Matrix44 {
        match eye {
            Eye::Left => self.projection_left,
            Eye::Right => self.projection_right,
        }
    }

    pub fn view_for(&self, eye: Eye) -> Matrix44 {
        match eye {
            Eye::Left => self.view_left,
            Eye::Right => self.view_right,
        }
    }

    pub fn eye_offset(&self, eye: Eye) -> Matrix44 {
        match eye {
            Eye::Left => self.eye_left,
            Eye::Right => self.eye_right,
        }
    }

    /// Recomputes both views as `eye_offset * head_pose`.
    pub fn update_views(&mut self, head_pose: &Matrix44) {
        // native column-vector product, hence the pose is applied first
        self.view_left = head_pose.then(&self.eye_offset(Eye::Left));
        self.view_right = head_pose.then(&self.eye_offset(Eye::Right));
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum HmdEvent {
    // Fresh head pose applied to the views
    Updated {
        frame: u64,
        view_left: Matrix44,
        view_right: Matrix44,
    },
    Runtime(VREvent),
}

/// Handed to every listener while an event is delivered.
#[derive(Debug, Default)]
pub struct Propagation {
    cancelled: bool,
}

impl Propagation {
    /// Stops delivery of the current event to the remaining listeners.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

// Upper bound of undelivered events
pub const MAX_PENDING_EVENTS: usize = 64;

type Listener = Box<dyn FnMut(&HmdEvent, &mut Propagation)>;

/// Pending HMD events, drained at a fixed point of the frame.
#[derive(Default)]
pub struct HmdEvents {
    pending: VecDeque<HmdEvent>,
    listeners: Vec<Listener>,
}

impl fmt::Debug for HmdEvents {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("HmdEvents")
            .field("pending", &self.pending)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl HmdEvents {
    pub fn listen<F>(&mut self, listener: F)
        where F: FnMut(&HmdEvent, &mut Propagation) + 'static
    {
        self.listeners.push(Box::new(listener));
    }

    /// Appends `event`. A newer `Updated` replaces one still pending, and
    /// past `MAX_PENDING_EVENTS` the oldest runtime event is dropped.
    pub fn queue(&mut self, event: HmdEvent) {
        if let HmdEvent::Updated { .. } = event {
            self.pending.retain(|pending| match *pending {
                HmdEvent::Updated { .. } => false,
                _ => true,
            });
        }
        if self.pending.len() >= MAX_PENDING_EVENTS {
            let oldest = self.pending.iter().position(|pending| match *pending {
                HmdEvent::Runtime(_) => true,
                _ => false,
            });
            if let Some(index) = oldest {
                if let Some(dropped) = self.pending.remove(index) {
                    warn!("Dropping undelivered HMD event {:?}", dropped);
                }
            }
        }
        self.pending.push_back(event);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Delivers queued events in order, returning how many were delivered.
    pub fn deliver(&mut self) -> usize {
        let mut delivered = 0;
        while let Some(event) = self.pending.pop_front() {
            let mut propagation = Propagation::default();
            for listener in self.listeners.iter_mut() {
                listener(&event, &mut propagation);
                if propagation.is_cancelled() {
                    break;
                }
            }
            delivered += 1;
        }
        delivered
    }
}
