use orx_api::{ColorBuffer, GraphicsContext, GraphicsError, RenderTarget, RenderTargetDescriptor};
use std::cell::RefCell;
use std::rc::Rc;

/// Everything the mock graphics context was asked to do, in order.
#[derive(Debug, Default)]
pub struct GraphicsLog {
    next_id: u64,
    // Some(n): the allocation after the next n successful ones fails
    pub fail_allocation_after: Option<u32>,
    pub render_targets: Vec<(u64, RenderTargetDescriptor)>,
    pub color_buffers: Vec<(u64, u32, u32)>,
    pub destroyed: Vec<u64>,
    pub binds: Vec<u64>,
    // currently bound targets, innermost last
    pub bound: Vec<u64>,
}

impl GraphicsLog {
    // Each create call counts as one allocation, attachments included.
    fn check_allocation(&mut self, what: &'static str, width: u32, height: u32) -> Result<(), GraphicsError> {
        if width == 0 || height == 0 {
            return Err(GraphicsError::InvalidSize { width, height });
        }
        match self.fail_allocation_after {
            Some(0) => {
                self.fail_allocation_after = None;
                Err(GraphicsError::Allocation {
                    what: what,
                    width: width,
                    height: height,
                    reason: "GL_OUT_OF_MEMORY".into(),
                })
            },
            Some(n) => {
                self.fail_allocation_after = Some(n - 1);
                Ok(())
            },
            None => Ok(()),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    pub fn fail_next_allocation(&mut self) {
        self.fail_allocation_after = Some(0);
    }

    pub fn times_destroyed(&self, id: u64) -> usize {
        self.destroyed.iter().filter(|&&d| d == id).count()
    }

    /// Render targets created and not yet destroyed.
    pub fn live_render_targets(&self) -> Vec<u64> {
        self.render_targets.iter()
            .map(|&(id, _)| id)
            .filter(|&id| self.times_destroyed(id) == 0)
            .collect()
    }

    pub fn live_color_buffers(&self) -> Vec<u64> {
        self.color_buffers.iter()
            .map(|&(id, _, _)| id)
            .filter(|&id| self.times_destroyed(id) == 0)
            .collect()
    }

    pub fn bound_target(&self) -> Option<u64> {
        self.bound.last().cloned()
    }
}

pub type GraphicsLogPtr = Rc<RefCell<GraphicsLog>>;

pub struct MockColorBuffer {
    id: u64,
    width: u32,
    height: u32,
    log: GraphicsLogPtr,
}

impl ColorBuffer for MockColorBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn texture_handle(&self) -> u64 {
        self.id
    }

    fn destroy(self: Box<Self>) {
        self.log.borrow_mut().destroyed.push(self.id);
    }
}

pub struct MockRenderTarget {
    id: u64,
    width: u32,
    height: u32,
    color: MockColorBuffer,
    log: GraphicsLogPtr,
}

impl MockRenderTarget {
    pub fn id(&self) -> u64 {
        self.id
    }
}

impl RenderTarget for MockRenderTarget {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn bind(&mut self) {
        let mut log = self.log.borrow_mut();
        log.binds.push(self.id);
        log.bound.push(self.id);
    }

    fn unbind(&mut self) {
        let mut log = self.log.borrow_mut();
        if log.bound.last() == Some(&self.id) {
            log.bound.pop();
        }
    }

    fn color_buffer(&self, index: usize) -> Option<&dyn ColorBuffer> {
        match index {
            0 => Some(&self.color),
            _ => None,
        }
    }

    fn destroy(self: Box<Self>) {
        let MockRenderTarget { id, color, log, .. } = *self;
        log.borrow_mut().destroyed.push(id);
        Box::new(color).destroy();
    }
}

/// Graphics context double handing out recorded targets and buffers.
#[derive(Default)]
pub struct MockGraphics {
    log: GraphicsLogPtr,
}

impl MockGraphics {
    pub fn new() -> MockGraphics {
        MockGraphics::default()
    }

    pub fn log(&self) -> GraphicsLogPtr {
        self.log.clone()
    }
}

impl GraphicsContext for MockGraphics {
    fn create_render_target(&mut self, descriptor: RenderTargetDescriptor)
                            -> Result<Box<dyn RenderTarget>, GraphicsError> {
        let (width, height) = (descriptor.width, descriptor.height);
        let mut log = self.log.borrow_mut();
        log.check_allocation("render target", width, height)?;
        let id = log.next_id();
        let color_id = log.next_id();
        log.render_targets.push((id, descriptor));
        log.color_buffers.push((color_id, width, height));
        Ok(Box::new(MockRenderTarget {
            id: id,
            width: width,
            height: height,
            color: MockColorBuffer {
                id: color_id,
                width: width,
                height: height,
                log: self.log.clone(),
            },
            log: self.log.clone(),
        }))
    }

    fn create_color_buffer(&mut self, width: u32, height: u32)
                           -> Result<Box<dyn ColorBuffer>, GraphicsError> {
        let mut log = self.log.borrow_mut();
        log.check_allocation("color buffer", width, height)?;
        let id = log.next_id();
        log.color_buffers.push((id, width, height));
        Ok(Box::new(MockColorBuffer {
            id: id,
            width: width,
            height: height,
            log: self.log.clone(),
        }))
    }
}
