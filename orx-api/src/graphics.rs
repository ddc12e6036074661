use crate::GraphicsError;

/// Describes the attachments of an offscreen render target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub struct RenderTargetDescriptor {
    pub width: u32,
    pub height: u32,
    pub color_buffers: u32,
    pub depth_buffer: bool,
}

impl RenderTargetDescriptor {
    /// A single color attachment and no depth.
    pub fn color(width: u32, height: u32) -> Self {
        Self {
            width: width,
            height: height,
            color_buffers: 1,
            depth_buffer: false,
        }
    }

    pub fn with_depth(self) -> Self {
        Self {
            depth_buffer: true,
            ..self
        }
    }
}

/// A texture living in the host's graphics context.
pub trait ColorBuffer {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Native texture name, as handed to a compositor.
    fn texture_handle(&self) -> u64;

    /// Releases the texture. Consuming the box makes double release impossible.
    fn destroy(self: Box<Self>);
}

/// An offscreen framebuffer with its attachments.
pub trait RenderTarget {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    /// Redirects subsequent drawing into this target.
    fn bind(&mut self);

    fn unbind(&mut self);

    fn color_buffer(&self, index: usize) -> Option<&dyn ColorBuffer>;

    /// Releases the framebuffer together with its attachments.
    fn destroy(self: Box<Self>);
}

/// Resource factory of the host's graphics context.
pub trait GraphicsContext {
    fn create_render_target(&mut self, descriptor: RenderTargetDescriptor)
                            -> Result<Box<dyn RenderTarget>, GraphicsError>;

    fn create_color_buffer(&mut self, width: u32, height: u32)
                           -> Result<Box<dyn ColorBuffer>, GraphicsError>;
}
