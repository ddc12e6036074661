use crate::{ColorRGBa, GraphicsContext};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum MouseButton {
    Left,
    Right,
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    W,
    A,
    S,
    D,
    Other(u32),
}

// Input collected by the host's window since the previous frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub enum InputEvent {
    // Pointer moved while a button is held, in pixels.
    MouseDragged { button: MouseButton, dx: f64, dy: f64 },

    // Wheel rotation, positive away from the user.
    MouseScrolled { dy: f64 },

    KeyDown(Key),

    KeyRepeat(Key),

    KeyUp(Key),
}

/// The running host program an extension is attached to.
pub trait Program {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn background_color(&self) -> Option<ColorRGBa>;

    /// Input events of the current frame.
    fn input_events(&self) -> &[InputEvent];

    fn graphics(&mut self) -> &mut dyn GraphicsContext;
}
