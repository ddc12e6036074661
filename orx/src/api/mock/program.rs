use super::graphics::{GraphicsLogPtr, MockGraphics};
use super::drawer::MockDrawer;
use orx_api::{ColorRGBa, GraphicsContext, InputEvent, Program};

/// Host program double with a fixed window size and scripted input.
pub struct MockProgram {
    pub width: u32,
    pub height: u32,
    pub background: Option<ColorRGBa>,
    pub input: Vec<InputEvent>,
    pub graphics: MockGraphics,
}

impl MockProgram {
    pub fn new(width: u32, height: u32) -> MockProgram {
        MockProgram {
            width: width,
            height: height,
            background: Some(ColorRGBa::BLACK),
            input: Vec::new(),
            graphics: MockGraphics::new(),
        }
    }

    pub fn log(&self) -> GraphicsLogPtr {
        self.graphics.log()
    }

    /// A drawer sharing this program's graphics log.
    pub fn drawer(&self) -> MockDrawer {
        MockDrawer::new(self.width, self.height, self.log())
    }
}

impl Program for MockProgram {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn background_color(&self) -> Option<ColorRGBa> {
        self.background
    }

    fn input_events(&self) -> &[InputEvent] {
        &self.input
    }

    fn graphics(&mut self) -> &mut dyn GraphicsContext {
        &mut self.graphics
    }
}
