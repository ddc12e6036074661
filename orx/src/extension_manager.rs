use orx_api::{Drawer, Extension, ExtensionError, Program};

// Single entry point the host loop drives all extensions through
pub struct ExtensionManager {
    initialized: bool,
    extensions: Vec<Box<dyn Extension>>,
}

impl Default for ExtensionManager {
    fn default() -> ExtensionManager {
        ExtensionManager::new()
    }
}

impl ExtensionManager {
    pub fn new() -> ExtensionManager {
        ExtensionManager {
            initialized: false,
            extensions: Vec::new(),
        }
    }

    // Register a new extension. Registration order is the order of
    // `before_draw` calls.
    pub fn register(&mut self, extension: Box<dyn Extension>) {
        self.extensions.push(extension);
    }

    pub fn len(&self) -> usize {
        self.extensions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.extensions.is_empty()
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    // Sets up all the extensions, once
    pub fn setup(&mut self, program: &mut dyn Program) -> Result<(), ExtensionError> {
        if self.initialized {
            return Ok(());
        }

        for extension in &mut self.extensions {
            extension.setup(program)?;
        }
        self.initialized = true;
        Ok(())
    }

    /// Runs one frame: `before_draw` of every enabled extension in
    /// registration order, the user's `draw`, then `after_draw` in reverse.
    pub fn draw_frame<F>(&mut self, drawer: &mut dyn Drawer, program: &mut dyn Program, draw: F)
                         -> Result<(), ExtensionError>
        where F: FnOnce(&mut dyn Drawer, &mut dyn Program)
    {
        if !self.initialized {
            self.setup(program)?;
        }

        for extension in self.extensions.iter_mut().filter(|e| e.enabled()) {
            extension.before_draw(drawer, program)?;
        }

        draw(drawer, program);

        for extension in self.extensions.iter_mut().rev().filter(|e| e.enabled()) {
            extension.after_draw(drawer, program)?;
        }
        Ok(())
    }
}
