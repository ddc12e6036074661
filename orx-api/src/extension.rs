use crate::{Drawer, ExtensionError, Program};
use std::cell::RefCell;
use std::rc::Rc;

pub type ExtensionPtr<E> = Rc<RefCell<E>>;

/// Hooks an extension contributes to the host's draw loop.
///
/// `setup` runs once after the graphics context exists; `before_draw` and
/// `after_draw` bracket the user's draw call every frame.
pub trait Extension {
    fn enabled(&self) -> bool {
        true
    }

    fn setup(&mut self, _program: &mut dyn Program) -> Result<(), ExtensionError> {
        Ok(())
    }

    fn before_draw(&mut self, _drawer: &mut dyn Drawer, _program: &mut dyn Program)
                   -> Result<(), ExtensionError> {
        Ok(())
    }

    fn after_draw(&mut self, _drawer: &mut dyn Drawer, _program: &mut dyn Program)
                  -> Result<(), ExtensionError> {
        Ok(())
    }
}

// Lets the host loop and user code share one extension.
impl<E: Extension + ?Sized> Extension for Rc<RefCell<E>> {
    fn enabled(&self) -> bool {
        self.borrow().enabled()
    }

    fn setup(&mut self, program: &mut dyn Program) -> Result<(), ExtensionError> {
        self.borrow_mut().setup(program)
    }

    fn before_draw(&mut self, drawer: &mut dyn Drawer, program: &mut dyn Program)
                   -> Result<(), ExtensionError> {
        self.borrow_mut().before_draw(drawer, program)
    }

    fn after_draw(&mut self, drawer: &mut dyn Drawer, program: &mut dyn Program)
                  -> Result<(), ExtensionError> {
        self.borrow_mut().after_draw(drawer, program)
    }
}
