use orx_api::{isolated, ColorBuffer, ColorRGBa, Drawer, Extension, ExtensionError, Filter, Program,
              RenderTarget, RenderTargetDescriptor};

/// Wraps a [`Filter`] around the program's output.
///
/// The frame is drawn into an offscreen target, filtered into a second
/// buffer and the result drawn to the screen.
pub struct FilterExtension<F: Filter> {
    pub enabled: bool,
    filter: F,
    configuration: Box<dyn FnMut(&mut F)>,
    render_target: Option<Box<dyn RenderTarget>>,
    filtered: Option<Box<dyn ColorBuffer>>,
}

/// Builds a filter extension; `configuration` runs before every application
/// of the filter.
pub fn extend_with_filter<F, C>(filter: F, configuration: C) -> FilterExtension<F>
    where F: Filter,
          C: FnMut(&mut F) + 'static
{
    FilterExtension {
        enabled: true,
        filter: filter,
        configuration: Box::new(configuration),
        render_target: None,
        filtered: None,
    }
}

impl<F: Filter> FilterExtension<F> {
    pub fn filter(&self) -> &F {
        &self.filter
    }

    pub fn filter_mut(&mut self) -> &mut F {
        &mut self.filter
    }

    pub fn size(&self) -> Option<(u32, u32)> {
        self.render_target.as_ref().map(|target| (target.width(), target.height()))
    }

    fn needs_allocation(&self, width: u32, height: u32) -> bool {
        match self.render_target {
            Some(ref target) => target.width() != width || target.height() != height,
            None => true,
        }
    }

    fn release(&mut self) {
        if let Some(target) = self.render_target.take() {
            target.destroy();
        }
        if let Some(filtered) = self.filtered.take() {
            filtered.destroy();
        }
    }

    fn allocate(&mut self, drawer: &mut dyn Drawer, program: &mut dyn Program)
                -> Result<(), ExtensionError> {
        let (width, height) = (program.width(), program.height());
        self.release();
        debug!("Allocating {}x{} filter buffers", width, height);

        let background = program.background_color().unwrap_or(ColorRGBa::TRANSPARENT);
        let graphics = program.graphics();
        let mut target = graphics.create_render_target(RenderTargetDescriptor::color(width, height).with_depth())?;
        let filtered = match graphics.create_color_buffer(width, height) {
            Ok(filtered) => filtered,
            Err(err) => {
                target.destroy();
                return Err(err.into());
            }
        };

        target.bind();
        drawer.clear(background);
        target.unbind();

        self.render_target = Some(target);
        self.filtered = Some(filtered);
        Ok(())
    }
}

impl<F: Filter> Extension for FilterExtension<F> {
    fn enabled(&self) -> bool {
        self.enabled
    }

    fn before_draw(&mut self, drawer: &mut dyn Drawer, program: &mut dyn Program)
                   -> Result<(), ExtensionError> {
        if self.needs_allocation(program.width(), program.height()) {
            self.allocate(drawer, program)?;
        }
        if let Some(ref mut target) = self.render_target {
            target.bind();
        }
        Ok(())
    }

    fn after_draw(&mut self, drawer: &mut dyn Drawer, _program: &mut dyn Program)
                  -> Result<(), ExtensionError> {
        let target = match self.render_target {
            Some(ref mut target) => target,
            None => return Ok(()),
        };
        target.unbind();

        (self.configuration)(&mut self.filter);

        if let (Some(source), Some(filtered)) = (target.color_buffer(0), self.filtered.as_mut()) {
            self.filter.apply(source, &mut **filtered);
            isolated(drawer, |drawer| {
                drawer.ortho();
                drawer.image(&**filtered);
            });
        }
        Ok(())
    }
}

impl<F: Filter> Drop for FilterExtension<F> {
    fn drop(&mut self) {
        self.release();
    }
}
