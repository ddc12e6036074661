use crate::ColorBuffer;

/// A post-processing pass reading one color buffer and writing another.
pub trait Filter {
    fn apply(&mut self, source: &dyn ColorBuffer, target: &mut dyn ColorBuffer);
}
