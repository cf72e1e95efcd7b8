use glam::Vec2;

use crate::flex::{self, Axis};
use crate::layout::Layout;
use crate::primitives::Rect;
use crate::stack::{stack_methods, Stack};
use crate::view::SharedView;

/// Lays out items top to bottom, growing or shrinking their heights by flex
/// weight. Leading aligns to the left edge, trailing to the right.
#[derive(Debug)]
pub struct VStack {
    stack: Stack,
}

stack_methods!(VStack);

impl Layout for VStack {
    fn layout(&mut self, bounds: Rect) {
        flex::distribute(&mut self.stack, bounds, Axis::Vertical);
    }

    fn min_size(&self) -> Vec2 {
        flex::min_size(&self.stack, Axis::Vertical)
    }

    fn preferred_size(&self) -> Vec2 {
        self.stack.preferred_size()
    }

    fn view_frame(&self, view: &SharedView) -> Rect {
        self.stack.view_frame(view)
    }
}
