//! The view capability consumed by every layout.

use std::cell::RefCell;
use std::rc::Rc;

use glam::Vec2;

use crate::primitives::Rect;

/// Something a layout can position.
///
/// Implemented by presentation collaborators. A layout pass never changes
/// anything about a view except its frame.
pub trait View {
    /// The frame most recently assigned to this view.
    fn frame(&self) -> Rect;

    fn set_frame(&mut self, frame: Rect);

    /// Smallest acceptable size. Stacks read this once, when the view is added.
    fn min_size(&self) -> Vec2;

    /// Desired size absent constraints. Queried on every layout pass.
    fn preferred_size(&self) -> Vec2;

    fn is_visible(&self) -> bool;
}

/// Shared handle to a view. The caller keeps ownership; layouts only borrow.
pub type SharedView = Rc<RefCell<dyn View>>;

/// Wrap a concrete view into a [`SharedView`] handle.
pub fn shared<V: View + 'static>(view: V) -> SharedView {
    Rc::new(RefCell::new(view))
}

/// Reference equality between two view handles.
pub fn same_view(a: &SharedView, b: &SharedView) -> bool {
    Rc::ptr_eq(a, b)
}

/// A leaf view with fixed size metadata.
///
/// ```
/// # use flexstack::{FixedView, View};
/// # use glam::Vec2;
/// let view = FixedView::new(Vec2::new(100.0, 40.0)).with_min_size(Vec2::new(20.0, 20.0));
/// assert_eq!(view.preferred_size(), Vec2::new(100.0, 40.0));
/// assert!(view.is_visible());
/// ```
#[derive(Clone, Debug)]
pub struct FixedView {
    frame: Rect,
    min_size: Vec2,
    preferred_size: Vec2,
    visible: bool,
}

impl FixedView {
    /// Create a visible view with the given preferred size and a zero min size.
    pub fn new(preferred_size: Vec2) -> Self {
        Self {
            frame: Rect::ZERO,
            min_size: Vec2::ZERO,
            preferred_size,
            visible: true,
        }
    }

    pub fn with_min_size(mut self, min_size: Vec2) -> Self {
        self.min_size = min_size;
        self
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn with_frame(mut self, frame: Rect) -> Self {
        self.frame = frame;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    /// Takes effect on the next layout pass.
    pub fn set_preferred_size(&mut self, size: Vec2) {
        self.preferred_size = size;
    }

    /// Not seen by stacks that already hold this view.
    pub fn set_min_size(&mut self, size: Vec2) {
        self.min_size = size;
    }
}

impl View for FixedView {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.frame = frame;
    }

    fn min_size(&self) -> Vec2 {
        self.min_size
    }

    fn preferred_size(&self) -> Vec2 {
        self.preferred_size
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}
