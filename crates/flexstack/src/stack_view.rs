use glam::Vec2;

use crate::layout::Layout;
use crate::primitives::Rect;
use crate::view::{same_view, SharedView, View};

/// A view that owns a [`Layout`] and reruns it whenever its frame changes.
///
/// The tracked view list is separate from the layout's own items: callers add
/// each view to both. After a pass every tracked view whose computed frame is
/// non-empty receives that frame; the rest are left alone.
///
/// A `StackView` is itself a [`View`], so it can be nested inside another stack.
pub struct StackView<L: Layout = Box<dyn Layout>> {
    layout: L,
    frame: Rect,
    views: Vec<SharedView>,
}

impl<L: Layout> StackView<L> {
    pub fn new(layout: L) -> Self {
        Self {
            layout,
            frame: Rect::ZERO,
            views: Vec::new(),
        }
    }

    /// Track `view`. Does not add it to the wrapped layout.
    pub fn add_view(&mut self, view: SharedView) {
        self.views.push(view);
    }

    /// Stop tracking `view`. Does not remove it from the wrapped layout.
    pub fn remove_view(&mut self, view: &SharedView) -> bool {
        match self.views.iter().position(|tracked| same_view(tracked, view)) {
            Some(index) => {
                self.views.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn views(&self) -> &[SharedView] {
        &self.views
    }

    pub fn layout(&self) -> &L {
        &self.layout
    }

    pub fn layout_mut(&mut self) -> &mut L {
        &mut self.layout
    }

    pub fn into_layout(self) -> L {
        self.layout
    }

    /// Store `bounds`, run the layout and copy the results onto tracked views.
    pub fn relayout(&mut self, bounds: Rect) {
        self.frame = bounds;
        self.layout.layout(bounds);

        for view in &self.views {
            let frame = self.layout.view_frame(view);
            if frame.is_empty() {
                log::trace!("tracked view has no computed frame, skipping");
                continue;
            }
            view.borrow_mut().set_frame(frame);
        }
    }
}

impl<L: Layout> View for StackView<L> {
    fn frame(&self) -> Rect {
        self.frame
    }

    fn set_frame(&mut self, frame: Rect) {
        self.relayout(frame);
    }

    fn min_size(&self) -> Vec2 {
        self.layout.min_size()
    }

    fn preferred_size(&self) -> Vec2 {
        self.layout.preferred_size()
    }

    fn is_visible(&self) -> bool {
        true
    }
}

impl<L: Layout + std::fmt::Debug> std::fmt::Debug for StackView<L> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StackView")
            .field("layout", &self.layout)
            .field("frame", &self.frame)
            .field("views", &self.views.len())
            .finish()
    }
}
