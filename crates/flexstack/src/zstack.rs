use glam::Vec2;

use crate::layout::Layout;
use crate::primitives::Rect;
use crate::stack::{stack_methods, Stack};
use crate::view::SharedView;

/// Overlays items on top of each other in insertion order.
///
/// Every visible item keeps its preferred size and is positioned by its
/// alignment on both axes. Spacing, flex weights and distribution are ignored.
///
/// ```
/// # use flexstack::{shared, Alignment, FixedView, Layout, Rect, View, ZStack};
/// # use glam::Vec2;
/// let badge = shared(FixedView::new(Vec2::new(50.0, 50.0)));
///
/// let mut overlay = ZStack::new().with_alignment(Alignment::Center);
/// overlay.add_view(badge.clone());
/// overlay.layout(Rect::from([0.0, 0.0, 200.0, 200.0]));
///
/// assert_eq!(badge.borrow().frame(), Rect::from([75.0, 75.0, 125.0, 125.0]));
/// ```
#[derive(Debug)]
pub struct ZStack {
    stack: Stack,
}

stack_methods!(ZStack);

impl Layout for ZStack {
    fn layout(&mut self, bounds: Rect) {
        if self.stack.is_empty() {
            return;
        }

        let extent = bounds.size();
        for (index, item) in self.stack.items_mut().iter_mut().enumerate() {
            if !item.is_visible() {
                continue;
            }
            let preferred = item.preferred_size();
            let origin = bounds.min
                + Vec2::new(
                    item.alignment.offset(extent.x, preferred.x),
                    item.alignment.offset(extent.y, preferred.y),
                );
            let frame = Rect::from_min_size(origin, preferred);
            log::trace!("item {} -> {:?}", index, frame);
            item.place(frame);
        }
    }

    /// Componentwise max of the visible min-size snapshots.
    fn min_size(&self) -> Vec2 {
        self.stack.min_size()
    }

    fn preferred_size(&self) -> Vec2 {
        self.stack.preferred_size()
    }

    fn view_frame(&self, view: &SharedView) -> Rect {
        self.stack.view_frame(view)
    }
}
