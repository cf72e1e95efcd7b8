use glam::Vec2;

use crate::flex::{self, Axis};
use crate::layout::Layout;
use crate::primitives::Rect;
use crate::stack::{stack_methods, Stack};
use crate::view::SharedView;

/// Lays out items left to right, growing or shrinking their widths by flex
/// weight and aligning each one vertically.
///
/// ```
/// # use flexstack::{shared, FixedView, HStack, Layout, Rect};
/// # use glam::Vec2;
/// let left = shared(FixedView::new(Vec2::new(100.0, 50.0)));
/// let right = shared(FixedView::new(Vec2::new(100.0, 50.0)));
///
/// let mut row = HStack::new().with_spacing(8.0);
/// row.add_view(left.clone());
/// row.add_view(right.clone());
/// row.layout(Rect::from([0.0, 0.0, 300.0, 50.0]));
///
/// assert_eq!(row.view_frame(&left), Rect::from([0.0, 0.0, 146.0, 50.0]));
/// assert_eq!(row.view_frame(&right), Rect::from([154.0, 0.0, 300.0, 50.0]));
/// ```
#[derive(Debug)]
pub struct HStack {
    stack: Stack,
}

stack_methods!(HStack);

impl Layout for HStack {
    fn layout(&mut self, bounds: Rect) {
        flex::distribute(&mut self.stack, bounds, Axis::Horizontal);
    }

    /// Widths summed plus spacing, heights maxed.
    fn min_size(&self) -> Vec2 {
        flex::min_size(&self.stack, Axis::Horizontal)
    }

    fn preferred_size(&self) -> Vec2 {
        self.stack.preferred_size()
    }

    fn view_frame(&self, view: &SharedView) -> Rect {
        self.stack.view_frame(view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{Alignment, Distribution};
    use crate::view::test_util::fixed;
    use crate::View;

    fn bounds(width: f32, height: f32) -> Rect {
        Rect::from([0.0, 0.0, width, height])
    }

    #[test]
    fn test_surplus_split_by_grow_weight() {
        let mut row = HStack::new().with_spacing(8.0);
        let (a, a_view) = fixed(100.0, 40.0);
        let (b, b_view) = fixed(100.0, 40.0);
        row.add_view(a_view.clone());
        row.add_view(b_view.clone());

        row.layout(bounds(300.0, 40.0));

        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 146.0, 40.0]));
        assert_eq!(b.borrow().frame(), Rect::from([154.0, 0.0, 300.0, 40.0]));
        assert_eq!(row.view_frame(&a_view), a.borrow().frame());
        assert_eq!(row.view_frame(&b_view), b.borrow().frame());
    }

    #[test]
    fn test_unequal_grow_weights() {
        let mut row = HStack::new().with_spacing(0.0);
        let (a, a_view) = fixed(50.0, 10.0);
        let (b, b_view) = fixed(50.0, 10.0);
        row.add_view(a_view);
        row.add_view(b_view);
        row.stack_mut().items_mut()[1].set_flex_grow(3.0);

        row.layout(bounds(200.0, 10.0));

        assert_eq!(a.borrow().frame().width(), 75.0);
        assert_eq!(b.borrow().frame().width(), 125.0);
        assert_eq!(b.borrow().frame().min.x, 75.0);
    }

    #[test]
    fn test_deficit_split_by_shrink_weight() {
        let mut row = HStack::new().with_spacing(10.0);
        let (a, a_view) = fixed(100.0, 10.0);
        let (b, b_view) = fixed(100.0, 10.0);
        row.add_view(a_view);
        row.add_view(b_view);

        // 150 - 10 spacing - 200 content = -60
        row.layout(bounds(150.0, 10.0));

        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 70.0, 10.0]));
        assert_eq!(b.borrow().frame(), Rect::from([80.0, 0.0, 150.0, 10.0]));
    }

    #[test]
    fn test_zero_weights_keep_preferred_and_overflow() {
        let mut row = HStack::new().with_spacing(0.0);
        let (a, a_view) = fixed(100.0, 10.0);
        let (b, b_view) = fixed(100.0, 10.0);
        row.add_view(a_view);
        row.add_view(b_view);
        for item in row.stack_mut().items_mut() {
            item.set_flex_grow(0.0);
            item.set_flex_shrink(0.0);
        }

        row.layout(bounds(150.0, 10.0));
        assert_eq!(b.borrow().frame(), Rect::from([100.0, 0.0, 200.0, 10.0]));

        row.layout(bounds(500.0, 10.0));
        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 100.0, 10.0]));
        assert_eq!(b.borrow().frame(), Rect::from([100.0, 0.0, 200.0, 10.0]));
    }

    #[test]
    fn test_cross_axis_alignment() {
        let mut row = HStack::new().with_spacing(0.0);
        let (a, a_view) = fixed(10.0, 20.0);
        row.add_view(a_view);
        let origin = Rect::from([5.0, 10.0, 15.0, 110.0]);

        row.set_alignment(Alignment::Leading);
        row.layout(origin);
        assert_eq!(a.borrow().frame(), Rect::from([5.0, 10.0, 15.0, 30.0]));

        row.set_alignment(Alignment::Center);
        row.layout(origin);
        assert_eq!(a.borrow().frame(), Rect::from([5.0, 50.0, 15.0, 70.0]));

        row.set_alignment(Alignment::Trailing);
        row.layout(origin);
        assert_eq!(a.borrow().frame(), Rect::from([5.0, 90.0, 15.0, 110.0]));
    }

    #[test]
    fn test_hidden_item_excluded_but_spacing_counted() {
        let mut row = HStack::new().with_spacing(10.0);
        let (a, a_view) = fixed(50.0, 10.0);
        let (hidden, hidden_view) = fixed(50.0, 10.0);
        let (c, c_view) = fixed(50.0, 10.0);
        row.add_view(a_view);
        row.add_view(hidden_view);
        row.add_view(c_view);

        let stale = Rect::from([1.0, 2.0, 3.0, 4.0]);
        {
            let mut hidden = hidden.borrow_mut();
            hidden.set_frame(stale);
            hidden.set_visible(false);
        }

        // Spacing budget is 2 * 10 even though only one gap is used:
        // available 180, content 100, flex 80 -> each item 90
        row.layout(bounds(200.0, 10.0));

        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 90.0, 10.0]));
        assert_eq!(c.borrow().frame(), Rect::from([100.0, 0.0, 190.0, 10.0]));
        assert_eq!(hidden.borrow().frame(), stale);
    }

    #[test]
    fn test_layout_is_idempotent() {
        let mut row = HStack::new();
        let (a, a_view) = fixed(33.0, 12.0);
        let (b, b_view) = fixed(71.0, 9.0);
        row.add_view(a_view);
        row.add_view(b_view);

        row.layout(bounds(257.0, 31.0));
        let first = (a.borrow().frame(), b.borrow().frame());
        row.layout(bounds(257.0, 31.0));
        let second = (a.borrow().frame(), b.borrow().frame());

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_stack_is_noop() {
        let mut row = HStack::new();
        row.layout(bounds(100.0, 100.0));
        assert_eq!(row.min_size(), Vec2::ZERO);
        assert_eq!(row.preferred_size(), Vec2::ZERO);
    }

    #[test]
    fn test_degenerate_bounds_are_not_clamped() {
        let mut row = HStack::new().with_spacing(0.0);
        let (a, a_view) = fixed(10.0, 10.0);
        row.add_view(a_view);

        row.layout(bounds(-20.0, 10.0));
        assert_eq!(a.borrow().frame().width(), -20.0);
    }

    #[test]
    fn test_min_size_sums_widths() {
        let mut row = HStack::new().with_spacing(4.0);
        let (a, a_view) = fixed(0.0, 0.0);
        let (b, b_view) = fixed(0.0, 0.0);
        let (c, c_view) = fixed(0.0, 0.0);
        a.borrow_mut().set_min_size(Vec2::new(10.0, 5.0));
        b.borrow_mut().set_min_size(Vec2::new(20.0, 15.0));
        c.borrow_mut().set_min_size(Vec2::new(30.0, 25.0));
        row.add_view(a_view);
        row.add_view(b_view);
        row.add_view(c_view);

        assert_eq!(row.min_size(), Vec2::new(68.0, 25.0));

        c.borrow_mut().set_visible(false);
        assert_eq!(row.min_size(), Vec2::new(34.0, 15.0));
    }

    #[test]
    fn test_center_and_end_distribution_use_leftover() {
        let (a, a_view) = fixed(40.0, 10.0);
        let mut row = HStack::new()
            .with_spacing(0.0)
            .with_distribution(Distribution::Center);
        row.add_view(a_view);
        row.stack_mut().items_mut()[0].set_flex_grow(0.0);

        row.layout(bounds(100.0, 10.0));
        assert_eq!(a.borrow().frame(), Rect::from([30.0, 0.0, 70.0, 10.0]));

        row.set_distribution(Distribution::End);
        row.layout(bounds(100.0, 10.0));
        assert_eq!(a.borrow().frame(), Rect::from([60.0, 0.0, 100.0, 10.0]));
    }

    #[test]
    fn test_center_and_end_ignore_spacing_reserved_for_hidden_items() {
        let (a, a_view) = fixed(50.0, 10.0);
        let (hidden, hidden_view) = fixed(50.0, 10.0);
        let (c, c_view) = fixed(50.0, 10.0);
        let mut row = HStack::new()
            .with_spacing(10.0)
            .with_distribution(Distribution::Center);
        row.add_view(a_view);
        row.add_view(hidden_view);
        row.add_view(c_view);
        hidden.borrow_mut().set_visible(false);

        // Grow weights absorb the whole surplus, so the run stays put
        row.layout(bounds(200.0, 10.0));
        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 90.0, 10.0]));
        assert_eq!(c.borrow().frame(), Rect::from([100.0, 0.0, 190.0, 10.0]));

        row.set_distribution(Distribution::End);
        row.layout(bounds(200.0, 10.0));
        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 90.0, 10.0]));
        assert_eq!(c.borrow().frame(), Rect::from([100.0, 0.0, 190.0, 10.0]));
    }

    #[test]
    fn test_fill_equally_ignores_preferred_width() {
        let mut row = HStack::new()
            .with_spacing(10.0)
            .with_distribution(Distribution::FillEqually);
        let (a, a_view) = fixed(10.0, 10.0);
        let (b, b_view) = fixed(90.0, 10.0);
        row.add_view(a_view);
        row.add_view(b_view);

        row.layout(bounds(210.0, 10.0));

        assert_eq!(a.borrow().frame(), Rect::from([0.0, 0.0, 100.0, 10.0]));
        assert_eq!(b.borrow().frame(), Rect::from([110.0, 0.0, 210.0, 10.0]));
    }

    #[test]
    fn test_fill_proportionally_scales_preferred_width() {
        let mut row = HStack::new()
            .with_spacing(0.0)
            .with_distribution(Distribution::FillProportionally);
        let (a, a_view) = fixed(10.0, 10.0);
        let (b, b_view) = fixed(30.0, 10.0);
        row.add_view(a_view);
        row.add_view(b_view);

        row.layout(bounds(200.0, 10.0));

        assert_eq!(a.borrow().frame().width(), 50.0);
        assert_eq!(b.borrow().frame().width(), 150.0);
    }
}
