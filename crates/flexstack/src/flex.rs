//! One-dimensional flex distribution shared by [`HStack`](crate::HStack) and
//! [`VStack`](crate::VStack).

use glam::Vec2;

use crate::layout::{Distribution, LayoutItem};
use crate::primitives::Rect;
use crate::stack::Stack;

/// Primary axis of a flex pass
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    fn main(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.x,
            Axis::Vertical => v.y,
        }
    }

    fn cross(self, v: Vec2) -> f32 {
        match self {
            Axis::Horizontal => v.y,
            Axis::Vertical => v.x,
        }
    }

    /// Build a vector from primary and cross components.
    fn pack(self, main: f32, cross: f32) -> Vec2 {
        match self {
            Axis::Horizontal => Vec2::new(main, cross),
            Axis::Vertical => Vec2::new(cross, main),
        }
    }
}

/// Totals gathered over the visible items before anything is placed.
struct FlexPlan {
    available: f32,
    flex_space: f32,
    total_content: f32,
    total_grow: f32,
    total_shrink: f32,
    visible_count: usize,
}

impl FlexPlan {
    fn extent(&self, item: &LayoutItem, preferred: f32, distribution: Distribution) -> f32 {
        match distribution {
            Distribution::FillEqually => self.available / self.visible_count as f32,
            Distribution::FillProportionally if self.total_content > 0.0 => {
                preferred * self.available / self.total_content
            }
            Distribution::FillProportionally => preferred,
            Distribution::Start | Distribution::Center | Distribution::End | Distribution::Fill => {
                if self.flex_space > 0.0 && self.total_grow > 0.0 {
                    preferred + self.flex_space * item.flex_grow() / self.total_grow
                } else if self.flex_space < 0.0 && self.total_shrink > 0.0 {
                    preferred + self.flex_space * item.flex_shrink() / self.total_shrink
                } else {
                    preferred
                }
            }
        }
    }
}

/// Lay out the visible items of `stack` one after another along `axis`.
///
/// Spacing is budgeted over every item, hidden ones included, but only
/// inserted between visible items. Hidden items keep their previous frame.
pub(crate) fn distribute(stack: &mut Stack, bounds: Rect, axis: Axis) {
    if stack.is_empty() {
        return;
    }

    let spacing = stack.spacing();
    let distribution = stack.distribution();

    let visible: Vec<(usize, Vec2)> = stack
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.is_visible())
        .map(|(index, item)| (index, item.preferred_size()))
        .collect();

    if visible.is_empty() {
        log::trace!("{:?} pass skipped, all {} items hidden", axis, stack.len());
        return;
    }

    let total_spacing = (stack.len() - 1) as f32 * spacing;
    let total_content: f32 = visible.iter().map(|(_, preferred)| axis.main(*preferred)).sum();
    let available = axis.main(bounds.size()) - total_spacing;
    let (total_grow, total_shrink) = visible.iter().fold((0.0, 0.0), |(grow, shrink), (index, _)| {
        let item = &stack.items()[*index];
        (grow + item.flex_grow(), shrink + item.flex_shrink())
    });

    let plan = FlexPlan {
        available,
        flex_space: available - total_content,
        total_content,
        total_grow,
        total_shrink,
        visible_count: visible.len(),
    };

    let extents: Vec<f32> = visible
        .iter()
        .map(|(index, preferred)| plan.extent(&stack.items()[*index], axis.main(*preferred), distribution))
        .collect();

    // Spacing reserved for hidden items is not leftover
    let leftover = (plan.available - extents.iter().sum::<f32>()).max(0.0);
    let lead = match distribution {
        Distribution::Center => leftover / 2.0,
        Distribution::End => leftover,
        _ => 0.0,
    };

    log::debug!(
        "{:?} pass: {} items, {} visible, flex space {}, lead {}",
        axis,
        stack.len(),
        visible.len(),
        plan.flex_space,
        lead
    );

    let cross_extent = axis.cross(bounds.size());
    let last = visible.len() - 1;
    let mut cursor = axis.main(bounds.min) + lead;

    for (n, ((index, preferred), extent)) in visible.iter().zip(extents).enumerate() {
        let item = &mut stack.items_mut()[*index];
        let cross = axis.cross(bounds.min) + item.alignment.offset(cross_extent, axis.cross(*preferred));
        let frame = Rect::from_min_size(
            axis.pack(cursor, cross),
            axis.pack(extent, axis.cross(*preferred)),
        );
        log::trace!("item {} -> {:?}", index, frame);
        item.place(frame);

        cursor += extent;
        if n < last {
            cursor += spacing;
        }
    }
}

/// Min size along `axis`: snapshots summed on the primary axis plus the
/// spacing between visible items, max on the cross axis.
pub(crate) fn min_size(stack: &Stack, axis: Axis) -> Vec2 {
    let (count, main, cross) = stack
        .visible_items()
        .fold((0usize, 0.0f32, 0.0f32), |(count, main, cross), item| {
            (
                count + 1,
                main + axis.main(item.min_size),
                cross.max(axis.cross(item.min_size)),
            )
        });
    let gaps = count.saturating_sub(1) as f32 * stack.spacing();
    axis.pack(main + gaps, cross)
}
