use glam::Vec2;

use crate::primitives::{Rect, UNBOUNDED};
use crate::view::SharedView;

/// Position of an item on the cross axis (or both axes for [`ZStack`](crate::ZStack)).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alignment {
    /// Left for vertical stacks, top for horizontal stacks
    Leading,
    #[default]
    Center,
    /// Right for vertical stacks, bottom for horizontal stacks
    Trailing,
}

impl Alignment {
    /// Offset of an item of extent `item` inside a slot of extent `slot`.
    ///
    /// Not clamped: an item larger than its slot gets a negative offset.
    pub fn offset(self, slot: f32, item: f32) -> f32 {
        match self {
            Alignment::Leading => 0.0,
            Alignment::Center => (slot - item) / 2.0,
            Alignment::Trailing => slot - item,
        }
    }
}

/// How a stack packs its items along the primary axis
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Distribution {
    /// Pack from the start, growing and shrinking by flex weight
    #[default]
    Start,
    /// Like `Start`, then center any space the weights left unused
    Center,
    /// Like `Start`, then push the run to the end
    End,
    /// Same as `Start`: the flex weights already absorb the surplus
    Fill,
    /// Every visible item gets the same extent, preferred sizes are ignored
    FillEqually,
    /// Extents scale with each item's preferred extent
    FillProportionally,
}

/// Stack-wide defaults applied to items as they are added.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    pub spacing: f32,
    pub alignment: Alignment,
    pub distribution: Distribution,
}

impl StackConfig {
    pub const DEFAULT_SPACING: f32 = 8.0;

    /// Spacing 8, centered, start-packed
    pub const fn new() -> Self {
        Self {
            spacing: Self::DEFAULT_SPACING,
            alignment: Alignment::Center,
            distribution: Distribution::Start,
        }
    }

    pub const fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub const fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    pub const fn with_distribution(mut self, distribution: Distribution) -> Self {
        self.distribution = distribution;
        self
    }
}

impl Default for StackConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// One view inside a stack, together with its layout metadata.
pub struct LayoutItem {
    pub(crate) view: SharedView,
    /// Last computed frame, written only by layout passes
    pub(crate) frame: Rect,
    /// Snapshot of the view's min size taken when it was added
    pub min_size: Vec2,
    pub max_size: Vec2,
    pub alignment: Alignment,
    /// Mirrors the owning stack's spacing
    pub spacing: f32,
    /// Carried for over-constrained layouts; no algorithm reads it yet
    pub priority: f32,
    flex_grow: f32,
    flex_shrink: f32,
}

impl LayoutItem {
    pub(crate) fn new(view: SharedView, config: &StackConfig) -> Self {
        let min_size = view.borrow().min_size();
        Self {
            view,
            frame: Rect::ZERO,
            min_size,
            max_size: UNBOUNDED,
            alignment: config.alignment,
            spacing: config.spacing,
            priority: 0.0,
            flex_grow: 1.0,
            flex_shrink: 1.0,
        }
    }

    pub fn view(&self) -> &SharedView {
        &self.view
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    pub fn flex_grow(&self) -> f32 {
        self.flex_grow
    }

    pub fn flex_shrink(&self) -> f32 {
        self.flex_shrink
    }

    /// Negative weights are clamped to zero; zero opts out of growing.
    pub fn set_flex_grow(&mut self, weight: f32) {
        self.flex_grow = weight.max(0.0);
    }

    /// Negative weights are clamped to zero; zero opts out of shrinking.
    pub fn set_flex_shrink(&mut self, weight: f32) {
        self.flex_shrink = weight.max(0.0);
    }

    pub fn is_visible(&self) -> bool {
        self.view.borrow().is_visible()
    }

    pub fn preferred_size(&self) -> Vec2 {
        self.view.borrow().preferred_size()
    }

    /// Store the computed frame and hand it to the view.
    pub(crate) fn place(&mut self, frame: Rect) {
        self.frame = frame;
        self.view.borrow_mut().set_frame(frame);
    }
}

impl std::fmt::Debug for LayoutItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutItem")
            .field("frame", &self.frame)
            .field("min_size", &self.min_size)
            .field("alignment", &self.alignment)
            .field("flex_grow", &self.flex_grow)
            .field("flex_shrink", &self.flex_shrink)
            .finish_non_exhaustive()
    }
}

/// A layout algorithm that positions a collection of views inside some bounds.
pub trait Layout {
    /// Run a full pass, writing a frame to every visible item.
    fn layout(&mut self, bounds: Rect);

    fn min_size(&self) -> Vec2;

    fn preferred_size(&self) -> Vec2;

    /// Last frame computed for `view`, or [`Rect::ZERO`] when the view is
    /// unknown or has not been laid out yet.
    fn view_frame(&self, view: &SharedView) -> Rect;
}

impl<L: Layout + ?Sized> Layout for Box<L> {
    fn layout(&mut self, bounds: Rect) {
        (**self).layout(bounds)
    }

    fn min_size(&self) -> Vec2 {
        (**self).min_size()
    }

    fn preferred_size(&self) -> Vec2 {
        (**self).preferred_size()
    }

    fn view_frame(&self, view: &SharedView) -> Rect {
        (**self).view_frame(view)
    }
}
