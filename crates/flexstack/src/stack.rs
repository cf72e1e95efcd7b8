//! State shared by every stack layout.

use glam::Vec2;

use crate::layout::{Alignment, Distribution, LayoutItem, StackConfig};
use crate::primitives::Rect;
use crate::view::{same_view, SharedView};

/// Ordered collection of [`LayoutItem`]s plus stack-wide configuration.
///
/// Insertion order is the primary-axis order for horizontal and vertical
/// stacks and the paint order for overlays. Hidden items stay in the
/// collection but are skipped by every size and position computation.
#[derive(Debug, Default)]
pub struct Stack {
    items: Vec<LayoutItem>,
    config: StackConfig,
}

impl Stack {
    pub fn new() -> Self {
        Self::with_config(StackConfig::new())
    }

    pub fn with_config(config: StackConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    /// Append `view`, snapshotting its current min size.
    ///
    /// The snapshot is never refreshed; later changes to the view's min size
    /// are not seen by [`Stack::min_size`].
    pub fn add_view(&mut self, view: SharedView) {
        self.items.push(LayoutItem::new(view, &self.config));
    }

    /// Remove the first item holding `view`. Returns whether one was found.
    pub fn remove_view(&mut self, view: &SharedView) -> bool {
        match self.position(view) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, view: &SharedView) -> bool {
        self.position(view).is_some()
    }

    fn position(&self, view: &SharedView) -> Option<usize> {
        self.items.iter().position(|item| same_view(&item.view, view))
    }

    /// Set the spacing and overwrite it on every existing item.
    pub fn set_spacing(&mut self, spacing: f32) {
        self.config.spacing = spacing;
        for item in &mut self.items {
            item.spacing = spacing;
        }
    }

    /// Set the default alignment and overwrite it on every existing item.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.config.alignment = alignment;
        for item in &mut self.items {
            item.alignment = alignment;
        }
    }

    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.config.distribution = distribution;
    }

    pub fn spacing(&self) -> f32 {
        self.config.spacing
    }

    pub fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    pub fn distribution(&self) -> Distribution {
        self.config.distribution
    }

    pub fn config(&self) -> StackConfig {
        self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    pub fn items_mut(&mut self) -> &mut [LayoutItem] {
        &mut self.items
    }

    pub fn item_mut(&mut self, index: usize) -> Option<&mut LayoutItem> {
        self.items.get_mut(index)
    }

    pub(crate) fn visible_items(&self) -> impl Iterator<Item = &LayoutItem> {
        self.items.iter().filter(|item| item.is_visible())
    }

    /// Componentwise max of the min-size snapshots of visible items.
    pub fn min_size(&self) -> Vec2 {
        self.visible_items()
            .fold(Vec2::ZERO, |size, item| size.max(item.min_size))
    }

    /// Componentwise max of the live preferred sizes of visible items.
    pub fn preferred_size(&self) -> Vec2 {
        self.visible_items()
            .fold(Vec2::ZERO, |size, item| size.max(item.preferred_size()))
    }

    /// Last computed frame for `view`, or [`Rect::ZERO`].
    pub fn view_frame(&self, view: &SharedView) -> Rect {
        self.position(view)
            .map(|index| self.items[index].frame)
            .unwrap_or(Rect::ZERO)
    }
}

/// Forwarding methods for a layout that wraps a [`Stack`] in a `stack` field.
macro_rules! stack_methods {
    ($ty:ident) => {
        impl $ty {
            pub fn new() -> Self {
                Self::with_config($crate::layout::StackConfig::new())
            }

            pub fn with_config(config: $crate::layout::StackConfig) -> Self {
                Self {
                    stack: $crate::stack::Stack::with_config(config),
                }
            }

            pub fn with_spacing(mut self, spacing: f32) -> Self {
                self.stack.set_spacing(spacing);
                self
            }

            pub fn with_alignment(mut self, alignment: $crate::layout::Alignment) -> Self {
                self.stack.set_alignment(alignment);
                self
            }

            pub fn with_distribution(mut self, distribution: $crate::layout::Distribution) -> Self {
                self.stack.set_distribution(distribution);
                self
            }

            /// See [`Stack::add_view`](crate::Stack::add_view)
            pub fn add_view(&mut self, view: $crate::view::SharedView) {
                self.stack.add_view(view);
            }

            pub fn remove_view(&mut self, view: &$crate::view::SharedView) -> bool {
                self.stack.remove_view(view)
            }

            pub fn set_spacing(&mut self, spacing: f32) {
                self.stack.set_spacing(spacing);
            }

            pub fn set_alignment(&mut self, alignment: $crate::layout::Alignment) {
                self.stack.set_alignment(alignment);
            }

            pub fn set_distribution(&mut self, distribution: $crate::layout::Distribution) {
                self.stack.set_distribution(distribution);
            }

            pub fn stack(&self) -> &$crate::stack::Stack {
                &self.stack
            }

            pub fn stack_mut(&mut self) -> &mut $crate::stack::Stack {
                &mut self.stack
            }
        }

        impl Default for $ty {
            fn default() -> Self {
                Self::new()
            }
        }
    };
}

pub(crate) use stack_methods;
