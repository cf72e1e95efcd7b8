//! # flexstack
//!
//! Flexible-box stack layouts.
//!
//! Given a bounding rectangle and an ordered collection of views, a layout
//! computes a frame (position and size) for each visible view and writes it
//! back through the view's frame setter. Layout runs synchronously, whenever
//! the caller decides bounds have changed.
//!
//! ## Core Types
//!
//! - [`View`] - What a layout positions; implemented by the caller's widgets
//! - [`Layout`] - A layout algorithm over a collection of views
//! - [`Stack`] - Item collection and configuration shared by every stack
//!
//! ## Layouts
//!
//! - [`HStack`] / [`VStack`] - One-dimensional flex distribution along x / y
//! - [`ZStack`] - Overlapping items positioned by alignment only
//! - [`StackView`] - A view that reruns its layout when its frame changes
//!
//! ## Logging
//!
//! Passes report through the [`log`] facade: a `debug` summary per pass and a
//! `trace` line per placed item.

mod flex;
mod hstack;
mod layout;
mod primitives;
mod stack;
mod stack_view;
mod view;
mod vstack;
mod zstack;

pub use hstack::*;
pub use layout::*;
pub use primitives::*;
pub use stack::Stack;
pub use stack_view::*;
pub use view::*;
pub use vstack::*;
pub use zstack::*;
