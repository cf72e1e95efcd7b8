//! Lays out a toolbar / content / status bar window and logs every frame.
//!
//! Usage: `flexstack-demo [WIDTHxHEIGHT]`. Set `RUST_LOG=trace` to see each
//! placement as the passes run.

use std::cell::RefCell;
use std::rc::Rc;

use flexstack::{
    shared, Alignment, FixedView, HStack, Layout, Rect, SharedView, StackView, VStack, View,
    ZStack,
};
use glam::Vec2;

const DEFAULT_WINDOW: Vec2 = Vec2::new(640.0, 480.0);

/// Parse `WIDTHxHEIGHT`, e.g. `800x600`.
fn parse_size(arg: &str) -> Option<Vec2> {
    let (width, height) = arg.split_once('x')?;
    let width = width.trim().parse::<f32>().ok()?;
    let height = height.trim().parse::<f32>().ok()?;
    Some(Vec2::new(width, height))
}

/// A named leaf that is kept around so its frame can be reported.
struct Leaf {
    name: &'static str,
    view: Rc<RefCell<FixedView>>,
}

impl Leaf {
    fn new(name: &'static str, width: f32, height: f32) -> Self {
        Self {
            name,
            view: Rc::new(RefCell::new(FixedView::new(Vec2::new(width, height)))),
        }
    }

    fn handle(&self) -> SharedView {
        self.view.clone()
    }
}

/// Wrap `layout` in a [`StackView`] tracking every leaf it holds.
fn container<L: Layout + 'static>(layout: L, leaves: &[SharedView]) -> SharedView {
    let mut view = StackView::new(layout);
    for leaf in leaves {
        view.add_view(leaf.clone());
    }
    shared(view)
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let window = match std::env::args().nth(1) {
        Some(arg) => parse_size(&arg).unwrap_or_else(|| {
            log::warn!("could not parse window size {arg:?}, using {DEFAULT_WINDOW}");
            DEFAULT_WINDOW
        }),
        None => DEFAULT_WINDOW,
    };

    let back = Leaf::new("back", 32.0, 32.0);
    let title = Leaf::new("title", 200.0, 24.0);
    let menu = Leaf::new("menu", 32.0, 32.0);
    let canvas = Leaf::new("canvas", 400.0, 300.0);
    let badge = Leaf::new("badge", 48.0, 48.0);
    let status = Leaf::new("status", 120.0, 20.0);

    let mut toolbar = HStack::new().with_alignment(Alignment::Center);
    for leaf in [&back, &title, &menu] {
        toolbar.add_view(leaf.handle());
    }
    // Only the title stretches
    for index in [0, 2] {
        if let Some(item) = toolbar.stack_mut().item_mut(index) {
            item.set_flex_grow(0.0);
            item.set_flex_shrink(0.0);
        }
    }
    let toolbar = container(toolbar, &[back.handle(), title.handle(), menu.handle()]);

    let mut content = ZStack::new().with_alignment(Alignment::Center);
    content.add_view(canvas.handle());
    content.add_view(badge.handle());
    if let Some(item) = content.stack_mut().item_mut(1) {
        item.alignment = Alignment::Trailing;
    }
    let content = container(content, &[canvas.handle(), badge.handle()]);

    let mut root = VStack::new()
        .with_spacing(0.0)
        .with_alignment(Alignment::Leading);
    root.add_view(toolbar.clone());
    root.add_view(content.clone());
    root.add_view(status.handle());
    // Toolbar and status bar keep their height, content takes the rest
    for index in [0, 2] {
        if let Some(item) = root.stack_mut().item_mut(index) {
            item.set_flex_grow(0.0);
            item.set_flex_shrink(0.0);
        }
    }
    let mut root = StackView::new(root);
    root.add_view(toolbar.clone());
    root.add_view(content.clone());
    root.add_view(status.handle());

    log::info!("min size {}, preferred size {}", root.min_size(), root.preferred_size());

    for size in [window, window * 0.5] {
        log::info!("window {}x{}", size.x, size.y);
        root.set_frame(Rect::from_min_size(Vec2::ZERO, size));

        log::info!("  toolbar {:?}", toolbar.borrow().frame());
        log::info!("  content {:?}", content.borrow().frame());
        for leaf in [&back, &title, &menu, &canvas, &badge, &status] {
            log::info!("  {:<8} {:?}", leaf.name, leaf.view.borrow().frame());
        }
    }
}
