// Copyright 2025 the Flameview Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A flame graph rendered as text.
//!
//! This example drives a `FlameView` the way a host UI would:
//! - load a profile with two selections,
//! - print the bands it would paint,
//! - click to zoom in, hover for shares, flick the wheel to zoom out,
//! - ctrl-click to "open" a frame through the listener.
//!
//! Run:
//! - `cargo run -p flameview_demos --example text_flame`

use flame_tree::{FrameFlags, NodeId, Profile, ProfileNode};
use flame_view::{FlameView, ViewConfig, ViewListener};
use kurbo::{Point, Size};

/// Prints what the view reports.
struct Printer;

impl ViewListener for Printer {
    fn selection_changed(&mut self, key: &str) {
        println!("  listener: selection changed to {key:?}");
    }

    fn ctrl_activated(&mut self, profile: &Profile, node: NodeId) {
        if let Some(frame) = profile.frame(node) {
            println!(
                "  listener: open {}:{} ({})",
                frame.file, frame.line, frame.func
            );
        }
    }
}

fn sample_profile() -> Profile {
    Profile::from_selections([
        (
            "all",
            ProfileNode::new("main", 1000).at("src/main.rs", 3).with_children([
                ProfileNode::new("parse", 450)
                    .at("src/parse.rs", 12)
                    .with_children([
                        ProfileNode::new("lex", 300).at("src/lex.rs", 40),
                        ProfileNode::new("alloc", 90)
                            .at("alloc/raw_vec.rs", 230)
                            .with_flags(FrameFlags::NATIVE),
                    ]),
                ProfileNode::new("render", 400)
                    .at("src/render.rs", 8)
                    .with_child(
                        ProfileNode::new("dispatch", 150)
                            .at("src/render.rs", 77)
                            .with_flags(FrameFlags::RUNTIME_DISPATCH),
                    ),
                ProfileNode::new("collect", 100)
                    .at("gc/collect.rs", 1)
                    .with_flags(FrameFlags::GC),
            ]),
        ),
        (
            "worker-1",
            ProfileNode::new("run", 200)
                .at("src/worker.rs", 5)
                .with_child(ProfileNode::new("poll", 180).at("src/worker.rs", 19)),
        ),
    ])
}

fn print_bands(view: &mut FlameView<Printer>) {
    let width = view.viewport().width;
    for band in view.bands() {
        // One character per 10 px.
        let start = (band.bounds.x0 / 10.0).round() as usize;
        let len = (band.bounds.width() / 10.0).round().max(1.0) as usize;
        let label = if band.geometry.label.is_some() {
            band.frame.func.as_str()
        } else {
            ""
        };
        let [r, g, b, a] = band.colors.fill.to_rgba8();
        println!(
            "{:>4} {}{:-<len$} #{r:02x}{g:02x}{b:02x}{a:02x} {}",
            band.bounds.y0,
            " ".repeat(start),
            label,
            band.frame.flags.labels().collect::<Vec<_>>().join(", "),
        );
    }
    println!("     ({} px wide, more below: {})", width, view.can_scroll_down());
}

fn main() {
    let config = ViewConfig::default().with_row_height(20.0);
    let mut view = FlameView::with_listener(config, Size::new(800.0, 70.0), Printer)
        .expect("valid configuration");
    view.set_profile(Some(sample_profile()));

    println!(
        "== selections: {:?} ==",
        view.selection_keys().collect::<Vec<_>>()
    );
    print_bands(&mut view);

    println!("\n== hover and click `parse` ==");
    let parse = Point::new(50.0, 30.0);
    if let Some(info) = view.hover(parse) {
        println!(
            "  hover: {:.0}% of root, outline {:?}",
            info.share_of_root.unwrap_or(0.0) * 100.0,
            info.outline.outer
        );
    }
    println!("  click: {:?}", view.click(parse, false));
    print_bands(&mut view);

    println!("\n== flick the wheel up ==");
    println!("  wheel: {:?}", view.wheel(-60.0));
    print_bands(&mut view);

    println!("\n== ctrl-click `render` ==");
    println!("  click: {:?}", view.click(Point::new(600.0, 30.0), true));

    println!("\n== switch to worker-1 ==");
    view.select("worker-1");
    print_bands(&mut view);
}
