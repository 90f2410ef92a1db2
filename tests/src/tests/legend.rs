use guidon::color;
use guidon::des;
use guidon::drawing;
use guidon::geom::Size;
use guidon::render::Surface;
use guidon::style::Theme;

use super::legend_des;
use crate::{CONTAINER, assert_same_svg, pixel, pxl_pixmap, svg_string};

#[test]
fn svg_contains_item_symbols() {
    let legend = drawing::Legend::compute(&legend_des(), CONTAINER).unwrap();
    let svg = svg_string(|s| legend.draw(s, &Theme::Light));

    assert!(svg.contains("<rect"));
    assert!(svg.contains("#ff0000"));
    assert!(svg.contains("#0000ff"));
    assert!(svg.contains("group A"));
    assert!(svg.contains("group C"));
}

#[test]
fn svg_group_carries_anchor_origin() {
    let des = legend_des()
        .with_anchor(des::Anchor::BottomRight)
        .with_direction(des::Direction::Row)
        .with_translate(10.0, 0.0)
        .with_item_size(100.0, 16.0)
        .with_items_spacing(3.0);
    let legend = drawing::Legend::compute(&des, CONTAINER).unwrap();
    assert_eq!(legend.size(), Size::new(306.0, 16.0));

    let svg = svg_string(|s| legend.draw(s, &Theme::Light));
    // one group, translated to the anchored origin
    assert!(svg.contains("matrix(1 0 0 1 204 284)"));
}

#[test]
fn pxl_draws_symbols_at_computed_offsets() {
    let legend = drawing::Legend::compute(&legend_des(), CONTAINER).unwrap();
    let pixmap = pxl_pixmap(|s| legend.draw(s, &Theme::Light));

    // first item: 16px symbol centered in a 20px tall box at (0, 2)
    assert_eq!(pixel(&pixmap, 8, 10), [255, 0, 0, 255]);
    // second item starts one row below (item height 20 + spacing 4)
    assert_eq!(pixel(&pixmap, 8, 34), [0, 0, 255, 255]);
    // outside any symbol, the pixmap is untouched
    assert_eq!(pixel(&pixmap, 400, 200), [0, 0, 0, 0]);
}

#[test]
fn sequential_legends_do_not_leak_state() {
    let first = legend_des().with_item_text_color(color::RED);
    let second_items = vec![
        des::legend::Item::new("x", "series X", color::STEELBLUE),
        des::legend::Item::new("y", "series Y", color::TEAL),
    ];
    let second = des::Legend::new(second_items)
        .with_anchor(des::Anchor::BottomLeft)
        .with_direction(des::Direction::Column)
        .with_item_size(100.0, 20.0);

    let l1 = drawing::Legend::compute(&first, CONTAINER).unwrap();
    let l2 = drawing::Legend::compute(&second, CONTAINER).unwrap();

    let pixmap = pxl_pixmap(|s| {
        l1.draw(s, &Theme::Light);
        l2.draw(s, &Theme::Light);
    });

    // both legends keep their own symbol colors
    assert_eq!(pixel(&pixmap, 8, 10), [255, 0, 0, 255]);
    // second legend block is 40px tall, anchored at the bottom:
    // first symbol center at y = 260 + 2 + 8
    assert_eq!(pixel(&pixmap, 8, 270), [70, 130, 180, 255]);

    // the first legend's label color override must not bleed into the
    // second legend's labels
    let svg = svg_string(|s| {
        l1.draw(s, &Theme::Light);
        l2.draw(s, &Theme::Light);
    });
    let second_group = svg.rsplit("<g").next().unwrap();
    assert!(second_group.contains("fill=\"#000000\""));
    assert!(!second_group.contains("fill=\"#ff0000\""));
}

#[test]
fn svg_render_is_idempotent() {
    let legend = drawing::Legend::compute(&legend_des(), CONTAINER).unwrap();
    let a = svg_string(|s| legend.draw(s, &Theme::Light));
    let b = svg_string(|s| legend.draw(s, &Theme::Light));
    assert_same_svg(&a, &b);
}

#[test]
fn both_backends_consume_the_same_geometry() {
    let des = legend_des().with_anchor(des::Anchor::Center);
    let legend = drawing::Legend::compute(&des, CONTAINER).unwrap();

    // block is 100x68 centered in 500x300; first symbol at
    // origin (200, 116) + (0, 2), center at (208, 126)
    let origin = legend.origin();
    assert_eq!(origin.x, 200.0);
    assert_eq!(origin.y, 116.0);

    let pixmap = pxl_pixmap(|s| legend.draw(s, &Theme::Light));
    assert_eq!(pixel(&pixmap, 208, 126), [255, 0, 0, 255]);

    let svg = svg_string(|s| legend.draw(s, &Theme::Light));
    assert!(svg.contains("matrix(1 0 0 1 200 116)"));
}

#[test]
fn background_fill_and_block_box() {
    let des = legend_des()
        .with_fill(guidon::style::theme::Fill::from(
            guidon::style::theme::Color::Fixed(color::SILVER),
        ))
        .with_border(guidon::style::theme::Line::from(
            guidon::style::theme::Col::Foreground,
        ));
    let legend = drawing::Legend::compute(&des, CONTAINER).unwrap();

    let pixmap = pxl_pixmap(|s| {
        s.fill(&guidon::render::Paint::Solid(color::WHITE));
        legend.draw(s, &Theme::Light);
    });

    // the background fill covers the whole surface
    assert_eq!(pixel(&pixmap, 400, 200), [255, 255, 255, 255]);
    // the block box is filled behind the items (between two rows)
    assert_eq!(pixel(&pixmap, 50, 21), [192, 192, 192, 255]);
    // symbols draw on top of the box
    assert_eq!(pixel(&pixmap, 8, 10), [255, 0, 0, 255]);
}
