use guidon::des;
use guidon::drawing;
use guidon::style::Theme;
use guidon::text::HeuristicMetrics;

use super::colorbar_des;
use crate::{CONTAINER, assert_same_svg, pixel, pxl_pixmap, svg_string};

fn compute(des: &des::ContinuousLegend) -> drawing::Colorbar {
    drawing::Colorbar::compute(des, CONTAINER, &HeuristicMetrics::default()).unwrap()
}

#[test]
fn svg_declares_gradient_with_full_stop_range() {
    let bar = compute(&colorbar_des());
    let svg = svg_string(|s| bar.draw(s, &Theme::Light));

    assert!(svg.contains("<linearGradient"));
    assert!(svg.contains("offset=\"0\""));
    assert!(svg.contains("offset=\"1\""));
    assert!(svg.contains("stop-color=\"#000000\""));
    assert!(svg.contains("stop-color=\"#ffffff\""));
    // the bar rect references the gradient
    assert!(svg.contains("url(#guidon-gradient1)"));
}

#[test]
fn svg_places_extreme_tick_labels() {
    let bar = compute(&colorbar_des());
    let svg = svg_string(|s| bar.draw(s, &Theme::Light));

    // domain [0, 100] over a 200px bar: extreme labels sit at both ends
    assert!(svg.contains("100"));
    assert!(svg.contains("x=\"0\""));
    assert!(svg.contains("x=\"200\""));
}

#[test]
fn pxl_gradient_runs_dark_to_light() {
    let bar = compute(&colorbar_des());
    let pixmap = pxl_pixmap(|s| bar.draw(s, &Theme::Light));

    let dark = pixel(&pixmap, 2, 5);
    let light = pixel(&pixmap, 197, 5);
    assert!(dark[0] < 30, "expected dark start, got {:?}", dark);
    assert!(light[0] > 225, "expected light end, got {:?}", light);
    // monotonic along the bar
    let mid = pixel(&pixmap, 100, 5);
    assert!(dark[0] < mid[0] && mid[0] < light[0]);
}

#[test]
fn vertical_bar_darkens_towards_the_bottom() {
    let des = colorbar_des().with_direction(des::BarDirection::Vertical);
    let bar = compute(&des);
    let pixmap = pxl_pixmap(|s| bar.draw(s, &Theme::Light));

    // domain start (black) at the bottom of a 200px tall bar
    let bottom = pixel(&pixmap, 5, 197);
    let top = pixel(&pixmap, 5, 2);
    assert!(bottom[0] < 30, "expected dark bottom, got {:?}", bottom);
    assert!(top[0] > 225, "expected light top, got {:?}", top);
}

#[test]
fn tick_marks_respect_theme_line_gating() {
    let with_lines = compute(&colorbar_des());
    let svg = svg_string(|s| with_lines.draw(s, &Theme::Light));
    assert!(svg.contains("<path"));

    // a zero line width disables tick marks but keeps labels
    let des = colorbar_des().with_tick_line(None);
    let without_lines = compute(&des);
    let svg = svg_string(|s| without_lines.draw(s, &Theme::Light));
    assert!(!svg.contains("<path"));
    assert!(svg.contains("100"));
}

#[test]
fn title_renders_in_nested_rotated_group() {
    let des = colorbar_des()
        .with_direction(des::BarDirection::Vertical)
        .with_title("level");
    let bar = compute(&des);
    let svg = svg_string(|s| bar.draw(s, &Theme::Light));

    assert!(svg.contains("level"));
    // -90 degrees rotation shows up as sin components -1 / 1 in the
    // nested group matrix
    assert!(svg.contains(" -1 1 "));
}

#[test]
fn svg_render_is_idempotent() {
    let bar = compute(&colorbar_des());
    let a = svg_string(|s| bar.draw(s, &Theme::Light));
    let b = svg_string(|s| bar.draw(s, &Theme::Light));
    assert_same_svg(&a, &b);
}
