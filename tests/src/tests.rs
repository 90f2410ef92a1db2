use guidon::des;
use guidon::{ColorU8, color};

mod colorbar;
mod legend;

fn items() -> Vec<des::legend::Item> {
    vec![
        des::legend::Item::new("a", "group A", color::RED),
        des::legend::Item::new("b", "group B", color::BLUE),
        des::legend::Item::new("c", "group C", ColorU8::from_rgb(0, 200, 0)),
    ]
}

fn legend_des() -> des::Legend {
    des::Legend::new(items())
        .with_anchor(des::Anchor::TopLeft)
        .with_direction(des::Direction::Column)
        .with_item_size(100.0, 20.0)
        .with_items_spacing(4.0)
}

fn colorbar_des() -> des::ContinuousLegend {
    let scale = des::ColorScale::interpolated((0.0, 100.0), vec![color::BLACK, color::WHITE]);
    des::ContinuousLegend::new(scale)
        .with_anchor(des::Anchor::TopLeft)
        .with_length(200.0)
        .with_thickness(10.0)
}
