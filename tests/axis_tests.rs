use approx::assert_relative_eq;
use chartjs_rs::api::{Axis, AxisTicks, AxisType, Options, ScaleLabel, Scales, TimeUnit};
use chartjs_rs::core::ToJsonObject;
use serde_json::json;

#[test]
fn zero_range_ticks_are_omitted() {
    let axis = Axis::new(AxisType::Linear).with_ticks(AxisTicks::new(5.0, 5.0, 1.0));

    let object = axis.to_object();

    assert!(!axis.ticks.is_valid());
    assert!(!object.contains_key("ticks"));
    assert!(axis.ticks.to_object().is_empty());
}

#[test]
fn configured_ticks_emit_step_and_range() {
    let object = Axis::default()
        .with_ticks(
            AxisTicks::default()
                .with_minimum(0.0)
                .with_maximum(10.0)
                .with_step_size(1.0),
        )
        .to_object();

    let ticks = object["ticks"].as_object().expect("ticks object");
    let keys: Vec<&str> = ticks.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["stepSize", "min", "max"]);
    assert_relative_eq!(ticks["stepSize"].as_f64().expect("step"), 1.0);
    assert_relative_eq!(ticks["min"].as_f64().expect("min"), 0.0);
    assert_relative_eq!(ticks["max"].as_f64().expect("max"), 10.0);
}

#[test]
fn tick_fields_are_json_reals() {
    let ticks = AxisTicks::new(0.0, 10.0, 1.0).to_object();

    assert!(ticks["max"].is_f64());
    assert!(ticks["min"].is_f64());
    assert_eq!(ticks["max"], json!(10.0));
    assert_ne!(ticks["max"], json!(10));
}

#[test]
fn axis_always_emits_display_type_weight() {
    let object = Axis::new(AxisType::Category).with_weight(2).to_object();

    assert_eq!(object["display"], true);
    assert_eq!(object["type"], "category");
    assert_eq!(object["weight"], 2);
    for key in ["ticks", "scaleLabel", "stacked", "id", "time"] {
        assert!(!object.contains_key(key), "{key} should be omitted");
    }
}

#[test]
fn scale_label_requires_text() {
    let hidden = Axis::default()
        .with_scale_label(ScaleLabel::default())
        .to_object();
    let shown = Axis::default()
        .with_scale_label(ScaleLabel::new("Price").with_display(false))
        .to_object();

    assert!(!hidden.contains_key("scaleLabel"));
    assert_eq!(
        shown["scaleLabel"],
        json!({"display": false, "labelString": "Price"})
    );
}

#[test]
fn stacked_id_and_time_are_emitted_when_set() {
    let object = Axis::new(AxisType::Time)
        .with_id("x-time")
        .with_stacked(true)
        .with_display(false)
        .with_time(Options::create_time(TimeUnit::Day, "MMM D"))
        .to_object();

    assert_eq!(object["display"], false);
    assert_eq!(object["id"], "x-time");
    assert_eq!(object["stacked"], true);
    assert_eq!(
        object["time"],
        json!({"unit": "day", "displayFormats": {"day": "MMM D"}})
    );
}

#[test]
fn scales_omit_empty_axis_lists() {
    assert!(Scales::new().to_object().is_empty());

    let only_y = Scales::new()
        .with_y_axis(Axis::new(AxisType::Logarithmic))
        .to_object();
    assert!(!only_y.contains_key("xAxes"));
    assert_eq!(only_y["yAxes"].as_array().map(Vec::len), Some(1));
}

#[test]
fn scales_keep_axis_order() {
    let mut scales = Scales::new();
    scales
        .push_x_axis(Axis::default().with_id("a"))
        .push_x_axis(Axis::default().with_id("b"));

    let object = scales.to_object();
    let ids: Vec<&str> = object["xAxes"]
        .as_array()
        .expect("xAxes array")
        .iter()
        .filter_map(|axis| axis["id"].as_str())
        .collect();

    assert_eq!(ids, vec!["a", "b"]);
    assert_eq!(scales.x_axes().len(), 2);
    assert!(scales.y_axes().is_empty());
}
