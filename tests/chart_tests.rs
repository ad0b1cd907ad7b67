use chartjs_rs::api::{
    Axis, AxisTicks, AxisType, Chart, ChartData, ChartType, DataSet, Legend, Options, Scales,
    Title,
};
use chartjs_rs::core::{Color, IntegerDataPoint, ToJsonObject};
use serde_json::json;

fn line_chart() -> Chart {
    let dataset = DataSet::new()
        .with_label("visits")
        .with_border_color(Color::standard(3))
        .with_value(10)
        .with_value(12);
    Chart::new(ChartType::Line).with_data(
        ChartData::new()
            .with_labels(["Mon", "Tue"])
            .with_dataset(dataset),
    )
}

#[test]
fn line_chart_exports_type_options_and_data() {
    let object = line_chart().to_object();

    let keys: Vec<&str> = object.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["type", "options", "data"]);
    assert_eq!(object["type"], "line");
    assert_eq!(object["options"], json!({}));
    assert_eq!(object["data"]["labels"], json!(["Mon", "Tue"]));
    assert_eq!(object["data"]["datasets"].as_array().map(Vec::len), Some(1));
    assert_eq!(object["data"]["datasets"][0]["data"], json!([10, 12]));
    assert_eq!(
        object["data"]["datasets"][0]["borderColor"],
        "rgba(52,61,104,1.00)"
    );
}

#[test]
fn default_chart_is_an_empty_line_chart() {
    let chart = Chart::default();

    assert_eq!(chart.chart_type(), ChartType::Line);
    assert_eq!(
        chart.to_value(),
        json!({"type": "line", "options": {}, "data": {"labels": [], "datasets": []}})
    );
}

#[test]
fn mutable_accessors_update_the_export() {
    let mut chart = Chart::new(ChartType::Bar);
    chart.set_type(ChartType::Scatter);
    chart
        .data_mut()
        .push_label("first")
        .push_dataset(DataSet::new().with_point(&IntegerDataPoint::new(1, 1)));
    chart.data_mut().labels_mut().push("second".to_owned());
    chart
        .options_mut()
        .set_title(&Title::new("Scatter"))
        .set_legend(&Legend::new().with_display(false));

    let object = chart.to_object();

    assert_eq!(object["type"], "scatter");
    assert_eq!(object["data"]["labels"], json!(["first", "second"]));
    assert_eq!(object["options"]["title"]["text"], "Scatter");
    assert_eq!(object["options"]["legend"]["display"], false);
    assert_eq!(chart.data().datasets().len(), 1);
}

#[test]
fn options_export_is_embedded_verbatim() {
    let scales = Scales::new()
        .with_x_axis(Axis::new(AxisType::Category))
        .with_y_axis(Axis::default().with_ticks(AxisTicks::new(0.0, 100.0, 10.0)));
    let options = Options::new()
        .with_property("responsive", true)
        .with_scales(&scales);

    let chart = line_chart().with_type(ChartType::Bar).with_options(options.clone());
    let object = chart.to_object();

    assert_eq!(object["type"], "bar");
    assert_eq!(object["options"], options.to_value());
    assert_eq!(chart.options(), &options);
}

#[test]
fn json_text_export_parses_back_to_the_object() {
    let chart = line_chart();

    let compact = chart.to_json_string().expect("compact json");
    let pretty = chart.to_json_pretty().expect("pretty json");
    let from_compact: serde_json::Value = serde_json::from_str(&compact).expect("parse compact");
    let from_pretty: serde_json::Value = serde_json::from_str(&pretty).expect("parse pretty");

    assert!(compact.starts_with(r#"{"type":"line","options":{}"#));
    assert_eq!(from_compact, chart.to_value());
    assert_eq!(from_pretty, from_compact);
}
