use chartjs_rs::api::{
    Axis, AxisType, CHART_CONFIG_JSON_SCHEMA_V1, Chart, ChartConfigJsonContractV1, ChartData,
    ChartType, DataSet, Options, Scales, TimeUnit,
};
use chartjs_rs::core::{BorderJoinStyle, Color, RealDataPoint, SteppedLine};
use chartjs_rs::ChartError;

fn sample_chart() -> Chart {
    let scales = Scales::new().with_x_axis(
        Axis::new(AxisType::Time)
            .with_id("time")
            .with_time(Options::create_time(TimeUnit::Minute, "HH:mm")),
    );
    let dataset = DataSet::new()
        .with_label("temperature")
        .with_background_color(Color::standard(5).with_alpha(64))
        .with_border_dash([5, 5])
        .with_hover_border_width(2.0)
        .with_hover_border_join_style(BorderJoinStyle::Bevel)
        .with_stepped_line(SteppedLine::After)
        .with_x_axis_id("time")
        .with_point(&RealDataPoint::new(1.5, 20.25));

    Chart::new(ChartType::Line)
        .with_options(Options::new().with_scales(&scales))
        .with_data(
            ChartData::new()
                .with_label("12:00")
                .with_dataset(dataset),
        )
}

#[test]
fn chart_config_json_roundtrip() {
    let chart = sample_chart();

    let json = chart
        .to_config_json_pretty()
        .expect("config should serialize to json");
    let restored = Chart::from_config_json_str(&json).expect("config should deserialize");

    assert_eq!(restored, chart);
    assert_eq!(
        restored.to_json_string().expect("restored json"),
        chart.to_json_string().expect("original json")
    );
}

#[test]
fn chart_config_contract_carries_schema_version() {
    let json = sample_chart()
        .to_config_json_pretty()
        .expect("config should serialize");
    let payload: ChartConfigJsonContractV1 =
        serde_json::from_str(&json).expect("contract should deserialize");

    assert_eq!(payload.schema_version, CHART_CONFIG_JSON_SCHEMA_V1);
    assert_eq!(payload.chart, sample_chart());
}

#[test]
fn bare_chart_payload_is_accepted() {
    let bare = serde_json::to_string(&sample_chart()).expect("bare chart json");

    let restored = Chart::from_config_json_str(&bare).expect("bare payload should load");

    assert_eq!(restored, sample_chart());
}

#[test]
fn missing_fields_fall_back_to_defaults() {
    let restored = Chart::from_config_json_str(r#"{"chart_type": "pie"}"#)
        .expect("partial payload should load");

    assert_eq!(restored.chart_type(), ChartType::Pie);
    assert!(restored.options().is_empty());
    assert!(restored.data().datasets().is_empty());
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let input = r#"{"schema_version": 7, "chart": {}}"#;

    let err = Chart::from_config_json_str(input).expect_err("version 7 is unknown");

    assert!(matches!(err, ChartError::InvalidData(ref message) if message.contains("version: 7")));
}

#[test]
fn malformed_json_is_rejected() {
    let err = Chart::from_config_json_str("{not json").expect_err("invalid json");

    assert!(err.to_string().starts_with("invalid data: failed to parse chart config json"));
}

#[test]
fn non_finite_dataset_state_is_rejected_before_persisting() {
    let chart = Chart::new(ChartType::Line).with_data(
        ChartData::new().with_dataset(DataSet::new().with_border_width(f64::INFINITY)),
    );

    let err = chart
        .to_config_json_pretty()
        .expect_err("infinite border width cannot be restored");

    assert!(matches!(err, ChartError::InvalidData(ref message) if message.contains("border_width")));
}

#[test]
fn non_finite_optional_hover_width_is_rejected() {
    let chart = Chart::default().with_data(
        ChartData::new()
            .with_dataset(DataSet::new())
            .with_dataset(DataSet::new().with_hover_border_width(f64::NAN)),
    );

    assert!(chart.to_config_json_pretty().is_err());
    assert!(
        DataSet::new()
            .with_line_tension(f64::NEG_INFINITY)
            .validate()
            .is_err()
    );
    assert!(DataSet::new().validate().is_ok());
}

#[test]
fn non_finite_values_inside_options_still_round_trip() {
    let chart = Chart::default().with_options(Options::new().with_property("ratio", f64::NAN));

    let json = chart
        .to_config_json_pretty()
        .expect("options hold json values, so NaN is already null");
    let restored = Chart::from_config_json_str(&json).expect("restore");

    assert_eq!(restored, chart);
}
