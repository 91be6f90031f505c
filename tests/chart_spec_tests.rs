use chart_embed::chart::{ChartSpec, CircleStyle, ConnectedLineStyle, DashPattern, LegendLocation};
use serde_json::{Value, json};

#[test]
fn demo_spec_carries_the_fixed_dataset_and_styles() {
    let spec = ChartSpec::circles_and_lines();

    assert_eq!(spec.title, "circles and lines");
    assert_eq!(spec.points.len(), 3);
    let xy: Vec<(f64, f64)> = spec.points.iter().map(|p| (p.x, p.y)).collect();
    assert_eq!(xy, vec![(1.0, 3.0), (2.0, 4.0), (3.0, 7.0)]);

    assert_eq!(spec.circle.fill_color, "green");
    assert_eq!(spec.circle.size, 10.0);
    assert_eq!(spec.circle.label, "circle");

    assert_eq!(spec.line.color, "red");
    assert_eq!(spec.line.dash, DashPattern::Dashed);
    assert_eq!(spec.line.label, "line");

    assert_eq!(spec.legend, LegendLocation::TopLeft);
}

#[test]
fn from_xy_zips_equal_length_sequences() {
    let spec = ChartSpec::from_xy(
        "zipped",
        &[1.0, 2.0],
        &[10.0, 20.0],
        CircleStyle {
            fill_color: "blue".to_owned(),
            size: 4.0,
            label: "dots".to_owned(),
        },
        ConnectedLineStyle {
            color: "black".to_owned(),
            dash: DashPattern::Dotted,
            label: "trace".to_owned(),
        },
        LegendLocation::BottomRight,
    )
    .expect("equal-length sequences");

    assert_eq!(spec.points.len(), 2);
    assert_eq!(spec.points[1].x, 2.0);
    assert_eq!(spec.points[1].y, 20.0);
}

#[test]
fn from_xy_rejects_mismatched_sequence_lengths() {
    let result = ChartSpec::from_xy(
        "bad",
        &[1.0, 2.0, 3.0],
        &[1.0],
        ChartSpec::circles_and_lines().circle,
        ChartSpec::circles_and_lines().line,
        LegendLocation::TopLeft,
    );

    let err = result.expect_err("length mismatch must be rejected");
    assert!(
        err.to_string().contains("series length mismatch"),
        "unexpected error: {err}"
    );
}

#[test]
fn lowered_chart_has_two_series_in_declaration_order() {
    let chart = ChartSpec::circles_and_lines().to_echarts();
    let option: Value = serde_json::to_value(&chart).expect("chart options serialize");

    let series = option["series"].as_array().expect("series array");
    assert_eq!(series.len(), 2);
    assert_eq!(series[0]["type"], json!("scatter"));
    assert_eq!(series[1]["type"], json!("line"));

    assert_eq!(series[0]["data"].as_array().expect("scatter data").len(), 3);
    assert_eq!(series[1]["data"].as_array().expect("line data").len(), 3);
    assert_eq!(series[0]["data"][0], json!([1.0, 3.0]));
    assert_eq!(series[0]["data"][2], json!([3.0, 7.0]));
}

#[test]
fn lowered_chart_keeps_series_styling_and_legend_anchor() {
    let chart = ChartSpec::circles_and_lines().to_echarts();
    let option: Value = serde_json::to_value(&chart).expect("chart options serialize");

    let series = option["series"].as_array().expect("series array");
    assert_eq!(series[0]["symbolSize"], json!(10.0));
    assert_eq!(series[0]["itemStyle"]["color"], json!("green"));
    assert_eq!(series[1]["lineStyle"]["color"], json!("red"));
    assert_eq!(series[1]["lineStyle"]["type"], json!("dashed"));

    assert_eq!(option["legend"]["left"], json!("left"));
    assert_eq!(option["legend"]["top"], json!("top"));

    let rendered = serde_json::to_string(&chart).expect("chart options serialize");
    assert!(rendered.contains("circles and lines"));
}
