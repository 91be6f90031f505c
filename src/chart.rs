//! In-memory chart description and its lowering to the ECharts option tree.

use charming::Chart;
use charming::component::{Axis, Legend, Title};
use charming::element::{AxisType, ItemStyle, LineStyle, LineStyleType, Symbol};
use charming::series::{Line, Scatter};
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Dash preset for the connecting-line series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DashPattern {
    Solid,
    #[default]
    Dashed,
    Dotted,
}

impl DashPattern {
    pub(crate) fn as_line_type(self) -> LineStyleType {
        match self {
            Self::Solid => LineStyleType::Solid,
            Self::Dashed => LineStyleType::Dashed,
            Self::Dotted => LineStyleType::Dotted,
        }
    }
}

/// Corner the legend is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LegendLocation {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl LegendLocation {
    /// Horizontal and vertical anchor keywords understood by the renderer.
    pub(crate) fn anchors(self) -> (&'static str, &'static str) {
        match self {
            Self::TopLeft => ("left", "top"),
            Self::TopRight => ("right", "top"),
            Self::BottomLeft => ("left", "bottom"),
            Self::BottomRight => ("right", "bottom"),
        }
    }
}

/// Styling for the circle-marker series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CircleStyle {
    pub fill_color: String,
    pub size: f64,
    pub label: String,
}

/// Styling for the series connecting the same points with a line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectedLineStyle {
    pub color: String,
    pub dash: DashPattern,
    pub label: String,
}

/// Complete description of a chart prior to rendering: title, data and
/// per-series styling plus legend placement. Built fresh per request and
/// discarded once the embeddable fragments are extracted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSpec {
    pub title: String,
    pub points: Vec<DataPoint>,
    pub circle: CircleStyle,
    pub line: ConnectedLineStyle,
    pub legend: LegendLocation,
}

impl ChartSpec {
    /// Zips two coordinate sequences into a spec.
    ///
    /// Both series draw the same points, so a single length check at the
    /// boundary covers every consumer downstream.
    pub fn from_xy(
        title: impl Into<String>,
        xs: &[f64],
        ys: &[f64],
        circle: CircleStyle,
        line: ConnectedLineStyle,
        legend: LegendLocation,
    ) -> ChartResult<Self> {
        if xs.len() != ys.len() {
            return Err(ChartError::SeriesLengthMismatch {
                xs: xs.len(),
                ys: ys.len(),
            });
        }

        let points = xs
            .iter()
            .zip(ys.iter())
            .map(|(&x, &y)| DataPoint::new(x, y))
            .collect();

        Ok(Self {
            title: title.into(),
            points,
            circle,
            line,
            legend,
        })
    }

    /// The fixed demo figure: green size-10 circles and a red dashed line
    /// over `x = [1, 2, 3]`, `y = [3, 4, 7]`, legend in the top-left corner.
    #[must_use]
    pub fn circles_and_lines() -> Self {
        Self {
            title: "circles and lines".to_owned(),
            points: vec![
                DataPoint::new(1.0, 3.0),
                DataPoint::new(2.0, 4.0),
                DataPoint::new(3.0, 7.0),
            ],
            circle: CircleStyle {
                fill_color: "green".to_owned(),
                size: 10.0,
                label: "circle".to_owned(),
            },
            line: ConnectedLineStyle {
                color: "red".to_owned(),
                dash: DashPattern::Dashed,
                label: "line".to_owned(),
            },
            legend: LegendLocation::TopLeft,
        }
    }

    /// Lowers the spec to a renderer chart: value axes, a scatter series for
    /// the markers and a symbol-less line series over the same data.
    #[must_use]
    pub fn to_echarts(&self) -> Chart {
        let data: Vec<Vec<f64>> = self.points.iter().map(|p| vec![p.x, p.y]).collect();
        let (left, top) = self.legend.anchors();

        Chart::new()
            .title(Title::new().text(self.title.as_str()))
            .legend(Legend::new().left(left).top(top))
            .x_axis(Axis::new().type_(AxisType::Value))
            .y_axis(Axis::new().type_(AxisType::Value))
            .series(
                Scatter::new()
                    .name(self.circle.label.as_str())
                    .symbol(Symbol::Circle)
                    .symbol_size(self.circle.size)
                    .item_style(ItemStyle::new().color(self.circle.fill_color.as_str()))
                    .data(data.clone()),
            )
            .series(
                Line::new()
                    .name(self.line.label.as_str())
                    .symbol(Symbol::None)
                    .line_style(
                        LineStyle::new()
                            .color(self.line.color.as_str())
                            .type_(self.line.dash.as_line_type()),
                    )
                    .data(data),
            )
    }
}
