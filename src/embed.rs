//! Script/markup fragment pair for embedding a chart into an HTML page.
//!
//! The full-page renderer that ships with the plotting library owns the
//! whole document; here the page shell belongs to a template, so the chart
//! is emitted as two fragments the template can splice in wherever it wants.

use charming::Chart;

use crate::error::ChartResult;

/// Rendered size of the embedded chart container, in CSS pixels.
pub const CHART_WIDTH_PX: u32 = 900;
pub const CHART_HEIGHT_PX: u32 = 500;

/// Script and markup fragments that together embed one chart.
///
/// The markup is a placeholder element; the script initializes the
/// browser-side renderer against that element and applies the chart's
/// option tree. Both reference the same element id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedPair {
    pub script: String,
    pub markup: String,
}

/// Produces the embeddable fragment pair for `chart`.
///
/// The element id is caller-supplied and the option tree is serialized as-is,
/// so the output is deterministic: the same chart and id always yield the
/// same fragments.
pub fn components(chart: &Chart, element_id: &str) -> ChartResult<EmbedPair> {
    let options = serde_json::to_string(chart)?;

    let markup = format!(
        r#"<div id="{element_id}" style="width:{CHART_WIDTH_PX}px;height:{CHART_HEIGHT_PX}px;"></div>"#
    );

    let script = format!(
        "<script>\n\
         (function () {{\n\
           var chart = echarts.init(document.getElementById(\"{element_id}\"));\n\
           chart.setOption({options});\n\
         }})();\n\
         </script>"
    );

    Ok(EmbedPair { script, markup })
}
