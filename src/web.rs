//! HTTP surface: a single page route rendering the demo chart.

use askama_axum::Template;
use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use crate::chart::ChartSpec;
use crate::embed::{EmbedPair, components};
use crate::error::ChartError;

/// DOM id shared by the markup and script fragments.
const CHART_ELEMENT_ID: &str = "chart";

/// Context for the `hello.html` page template.
#[derive(Template)]
#[template(path = "hello.html")]
struct HelloTemplate {
    title: String,
    plot_script: String,
    plot_div: String,
}

/// Builds the application route table: `GET /` and nothing else.
///
/// Non-GET methods on `/` answer 404 rather than the framework's default
/// 405, so the route's method fallback is wired explicitly.
#[must_use]
pub fn router() -> Router {
    Router::new().route("/", get(hello).fallback(unsupported_method))
}

async fn hello() -> Result<HelloTemplate, PageError> {
    let spec = ChartSpec::circles_and_lines();
    let EmbedPair { script, markup } = components(&spec.to_echarts(), CHART_ELEMENT_ID)?;

    Ok(HelloTemplate {
        title: "hello".to_owned(),
        plot_script: script,
        plot_div: markup,
    })
}

async fn unsupported_method() -> StatusCode {
    StatusCode::NOT_FOUND
}

/// Chart construction and embedding failures surface as a plain 500; the
/// cause only goes to the log, not to the client.
struct PageError(ChartError);

impl From<ChartError> for PageError {
    fn from(err: ChartError) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self.0, "failed to render chart page");
        StatusCode::INTERNAL_SERVER_ERROR.into_response()
    }
}
