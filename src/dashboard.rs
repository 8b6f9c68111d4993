use std::fmt::Write;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::Router;

use crate::chart::ChartSpec;

pub const PAGE_TITLE: &str = "Medical Appointment No-Show Dashboard";

/// One dashboard tab: a selectable label, a heading above the chart,
/// and the chart itself.
#[derive(Debug, Clone)]
pub struct TabSpec {
    pub label: String,
    pub heading: String,
    pub chart: ChartSpec,
}

impl TabSpec {
    pub fn new(label: &str, heading: &str, chart: ChartSpec) -> Self {
        Self {
            label: label.to_string(),
            heading: heading.to_string(),
            chart,
        }
    }
}

/// Builds the complete static page: title, tab bar, one Plotly figure
/// per tab. The page is assembled once at startup and never changes.
pub fn render_page(tabs: &[TabSpec]) -> String {
    let mut buttons = String::new();
    let mut panels = String::new();
    let mut plots = String::new();

    for (index, tab) in tabs.iter().enumerate() {
        let active = if index == 0 { " active" } else { "" };
        let _ = write!(
            buttons,
            r#"<button class="tab-button{active}" onclick="showTab({index})">{}</button>"#,
            tab.label
        );
        let display = if index == 0 { "block" } else { "none" };
        let _ = write!(
            panels,
            r#"<div class="tab-panel" id="panel-{index}" style="display:{display}">
<h3>{}</h3>
<div id="plot-{index}"></div>
</div>"#,
            tab.heading
        );
        let _ = writeln!(
            plots,
            "Plotly.newPlot('plot-{index}', figures[{index}].data, figures[{index}].layout);"
        );
    }

    let figures: Vec<serde_json::Value> = tabs.iter().map(|tab| tab.chart.to_plotly()).collect();
    let figures_json =
        serde_json::to_string(&figures).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{PAGE_TITLE}</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
<style>
body {{ font-family: sans-serif; margin: 0; }}
h1, h3 {{ text-align: center; }}
.tab-bar {{ display: flex; border-bottom: 1px solid #ccc; }}
.tab-button {{ flex: 1; padding: 12px; border: none; background: #f5f5f5; cursor: pointer; }}
.tab-button.active {{ background: #fff; border-bottom: 2px solid #1f77b4; font-weight: bold; }}
.tab-panel {{ padding: 20px; }}
</style>
</head>
<body>
<h1>{PAGE_TITLE}</h1>
<div class="tab-bar">{buttons}</div>
{panels}
<script>
const figures = {figures_json};
function showTab(selected) {{
  document.querySelectorAll('.tab-panel').forEach((panel, i) => {{
    panel.style.display = i === selected ? 'block' : 'none';
  }});
  document.querySelectorAll('.tab-button').forEach((button, i) => {{
    button.classList.toggle('active', i === selected);
  }});
}}
{plots}</script>
</body>
</html>"#
    )
}

async fn index(State(page): State<Arc<String>>) -> Html<String> {
    Html(page.as_ref().clone())
}

pub fn router(page: String) -> Router {
    Router::new()
        .route("/", get(index))
        .with_state(Arc::new(page))
}

/// Serves the pre-rendered page until the process is terminated.
pub async fn serve(bind: &str, page: String) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .with_context(|| format!("failed to bind {bind}"))?;
    tracing::info!("dashboard available at http://{}/", listener.local_addr()?);
    axum::serve(listener, router(page)).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::overall_chart;
    use crate::models::ShowCounts;

    fn sample_tabs() -> Vec<TabSpec> {
        let chart = overall_chart(&ShowCounts {
            showed_up: 3,
            no_show: 1,
        });
        vec![
            TabSpec::new("Overall No-show vs Show-up", "No-show vs Show-up Rates", chart.clone()),
            TabSpec::new("Age & Gender Analysis", "Impact of Age & Gender on No-show Rates", chart),
        ]
    }

    #[test]
    fn page_contains_title_tabs_and_figures() {
        let page = render_page(&sample_tabs());
        assert!(page.contains(PAGE_TITLE));
        assert!(page.contains("Overall No-show vs Show-up"));
        assert!(page.contains("Age &amp; Gender Analysis") || page.contains("Age & Gender Analysis"));
        assert!(page.contains("plot-0"));
        assert!(page.contains("plot-1"));
        assert!(page.contains(r#""Showed Up""#));
    }

    #[test]
    fn only_first_panel_is_visible_initially() {
        let page = render_page(&sample_tabs());
        assert!(page.contains(r#"id="panel-0" style="display:block""#));
        assert!(page.contains(r#"id="panel-1" style="display:none""#));
    }

    #[test]
    fn rendering_is_deterministic() {
        let tabs = sample_tabs();
        assert_eq!(render_page(&tabs), render_page(&tabs));
    }
}
