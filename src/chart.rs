use serde_json::{json, Value};

use crate::derive::weekday_name;
use crate::models::{AgeGenderRate, ShowCounts, WeekdayRates};

/// One bar series: category labels bound to values. When
/// `color_by_value` is set the bars are shaded on a continuous Reds
/// scale driven by the value itself.
#[derive(Debug, Clone, PartialEq)]
pub struct BarTrace {
    pub name: Option<String>,
    pub x: Vec<String>,
    pub y: Vec<i64>,
    pub color_by_value: bool,
}

/// Declarative bar-chart description, independent of the rendering
/// layer until serialized with [`ChartSpec::to_plotly`].
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub barmode: Option<&'static str>,
    pub traces: Vec<BarTrace>,
}

impl ChartSpec {
    /// Serializes the spec to a Plotly figure object (`data` + `layout`).
    pub fn to_plotly(&self) -> Value {
        let data: Vec<Value> = self
            .traces
            .iter()
            .map(|trace| {
                let mut bar = json!({
                    "type": "bar",
                    "x": trace.x,
                    "y": trace.y,
                });
                if let Some(name) = &trace.name {
                    bar["name"] = json!(name);
                }
                if trace.color_by_value {
                    bar["marker"] = json!({
                        "color": trace.y,
                        "colorscale": "Reds",
                        "showscale": true,
                    });
                }
                bar
            })
            .collect();

        let mut layout = json!({
            "title": { "text": self.title },
            "xaxis": { "title": { "text": self.x_label } },
            "yaxis": { "title": { "text": self.y_label } },
        });
        if let Some(barmode) = self.barmode {
            layout["barmode"] = json!(barmode);
        }

        json!({ "data": data, "layout": layout })
    }
}

/// Chart 1: overall attended vs no-show counts, exactly two bars.
pub fn overall_chart(counts: &ShowCounts) -> ChartSpec {
    ChartSpec {
        title: "No-show vs Show-up Rates".to_string(),
        x_label: "Status".to_string(),
        y_label: "Count".to_string(),
        barmode: None,
        traces: vec![BarTrace {
            name: None,
            x: vec!["Showed Up".to_string(), "No-show".to_string()],
            y: vec![counts.showed_up as i64, counts.no_show as i64],
            color_by_value: false,
        }],
    }
}

/// Chart 2: no-show percentage by age bucket, one grouped trace per
/// gender. Input is already ordered by (bucket, gender).
pub fn age_gender_chart(rates: &[AgeGenderRate]) -> ChartSpec {
    let mut genders: Vec<String> = rates.iter().map(|r| r.gender.clone()).collect();
    genders.sort();
    genders.dedup();

    let traces = genders
        .into_iter()
        .map(|gender| {
            let (x, y) = rates
                .iter()
                .filter(|r| r.gender == gender)
                .map(|r| (r.age_class.label().to_string(), r.no_show_pct))
                .unzip();
            BarTrace {
                name: Some(gender),
                x,
                y,
                color_by_value: false,
            }
        })
        .collect();

    ChartSpec {
        title: "Age and Gender Impact on No-show Rates".to_string(),
        x_label: "Age Class".to_string(),
        y_label: "No-show Rate %".to_string(),
        barmode: Some("group"),
        traces,
    }
}

/// Chart 3: no-show percentage by day of week, bar color scaled by the
/// rate itself.
pub fn weekday_chart(rates: &[WeekdayRates]) -> ChartSpec {
    let (x, y) = rates
        .iter()
        .map(|r| (weekday_name(r.weekday).to_string(), r.no_show_pct))
        .unzip();

    ChartSpec {
        title: "No-show Rate by Day of Week".to_string(),
        x_label: "Day of Week".to_string(),
        y_label: "No-show Rate %".to_string(),
        barmode: None,
        traces: vec![BarTrace {
            name: None,
            x,
            y,
            color_by_value: true,
        }],
    }
}
