use leptos::*;
use serde_json::json;

use crate::charts::{hour_labels, hourly_counts, stage_series, weekday_counts, WEEKDAY_LABELS};

use super::dashboard::AreaState;

const HOURLY_CANVAS_ID: &str = "hourly-chart";
const WEEKDAY_CANVAS_ID: &str = "weekday-chart";
const STAGE_CANVAS_ID: &str = "stage-chart";

/// Charts card: three Chart.js charts over the selected area's schedule.
/// The canvases are always mounted so chart replacement never races the
/// DOM; a note covers them while the national scope is active.
#[component]
pub fn ChartsCard(area_state: ReadSignal<Option<AreaState>>) -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let manager = Rc::new(RefCell::new(ChartManager::default()));

        create_effect(move |_| {
            if let Some(AreaState::Loaded(response)) = area_state.get() {
                let mut manager = manager.borrow_mut();
                manager.replace_hourly(&hourly_bar_config(&hourly_counts(&response.schedule)));
                manager
                    .replace_weekday(&weekday_doughnut_config(&weekday_counts(&response.schedule)));
                if let Some(stats) = &response.stats {
                    let (labels, counts) = stage_series(&stats.stages_distribution);
                    manager.replace_stages(&stage_line_config(&labels, &counts));
                }
            }
        });
    }

    let has_area = move || matches!(area_state.get(), Some(AreaState::Loaded(_)));

    view! {
        <div class="card chart-card">
            <h3>"Schedule Charts"</h3>
            <Show when=move || !has_area()>
                <p class="placeholder-text">"Select an area to see its schedule breakdown"</p>
            </Show>
            <div class="chart-grid" class:hidden=move || !has_area()>
                <canvas id=HOURLY_CANVAS_ID></canvas>
                <canvas id=WEEKDAY_CANVAS_ID></canvas>
                <canvas id=STAGE_CANVAS_ID></canvas>
            </div>
        </div>
    }
}

/// Bar chart of loadshedding occurrences by start hour
fn hourly_bar_config(hours: &[u32; 24]) -> serde_json::Value {
    json!({
        "type": "bar",
        "data": {
            "labels": hour_labels(),
            "datasets": [{
                "label": "Loadshedding Occurrences by Hour",
                "data": hours.to_vec(),
                "backgroundColor": "rgba(75, 192, 192, 0.6)",
                "borderColor": "rgba(75, 192, 192, 1)",
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "scales": {
                "y": { "beginAtZero": true, "title": { "display": true, "text": "Occurrences" } },
                "x": { "title": { "display": true, "text": "Hour of Day" } }
            }
        }
    })
}

/// Doughnut chart of occurrences by weekday
fn weekday_doughnut_config(days: &[u32; 7]) -> serde_json::Value {
    json!({
        "type": "doughnut",
        "data": {
            "labels": WEEKDAY_LABELS.to_vec(),
            "datasets": [{
                "label": "Loadshedding by Day of Week",
                "data": days.to_vec(),
                "backgroundColor": [
                    "rgba(255, 99, 132, 0.6)",
                    "rgba(54, 162, 235, 0.6)",
                    "rgba(255, 206, 86, 0.6)",
                    "rgba(75, 192, 192, 0.6)",
                    "rgba(153, 102, 255, 0.6)",
                    "rgba(255, 159, 64, 0.6)",
                    "rgba(199, 199, 199, 0.6)"
                ],
                "borderWidth": 1
            }]
        },
        "options": {
            "responsive": true,
            "plugins": { "legend": { "position": "right" } }
        }
    })
}

/// Line chart of occurrences per stage
fn stage_line_config(labels: &[String], counts: &[u32]) -> serde_json::Value {
    json!({
        "type": "line",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Stage Occurrence",
                "data": counts,
                "fill": false,
                "borderColor": "rgb(75, 192, 192)",
                "tension": 0.1
            }]
        },
        "options": {
            "responsive": true,
            "scales": {
                "y": { "beginAtZero": true, "title": { "display": true, "text": "Occurrences" } },
                "x": { "title": { "display": true, "text": "Loadshedding Stage" } }
            }
        }
    })
}

/// One owned handle per chart. Refreshing a chart goes through an explicit
/// replace: destroy the old instance, build the new one from its config.
#[cfg(target_arch = "wasm32")]
#[derive(Default)]
struct ChartManager {
    hourly: Option<bindings::Chart>,
    weekday: Option<bindings::Chart>,
    stages: Option<bindings::Chart>,
}

#[cfg(target_arch = "wasm32")]
impl ChartManager {
    fn replace_hourly(&mut self, config: &serde_json::Value) {
        Self::replace(&mut self.hourly, HOURLY_CANVAS_ID, config);
    }

    fn replace_weekday(&mut self, config: &serde_json::Value) {
        Self::replace(&mut self.weekday, WEEKDAY_CANVAS_ID, config);
    }

    fn replace_stages(&mut self, config: &serde_json::Value) {
        Self::replace(&mut self.stages, STAGE_CANVAS_ID, config);
    }

    fn replace(slot: &mut Option<bindings::Chart>, canvas_id: &str, config: &serde_json::Value) {
        if let Some(old) = slot.take() {
            old.destroy();
        }

        let Some(canvas) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(canvas_id))
        else {
            log::error!("Chart canvas #{} not found", canvas_id);
            return;
        };

        match js_sys::JSON::parse(&config.to_string()) {
            Ok(config) => *slot = Some(bindings::Chart::new(&canvas.into(), &config)),
            Err(e) => log::error!("Invalid chart config for #{}: {:?}", canvas_id, e),
        }
    }
}

/// Minimal bindings to the globally loaded Chart.js
#[cfg(target_arch = "wasm32")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type Chart;

        #[wasm_bindgen(constructor, js_class = "Chart")]
        pub fn new(canvas: &JsValue, config: &JsValue) -> Chart;

        #[wasm_bindgen(method)]
        pub fn destroy(this: &Chart);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hourly_bar_config_shape() {
        let mut hours = [0u32; 24];
        hours[18] = 3;

        let config = hourly_bar_config(&hours);
        assert_eq!(config["type"], "bar");
        assert_eq!(config["data"]["labels"].as_array().unwrap().len(), 24);
        assert_eq!(config["data"]["datasets"][0]["data"][18], 3);
    }

    #[test]
    fn test_weekday_doughnut_config_shape() {
        let config = weekday_doughnut_config(&[1, 0, 0, 2, 0, 0, 0]);
        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["data"]["labels"][0], "Sun");
        assert_eq!(config["data"]["datasets"][0]["data"][3], 2);
    }

    #[test]
    fn test_stage_line_config_shape() {
        let labels = vec!["2".to_string(), "4".to_string()];
        let config = stage_line_config(&labels, &[10, 6]);
        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"][1], "4");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 10);
    }
}
