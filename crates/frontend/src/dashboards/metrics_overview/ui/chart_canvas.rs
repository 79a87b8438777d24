use crate::dashboards::metrics_overview::charts::{chart_config, ChartModel};
use js_sys::{Array, Function, Reflect};
use leptos::html;
use leptos::prelude::*;
use serde::Serialize;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

fn to_js<T: Serialize + ?Sized>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::json_compatible())
        .map_err(|err| JsValue::from_str(&err.to_string()))
}

/// Один экземпляр Chart.js на один canvas.
///
/// Создаётся на первой модели, дальше обновляется на месте.
/// Одинаковые модели пропускаются, чтобы опрос не перезапускал анимацию.
pub struct ChartAdapter {
    chart: JsValue,
    applied: ChartModel,
}

impl ChartAdapter {
    pub fn create(canvas: &HtmlCanvasElement, model: &ChartModel) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("window not available"))?;
        let constructor = Reflect::get(&window, &JsValue::from_str("Chart"))?;
        if !constructor.is_function() {
            return Err(JsValue::from_str("Chart.js is not loaded"));
        }
        let constructor: Function = constructor.dyn_into()?;

        let config = to_js(&chart_config(model))?;
        let target: &JsValue = canvas.as_ref();
        let args = Array::of2(target, &config);
        let chart = Reflect::construct(&constructor, &args)?;

        Ok(Self {
            chart,
            applied: model.clone(),
        })
    }

    /// Overwrite `data.labels` / `data.datasets` and redraw when the model changed
    pub fn apply(&mut self, model: &ChartModel) -> Result<bool, JsValue> {
        if &self.applied == model {
            return Ok(false);
        }

        let data = Reflect::get(&self.chart, &JsValue::from_str("data"))?;
        Reflect::set(&data, &JsValue::from_str("labels"), &to_js(&model.labels)?)?;
        Reflect::set(&data, &JsValue::from_str("datasets"), &to_js(&model.datasets)?)?;
        self.call("update")?;

        self.applied = model.clone();
        Ok(true)
    }

    pub fn destroy(&self) -> Result<(), JsValue> {
        self.call("destroy")
    }

    fn call(&self, method: &str) -> Result<(), JsValue> {
        let func: Function = Reflect::get(&self.chart, &JsValue::from_str(method))?.dyn_into()?;
        func.call0(&self.chart)?;
        Ok(())
    }
}

/// Карточка с заголовком и canvas, следящим за `model`
#[component]
pub fn ChartCanvas(
    /// DOM id of the canvas
    id: &'static str,
    title: &'static str,
    #[prop(into)] model: Signal<ChartModel>,
) -> impl IntoView {
    let canvas_ref = NodeRef::<html::Canvas>::new();
    // Объекты Chart.js не Send
    let adapter = StoredValue::new_local(None::<ChartAdapter>);

    Effect::new(move |_| {
        let current = model.get();
        let Some(canvas) = canvas_ref.get() else {
            return;
        };

        adapter.update_value(|slot| {
            let result = if let Some(chart) = slot.as_mut() {
                chart.apply(&current).map(|_| ())
            } else {
                ChartAdapter::create(&canvas, &current).map(|chart| *slot = Some(chart))
            };
            if let Err(err) = result {
                log::error!("Failed to render chart {}: {:?}", id, err);
            }
        });
    });

    on_cleanup(move || {
        adapter.update_value(|slot| {
            if let Some(chart) = slot.take() {
                if let Err(err) = chart.destroy() {
                    log::warn!("Failed to destroy chart {}: {:?}", id, err);
                }
            }
        });
    });

    view! {
        <div class="chart-card">
            <h3 class="chart-card__title">{title}</h3>
            <canvas id=id node_ref=canvas_ref></canvas>
        </div>
    }
}
