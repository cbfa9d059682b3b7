//! Reads the `{ chart, tooltip }` context the host passes to its external
//! tooltip callback

use js_sys::Reflect;
use serde::de::DeserializeOwned;
use tooltip_shared::{TooltipError, TooltipModel, TooltipResult, Visibility};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlCanvasElement;

/// The parts of the host context the overlay needs
pub struct HostContext {
    pub canvas: HtmlCanvasElement,
    pub tooltip: TooltipModel,
}

impl HostContext {
    pub fn read(context: &JsValue) -> TooltipResult<Self> {
        let chart = Reflect::get(context, &JsValue::from_str("chart"))?;
        let canvas = chart_canvas(&chart)?;

        let tooltip = Reflect::get(context, &JsValue::from_str("tooltip"))?;

        // Hidden events only need the opacity
        let visibility: Visibility = from_host(&tooltip)?;
        let tooltip = if visibility.is_hidden() {
            TooltipModel::default()
        } else {
            from_host(&tooltip)?
        };

        Ok(Self { canvas, tooltip })
    }
}

fn from_host<T: DeserializeOwned>(value: &JsValue) -> TooltipResult<T> {
    serde_wasm_bindgen::from_value(value.clone()).map_err(|e| TooltipError::InvalidContext {
        message: e.to_string(),
    })
}

/// The drawing surface of a chart handle
pub fn chart_canvas(chart: &JsValue) -> TooltipResult<HtmlCanvasElement> {
    if chart.is_undefined() || chart.is_null() {
        return Err(TooltipError::MissingCanvas);
    }

    Reflect::get(chart, &JsValue::from_str("canvas"))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| TooltipError::MissingCanvas)
}
