//! WASM bridge for the chart tooltip overlay
//! Exposes the external tooltip callback the host charting library invokes
//! on every tooltip-relevant pointer event

use std::cell::RefCell;

use tooltip_shared::{describe, CanvasOffset, TooltipConfig, TooltipError, TooltipResult};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

pub mod context;
pub mod overlay_registry;
pub mod renderer;

use context::{chart_canvas, HostContext};
use overlay_registry::OverlayRegistry;
use renderer::TooltipRenderer;

thread_local! {
    static CONFIG: RefCell<TooltipConfig> = RefCell::new(TooltipConfig::default());
}

/// Install the panic hook and console logger once
fn init_logging() {
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        #[cfg(target_arch = "wasm32")]
        {
            std::panic::set_hook(Box::new(console_error_panic_hook::hook));
            let level = CONFIG
                .with(|config| config.borrow().level())
                .unwrap_or(log::Level::Info);
            // Another module may already own the logger
            let _ = console_log::init_with_level(level);
        }
    });
}

/// Module start hook
#[wasm_bindgen(start)]
pub fn start() {
    init_logging();
}

/// External tooltip callback: `tooltip: { enabled: false, external: externalTooltipHandler }`
#[wasm_bindgen(js_name = externalTooltipHandler)]
pub fn external_tooltip_handler(context: JsValue) -> Result<(), JsValue> {
    init_logging();

    render_tooltip(&context).map_err(|e| {
        log::error!("Tooltip render failed: {e}");
        JsValue::from(e)
    })
}

/// Render one tooltip event into the chart's overlay
pub fn render_tooltip(context: &JsValue) -> TooltipResult<()> {
    let HostContext { canvas, tooltip } = HostContext::read(context)?;

    let overlay = OverlayRegistry::get_or_create(&canvas)?;
    let document = canvas.owner_document().ok_or(TooltipError::DetachedCanvas)?;

    let offset = CanvasOffset::new(canvas.offset_left() as f64, canvas.offset_top() as f64);
    let view = CONFIG.with(|config| describe(&tooltip, offset, &config.borrow()))?;
    log::trace!("Applying tooltip view: {view:?}");

    TooltipRenderer::new(&document).apply(&overlay, &view)
}

/// The overlay element for a chart, created on first use
#[wasm_bindgen(js_name = getOrCreateTooltip)]
pub fn get_or_create_tooltip(chart: JsValue) -> Result<HtmlElement, JsValue> {
    init_logging();

    let canvas = chart_canvas(&chart)?;
    let overlay = OverlayRegistry::get_or_create(&canvas)?;
    Ok(overlay.root)
}

/// Replace the active configuration from JSON
#[wasm_bindgen(js_name = configureTooltips)]
pub fn configure_tooltips(config_json: &str) -> Result<(), JsValue> {
    init_logging();

    let config = TooltipConfig::from_json(config_json).map_err(|e| {
        log::error!("Rejected tooltip configuration: {e}");
        JsValue::from(e)
    })?;

    if let Ok(level) = config.level() {
        log::set_max_level(level.to_level_filter());
    }
    CONFIG.with(|current| *current.borrow_mut() = config);
    log::info!("Tooltip configuration updated");

    Ok(())
}

/// The active configuration as JSON
#[wasm_bindgen(js_name = tooltipConfig)]
pub fn tooltip_config() -> String {
    CONFIG.with(|config| config.borrow().to_json())
}
