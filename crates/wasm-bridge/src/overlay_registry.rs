//! Per-container overlay registry
//! Replaces "first div in the container" lookup with an explicit mapping from
//! a chart's container element to the overlay this crate created there

use js_sys::{Object, WeakMap};
use tooltip_shared::{map_tooltip_error, style, TooltipError, TooltipResult};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement, HtmlElement, HtmlTableElement};

use crate::renderer::apply_declarations;

/// The overlay owned by one chart container
#[derive(Debug, Clone)]
pub struct Overlay {
    pub root: HtmlElement,
    pub table: HtmlTableElement,
}

impl Overlay {
    /// Builds a detached overlay: the styled root with one empty table
    fn create(document: &Document) -> TooltipResult<Self> {
        let root = create_element::<HtmlElement>(document, "div")?;
        apply_declarations(&root, style::OVERLAY)?;

        let table = create_element::<HtmlTableElement>(document, "table")?;
        apply_declarations(&table, style::TABLE)?;

        map_tooltip_error!(root.append_child(&table), Dom, "Failed to attach table")?;

        Ok(Self { root, table })
    }

    /// Rebuilds the handle from a registered root
    fn from_root(root: HtmlElement) -> TooltipResult<Self> {
        let table = root
            .first_element_child()
            .and_then(|child| child.dyn_into::<HtmlTableElement>().ok())
            .ok_or_else(|| TooltipError::Dom {
                message: "Overlay lost its table".to_string(),
            })?;

        Ok(Self { root, table })
    }
}

// Weakly keyed so a removed container takes its overlay with it
thread_local! {
    static OVERLAYS: WeakMap = WeakMap::new();
}

/// Finds or lazily creates the overlay for a chart container
pub struct OverlayRegistry;

impl OverlayRegistry {
    /// Return the overlay for the canvas' container, creating and appending
    /// it on first use
    pub fn get_or_create(canvas: &HtmlCanvasElement) -> TooltipResult<Overlay> {
        let container = canvas
            .parent_element()
            .ok_or(TooltipError::DetachedCanvas)?;

        if let Some(overlay) = Self::lookup(&container)? {
            return Ok(overlay);
        }

        let document = canvas.owner_document().ok_or(TooltipError::DetachedCanvas)?;
        let overlay = Overlay::create(&document)?;
        map_tooltip_error!(
            container.append_child(&overlay.root),
            Dom,
            "Failed to attach overlay"
        )?;

        OVERLAYS.with(|overlays| {
            overlays.set(container_key(&container), &overlay.root);
        });
        log::debug!("Created tooltip overlay in <{}>", container.tag_name());

        Ok(overlay)
    }

    /// The overlay already registered for a container, if any
    pub fn lookup(container: &Element) -> TooltipResult<Option<Overlay>> {
        let root = OVERLAYS.with(|overlays| overlays.get(container_key(container)));
        if root.is_undefined() {
            return Ok(None);
        }

        let root = root.dyn_into::<HtmlElement>().map_err(|_| TooltipError::Dom {
            message: "Registered overlay is not an element".to_string(),
        })?;
        Overlay::from_root(root).map(Some)
    }

    pub fn contains(container: &Element) -> bool {
        OVERLAYS.with(|overlays| overlays.has(container_key(container)))
    }
}

fn container_key(container: &Element) -> &Object {
    container.as_ref()
}

/// Create an element and cast it to its concrete interface
pub(crate) fn create_element<T: JsCast>(document: &Document, tag: &str) -> TooltipResult<T> {
    map_tooltip_error!(document.create_element(tag), Dom, "Failed to create element")?
        .dyn_into::<T>()
        .map_err(|_| TooltipError::Dom {
            message: format!("<{tag}> has an unexpected interface"),
        })
}
