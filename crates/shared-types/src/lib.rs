//! Shared types for the chart tooltip overlay
//!
//! This crate holds everything that does not touch the DOM: the tooltip
//! context as deserialized from the host charting library, the declarative
//! view built from it, the static styles, the fixed market-mover panel,
//! configuration and errors. The wasm bridge applies the view to the page.

pub mod config;
pub mod errors;
pub mod market_mover;
pub mod style;
pub mod tooltip;
pub mod view;

pub use config::TooltipConfig;
pub use errors::{TooltipError, TooltipResult};
pub use market_mover::MarketMoverPanel;
pub use tooltip::{
    BodyItem, DataPoint, FontSpec, LabelColor, RawPayload, TooltipModel, TooltipOptions,
    Visibility,
};
pub use view::{
    describe, CanvasOffset, Placement, Swatch, TableContent, TooltipView, ValueRow, VisibleTooltip,
};
