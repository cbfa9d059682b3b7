//! Declarative description of what the overlay should show
//!
//! `describe` is a pure function of the tooltip context. Applying the result
//! to the DOM is the bridge's job; table content is always applied as a full
//! replace, never merged with what was there before.

use crate::config::TooltipConfig;
use crate::errors::{TooltipError, TooltipResult};
use crate::market_mover::MarketMoverPanel;
use crate::style::px;
use crate::tooltip::{BodyItem, TooltipModel};

/// Position of the chart canvas inside its container, in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CanvasOffset {
    pub left: f64,
    pub top: f64,
}

impl CanvasOffset {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// What the overlay should look like after one event
#[derive(Debug, Clone, PartialEq)]
pub enum TooltipView {
    Hidden,
    Visible(VisibleTooltip),
}

#[derive(Debug, Clone, PartialEq)]
pub struct VisibleTooltip {
    /// New table content; `None` keeps whatever the table holds
    pub content: Option<TableContent>,
    pub placement: Placement,
    /// CSS font shorthand
    pub font: String,
    /// Padding in pixels, both axes
    pub padding: f64,
}

impl VisibleTooltip {
    pub fn padding_css(&self) -> String {
        let padding = px(self.padding);
        format!("{padding} {padding}")
    }
}

/// Overlay position relative to the container
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
}

impl Placement {
    pub fn left_css(&self) -> String {
        px(self.left)
    }

    pub fn top_css(&self) -> String {
        px(self.top)
    }
}

/// Everything that goes into the table: head, body, footer
#[derive(Debug, Clone, PartialEq)]
pub struct TableContent {
    /// One header row per title line
    pub head: Vec<String>,
    /// One value row per body line-group
    pub rows: Vec<ValueRow>,
    /// Footer panel; the footer container is rendered empty when `None`
    pub market_mover: Option<MarketMoverPanel>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValueRow {
    pub swatch: Swatch,
    pub text: String,
}

/// Series color marker. Built with its colors but never displayed.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub background: String,
    pub border: String,
}

/// Build the view for one tooltip event
pub fn describe(
    model: &TooltipModel,
    canvas: CanvasOffset,
    config: &TooltipConfig,
) -> TooltipResult<TooltipView> {
    if model.is_hidden() {
        return Ok(TooltipView::Hidden);
    }

    let content = match &model.body {
        Some(body) => Some(table_content(model, body, config)?),
        None => None,
    };

    Ok(TooltipView::Visible(VisibleTooltip {
        content,
        placement: Placement {
            left: canvas.left + model.caret_x,
            top: canvas.top + model.caret_y,
        },
        font: model.options.body_font.string.clone(),
        padding: model.options.padding,
    }))
}

fn table_content(
    model: &TooltipModel,
    body: &[BodyItem],
    config: &TooltipConfig,
) -> TooltipResult<TableContent> {
    let rows = body
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let colors = model
                .label_colors
                .get(index)
                .ok_or(TooltipError::MissingLabelColor { index })?;

            Ok(ValueRow {
                swatch: Swatch {
                    background: colors.background_color.clone(),
                    border: colors.border_color.clone(),
                },
                text: format!("{}{}", config.value_prefix, item.text()),
            })
        })
        .collect::<TooltipResult<Vec<_>>>()?;

    Ok(TableContent {
        head: model.title_lines().to_vec(),
        rows,
        market_mover: MarketMoverPanel::for_flag(model.was_significant()),
    })
}
