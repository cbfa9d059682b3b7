//! Applies a `TooltipView` to an overlay

use tooltip_shared::style::{self, Declarations};
use tooltip_shared::{
    map_tooltip_error, MarketMoverPanel, TableContent, TooltipResult, TooltipView, ValueRow,
    VisibleTooltip,
};
use web_sys::{Document, HtmlElement, HtmlImageElement, Node};

use crate::overlay_registry::{create_element, Overlay};

pub struct TooltipRenderer<'a> {
    document: &'a Document,
}

impl<'a> TooltipRenderer<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self { document }
    }

    pub fn apply(&self, overlay: &Overlay, view: &TooltipView) -> TooltipResult<()> {
        match view {
            TooltipView::Hidden => set_style(&overlay.root, "opacity", style::HIDDEN_OPACITY),
            TooltipView::Visible(visible) => self.show(overlay, visible),
        }
    }

    fn show(&self, overlay: &Overlay, visible: &VisibleTooltip) -> TooltipResult<()> {
        if let Some(content) = &visible.content {
            self.replace_content(overlay, content)?;
        }

        let root = &overlay.root;
        set_style(root, "opacity", style::VISIBLE_OPACITY)?;
        set_style(root, "left", &visible.placement.left_css())?;
        set_style(root, "top", &visible.placement.top_css())?;
        set_style(root, "font", &visible.font)?;
        set_style(root, "padding", &visible.padding_css())
    }

    /// Discards every child of the table, then appends head, body and footer
    fn replace_content(&self, overlay: &Overlay, content: &TableContent) -> TooltipResult<()> {
        let head = self.head(&content.head)?;
        let body = self.body(&content.rows)?;
        let footer = self.footer(content.market_mover.as_ref())?;

        let table = &overlay.table;
        while let Some(child) = table.first_child() {
            map_tooltip_error!(table.remove_child(&child), Dom, "Failed to clear table")?;
        }

        append(table, &head)?;
        append(table, &body)?;
        append(table, &footer)
    }

    fn head(&self, titles: &[String]) -> TooltipResult<HtmlElement> {
        let thead = self.element("thead", &[])?;

        for title in titles {
            let tr = self.element("tr", style::HEADER_ROW)?;
            let th = self.element("th", style::HEADER_CELL)?;

            append(&th, &self.document.create_text_node(title))?;
            append(&tr, &th)?;
            append(&thead, &tr)?;
        }

        Ok(thead)
    }

    fn body(&self, rows: &[ValueRow]) -> TooltipResult<HtmlElement> {
        let tbody = self.element("tbody", &[])?;

        for row in rows {
            let span = self.element("span", &[])?;
            set_style(&span, "background", &row.swatch.background)?;
            set_style(&span, "border-color", &row.swatch.border)?;
            apply_declarations(&span, style::SWATCH)?;

            let tr = self.element("tr", style::VALUE_ROW)?;
            let td = self.element("td", style::VALUE_CELL)?;

            append(&td, &span)?;
            append(&td, &self.document.create_text_node(&row.text))?;
            append(&tr, &td)?;
            append(&tbody, &tr)?;
        }

        Ok(tbody)
    }

    fn footer(&self, panel: Option<&MarketMoverPanel>) -> TooltipResult<HtmlElement> {
        let footer = self.element("div", style::FOOTER)?;

        let Some(panel) = panel else {
            return Ok(footer);
        };

        let alert = self.text_block(panel.alert, style::ALERT)?;
        let headline = self.text_block(panel.headline, style::HEADLINE)?;

        let thumbnail = create_element::<HtmlImageElement>(self.document, "img")?;
        apply_declarations(&thumbnail, style::THUMBNAIL)?;
        thumbnail.set_src(panel.thumbnail_url);

        let excerpt = self.text_block(panel.excerpt, style::EXCERPT)?;

        append(&footer, &alert)?;
        append(&footer, &headline)?;
        append(&footer, &thumbnail)?;
        append(&footer, &excerpt)?;

        Ok(footer)
    }

    fn text_block(&self, text: &str, declarations: Declarations) -> TooltipResult<HtmlElement> {
        let block = self.element("div", declarations)?;
        block.set_text_content(Some(text));
        Ok(block)
    }

    fn element(&self, tag: &str, declarations: Declarations) -> TooltipResult<HtmlElement> {
        let element = create_element::<HtmlElement>(self.document, tag)?;
        apply_declarations(&element, declarations)?;
        Ok(element)
    }
}

pub(crate) fn apply_declarations(
    element: &HtmlElement,
    declarations: Declarations,
) -> TooltipResult<()> {
    for (property, value) in declarations {
        set_style(element, property, value)?;
    }
    Ok(())
}

fn set_style(element: &HtmlElement, property: &str, value: &str) -> TooltipResult<()> {
    map_tooltip_error!(
        element.style().set_property(property, value),
        Dom,
        format!("Failed to set {property}")
    )
}

fn append(parent: &Node, child: &Node) -> TooltipResult<()> {
    map_tooltip_error!(parent.append_child(child), Dom, "Failed to append child")?;
    Ok(())
}
