//! Tooltip context as handed over by the host charting library
//!
//! Only the fields the overlay actually reads are modelled. Everything else on
//! the host objects (chart back-references, datasets, resolved elements) is
//! ignored during deserialization.

use serde::de::{Deserializer, IgnoredAny};
use serde::Deserialize;

use crate::style::js_number;

/// The tooltip model for one pointer event
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipModel {
    /// 0 when the host wants the tooltip hidden
    pub opacity: f64,

    /// Title lines, rendered as header rows. Category axes may hand over
    /// numbers; those are stringified.
    #[serde(default, deserialize_with = "lenient_lines")]
    pub title: Option<Vec<String>>,

    /// Body line-groups; `None` means "keep the previous table content"
    #[serde(default)]
    pub body: Option<Vec<BodyItem>>,

    /// Series colors, index-aligned with `body`
    #[serde(default)]
    pub label_colors: Vec<LabelColor>,

    /// Hit-tested data points, nearest first
    #[serde(default)]
    pub data_points: Option<Vec<DataPoint>>,

    /// Cursor X offset within the chart, in pixels
    pub caret_x: f64,

    /// Cursor Y offset within the chart, in pixels
    pub caret_y: f64,

    pub options: TooltipOptions,
}

impl TooltipModel {
    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }

    /// Title lines, empty when the host sent none
    pub fn title_lines(&self) -> &[String] {
        self.title.as_deref().unwrap_or_default()
    }

    /// Significance flag of the first data point. Absent points or payloads
    /// resolve to `false`.
    pub fn was_significant(&self) -> bool {
        self.data_points
            .as_ref()
            .and_then(|points| points.first())
            .map(|point| point.raw.was_significant)
            .unwrap_or(false)
    }
}

/// Just the visibility of a tooltip model. Hidden events need nothing else,
/// so this is read before the rest of the model is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
pub struct Visibility {
    pub opacity: f64,
}

impl Visibility {
    pub fn is_hidden(&self) -> bool {
        self.opacity == 0.0
    }
}

/// One body line-group
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BodyItem {
    #[serde(default)]
    pub before: Vec<String>,
    #[serde(default)]
    pub lines: Vec<String>,
    #[serde(default)]
    pub after: Vec<String>,
}

impl BodyItem {
    /// The group's lines joined the way a JS array stringifies
    pub fn text(&self) -> String {
        self.lines.join(",")
    }
}

/// Swatch colors for one series. Gradients and patterns have no CSS string
/// form and come through empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelColor {
    #[serde(default, deserialize_with = "lenient_text")]
    pub background_color: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub border_color: String,
}

/// A hit-tested data point
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DataPoint {
    #[serde(default)]
    pub raw: RawPayload,
}

/// The slice of a data point's raw payload the tooltip cares about.
///
/// Raw payloads are whatever the page put in the dataset: numbers, arrays or
/// objects. Anything that is not an object carrying a boolean
/// `wasSignificant` deserializes to the default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawPayload {
    pub was_significant: bool,
}

impl<'de> Deserialize<'de> for RawPayload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Flagged {
                #[serde(rename = "wasSignificant")]
                was_significant: bool,
            },
            Other(IgnoredAny),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Flagged { was_significant } => RawPayload { was_significant },
            Repr::Other(_) => RawPayload::default(),
        })
    }
}

/// Strings pass through, numbers are formatted like JS would, anything else
/// becomes empty
struct LenientText(String);

impl<'de> Deserialize<'de> for LenientText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Text(String),
            Number(f64),
            Other(IgnoredAny),
        }

        Ok(LenientText(match Repr::deserialize(deserializer)? {
            Repr::Text(text) => text,
            Repr::Number(number) => js_number(number),
            Repr::Other(_) => String::new(),
        }))
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    LenientText::deserialize(deserializer).map(|text| text.0)
}

fn lenient_lines<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let lines = Option::<Vec<LenientText>>::deserialize(deserializer)?;
    Ok(lines.map(|lines| lines.into_iter().map(|line| line.0).collect()))
}

/// Display options resolved by the host
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    pub body_font: FontSpec,
    /// Padding in pixels, applied to both axes
    pub padding: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FontSpec {
    /// CSS font shorthand, e.g. `normal 12px Helvetica`
    pub string: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn model(value: serde_json::Value) -> TooltipModel {
        serde_json::from_value(value).unwrap()
    }

    fn base() -> serde_json::Value {
        json!({
            "opacity": 1,
            "title": ["Jan 3, 2024"],
            "body": [{ "before": [], "lines": ["42,150.10"], "after": [] }],
            "labelColors": [{
                "backgroundColor": "rgba(255, 99, 132, 0.5)",
                "borderColor": "rgb(255, 99, 132)",
                "borderWidth": 2
            }],
            "dataPoints": [{
                "datasetIndex": 0,
                "raw": { "x": 1704240000000_i64, "y": 42150.1, "wasSignificant": true }
            }],
            "caretX": 120.5,
            "caretY": 48,
            "options": {
                "bodyFont": { "family": "Helvetica", "size": 12, "string": "normal 12px Helvetica" },
                "padding": 6
            }
        })
    }

    #[test]
    fn test_host_payload_deserializes() {
        let model = model(base());

        assert!(!model.is_hidden());
        assert_eq!(model.title_lines(), ["Jan 3, 2024".to_string()]);
        assert_eq!(model.body.as_ref().map(Vec::len), Some(1));
        assert_eq!(model.label_colors[0].border_color, "rgb(255, 99, 132)");
        assert_eq!(model.caret_x, 120.5);
        assert_eq!(model.options.body_font.string, "normal 12px Helvetica");
        assert_eq!(model.options.padding, 6.0);
        assert!(model.was_significant());
    }

    #[test]
    fn test_significance_defaults_to_false() {
        let mut payload = base();
        payload["dataPoints"] = json!([]);
        assert!(!model(payload.clone()).was_significant());

        payload.as_object_mut().unwrap().remove("dataPoints");
        assert!(!model(payload.clone()).was_significant());

        payload["dataPoints"] = json!([{ "datasetIndex": 0 }]);
        assert!(!model(payload.clone()).was_significant());

        payload["dataPoints"] = json!([{ "raw": 42150.1 }]);
        assert!(!model(payload.clone()).was_significant());

        payload["dataPoints"] = json!([{ "raw": null }]);
        assert!(!model(payload.clone()).was_significant());

        payload["dataPoints"] = json!([{ "raw": { "y": 3, "wasSignificant": "yes" } }]);
        assert!(!model(payload).was_significant());
    }

    #[test]
    fn test_only_first_data_point_counts() {
        let mut payload = base();
        payload["dataPoints"] = json!([
            { "raw": { "wasSignificant": false } },
            { "raw": { "wasSignificant": true } }
        ]);

        assert!(!model(payload).was_significant());
    }

    #[test]
    fn test_missing_title_and_body() {
        let mut payload = base();
        payload.as_object_mut().unwrap().remove("title");
        payload.as_object_mut().unwrap().remove("body");
        let model = model(payload);

        assert!(model.title_lines().is_empty());
        assert!(model.body.is_none());
    }

    #[test]
    fn test_body_text_joins_lines() {
        let item = BodyItem {
            lines: vec!["BTC: 42,150".to_string(), "ETH: 2,210".to_string()],
            ..Default::default()
        };

        assert_eq!(item.text(), "BTC: 42,150,ETH: 2,210");
        assert_eq!(BodyItem::default().text(), "");
    }

    #[test]
    fn test_visibility_ignores_visible_only_fields() {
        let payload = json!({
            "opacity": 0,
            "labelColors": [{ "backgroundColor": {}, "borderColor": "rgb(0, 0, 0)" }],
            "options": { "bodyFont": { "string": "normal 12px Helvetica" }, "padding": { "x": 6, "y": 4 } }
        });

        let visibility: Visibility = serde_json::from_value(payload.clone()).unwrap();
        assert!(visibility.is_hidden());
        // the full model still rejects object-form padding
        assert!(serde_json::from_value::<TooltipModel>(payload).is_err());
    }

    #[test]
    fn test_gradient_colors_and_numeric_titles() {
        let mut payload = base();
        payload["title"] = json!([2024, "Q1", null]);
        payload["labelColors"] = json!([{ "backgroundColor": {}, "borderColor": 7 }]);
        let model = model(payload);

        assert_eq!(model.title_lines(), ["2024", "Q1", ""].map(String::from));
        assert_eq!(model.label_colors[0].background_color, "");
        assert_eq!(model.label_colors[0].border_color, "7");
    }

    #[test]
    fn test_null_title() {
        let mut payload = base();
        payload["title"] = json!(null);

        assert!(model(payload).title_lines().is_empty());
    }

    #[test]
    fn test_hidden_model() {
        let mut payload = base();
        payload["opacity"] = json!(0);

        assert!(model(payload).is_hidden());
    }
}
