//! Static CSS declarations for every element the overlay builds
//!
//! Property names are in CSS (kebab-case) form so they can be handed straight
//! to `CSSStyleDeclaration.setProperty`.

/// A list of `(property, value)` pairs applied in order
pub type Declarations = &'static [(&'static str, &'static str)];

/// Floating, semi-transparent, rounded, non-interactive overlay
pub const OVERLAY: Declarations = &[
    ("background", "rgba(0, 0, 0, 0.7)"),
    ("border-radius", "3px"),
    ("color", "white"),
    ("opacity", VISIBLE_OPACITY),
    ("pointer-events", "none"),
    ("position", "relative"),
    ("transition", "all .2s ease"),
];

pub const TABLE: Declarations = &[("margin", "0px")];

pub const HEADER_ROW: Declarations = &[("border-width", "0")];

pub const HEADER_CELL: Declarations = &[("border-width", "0")];

pub const VALUE_ROW: Declarations = &[("background-color", "inherit"), ("border-width", "0")];

pub const VALUE_CELL: Declarations = &[("border-width", "0")];

/// Swatch box. The colors are set per row; the swatch stays hidden.
pub const SWATCH: Declarations = &[
    ("border-width", "2px"),
    ("margin-right", "10px"),
    ("height", "10px"),
    ("width", "10px"),
    ("display", "none"),
];

pub const FOOTER: Declarations = &[
    ("display", "flex"),
    ("flex-direction", "column"),
    ("gap", "8px"),
];

pub const ALERT: Declarations = &[
    ("color", "red"),
    ("font-size", "16px"),
    ("font-weight", "600"),
];

pub const HEADLINE: Declarations = &[("font-weight", "700"), ("font-size", "20px")];

pub const THUMBNAIL: Declarations = &[
    ("width", "300px"),
    ("height", "auto"),
    ("object-fit", "scale-down"),
];

pub const EXCERPT: Declarations = &[("font-weight", "400")];

pub const HIDDEN_OPACITY: &str = "0";
pub const VISIBLE_OPACITY: &str = "1";

/// Formats a pixel length the way JS number concatenation would
/// (`12` -> `12px`, `12.5` -> `12.5px`).
pub fn px(value: f64) -> String {
    format!("{}px", js_number(value))
}

/// `Number.prototype.toString` for the values a tooltip can carry: JS
/// switches to exponent form at 1e21 and below 1e-6
pub(crate) fn js_number(value: f64) -> String {
    let magnitude = value.abs();
    if value == 0.0 {
        // also folds -0
        "0".to_string()
    } else if value.is_infinite() {
        if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string()
    } else if magnitude >= 1e21 {
        format!("{value:e}").replacen('e', "e+", 1)
    } else if magnitude < 1e-6 {
        format!("{value:e}")
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_px_formatting() {
        assert_eq!(px(12.0), "12px");
        assert_eq!(px(12.5), "12.5px");
        assert_eq!(px(-4.0), "-4px");
        assert_eq!(px(-0.0), "0px");
        assert_eq!(px(f64::NAN), "NaNpx");
        assert_eq!(px(f64::INFINITY), "Infinitypx");
    }

    #[test]
    fn test_exponent_forms_match_js() {
        assert_eq!(js_number(1e21), "1e+21");
        assert_eq!(js_number(-2.5e22), "-2.5e+22");
        assert_eq!(js_number(1e-7), "1e-7");
        assert_eq!(js_number(1.5e-7), "1.5e-7");
        assert_eq!(js_number(0.000001), "0.000001");
        assert_eq!(js_number(123456789012345680000.0), "123456789012345680000");
    }

    #[test]
    fn test_swatch_is_hidden() {
        assert!(SWATCH.contains(&("display", "none")));
    }

    #[test]
    fn test_overlay_starts_visible() {
        assert!(OVERLAY.contains(&("opacity", "1")));
        assert!(OVERLAY.contains(&("pointer-events", "none")));
    }
}
