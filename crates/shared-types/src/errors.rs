//! Common error types used across the tooltip crates
//! Provides consistent error handling and reporting

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Base error type for all tooltip operations
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "details")]
pub enum TooltipError {
    // Host context errors
    #[error("Invalid tooltip context: {message}")]
    InvalidContext { message: String },

    #[error("Chart handle has no canvas")]
    MissingCanvas,

    #[error("Chart canvas is not attached to a container")]
    DetachedCanvas,

    #[error("No label color for body line-group {index}")]
    MissingLabelColor { index: usize },

    // DOM errors
    #[error("DOM operation failed: {message}")]
    Dom { message: String },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        message: String,
        field: Option<String>,
    },

    // WASM-specific errors
    #[error("JavaScript interop error: {message}")]
    JsInterop { message: String },
}

/// Result type alias for tooltip operations
pub type TooltipResult<T> = Result<T, TooltipError>;

impl From<serde_json::Error> for TooltipError {
    fn from(err: serde_json::Error) -> Self {
        TooltipError::InvalidConfig {
            message: err.to_string(),
            field: None,
        }
    }
}

#[cfg(feature = "wasm")]
impl From<wasm_bindgen::JsValue> for TooltipError {
    fn from(err: wasm_bindgen::JsValue) -> Self {
        TooltipError::JsInterop {
            message: format!("{err:?}"),
        }
    }
}

#[cfg(feature = "wasm")]
impl From<TooltipError> for wasm_bindgen::JsValue {
    fn from(err: TooltipError) -> Self {
        wasm_bindgen::JsValue::from_str(&err.to_string())
    }
}

/// Helper macro for converting Results to TooltipResult
#[macro_export]
macro_rules! map_tooltip_error {
    ($result:expr, $error_variant:ident, $message:expr) => {
        $result.map_err(|e| $crate::errors::TooltipError::$error_variant {
            message: format!("{}: {:?}", $message, e),
        })
    };
}
