//! Error display component.

use dioxus::prelude::*;

/// Props for ErrorDisplay.
#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    rsx! {
        div {
            style: "padding: 10px 14px; margin: 0 0 12px 0; background: #ffebee; color: #c62828; border-radius: 4px; border: 1px solid #ef9a9a; font-size: 13px;",
            "{props.message}"
        }
    }
}
