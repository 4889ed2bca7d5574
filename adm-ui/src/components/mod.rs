//! Reusable RSX components.

mod analytics_chart;
mod error_display;
mod loading_spinner;
mod login_form;

pub use analytics_chart::{AnalyticsChart, NO_DATA_MESSAGE};
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use login_form::LoginForm;
