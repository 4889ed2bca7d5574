//! Reusable Dioxus RSX components for the admin dashboard.
//!
//! The centerpiece is `AnalyticsChart`, a stateless widget that renders a
//! titled card around one of four chart kinds. The rest are the small
//! building blocks the dashboard app composes: login form, loading
//! indicator, error box.

pub mod components;
