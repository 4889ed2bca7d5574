//! Admin analytics dashboard.
//!
//! Mounts the auth provider and, once a session exists, a grid of
//! analytics charts over the four rendering kinds. While unauthenticated
//! the app shows the login form; while the saved session is being restored
//! it shows the loading indicator.

use adm_auth::{use_auth, AuthProvider};
use adm_model::{ChartDatum, ChartKind};
use adm_ui::components::{AnalyticsChart, LoadingSpinner, LoginForm};
use dioxus::prelude::*;

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("admin-dashboard-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        AuthProvider {
            Dashboard {}
        }
    }
}

#[component]
fn Dashboard() -> Element {
    let auth = use_auth();

    // Loading goes true again while a login call is in flight; the spinner
    // should only cover the initial session restore, so latch the first
    // time it clears.
    let mut restored = use_signal(|| false);
    use_effect(move || {
        if !auth.is_loading() && !restored() {
            restored.set(true);
        }
    });

    rsx! {
        div {
            style: "max-width: 960px; margin: 0 auto; padding: 16px; font-family: system-ui, -apple-system, sans-serif; background: #f5f7fa; min-height: 100vh;",
            if !restored() {
                LoadingSpinner {}
            } else if !auth.is_authenticated() {
                LoginForm {}
            } else {
                DashboardHeader {}
                ChartGrid {}
            }
        }
    }
}

#[component]
fn DashboardHeader() -> Element {
    let mut auth = use_auth();
    let greeting = auth
        .user()
        .as_ref()
        .and_then(|user| user.display_name().map(String::from))
        .unwrap_or_else(|| "admin".to_string());

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: center; margin-bottom: 16px;",
            div {
                h1 {
                    style: "margin: 0; font-size: 20px; color: #263238;",
                    "Analytics overview"
                }
                p {
                    style: "margin: 4px 0 0 0; font-size: 13px; color: #666;",
                    "Signed in as {greeting}"
                }
            }
            button {
                style: "padding: 8px 14px; font-size: 13px; color: #444; background: #fff; border: 1px solid #cfd8dc; border-radius: 6px; cursor: pointer;",
                onclick: move |_| auth.logout(),
                "Sign out"
            }
        }
    }
}

#[component]
fn ChartGrid() -> Element {
    rsx! {
        div {
            style: "display: grid; grid-template-columns: repeat(auto-fit, minmax(380px, 1fr)); gap: 16px;",
            AnalyticsChart {
                title: "Visits this week".to_string(),
                data: weekly_visits(),
                kind: ChartKind::Bar,
            }
            AnalyticsChart {
                title: "Revenue by month".to_string(),
                data: monthly_revenue(),
                kind: ChartKind::Line,
            }
            AnalyticsChart {
                title: "Traffic by device".to_string(),
                data: device_share(),
                kind: ChartKind::Pie,
            }
            AnalyticsChart {
                title: "Orders by channel".to_string(),
                data: channel_orders(),
                kind: ChartKind::Donut,
                height: 220,
            }
        }
    }
}

// Demo series until the reporting endpoints land.

fn weekly_visits() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Mon", 1500.0),
        ChartDatum::new("Tue", 500.0),
        ChartDatum::new("Wed", 980.0),
        ChartDatum::new("Thu", 1220.0),
        ChartDatum::new("Fri", 2140.0),
        ChartDatum::new("Sat", 860.0),
        ChartDatum::new("Sun", 430.0),
    ]
}

fn monthly_revenue() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Mar", 8200.0),
        ChartDatum::new("Apr", 9400.0),
        ChartDatum::new("May", 7600.0),
        ChartDatum::new("Jun", 11800.0),
        ChartDatum::new("Jul", 12900.0),
        ChartDatum::new("Aug", 10400.0),
    ]
}

fn device_share() -> Vec<ChartDatum> {
    vec![
        ChartDatum::new("Desktop", 58.0),
        ChartDatum::new("Mobile", 34.0),
        ChartDatum::new("Tablet", 8.0),
    ]
}

fn channel_orders() -> Vec<ChartDatum> {
    vec![
        ChartDatum::with_color("Direct", 120.0, "#3b82f6"),
        ChartDatum::with_color("Search", 260.0, "#10b981"),
        ChartDatum::with_color("Social", 75.0, "#f59e0b"),
        ChartDatum::with_color("Email", 45.0, "#8b5cf6"),
    ]
}
