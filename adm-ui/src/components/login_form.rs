//! Login form for the admin dashboard.

use adm_auth::use_auth;
use dioxus::prelude::*;

use super::ErrorDisplay;

const INPUT_STYLE: &str = "display: block; width: 100%; box-sizing: border-box; margin-top: 4px; padding: 8px 10px; font-size: 14px; border: 1px solid #cfd8dc; border-radius: 6px;";

/// Username/password form driving `AuthState::login`.
///
/// A rejected login never raises; it comes back as `false` and is shown as
/// an inline error message.
#[component]
pub fn LoginForm() -> Element {
    let mut auth = use_auth();
    let mut username = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| None::<String>);

    let username_value = username();
    let password_value = password();

    let submit = move |_| {
        let name = username();
        let pass = password();
        spawn(async move {
            error_msg.set(None);
            if !auth.login(&name, &pass).await {
                error_msg.set(Some("Invalid username or password.".to_string()));
            }
        });
    };

    rsx! {
        div {
            style: "max-width: 360px; margin: 48px auto; padding: 24px; background: #fff; border-radius: 12px; border: 1px solid #e0e0e0; box-shadow: 0 1px 3px rgba(0, 0, 0, 0.12);",
            h2 {
                style: "margin: 0 0 16px 0; font-size: 18px; color: #263238;",
                "Admin sign in"
            }
            if let Some(message) = error_msg() {
                ErrorDisplay { message }
            }
            label {
                style: "display: block; margin-bottom: 12px; font-size: 13px; color: #444;",
                "Username"
                input {
                    r#type: "text",
                    value: "{username_value}",
                    style: INPUT_STYLE,
                    oninput: move |evt| username.set(evt.value()),
                }
            }
            label {
                style: "display: block; margin-bottom: 16px; font-size: 13px; color: #444;",
                "Password"
                input {
                    r#type: "password",
                    value: "{password_value}",
                    style: INPUT_STYLE,
                    oninput: move |evt| password.set(evt.value()),
                }
            }
            button {
                style: "width: 100%; padding: 10px; font-size: 14px; font-weight: 600; color: #fff; background: #3b82f6; border: none; border-radius: 6px; cursor: pointer;",
                disabled: auth.is_loading(),
                onclick: submit,
                if auth.is_loading() {
                    "Signing in..."
                } else {
                    "Sign in"
                }
            }
        }
    }
}
