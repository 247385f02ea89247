//! Early-access signup form
//!
//! Posts `{ "email": ... }` to the waitlist endpoint and shows the server's
//! message.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::{Deserialize, Serialize};

use crate::ui::i18n::use_locale_context;
use crate::ui::icon::{Icon, icons};

#[cfg(not(feature = "ssr"))]
const WAITLIST_ENDPOINT: &str = "/api/waitlist";

#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Serialize)]
struct JoinRequest {
    email: String,
}

#[cfg_attr(feature = "ssr", allow(dead_code))]
#[derive(Deserialize)]
struct JoinReply {
    message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Idle,
    Submitting,
    Joined(String),
    Failed(String),
}

impl FormState {
    /// State after the server answered with `status` and `body`
    #[cfg_attr(feature = "ssr", allow(dead_code))]
    fn from_reply(status: u16, body: Option<String>, fallback: &str) -> Self {
        let message = body.unwrap_or_else(|| fallback.to_string());
        if (200..300).contains(&status) {
            FormState::Joined(message)
        } else {
            FormState::Failed(message)
        }
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self, FormState::Submitting)
    }
}

#[cfg(not(feature = "ssr"))]
async fn submit(email: String, network_error: &'static str) -> FormState {
    use gloo_net::http::Request;

    let request = match Request::post(WAITLIST_ENDPOINT)
        .header("Content-Type", "application/json")
        .json(&JoinRequest { email })
    {
        Ok(request) => request,
        Err(err) => {
            leptos::logging::error!("Failed to encode waitlist request: {}", err);
            return FormState::Failed(network_error.to_string());
        }
    };

    match request.send().await {
        Ok(response) => {
            let body = response.json::<JoinReply>().await.ok().map(|r| r.message);
            FormState::from_reply(response.status(), body, network_error)
        }
        Err(err) => {
            leptos::logging::error!("Waitlist request failed: {}", err);
            FormState::Failed(network_error.to_string())
        }
    }
}

#[cfg(feature = "ssr")]
async fn submit(_email: String, network_error: &'static str) -> FormState {
    FormState::Failed(network_error.to_string())
}

#[component]
pub fn WaitlistForm() -> impl IntoView {
    let locale = use_locale_context();
    let email = RwSignal::new(String::new());
    let state = RwSignal::new(FormState::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get_untracked().is_submitting() {
            return;
        }

        let value = email.get_untracked();
        let network_error = locale.locale.get_untracked().strings().waitlist_network_error;
        state.set(FormState::Submitting);

        spawn_local(async move {
            let result = submit(value, network_error).await;
            if matches!(result, FormState::Joined(_)) {
                email.set(String::new());
            }
            state.set(result);
        });
    };

    view! {
        <form class="waitlist-form" on:submit=on_submit novalidate=true>
            <div class="waitlist-row">
                <input
                    type="email"
                    name="email"
                    class="waitlist-input"
                    autocomplete="email"
                    required=true
                    placeholder=move || locale.strings().waitlist_email_placeholder
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                    disabled=move || state.get().is_submitting()
                />
                <button
                    type="submit"
                    class="btn btn-primary"
                    disabled=move || state.get().is_submitting()
                >
                    {move || {
                        let strings = locale.strings();
                        if state.get().is_submitting() {
                            strings.waitlist_submitting
                        } else {
                            strings.waitlist_submit
                        }
                    }}
                </button>
            </div>

            <div class="waitlist-status" aria-live="polite">
                {move || match state.get() {
                    FormState::Joined(message) => view! {
                        <p class="waitlist-success">
                            <Icon name=icons::CHECK class="icon icon-inline" />
                            {message}
                        </p>
                    }.into_any(),
                    FormState::Failed(message) => view! {
                        <p class="waitlist-error">{message}</p>
                    }.into_any(),
                    FormState::Idle | FormState::Submitting => ().into_any(),
                }}
            </div>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_reply() {
        let state = FormState::from_reply(
            200,
            Some("Successfully joined the waitlist".into()),
            "Network error",
        );
        assert_eq!(
            state,
            FormState::Joined("Successfully joined the waitlist".into())
        );
    }

    #[test]
    fn test_error_reply_shows_server_message() {
        let state = FormState::from_reply(400, Some("Email already registered".into()), "x");
        assert_eq!(state, FormState::Failed("Email already registered".into()));
    }

    #[test]
    fn test_unreadable_body_falls_back() {
        let state = FormState::from_reply(502, None, "Network error");
        assert_eq!(state, FormState::Failed("Network error".into()));
    }

    #[test]
    fn test_request_body_shape() {
        let json = serde_json::to_string(&JoinRequest {
            email: "ada@example.com".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"email":"ada@example.com"}"#);
    }

    #[cfg(feature = "ssr")]
    #[tokio::test]
    async fn test_submit_on_server_reports_network_error() {
        let state = submit("ada@example.com".into(), "Network error").await;
        assert_eq!(state, FormState::Failed("Network error".into()));
    }
}
