use leptos::*;

use crate::api::ApiClient;
use crate::models::{Area, NotificationSignup};

/// Feedback message under the signup form
#[derive(Clone, PartialEq, Eq)]
struct Feedback {
    text: String,
    is_error: bool,
}

/// Alerts page: sign up for an email when a stage is predicted for an area
#[component]
pub fn AlertsPage() -> impl IntoView {
    let client = ApiClient::new();
    let client_areas = client.clone();
    let client_signup = client.clone();

    // Area choices come from the national payload
    let areas = create_local_resource(
        || (),
        move |_| {
            let client = client_areas.clone();
            async move {
                client
                    .get_dashboard()
                    .await
                    .map(|data| data.areas)
                    .unwrap_or_else(|e| {
                        log::error!("Error loading areas: {}", e);
                        Vec::new()
                    })
            }
        },
    );

    let (email, set_email) = create_signal(String::new());
    let (area, set_area) = create_signal(String::new());
    let (stage, set_stage) = create_signal("1".to_string());
    let feedback = create_rw_signal::<Option<Feedback>>(None);

    let signup = create_action(move |request: &NotificationSignup| {
        let request = request.clone();
        let client = client_signup.clone();
        async move { client.signup_notifications(&request).await }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_value = email.get_untracked();
        let area_value = area.get_untracked();
        if email_value.is_empty() || area_value.is_empty() {
            show_feedback(
                feedback,
                Feedback {
                    text: "Please fill in all required fields".to_string(),
                    is_error: true,
                },
            );
            return;
        }

        signup.dispatch(NotificationSignup {
            email: email_value,
            area: area_value,
            stage: stage.get_untracked(),
        });
    };

    // Surface the signup outcome and reset the form on success
    create_effect(move |_| {
        let Some(result) = signup.value().get() else {
            return;
        };
        match result {
            Ok(response) if response.is_success() => {
                show_feedback(
                    feedback,
                    Feedback {
                        text: format!(
                            "You'll receive alerts for {} when Stage {} loadshedding is predicted.",
                            area.get_untracked(),
                            stage.get_untracked()
                        ),
                        is_error: false,
                    },
                );
                set_email.set(String::new());
                set_area.set(String::new());
                set_stage.set("1".to_string());
            }
            Ok(_) => show_feedback(
                feedback,
                Feedback {
                    text: "Failed to save notification preferences".to_string(),
                    is_error: true,
                },
            ),
            Err(e) => {
                log::error!("Error saving notification preferences: {}", e);
                show_feedback(
                    feedback,
                    Feedback {
                        text: "Error saving notification preferences".to_string(),
                        is_error: true,
                    },
                );
            }
        }
    });

    view! {
        <div class="alerts-page">
            <div class="card alerts-card">
                <h3>"Loadshedding Alerts"</h3>

                <form class="notification-form" on:submit=on_submit>
                    <input
                        type="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />

                    <select
                        prop:value=move || area.get()
                        on:change=move |ev| set_area.set(event_target_value(&ev))
                    >
                        <option value="">"Select area"</option>
                        {move || {
                            areas.get().map(|areas| {
                                areas
                                    .into_iter()
                                    .map(|area: Area| {
                                        view! {
                                            <option value=area.id.clone()>{area.name.clone()}</option>
                                        }
                                    })
                                    .collect_view()
                            })
                        }}
                    </select>

                    <select
                        prop:value=move || stage.get()
                        on:change=move |ev| set_stage.set(event_target_value(&ev))
                    >
                        {(1..=8)
                            .map(|stage| {
                                view! {
                                    <option value=stage.to_string()>{format!("Stage {}", stage)}</option>
                                }
                            })
                            .collect_view()}
                    </select>

                    <button
                        type="submit"
                        disabled=move || signup.pending().get()
                    >
                        {move || if signup.pending().get() { "Saving..." } else { "Notify Me" }}
                    </button>
                </form>

                {move || {
                    feedback.get().map(|message| {
                        let class = if message.is_error {
                            "notification-message error"
                        } else {
                            "notification-message success"
                        };
                        view! { <div class=class>{message.text}</div> }
                    })
                }}
            </div>
        </div>
    }
}

/// Show a feedback message and clear it after five seconds
fn show_feedback(slot: RwSignal<Option<Feedback>>, message: Feedback) {
    slot.set(Some(message.clone()));

    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Timeout;

        Timeout::new(5_000, move || {
            // Leave newer messages alone
            slot.update(|current| {
                if current.as_ref() == Some(&message) {
                    *current = None;
                }
            });
        })
        .forget();
    }
}
