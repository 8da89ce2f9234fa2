use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{Area, AreaResponse};
use crate::state::RequestSequencer;

use super::charts_card::ChartsCard;
use super::map_card::MapCard;
use super::prediction_card::PredictionCard;
use super::status_card::{ScopeStats, StatusCard};
use super::tips_card::TipsCard;

/// Data for the selected area, tracked separately from the national payload
#[derive(Clone)]
pub enum AreaState {
    Loading,
    Failed(String),
    Loaded(AreaResponse),
}

/// Dashboard page component with data fetching
#[component]
pub fn Dashboard() -> impl IntoView {
    let client = ApiClient::new();
    let client_national = client.clone();
    let client_area = client.clone();

    // National payload - refetch every 5 minutes or on demand
    let (national_trigger, set_national_trigger) = create_signal(0);
    let national = create_local_resource(
        move || national_trigger.get(),
        move |_| {
            let client = client_national.clone();
            async move { client.get_dashboard().await }
        },
    );

    // Scope selection: None = national, Some = one area
    let (selected, set_selected) = create_signal::<Option<Area>>(None);
    let area_state = create_rw_signal::<Option<AreaState>>(None);

    // Area fetches take a ticket so that a slow response for a scope the
    // user already left is discarded instead of overwriting the view
    let sequencer = RequestSequencer::new();
    create_effect(move |_| {
        let ticket = sequencer.begin();
        match selected.get() {
            None => area_state.set(None),
            Some(area) => {
                area_state.set(Some(AreaState::Loading));
                let client = client_area.clone();
                let sequencer = sequencer.clone();
                spawn_local(async move {
                    let result = client.get_area(&area.id).await;
                    if !sequencer.is_current(ticket) {
                        log::debug!("Discarding stale response for area {}", area.id);
                        return;
                    }
                    let state = match result {
                        Ok(response) if !response.is_success() => AreaState::Failed(
                            response
                                .message
                                .unwrap_or_else(|| "Failed to load area data".to_string()),
                        ),
                        Ok(response) => AreaState::Loaded(response),
                        Err(e) => {
                            log::error!("Error loading area data: {}", e);
                            AreaState::Failed(e.to_string())
                        }
                    };
                    area_state.set(Some(state));
                });
            }
        }
    });

    // Areas for the scope dropdown
    let areas = create_memo(move |_| {
        national
            .get()
            .and_then(|result: Result<_, ApiError>| result.ok())
            .map(|data| data.areas)
            .unwrap_or_default()
    });

    let on_scope_change = move |ev| {
        let value = event_target_value(&ev);
        if value == "national" {
            set_selected.set(None);
        } else {
            let area = areas
                .get_untracked()
                .into_iter()
                .find(|area: &Area| area.id == value);
            set_selected.set(area);
        }
    };

    let refresh = move |_| {
        set_national_trigger.update(|n| *n += 1);
    };

    // Re-poll the national status every 5 minutes
    #[cfg(target_arch = "wasm32")]
    {
        use gloo_timers::callback::Interval;

        let national_interval = Interval::new(300_000, move || {
            set_national_trigger.update(|n| *n += 1);
        });

        on_cleanup(move || drop(national_interval));
    }

    let selected_name = move || selected.get().map(|area| area.name);
    let area_prediction = Signal::derive(move || match area_state.get() {
        Some(AreaState::Loaded(response)) => response.prediction,
        _ => None,
    });

    view! {
        <div class="dashboard">
            <div class="dashboard-toolbar">
                <label class="scope-label" for="scope-select">"Area"</label>
                <select id="scope-select" class="scope-select" on:change=on_scope_change>
                    <option value="national" selected=true>"National"</option>
                    <For
                        each=move || areas.get()
                        key=|area| area.id.clone()
                        children=move |area| {
                            view! { <option value=area.id.clone()>{area.name.clone()}</option> }
                        }
                    />
                </select>
                <button class="refresh-button" on:click=refresh>
                    "Refresh"
                </button>
            </div>

            <div class="dashboard-grid">
                // Status card: national figures, or the selected area's
                {move || match area_state.get() {
                    None => view! {
                        <Suspense fallback=move || view! { <LoadingCard title="Loadshedding Status" /> }>
                            {move || {
                                national.get().map(|result| match result {
                                    Ok(data) => {
                                        if let Some(error) = data.error {
                                            view! { <ErrorCard title="Loadshedding Status" message=error /> }
                                                .into_view()
                                        } else if let Some(stats) = data.national_stats {
                                            view! { <StatusCard stats=ScopeStats::National(stats) /> }
                                                .into_view()
                                        } else {
                                            view! { <ErrorCard
                                                title="Loadshedding Status"
                                                message="No national status available".to_string()
                                            /> }
                                                .into_view()
                                        }
                                    }
                                    Err(e) => {
                                        log::error!("Error loading national data: {}", e);
                                        view! { <ErrorCard title="Loadshedding Status" message=e.to_string() /> }
                                            .into_view()
                                    }
                                })
                            }}
                        </Suspense>
                    }.into_view(),
                    Some(AreaState::Loading) => {
                        view! { <LoadingCard title="Loadshedding Status" /> }.into_view()
                    }
                    Some(AreaState::Failed(message)) => {
                        view! { <ErrorCard title="Loadshedding Status" message=message /> }.into_view()
                    }
                    Some(AreaState::Loaded(response)) => {
                        let name = selected_name().unwrap_or_else(|| "Area".to_string());
                        match response.stats {
                            Some(stats) => {
                                let scope = ScopeStats::Area { name, stats };
                                view! { <StatusCard stats=scope /> }.into_view()
                            }
                            None => view! { <ErrorCard
                                title="Loadshedding Status"
                                message="No statistics for this area".to_string()
                            /> }.into_view(),
                        }
                    }
                }}

                <PredictionCard selected=selected.into() area_prediction=area_prediction />

                <ChartsCard area_state=area_state.read_only() />

                <MapCard />

                <TipsCard />
            </div>
        </div>
    }
}

/// Loading card placeholder
#[component]
pub fn LoadingCard(title: &'static str) -> impl IntoView {
    view! {
        <div class="card">
            <h3>{title}</h3>
            <div class="loading">"Loading..."</div>
        </div>
    }
}

/// Card-shaped error banner
#[component]
pub fn ErrorCard(title: &'static str, message: String) -> impl IntoView {
    view! {
        <div class="card card-error">
            <h3>{title}</h3>
            <div class="error-message">{message}</div>
        </div>
    }
}
