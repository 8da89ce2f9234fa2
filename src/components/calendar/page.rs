use leptos::*;

use crate::api::ApiClient;
use crate::calendar::{month_grid, CalendarCell, MonthCursor};
use crate::charts::WEEKDAY_LABELS;

/// Calendar page: one month of predicted loadshedding days with paging
#[component]
pub fn CalendarPage() -> impl IntoView {
    let client = ApiClient::new();

    let (cursor, set_cursor) = create_signal(MonthCursor::current());

    let month_data = create_local_resource(
        move || cursor.get(),
        move |cursor| {
            let client = client.clone();
            async move { client.get_calendar(cursor.year, cursor.month1()).await }
        },
    );

    let prev_month = move |_| set_cursor.update(|c| *c = c.shifted(-1));
    let next_month = move |_| set_cursor.update(|c| *c = c.shifted(1));

    view! {
        <div class="calendar-page">
            <div class="calendar-header">
                <button class="month-button" on:click=prev_month aria-label="Previous month">
                    "<"
                </button>
                <h2 class="month-label">{move || cursor.get().label()}</h2>
                <button class="month-button" on:click=next_month aria-label="Next month">
                    ">"
                </button>
            </div>

            <div class="calendar-grid">
                {WEEKDAY_LABELS
                    .iter()
                    .map(|day| view! { <div class="calendar-day header">{*day}</div> })
                    .collect_view()}

                <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
                    {move || {
                        month_data.get().map(|result| {
                            let shed_days = match result {
                                Ok(days) => days,
                                Err(e) => {
                                    // Render the bare month when the data fails to load
                                    log::error!("Error loading calendar data: {}", e);
                                    Vec::new()
                                }
                            };
                            month_grid(cursor.get(), &shed_days)
                                .into_iter()
                                .map(|cell| match cell {
                                    CalendarCell::Blank => {
                                        view! { <div class="calendar-day"></div> }.into_view()
                                    }
                                    CalendarCell::Day { day, stage: None } => {
                                        view! { <div class="calendar-day">{day}</div> }.into_view()
                                    }
                                    CalendarCell::Day {
                                        day,
                                        stage: Some(stage),
                                    } => view! {
                                        <div
                                            class="calendar-day shedding"
                                            data-stage=format!("Stage {}", stage)
                                        >
                                            {day}
                                        </div>
                                    }
                                    .into_view(),
                                })
                                .collect_view()
                        })
                    }}
                </Suspense>
            </div>
        </div>
    }
}
