use leptos::*;

use crate::api::{ApiClient, ApiError};
use crate::models::{Area, PredictRequest, PredictResponse, Prediction};

/// Prediction card: requests a stage forecast for the selected scope and
/// renders it alongside the prediction embedded in area payloads
#[component]
pub fn PredictionCard(
    selected: Signal<Option<Area>>,
    area_prediction: Signal<Option<Prediction>>,
) -> impl IntoView {
    let client = ApiClient::new();

    let (days_ahead, set_days_ahead) = create_signal(1u32);

    let predict = create_action(move |request: &PredictRequest| {
        let request = request.clone();
        let client = client.clone();
        async move { client.predict(&request).await }
    });

    let on_predict = move |_| {
        let request = PredictRequest {
            area_id: selected.get_untracked().map(|area| area.id),
            days_ahead: days_ahead.get_untracked(),
        };
        predict.dispatch(request);
    };

    // Changing scope drops the previous request so the area payload's own
    // prediction shows again
    create_effect(move |_| {
        selected.track();
        predict.value().set(None);
    });

    let on_days_change = move |ev| {
        if let Ok(days) = event_target_value(&ev).parse::<u32>() {
            set_days_ahead.set(days.max(1));
        }
    };

    // A requested prediction wins over the one embedded in the area payload
    let rendered = move || {
        let requested: Option<Result<PredictResponse, ApiError>> = predict.value().get();
        match requested {
            Some(Ok(response)) => {
                if let Some(error) = response.error {
                    view! { <p class="error-message">{format!("Error: {}", error)}</p> }.into_view()
                } else {
                    prediction_view(response.prediction)
                }
            }
            Some(Err(e)) => {
                log::error!("Error making prediction: {}", e);
                view! { <p class="error-message">{format!("Error making prediction: {}", e)}</p> }
                    .into_view()
            }
            None => prediction_view(area_prediction.get()),
        }
    };

    view! {
        <div class="card prediction-card">
            <h3>"Stage Prediction"</h3>
            <div class="prediction-controls">
                <label for="prediction-days">"Days ahead"</label>
                <input
                    id="prediction-days"
                    type="number"
                    min="1"
                    max="7"
                    prop:value=move || days_ahead.get().to_string()
                    on:change=on_days_change
                />
                <button
                    class="predict-button"
                    on:click=on_predict
                    disabled=move || predict.pending().get()
                >
                    {move || if predict.pending().get() { "Predicting..." } else { "Predict" }}
                </button>
            </div>
            <div class="prediction-result">{rendered}</div>
        </div>
    }
}

fn prediction_view(prediction: Option<Prediction>) -> View {
    match prediction {
        None => view! { <p class="subtitle">"No prediction available"</p> }.into_view(),
        Some(prediction) => {
            let scope_text = prediction.scope_text();
            view! {
                <p><strong>"Date: "</strong>{prediction.date.clone()}</p>
                <p><strong>"Predicted Stage: "</strong>{prediction.predicted_stage.to_string()}</p>
                <p><em>{format!("Prediction is for {}", scope_text)}</em></p>
            }
            .into_view()
        }
    }
}
