use leptos::*;

use crate::api::ApiClient;

/// Energy saving tips card
#[component]
pub fn TipsCard() -> impl IntoView {
    let client = ApiClient::new();

    let tips = create_local_resource(
        || (),
        move |_| {
            let client = client.clone();
            async move { client.get_energy_tips().await }
        },
    );

    view! {
        <div class="card tips-card">
            <h3>"Energy Saving Tips"</h3>
            <Suspense fallback=move || view! { <div class="loading">"Loading..."</div> }>
                {move || {
                    tips.get().map(|result| match result {
                        Ok(tips) => view! {
                            <ul class="tips-list">
                                {tips
                                    .tips
                                    .into_iter()
                                    .map(|tip| view! { <li>{tip}</li> })
                                    .collect_view()}
                            </ul>
                        }
                        .into_view(),
                        Err(e) => {
                            // Failure surfaces only on the console
                            log::error!("Error loading energy tips: {}", e);
                            ().into_view()
                        }
                    })
                }}
            </Suspense>
        </div>
    }
}
