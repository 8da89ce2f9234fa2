use leptos::*;

use crate::estimator::{
    ApplianceEntry, Estimator, EstimatorError, OUTAGE_HOURS_PER_DAY, SYSTEM_VOLTAGE,
};

/// Impact calculator page: declare appliances, see daily consumption, the
/// share lost to loadshedding and the battery capacity to bridge it.
/// The [`Estimator`] is the single source of truth; everything rendered is
/// derived from it.
#[component]
pub fn CalculatorPage() -> impl IntoView {
    let estimator = create_rw_signal(Estimator::new());

    let (catalog_key, set_catalog_key) = create_signal(String::new());
    let (custom_watts, set_custom_watts) = create_signal(String::new());
    let (hours, set_hours) = create_signal(String::new());
    let (form_error, set_form_error) = create_signal::<Option<EstimatorError>>(None);

    let entries = create_memo(move |_| estimator.with(|e| e.entries().to_vec()));
    let totals = create_memo(move |_| estimator.with(|e| e.totals()));

    let on_select_change = move |ev| {
        set_catalog_key.set(event_target_value(&ev));
    };

    let on_add = move |_| {
        let mut outcome = Ok(());
        estimator.update(|e| {
            outcome = e
                .add_entry(
                    &catalog_key.get_untracked(),
                    &custom_watts.get_untracked(),
                    &hours.get_untracked(),
                )
                .map(|_| ());
        });

        match outcome {
            Ok(()) => {
                // Reset the form after a successful add
                set_form_error.set(None);
                set_catalog_key.set(String::new());
                set_custom_watts.set(String::new());
                set_hours.set(String::new());
            }
            Err(error) => set_form_error.set(Some(error)),
        }
    };

    let on_remove = move |id: u64| {
        estimator.update(|e| e.remove(id));
    };

    let show_custom = move || catalog_key.get() == "custom";

    view! {
        <div class="calculator-page">
            <div class="card calculator-card">
                <h3>"Loadshedding Impact Calculator"</h3>

                <div class="calculator-form">
                    <select
                        class="appliance-select"
                        prop:value=move || catalog_key.get()
                        on:change=on_select_change
                    >
                        <option value="">"Select appliance"</option>
                        <option value="fridge">"Fridge (200W)"</option>
                        <option value="tv">"TV (150W)"</option>
                        <option value="computer">"Computer (300W)"</option>
                        <option value="lights">"Lights (100W)"</option>
                        <option value="custom">"Custom Appliance"</option>
                    </select>

                    <Show when=show_custom>
                        <input
                            type="number"
                            class="custom-watts"
                            placeholder="Wattage"
                            prop:value=move || custom_watts.get()
                            on:input=move |ev| set_custom_watts.set(event_target_value(&ev))
                        />
                    </Show>

                    <input
                        type="number"
                        class="hours-used"
                        placeholder="Hours per day"
                        prop:value=move || hours.get()
                        on:input=move |ev| set_hours.set(event_target_value(&ev))
                    />

                    <button class="add-appliance" on:click=on_add>
                        "Add"
                    </button>
                </div>

                {move || {
                    form_error.get().map(|error| {
                        view! { <div class="error-message">{error.to_string()}</div> }
                    })
                }}

                <div class="appliance-list">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id
                        children=move |entry: ApplianceEntry| {
                            let id = entry.id;
                            view! {
                                <div class="appliance-item">
                                    <span>{format!("{} ({}W)", entry.name, entry.watts)}</span>
                                    <span>{format!("{} hrs/day", entry.hours_per_day)}</span>
                                    <button
                                        class="remove-appliance"
                                        aria-label="Remove appliance"
                                        on:click=move |_| on_remove(id)
                                    >
                                        "x"
                                    </button>
                                </div>
                            }
                        }
                    />
                </div>

                <div class="calculator-results">
                    <div class="result-line">
                        "Daily usage: "
                        <strong>{move || totals.get().daily_kwh_display()}</strong>
                        " kWh"
                    </div>
                    <div class="result-line">
                        {format!("Lost to loadshedding ({}h/day): ", OUTAGE_HOURS_PER_DAY)}
                        <strong>{move || totals.get().outage_kwh_display()}</strong>
                        " kWh"
                    </div>
                    <div class="result-line">
                        {format!("Battery needed ({}V): ", SYSTEM_VOLTAGE)}
                        <strong>{move || totals.get().battery_ah_display()}</strong>
                        " Ah"
                    </div>
                </div>
            </div>
        </div>
    }
}
