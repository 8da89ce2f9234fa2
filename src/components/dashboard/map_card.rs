use leptos::*;

/// South Africa, country-level view
const MAP_CENTER: (f64, f64) = (-28.4796, 24.6987);
const MAP_ZOOM: f64 = 5.0;
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

const MAP_CONTAINER_ID: &str = "map";

/// Map card: a Leaflet map with a fixed initial view over an
/// OpenStreetMap tile layer. Initialized once after the container mounts.
#[component]
pub fn MapCard() -> impl IntoView {
    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let initialized = Rc::new(Cell::new(false));

        create_effect(move |_| {
            if initialized.get() {
                return;
            }
            initialized.set(true);
            init_map();
        });
    }

    view! {
        <div class="card map-card">
            <h3>"Affected Areas"</h3>
            <div id=MAP_CONTAINER_ID class="map-container"></div>
        </div>
    }
}

#[cfg(target_arch = "wasm32")]
fn init_map() {
    use wasm_bindgen::JsValue;

    let center = js_sys::Array::of2(
        &JsValue::from_f64(MAP_CENTER.0),
        &JsValue::from_f64(MAP_CENTER.1),
    );
    let map = bindings::leaflet_map(MAP_CONTAINER_ID).set_view(&center.into(), MAP_ZOOM);

    let options = js_sys::Object::new();
    if js_sys::Reflect::set(
        &options,
        &JsValue::from_str("attribution"),
        &JsValue::from_str(TILE_ATTRIBUTION),
    )
    .is_err()
    {
        log::error!("Failed to build tile layer options");
    }

    bindings::tile_layer(TILE_URL, &options.into()).add_to(&map);
}

/// Minimal bindings to the globally loaded Leaflet (`L`)
#[cfg(target_arch = "wasm32")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type LeafletMap;

        #[wasm_bindgen(js_namespace = L, js_name = map)]
        pub fn leaflet_map(container_id: &str) -> LeafletMap;

        #[wasm_bindgen(method, js_name = setView)]
        pub fn set_view(this: &LeafletMap, center: &JsValue, zoom: f64) -> LeafletMap;

        pub type LeafletTileLayer;

        #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
        pub fn tile_layer(url: &str, options: &JsValue) -> LeafletTileLayer;

        #[wasm_bindgen(method, js_name = addTo)]
        pub fn add_to(this: &LeafletTileLayer, map: &LeafletMap);
    }
}
