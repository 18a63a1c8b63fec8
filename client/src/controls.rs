use leptos::prelude::*;

use crate::app::BaseLayer;
use crate::widget::MapType;

const LAYERS: [(MapType, &str); 2] = [
    (MapType::Roadmap, "Mappa"),
    (MapType::Satellite, "Satellite"),
];

/// Base-layer toggle pair floating over the map. Switching layers never
/// touches selection or overlay styles.
#[component]
pub fn MapControls() -> impl IntoView {
    let BaseLayer(map_type) = expect_context();

    view! {
        <div style="position: absolute; right: 16px; top: 80px; z-index: 15; display: flex; flex-direction: column; gap: 10px; align-items: flex-end;">
            <div style="display: flex; background: #fbfaf8; border: 1px solid #e2ded6; border-radius: 10px; overflow: hidden; box-shadow: 0 2px 10px rgba(28,36,48,0.12);">
                {LAYERS
                    .iter()
                    .map(|&(layer, label)| {
                        let style = move || {
                            if map_type.get() == layer {
                                "padding: 8px 14px; font-size: 0.78rem; border: none; cursor: pointer; background: #1c2430; color: #fbfaf8;"
                            } else {
                                "padding: 8px 14px; font-size: 0.78rem; border: none; cursor: pointer; background: none; color: #4a4639;"
                            }
                        };
                        view! {
                            <button type="button" style=style on:click=move |_| map_type.set(layer)>
                                {label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <button
                type="button"
                aria-label="Posizione attuale"
                style="width: 38px; height: 38px; border-radius: 50%; border: 1px solid #e2ded6; background: #fbfaf8; font-size: 1rem; cursor: pointer; box-shadow: 0 2px 10px rgba(28,36,48,0.12);"
            >
                "⊕"
            </button>
        </div>
    }
}
