use leptos::prelude::*;

use sentiero_shared::Trail;

use crate::app::{ActiveTrail, CatalogStore};

const FILTER_LABELS: [&str; 5] = ["Distanza", "Difficoltà", "Lunghezza", "Tempo", "Altitudine"];

/// Element id carried by each rendered card; the selection controller uses
/// it to locate the card for scroll-into-view.
pub fn card_element_id(trail_id: &str) -> String {
    format!("trail-{trail_id}")
}

/// Bring a trail's card into view inside the list: smooth, nearest edge, so
/// entries that are already visible stay put.
pub fn scroll_card_into_view(trail_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(card) = document.get_element_by_id(&card_element_id(trail_id)) else {
        return;
    };
    let opts = web_sys::ScrollIntoViewOptions::new();
    opts.set_behavior(web_sys::ScrollBehavior::Smooth);
    opts.set_block(web_sys::ScrollLogicalPosition::Nearest);
    card.scroll_into_view_with_scroll_into_view_options(&opts);
}

fn format_rating(rating: f64) -> String {
    format!("{rating:.1}")
}

fn format_distance(km: f64) -> String {
    format!("{km:.1} km")
}

/// Trail list panel: header, filter chips, one card per catalog entry.
#[component]
pub fn Sidebar() -> impl IntoView {
    let CatalogStore(catalog) = expect_context();

    let trail_count = catalog.with_value(|c| c.len());
    let trails: Vec<Trail> = catalog.with_value(|c| c.trails().to_vec());

    view! {
        <aside style="position: absolute; top: 64px; left: 0; bottom: 0; width: 380px; z-index: 10; background: #fbfaf8; border-right: 1px solid #e2ded6; display: flex; flex-direction: column; box-shadow: 4px 0 20px rgba(28,36,48,0.08);">
            <div style="padding: 18px 20px 12px; border-bottom: 1px solid #e2ded6; display: flex; justify-content: space-between; align-items: flex-start;">
                <div>
                    <p style="margin: 0; font-size: 0.68rem; text-transform: uppercase; letter-spacing: 0.12em; color: #8a8578;">"Esplora sentieri"</p>
                    <h1 style="margin: 2px 0 0; font-size: 1.25rem; color: #1c2430;">"Milano, Lombardia"</h1>
                    <p style="margin: 2px 0 0; font-size: 0.78rem; color: #8a8578;">{trail_count} " sentieri"</p>
                </div>
                <button type="button" style="background: none; border: 1px solid #d4cfc4; border-radius: 16px; padding: 5px 14px; font-size: 0.78rem; color: #1c2430; cursor: pointer;">
                    "Condividi"
                </button>
            </div>
            <div style="padding: 10px 20px; border-bottom: 1px solid #e2ded6; display: flex; flex-wrap: wrap; gap: 6px;">
                {FILTER_LABELS
                    .iter()
                    .map(|label| {
                        view! {
                            <button type="button" style="background: #f1efe9; border: 1px solid #e2ded6; border-radius: 14px; padding: 4px 12px; font-size: 0.74rem; color: #4a4639; cursor: pointer;">
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
                <button type="button" style="background: none; border: none; font-size: 0.74rem; color: #2d6a4f; cursor: pointer; text-decoration: underline;">
                    "Altri filtri"
                </button>
            </div>
            <div data-trail-list="" class="scrollbar-thin" style="flex: 1; overflow-y: auto; padding: 14px 16px; display: flex; flex-direction: column; gap: 14px;">
                {trails
                    .into_iter()
                    .map(|trail| view! { <TrailCard trail /> })
                    .collect_view()}
            </div>
        </aside>
    }
}

/// One selectable trail card. Pointer-enter, focus, and click all move the
/// selection to this trail.
#[component]
fn TrailCard(trail: Trail) -> impl IntoView {
    let ActiveTrail(active_trail) = expect_context();

    let card_id = card_element_id(&trail.id);
    let is_active = Memo::new({
        let id = trail.id.clone();
        move |_| active_trail.get() == id
    });

    let select_on_enter = {
        let id = trail.id.clone();
        move |_: leptos::ev::MouseEvent| active_trail.set(id.clone())
    };
    let select_on_focus = {
        let id = trail.id.clone();
        move |_: leptos::ev::FocusEvent| active_trail.set(id.clone())
    };
    let select_on_click = {
        let id = trail.id.clone();
        move |_: leptos::ev::MouseEvent| active_trail.set(id.clone())
    };

    let card_style = move || {
        if is_active.get() {
            "border: 2px solid #ff6a00; background: #fff; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 6px 18px rgba(255,106,0,0.18);"
        } else {
            "border: 1px solid #e2ded6; background: #fff; border-radius: 12px; overflow: hidden; cursor: pointer; box-shadow: 0 2px 8px rgba(28,36,48,0.06);"
        }
    };

    view! {
        <article
            id=card_id
            data-trail-id=trail.id.clone()
            role="button"
            tabindex="0"
            style=card_style
            on:mouseenter=select_on_enter
            on:focus=select_on_focus
            on:click=select_on_click
        >
            <div style="height: 140px; overflow: hidden;">
                <img
                    src=trail.cover_image.clone()
                    alt=trail.name.clone()
                    loading="lazy"
                    style="width: 100%; height: 100%; object-fit: cover; display: block;"
                />
            </div>
            <div style="padding: 12px 14px 14px;">
                <div style="display: flex; justify-content: space-between; align-items: baseline; gap: 8px;">
                    <h2 style="margin: 0; font-size: 0.95rem; color: #1c2430;">{trail.name.clone()}</h2>
                    <span style="font-size: 0.8rem; color: #1c2430; white-space: nowrap;">
                        "⭐ " {format_rating(trail.rating)}
                        <span style="color: #8a8578;">" (" {trail.reviews} ")"</span>
                    </span>
                </div>
                <p style="margin: 3px 0 0; font-size: 0.78rem; color: #8a8578;">{trail.location.clone()}</p>
                <div style="display: flex; gap: 6px; margin-top: 8px; font-size: 0.72rem; color: #4a4639;">
                    <span style="background: #f1efe9; border-radius: 10px; padding: 2px 8px;">{format_distance(trail.distance_km)}</span>
                    <span style="background: #f1efe9; border-radius: 10px; padding: 2px 8px;">{trail.difficulty.label()}</span>
                    <span style="background: #f1efe9; border-radius: 10px; padding: 2px 8px;">{trail.duration.clone()}</span>
                </div>
                <ul style="margin: 8px 0 0; padding: 0; list-style: none; display: flex; flex-wrap: wrap; gap: 6px; font-size: 0.7rem; color: #2d6a4f;">
                    {trail
                        .highlights
                        .iter()
                        .map(|tag| view! { <li style="border: 1px solid #cfe3d4; border-radius: 10px; padding: 1px 8px;">{tag.clone()}</li> })
                        .collect_view()}
                </ul>
            </div>
        </article>
    }
}
