use leptos::prelude::*;

const NAV_LABELS: [&str; 4] = ["Esplora", "Piani", "Community", "Crea mappa"];

/// Fixed header: brand, decorative search, primary navigation, account
/// actions. Presentation only; the brand links back to the landing page.
#[component]
pub fn Topbar() -> impl IntoView {
    view! {
        <header style="position: absolute; top: 0; left: 0; right: 0; height: 64px; z-index: 15; background: #fbfaf8; border-bottom: 1px solid #e2ded6; display: flex; align-items: center; gap: 18px; padding: 0 20px;">
            <a href="/" style="display: flex; align-items: center; gap: 8px; text-decoration: none;">
                <span aria-hidden="true" style="width: 26px; height: 26px; border-radius: 8px; background: #2d6a4f; display: inline-block;"></span>
                <span style="font-weight: 700; font-size: 1.05rem; color: #1c2430;">"Sentiero"</span>
            </a>
            <div style="flex: 1; max-width: 420px; position: relative;">
                <span aria-hidden="true" style="position: absolute; left: 12px; top: 50%; transform: translateY(-50%); font-size: 0.85rem;">"🔍"</span>
                <input
                    type="search"
                    placeholder="Cerca sentieri, parchi o città"
                    aria-label="Cerca"
                    style="width: 100%; padding: 8px 12px 8px 34px; border: 1px solid #e2ded6; border-radius: 18px; background: #f1efe9; font-size: 0.85rem; outline: none;"
                />
            </div>
            <nav aria-label="Principale" style="display: flex; gap: 4px; margin-left: auto;">
                {NAV_LABELS
                    .iter()
                    .map(|label| {
                        view! {
                            <button type="button" style="background: none; border: none; padding: 8px 10px; font-size: 0.85rem; color: #4a4639; cursor: pointer;">
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </nav>
            <div style="display: flex; gap: 8px;">
                <button type="button" style="background: none; border: 1px solid #d4cfc4; border-radius: 18px; padding: 7px 16px; font-size: 0.82rem; color: #1c2430; cursor: pointer;">
                    "Accedi"
                </button>
                <button type="button" style="background: #2d6a4f; border: none; border-radius: 18px; padding: 7px 16px; font-size: 0.82rem; color: #fff; cursor: pointer;">
                    "Registrati"
                </button>
            </div>
        </header>
    }
}
