//! Diagnostics overlay: connectivity indicator and local-data purge.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::store;

#[cfg(test)]
#[path = "system_panel_test.rs"]
mod system_panel_test;

fn connection_label(online: bool) -> &'static str {
    if online { "ONLINE" } else { "OFFLINE" }
}

fn is_online() -> bool {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().is_some_and(|w| w.navigator().on_line())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        true
    }
}

/// System panel overlay, visible while `UiState::system_panel_open` is set.
#[component]
pub fn SystemPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let purged = RwSignal::new(false);

    let on_close = move |_| ui.update(|u| u.system_panel_open = false);
    let on_purge = move |_| {
        store::purge_all();
        purged.set(true);
    };

    view! {
        <Show when=move || ui.get().system_panel_open>
            <div class="system-panel">
                <div class="system-panel__header">
                    <span class="system-panel__title">"System"</span>
                    <button class="btn system-panel__close" on:click=on_close>"Close"</button>
                </div>

                <div class="system-panel__row">
                    <span class="system-panel__label">"Connection"</span>
                    <span class="system-panel__value">{connection_label(is_online())}</span>
                </div>

                <div class="system-panel__row">
                    <span class="system-panel__label">"Local data"</span>
                    <button class="btn btn--danger" on:click=on_purge>"Purge cache"</button>
                    <Show when=move || purged.get()>
                        <span class="system-panel__value">"Cleared"</span>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
