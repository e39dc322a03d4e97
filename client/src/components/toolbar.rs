//! Top bar with the theme and tips toggles and the selection actions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Delete and clone only appear while the engine reports a selection; they
//! post requests through `UiState` counters instead of touching the engine.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Top toolbar of the editor.
#[component]
pub fn Toolbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_dark_toggle = move |_| {
        let next = dark_mode::toggle(ui.get_untracked().dark_mode);
        ui.update(|u| u.dark_mode = next);
    };
    let on_tips_toggle = move |_| ui.update(UiState::toggle_tips);
    let on_delete = move |_| ui.update(UiState::request_delete);
    let on_clone = move |_| ui.update(UiState::request_clone);

    view! {
        <div class="toolbar">
            <span class="toolbar__title">"Floor plan"</span>
            <span class="toolbar__divider"></span>

            <Show when=move || ui.get().has_selection>
                <button class="btn toolbar__action" on:click=on_clone title="Clone selection">
                    "Clone"
                </button>
                <button class="btn toolbar__action toolbar__action--danger" on:click=on_delete title="Delete selection">
                    "Delete"
                </button>
            </Show>

            <span class="toolbar__spacer"></span>

            <button
                class="btn toolbar__tips-toggle"
                class:toolbar__tips-toggle--active=move || ui.get().tips_open
                on:click=on_tips_toggle
                title="Show tips"
            >
                "?"
            </button>
            <button class="btn toolbar__dark-toggle" on:click=on_dark_toggle title="Toggle dark mode">
                {move || if ui.get().dark_mode { "☀" } else { "☾" }}
            </button>
        </div>
    }
}
