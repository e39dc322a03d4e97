//! Collapsible panel explaining the editor's mouse and keyboard gestures.

use leptos::prelude::*;

use crate::state::ui::UiState;

const TIPS: &[(&str, &str)] = &[
    ("Place", "Pick a room, desk or chair, then click the canvas once."),
    ("Outline", "Press the outline button and click the corners; click the first corner again to close."),
    ("Select", "Click a shape, shift-click to add or remove, or drag a box around several."),
    ("Move", "Drag any selected shape to move the whole selection."),
    ("Clone", "Copies the selection 200px to the right."),
    ("Delete", "Delete or Backspace removes the selection; Escape cancels."),
];

/// Tips panel; rendered only while `tips_open` is set.
#[component]
pub fn TipsPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <Show when=move || ui.get().tips_open>
            <aside class="tips-panel">
                <h2 class="tips-panel__title">"Tips"</h2>
                <dl class="tips-panel__list">
                    {TIPS
                        .iter()
                        .map(|(term, text)| {
                            view! {
                                <dt>{*term}</dt>
                                <dd>{*text}</dd>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
            </aside>
        </Show>
    }
}
