//! Root application component with context providers and page layout.

use leptos::prelude::*;

use crate::components::{
    canvas_host::CanvasHost, fixture_rail::FixtureRail, status_bar::StatusBar, tips_panel::TipsPanel,
    toolbar::Toolbar,
};
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Root application component.
///
/// Provides the shared UI state and lays out the editor around the canvas.
#[component]
pub fn App() -> impl IntoView {
    let dark = dark_mode::read_preference();
    dark_mode::apply(dark);

    let ui = RwSignal::new(UiState { dark_mode: dark, ..UiState::default() });
    provide_context(ui);

    view! {
        <div class="editor" class:editor--tips-open=move || ui.get().tips_open>
            <Toolbar/>
            <div class="editor__body">
                <FixtureRail/>
                <main class="editor__stage">
                    <CanvasHost/>
                </main>
                <TipsPanel/>
            </div>
            <StatusBar/>
        </div>
    }
}
