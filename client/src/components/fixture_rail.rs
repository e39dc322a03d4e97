//! Vertical rail of fixture buttons plus the freehand drawing button.
//!
//! DESIGN
//! ======
//! Keeps active-tool switching centralized so the canvas host can treat the
//! armed fixture as state, not direct DOM coupling.

use leptos::prelude::*;

use crate::state::ui::{ToolType, UiState};
use crate::util::catalog::{self, Category, CatalogEntry};

/// Fixture buttons grouped by category.
#[component]
pub fn FixtureRail() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let render_button = move |entry: &'static CatalogEntry| {
        let button = entry.button;
        let is_active = move || ui.get().is_active(button);
        let on_click = move |_ev: leptos::ev::MouseEvent| ui.update(|u| u.toggle_fixture(button));
        view! {
            <button
                class="fixture-rail__btn ui-tooltip"
                class:fixture-rail__btn--active=is_active
                title=entry.label
                attr:data-tooltip=entry.label
                on:click=on_click
            >
                <img src=entry.image alt=entry.label/>
            </button>
        }
    };

    let render_section = move |category: Category| {
        view! {
            <section class="fixture-rail__section">
                <h3 class="fixture-rail__title">{category.title()}</h3>
                {catalog::entries(category).map(render_button).collect::<Vec<_>>()}
            </section>
        }
    };

    let drawing = move || ui.get().tool == ToolType::Draw;
    let on_draw = move |_ev: leptos::ev::MouseEvent| ui.update(|u| u.tool = ToolType::Draw);

    view! {
        <nav class="fixture-rail">
            <section class="fixture-rail__section">
                <h3 class="fixture-rail__title">"Outline"</h3>
                <button
                    class="fixture-rail__btn ui-tooltip"
                    class:fixture-rail__btn--active=drawing
                    title="Draw floor plan"
                    attr:data-tooltip="Draw floor plan"
                    on:click=on_draw
                >
                    <img src=catalog::DRAW_ICON alt="Draw floor plan"/>
                </button>
            </section>
            {Category::ALL.into_iter().map(render_section).collect::<Vec<_>>()}
        </nav>
    }
}
