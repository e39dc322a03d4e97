//! Bottom status bar showing the armed tool and the shape count.

#[cfg(test)]
#[path = "status_bar_test.rs"]
mod status_bar_test;

use leptos::prelude::*;

use crate::state::ui::{ToolType, UiState};
use crate::util::catalog;

/// Status bar at the bottom of the editor.
#[component]
pub fn StatusBar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let tool = move || tool_label(ui.get().tool);
    let shapes = move || shape_count_label(ui.get().shape_count);

    view! {
        <div class="status-bar">
            <span class="status-bar__item">{tool}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__item">{shapes}</span>
        </div>
    }
}

fn tool_label(tool: ToolType) -> String {
    match tool {
        ToolType::Select => "Select".to_owned(),
        ToolType::Draw => "Drawing outline".to_owned(),
        ToolType::Place(button) => {
            let label = catalog::lookup(button).map_or("fixture", |e| e.label);
            format!("Placing {label}")
        }
    }
}

fn shape_count_label(count: usize) -> String {
    match count {
        1 => "1 shape".to_owned(),
        n => format!("{n} shapes"),
    }
}
