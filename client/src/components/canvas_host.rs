//! Bridge component between Leptos state and the imperative `canvas::Engine`.
//!
//! ARCHITECTURE
//! ============
//! The canvas crate owns shapes, gestures and drawing while this host maps
//! DOM events and toolbar state into engine operations and mirrors the
//! resulting actions back into `UiState`.

use leptos::prelude::*;

use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::util::canvas_input::{
    map_button, map_modifiers, map_tool, pointer_point, should_prevent_default_key, tool_from_canvas,
};

#[cfg(feature = "csr")]
use std::cell::RefCell;
#[cfg(feature = "csr")]
use std::rc::Rc;

#[cfg(feature = "csr")]
use canvas::engine::{Action, Engine};
#[cfg(feature = "csr")]
use canvas::input::Key as CanvasKey;
#[cfg(feature = "csr")]
use canvas::theme::Theme;
#[cfg(feature = "csr")]
use js_sys::Date;
#[cfg(feature = "csr")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "csr")]
fn render_and_track(engine: &Engine) {
    let started_ms = Date::now();
    if let Err(err) = engine.render() {
        log::warn!("canvas render failed: {err:?}");
        return;
    }
    log::trace!("canvas rendered in {:.2}ms", (Date::now() - started_ms).max(0.0));
}

#[cfg(feature = "csr")]
fn request_render(engine: &Rc<RefCell<Option<Engine>>>, raf_pending: RwSignal<bool>) {
    if raf_pending.get_untracked() {
        return;
    }
    raf_pending.set(true);

    let Some(window) = web_sys::window() else {
        raf_pending.set(false);
        if let Some(engine) = engine.borrow().as_ref() {
            render_and_track(engine);
        }
        return;
    };

    let engine_for_cb = Rc::clone(engine);
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        raf_pending.set(false);
        if let Some(engine) = engine_for_cb.borrow().as_ref() {
            render_and_track(engine);
        }
        holder_for_cb.borrow_mut().take();
    }) as Box<dyn FnMut(f64)>);

    if window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .is_ok()
    {
        *holder.borrow_mut() = Some(cb);
    } else {
        raf_pending.set(false);
        if let Some(engine) = engine.borrow().as_ref() {
            render_and_track(engine);
        }
    }
}

/// Push the canvas' page offset and the device pixel ratio into the engine.
#[cfg(feature = "csr")]
fn sync_viewport(engine: &mut Engine, canvas_ref: &NodeRef<leptos::html::Canvas>) {
    let Some(canvas) = canvas_ref.get_untracked() else {
        return;
    };
    let rect = canvas.get_bounding_client_rect();
    let dpr = web_sys::window().map_or(1.0, |w| w.device_pixel_ratio());
    if let Err(err) = engine.set_viewport(rect.left(), rect.top(), dpr) {
        log::warn!("canvas viewport update failed: {err:?}");
    }
}

#[cfg(feature = "csr")]
fn engine_theme(dark_mode: bool) -> Theme {
    if dark_mode { Theme::Dark } else { Theme::Light }
}

/// Canvas host component.
///
/// On mount this creates `canvas::engine::Engine` on a fixed 1600×800 canvas,
/// forwards pointer and key events to it, and keeps the toolbar in sync.
#[component]
pub fn CanvasHost() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
    #[cfg(feature = "csr")]
    let render_raf_pending = RwSignal::new(false);
    #[cfg(feature = "csr")]
    let last_delete_seq = RwSignal::new(0_u64);
    #[cfg(feature = "csr")]
    let last_clone_seq = RwSignal::new(0_u64);
    #[cfg(feature = "csr")]
    let engine = Rc::new(RefCell::new(None::<Engine>));

    #[cfg(not(feature = "csr"))]
    let _ = ui;

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        let canvas_ref_mount = canvas_ref;
        Effect::new(move || {
            let Some(canvas) = canvas_ref_mount.get() else {
                return;
            };
            if engine.borrow().is_some() {
                return;
            }

            let mut instance = match Engine::new(canvas) {
                Ok(instance) => instance,
                Err(err) => {
                    log::error!("canvas engine failed to start: {err:?}");
                    return;
                }
            };
            sync_viewport(&mut instance, &canvas_ref_mount);
            instance.set_theme(engine_theme(ui.get_untracked().dark_mode));
            render_and_track(&instance);
            log::info!("canvas engine mounted");
            *engine.borrow_mut() = Some(instance);
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let tool = map_tool(ui.get().tool);
            let mut should_render = false;
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if engine.core.tool() != tool {
                    let actions = engine.set_tool(tool);
                    should_render = process_actions(actions, engine, ui, canvas_ref);
                }
            }
            if should_render {
                request_render(&engine, render_raf_pending);
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let theme = engine_theme(ui.get().dark_mode);
            let mut should_render = false;
            if let Some(engine) = engine.borrow_mut().as_mut() {
                if engine.core.theme() != theme {
                    let actions = engine.set_theme(theme);
                    should_render = process_actions(actions, engine, ui, canvas_ref);
                }
            }
            if should_render {
                request_render(&engine, render_raf_pending);
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let seq = ui.get().delete_seq;
            if seq == last_delete_seq.get_untracked() {
                return;
            }
            last_delete_seq.set(seq);
            let mut should_render = false;
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.remove_selected();
                should_render = process_actions(actions, engine, ui, canvas_ref);
            }
            if should_render {
                request_render(&engine, render_raf_pending);
            }
        });
    }

    #[cfg(feature = "csr")]
    {
        let engine = Rc::clone(&engine);
        Effect::new(move || {
            let seq = ui.get().clone_seq;
            if seq == last_clone_seq.get_untracked() {
                return;
            }
            last_clone_seq.set(seq);
            let mut should_render = false;
            if let Some(engine) = engine.borrow_mut().as_mut() {
                let actions = engine.clone_selected();
                should_render = process_actions(actions, engine, ui, canvas_ref);
            }
            if should_render {
                request_render(&engine, render_raf_pending);
            }
        });
    }

    let on_pointer_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                ev.prevent_default();
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.focus();
                    let _ = canvas.set_pointer_capture(ev.pointer_id());
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    sync_viewport(engine, &canvas_ref);
                    let button = map_button(ev.button());
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = engine.on_pointer_down(pointer_point(&ev), button, modifiers);
                    if process_actions(actions, engine, ui, canvas_ref) {
                        render_and_track(engine);
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_move = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                let mut should_render = false;
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = engine.on_pointer_move(pointer_point(&ev), modifiers);
                    should_render = process_actions(actions, engine, ui, canvas_ref);
                }
                if should_render {
                    request_render(&engine, render_raf_pending);
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_pointer_up = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::PointerEvent| {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    let _ = canvas.release_pointer_capture(ev.pointer_id());
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let button = map_button(ev.button());
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = engine.on_pointer_up(pointer_point(&ev), button, modifiers);
                    if process_actions(actions, engine, ui, canvas_ref) {
                        render_and_track(engine);
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::PointerEvent| {}
        }
    };

    let on_key_down = {
        #[cfg(feature = "csr")]
        {
            let engine = Rc::clone(&engine);
            move |ev: leptos::ev::KeyboardEvent| {
                let key = ev.key();
                if should_prevent_default_key(&key) {
                    ev.prevent_default();
                }
                if let Some(engine) = engine.borrow_mut().as_mut() {
                    let modifiers = map_modifiers(ev.shift_key(), ev.ctrl_key(), ev.alt_key(), ev.meta_key());
                    let actions = engine.on_key_down(&CanvasKey(key), modifiers);
                    if process_actions(actions, engine, ui, canvas_ref) {
                        render_and_track(engine);
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::KeyboardEvent| {}
        }
    };

    let on_context_menu = move |ev: leptos::ev::MouseEvent| ev.prevent_default();

    view! {
        <canvas
            class="canvas-host"
            node_ref=canvas_ref
            tabindex="0"
            on:pointerdown=on_pointer_down
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_up
            on:keydown=on_key_down
            on:contextmenu=on_context_menu
        >
            "Your browser does not support canvas."
        </canvas>
    }
}

/// Apply engine actions to UI state. Returns whether a redraw is needed.
#[cfg(feature = "csr")]
fn process_actions(
    actions: Vec<Action>,
    engine: &Engine,
    ui: RwSignal<UiState>,
    canvas_ref: NodeRef<leptos::html::Canvas>,
) -> bool {
    let mut needs_render = false;
    let mut structure_changed = false;

    for action in actions {
        match action {
            Action::ObjectCreated(shape) => {
                log::debug!("shape created: {:?} {}", shape.kind, shape.id);
                structure_changed = true;
            }
            Action::ObjectDeleted { id } => {
                log::debug!("shape deleted: {id}");
                structure_changed = true;
            }
            Action::ObjectUpdated { id, .. } => {
                log::trace!("shape updated: {id}");
            }
            Action::SelectionChanged(ids) => {
                let has_selection = !ids.is_empty();
                if ui.get_untracked().has_selection != has_selection {
                    ui.update(|u| u.has_selection = has_selection);
                }
            }
            Action::ToolChanged(tool) => {
                let tool = tool_from_canvas(tool);
                if ui.get_untracked().tool != tool {
                    ui.update(|u| u.tool = tool);
                }
            }
            Action::ThemeChanged(theme) => {
                log::debug!("canvas theme: {theme:?}");
            }
            Action::SetCursor(cursor) => {
                if let Some(canvas) = canvas_ref.get_untracked() {
                    if let Err(err) = web_sys::HtmlElement::style(&canvas).set_property("cursor", &cursor) {
                        log::warn!("canvas cursor update failed: {err:?}");
                    }
                }
            }
            Action::RenderNeeded => needs_render = true,
        }
    }

    if structure_changed {
        let count = engine.shape_count();
        log::debug!("shape count: {count}");
        if ui.get_untracked().shape_count != count {
            ui.update(|u| u.shape_count = count);
        }
    }
    needs_render
}
