use desktop_app_contract::AppServices;
use system_ui::{
    IconName, ResizeHandle, WindowBody, WindowControlButton, WindowControls, WindowFrame,
    WindowTitle, WindowTitleBar,
};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use super::*;
use crate::model::{ResizeEdge, Viewport, WindowRecord};

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn is_primary_press(ev: &web_sys::PointerEvent) -> bool {
    if ev.pointer_type() == "mouse" {
        ev.button() == 0
    } else {
        ev.is_primary()
    }
}

#[component]
pub(super) fn DesktopWindow(
    window_id: WindowId,
    viewport: RwSignal<Viewport>,
    services: AppServices,
) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let window = create_memo(move |_| state.with(|s| s.registry.window(window_id).cloned()));
    let flag = move |read: fn(&WindowRecord) -> bool| {
        Signal::derive(move || window.with(|w| w.as_ref().is_some_and(read)))
    };
    let focused = flag(|w| w.is_active);
    let minimized = flag(WindowRecord::is_minimized);
    let maximized = flag(WindowRecord::is_maximized);
    let snapped = flag(WindowRecord::is_snapped);
    let resizable = flag(WindowRecord::can_resize);
    let title = Signal::derive(move || {
        window.with(|w| w.as_ref().map(|w| w.title.clone()).unwrap_or_default())
    });
    let style = Signal::derive(move || {
        let config = state.with(|s| *s.registry.config());
        window.with(|w| {
            w.as_ref()
                .map(|w| geometry::window_frame_style(w, viewport.get(), &config))
                .unwrap_or_default()
        })
    });

    let (icon, contents) = state.with_untracked(|s| match s.registry.window(window_id) {
        Some(record) => (
            IconName::from_token(&record.icon),
            apps::render_window_contents(record, s.registry.catalog(), services),
        ),
        None => (IconName::App, ().into_view()),
    });

    let focus = Callback::new(move |ev: web_sys::PointerEvent| {
        if is_primary_press(&ev) {
            runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
        }
    });
    let begin_move = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginMove {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
            viewport: runtime.viewport(),
        });
    });
    let titlebar_double_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::TitleBarDoubleClick { window_id });
    });
    let close = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    });
    let minimize = Callback::new(move |_| {
        runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
    });
    let toggle_maximize = Callback::new(move |_| {
        if maximized.get_untracked() || snapped.get_untracked() {
            runtime.dispatch_action(DesktopAction::RestoreWindow { window_id });
        } else {
            runtime.dispatch_action(DesktopAction::MaximizeWindow { window_id });
        }
    });
    let restorable = move || maximized.get() || snapped.get();

    view! {
        <WindowFrame
            style=style
            aria_label=title
            focused=focused
            minimized=minimized
            maximized=maximized
            snapped=snapped
            on_pointerdown=focus
        >
            <WindowTitleBar on_pointerdown=begin_move on_dblclick=titlebar_double_click>
                <WindowControls>
                    <WindowControlButton
                        icon=IconName::Close
                        ui_slot="close"
                        aria_label="Close"
                        on_click=close
                    />
                    <WindowControlButton
                        icon=IconName::Minimize
                        ui_slot="minimize"
                        aria_label="Minimize"
                        on_click=minimize
                    />
                    {move || {
                        let (icon, label) = if restorable() {
                            (IconName::Restore, "Restore")
                        } else {
                            (IconName::Maximize, "Maximize")
                        };
                        view! {
                            <WindowControlButton
                                icon=icon
                                ui_slot="maximize"
                                aria_label=label
                                on_click=toggle_maximize
                            />
                        }
                    }}
                </WindowControls>
                <WindowTitle icon=icon title=title />
            </WindowTitleBar>
            <WindowBody>{contents}</WindowBody>
            <Show when=move || resizable.get()>
                {ResizeEdge::ALL
                    .into_iter()
                    .map(|edge| view! { <WindowResizeGrip window_id=window_id edge=edge /> })
                    .collect_view()}
            </Show>
        </WindowFrame>
    }
}

#[component]
fn WindowResizeGrip(window_id: WindowId, edge: ResizeEdge) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointerdown = Callback::new(move |ev: web_sys::PointerEvent| {
        if !is_primary_press(&ev) {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            edge,
            pointer: pointer_from_pointer_event(&ev),
        });
    });

    view! { <ResizeHandle edge=edge.token() on_pointerdown=on_pointerdown /> }
}
