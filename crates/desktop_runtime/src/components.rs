//! Desktop shell UI composition and interaction surfaces.

mod assistant_panel;
mod dock;
mod window;

use std::time::Duration;

use desktop_app_contract::{wallpaper_css, ThemeMode};
use leptos::{leptos_dom::helpers::WindowListenerHandle, *};
use system_ui::{
    DesktopBackdrop, DesktopIconButton, DesktopIconGrid, DesktopRoot, DesktopWindowLayer,
    IconButton, IconName, SnapPreview, StatusBar, StatusBarSection,
};

use self::{assistant_panel::AssistantPanel, dock::DesktopDock, window::DesktopWindow};
use crate::{
    apps,
    geometry,
    model::{PointerPosition, WindowId},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the full desktop shell: status bar, icons, windows, snap preview, assistant, and dock.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;
    let viewport = create_rw_signal(runtime.viewport());
    let services = runtime.app_services();

    let resize_listener = window_event_listener(ev::resize, move |_| {
        viewport.set(runtime.viewport());
    });
    on_cleanup(move || resize_listener.remove());

    let gesture_listeners = store_value(None::<GestureListeners>);
    create_effect(move |_| {
        let active = runtime.interaction.with(|i| i.gesture_active());
        let installed = gesture_listeners.with_value(Option::is_some);
        match listener_change(installed, active) {
            ListenerChange::Attach => {
                gesture_listeners.set_value(Some(GestureListeners::attach(runtime)));
            }
            ListenerChange::Detach => {
                gesture_listeners.update_value(|listeners| {
                    if let Some(listeners) = listeners.take() {
                        listeners.remove();
                    }
                });
            }
            ListenerChange::Keep => {}
        }
    });
    on_cleanup(move || {
        gesture_listeners.try_update_value(|listeners| {
            if let Some(listeners) = listeners.take() {
                listeners.remove();
            }
        });
    });

    let theme = Signal::derive(move || state.with(|s| s.settings.theme.token().to_string()));
    let accent_style = Signal::derive(move || {
        state.with(|s| format!("--accent-color:{};", s.settings.accent_color))
    });
    let wallpaper_style = Signal::derive(move || {
        state.with(|s| format!("background:{};", wallpaper_css(&s.settings.wallpaper_id)))
    });
    let dragging = Signal::derive(move || runtime.interaction.with(|i| i.gesture_active()));
    let snap_preview_style = Signal::derive(move || {
        let zone = runtime.interaction.with(|i| i.snap_preview)?;
        let config = state.with(|s| *s.registry.config());
        Some(geometry::snap_zone_rect(zone, viewport.get(), &config).to_css())
    });
    let window_ids = move || {
        state.with(|s| {
            s.registry
                .windows()
                .iter()
                .map(|window| window.id)
                .collect::<Vec<WindowId>>()
        })
    };

    view! {
        <DesktopRoot id="desktop-shell-root" theme=theme style=accent_style dragging=dragging>
            <DesktopStatusBar />
            <DesktopBackdrop style=wallpaper_style>
                <DesktopIcons />
                <DesktopWindowLayer>
                    <For each=window_ids key=|window_id| window_id.0 let:window_id>
                        <DesktopWindow window_id=window_id viewport=viewport services=services />
                    </For>
                </DesktopWindowLayer>
                {move || {
                    snap_preview_style
                        .get()
                        .map(|style| view! { <SnapPreview style=style /> })
                }}
            </DesktopBackdrop>
            <AssistantPanel />
            <DesktopDock />
        </DesktopRoot>
    }
}

#[component]
fn DesktopStatusBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let clock_now = create_rw_signal(runtime.host.get_value().now());

    if let Ok(interval) = set_interval_with_handle(
        move || clock_now.set(runtime.host.get_value().now()),
        Duration::from_secs(1),
    ) {
        on_cleanup(move || interval.clear());
    }

    let theme = move || runtime.state.with(|s| s.settings.theme);

    view! {
        <StatusBar>
            <StatusBarSection ui_slot="brand">
                <span class="desktop-brand">"AIPC"</span>
            </StatusBarSection>
            <StatusBarSection ui_slot="clock">
                <span>{move || clock_now.get().format_short_date()}</span>
                <span>{move || clock_now.get().format_time()}</span>
            </StatusBarSection>
            <StatusBarSection ui_slot="tray">
                {move || {
                    let current = theme();
                    let icon = match current {
                        ThemeMode::Light => IconName::Moon,
                        ThemeMode::Dark => IconName::Sun,
                    };
                    view! {
                        <IconButton
                            icon=icon
                            aria_label=format!("Switch to {} mode", current.toggled().token())
                            on_click=Callback::new(move |_| {
                                runtime.dispatch_action(DesktopAction::ToggleTheme);
                            })
                        />
                    }
                }}
            </StatusBarSection>
        </StatusBar>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let selected = create_rw_signal(None::<&'static str>);
    let entries = runtime
        .state
        .with_untracked(|s| apps::desktop_icon_apps(s.registry.catalog()));

    view! {
        <DesktopIconGrid>
            {entries
                .into_iter()
                .map(|entry| {
                    let app_id = entry.app_id;
                    view! {
                        <DesktopIconButton
                            icon=IconName::from_token(entry.icon)
                            label=entry.name
                            selected=Signal::derive(move || selected.get() == Some(app_id))
                            on_click=Callback::new(move |_| selected.set(Some(app_id)))
                            on_dblclick=Callback::new(move |_| {
                                selected.set(None);
                                runtime.open_app(app_id);
                            })
                        />
                    }
                })
                .collect_view()}
        </DesktopIconGrid>
    }
}

/// Window-level pointer listeners that live only while a drag or resize gesture is active.
struct GestureListeners {
    pointer_move: WindowListenerHandle,
    pointer_up: WindowListenerHandle,
    pointer_cancel: WindowListenerHandle,
}

impl GestureListeners {
    fn attach(runtime: DesktopRuntimeContext) -> Self {
        let pointer_move = window_event_listener(ev::pointermove, move |ev| {
            let pointer = pointer_from_pointer_event(&ev);
            let interaction = runtime.interaction.get_untracked();
            if interaction.dragging.is_some() {
                runtime.dispatch_action(DesktopAction::UpdateMove {
                    pointer,
                    viewport: runtime.viewport(),
                });
            }
            if interaction.resizing.is_some() {
                runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
            }
        });
        let pointer_up = window_event_listener(ev::pointerup, move |_| {
            end_active_pointer_interaction(runtime);
        });
        let pointer_cancel = window_event_listener(ev::pointercancel, move |_| {
            end_active_pointer_interaction(runtime);
        });
        Self {
            pointer_move,
            pointer_up,
            pointer_cancel,
        }
    }

    fn remove(self) {
        self.pointer_move.remove();
        self.pointer_up.remove();
        self.pointer_cancel.remove();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListenerChange {
    Attach,
    Detach,
    Keep,
}

/// Listeners follow the gesture: installed when one starts, removed once it ends for any reason.
fn listener_change(installed: bool, gesture_active: bool) -> ListenerChange {
    match (installed, gesture_active) {
        (false, true) => ListenerChange::Attach,
        (true, false) => ListenerChange::Detach,
        _ => ListenerChange::Keep,
    }
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition::new(ev.client_x(), ev.client_y())
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.dragging.is_some() {
        runtime.dispatch_action(DesktopAction::EndMove {
            viewport: runtime.viewport(),
        });
    }
    if interaction.resizing.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
}


#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{DesktopState, InteractionState, ResizeEdge, Viewport};
    use crate::reducer::reduce_desktop;

    const VIEWPORT: Viewport = Viewport::new(1280, 800);

    fn begin_move(window_id: WindowId) -> DesktopAction {
        DesktopAction::BeginMove {
            window_id,
            pointer: PointerPosition::new(400, 120),
            viewport: VIEWPORT,
        }
    }

    fn begin_resize(window_id: WindowId) -> DesktopAction {
        DesktopAction::BeginResize {
            window_id,
            edge: ResizeEdge::SouthEast,
            pointer: PointerPosition::new(600, 500),
        }
    }

    /// Drives one gesture through the reducer and returns the listener changes seen at its start
    /// and after `exit`.
    fn listener_changes_for(
        begin: fn(WindowId) -> DesktopAction,
        exit: fn(WindowId) -> DesktopAction,
    ) -> (ListenerChange, ListenerChange) {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app_id: "notes".to_string(),
                viewport: VIEWPORT,
            },
        )
        .expect("open");
        let window_id = state.active_window_id().expect("active window");

        reduce_desktop(&mut state, &mut interaction, begin(window_id)).expect("begin");
        let started = listener_change(false, interaction.gesture_active());

        reduce_desktop(&mut state, &mut interaction, exit(window_id)).expect("exit");
        let ended = listener_change(true, interaction.gesture_active());
        (started, ended)
    }

    #[test]
    fn listener_change_tracks_gesture_activity() {
        assert_eq!(listener_change(false, true), ListenerChange::Attach);
        assert_eq!(listener_change(true, false), ListenerChange::Detach);
        assert_eq!(listener_change(true, true), ListenerChange::Keep);
        assert_eq!(listener_change(false, false), ListenerChange::Keep);
    }

    #[test]
    fn every_gesture_exit_detaches_listeners() {
        let cases: [(fn(WindowId) -> DesktopAction, fn(WindowId) -> DesktopAction); 5] = [
            (begin_move, |_| DesktopAction::EndMove { viewport: VIEWPORT }),
            (begin_resize, |_| DesktopAction::EndResize),
            (begin_move, |window_id| DesktopAction::MinimizeWindow { window_id }),
            (begin_resize, |window_id| DesktopAction::MinimizeWindow { window_id }),
            (begin_resize, |window_id| DesktopAction::CloseWindow { window_id }),
        ];

        for (begin, exit) in cases {
            assert_eq!(
                listener_changes_for(begin, exit),
                (ListenerChange::Attach, ListenerChange::Detach)
            );
        }
    }

    #[test]
    fn refused_gesture_never_attaches_listeners() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app_id: "notes".to_string(),
                viewport: VIEWPORT,
            },
        )
        .expect("open");
        let window_id = state.active_window_id().expect("active window");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::MaximizeWindow { window_id },
        )
        .expect("maximize");

        reduce_desktop(&mut state, &mut interaction, begin_move(window_id)).expect("begin");
        assert_eq!(
            listener_change(false, interaction.gesture_active()),
            ListenerChange::Keep
        );
    }
}
