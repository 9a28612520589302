use system_ui::{Dock, DockButton, IconName};

use super::*;

#[component]
pub(super) fn DesktopDock() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let assistant_open = Signal::derive(move || state.with(|s| s.assistant_open));
    let entries = move || {
        state.with(|s| {
            let running = s.registry.windows().iter().map(|w| w.app_id.as_str());
            apps::dock_apps(s.registry.catalog(), running)
        })
    };

    view! {
        <Dock aria_label="Dock">
            <DockButton
                icon=IconName::Sparkle
                label="AI Assistant"
                running=assistant_open
                active=assistant_open
                on_click=Callback::new(move |_| {
                    runtime.dispatch_action(DesktopAction::ToggleAssistant);
                })
            />
            <For each=entries key=|entry| entry.app_id let:entry>
                <DockAppButton app_id=entry.app_id icon=entry.icon name=entry.name />
            </For>
        </Dock>
    }
}

#[component]
fn DockAppButton(app_id: &'static str, icon: &'static str, name: &'static str) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let state = runtime.state;

    let running = Signal::derive(move || {
        state.with(|s| s.registry.windows_by_app(app_id).next().is_some())
    });
    let active = Signal::derive(move || {
        state.with(|s| {
            s.registry
                .active_window_id()
                .and_then(|id| s.registry.window(id))
                .is_some_and(|window| window.app_id.as_str() == app_id)
        })
    });

    view! {
        <DockButton
            icon=IconName::from_token(icon)
            label=name
            running=running
            active=active
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(DesktopAction::ActivateApp {
                    app_id: app_id.to_string(),
                    viewport: runtime.viewport(),
                });
            })
        />
    }
}
