use super::*;

#[component]
/// Root desktop shell primitive.
pub fn DesktopRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] theme: MaybeSignal<String>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] dragging: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id=id
            class=merge_layout_class("desktop-shell", layout_class)
            style=move || style.get()
            data-theme=move || theme.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-root"
            data-ui-dragging=move || bool_token(dragging.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop wallpaper and backdrop host.
pub fn DesktopBackdrop(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("desktop-backdrop", layout_class)
            style=move || style.get()
            data-ui-primitive="true"
            data-ui-kind="desktop-backdrop"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon grid.
pub fn DesktopIconGrid(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-desktop-icon-grid", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// Desktop icon launcher. Opens on double click, selects on single click.
pub fn DesktopIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] selected: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-desktop-icon-button", layout_class)
            title=label.clone()
            aria-label=label.clone()
            data-ui-primitive="true"
            data-ui-kind="desktop-icon-button"
            data-ui-selected=move || bool_token(selected.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Lg />
            <span class="ui-desktop-icon-label">{label}</span>
        </button>
    }
}

#[component]
/// Window stack host.
pub fn DesktopWindowLayer(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-layer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="desktop-window-layer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Shared window frame primitive.
pub fn WindowFrame(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] style: MaybeSignal<String>,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional, into)] focused: MaybeSignal<bool>,
    #[prop(optional, into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] maximized: MaybeSignal<bool>,
    #[prop(optional, into)] snapped: MaybeSignal<bool>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-window-frame", layout_class)
            style=move || style.get()
            role="dialog"
            aria-label=move || aria_label.get()
            data-ui-primitive="true"
            data-ui-kind="window-frame"
            data-ui-focused=move || bool_token(focused.get())
            data-ui-minimized=move || bool_token(minimized.get())
            data-ui-maximized=move || bool_token(maximized.get())
            data-ui-snapped=move || bool_token(snapped.get())
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        >
            {children()}
        </section>
    }
}

#[component]
/// Shared window titlebar primitive.
pub fn WindowTitleBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
    #[prop(optional)] on_dblclick: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header
            class=merge_layout_class("ui-window-titlebar", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-titlebar"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
            on:dblclick=move |ev| {
                if let Some(on_dblclick) = on_dblclick.as_ref() {
                    on_dblclick.call(ev);
                }
            }
        >
            {children()}
        </header>
    }
}

#[component]
/// Icon and title text group inside the titlebar.
pub fn WindowTitle(icon: IconName, #[prop(into)] title: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div class="ui-window-title" data-ui-primitive="true" data-ui-kind="window-title">
            <Icon icon size=IconSize::Sm />
            <span>{move || title.get()}</span>
        </div>
    }
}

#[component]
/// Shared titlebar controls row.
pub fn WindowControls(children: Children) -> impl IntoView {
    view! {
        <div class="ui-window-controls" data-ui-primitive="true" data-ui-kind="window-controls">
            {children()}
        </div>
    }
}

#[component]
/// Titlebar control button. Swallows pointerdown so it never starts a drag.
pub fn WindowControlButton(
    icon: IconName,
    ui_slot: &'static str,
    #[prop(optional, into)] aria_label: MaybeSignal<String>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let title = aria_label.clone();

    view! {
        <button
            type="button"
            class="ui-window-control"
            aria-label=move || aria_label.get()
            title=move || title.get()
            data-ui-primitive="true"
            data-ui-kind="window-control"
            data-ui-slot=ui_slot
            on:pointerdown=move |ev: web_sys::PointerEvent| ev.stop_propagation()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Sm />
        </button>
    }
}

#[component]
/// Shared window body primitive.
pub fn WindowBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-window-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="window-body"
        >
            {children()}
        </div>
    }
}

#[component]
/// Resize grip for one edge or corner (`n`, `se`, ...).
pub fn ResizeHandle(
    edge: &'static str,
    #[prop(optional)] on_pointerdown: Option<Callback<web_sys::PointerEvent>>,
) -> impl IntoView {
    view! {
        <div
            class="ui-resize-handle"
            data-ui-primitive="true"
            data-ui-kind="resize-handle"
            data-ui-slot=edge
            aria-hidden="true"
            on:pointerdown=move |ev| {
                if let Some(on_pointerdown) = on_pointerdown.as_ref() {
                    on_pointerdown.call(ev);
                }
            }
        ></div>
    }
}

#[component]
/// Translucent overlay marking where a dragged window will snap.
pub fn SnapPreview(#[prop(into)] style: MaybeSignal<String>) -> impl IntoView {
    view! {
        <div
            class="ui-snap-preview"
            style=move || style.get()
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="snap-preview"
        ></div>
    }
}

#[component]
/// Top status bar.
pub fn StatusBar(children: Children) -> impl IntoView {
    view! {
        <header class="ui-status-bar" data-ui-primitive="true" data-ui-kind="status-bar">
            {children()}
        </header>
    }
}

#[component]
/// Left/center/right region of the status bar.
pub fn StatusBarSection(ui_slot: &'static str, children: Children) -> impl IntoView {
    view! {
        <div
            class="ui-status-bar-section"
            data-ui-primitive="true"
            data-ui-kind="status-bar-section"
            data-ui-slot=ui_slot
        >
            {children()}
        </div>
    }
}

#[component]
/// Bottom dock.
pub fn Dock(#[prop(optional, into)] aria_label: Option<String>, children: Children) -> impl IntoView {
    view! {
        <nav
            class="ui-dock"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="dock"
        >
            {children()}
        </nav>
    }
}

#[component]
/// Dock launcher with a running indicator.
pub fn DockButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional, into)] running: MaybeSignal<bool>,
    #[prop(optional, into)] active: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-dock-button"
            title=label.clone()
            aria-label=label
            data-ui-primitive="true"
            data-ui-kind="dock-button"
            data-ui-running=move || bool_token(running.get())
            data-ui-active=move || bool_token(active.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <Icon icon size=IconSize::Lg />
            <Show when=move || running.get()>
                <span class="ui-dock-indicator" aria-hidden="true"></span>
            </Show>
        </button>
    }
}
