use super::*;

#[component]
/// Vertical or horizontal flex stack.
pub fn Stack(
    #[prop(optional)] horizontal: bool,
    #[prop(optional)] gap: LayoutGap,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-stack", layout_class)
            data-ui-primitive="true"
            data-ui-kind="stack"
            data-ui-direction=if horizontal { "row" } else { "column" }
            data-ui-gap=gap.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Toolbar row at the top of an app surface.
pub fn ToolBar(
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-toolbar", layout_class)
            role="toolbar"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="toolbar"
        >
            {children()}
        </div>
    }
}

#[component]
/// Titled content section.
pub fn Panel(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class=merge_layout_class("ui-panel", layout_class)
            data-ui-primitive="true"
            data-ui-kind="panel"
        >
            {title.map(|title| view! { <h3 class="ui-panel-title">{title}</h3> })}
            {children()}
        </section>
    }
}

#[component]
/// Placeholder shown when a list or view has nothing to display.
pub fn EmptyState(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(into)] message: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-empty-state", layout_class)
            data-ui-primitive="true"
            data-ui-kind="empty-state"
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg /> })}
            <p>{message}</p>
        </div>
    }
}
