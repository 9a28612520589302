//! File explorer desktop app: browses the in-memory folder tree in [`vfs`].
//!
//! Each window owns its own [`vfs::ExplorerState`], so two explorers can sit in different folders.

pub mod vfs;

use leptos::*;
use system_ui::prelude::*;

use crate::vfs::{ExplorerState, FsNode, ViewMode};

const FAVORITES: [(&str, &str, IconName); 3] = [
    ("Documents", "documents", IconName::Folder),
    ("Downloads", "downloads", IconName::Folder),
    ("Desktop", "desktop", IconName::Folder),
];
const RECENT: [(&str, &str, IconName); 1] = [("Work", "work-folder", IconName::Folder)];
const FOLDERS: [(&str, &str, IconName); 4] = [
    ("Home", "root", IconName::Home),
    ("Documents", "documents", IconName::Folder),
    ("Pictures", "pictures", IconName::Photos),
    ("Music", "music", IconName::Music),
];

fn node_icon(node: &FsNode) -> IconName {
    match node.icon {
        "home" => IconName::Home,
        "folder" | "download" | "monitor" => IconName::Folder,
        "image" => IconName::Photos,
        "music" => IconName::Music,
        "text" => IconName::Notes,
        _ => IconName::Document,
    }
}

#[component]
pub fn ExplorerApp(window_id: u64) -> impl IntoView {
    let state = create_rw_signal(ExplorerState::default());

    let children = Signal::derive(move || state.with(ExplorerState::current_children));
    let view_mode = Signal::derive(move || state.with(ExplorerState::view_mode));
    let navigate = move |folder_id: &'static str| {
        state.update(|s| {
            s.navigate_to(folder_id);
        });
    };

    let sidebar_section = move |label: &'static str, entries: &[(&'static str, &'static str, IconName)]| {
        let buttons = entries
            .iter()
            .map(|&(name, folder_id, icon)| {
                view! {
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        leading_icon=icon
                        selected=Signal::derive(move || {
                            state.with(|s| s.current_folder().map(|f| f.id) == Some(folder_id))
                        })
                        on_click=Callback::new(move |_| navigate(folder_id))
                    >
                        {name}
                    </Button>
                }
            })
            .collect_view();
        view! {
            <div class="explorer-sidebar__section">
                <div class="explorer-sidebar__label">{label}</div>
                {buttons}
            </div>
        }
    };

    view! {
        <div class="app-shell app-explorer-shell" data-window-id=window_id.to_string()>
            <ToolBar aria_label="Explorer navigation">
                <IconButton icon=IconName::ArrowLeft aria_label="Back" disabled=true />
                <IconButton icon=IconName::ArrowRight aria_label="Forward" disabled=true />
                <IconButton
                    icon=IconName::ArrowUp
                    aria_label="Up"
                    disabled=Signal::derive(move || !state.with(ExplorerState::can_navigate_up))
                    on_click=Callback::new(move |_| {
                        state.update(|s| {
                            s.navigate_up();
                        });
                    })
                />
                <nav class="explorer-breadcrumbs" aria-label="Path">
                    {move || {
                        state
                            .with(ExplorerState::breadcrumbs)
                            .into_iter()
                            .map(|crumb| {
                                let folder_id = crumb.id;
                                view! {
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        size=ButtonSize::Sm
                                        on_click=Callback::new(move |_| navigate(folder_id))
                                    >
                                        {crumb.name}
                                    </Button>
                                }
                            })
                            .collect_view()
                    }}
                </nav>
                <IconButton
                    icon=IconName::Grid
                    aria_label="Grid view"
                    pressed=Signal::derive(move || view_mode.get() == ViewMode::Grid)
                    on_click=Callback::new(move |_| state.update(|s| s.set_view_mode(ViewMode::Grid)))
                />
                <IconButton
                    icon=IconName::List
                    aria_label="List view"
                    pressed=Signal::derive(move || view_mode.get() == ViewMode::List)
                    on_click=Callback::new(move |_| state.update(|s| s.set_view_mode(ViewMode::List)))
                />
            </ToolBar>

            <div class="explorer-workspace">
                <aside class="explorer-sidebar" aria-label="Places">
                    {sidebar_section("Favorites", &FAVORITES)}
                    {sidebar_section("Recent", &RECENT)}
                    {sidebar_section("Folders", &FOLDERS)}
                </aside>

                <section
                    class="explorer-pane"
                    data-view-mode=move || view_mode.get().token()
                    on:click=move |_| state.update(ExplorerState::clear_selection)
                >
                    <Show when=move || view_mode.get() == ViewMode::List>
                        <div class="explorer-list-header">
                            <span>"Name"</span>
                            <span>"Modified"</span>
                            <span>"Size"</span>
                        </div>
                    </Show>
                    <For each=move || children.get() key=|item| item.id let:item>
                        <ExplorerItem item=item state=state view_mode=view_mode />
                    </For>
                    <Show when=move || children.with(Vec::is_empty)>
                        <EmptyState icon=IconName::Folder message="This folder is empty" />
                    </Show>
                </section>
            </div>

            <div class="app-statusbar">
                <span>{move || format!("{} items", children.with(Vec::len))}</span>
                {move || {
                    let selected = state.with(|s| s.selected().len());
                    (selected > 0).then(|| view! { <span>{format!("{selected} selected")}</span> })
                }}
            </div>
        </div>
    }
}

#[component]
fn ExplorerItem(
    item: &'static FsNode,
    state: RwSignal<ExplorerState>,
    view_mode: Signal<ViewMode>,
) -> impl IntoView {
    let selected = Signal::derive(move || state.with(|s| s.is_selected(item.id)));
    let icon = node_icon(item);

    let on_click = Callback::new(move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        let multi = ev.ctrl_key() || ev.meta_key();
        state.update(|s| s.select(item.id, multi));
    });
    let on_dblclick = Callback::new(move |_| {
        if item.is_folder() {
            state.update(|s| {
                s.navigate_to(item.id);
            });
        }
    });

    view! {
        <Button
            variant=ButtonVariant::Quiet
            layout_class="explorer-item"
            selected=selected
            on_click=on_click
            on_dblclick=on_dblclick
        >
            <Icon icon=icon size=IconSize::Md />
            <span class="explorer-item__name">{item.name}</span>
            <Show when=move || view_mode.get() == ViewMode::List>
                <span class="explorer-item__modified">{item.modified.label()}</span>
                <span class="explorer-item__size">{item.size_label()}</span>
            </Show>
        </Button>
    }
}
