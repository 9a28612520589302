//! Built-in app catalog and hosted-app dispatch.

use desktop_app_browser::BrowserApp;
use desktop_app_contract::{AppCatalog, AppDescriptor, AppServices, WindowSize};
use desktop_app_explorer::ExplorerApp;
use desktop_app_notes::NotesApp;
use desktop_app_settings::SettingsApp;
use leptos::*;
use system_ui::prelude::*;

use crate::host::DesktopHostContext;
use crate::model::WindowRecord;

include!(concat!(env!("OUT_DIR"), "/app_catalog_generated.rs"));

/// Catalog of every app compiled into the shell.
pub fn builtin_catalog() -> AppCatalog {
    AppCatalog::new(BUILTIN_APPS)
}

/// What a window renders, resolved from its app id and catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostedApp {
    /// Virtual filesystem browser.
    FileExplorer,
    /// Multi-note editor.
    Notes,
    /// Iframe browser.
    Browser,
    /// Appearance settings.
    Settings,
    /// Launch card for an app that lives at an external URL.
    Cloud {
        /// Display name.
        name: &'static str,
        /// Target URL.
        url: &'static str,
    },
    /// Registered app without content yet.
    Placeholder {
        /// Display name.
        name: &'static str,
    },
    /// App id with no catalog entry.
    Unknown,
}

/// Resolves which hosted app a window for `app_id` shows.
pub fn resolve_hosted_app(catalog: &AppCatalog, app_id: &str) -> HostedApp {
    let Some(entry) = catalog.get(app_id) else {
        return HostedApp::Unknown;
    };
    if let Some(url) = entry.external_url {
        return HostedApp::Cloud {
            name: entry.name,
            url,
        };
    }
    match app_id {
        "file-explorer" => HostedApp::FileExplorer,
        "notes" => HostedApp::Notes,
        "browser" => HostedApp::Browser,
        "settings" => HostedApp::Settings,
        _ => HostedApp::Placeholder { name: entry.name },
    }
}

/// Apps shown as desktop icons, in grid order.
pub fn desktop_icon_apps(catalog: &AppCatalog) -> Vec<AppDescriptor> {
    let mut apps: Vec<AppDescriptor> = catalog
        .iter()
        .copied()
        .filter(|entry| entry.desktop_order.is_some())
        .collect();
    apps.sort_by_key(|entry| entry.desktop_order);
    apps
}

/// Dock contents: pinned apps in order, then running apps that are not pinned.
pub fn dock_apps<'a>(
    catalog: &AppCatalog,
    running: impl IntoIterator<Item = &'a str>,
) -> Vec<AppDescriptor> {
    let mut apps: Vec<AppDescriptor> = catalog
        .iter()
        .copied()
        .filter(|entry| entry.dock_order.is_some())
        .collect();
    apps.sort_by_key(|entry| entry.dock_order);

    for app_id in running {
        if apps.iter().any(|entry| entry.app_id == app_id) {
            continue;
        }
        if let Some(entry) = catalog.get(app_id) {
            apps.push(*entry);
        }
    }
    apps
}

/// Hero gradient colors for a cloud app card.
pub fn cloud_brand_colors(app_id: &str) -> (&'static str, &'static str) {
    match app_id {
        "google-docs" => ("#4285F4", "#174EA6"),
        "google-sheets" => ("#34A853", "#137333"),
        "google-slides" => ("#FBBC04", "#E37400"),
        "ms-word" => ("#2B579A", "#124078"),
        "ms-excel" => ("#217346", "#0E5C2F"),
        "ms-powerpoint" => ("#D24726", "#B7472A"),
        "figma" => ("#F24E1E", "#A259FF"),
        "notion" => ("#000000", "#191919"),
        "slack" => ("#4A154B", "#611f64"),
        "spotify" => ("#1DB954", "#158E3E"),
        _ => ("#007AFF", "#0056b3"),
    }
}

/// Selling points listed on a cloud app card.
pub fn cloud_features(app_id: &str) -> &'static [&'static str] {
    if app_id.starts_with("google-") {
        return &[
            "Real-time collaboration with others",
            "Automatic cloud saving",
            "Access from any device",
            "Integrates with Google Drive",
        ];
    }
    if app_id.starts_with("ms-") {
        return &[
            "Full Microsoft Office compatibility",
            "Real-time co-authoring",
            "Integrates with OneDrive",
            "Works across all your devices",
        ];
    }
    match app_id {
        "figma" => &[
            "Professional design tools in the browser",
            "Real-time collaboration",
            "Prototyping and design systems",
            "Export to multiple formats",
        ],
        "notion" => &[
            "All-in-one workspace",
            "Notes, docs, wikis, and databases",
            "Team collaboration",
            "Customizable templates",
        ],
        "slack" => &[
            "Team messaging and channels",
            "File sharing and integrations",
            "Voice and video calls",
            "Searchable history",
        ],
        "spotify" => &[
            "Millions of songs and podcasts",
            "Personalized playlists",
            "Offline listening (premium)",
            "Cross-device sync",
        ],
        _ => &[],
    }
}

/// Renders the body of a window.
pub fn render_window_contents(
    window: &WindowRecord,
    catalog: &AppCatalog,
    services: AppServices,
) -> View {
    let window_id = window.id.0;
    match resolve_hosted_app(catalog, window.app_id.as_str()) {
        HostedApp::FileExplorer => view! { <ExplorerApp window_id=window_id /> }.into_view(),
        HostedApp::Notes => view! { <NotesApp window_id=window_id /> }.into_view(),
        HostedApp::Browser => view! { <BrowserApp window_id=window_id /> }.into_view(),
        HostedApp::Settings => view! { <SettingsApp services=services /> }.into_view(),
        HostedApp::Cloud { name, url } => {
            view! { <CloudAppCard app_id=window.app_id.to_string() name=name url=url /> }
                .into_view()
        }
        HostedApp::Placeholder { .. } => view! { <PlaceholderApp /> }.into_view(),
        HostedApp::Unknown => view! {
            <EmptyState icon=IconName::App message="This application could not be loaded." />
        }
        .into_view(),
    }
}

#[component]
fn CloudAppCard(app_id: String, name: &'static str, url: &'static str) -> impl IntoView {
    let (primary, secondary) = cloud_brand_colors(&app_id);
    let hero_style = format!("background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);");
    let features = cloud_features(&app_id);

    view! {
        <div class="app app-cloud">
            <div class="app-cloud-hero" style=hero_style>
                <Icon icon=IconName::Globe size=IconSize::Lg />
                <h1>{name}</h1>
                <p class="app-cloud-subtitle">"Cloud Application"</p>
            </div>
            <div class="app-cloud-content">
                <p>
                    <strong>{name}</strong>
                    " is a cloud-based application that runs in your browser."
                </p>
                <p class="app-cloud-hint">
                    "For the best experience, click the button below to open it in a new tab."
                </p>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Globe
                    on_click=Callback::new(move |_| DesktopHostContext.open_external_url(url))
                >
                    {format!("Open {name}")}
                </Button>
                <Show when=move || !features.is_empty()>
                    <h3>{format!("Why use {name}?")}</h3>
                    <ul>
                        {features.iter().map(|feature| view! { <li>{*feature}</li> }).collect_view()}
                    </ul>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn PlaceholderApp() -> impl IntoView {
    view! {
        <div class="app app-placeholder">
            <EmptyState icon=IconName::App message="Coming Soon" />
            <p>"This application is under construction and will be available in a future update."</p>
        </div>
    }
}
