//! Built-in Settings desktop app for theme, accent color, and wallpaper.
//!
//! The app reads the live [`desktop_app_contract::DesktopSettings`] from the injected
//! [`AppServices`] and writes changes back through the service commands, so the shell stays the
//! single owner of appearance state.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use desktop_app_contract::{AppServices, ThemeMode, ACCENT_PRESETS, WALLPAPER_PRESETS};
use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
enum SettingsSection {
    #[default]
    Appearance,
    Desktop,
    Assistant,
    About,
}

impl SettingsSection {
    const ALL: [Self; 4] = [Self::Appearance, Self::Desktop, Self::Assistant, Self::About];

    fn label(self) -> &'static str {
        match self {
            Self::Appearance => "Appearance",
            Self::Desktop => "Desktop",
            Self::Assistant => "AI Assistant",
            Self::About => "About",
        }
    }

    fn icon(self) -> IconName {
        match self {
            Self::Appearance => IconName::Settings,
            Self::Desktop => IconName::App,
            Self::Assistant => IconName::Sparkle,
            Self::About => IconName::Document,
        }
    }
}

/// Preview colors for a theme card: desktop surface, then window surface.
fn theme_preview(theme: ThemeMode) -> (&'static str, &'static str) {
    match theme {
        ThemeMode::Light => ("#f5f5f7", "#ffffff"),
        ThemeMode::Dark => ("#1d1d1f", "#2d2d2f"),
    }
}

fn theme_label(theme: ThemeMode) -> &'static str {
    match theme {
        ThemeMode::Light => "Light",
        ThemeMode::Dark => "Dark",
    }
}

#[component]
/// Settings window contents.
pub fn SettingsApp(
    /// Injected desktop services bundle.
    services: AppServices,
) -> impl IntoView {
    let section = create_rw_signal(SettingsSection::default());
    let settings = services.settings;

    view! {
        <div class="app-shell app-settings-shell">
            <nav class="settings-sidebar" aria-label="Settings sections">
                {SettingsSection::ALL
                    .into_iter()
                    .map(|entry| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                leading_icon=entry.icon()
                                selected=Signal::derive(move || section.get() == entry)
                                on_click=Callback::new(move |_| section.set(entry))
                            >
                                {entry.label()}
                            </Button>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="settings-content">
                {move || match section.get() {
                    SettingsSection::Appearance => view! {
                        <AppearancePanel services=services />
                    }
                    .into_view(),
                    SettingsSection::Desktop => view! {
                        <Panel title="Desktop">
                            <p>"Drag a window to a screen edge to snap it; double-click a title bar to maximize."</p>
                            <p>{move || {
                                let wallpaper = settings.with(|s| s.wallpaper_id.clone());
                                let name = WALLPAPER_PRESETS
                                    .iter()
                                    .find(|preset| preset.id == wallpaper)
                                    .map(|preset| preset.name)
                                    .unwrap_or("Custom");
                                format!("Current wallpaper: {name}")
                            }}</p>
                        </Panel>
                    }
                    .into_view(),
                    SettingsSection::Assistant => view! {
                        <Panel title="AI Assistant">
                            <p>"Open the assistant from the dock. Ask it to open apps or tell you the time."</p>
                        </Panel>
                    }
                    .into_view(),
                    SettingsSection::About => view! {
                        <Panel title="About">
                            <p>"AIPC"</p>
                            <p>{format!("Version {}", env!("CARGO_PKG_VERSION"))}</p>
                        </Panel>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}

#[component]
fn AppearancePanel(services: AppServices) -> impl IntoView {
    let settings = services.settings;

    view! {
        <section class="settings-appearance">
            <h1 class="settings-title">"Appearance"</h1>
            <p class="settings-subtitle">"Customize the look and feel of AIPC"</p>

            <Panel title="Theme">
                <Stack horizontal=true gap=LayoutGap::Md>
                    {[ThemeMode::Light, ThemeMode::Dark]
                        .into_iter()
                        .map(|theme| {
                            let (desktop, window) = theme_preview(theme);
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    layout_class="settings-theme-option"
                                    selected=Signal::derive(move || settings.with(|s| s.theme == theme))
                                    on_click=Callback::new(move |_| services.set_theme(theme))
                                >
                                    <span class="settings-theme-preview" style=format!("background:{desktop};")>
                                        <span style=format!("background:{window};")></span>
                                    </span>
                                    {theme_label(theme)}
                                </Button>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>

            <Panel title="Accent Color">
                <Stack horizontal=true gap=LayoutGap::Sm>
                    {ACCENT_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    layout_class="settings-accent-option"
                                    aria_label=preset.name
                                    title=preset.name
                                    selected=Signal::derive(move || {
                                        settings.with(|s| s.accent_color == preset.color)
                                    })
                                    on_click=Callback::new(move |_| services.set_accent_color(preset.color))
                                >
                                    <span class="settings-swatch" style=format!("--accent:{};", preset.color)></span>
                                </Button>
                            }
                        })
                        .collect_view()}
                </Stack>
            </Panel>

            <Panel title="Wallpaper">
                <div class="settings-wallpaper-grid">
                    {WALLPAPER_PRESETS
                        .into_iter()
                        .map(|preset| {
                            view! {
                                <Button
                                    variant=ButtonVariant::Quiet
                                    layout_class="settings-wallpaper-option"
                                    aria_label=preset.name
                                    title=preset.name
                                    selected=Signal::derive(move || {
                                        settings.with(|s| s.wallpaper_id == preset.id)
                                    })
                                    on_click=Callback::new(move |_| services.set_wallpaper(preset.id))
                                >
                                    <span class="settings-wallpaper-preview" style=format!("background:{};", preset.css)></span>
                                </Button>
                            }
                        })
                        .collect_view()}
                </div>
            </Panel>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn sections_list_in_sidebar_order() {
        let labels: Vec<_> = SettingsSection::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, vec!["Appearance", "Desktop", "AI Assistant", "About"]);
        assert_eq!(SettingsSection::default(), SettingsSection::Appearance);
    }

    #[test]
    fn theme_cards_preview_their_own_palette() {
        assert_eq!(theme_preview(ThemeMode::Light), ("#f5f5f7", "#ffffff"));
        assert_eq!(theme_preview(ThemeMode::Dark), ("#1d1d1f", "#2d2d2f"));
        assert_eq!(theme_label(ThemeMode::Dark.toggled()), "Light");
    }
}
