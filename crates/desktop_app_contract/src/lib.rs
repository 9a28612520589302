//! Shared contract types between the desktop window manager runtime and hosted apps.
//!
//! The window manager only knows an app through its [`AppDescriptor`]; hosted apps only talk back
//! to the shell through [`AppServices`]. Neither side sees the other's internals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback, Signal};
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window, as seen by hosted apps.
pub type WindowRuntimeId = u64;

/// Stable identifier for an app in the catalog (for example `file-explorer`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(String);

impl ApplicationId {
    /// Returns an app identifier when `raw` is a lowercase kebab-case token.
    pub fn new(raw: impl Into<String>) -> Result<Self, String> {
        let raw = raw.into();
        if is_valid_application_id(&raw) {
            Ok(Self(raw))
        } else {
            Err(format!(
                "invalid application id `{raw}`; expected lowercase kebab-case"
            ))
        }
    }

    /// Returns the string form of the identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Creates an id without validation for compile-time trusted constants.
    pub fn trusted(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }
}

impl std::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Returns `true` when `raw` is usable as an [`ApplicationId`].
pub fn is_valid_application_id(raw: &str) -> bool {
    if raw.is_empty() || raw.len() > 64 {
        return false;
    }
    let bytes = raw.as_bytes();
    if !bytes[0].is_ascii_lowercase() || raw.ends_with('-') || raw.contains("--") {
        return false;
    }
    bytes
        .iter()
        .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || *b == b'-')
}

/// Window dimensions in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowSize {
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl WindowSize {
    /// Creates a size from width and height.
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Catalog entry describing how the window manager opens an app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppDescriptor {
    /// Catalog key.
    pub app_id: &'static str,
    /// Display name, used as the window title.
    pub name: &'static str,
    /// Icon token rendered by the shell.
    pub icon: &'static str,
    /// Size a freshly opened window gets.
    pub default_size: WindowSize,
    /// Floor applied by interactive resizing.
    pub min_size: WindowSize,
    /// When `false` the manager keeps at most one window for this app.
    pub allow_multiple_instances: bool,
    /// Cloud apps render a launch card for this URL instead of local content.
    pub external_url: Option<&'static str>,
    /// Slot in the desktop icon grid; `None` hides the app from the desktop.
    pub desktop_order: Option<u8>,
    /// Slot among the default dock apps; `None` shows the app only while it runs.
    pub dock_order: Option<u8>,
}

impl AppDescriptor {
    /// Returns the typed catalog key.
    pub fn application_id(&self) -> ApplicationId {
        ApplicationId::trusted(self.app_id)
    }

    /// Returns `true` for entries backed by an external URL.
    pub fn is_external(&self) -> bool {
        self.external_url.is_some()
    }
}

/// Read-only lookup table of every app the window manager can open.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppCatalog {
    entries: Vec<AppDescriptor>,
}

impl AppCatalog {
    /// Builds a catalog from descriptors. Later duplicates of an id are ignored.
    pub fn new(entries: impl IntoIterator<Item = AppDescriptor>) -> Self {
        let mut catalog = Self::default();
        for entry in entries {
            if catalog.get(entry.app_id).is_none() {
                catalog.entries.push(entry);
            }
        }
        catalog
    }

    /// Looks up an app by its raw key.
    pub fn get(&self, app_id: &str) -> Option<&AppDescriptor> {
        self.entries.iter().find(|entry| entry.app_id == app_id)
    }

    /// Iterates entries in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &AppDescriptor> {
        self.entries.iter()
    }

    /// Number of registered apps.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no app is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Light or dark shell appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    /// Light surfaces.
    #[default]
    Light,
    /// Dark surfaces.
    Dark,
}

impl ThemeMode {
    /// Stable token used for the `data-theme` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Returns the opposite mode.
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// User-adjustable desktop appearance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesktopSettings {
    /// Active theme.
    pub theme: ThemeMode,
    /// Accent color as a CSS hex string.
    pub accent_color: String,
    /// Wallpaper preset id (see [`WALLPAPER_PRESETS`]).
    pub wallpaper_id: String,
}

impl Default for DesktopSettings {
    fn default() -> Self {
        Self {
            theme: ThemeMode::Light,
            accent_color: "#007aff".to_string(),
            wallpaper_id: "gradient-1".to_string(),
        }
    }
}

/// Named gradient wallpaper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WallpaperPreset {
    /// Stable preset id.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// CSS background value.
    pub css: &'static str,
}

/// Built-in wallpapers.
pub const WALLPAPER_PRESETS: [WallpaperPreset; 8] = [
    WallpaperPreset {
        id: "gradient-1",
        name: "Purple Dream",
        css: "linear-gradient(135deg, #667eea 0%, #764ba2 100%)",
    },
    WallpaperPreset {
        id: "gradient-2",
        name: "Pink Sunset",
        css: "linear-gradient(135deg, #f093fb 0%, #f5576c 100%)",
    },
    WallpaperPreset {
        id: "gradient-3",
        name: "Ocean Blue",
        css: "linear-gradient(135deg, #4facfe 0%, #00f2fe 100%)",
    },
    WallpaperPreset {
        id: "gradient-4",
        name: "Fresh Green",
        css: "linear-gradient(135deg, #43e97b 0%, #38f9d7 100%)",
    },
    WallpaperPreset {
        id: "gradient-5",
        name: "Warm Glow",
        css: "linear-gradient(135deg, #fa709a 0%, #fee140 100%)",
    },
    WallpaperPreset {
        id: "gradient-6",
        name: "Soft Pink",
        css: "linear-gradient(135deg, #a8edea 0%, #fed6e3 100%)",
    },
    WallpaperPreset {
        id: "dark-1",
        name: "Midnight",
        css: "linear-gradient(135deg, #1a1a2e 0%, #16213e 100%)",
    },
    WallpaperPreset {
        id: "dark-2",
        name: "Charcoal",
        css: "linear-gradient(135deg, #232526 0%, #414345 100%)",
    },
];

/// Resolves a wallpaper id to its CSS, falling back to the first preset.
pub fn wallpaper_css(wallpaper_id: &str) -> &'static str {
    WALLPAPER_PRESETS
        .iter()
        .find(|preset| preset.id == wallpaper_id)
        .unwrap_or(&WALLPAPER_PRESETS[0])
        .css
}

/// Named accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentPreset {
    /// Display name.
    pub name: &'static str,
    /// CSS hex color.
    pub color: &'static str,
}

/// Built-in accent colors.
pub const ACCENT_PRESETS: [AccentPreset; 6] = [
    AccentPreset {
        name: "Blue",
        color: "#007aff",
    },
    AccentPreset {
        name: "Purple",
        color: "#5856d6",
    },
    AccentPreset {
        name: "Pink",
        color: "#ff2d55",
    },
    AccentPreset {
        name: "Orange",
        color: "#ff9500",
    },
    AccentPreset {
        name: "Green",
        color: "#34c759",
    },
    AccentPreset {
        name: "Teal",
        color: "#5ac8fa",
    },
];

/// Commands hosted apps send to the desktop runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppCommand {
    /// Ask the window manager to open (or focus) an app.
    OpenApp {
        /// Catalog key of the app to open.
        app_id: String,
    },
    /// Switch the shell theme.
    SetTheme {
        /// New theme.
        theme: ThemeMode,
    },
    /// Change the accent color.
    SetAccentColor {
        /// CSS hex color.
        color: String,
    },
    /// Change the wallpaper preset.
    SetWallpaper {
        /// Preset id.
        wallpaper_id: String,
    },
}

#[derive(Clone, Copy)]
/// Service handles injected into every hosted app.
pub struct AppServices {
    sender: Callback<AppCommand>,
    /// Current desktop appearance.
    pub settings: Signal<DesktopSettings>,
}

impl AppServices {
    /// Creates service handles from the runtime command callback.
    pub fn new(sender: Callback<AppCommand>, settings: Signal<DesktopSettings>) -> Self {
        Self { sender, settings }
    }

    /// Requests the window manager to open `app_id`.
    pub fn open_app(&self, app_id: impl Into<String>) {
        self.sender.call(AppCommand::OpenApp {
            app_id: app_id.into(),
        });
    }

    /// Requests a theme change.
    pub fn set_theme(&self, theme: ThemeMode) {
        self.sender.call(AppCommand::SetTheme { theme });
    }

    /// Requests an accent color change.
    pub fn set_accent_color(&self, color: impl Into<String>) {
        self.sender.call(AppCommand::SetAccentColor {
            color: color.into(),
        });
    }

    /// Requests a wallpaper change.
    pub fn set_wallpaper(&self, wallpaper_id: impl Into<String>) {
        self.sender.call(AppCommand::SetWallpaper {
            wallpaper_id: wallpaper_id.into(),
        });
    }

    /// Low-level transport send.
    pub fn send(&self, command: AppCommand) {
        self.sender.call(command);
    }
}

/// DOM id an app assigns to its primary text input so the shell can focus it.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-primary-input-{window_id}")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn descriptor(app_id: &'static str, name: &'static str) -> AppDescriptor {
        AppDescriptor {
            app_id,
            name,
            icon: "folder",
            default_size: WindowSize::new(600, 400),
            min_size: WindowSize::new(300, 200),
            allow_multiple_instances: true,
            external_url: None,
            desktop_order: Some(1),
            dock_order: None,
        }
    }

    #[test]
    fn application_id_requires_kebab_case() {
        assert!(ApplicationId::new("file-explorer").is_ok());
        assert!(ApplicationId::new("notes").is_ok());
        assert!(ApplicationId::new("ms-word2").is_ok());
        assert!(ApplicationId::new("").is_err());
        assert!(ApplicationId::new("Notes").is_err());
        assert!(ApplicationId::new("notes-").is_err());
        assert!(ApplicationId::new("file--explorer").is_err());
        assert!(ApplicationId::new("2notes").is_err());
        assert!(ApplicationId::new("file explorer").is_err());
    }

    #[test]
    fn catalog_lookup_ignores_duplicate_ids() {
        let catalog = AppCatalog::new([
            descriptor("notes", "Notes"),
            descriptor("browser", "Browser"),
            descriptor("notes", "Shadowed"),
        ]);

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("notes").map(|entry| entry.name), Some("Notes"));
        assert!(catalog.get("music").is_none());
    }

    #[test]
    fn unknown_wallpaper_falls_back_to_first_preset() {
        assert_eq!(wallpaper_css("dark-2"), WALLPAPER_PRESETS[7].css);
        assert_eq!(wallpaper_css("missing"), WALLPAPER_PRESETS[0].css);
    }

    #[test]
    fn theme_toggle_round_trips() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled().token(), "light");
    }
}
