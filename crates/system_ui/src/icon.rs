use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Centralized icon set used by the shell and hosted apps.
pub enum IconName {
    /// Folder / file explorer.
    Folder,
    /// Plain document.
    Document,
    /// Notes app.
    Notes,
    /// Web browser.
    Globe,
    /// Settings gear.
    Settings,
    /// Photo gallery.
    Photos,
    /// Music player.
    Music,
    /// Cloud-hosted app.
    Cloud,
    /// Generic app tile.
    App,
    /// Assistant sparkle.
    Sparkle,
    /// Light theme.
    Sun,
    /// Dark theme.
    Moon,
    /// Window close.
    Close,
    /// Window minimize.
    Minimize,
    /// Window maximize.
    Maximize,
    /// Window restore.
    Restore,
    /// Navigate back.
    ArrowLeft,
    /// Navigate forward.
    ArrowRight,
    /// Navigate to parent.
    ArrowUp,
    /// Reload.
    Refresh,
    /// Home page.
    Home,
    /// Bookmark.
    Star,
    /// Grid layout.
    Grid,
    /// List layout.
    List,
    /// Create.
    Plus,
    /// Delete.
    Trash,
    /// Send message.
    Send,
}

impl IconName {
    /// Resolves a manifest icon token, falling back to [`IconName::App`].
    pub fn from_token(token: &str) -> Self {
        match token {
            "folder" => Self::Folder,
            "document" => Self::Document,
            "notes" => Self::Notes,
            "globe" => Self::Globe,
            "settings" => Self::Settings,
            "photos" => Self::Photos,
            "music" => Self::Music,
            "cloud" => Self::Cloud,
            "sparkle" => Self::Sparkle,
            _ => Self::App,
        }
    }

    /// Stable token for the `data-ui-icon` attribute.
    pub const fn token(self) -> &'static str {
        match self {
            Self::Folder => "folder",
            Self::Document => "document",
            Self::Notes => "notes",
            Self::Globe => "globe",
            Self::Settings => "settings",
            Self::Photos => "photos",
            Self::Music => "music",
            Self::Cloud => "cloud",
            Self::App => "app",
            Self::Sparkle => "sparkle",
            Self::Sun => "sun",
            Self::Moon => "moon",
            Self::Close => "close",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::ArrowLeft => "arrow-left",
            Self::ArrowRight => "arrow-right",
            Self::ArrowUp => "arrow-up",
            Self::Refresh => "refresh",
            Self::Home => "home",
            Self::Star => "star",
            Self::Grid => "grid",
            Self::List => "list",
            Self::Plus => "plus",
            Self::Trash => "trash",
            Self::Send => "send",
        }
    }

    fn glyph(self) -> &'static str {
        match self {
            Self::Folder => "📁",
            Self::Document => "📄",
            Self::Notes => "📝",
            Self::Globe => "🌐",
            Self::Settings => "⚙",
            Self::Photos => "🖼",
            Self::Music => "🎵",
            Self::Cloud => "☁",
            Self::App => "▣",
            Self::Sparkle => "✨",
            Self::Sun => "☀",
            Self::Moon => "☾",
            Self::Close => "✕",
            Self::Minimize => "—",
            Self::Maximize => "□",
            Self::Restore => "❐",
            Self::ArrowLeft => "←",
            Self::ArrowRight => "→",
            Self::ArrowUp => "↑",
            Self::Refresh => "↻",
            Self::Home => "⌂",
            Self::Star => "★",
            Self::Grid => "▦",
            Self::List => "☰",
            Self::Plus => "+",
            Self::Trash => "🗑",
            Self::Send => "➤",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline/control size.
    Sm,
    /// Default size.
    #[default]
    Md,
    /// Desktop and dock tile size.
    Lg,
}

impl IconSize {
    const fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
        }
    }
}

#[component]
/// Decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_tokens_resolve_to_matching_icons() {
        for icon in [
            IconName::Folder,
            IconName::Notes,
            IconName::Globe,
            IconName::Settings,
            IconName::Photos,
            IconName::Music,
            IconName::Cloud,
        ] {
            assert_eq!(IconName::from_token(icon.token()), icon);
        }
        assert_eq!(IconName::from_token("calculator"), IconName::App);
    }
}
