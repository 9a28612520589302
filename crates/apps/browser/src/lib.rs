//! Browser desktop app: address bar, history, bookmarks, and a sandboxed `<iframe>` viewport.

use desktop_app_contract::window_primary_input_dom_id;
use leptos::*;
use serde::{Deserialize, Serialize};
use system_ui::prelude::*;

pub const HOME_URL: &str = "https://www.wikipedia.org";

const IFRAME_SANDBOX: &str = "allow-same-origin allow-scripts allow-popups allow-forms";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub name: String,
    pub url: String,
}

fn default_bookmarks() -> Vec<Bookmark> {
    [
        ("Google", "https://www.google.com"),
        ("Wikipedia", "https://www.wikipedia.org"),
        ("GitHub", "https://www.github.com"),
    ]
    .into_iter()
    .map(|(name, url)| Bookmark {
        name: name.to_string(),
        url: url.to_string(),
    })
    .collect()
}

/// Trims input and prefixes `https://` when no http(s) scheme is present. Blank input yields `None`.
pub fn normalize_url(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Some(trimmed.to_string())
    } else {
        Some(format!("https://{trimmed}"))
    }
}

/// Host portion of `url` without a leading `www.`, used to label new bookmarks.
pub fn display_host(url: &str) -> &str {
    let rest = url
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(url);
    let host = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    host.strip_prefix("www.").unwrap_or(host)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserState {
    history: Vec<String>,
    cursor: usize,
    /// Address bar text; diverges from the current URL while the user types.
    pub address: String,
    loading: bool,
    reload_count: u32,
    bookmarks: Vec<Bookmark>,
}

impl Default for BrowserState {
    fn default() -> Self {
        Self {
            history: vec![HOME_URL.to_string()],
            cursor: 0,
            address: HOME_URL.to_string(),
            loading: true,
            reload_count: 0,
            bookmarks: default_bookmarks(),
        }
    }
}

impl BrowserState {
    pub fn current_url(&self) -> &str {
        self.history
            .get(self.cursor)
            .map(String::as_str)
            .unwrap_or(HOME_URL)
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Bumped on every reload so the view can remount the frame.
    pub fn reload_count(&self) -> u32 {
        self.reload_count
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.history.len()
    }

    /// Loads `input`, dropping any forward history. Returns `false` for blank input.
    pub fn navigate(&mut self, input: &str) -> bool {
        let Some(url) = normalize_url(input) else {
            return false;
        };
        self.history.truncate(self.cursor + 1);
        self.history.push(url.clone());
        self.cursor = self.history.len() - 1;
        self.address = url;
        self.loading = true;
        true
    }

    /// Submits whatever is in the address bar.
    pub fn submit_address(&mut self) -> bool {
        let address = self.address.clone();
        self.navigate(&address)
    }

    pub fn back(&mut self) -> bool {
        if !self.can_go_back() {
            return false;
        }
        self.cursor -= 1;
        self.sync_address();
        true
    }

    pub fn forward(&mut self) -> bool {
        if !self.can_go_forward() {
            return false;
        }
        self.cursor += 1;
        self.sync_address();
        true
    }

    pub fn home(&mut self) {
        self.navigate(HOME_URL);
    }

    pub fn reload(&mut self) {
        self.reload_count = self.reload_count.wrapping_add(1);
        self.loading = true;
    }

    pub fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub fn is_bookmarked(&self) -> bool {
        let url = self.current_url();
        self.bookmarks.iter().any(|bookmark| bookmark.url == url)
    }

    /// Adds the current page to the bookmarks bar, or removes it when already there.
    pub fn toggle_bookmark(&mut self) {
        let url = self.current_url().to_string();
        if self.is_bookmarked() {
            self.bookmarks.retain(|bookmark| bookmark.url != url);
        } else {
            self.bookmarks.push(Bookmark {
                name: display_host(&url).to_string(),
                url,
            });
        }
    }

    fn sync_address(&mut self) {
        self.address = self.current_url().to_string();
        self.loading = true;
    }
}

fn open_in_new_tab(url: &str) {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            logging::warn!("open in new tab failed for `{url}`: {err:?}");
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::warn!("open in new tab `{url}` ignored outside the browser");
}

#[component]
pub fn BrowserApp(window_id: u64) -> impl IntoView {
    let state = create_rw_signal(BrowserState::default());

    let address = Signal::derive(move || state.with(|s| s.address.clone()));
    let loading = move || state.with(BrowserState::is_loading);
    let bookmarked = Signal::derive(move || state.with(BrowserState::is_bookmarked));
    let bookmarks = move || state.with(|s| s.bookmarks().to_vec());
    // Only a URL change or an explicit reload remounts the frame.
    let frame = create_memo(move |_| {
        state.with(|s| (s.current_url().to_string(), s.reload_count()))
    });

    view! {
        <div class="app-shell app-browser-shell">
            <ToolBar aria_label="Browser navigation">
                <IconButton
                    icon=IconName::ArrowLeft
                    aria_label="Back"
                    disabled=Signal::derive(move || !state.with(BrowserState::can_go_back))
                    on_click=Callback::new(move |_| {
                        state.update(|s| {
                            s.back();
                        });
                    })
                />
                <IconButton
                    icon=IconName::ArrowRight
                    aria_label="Forward"
                    disabled=Signal::derive(move || !state.with(BrowserState::can_go_forward))
                    on_click=Callback::new(move |_| {
                        state.update(|s| {
                            s.forward();
                        });
                    })
                />
                <IconButton
                    icon=IconName::Refresh
                    aria_label="Refresh"
                    pressed=Signal::derive(loading)
                    on_click=Callback::new(move |_| state.update(BrowserState::reload))
                />
                <IconButton
                    icon=IconName::Home
                    aria_label="Home"
                    on_click=Callback::new(move |_| state.update(BrowserState::home))
                />
                <TextField
                    layout_class="browser-address"
                    id=window_primary_input_dom_id(window_id)
                    aria_label="Address"
                    value=address
                    on_input=Callback::new(move |ev: web_sys::Event| {
                        let value = event_target_value(&ev);
                        state.update(|s| s.address = value);
                    })
                    on_keydown=Callback::new(move |ev: web_sys::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            state.update(|s| {
                                s.submit_address();
                            });
                        }
                    })
                />
                <IconButton
                    icon=IconName::Star
                    aria_label="Bookmark"
                    pressed=bookmarked
                    on_click=Callback::new(move |_| state.update(BrowserState::toggle_bookmark))
                />
                <IconButton
                    icon=IconName::Maximize
                    aria_label="Open in new tab"
                    on_click=Callback::new(move |_| {
                        state.with_untracked(|s| open_in_new_tab(s.current_url()));
                    })
                />
            </ToolBar>

            <div class="browser-bookmarks" role="toolbar" aria-label="Bookmarks">
                <For each=bookmarks key=|bookmark| bookmark.url.clone() let:bookmark>
                    <Button
                        variant=ButtonVariant::Quiet
                        size=ButtonSize::Sm
                        on_click=Callback::new(move |_| {
                            state.update(|s| {
                                s.navigate(&bookmark.url);
                            });
                        })
                    >
                        {bookmark.name.clone()}
                    </Button>
                </For>
            </div>

            <div class="browser-content">
                {move || {
                    let (url, _) = frame.get();
                    view! {
                        <iframe
                            class="browser-frame"
                            src=url
                            sandbox=IFRAME_SANDBOX
                            title="Browser content"
                            on:load=move |_| state.update(BrowserState::finish_loading)
                        ></iframe>
                    }
                }}
                <Show when=loading>
                    <div class="browser-loading" role="status">
                        <Icon icon=IconName::Refresh size=IconSize::Lg />
                        <span>"Loading..."</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn urls_without_scheme_get_https() {
        assert_eq!(normalize_url("example.com"), Some("https://example.com".to_string()));
        assert_eq!(
            normalize_url("  http://example.com/a "),
            Some("http://example.com/a".to_string())
        );
        assert_eq!(normalize_url("   "), None);
    }

    #[test]
    fn history_moves_back_and_forward() {
        let mut state = BrowserState::default();
        assert!(!state.can_go_back());

        state.navigate("example.com");
        state.navigate("rust-lang.org");
        assert_eq!(state.current_url(), "https://rust-lang.org");

        assert!(state.back());
        assert_eq!(state.current_url(), "https://example.com");
        assert_eq!(state.address, "https://example.com");
        assert!(state.can_go_forward());

        state.navigate("docs.rs");
        assert!(!state.can_go_forward());
        assert!(state.back());
        assert!(state.back());
        assert_eq!(state.current_url(), HOME_URL);
        assert!(!state.back());
    }

    #[test]
    fn blank_submission_is_ignored() {
        let mut state = BrowserState::default();
        state.finish_loading();
        state.address = "  ".to_string();

        assert!(!state.submit_address());
        assert_eq!(state.current_url(), HOME_URL);
        assert!(!state.is_loading());
    }

    #[test]
    fn reload_and_home_restart_loading() {
        let mut state = BrowserState::default();
        state.navigate("example.com");
        state.finish_loading();

        state.reload();
        assert_eq!(state.reload_count(), 1);
        assert!(state.is_loading());

        state.home();
        assert_eq!(state.current_url(), HOME_URL);
        assert!(state.can_go_back());
    }

    #[test]
    fn bookmark_toggle_uses_host_name() {
        let mut state = BrowserState::default();
        assert!(state.is_bookmarked());

        state.navigate("www.rust-lang.org/learn");
        assert!(!state.is_bookmarked());
        state.toggle_bookmark();
        let added = state.bookmarks().last().expect("bookmark");
        assert_eq!(added.name, "rust-lang.org");
        assert_eq!(added.url, "https://www.rust-lang.org/learn");

        state.toggle_bookmark();
        assert_eq!(state.bookmarks().len(), 3);
    }
}
