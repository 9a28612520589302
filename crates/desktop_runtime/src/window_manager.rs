//! Window registry: the single owner of window records, stacking order, and focus.

use desktop_app_contract::{AppCatalog, AppDescriptor, ApplicationId, WindowSize};
use thiserror::Error;

use crate::config::WindowManagerConfig;
use crate::geometry;
use crate::model::{Position, SnapZone, Viewport, WindowId, WindowRecord, WindowState};

/// Errors surfaced by [`WindowRegistry`].
///
/// Mutators addressed to a missing window are silently ignored; only opening an app that is not
/// in the catalog is reported.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WindowManagerError {
    /// The requested app id is malformed or has no catalog entry.
    #[error("app not found: {app_id}")]
    UnknownApp {
        /// Raw id the caller asked for.
        app_id: String,
    },
}

/// Authoritative collection of open windows plus the active-window pointer.
///
/// Records are kept in insertion order; stacking is expressed only through `z_index`, which is
/// allocated as `max + 1` so the last focused, opened, restored, or snapped window is on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowRegistry {
    catalog: AppCatalog,
    config: WindowManagerConfig,
    windows: Vec<WindowRecord>,
    active_window_id: Option<WindowId>,
    next_window_id: u64,
    open_count: u32,
}

impl Default for WindowRegistry {
    fn default() -> Self {
        Self::new(crate::apps::builtin_catalog(), WindowManagerConfig::default())
    }
}

impl WindowRegistry {
    pub fn new(catalog: AppCatalog, config: WindowManagerConfig) -> Self {
        Self {
            catalog,
            config,
            windows: Vec::new(),
            active_window_id: None,
            next_window_id: 1,
            open_count: 0,
        }
    }

    pub fn catalog(&self) -> &AppCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    /// Windows in insertion order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    /// Windows sorted bottom-to-top.
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut ordered: Vec<&WindowRecord> = self.windows.iter().collect();
        ordered.sort_by_key(|window| window.z_index);
        ordered
    }

    pub fn visible_windows(&self) -> impl Iterator<Item = &WindowRecord> {
        self.windows.iter().filter(|window| window.is_visible())
    }

    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|window| window.id == window_id)
    }

    pub fn windows_by_app<'a>(&'a self, app_id: &'a str) -> impl Iterator<Item = &'a WindowRecord> {
        self.windows
            .iter()
            .filter(move |window| window.app_id.as_str() == app_id)
    }

    pub fn active_window_id(&self) -> Option<WindowId> {
        self.active_window_id
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    /// Resize floor for a window: its app's `min_size`, or the configured fallback.
    pub fn min_size_for(&self, window_id: WindowId) -> WindowSize {
        self.window(window_id)
            .and_then(|window| self.catalog.get(window.app_id.as_str()))
            .map(|descriptor| descriptor.min_size)
            .unwrap_or(self.config.fallback_min_size)
    }

    /// Opens a window for `app_id`, or focuses the existing one for single-instance apps.
    ///
    /// # Errors
    ///
    /// Returns [`WindowManagerError::UnknownApp`] without touching state when the id is malformed
    /// or not in the catalog.
    pub fn open_window(
        &mut self,
        app_id: &str,
        viewport: Viewport,
    ) -> Result<WindowId, WindowManagerError> {
        let descriptor = self.lookup(app_id)?;

        if !descriptor.allow_multiple_instances {
            let existing = self.windows_by_app(app_id).next().map(|window| window.id);
            if let Some(existing) = existing {
                self.focus_window(existing);
                return Ok(existing);
            }
        }

        self.open_count = self.open_count.wrapping_add(1);
        let id = WindowId(self.next_window_id);
        self.next_window_id += 1;
        let position = geometry::cascade_position(
            descriptor.default_size,
            viewport,
            self.open_count,
            &self.config,
        );
        let z_index = self.next_z_index();

        self.windows.push(WindowRecord {
            id,
            app_id: descriptor.application_id(),
            title: descriptor.name.to_string(),
            icon: descriptor.icon.to_string(),
            position,
            size: descriptor.default_size,
            state: WindowState::Normal,
            z_index,
            is_active: false,
            snap_zone: None,
            pre_snap: None,
        });
        self.set_active(Some(id));
        Ok(id)
    }

    /// Removes a window and re-elects the active window.
    pub fn close_window(&mut self, window_id: WindowId) -> bool {
        let before = self.windows.len();
        self.windows.retain(|window| window.id != window_id);
        if self.windows.len() == before {
            return false;
        }
        self.reelect_active();
        true
    }

    pub fn minimize_window(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        leave_snap(window);
        window.state = WindowState::Minimized;
        window.is_active = false;
        self.reelect_active();
        true
    }

    /// Marks the window maximized. Stored geometry is left alone so restore returns to it.
    pub fn maximize_window(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        let was_minimized = window.is_minimized();
        leave_snap(window);
        window.state = WindowState::Maximized;
        if was_minimized || self.active_window_id.is_none() {
            self.focus_window(window_id);
        }
        true
    }

    /// Returns the window to [`WindowState::Normal`], raises it, and activates it.
    pub fn restore_window(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        leave_snap(window);
        window.state = WindowState::Normal;
        self.raise_and_activate(window_id);
        true
    }

    /// Raises and activates a window. A minimized window comes back as normal.
    pub fn focus_window(&mut self, window_id: WindowId) -> bool {
        let top_z = self.windows.iter().map(|window| window.z_index).max();
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.is_active && !window.is_minimized() && Some(window.z_index) == top_z {
            return true;
        }
        if window.is_minimized() {
            window.state = WindowState::Normal;
        }
        self.raise_and_activate(window_id);
        true
    }

    pub fn update_window_position(&mut self, window_id: WindowId, position: Position) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.position = position;
        true
    }

    pub fn update_window_size(&mut self, window_id: WindowId, size: WindowSize) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        window.size = size;
        true
    }

    /// Tiles a window into `zone`.
    ///
    /// Pre-snap geometry is captured only on the first snap, so chains of re-snaps always restore
    /// to the geometry the window had before it was first tiled. `None` and minimized windows are
    /// ignored.
    pub fn snap_window(
        &mut self,
        window_id: WindowId,
        zone: Option<SnapZone>,
        viewport: Viewport,
    ) -> bool {
        let Some(zone) = zone else {
            return false;
        };
        let target = geometry::snap_zone_rect(zone, viewport, &self.config);
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if window.is_minimized() {
            return false;
        }
        if window.pre_snap.is_none() {
            window.pre_snap = Some(window.rect());
        }
        window.position = target.position();
        window.size = target.size();
        window.state = WindowState::Snapped;
        window.snap_zone = Some(zone);
        self.raise_and_activate(window_id);
        true
    }

    /// Writes pre-snap geometry back and returns a snapped window to normal.
    pub fn unsnap_window(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.window_mut(window_id) else {
            return false;
        };
        if !window.is_snapped() {
            return false;
        }
        leave_snap(window);
        window.state = WindowState::Normal;
        true
    }

    /// Raw state setter. `Snapped` needs a zone and is only accepted through [`Self::snap_window`].
    pub fn set_window_state(&mut self, window_id: WindowId, state: WindowState) -> bool {
        match state {
            WindowState::Minimized => self.minimize_window(window_id),
            WindowState::Maximized => self.maximize_window(window_id),
            WindowState::Snapped => false,
            WindowState::Normal => {
                let Some(window) = self.window_mut(window_id) else {
                    return false;
                };
                leave_snap(window);
                window.state = WindowState::Normal;
                if self.active_window_id.is_none() {
                    self.reelect_active();
                }
                true
            }
        }
    }

    /// Dock semantics: open when nothing runs, else restore a minimized window, else focus.
    ///
    /// # Errors
    ///
    /// Returns [`WindowManagerError::UnknownApp`] when a new window would be needed for an
    /// unregistered app.
    pub fn activate_app(
        &mut self,
        app_id: &str,
        viewport: Viewport,
    ) -> Result<WindowId, WindowManagerError> {
        let minimized = self
            .windows_by_app(app_id)
            .find(|window| window.is_minimized())
            .map(|window| window.id);
        if let Some(window_id) = minimized {
            self.restore_window(window_id);
            return Ok(window_id);
        }

        let first = self.windows_by_app(app_id).next().map(|window| window.id);
        match first {
            Some(window_id) => {
                self.focus_window(window_id);
                Ok(window_id)
            }
            None => self.open_window(app_id, viewport),
        }
    }

    fn lookup(&self, app_id: &str) -> Result<AppDescriptor, WindowManagerError> {
        ApplicationId::new(app_id)
            .ok()
            .and_then(|id| self.catalog.get(id.as_str()).copied())
            .ok_or_else(|| WindowManagerError::UnknownApp {
                app_id: app_id.to_string(),
            })
    }

    fn window_mut(&mut self, window_id: WindowId) -> Option<&mut WindowRecord> {
        self.windows.iter_mut().find(|window| window.id == window_id)
    }

    fn next_z_index(&self) -> u32 {
        self.windows
            .iter()
            .map(|window| window.z_index)
            .max()
            .map(|max| max + 1)
            .unwrap_or(self.config.base_z_index)
    }

    fn raise_and_activate(&mut self, window_id: WindowId) {
        let z_index = self.next_z_index();
        if let Some(window) = self.window_mut(window_id) {
            window.z_index = z_index;
        }
        self.set_active(Some(window_id));
    }

    fn set_active(&mut self, window_id: Option<WindowId>) {
        for window in &mut self.windows {
            window.is_active = Some(window.id) == window_id;
        }
        self.active_window_id = window_id;
    }

    /// Hands focus to the topmost non-minimized window, or to nobody.
    fn reelect_active(&mut self) {
        let next = self
            .windows
            .iter()
            .filter(|window| window.is_visible())
            .max_by_key(|window| window.z_index)
            .map(|window| window.id);
        self.set_active(next);
    }
}

/// Clears snap bookkeeping, writing the pre-snap geometry back when present.
fn leave_snap(window: &mut WindowRecord) {
    if let Some(pre_snap) = window.pre_snap.take() {
        window.position = pre_snap.position();
        window.size = pre_snap.size();
    }
    window.snap_zone = None;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280, 800);

    fn descriptor(app_id: &'static str, multi: bool) -> AppDescriptor {
        AppDescriptor {
            app_id,
            name: app_id,
            icon: "app",
            default_size: WindowSize::new(600, 400),
            min_size: WindowSize::new(300, 200),
            allow_multiple_instances: multi,
            external_url: None,
            desktop_order: Some(1),
            dock_order: None,
        }
    }

    fn registry() -> WindowRegistry {
        WindowRegistry::new(
            AppCatalog::new([descriptor("notes", true), descriptor("settings", false)]),
            WindowManagerConfig::default(),
        )
    }

    fn active_count(registry: &WindowRegistry) -> usize {
        registry.windows().iter().filter(|w| w.is_active).count()
    }

    #[test]
    fn open_assigns_baseline_then_increasing_z() {
        let mut registry = registry();
        let first = registry.open_window("notes", VIEWPORT).expect("open");
        let second = registry.open_window("notes", VIEWPORT).expect("open");

        assert_ne!(first, second);
        assert_eq!(registry.window(first).map(|w| w.z_index), Some(100));
        assert_eq!(registry.window(second).map(|w| w.z_index), Some(101));
        assert_eq!(registry.active_window_id(), Some(second));
        assert_eq!(active_count(&registry), 1);
    }

    #[test]
    fn open_unknown_or_malformed_app_fails_without_mutation() {
        let mut registry = registry();
        let before = registry.clone();

        assert_eq!(
            registry.open_window("photos", VIEWPORT),
            Err(WindowManagerError::UnknownApp {
                app_id: "photos".to_string()
            })
        );
        assert!(registry.open_window("Not An Id", VIEWPORT).is_err());
        assert_eq!(registry, before);
    }

    #[test]
    fn single_instance_app_reuses_and_unminimizes_existing_window() {
        let mut registry = registry();
        let settings = registry.open_window("settings", VIEWPORT).expect("open");
        let notes = registry.open_window("notes", VIEWPORT).expect("open");
        registry.minimize_window(settings);

        let reopened = registry.open_window("settings", VIEWPORT).expect("reopen");

        assert_eq!(reopened, settings);
        assert_eq!(registry.windows_by_app("settings").count(), 1);
        let record = registry.window(settings).expect("settings");
        assert_eq!(record.state, WindowState::Normal);
        assert!(record.is_active);
        assert!(record.z_index > registry.window(notes).expect("notes").z_index);
    }

    #[test]
    fn focus_of_active_top_window_changes_nothing() {
        let mut registry = registry();
        registry.open_window("notes", VIEWPORT).expect("open");
        let top = registry.open_window("notes", VIEWPORT).expect("open");
        let before = registry.clone();

        assert!(registry.focus_window(top));
        assert_eq!(registry, before);
    }

    #[test]
    fn minimize_hands_focus_to_next_visible_window() {
        let mut registry = registry();
        let a = registry.open_window("notes", VIEWPORT).expect("open");
        let b = registry.open_window("notes", VIEWPORT).expect("open");

        registry.minimize_window(b);
        assert_eq!(registry.active_window_id(), Some(a));

        registry.minimize_window(a);
        assert_eq!(registry.active_window_id(), None);
        assert_eq!(active_count(&registry), 0);
    }

    #[test]
    fn maximize_keeps_stored_geometry_for_restore() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let rect = registry.window(id).expect("window").rect();

        registry.maximize_window(id);
        assert_eq!(registry.window(id).map(|w| w.state), Some(WindowState::Maximized));
        assert_eq!(registry.window(id).map(|w| w.rect()), Some(rect));

        registry.restore_window(id);
        assert_eq!(registry.window(id).map(|w| w.state), Some(WindowState::Normal));
        assert_eq!(registry.window(id).map(|w| w.rect()), Some(rect));
    }

    #[test]
    fn maximize_of_snapped_window_writes_pre_snap_geometry_back() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let rect = registry.window(id).expect("window").rect();

        registry.snap_window(id, Some(SnapZone::Right), VIEWPORT);
        registry.maximize_window(id);

        let record = registry.window(id).expect("window");
        assert_eq!(record.state, WindowState::Maximized);
        assert_eq!(record.snap_zone, None);
        assert_eq!(record.pre_snap, None);
        assert_eq!(record.rect(), rect);
    }

    #[test]
    fn restore_of_snapped_window_returns_pre_snap_geometry_on_top() {
        let mut registry = registry();
        let snapped = registry.open_window("notes", VIEWPORT).expect("open");
        let rect = registry.window(snapped).expect("window").rect();
        registry.snap_window(snapped, Some(SnapZone::BottomLeft), VIEWPORT);
        registry.snap_window(snapped, Some(SnapZone::Right), VIEWPORT);
        let other = registry.open_window("notes", VIEWPORT).expect("open");
        let other_z = registry.window(other).expect("other").z_index;

        assert!(registry.restore_window(snapped));

        let record = registry.window(snapped).expect("window");
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.rect(), rect);
        assert_eq!(record.snap_zone, None);
        assert_eq!(record.pre_snap, None);
        assert!(record.is_active);
        assert!(record.z_index > other_z);
        assert!(!registry.window(other).expect("other").is_active);
    }

    #[test]
    fn snap_with_no_zone_or_on_minimized_window_is_ignored() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let before = registry.clone();

        assert!(!registry.snap_window(id, None, VIEWPORT));
        assert_eq!(registry, before);

        registry.minimize_window(id);
        assert!(!registry.snap_window(id, Some(SnapZone::Left), VIEWPORT));
        assert_eq!(registry.window(id).map(|w| w.state), Some(WindowState::Minimized));
    }

    #[test]
    fn unsnap_on_normal_window_is_noop() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let before = registry.clone();

        assert!(!registry.unsnap_window(id));
        assert_eq!(registry, before);
    }

    #[test]
    fn set_window_state_normal_leaves_snap_cleanly() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let rect = registry.window(id).expect("window").rect();
        registry.snap_window(id, Some(SnapZone::TopLeft), VIEWPORT);

        assert!(!registry.set_window_state(id, WindowState::Snapped));
        assert!(registry.set_window_state(id, WindowState::Normal));

        let record = registry.window(id).expect("window");
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.pre_snap, None);
        assert_eq!(record.rect(), rect);
    }

    #[test]
    fn activate_app_opens_restores_then_focuses() {
        let mut registry = registry();
        let opened = registry.activate_app("notes", VIEWPORT).expect("open");
        assert_eq!(registry.len(), 1);

        registry.minimize_window(opened);
        let restored = registry.activate_app("notes", VIEWPORT).expect("restore");
        assert_eq!(restored, opened);
        assert_eq!(registry.window(opened).map(|w| w.state), Some(WindowState::Normal));

        registry.open_window("settings", VIEWPORT).expect("open");
        let focused = registry.activate_app("notes", VIEWPORT).expect("focus");
        assert_eq!(focused, opened);
        assert_eq!(registry.active_window_id(), Some(opened));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn mutators_on_unknown_window_are_silent_noops() {
        let mut registry = registry();
        registry.open_window("notes", VIEWPORT).expect("open");
        let before = registry.clone();
        let ghost = WindowId(999);

        assert!(!registry.close_window(ghost));
        assert!(!registry.minimize_window(ghost));
        assert!(!registry.maximize_window(ghost));
        assert!(!registry.restore_window(ghost));
        assert!(!registry.focus_window(ghost));
        assert!(!registry.update_window_position(ghost, Position::new(1, 1)));
        assert!(!registry.update_window_size(ghost, WindowSize::new(1, 1)));
        assert!(!registry.snap_window(ghost, Some(SnapZone::Left), VIEWPORT));
        assert!(!registry.unsnap_window(ghost));
        assert_eq!(registry, before);
    }

    #[test]
    fn min_size_falls_back_for_missing_window() {
        let mut registry = registry();
        let id = registry.open_window("settings", VIEWPORT).expect("open");

        assert_eq!(registry.min_size_for(id), WindowSize::new(300, 200));
        assert_eq!(
            registry.min_size_for(WindowId(42)),
            registry.config().fallback_min_size
        );
    }
}
