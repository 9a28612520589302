//! Tunables for window placement, snapping, and gesture handling.

use desktop_app_contract::WindowSize;
use serde::{Deserialize, Serialize};

/// Pixel constants the window manager uses for geometry math.
///
/// The defaults match the shell chrome rendered by [`crate::components::DesktopShell`]; a registry
/// built with a different config must be rendered inside matching chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowManagerConfig {
    /// Distance from a viewport edge at which a drag previews a snap.
    pub snap_threshold: i32,
    /// Height of the top status bar.
    pub status_bar_height: i32,
    /// Height of the bottom dock.
    pub dock_height: i32,
    /// Pixels of a dragged window that must stay on screen at the trailing edges.
    pub drag_visible_margin: i32,
    /// Vertical space excluded when centering a freshly opened window.
    pub open_reserved_height: i32,
    /// Offset added per cascaded open.
    pub cascade_step: i32,
    /// Number of cascade steps before the offset wraps to zero.
    pub cascade_slots: u32,
    /// Smallest x/y a freshly opened window is placed at.
    pub open_margin: i32,
    /// z-index given to the first window of an empty desktop.
    pub base_z_index: u32,
    /// Distance from the pointer to the title bar top when a snapped window is torn off.
    pub snapped_drag_grab_offset: i32,
    /// Resize floor for windows whose app has no catalog entry.
    pub fallback_min_size: WindowSize,
}

impl Default for WindowManagerConfig {
    fn default() -> Self {
        Self {
            snap_threshold: 20,
            status_bar_height: 28,
            dock_height: 70,
            drag_visible_margin: 100,
            open_reserved_height: 80,
            cascade_step: 30,
            cascade_slots: 10,
            open_margin: 50,
            base_z_index: 100,
            snapped_drag_grab_offset: 20,
            fallback_min_size: WindowSize::new(300, 200),
        }
    }
}

impl WindowManagerConfig {
    /// Height left for windows between the status bar and the dock.
    pub fn work_area_height(&self, viewport_height: i32) -> i32 {
        viewport_height - self.status_bar_height - self.dock_height
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn partial_config_falls_back_to_defaults() {
        let config: WindowManagerConfig =
            toml::from_str("snap_threshold = 32\ndock_height = 0\n").expect("parse config");

        assert_eq!(config.snap_threshold, 32);
        assert_eq!(config.dock_height, 0);
        assert_eq!(config.status_bar_height, 28);
        assert_eq!(config.fallback_min_size, WindowSize::new(300, 200));
    }

    #[test]
    fn work_area_excludes_status_bar_and_dock() {
        assert_eq!(WindowManagerConfig::default().work_area_height(768), 670);
    }
}
