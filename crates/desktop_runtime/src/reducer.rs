//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use desktop_app_contract::{AppCommand, ThemeMode, WindowSize, WALLPAPER_PRESETS};
use thiserror::Error;

use crate::model::{
    DesktopState, DragSession, InteractionState, PointerPosition, Position, ResizeEdge,
    ResizeSession, SnapZone, Viewport, WindowId, WindowState,
};
use crate::window_manager::WindowManagerError;

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for an app (or focus it for single-instance apps).
    OpenWindow {
        /// Catalog key of the app.
        app_id: String,
        /// Live viewport used to center the window.
        viewport: Viewport,
    },
    /// Dock click: open, restore a minimized window, or focus.
    ActivateApp {
        /// Catalog key of the app.
        app_id: String,
        /// Live viewport, used when a new window is needed.
        viewport: Viewport,
    },
    /// Close a window by id.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window.
    MaximizeWindow {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a minimized, maximized, or snapped window to normal.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Overwrite a window's position.
    UpdateWindowPosition {
        /// Target window.
        window_id: WindowId,
        /// New top-left corner.
        position: Position,
    },
    /// Overwrite a window's size.
    UpdateWindowSize {
        /// Target window.
        window_id: WindowId,
        /// New size.
        size: WindowSize,
    },
    /// Tile a window into a snap zone. `None` is ignored.
    SnapWindow {
        /// Target window.
        window_id: WindowId,
        /// Zone to tile into.
        zone: Option<SnapZone>,
        /// Live viewport the zone is computed against.
        viewport: Viewport,
    },
    /// Return a snapped window to its pre-snap geometry.
    UnsnapWindow {
        /// Target window.
        window_id: WindowId,
    },
    /// Raw state setter.
    SetWindowState {
        /// Target window.
        window_id: WindowId,
        /// Requested state.
        state: WindowState,
    },
    /// Title-bar double click: restore maximized/snapped windows, maximize the rest.
    TitleBarDoubleClick {
        /// Target window.
        window_id: WindowId,
    },
    /// Begin dragging a window by its title bar.
    BeginMove {
        /// Window being dragged.
        window_id: WindowId,
        /// Pointer position at drag start.
        pointer: PointerPosition,
        /// Live viewport for clamping a window grabbed out of a snap.
        viewport: Viewport,
    },
    /// Update an in-progress window drag.
    UpdateMove {
        /// Current pointer position.
        pointer: PointerPosition,
        /// Live viewport for clamping and snap detection.
        viewport: Viewport,
    },
    /// End the active window drag, applying any previewed snap.
    EndMove {
        /// Live viewport for the snap target.
        viewport: Viewport,
    },
    /// Begin resizing a window.
    BeginResize {
        /// Window being resized.
        window_id: WindowId,
        /// Edge or corner being dragged.
        edge: ResizeEdge,
        /// Pointer position at resize start.
        pointer: PointerPosition,
    },
    /// Update an in-progress window resize.
    UpdateResize {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// End the active window resize.
    EndResize,
    /// Show or hide the assistant panel.
    ToggleAssistant,
    /// Switch the shell theme.
    SetTheme {
        /// New theme.
        theme: ThemeMode,
    },
    /// Flip between light and dark.
    ToggleTheme,
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

impl DesktopAction {
    /// Maps a hosted-app request onto the reducer action that serves it.
    pub fn from_app_command(command: AppCommand, viewport: Viewport) -> Self {
        match command {
            AppCommand::OpenApp { app_id } => Self::OpenWindow { app_id, viewport },
            AppCommand::SetTheme { theme } => Self::SetTheme { theme },
            AppCommand::SetAccentColor { color } => Self::SetAccentColor { color },
            AppCommand::SetWallpaper { wallpaper_id } => Self::SetWallpaper { wallpaper_id },
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host layer to execute.
pub enum RuntimeEffect {
    /// Move keyboard focus into the window's primary input.
    FocusWindowInput(WindowId),
    /// Toggle the document-level dragging cursor/class while a gesture runs.
    SetDragCursor(bool),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reducer errors. All are non-fatal; the dispatcher logs them and keeps the previous state.
pub enum ReducerError {
    /// The window registry rejected the request.
    #[error(transparent)]
    WindowManager(#[from] WindowManagerError),
    /// The wallpaper id is not a known preset.
    #[error("unknown wallpaper preset: {0}")]
    UnknownWallpaper(String),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting side effects.
///
/// Actions addressed to windows that no longer exist are absorbed silently, since stale UI
/// callbacks routinely fire after a window has closed.
///
/// # Errors
///
/// Returns [`ReducerError::WindowManager`] when opening an unknown app and
/// [`ReducerError::UnknownWallpaper`] for an unrecognized wallpaper id.
pub fn reduce_desktop(
    state: &mut DesktopState,
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, ReducerError> {
    let mut effects = Vec::new();
    let registry = &mut state.registry;

    match action {
        DesktopAction::OpenWindow { app_id, viewport } => {
            let window_id = registry.open_window(&app_id, viewport)?;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::ActivateApp { app_id, viewport } => {
            let window_id = registry.activate_app(&app_id, viewport)?;
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            registry.close_window(window_id);
            clear_gestures_for(interaction, window_id, &mut effects);
        }
        DesktopAction::FocusWindow { window_id } => {
            let was_active = registry.active_window_id() == Some(window_id);
            if registry.focus_window(window_id) && !was_active {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::MinimizeWindow { window_id } => {
            registry.minimize_window(window_id);
            clear_gestures_for(interaction, window_id, &mut effects);
        }
        DesktopAction::MaximizeWindow { window_id } => {
            registry.maximize_window(window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            registry.restore_window(window_id);
        }
        DesktopAction::UpdateWindowPosition {
            window_id,
            position,
        } => {
            registry.update_window_position(window_id, position);
        }
        DesktopAction::UpdateWindowSize { window_id, size } => {
            registry.update_window_size(window_id, size);
        }
        DesktopAction::SnapWindow {
            window_id,
            zone,
            viewport,
        } => {
            registry.snap_window(window_id, zone, viewport);
        }
        DesktopAction::UnsnapWindow { window_id } => {
            registry.unsnap_window(window_id);
        }
        DesktopAction::SetWindowState {
            window_id,
            state: window_state,
        } => {
            registry.set_window_state(window_id, window_state);
        }
        DesktopAction::TitleBarDoubleClick { window_id } => {
            let window_state = registry.window(window_id).map(|window| window.state);
            match window_state {
                Some(WindowState::Maximized | WindowState::Snapped) => {
                    registry.restore_window(window_id);
                }
                Some(WindowState::Normal) => {
                    registry.maximize_window(window_id);
                }
                Some(WindowState::Minimized) | None => {}
            }
        }
        DesktopAction::BeginMove {
            window_id,
            pointer,
            viewport,
        } => {
            if let Some(session) = DragSession::begin(registry, window_id, pointer, viewport) {
                registry.focus_window(window_id);
                interaction.resizing = None;
                interaction.dragging = Some(session);
                interaction.snap_preview = None;
                effects.push(RuntimeEffect::SetDragCursor(true));
            }
        }
        DesktopAction::UpdateMove { pointer, viewport } => {
            if let Some(session) = interaction.dragging.as_ref() {
                interaction.snap_preview = session.update(registry, pointer, viewport);
            }
        }
        DesktopAction::EndMove { viewport } => {
            if let Some(session) = interaction.dragging.take() {
                session.finish(registry, interaction.snap_preview, viewport);
                effects.push(RuntimeEffect::SetDragCursor(false));
            }
            interaction.snap_preview = None;
        }
        DesktopAction::BeginResize {
            window_id,
            edge,
            pointer,
        } => {
            if let Some(session) = ResizeSession::begin(registry, window_id, edge, pointer) {
                registry.focus_window(window_id);
                interaction.dragging = None;
                interaction.snap_preview = None;
                interaction.resizing = Some(session);
                effects.push(RuntimeEffect::SetDragCursor(true));
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resizing.as_ref() {
                session.update(registry, pointer);
            }
        }
        DesktopAction::EndResize => {
            if interaction.resizing.take().is_some() {
                effects.push(RuntimeEffect::SetDragCursor(false));
            }
        }
        DesktopAction::ToggleAssistant => {
            state.assistant_open = !state.assistant_open;
        }
        DesktopAction::SetTheme { theme } => {
            state.settings.theme = theme;
        }
        DesktopAction::ToggleTheme => {
            state.settings.theme = state.settings.theme.toggled();
        }
        DesktopAction::SetAccentColor { color } => {
            state.settings.accent_color = color;
        }
        DesktopAction::SetWallpaper { wallpaper_id } => {
            if !WALLPAPER_PRESETS
                .iter()
                .any(|preset| preset.id == wallpaper_id)
            {
                return Err(ReducerError::UnknownWallpaper(wallpaper_id));
            }
            state.settings.wallpaper_id = wallpaper_id;
        }
    }

    Ok(effects)
}

/// Drops a gesture whose window just went away or was hidden.
fn clear_gestures_for(
    interaction: &mut InteractionState,
    window_id: WindowId,
    effects: &mut Vec<RuntimeEffect>,
) {
    let dragging = interaction
        .dragging
        .as_ref()
        .is_some_and(|session| session.window_id == window_id);
    let resizing = interaction
        .resizing
        .as_ref()
        .is_some_and(|session| session.window_id == window_id);
    if dragging {
        interaction.dragging = None;
        interaction.snap_preview = None;
    }
    if resizing {
        interaction.resizing = None;
    }
    if dragging || resizing {
        effects.push(RuntimeEffect::SetDragCursor(false));
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppCommand, ThemeMode};
    use pretty_assertions::assert_eq;

    use super::*;

    const VIEWPORT: Viewport = Viewport::new(1280, 800);

    fn open(state: &mut DesktopState, interaction: &mut InteractionState, app_id: &str) -> WindowId {
        let effects = reduce_desktop(
            state,
            interaction,
            DesktopAction::OpenWindow {
                app_id: app_id.to_string(),
                viewport: VIEWPORT,
            },
        )
        .expect("open window");
        match effects.as_slice() {
            [RuntimeEffect::FocusWindowInput(window_id)] => *window_id,
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn open_window_focuses_new_window_and_requests_input_focus() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let first = open(&mut state, &mut interaction, "notes");
        let second = open(&mut state, &mut interaction, "file-explorer");

        assert_eq!(state.active_window_id(), Some(second));
        assert_eq!(state.registry.len(), 2);
        assert_eq!(state.registry.windows()[0].id, first);
        assert!(
            state.registry.window(second).expect("second").z_index
                > state.registry.window(first).expect("first").z_index
        );
    }

    #[test]
    fn unknown_app_is_reported_and_state_is_untouched() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let before = state.clone();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::OpenWindow {
                app_id: "calculator".to_string(),
                viewport: VIEWPORT,
            },
        )
        .expect_err("unknown app");

        assert_eq!(err.to_string(), "app not found: calculator");
        assert_eq!(state, before);
    }

    #[test]
    fn stale_window_actions_are_absorbed() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, "notes");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        )
        .expect("close");

        for action in [
            DesktopAction::FocusWindow { window_id: id },
            DesktopAction::MinimizeWindow { window_id: id },
            DesktopAction::TitleBarDoubleClick { window_id: id },
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition::new(1, 1),
                viewport: VIEWPORT,
            },
        ] {
            let effects = reduce_desktop(&mut state, &mut interaction, action).expect("no-op");
            assert_eq!(effects, Vec::new());
        }
        assert!(state.registry.is_empty());
        assert_eq!(interaction, InteractionState::default());
    }

    #[test]
    fn title_bar_double_click_toggles_maximize() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, "notes");

        let toggle = |state: &mut DesktopState, interaction: &mut InteractionState| {
            reduce_desktop(
                state,
                interaction,
                DesktopAction::TitleBarDoubleClick { window_id: id },
            )
            .expect("double click");
            state.registry.window(id).expect("window").state
        };

        assert_eq!(toggle(&mut state, &mut interaction), WindowState::Maximized);
        assert_eq!(toggle(&mut state, &mut interaction), WindowState::Normal);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SnapWindow {
                window_id: id,
                zone: Some(SnapZone::TopRight),
                viewport: VIEWPORT,
            },
        )
        .expect("snap");
        assert_eq!(toggle(&mut state, &mut interaction), WindowState::Normal);
    }

    #[test]
    fn drag_gesture_tracks_preview_and_snaps_on_release() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, "notes");

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition::new(500, 200),
                viewport: VIEWPORT,
            },
        )
        .expect("begin");
        assert_eq!(effects, vec![RuntimeEffect::SetDragCursor(true)]);

        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::UpdateMove {
                pointer: PointerPosition::new(1275, 30),
                viewport: VIEWPORT,
            },
        )
        .expect("move");
        assert_eq!(interaction.snap_preview, Some(SnapZone::TopRight));

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::EndMove { viewport: VIEWPORT },
        )
        .expect("end");
        assert_eq!(effects, vec![RuntimeEffect::SetDragCursor(false)]);
        assert_eq!(interaction, InteractionState::default());

        let record = state.registry.window(id).expect("window");
        assert_eq!(record.snap_zone, Some(SnapZone::TopRight));
        assert_eq!(record.position, Position::new(640, 28));
    }

    #[test]
    fn closing_the_dragged_window_ends_the_gesture() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();
        let id = open(&mut state, &mut interaction, "notes");
        reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::BeginMove {
                window_id: id,
                pointer: PointerPosition::new(400, 100),
                viewport: VIEWPORT,
            },
        )
        .expect("begin");

        let effects = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::CloseWindow { window_id: id },
        )
        .expect("close");

        assert_eq!(effects, vec![RuntimeEffect::SetDragCursor(false)]);
        assert!(!interaction.gesture_active());
    }

    #[test]
    fn app_commands_map_to_settings_and_open_actions() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        for command in [
            AppCommand::SetTheme {
                theme: ThemeMode::Dark,
            },
            AppCommand::SetAccentColor {
                color: "#ff9500".to_string(),
            },
            AppCommand::SetWallpaper {
                wallpaper_id: "dark-2".to_string(),
            },
            AppCommand::OpenApp {
                app_id: "browser".to_string(),
            },
        ] {
            reduce_desktop(
                &mut state,
                &mut interaction,
                DesktopAction::from_app_command(command, VIEWPORT),
            )
            .expect("apply command");
        }

        assert_eq!(state.settings.theme, ThemeMode::Dark);
        assert_eq!(state.settings.accent_color, "#ff9500");
        assert_eq!(state.settings.wallpaper_id, "dark-2");
        assert_eq!(state.registry.windows_by_app("browser").count(), 1);
    }

    #[test]
    fn unknown_wallpaper_is_rejected() {
        let mut state = DesktopState::default();
        let mut interaction = InteractionState::default();

        let err = reduce_desktop(
            &mut state,
            &mut interaction,
            DesktopAction::SetWallpaper {
                wallpaper_id: "aurora".to_string(),
            },
        )
        .expect_err("unknown wallpaper");

        assert_eq!(err, ReducerError::UnknownWallpaper("aurora".to_string()));
        assert_eq!(state.settings.wallpaper_id, "gradient-1");
    }
}
