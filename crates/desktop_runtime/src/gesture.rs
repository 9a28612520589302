//! Pointer drag/resize sessions applied to a [`WindowRegistry`].
//!
//! Sessions are plain data captured at pointer-down; every pointer-move recomputes geometry from
//! the captured start so rounding never accumulates.

use crate::geometry;
use crate::model::{
    DragSession, PointerPosition, Position, ResizeEdge, ResizeSession, SnapZone, Viewport,
    WindowId,
};
use crate::window_manager::WindowRegistry;

impl DragSession {
    /// Starts a title-bar drag.
    ///
    /// Returns `None` for missing, minimized, or maximized windows. A snapped window is unsnapped
    /// immediately and re-centered under the pointer using half its pre-snap width. The written
    /// position is clamped to the viewport; the unclamped grab point anchors later moves.
    pub fn begin(
        registry: &mut WindowRegistry,
        window_id: WindowId,
        pointer: PointerPosition,
        viewport: Viewport,
    ) -> Option<Self> {
        let window = registry.window(window_id)?;
        if !window.can_drag() {
            return None;
        }

        let pre_snap = window.pre_snap.filter(|_| window.is_snapped());
        let current = window.position;

        let position_start = match pre_snap {
            Some(pre_snap) => {
                let grab = Position::new(
                    pointer.x - pre_snap.w / 2,
                    pointer.y - registry.config().snapped_drag_grab_offset,
                );
                let config = *registry.config();
                registry.unsnap_window(window_id);
                registry.update_window_position(
                    window_id,
                    geometry::clamp_drag_position(grab, viewport, &config),
                );
                grab
            }
            None => current,
        };

        Some(Self {
            window_id,
            pointer_start: pointer,
            position_start,
        })
    }

    /// Moves the window to `start + delta` (clamped) and returns the live snap preview.
    pub fn update(
        &self,
        registry: &mut WindowRegistry,
        pointer: PointerPosition,
        viewport: Viewport,
    ) -> Option<SnapZone> {
        let config = *registry.config();
        let proposed = Position::new(
            self.position_start.x + pointer.x - self.pointer_start.x,
            self.position_start.y + pointer.y - self.pointer_start.y,
        );
        let position = geometry::clamp_drag_position(proposed, viewport, &config);
        registry.update_window_position(self.window_id, position);
        geometry::detect_snap_zone(pointer, viewport, &config)
    }

    /// Ends the drag, snapping into `preview` when one was showing.
    pub fn finish(
        &self,
        registry: &mut WindowRegistry,
        preview: Option<SnapZone>,
        viewport: Viewport,
    ) -> bool {
        registry.snap_window(self.window_id, preview, viewport)
    }
}

impl ResizeSession {
    /// Starts an edge/corner resize. Only normal windows can be resized.
    pub fn begin(
        registry: &WindowRegistry,
        window_id: WindowId,
        edge: ResizeEdge,
        pointer: PointerPosition,
    ) -> Option<Self> {
        let window = registry.window(window_id)?;
        if !window.can_resize() {
            return None;
        }
        Some(Self {
            window_id,
            edge,
            pointer_start: pointer,
            rect_start: window.rect(),
            min_size: registry.min_size_for(window_id),
        })
    }

    /// Applies the pointer delta since the gesture began.
    pub fn update(&self, registry: &mut WindowRegistry, pointer: PointerPosition) -> bool {
        let Some(current) = registry.window(self.window_id).map(|window| window.rect()) else {
            return false;
        };
        let next = geometry::resize_rect(
            self.rect_start,
            current,
            self.edge,
            pointer.x - self.pointer_start.x,
            pointer.y - self.pointer_start.y,
            self.min_size,
        );
        registry.update_window_size(self.window_id, next.size());
        if next.position() != current.position() {
            registry.update_window_position(self.window_id, next.position());
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use desktop_app_contract::{AppCatalog, AppDescriptor, WindowSize};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::WindowManagerConfig;
    use crate::model::{WindowRect, WindowState};

    const VIEWPORT: Viewport = Viewport::new(1000, 700);

    fn registry() -> WindowRegistry {
        WindowRegistry::new(
            AppCatalog::new([AppDescriptor {
                app_id: "notes",
                name: "Notes",
                icon: "notes",
                default_size: WindowSize::new(400, 300),
                min_size: WindowSize::new(300, 200),
                allow_multiple_instances: true,
                external_url: None,
                desktop_order: Some(1),
                dock_order: Some(1),
            }]),
            WindowManagerConfig::default(),
        )
    }

    fn rect(registry: &WindowRegistry, id: WindowId) -> WindowRect {
        registry.window(id).expect("window").rect()
    }

    #[test]
    fn drag_moves_by_pointer_delta() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let start = rect(&registry, id);

        let session = DragSession::begin(&mut registry, id, PointerPosition::new(400, 200), VIEWPORT)
            .expect("drag");
        let preview = session.update(&mut registry, PointerPosition::new(450, 260), VIEWPORT);

        assert_eq!(preview, None);
        assert_eq!(rect(&registry, id), start.offset(50, 60));
    }

    #[test]
    fn drag_is_refused_while_maximized() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        registry.maximize_window(id);

        assert_eq!(
            DragSession::begin(&mut registry, id, PointerPosition::new(10, 10), VIEWPORT),
            None
        );
    }

    #[test]
    fn dragging_snapped_window_unsnaps_under_pointer() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let original = rect(&registry, id);
        registry.snap_window(id, Some(SnapZone::Left), VIEWPORT);

        let session = DragSession::begin(&mut registry, id, PointerPosition::new(250, 40), VIEWPORT)
            .expect("drag");

        let record = registry.window(id).expect("window");
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.pre_snap, None);
        assert_eq!(record.size, original.size());
        assert_eq!(session.position_start, Position::new(50, 20));
        assert_eq!(record.position, Position::new(50, 20));
    }

    #[test]
    fn grabbing_snapped_window_near_left_edge_keeps_it_on_screen() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        registry.snap_window(id, Some(SnapZone::Left), VIEWPORT);

        let session = DragSession::begin(&mut registry, id, PointerPosition::new(40, 40), VIEWPORT)
            .expect("drag");
        assert_eq!(session.position_start, Position::new(-160, 20));
        assert_eq!(rect(&registry, id).position(), Position::new(0, 20));

        assert!(!session.finish(&mut registry, None, VIEWPORT));
        let record = registry.window(id).expect("window");
        assert_eq!(record.state, WindowState::Normal);
        assert_eq!(record.position, Position::new(0, 20));

        session.update(&mut registry, PointerPosition::new(340, 40), VIEWPORT);
        assert_eq!(rect(&registry, id).position(), Position::new(140, 20));
    }

    #[test]
    fn release_in_left_zone_snaps_to_half_width() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");

        let session = DragSession::begin(&mut registry, id, PointerPosition::new(300, 200), VIEWPORT)
            .expect("drag");
        let preview = session.update(&mut registry, PointerPosition::new(5, 300), VIEWPORT);
        assert_eq!(preview, Some(SnapZone::Left));

        assert!(session.finish(&mut registry, preview, VIEWPORT));
        let record = registry.window(id).expect("window");
        assert_eq!(record.state, WindowState::Snapped);
        assert_eq!(record.size.width, VIEWPORT.width / 2);
    }

    #[test]
    fn resize_is_refused_unless_normal() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        registry.snap_window(id, Some(SnapZone::Right), VIEWPORT);

        assert_eq!(
            ResizeSession::begin(&registry, id, ResizeEdge::East, PointerPosition::new(0, 0)),
            None
        );
    }

    #[test]
    fn west_resize_past_minimum_holds_last_valid_geometry() {
        let mut registry = registry();
        let id = registry.open_window("notes", VIEWPORT).expect("open");
        let start = rect(&registry, id);
        let session =
            ResizeSession::begin(&registry, id, ResizeEdge::West, PointerPosition::new(100, 100))
                .expect("resize");

        session.update(&mut registry, PointerPosition::new(150, 100));
        let valid = rect(&registry, id);
        assert_eq!(valid.w, start.w - 50);
        assert_eq!(valid.x, start.x + 50);

        session.update(&mut registry, PointerPosition::new(400, 100));
        assert_eq!(rect(&registry, id), valid);
    }
}
