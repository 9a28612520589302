//! Pure geometry for snapping, maximizing, dragging, resizing, and initial placement.

use desktop_app_contract::WindowSize;

use crate::config::WindowManagerConfig;
use crate::model::{
    PointerPosition, Position, ResizeEdge, SnapZone, Viewport, WindowRecord, WindowRect,
};

/// Returns the snap zone under `pointer`, if any. Corner zones win over edge zones.
pub fn detect_snap_zone(
    pointer: PointerPosition,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> Option<SnapZone> {
    let threshold = config.snap_threshold;
    let near_left = pointer.x < threshold;
    let near_right = pointer.x > viewport.width - threshold;
    let near_top = pointer.y < config.status_bar_height + threshold;
    let near_bottom = pointer.y > viewport.height - config.dock_height - threshold;

    match (near_left, near_right, near_top, near_bottom) {
        (true, _, true, _) => Some(SnapZone::TopLeft),
        (_, true, true, _) => Some(SnapZone::TopRight),
        (true, _, _, true) => Some(SnapZone::BottomLeft),
        (_, true, _, true) => Some(SnapZone::BottomRight),
        (true, _, _, _) => Some(SnapZone::Left),
        (_, true, _, _) => Some(SnapZone::Right),
        _ => None,
    }
}

/// Target geometry for a window snapped into `zone`.
pub fn snap_zone_rect(
    zone: SnapZone,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> WindowRect {
    let top = config.status_bar_height;
    let available_height = config.work_area_height(viewport.height);
    let half_width = viewport.width / 2;
    let half_height = available_height / 2;

    let (x, y, w, h) = match zone {
        SnapZone::Left => (0, top, half_width, available_height),
        SnapZone::Right => (half_width, top, half_width, available_height),
        SnapZone::TopLeft => (0, top, half_width, half_height),
        SnapZone::TopRight => (half_width, top, half_width, half_height),
        SnapZone::BottomLeft => (0, top + half_height, half_width, half_height),
        SnapZone::BottomRight => (half_width, top + half_height, half_width, half_height),
    };
    WindowRect { x, y, w, h }
}

/// Render geometry of a maximized window: the full width between status bar and dock.
pub fn maximized_rect(viewport: Viewport, config: &WindowManagerConfig) -> WindowRect {
    WindowRect {
        x: 0,
        y: config.status_bar_height,
        w: viewport.width,
        h: config.work_area_height(viewport.height),
    }
}

/// Keeps at least `drag_visible_margin` pixels of a dragged window reachable.
pub fn clamp_drag_position(
    position: Position,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> Position {
    let max_x = (viewport.width - config.drag_visible_margin).max(0);
    let max_y = (viewport.height - config.drag_visible_margin).max(0);
    Position::new(position.x.clamp(0, max_x), position.y.clamp(0, max_y))
}

/// Centered placement for a newly opened window, staggered by `cascade_index`.
pub fn cascade_position(
    size: WindowSize,
    viewport: Viewport,
    cascade_index: u32,
    config: &WindowManagerConfig,
) -> Position {
    let slots = config.cascade_slots.max(1);
    let offset = (cascade_index % slots) as i32 * config.cascade_step;
    let usable_height = viewport.height - config.open_reserved_height;
    Position::new(
        ((viewport.width - size.width) / 2 + offset).max(config.open_margin),
        ((usable_height - size.height) / 2 + offset).max(config.open_margin),
    )
}

/// Applies a resize gesture delta for `edge`.
///
/// East/south growth is floored at `min`. West/north moves the origin so the opposite edge stays
/// put, and is skipped entirely (keeping `current`) when it would shrink below `min`.
pub fn resize_rect(
    start: WindowRect,
    current: WindowRect,
    edge: ResizeEdge,
    dx: i32,
    dy: i32,
    min: WindowSize,
) -> WindowRect {
    let mut next = start;

    if edge.includes_east() {
        next.w = (start.w + dx).max(min.width);
    }
    if edge.includes_west() {
        let proposed = start.w - dx;
        if proposed >= min.width {
            next.w = proposed;
            next.x = start.x + dx;
        } else {
            next.w = current.w;
            next.x = current.x;
        }
    }
    if edge.includes_south() {
        next.h = (start.h + dy).max(min.height);
    }
    if edge.includes_north() {
        let proposed = start.h - dy;
        if proposed >= min.height {
            next.h = proposed;
            next.y = start.y + dy;
        } else {
            next.h = current.h;
            next.y = current.y;
        }
    }
    next
}

/// Inline style for a window frame. Maximized windows fill the work area; minimized ones are hidden
/// but stay mounted so app state survives.
pub fn window_frame_style(
    window: &WindowRecord,
    viewport: Viewport,
    config: &WindowManagerConfig,
) -> String {
    let rect = if window.is_maximized() {
        maximized_rect(viewport, config)
    } else {
        window.rect()
    };
    let display = if window.is_minimized() {
        "display:none;"
    } else {
        ""
    };
    format!("{}z-index:{};{display}", rect.to_css(), window.z_index)
}
