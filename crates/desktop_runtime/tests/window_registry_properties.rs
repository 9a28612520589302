use desktop_runtime::{
    reduce_desktop, DesktopAction, DesktopState, InteractionState, PointerPosition, SnapZone,
    Viewport, WindowId, WindowRegistry, WindowState,
};
use pretty_assertions::assert_eq;

const VIEWPORT: Viewport = Viewport::new(1280, 800);
const APPS: [&str; 4] = ["notes", "browser", "settings", "file-explorer"];

/// Small deterministic generator so operation sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: usize) -> usize {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.0 >> 33) as usize) % bound
    }
}

fn active_count(registry: &WindowRegistry) -> usize {
    registry.windows().iter().filter(|w| w.is_active).count()
}

fn pick(registry: &WindowRegistry, rng: &mut Lcg) -> WindowId {
    if registry.is_empty() {
        return WindowId(999);
    }
    registry.windows()[rng.next(registry.len())].id
}

#[test]
fn random_operation_sequences_keep_at_most_one_active_window() {
    for seed in 1..=20 {
        let mut rng = Lcg(seed);
        let mut registry = WindowRegistry::default();

        for _ in 0..200 {
            let target = pick(&registry, &mut rng);
            match rng.next(9) {
                0 | 1 => {
                    let app = APPS[rng.next(APPS.len())];
                    registry.open_window(app, VIEWPORT).expect("builtin app opens");
                }
                2 => {
                    registry.close_window(target);
                }
                3 => {
                    registry.minimize_window(target);
                }
                4 => {
                    registry.maximize_window(target);
                }
                5 => {
                    registry.restore_window(target);
                }
                6 => {
                    let zone = SnapZone::ALL[rng.next(SnapZone::ALL.len())];
                    registry.snap_window(target, Some(zone), VIEWPORT);
                }
                7 => {
                    registry.unsnap_window(target);
                }
                _ => {
                    if registry.focus_window(target) {
                        let focused = registry.window(target).expect("focused window");
                        let others_below = registry
                            .windows()
                            .iter()
                            .filter(|w| w.id != target)
                            .all(|w| w.z_index < focused.z_index);
                        assert!(others_below, "seed {seed}: focus must own the top z-index");
                    }
                }
            }

            let visible = registry.visible_windows().count();
            assert_eq!(
                active_count(&registry),
                visible.min(1),
                "seed {seed}: active window count"
            );
            assert_eq!(
                registry.active_window_id(),
                registry.windows().iter().find(|w| w.is_active).map(|w| w.id)
            );
        }
    }
}

#[test]
fn restore_on_normal_window_never_moves_it() {
    let mut registry = WindowRegistry::default();
    let first = registry.open_window("notes", VIEWPORT).expect("open");
    registry.open_window("notes", VIEWPORT).expect("open");
    let before = registry.window(first).expect("window").rect();

    assert!(registry.restore_window(first));

    let after = registry.window(first).expect("window");
    assert_eq!(after.rect(), before);
    assert_eq!(after.state, WindowState::Normal);
    assert!(after.is_active);
}

#[test]
fn snap_round_trip_does_not_drift_across_zone_changes() {
    let mut registry = WindowRegistry::default();
    let id = registry.open_window("browser", VIEWPORT).expect("open");
    let original = registry.window(id).expect("window").rect();

    for zone in [
        SnapZone::Left,
        SnapZone::TopRight,
        SnapZone::BottomLeft,
        SnapZone::Right,
    ] {
        assert!(registry.snap_window(id, Some(zone), VIEWPORT));
    }
    assert!(registry.unsnap_window(id));

    let record = registry.window(id).expect("window");
    assert_eq!(record.rect(), original);
    assert_eq!(record.state, WindowState::Normal);
    assert_eq!(record.snap_zone, None);
    assert_eq!(record.pre_snap, None);
}

#[test]
fn single_instance_app_opens_once() {
    let mut registry = WindowRegistry::default();

    let first = registry.open_window("settings", VIEWPORT).expect("open");
    let second = registry.open_window("settings", VIEWPORT).expect("open");

    assert_eq!(first, second);
    assert_eq!(registry.windows_by_app("settings").count(), 1);
}

#[test]
fn multi_instance_app_opens_a_new_topmost_window_each_time() {
    let mut registry = WindowRegistry::default();

    let first = registry.open_window("notes", VIEWPORT).expect("open");
    let second = registry.open_window("notes", VIEWPORT).expect("open");

    assert!(first != second);
    assert_eq!(registry.len(), 2);
    let first = registry.window(first).expect("first");
    let second = registry.window(second).expect("second");
    assert!(second.z_index > first.z_index);
    assert!(second.is_active);
    assert!(!first.is_active);
}

#[test]
fn closing_the_top_window_skips_minimized_windows_when_reelecting() {
    let mut registry = WindowRegistry::default();
    let a = registry.open_window("notes", VIEWPORT).expect("a");
    let b = registry.open_window("notes", VIEWPORT).expect("b");
    let c = registry.open_window("notes", VIEWPORT).expect("c");
    registry.minimize_window(b);
    registry.focus_window(c);

    assert!(registry.close_window(c));

    assert_eq!(registry.active_window_id(), Some(a));
    assert!(!registry.window(b).expect("b").is_active);
}

#[test]
fn drag_released_at_left_edge_snaps_through_the_reducer() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();
    let mut dispatch = |action| {
        reduce_desktop(&mut state, &mut interaction, action).expect("reducer accepts action")
    };

    dispatch(DesktopAction::OpenWindow {
        app_id: "notes".to_string(),
        viewport: VIEWPORT,
    });
    let id = WindowId(1);

    dispatch(DesktopAction::BeginMove {
        window_id: id,
        pointer: PointerPosition::new(400, 200),
        viewport: VIEWPORT,
    });
    dispatch(DesktopAction::UpdateMove {
        pointer: PointerPosition::new(5, 300),
        viewport: VIEWPORT,
    });
    dispatch(DesktopAction::EndMove { viewport: VIEWPORT });

    let record = state.registry.window(id).expect("window");
    assert_eq!(record.state, WindowState::Snapped);
    assert_eq!(record.snap_zone, Some(SnapZone::Left));
    assert_eq!(record.size.width, VIEWPORT.width / 2);
    assert!(!interaction.gesture_active());
}

#[test]
fn clicking_a_snapped_title_bar_without_moving_leaves_it_on_screen() {
    let mut state = DesktopState::default();
    let mut interaction = InteractionState::default();
    let mut dispatch = |action| {
        reduce_desktop(&mut state, &mut interaction, action).expect("reducer accepts action")
    };

    dispatch(DesktopAction::OpenWindow {
        app_id: "browser".to_string(),
        viewport: VIEWPORT,
    });
    let id = WindowId(1);
    dispatch(DesktopAction::SnapWindow {
        window_id: id,
        zone: Some(SnapZone::Left),
        viewport: VIEWPORT,
    });
    dispatch(DesktopAction::BeginMove {
        window_id: id,
        pointer: PointerPosition::new(40, 40),
        viewport: VIEWPORT,
    });
    dispatch(DesktopAction::EndMove { viewport: VIEWPORT });

    let record = state.registry.window(id).expect("window");
    assert_eq!(record.state, WindowState::Normal);
    assert_eq!(record.size.width, 900);
    assert!(record.position.x >= 0);
    assert!(record.position.y >= 0);
    assert!(!interaction.gesture_active());
}
