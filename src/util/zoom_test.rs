use super::*;

fn chord(key: &str, platform: Platform) -> KeyPress {
    KeyPress {
        key: key.to_owned(),
        ctrl_key: platform == Platform::Other,
        meta_key: platform == Platform::Apple,
        ..KeyPress::default()
    }
}

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

// =============================================================
// Key mapping
// =============================================================

#[test]
fn shortcut_keys_map_to_commands() {
    for platform in [Platform::Apple, Platform::Other] {
        assert_eq!(ZoomCommand::from_key_press(&chord("=", platform), platform), Some(ZoomCommand::In));
        assert_eq!(ZoomCommand::from_key_press(&chord("-", platform), platform), Some(ZoomCommand::Out));
        assert_eq!(ZoomCommand::from_key_press(&chord("0", platform), platform), Some(ZoomCommand::Reset));
    }
}

#[test]
fn unmodified_keys_are_ignored() {
    let press = KeyPress { key: "=".to_owned(), ..KeyPress::default() };
    assert_eq!(ZoomCommand::from_key_press(&press, Platform::Other), None);
}

#[test]
fn wrong_modifier_for_platform_is_ignored() {
    let ctrl = chord("=", Platform::Other);
    assert_eq!(ZoomCommand::from_key_press(&ctrl, Platform::Apple), None);
}

#[test]
fn other_keys_are_ignored() {
    assert_eq!(ZoomCommand::from_key_press(&chord("a", Platform::Other), Platform::Other), None);
    assert_eq!(ZoomCommand::from_key_press(&chord("+", Platform::Other), Platform::Other), None);
}

#[test]
fn composing_input_is_ignored() {
    let mut press = chord("=", Platform::Other);
    press.is_composing = true;
    assert_eq!(ZoomCommand::from_key_press(&press, Platform::Other), None);
}

// =============================================================
// Level arithmetic
// =============================================================

#[test]
fn default_is_unscaled() {
    assert!(approx(ZoomLevel::default().factor(), 1.0));
}

#[test]
fn zoom_in_and_out_step_by_a_tenth() {
    let z = ZoomLevel::default().apply(ZoomCommand::In);
    assert!(approx(z.factor(), 1.1));
    let z = z.apply(ZoomCommand::Out).apply(ZoomCommand::Out);
    assert!(approx(z.factor(), 0.9));
}

#[test]
fn repeated_steps_stay_on_grid() {
    let mut z = ZoomLevel::default();
    for _ in 0..7 {
        z = z.apply(ZoomCommand::In);
    }
    assert!(approx(z.factor(), 1.7));
    assert_eq!(z.css_value(), "1.7");
}

#[test]
fn zoom_out_stops_at_floor() {
    let mut z = ZoomLevel::default();
    for _ in 0..30 {
        z = z.apply(ZoomCommand::Out);
    }
    assert!(approx(z.factor(), ZOOM_MIN));
}

#[test]
fn reset_returns_to_default() {
    let z = ZoomLevel::default()
        .apply(ZoomCommand::In)
        .apply(ZoomCommand::In)
        .apply(ZoomCommand::Reset);
    assert_eq!(z, ZoomLevel::default());
    assert_eq!(z.css_value(), "1");
}

#[test]
fn apply_zoom_is_callable_natively() {
    apply_zoom(ZoomLevel::default());
}
