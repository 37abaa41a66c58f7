use super::*;
use chromakit_foundation::PointerEventKind;

const SQUARE: Rect = Rect::new(0.0, 0.0, 200.0, 100.0);
const HUE_BAR: Rect = Rect::new(0.0, 120.0, 360.0, 10.0);

fn picker(initial: Color) -> (ColorPicker, PointerScope) {
    let scope = PointerScope::new();
    let picker = ColorPicker::new(initial, &scope);
    picker.set_regions(SQUARE, HUE_BAR);
    (picker, scope)
}

fn press(picker: &ColorPicker, x: f32, y: f32) -> bool {
    picker.on_pointer_down(&PointerEvent::mouse(PointerEventKind::Down, x, y))
}

fn drag_to(scope: &PointerScope, x: f32, y: f32) {
    scope.dispatch(&PointerEvent::mouse(PointerEventKind::Move, x, y));
}

fn lift(scope: &PointerScope) {
    scope.dispatch(&PointerEvent::mouse(PointerEventKind::Up, 0.0, 0.0));
}

struct Scripted(Result<&'static str, fn() -> ShellError>);

impl ColorSampler for Scripted {
    fn sample(&mut self) -> Result<String, ShellError> {
        match &self.0 {
            Ok(hex) => Ok(hex.to_string()),
            Err(make) => Err(make()),
        }
    }
}

#[test]
fn starts_from_initial_color() {
    let (picker, _scope) = picker(Color(0xFF, 0x6B, 0x00));
    assert_eq!(picker.hex(), "#FF6B00");
    assert_eq!(picker.hex_input(), "#FF6B00");
    assert_eq!(picker.swatch(), Brush::Solid(Color(0xFF, 0x6B, 0x00)));
}

#[test]
fn square_corners_map_to_white_and_black() {
    let (picker, scope) = picker(Color(0xFF, 0x6B, 0x00));
    let hue = picker.hsv().h();

    assert!(press(&picker, 0.0, 0.0));
    assert_eq!(picker.color(), Color::WHITE);

    drag_to(&scope, 200.0, 100.0);
    assert_eq!(picker.color(), Color::BLACK);
    assert_eq!(picker.hex_input(), "#000000");
    assert_eq!(picker.hsv().h(), hue);
    lift(&scope);
    assert!(!picker.is_dragging());
}

#[test]
fn dragging_past_the_square_clamps() {
    let (picker, scope) = picker(Color::RED);
    press(&picker, 100.0, 50.0);
    drag_to(&scope, -500.0, 900.0);
    assert_eq!(picker.hsv().s(), 0.0);
    assert_eq!(picker.hsv().v(), 0.0);
}

#[test]
fn hue_bar_sets_hue() {
    let (picker, scope) = picker(Color::RED);
    assert!(press(&picker, 180.0, 125.0));
    assert_eq!(picker.color(), Color(0, 255, 255));
    assert_eq!(picker.hue_marker(), 50.0);

    drag_to(&scope, 360.0, 400.0);
    assert_eq!(picker.hsv().h(), 0.0);
    assert_eq!(picker.color(), Color::RED);
}

#[test]
fn press_outside_both_regions_is_ignored() {
    let (picker, scope) = picker(Color::RED);
    assert!(!press(&picker, 500.0, 500.0));
    assert_eq!(scope.listener_count(), 0);
    assert_eq!(picker.color(), Color::RED);
}

#[test]
fn listener_fires_only_on_actual_changes() {
    let (picker, scope) = picker(Color::RED);
    let seen = Rc::new(RefCell::new(Vec::new()));
    picker.on_change({
        let seen = Rc::clone(&seen);
        move |color| seen.borrow_mut().push(color)
    });

    press(&picker, 0.0, 0.0);
    drag_to(&scope, 0.0, 0.0);
    drag_to(&scope, 200.0, 100.0);
    lift(&scope);

    assert_eq!(seen.borrow().as_slice(), &[Color::WHITE, Color::BLACK]);
}

#[test]
fn listener_may_read_the_picker() {
    let scope = PointerScope::new();
    let picker = Rc::new(ColorPicker::new(Color::RED, &scope));
    picker.set_regions(SQUARE, HUE_BAR);
    let seen = Rc::new(RefCell::new(Vec::new()));
    picker.on_change({
        let seen = Rc::clone(&seen);
        let picker = Rc::downgrade(&picker);
        move |_| {
            if let Some(picker) = picker.upgrade() {
                seen.borrow_mut().push(picker.hex());
            }
        }
    });

    press(&picker, 0.0, 0.0);
    assert_eq!(seen.borrow().as_slice(), &["#FFFFFF".to_string()]);
}

#[test]
fn valid_hex_input_is_applied() {
    let (picker, _scope) = picker(Color::RED);
    picker.set_hex_input(" #0f0 ");
    assert_eq!(picker.hex_input(), "#0F0");

    let applied = picker.apply_hex_input().expect("valid hex");
    assert_eq!(applied, Color::GREEN);
    assert_eq!(picker.hex(), "#00FF00");
    assert_eq!(picker.hex_input(), "#00FF00");
}

#[test]
fn invalid_hex_input_is_kept_but_not_applied() {
    let (picker, _scope) = picker(Color::RED);
    for text in ["00FF00", "#12", "#GGGGGG", ""] {
        picker.set_hex_input(text);
        let result = picker.apply_hex_input();
        assert!(
            matches!(result, Err(ShellError::Color(ColorError::InvalidFormat(_)))),
            "{text:?} should be rejected"
        );
        assert_eq!(picker.hex(), "#FF0000");
        assert_eq!(picker.hex_input(), text.to_uppercase());
    }
}

#[test]
fn markers_track_hsv() {
    let (picker, _scope) = picker(Color::WHITE);
    assert_eq!(picker.saturation_value_marker(), Point::new(0.0, 0.0));

    picker.set_value(Color::BLACK);
    assert_eq!(picker.saturation_value_marker(), Point::new(0.0, 100.0));

    picker.set_value(Color::RED);
    assert_eq!(picker.saturation_value_marker(), Point::new(100.0, 0.0));
    assert_eq!(picker.hue_marker(), 0.0);
}

#[test]
fn square_base_is_the_pure_hue() {
    let (picker, _scope) = picker(Color(0, 128, 128));
    assert_eq!(picker.saturation_value_base(), Color(0, 255, 255));
    assert_eq!(picker.hue_track(), Brush::hue_spectrum());
}

#[test]
fn host_sample_is_applied() {
    let (picker, _scope) = picker(Color::RED);
    let mut sampler = Scripted(Ok("#123456"));
    let color = picker.sample_from_host(&mut sampler).expect("sampled");
    assert_eq!(color, Color(0x12, 0x34, 0x56));
    assert_eq!(picker.hex(), "#123456");
}

#[test]
fn cancelled_or_garbled_sample_leaves_state() {
    let (picker, _scope) = picker(Color::RED);

    let mut cancelled = Scripted(Err(|| ShellError::SamplerCancelled));
    assert!(matches!(
        picker.sample_from_host(&mut cancelled),
        Err(ShellError::SamplerCancelled)
    ));

    let mut garbled = Scripted(Ok("rgb(1, 2, 3)"));
    assert!(matches!(
        picker.sample_from_host(&mut garbled),
        Err(ShellError::Color(ColorError::InvalidFormat(_)))
    ));
    assert_eq!(picker.hex(), "#FF0000");
}

#[test]
fn dropping_the_picker_mid_drag_detaches() {
    let (picker, scope) = picker(Color::RED);
    press(&picker, 10.0, 10.0);
    assert_eq!(scope.listener_count(), 1);
    drop(picker);
    assert_eq!(scope.listener_count(), 0);
    drag_to(&scope, 50.0, 50.0);
}
