//! Editing state for the HSV color picker.
//!
//! The picker keeps HSV as its source of truth so hue survives while the
//! saturation/value square is dragged through black or gray. The hex shown to
//! the user is always derived from that HSV.

use crate::{ColorSampler, ShellError};
use chromakit_foundation::{DragAxis, PointerDragController, PointerEvent, PointerScope};
use chromakit_ui_graphics::{Brush, Color, ColorError, Hsv, Point, Rect};
use std::cell::RefCell;
use std::rc::Rc;

type ChangeListener = Rc<RefCell<Option<Box<dyn FnMut(Color)>>>>;

struct PickerState {
    hsv: Hsv,
    hex_input: String,
}

pub struct ColorPicker {
    state: Rc<RefCell<PickerState>>,
    listener: ChangeListener,
    saturation_value: PointerDragController,
    hue: PointerDragController,
}

impl ColorPicker {
    pub fn new(initial: Color, scope: &PointerScope) -> Self {
        let state = Rc::new(RefCell::new(PickerState {
            hsv: initial.to_hsv(),
            hex_input: initial.to_hex(),
        }));
        let listener: ChangeListener = Rc::new(RefCell::new(None));

        let saturation_value = PointerDragController::new(DragAxis::Plane, scope, {
            let state = Rc::clone(&state);
            let listener = Rc::clone(&listener);
            move |p: Point| {
                let s = f64::from(p.x) * 100.0;
                let v = (1.0 - f64::from(p.y)) * 100.0;
                update(&state, &listener, |hsv| hsv.with_saturation_value(s, v));
            }
        });

        let hue = PointerDragController::new(DragAxis::Horizontal, scope, {
            let state = Rc::clone(&state);
            let listener = Rc::clone(&listener);
            move |p: Point| {
                let h = f64::from(p.x) * 360.0;
                update(&state, &listener, |hsv| hsv.with_hue(h));
            }
        });

        Self {
            state,
            listener,
            saturation_value,
            hue,
        }
    }

    /// Registers the callback invoked with the new color whenever it changes.
    pub fn on_change(&self, callback: impl FnMut(Color) + 'static) {
        self.listener.borrow_mut().replace(Box::new(callback));
    }

    /// Layout results for the saturation/value square and the hue bar.
    pub fn set_regions(&self, saturation_value: Rect, hue: Rect) {
        self.saturation_value.set_bounds(saturation_value);
        self.hue.set_bounds(hue);
    }

    /// Offers a pointer-down to both drag regions. Returns whether one took it.
    pub fn on_pointer_down(&self, event: &PointerEvent) -> bool {
        self.saturation_value.on_pointer_down(event) || self.hue.on_pointer_down(event)
    }

    pub fn is_dragging(&self) -> bool {
        self.saturation_value.is_dragging() || self.hue.is_dragging()
    }

    pub fn hsv(&self) -> Hsv {
        self.state.borrow().hsv
    }

    pub fn color(&self) -> Color {
        self.hsv().to_color()
    }

    pub fn hex(&self) -> String {
        self.color().to_hex()
    }

    /// Resynchronizes from a value set outside the picker.
    pub fn set_value(&self, color: Color) {
        update(&self.state, &self.listener, |_| color.to_hsv());
    }

    pub fn hex_input(&self) -> String {
        self.state.borrow().hex_input.clone()
    }

    /// Replaces the text of the manual hex field without applying it.
    pub fn set_hex_input(&self, text: &str) {
        self.state.borrow_mut().hex_input = text.trim().to_uppercase();
    }

    /// Applies the manual hex field when it holds `#RGB` or `#RRGGBB`.
    ///
    /// Anything else is left in the field and the current color is kept.
    pub fn apply_hex_input(&self) -> Result<Color, ShellError> {
        let text = self.hex_input();
        if !Color::is_valid_hex(&text) {
            log::debug!("Ignoring hex input {text:?}");
            return Err(ColorError::InvalidFormat(text).into());
        }
        let color = Color::from_hex(&text)?;
        self.set_value(color);
        Ok(color)
    }

    /// Picks a color through the host sampler and applies it.
    pub fn sample_from_host(&self, sampler: &mut dyn ColorSampler) -> Result<Color, ShellError> {
        let sampled = sampler.sample()?;
        let color = Color::from_hex(&sampled)?;
        log::debug!("Sampled {color} from host");
        self.set_value(color);
        Ok(color)
    }

    /// Marker position in the saturation/value square, in percent of its size.
    pub fn saturation_value_marker(&self) -> Point {
        let hsv = self.hsv();
        Point::new(hsv.s() as f32, (100.0 - hsv.v()) as f32)
    }

    /// Marker position along the hue bar, in percent of its width.
    pub fn hue_marker(&self) -> f32 {
        (self.hsv().h() / 360.0 * 100.0) as f32
    }

    /// Fully saturated color of the current hue, painted under the square.
    pub fn saturation_value_base(&self) -> Color {
        Hsv::normalized(self.hsv().h(), 100.0, 100.0).to_color()
    }

    pub fn hue_track(&self) -> Brush {
        Brush::hue_spectrum()
    }

    pub fn swatch(&self) -> Brush {
        Brush::solid(self.color())
    }
}

fn update(state: &RefCell<PickerState>, listener: &ChangeListener, f: impl FnOnce(Hsv) -> Hsv) {
    let (previous, next) = {
        let mut state = state.borrow_mut();
        let previous = state.hsv.to_color();
        state.hsv = f(state.hsv);
        let next = state.hsv.to_color();
        state.hex_input = next.to_hex();
        (previous, next)
    };
    if previous == next {
        return;
    }
    match listener.try_borrow_mut() {
        Ok(mut listener) => {
            if let Some(callback) = listener.as_mut() {
                callback(next);
            }
        }
        Err(_) => log::warn!("Picker change listener re-entered; dropping {next}"),
    }
}

#[cfg(test)]
#[path = "tests/picker_tests.rs"]
mod tests;
