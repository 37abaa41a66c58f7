//! Application state behind the Chromakit views.
//!
//! `AppShell` owns everything a front end needs: the picker, the palette
//! search, the contrast and gradient cards and the clipboard. It is driven by
//! plain pointer events and holds no rendering state of its own.

mod cards;
mod catalog;
mod clipboard;
mod config;
mod error;
mod palette;
mod picker;
mod sampler;

pub use cards::*;
pub use catalog::*;
pub use clipboard::*;
pub use config::*;
pub use error::*;
pub use palette::*;
pub use picker::*;
pub use sampler::*;

use chromakit_foundation::{PointerEvent, PointerEventKind, PointerScope};
use chromakit_ui_graphics::Color;

pub struct AppShell {
    config: ShellConfig,
    catalog: Catalog,
    /// Document-level pointer listeners; drags subscribe here while active.
    scope: PointerScope,
    picker: ColorPicker,
    search: PaletteSearch,
    /// Persistent clipboard for desktop (Linux X11 requires clipboard to stay alive)
    clipboard: Box<dyn Clipboard>,
    sampler: Option<Box<dyn ColorSampler>>,
    toast: Option<CopyToast>,
}

impl AppShell {
    pub fn new(config: ShellConfig, catalog: Catalog) -> Self {
        let scope = PointerScope::new();
        let picker = ColorPicker::new(config.initial_picker_color, &scope);
        let search = PaletteSearch::new(config.family_steps);
        Self {
            config,
            catalog,
            scope,
            picker,
            search,
            clipboard: Box::new(SystemClipboard::new()),
            sampler: None,
            toast: None,
        }
    }

    pub fn with_clipboard(mut self, clipboard: impl Clipboard + 'static) -> Self {
        self.clipboard = Box::new(clipboard);
        self
    }

    pub fn with_sampler(mut self, sampler: impl ColorSampler + 'static) -> Self {
        self.sampler = Some(Box::new(sampler));
        self
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn scope(&self) -> &PointerScope {
        &self.scope
    }

    pub fn picker(&self) -> &ColorPicker {
        &self.picker
    }

    pub fn search(&self) -> &PaletteSearch {
        &self.search
    }

    pub fn search_mut(&mut self) -> &mut PaletteSearch {
        &mut self.search
    }

    /// Routes a pointer event: downs may start a drag, then every event goes
    /// to the document listeners. Returns whether anything consumed it.
    pub fn pointer_event(&self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.picker.on_pointer_down(event);
        }
        self.scope.dispatch(event);
        event.is_consumed()
    }

    pub fn palette_rows(&self) -> Vec<&[Color]> {
        self.catalog.palette_rows(self.config.palette_columns)
    }

    pub fn contrast_cards(&self) -> Vec<ContrastCard> {
        self.catalog
            .contrast_pairs()
            .iter()
            .map(ContrastCard::from)
            .collect()
    }

    pub fn gradient_cards(&self) -> Vec<GradientCard> {
        self.catalog
            .gradients()
            .iter()
            .cloned()
            .map(GradientCard::new)
            .collect()
    }

    /// Copies `text` and shows the toast. A failed copy leaves any earlier
    /// toast in place and returns `None`.
    pub fn copy(&mut self, text: &str) -> Option<&CopyToast> {
        let toast = copy_with_toast(self.clipboard.as_mut(), text, self.config.toast_duration)?;
        self.toast = Some(toast);
        self.toast.as_ref()
    }

    /// The toast, while it is still on screen.
    pub fn toast(&self) -> Option<&CopyToast> {
        self.toast.as_ref().filter(|toast| toast.is_visible())
    }

    pub fn has_sampler(&self) -> bool {
        self.sampler.is_some()
    }

    /// Samples a screen color into the picker through the host sampler.
    pub fn sample_color(&mut self) -> Result<Color, ShellError> {
        match self.sampler.as_mut() {
            Some(sampler) => self.picker.sample_from_host(sampler.as_mut()),
            None => {
                log::debug!("No host color sampler; manual hex entry only");
                Err(ShellError::SamplerUnavailable)
            }
        }
    }
}

pub mod prelude {
    pub use crate::cards::{ContrastCard, GradientCard};
    pub use crate::catalog::{Catalog, ContrastPair};
    pub use crate::clipboard::{copy_with_toast, Clipboard, CopyToast, SystemClipboard};
    pub use crate::config::ShellConfig;
    pub use crate::error::ShellError;
    pub use crate::palette::{FamilyRow, PaletteSearch};
    pub use crate::picker::ColorPicker;
    pub use crate::sampler::ColorSampler;
    pub use crate::AppShell;
}
