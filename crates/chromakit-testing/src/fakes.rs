//! Stand-ins for the host services the shell talks to.

use chromakit_app_shell::{Clipboard, ColorSampler, ShellError};
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;

/// Clipboard that records every write. Clones share the same record, so a
/// test can keep one handle after moving another into the shell.
#[derive(Clone, Default)]
pub struct RecordingClipboard {
    copied: Rc<RefCell<Vec<String>>>,
    failing: Rc<Cell<bool>>,
}

impl RecordingClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every subsequent write fails while `failing` is set.
    pub fn set_failing(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn copied(&self) -> Vec<String> {
        self.copied.borrow().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.copied.borrow().last().cloned()
    }
}

impl Clipboard for RecordingClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShellError> {
        if self.failing.get() {
            return Err(ShellError::Clipboard("write refused".to_string()));
        }
        self.copied.borrow_mut().push(text.to_string());
        Ok(())
    }
}

/// Sampler that replays scripted answers; `None` plays a cancellation.
///
/// Once the script runs out every call is cancelled.
#[derive(Clone, Default)]
pub struct FixedSampler {
    answers: VecDeque<Option<String>>,
    calls: Rc<Cell<usize>>,
}

impl FixedSampler {
    pub fn new<I, S>(hexes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: hexes.into_iter().map(|hex| Some(hex.into())).collect(),
            calls: Rc::default(),
        }
    }

    pub fn cancelled() -> Self {
        Self::default().then_cancel()
    }

    pub fn then_cancel(mut self) -> Self {
        self.answers.push_back(None);
        self
    }

    pub fn then(mut self, hex: impl Into<String>) -> Self {
        self.answers.push_back(Some(hex.into()));
        self
    }

    /// How many times the shell asked for a sample, across clones.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ColorSampler for FixedSampler {
    fn sample(&mut self) -> Result<String, ShellError> {
        self.calls.set(self.calls.get() + 1);
        self.answers
            .pop_front()
            .flatten()
            .ok_or(ShellError::SamplerCancelled)
    }
}
