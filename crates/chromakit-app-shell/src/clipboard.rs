//! Copy-to-clipboard with a transient confirmation toast.

use crate::ShellError;
use std::time::Duration;
use web_time::Instant;

pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ShellError>;
}

/// The platform clipboard.
///
/// Desktop builds go through `arboard`; the handle is kept for the lifetime of
/// the shell because X11 drops clipboard contents when its owner goes away.
pub struct SystemClipboard {
    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self {
            #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
            inner: arboard::Clipboard::new()
                .map_err(|e| log::debug!("System clipboard unavailable: {:?}", e))
                .ok(),
        }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    #[cfg(all(not(target_arch = "wasm32"), not(target_os = "android")))]
    fn set_text(&mut self, text: &str) -> Result<(), ShellError> {
        let clipboard = self.inner.as_mut().ok_or(ShellError::ClipboardUnavailable)?;
        clipboard
            .set_text(text)
            .map_err(|e| ShellError::Clipboard(e.to_string()))
    }

    #[cfg(any(target_arch = "wasm32", target_os = "android"))]
    fn set_text(&mut self, _text: &str) -> Result<(), ShellError> {
        Err(ShellError::ClipboardUnavailable)
    }
}

/// Confirmation shown after a successful copy.
#[derive(Clone, Debug, PartialEq)]
pub struct CopyToast {
    pub text: String,
    pub duration: Duration,
    shown_at: Instant,
}

impl CopyToast {
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            duration,
            shown_at: Instant::now(),
        }
    }

    pub fn shown_at(&self) -> Instant {
        self.shown_at
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) < self.duration
    }

    pub fn is_visible(&self) -> bool {
        self.is_visible_at(Instant::now())
    }
}

/// Copies `text`, returning a toast on success.
///
/// Failures are swallowed: the user simply sees no confirmation.
pub fn copy_with_toast(
    clipboard: &mut dyn Clipboard,
    text: &str,
    duration: Duration,
) -> Option<CopyToast> {
    match clipboard.set_text(text) {
        Ok(()) => Some(CopyToast::new(text, duration)),
        Err(err) => {
            log::debug!("Copy of {text:?} failed: {err}");
            None
        }
    }
}

#[cfg(test)]
#[path = "tests/clipboard_tests.rs"]
mod tests;
