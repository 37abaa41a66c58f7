use chromakit_ui_graphics::ColorError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Color(#[from] ColorError),

    /// The host offers no screen color sampler; manual hex entry remains.
    #[error("no host color sampler is available")]
    SamplerUnavailable,

    #[error("color sampling was cancelled")]
    SamplerCancelled,

    #[error("clipboard is not available on this platform")]
    ClipboardUnavailable,

    #[error("clipboard write failed: {0}")]
    Clipboard(String),
}
