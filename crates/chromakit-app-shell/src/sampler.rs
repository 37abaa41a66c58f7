use crate::ShellError;

/// A host facility that lets the user pick a color from anywhere on screen.
///
/// Implementations return the sampled value as a hex string (`#RRGGBB`), or
/// `ShellError::SamplerCancelled` when the user backs out.
pub trait ColorSampler {
    fn sample(&mut self) -> Result<String, ShellError>;
}
