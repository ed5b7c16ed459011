//! Progress notification port
//!
//! Defines the interface for reporting progress while a name is generated.

/// Callback for progress updates during generation
///
/// Implementations live in the presentation layer (spinner, plain text, ...)
pub trait GenerationProgress: Send + Sync {
    /// Called right before the provider is contacted
    fn on_generation_start(&self, subject: &str);

    /// Called once the pipeline has finished, successfully or not
    fn on_generation_complete(&self, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_generation_start(&self, _subject: &str) {}
    fn on_generation_complete(&self, _success: bool) {}
}
