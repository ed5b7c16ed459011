//! Application layer for petname-studio
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    generation_gateway::{GatewayError, GenerationGateway},
    progress::{GenerationProgress, NoProgress},
};
pub use use_cases::generate_name::{GenerateError, GenerateNameUseCase};
pub use use_cases::studio::{GenerationForm, PetNameStudio, StudioAction, StudioOutcome};
