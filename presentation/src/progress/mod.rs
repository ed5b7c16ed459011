//! Progress reporting while the provider is working

pub mod reporter;
