//! Use cases (application services)

pub mod generate_name;
pub mod studio;
