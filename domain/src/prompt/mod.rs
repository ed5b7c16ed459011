//! Prompt construction for the generation provider.

mod template;

pub use template::PromptTemplate;
