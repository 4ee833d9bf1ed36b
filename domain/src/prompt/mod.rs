//! Prompt construction for the four-round protocol

pub mod assembler;
pub mod template;

pub use assembler::{ContextAssembler, GenerationRequest};
pub use template::PromptTemplate;
