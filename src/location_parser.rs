pub mod core;
#[cfg(test)]
pub(crate) mod mock;
pub mod openai;
pub mod parse;

pub use self::core::{ChatCompletionService, ChatMessage, LocationParser};
pub use openai::OpenAI;
