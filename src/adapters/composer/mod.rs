//! Response composer adapters.

mod echo;
mod openai;

pub use echo::EchoComposer;
pub use openai::{OpenAiComposer, OpenAiComposerConfig};
