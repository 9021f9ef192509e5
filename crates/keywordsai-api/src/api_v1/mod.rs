mod common;
mod prompts;
mod stream;

pub use common::*;
pub use prompts::*;
pub use stream::*;
