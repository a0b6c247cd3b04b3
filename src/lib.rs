//! multiselect: interactive multi-select checkbox prompt for the terminal.

pub mod prompt;
pub mod types;

pub use prompt::run::{run, run_with_theme};
pub use prompt::state::{Action, Phase, PromptState};
pub use prompt::theme::{StyleClass, Theme};
pub use types::{Choice, PromptConfig, PromptError};
