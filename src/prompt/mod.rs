//! Interactive checkbox prompt with a scrolling viewport.
//!
//! Organized along FP/Unix boundaries:
//! - `state`: pure data types (PromptState, Phase, Action)
//! - `update`: pure transitions
//! - `view`: pure rendering
//! - `theme`: style classes and merge semantics
//! - `run`: effects boundary (terminal lifecycle, key mapping, event loop)

pub mod run;
pub mod state;
pub mod theme;
pub mod update;
pub mod view;
