//! Prompt builders.
//!
//! Pure string formatting: each builder returns the system and user
//! instructions for one kind of request, including the JSON shape the model
//! must answer with.
//! - `structure` - submodule / sub-submodule breakdown of a module
//! - `content` - learning material for a single sub-submodule
//! - `metadata` - module overview plus the `build_module` function schema
//! - `quiz` - the final multiple-choice quiz

pub mod content;
pub mod metadata;
pub mod quiz;
pub mod structure;

pub use content::content_prompt;
pub use metadata::{metadata_prompt, module_function, MODULE_FUNCTION_NAME};
pub use quiz::{quiz_prompt, ModuleSummary};
pub use structure::structure_prompt;

/// A system/user instruction pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

impl Prompt {
    pub fn new(system: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
        }
    }
}
