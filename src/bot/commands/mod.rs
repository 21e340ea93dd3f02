//! Discord command implementations organized by category.

#![allow(clippy::too_long_first_doc_paragraph)]

/// Natural-language and generation commands
pub mod ai;

/// Export/import commands
pub mod data;

/// Feature request board commands
pub mod features;

/// General utility commands
pub mod general;

/// Meal logging commands
pub mod meal;

/// Weight, water, and progress commands
pub mod tracking;

// Export commands
pub use ai::*;
pub use data::*;
pub use features::*;
pub use general::*;
pub use meal::*;
pub use tracking::*;
