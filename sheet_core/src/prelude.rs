//! Prelude module for convenient imports
//!
//! ```rust
//! use sheet_core::prelude::*;
//! ```

// Sheet
pub use crate::character::Character;
pub use crate::stats::{Attribute, AttributeSet, DerivedStats};

// Dice
pub use crate::dice::{DieSource, ScriptedDice};

// Abilities and results
pub use crate::abilities::Ability;
pub use crate::payload::{Payload, Value};
pub use crate::summary::{summarize, Summary};

// Session
pub use crate::session::Session;

// Config
pub use crate::config::default_sheet;
