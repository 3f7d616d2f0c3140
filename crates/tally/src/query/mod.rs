//! Query interpretation: intent classification and reference extraction.
//!
//! The rest of the crate only sees an [`Interpretation`]; replacing the
//! keyword rules or the pattern extractors does not touch any handler.

pub mod extract;
mod intent;
mod interpret;

pub use extract::{Comparison, StatusMention, Threshold};
pub use intent::{INTENT_RULES, Intent, IntentClassifier};
pub use interpret::{Interpretation, QueryInterpreter, normalize};
