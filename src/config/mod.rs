pub mod exclusions;
pub mod settings;

pub use exclusions::{excluded_strings, exclusion_rules};
