pub mod cli;
pub mod core;
pub mod i18n;
pub mod models;
pub mod utils;

pub use crate::core::{
    apply_replacements, validate_json, KeyMigrator, KeyshiftError, MigrationOutcome,
    MigrationReport, ValidationResult,
};
pub use crate::models::config::Config;
pub use crate::models::table::{Replacement, ReplacementTable};
