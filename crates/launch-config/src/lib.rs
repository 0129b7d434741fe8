pub mod errors;

pub mod config;
pub mod edit;
pub mod expand;
pub mod launch;
pub mod store;
pub mod themes;

pub use config::{ConfigDefaults, LaunchConfig, PathCase, deserialize, serialize};
pub use edit::{ConfigEdit, EditContext};
pub use errors::ConfigError;
pub use expand::{MacroExpander, VariableExpander};
pub use launch::{LaunchPlan, build_argv, quote_path_argument, resolve_working_directory};
pub use store::{ConfigMap, Value};
pub use themes::list_available_themes;
