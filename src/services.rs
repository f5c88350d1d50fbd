pub mod coldstart_service;

pub use coldstart_service::{ColdstartImportError, ColdstartService};
