pub mod csv_importer;

pub use csv_importer::{ColdstartCsvReader, ColdstartRecord};
