//! Configuration loading for the employee records service.
//!
//! This module loads service settings from a YAML file, and optional seed
//! data (departments, job titles, employees) used to populate a fresh store.
//!
//! # Example
//!
//! ```no_run
//! use employee_records::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/records.yaml").unwrap();
//! println!("Listening on {}", loader.config().server.bind_address);
//! ```

mod loader;
mod seed;
mod types;

pub use loader::ConfigLoader;
pub use seed::{SeedData, load_seed, seed_store};
pub use types::{AttendanceConfig, LoggingConfig, RecordsConfig, ServerConfig};
