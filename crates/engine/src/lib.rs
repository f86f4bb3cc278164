//! Geoward engine library.
//!
//! Server-side code for the geofence region manager.
//!
//! ## Structure
//!
//! - `use_cases/` - Region, slider and feedback operations
//! - `infrastructure/` - Ports plus Neo4j and in-memory adapters
//! - `api/` - HTTP entry points and caller extraction
//! - `app` - Application composition
//! - `config` - Environment configuration

pub mod api;
pub mod app;
pub mod config;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
