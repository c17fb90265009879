//! airfreight - cargo flight travel-time estimation
//!
//! Estimates how long a cargo plane needs between two points on Earth from the
//! great-circle distance, a fixed route markup, a cruising speed and a fixed
//! allowance for takeoff and landing.
//!
//! # Architecture
//!
//! - `geo` - Points and haversine distance
//! - `estimator` - The travel-time estimate and multi-destination surveys
//! - `config` - Settings and the named place catalog
//! - `mcp` - JSON-RPC tool server over stdio
//! - `cli` - Command-line interface
//!
//! # Example
//!
//! ```rust
//! use airfreight::estimator::estimate;
//! use airfreight::geo::GeoPoint;
//!
//! let gotham = GeoPoint::new(40.7128, -74.0060);
//! let london = GeoPoint::new(51.5074, -0.1278);
//!
//! let result = estimate(gotham, london, None)?;
//! assert_eq!(result.hours, 9.17);
//! # Ok::<(), airfreight::AirfreightError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod estimator;
pub mod geo;
pub mod mcp;

pub use error::{AirfreightError, Result};
pub use estimator::{estimate, TravelEstimate, TravelRequest};
pub use geo::GeoPoint;
