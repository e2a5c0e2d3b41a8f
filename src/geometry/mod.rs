//! Staff geometry
//!
//! Pure conversions between staff pixel space and the measure grid.

pub mod config;
pub mod mapper;

pub use config::{ConfigError, RowLayout, StaffConfig};
pub use mapper::{GeometryMapper, GridAddress, RowSpan};
