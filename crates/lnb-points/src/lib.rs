#![deny(missing_docs)]
#![doc = "Point reconstruction for lattice rules and digital nets described by a search result."]

/// Per-coordinate point sequences.
pub mod points;
/// Point tables covering every coordinate.
pub mod table;

pub use points::{coordinate_points, digital_points, lattice_points};
pub use table::point_table;
