//! Static catalog of geospatial output file types and coordinate reference
//! system options, for building format and projection pickers.
//!
//! ```
//! let gpkg = geocatalog::filetype("gpkg").unwrap();
//! assert_eq!(gpkg.label, "GeoPackage");
//! assert_eq!(geocatalog::default_crs().value, "EPSG:6678");
//! ```

pub mod catalog;
pub mod constants;
pub mod error;
pub mod models;

pub use catalog::{
    crs, crs_by_code, crs_options, default_crs, filetype, filetype_options, validate,
    validate_tables, FiletypeOptions,
};
pub use error::{CatalogError, Result};
pub use models::{CrsOption, EpsgCode, ExtensionKind, FiletypeOption, OwnedFiletypeOption};
