use crate::models::{CrsOption, FiletypeOption};

/// Application name
pub const APP_NAME: &str = "geocatalog";

/// Output file types, keyed by the identifier other code refers to them by.
/// Declaration order is display order.
pub const FILETYPE_TABLE: &[(&str, FiletypeOption)] = &[
    ("geojson", FiletypeOption::new("GeoJSON", &[])),
    ("gpkg", FiletypeOption::new("GeoPackage", &["gpkg"])),
    ("mvt", FiletypeOption::new("Vector Tiles", &[""])),
    ("czml", FiletypeOption::new("CZML", &["json"])),
    ("cesiumtiles", FiletypeOption::new("3D Tiles", &[""])),
    ("kml", FiletypeOption::new("KML", &["kml"])),
    ("shapefile", FiletypeOption::new("Shapefile", &["shp"])),
    ("ply", FiletypeOption::new("PLY", &["ply"])),
    ("gltf", FiletypeOption::new("glTF", &[""])),
    ("serde", FiletypeOption::new("Serde", &[""])),
];

/// Coordinate reference systems offered for output; the first entry is the default
pub const CRS_TABLE: &[CrsOption] = &[
    CrsOption::new("EPSG:6678", "JGD2011 / Japan Plane Rectangular CS X"),
    CrsOption::new("EPSG:4326", "WGS 84"),
    CrsOption::new("EPSG:3857", "Web Mercator"),
];
