use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::CatalogError;

const EPSG_PREFIX: &str = "EPSG:";

/// A selectable output file type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FiletypeOption {
    pub label: &'static str,
    pub extensions: &'static [&'static str],
}

/// Shape of a filetype's extension list.
///
/// `[]` and `[""]` are kept apart: the first means the format has no
/// canonical extension, the second that the extension is left unspecified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtensionKind {
    None,
    Unspecified,
    Concrete,
}

impl FiletypeOption {
    pub const fn new(label: &'static str, extensions: &'static [&'static str]) -> Self {
        Self { label, extensions }
    }

    pub fn extension_kind(&self) -> ExtensionKind {
        if self.extensions.is_empty() {
            ExtensionKind::None
        } else if self.extensions.iter().all(|ext| ext.is_empty()) {
            ExtensionKind::Unspecified
        } else {
            ExtensionKind::Concrete
        }
    }

    /// First non-empty extension, if any
    pub fn canonical_extension(&self) -> Option<&'static str> {
        self.extensions.iter().copied().find(|ext| !ext.is_empty())
    }

    /// Check whether a path carries one of this filetype's concrete extensions
    pub fn matches_path(&self, path: impl AsRef<Path>) -> bool {
        let Some(ext) = path.as_ref().extension().and_then(|e| e.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .filter(|candidate| !candidate.is_empty())
            .any(|candidate| candidate.eq_ignore_ascii_case(ext))
    }
}

/// Owned copy of a [`FiletypeOption`], free to mutate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnedFiletypeOption {
    pub label: String,
    pub extensions: Vec<String>,
}

impl From<&FiletypeOption> for OwnedFiletypeOption {
    fn from(option: &FiletypeOption) -> Self {
        Self {
            label: option.label.to_string(),
            extensions: option.extensions.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// A selectable coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CrsOption {
    pub value: &'static str,
    pub label: &'static str,
}

impl CrsOption {
    pub const fn new(value: &'static str, label: &'static str) -> Self {
        Self { value, label }
    }

    pub fn epsg(&self) -> Result<EpsgCode, CatalogError> {
        self.value.parse()
    }
}

/// Numeric EPSG registry code, written as `EPSG:<digits>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EpsgCode(u32);

impl EpsgCode {
    pub const fn new(code: u32) -> Self {
        Self(code)
    }

    pub const fn code(self) -> u32 {
        self.0
    }
}

impl FromStr for EpsgCode {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CatalogError::InvalidEpsg(s.to_string());

        let digits = s.strip_prefix(EPSG_PREFIX).ok_or_else(invalid)?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        digits.parse::<u32>().map(Self).map_err(|_| invalid())
    }
}

impl fmt::Display for EpsgCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", EPSG_PREFIX, self.0)
    }
}

impl Serialize for EpsgCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_kind_keeps_empty_forms_apart() {
        assert_eq!(FiletypeOption::new("A", &[]).extension_kind(), ExtensionKind::None);
        assert_eq!(FiletypeOption::new("B", &[""]).extension_kind(), ExtensionKind::Unspecified);
        assert_eq!(FiletypeOption::new("C", &["kml"]).extension_kind(), ExtensionKind::Concrete);
    }

    #[test]
    fn test_canonical_extension_skips_empty_entries() {
        assert_eq!(FiletypeOption::new("A", &[]).canonical_extension(), None);
        assert_eq!(FiletypeOption::new("B", &[""]).canonical_extension(), None);
        assert_eq!(
            FiletypeOption::new("C", &["", "json"]).canonical_extension(),
            Some("json")
        );
    }

    #[test]
    fn test_matches_path() {
        let shp = FiletypeOption::new("Shapefile", &["shp"]);
        assert!(shp.matches_path("out/buildings.shp"));
        assert!(shp.matches_path("OUT.SHP"));
        assert!(!shp.matches_path("buildings.shx"));
        assert!(!shp.matches_path("shp"));

        // Unspecified extensions never match, not even an extensionless path
        let tiles = FiletypeOption::new("3D Tiles", &[""]);
        assert!(!tiles.matches_path("tileset"));
        assert!(!tiles.matches_path("tileset.json"));
    }

    #[test]
    fn test_epsg_parse_and_display() {
        let code: EpsgCode = "EPSG:6678".parse().unwrap();
        assert_eq!(code.code(), 6678);
        assert_eq!(code.to_string(), "EPSG:6678");
        assert_eq!(EpsgCode::new(4326).to_string(), "EPSG:4326");
        assert_eq!(
            serde_json::to_string(&EpsgCode::new(3857)).unwrap(),
            "\"EPSG:3857\""
        );
    }

    #[test]
    fn test_epsg_parse_rejects_malformed() {
        let inputs = [
            "4326",
            "EPSG:",
            "EPSG:43a6",
            "epsg:4326",
            "EPSG: 4326",
            "EPSG:-1",
            "EPSG:99999999999",
        ];
        for input in inputs {
            assert_eq!(
                input.parse::<EpsgCode>(),
                Err(CatalogError::InvalidEpsg(input.to_string())),
                "{input} should be rejected"
            );
        }
    }

    #[test]
    fn test_owned_copy_is_detached() {
        let option = FiletypeOption::new("GeoPackage", &["gpkg"]);
        let mut owned = OwnedFiletypeOption::from(&option);
        owned.extensions.push("sqlite".to_string());
        assert_eq!(option.extensions, &["gpkg"]);
        assert_eq!(owned.extensions, vec!["gpkg", "sqlite"]);
    }
}
