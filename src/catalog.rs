//! Read-only access to the filetype and CRS tables.
//!
//! Both tables are `'static` and never change, so every accessor hands out
//! shared references. Callers wanting a mutable copy use
//! [`FiletypeOptions::to_map`] or `crs_options().to_vec()`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::{BTreeMap, HashSet};

use crate::constants::{CRS_TABLE, FILETYPE_TABLE};
use crate::error::{CatalogError, Result};
use crate::models::{CrsOption, EpsgCode, FiletypeOption, OwnedFiletypeOption};

static FILETYPE_OPTIONS: FiletypeOptions = FiletypeOptions {
    entries: FILETYPE_TABLE,
};

/// Filetype mapping, key to option, in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FiletypeOptions {
    entries: &'static [(&'static str, FiletypeOption)],
}

impl FiletypeOptions {
    pub fn get(&self, key: &str) -> Option<&'static FiletypeOption> {
        let entries: &'static [_] = self.entries;
        entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, option)| option)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        let entries: &'static [_] = self.entries;
        entries.iter().map(|(k, _)| *k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static FiletypeOption)> {
        let entries: &'static [_] = self.entries;
        entries.iter().map(|(k, option)| (*k, option))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Owned copy of the mapping, sorted by key
    pub fn to_map(&self) -> BTreeMap<String, OwnedFiletypeOption> {
        self.iter()
            .map(|(k, option)| (k.to_string(), OwnedFiletypeOption::from(option)))
            .collect()
    }
}

impl Serialize for FiletypeOptions {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, option) in self.iter() {
            map.serialize_entry(key, option)?;
        }
        map.end()
    }
}

/// The full filetype mapping
pub fn filetype_options() -> &'static FiletypeOptions {
    &FILETYPE_OPTIONS
}

/// The CRS options, in display order
pub fn crs_options() -> &'static [CrsOption] {
    CRS_TABLE
}

/// Look up a filetype by key
pub fn filetype(key: &str) -> Result<&'static FiletypeOption> {
    filetype_options().get(key).ok_or_else(|| {
        tracing::debug!(key = %key, "Filetype lookup missed");
        CatalogError::UnknownFiletype(key.to_string())
    })
}

/// Look up a CRS option by its `EPSG:<n>` value
pub fn crs(value: &str) -> Result<&'static CrsOption> {
    crs_options()
        .iter()
        .find(|option| option.value == value)
        .ok_or_else(|| {
            tracing::debug!(value = %value, "CRS lookup missed");
            CatalogError::UnknownCrs(value.to_string())
        })
}

pub fn crs_by_code(code: EpsgCode) -> Result<&'static CrsOption> {
    crs(&code.to_string())
}

/// The conventional default CRS (first in display order)
pub fn default_crs() -> &'static CrsOption {
    // CRS_TABLE is a non-empty literal; validate() guards the invariant.
    &CRS_TABLE[0]
}

/// Check the invariants of the shipped tables
pub fn validate() -> Result<()> {
    validate_tables(FILETYPE_TABLE, CRS_TABLE)
}

/// Check filetype and CRS tables, reporting the first violation found
pub fn validate_tables(filetypes: &[(&str, FiletypeOption)], crs: &[CrsOption]) -> Result<()> {
    let mut keys = HashSet::new();
    for (key, option) in filetypes {
        if key.is_empty() {
            return Err(invalid("Filetype key cannot be empty"));
        }
        if !keys.insert(*key) {
            return Err(invalid(format!("Duplicate filetype key: {key}")));
        }
        if option.label.trim().is_empty() {
            return Err(invalid(format!("Filetype {key} has an empty label")));
        }
        if let Some(ext) = option.extensions.iter().find(|ext| ext.starts_with('.')) {
            return Err(invalid(format!(
                "Filetype {key} extension {ext:?} has a leading dot"
            )));
        }
    }

    if crs.is_empty() {
        return Err(invalid("CRS list cannot be empty"));
    }
    let mut values = HashSet::new();
    for option in crs {
        option
            .epsg()
            .map_err(|_| invalid(format!("CRS value {:?} is not EPSG:<digits>", option.value)))?;
        if !values.insert(option.value) {
            return Err(invalid(format!("Duplicate CRS value: {}", option.value)));
        }
        if option.label.trim().is_empty() {
            return Err(invalid(format!("CRS {} has an empty label", option.value)));
        }
    }

    tracing::debug!(
        filetypes = filetypes.len(),
        crs = crs.len(),
        "Catalog tables validated"
    );
    Ok(())
}

fn invalid(message: impl Into<String>) -> CatalogError {
    CatalogError::InvalidTable(message.into())
}
