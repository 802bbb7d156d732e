//! Region registry: lookup of navigation destinations by name.

use std::collections::HashMap;

use terra_geo::GeoCoordinate;

/// Built-in destinations as `(name, latitude, longitude)`.
pub const BUILTIN_REGIONS: [(&str, f64, f64); 5] = [
    ("north_america", 40.0, -100.0),
    ("south_america", -15.0, -60.0),
    ("europe", 50.0, 10.0),
    ("africa", 0.0, 20.0),
    ("asia", 35.0, 100.0),
];

/// A named area with one representative coordinate.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    /// Unique region name, e.g. `"europe"`.
    pub name: String,
    /// Point the camera flies toward.
    pub coordinate: GeoCoordinate,
}

/// Errors raised by region lookup and registration.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum RegionError {
    /// No region with this name is registered.
    #[error("unknown region '{0}'")]
    UnknownRegion(String),
    /// A region with this name already exists.
    #[error("region '{0}' is already registered")]
    DuplicateName(String),
}

/// Fixed set of regions, built once at startup.
///
/// Only [`register`](Self::register) mutates the registry; navigators take
/// ownership of a finished registry and expose it read-only.
#[derive(Clone, Debug, Default)]
pub struct RegionRegistry {
    regions: Vec<Region>,
    name_index: HashMap<String, usize>,
}

impl RegionRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding [`BUILTIN_REGIONS`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (name, lat, lon) in BUILTIN_REGIONS {
            // Built-in names are distinct.
            let _ = registry.register(name, GeoCoordinate::new(lat, lon));
        }
        registry
    }

    /// Register a region. Returns its index.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::DuplicateName`] if the name is taken.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        coordinate: GeoCoordinate,
    ) -> Result<usize, RegionError> {
        let name = name.into();
        if self.name_index.contains_key(&name) {
            return Err(RegionError::DuplicateName(name));
        }

        let idx = self.regions.len();
        self.name_index.insert(name.clone(), idx);
        self.regions.push(Region { name, coordinate });
        Ok(idx)
    }

    /// Resolve a region name to its coordinate.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::UnknownRegion`] if `name` is not registered.
    pub fn lookup(&self, name: &str) -> Result<GeoCoordinate, RegionError> {
        self.get(name)
            .map(|r| r.coordinate)
            .ok_or_else(|| RegionError::UnknownRegion(name.to_string()))
    }

    /// Look up a region by name.
    pub fn get(&self, name: &str) -> Option<&Region> {
        self.name_index.get(name).map(|&idx| &self.regions[idx])
    }

    /// Region names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }

    /// Iterate over all regions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter()
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Returns true if no regions are registered.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}
