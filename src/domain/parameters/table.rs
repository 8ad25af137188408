//! The engineering parameter table.
//!
//! Single source of numeric truth for the calculators. Constructed once at
//! startup and shared read-only behind an `Arc`.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::foundation::ValidationError;

use super::builtin;
use super::profile::IndustryProfile;

/// Key of the fallback profile.
pub const DEFAULT_INDUSTRY: &str = "default";

/// Dose at which the volumetric chemical OPEX rate is assumed to be incurred.
pub const DEFAULT_REFERENCE_DOSE_MG_L: f64 = 100.0;

/// Errors raised while building a parameter table.
#[derive(Debug, Error)]
pub enum ParameterTableError {
    #[error("Parameter table has no 'default' profile")]
    MissingDefaultProfile,

    #[error("Invalid profile '{industry}': {source}")]
    InvalidProfile {
        industry: String,
        #[source]
        source: ValidationError,
    },

    #[error("Reference chemical dose must be positive, got {0}")]
    InvalidReferenceDose(f64),

    #[error("Failed to parse parameter table: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Failed to read parameter table {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn default_reference_dose() -> f64 {
    DEFAULT_REFERENCE_DOSE_MG_L
}

/// On-disk YAML layout.
#[derive(Debug, Clone, Deserialize)]
struct ParameterTableDocument {
    #[serde(default = "default_reference_dose")]
    reference_chemical_dose_mg_l: f64,
    industries: BTreeMap<String, IndustryProfile>,
}

/// Immutable lookup of industry design profiles with guaranteed fallback.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterTable {
    profiles: BTreeMap<String, IndustryProfile>,
    fallback: IndustryProfile,
    reference_chemical_dose_mg_l: f64,
}

impl ParameterTable {
    /// Builds a table from explicit profiles.
    ///
    /// # Errors
    ///
    /// - `MissingDefaultProfile` if `profiles` has no `default` entry
    /// - `InvalidProfile` if any profile has unusable coefficients
    /// - `InvalidReferenceDose` if the reference dose is not positive
    pub fn new(
        profiles: BTreeMap<String, IndustryProfile>,
        reference_chemical_dose_mg_l: f64,
    ) -> Result<Self, ParameterTableError> {
        if !(reference_chemical_dose_mg_l.is_finite() && reference_chemical_dose_mg_l > 0.0) {
            return Err(ParameterTableError::InvalidReferenceDose(
                reference_chemical_dose_mg_l,
            ));
        }

        for (industry, profile) in &profiles {
            profile
                .validate()
                .map_err(|source| ParameterTableError::InvalidProfile {
                    industry: industry.clone(),
                    source,
                })?;
        }

        let fallback = profiles
            .get(DEFAULT_INDUSTRY)
            .cloned()
            .ok_or(ParameterTableError::MissingDefaultProfile)?;

        Ok(Self {
            profiles,
            fallback,
            reference_chemical_dose_mg_l,
        })
    }

    /// The coefficients shipped with the crate.
    pub fn builtin() -> Self {
        let mut profiles = builtin::industry_profiles();
        let fallback = builtin::default_profile();
        profiles.insert(DEFAULT_INDUSTRY.to_string(), fallback.clone());
        Self {
            profiles,
            fallback,
            reference_chemical_dose_mg_l: DEFAULT_REFERENCE_DOSE_MG_L,
        }
    }

    /// Parses a YAML table.
    ///
    /// ```yaml
    /// reference_chemical_dose_mg_l: 100
    /// industries:
    ///   default:
    ///     daf: { hydraulic_loading_rate: 8, solids_loading_rate: 8 }
    ///     ...
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ParameterTableError> {
        let document: ParameterTableDocument = serde_yaml::from_str(yaml)?;
        Self::new(document.industries, document.reference_chemical_dose_mg_l)
    }

    /// Reads and parses a YAML table from disk.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ParameterTableError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ParameterTableError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&yaml)
    }

    /// Profile for `industry`, or the `default` profile for unknown keys.
    pub fn lookup(&self, industry: &str) -> &IndustryProfile {
        self.profiles.get(industry).unwrap_or(&self.fallback)
    }

    /// Whether `industry` has its own profile.
    pub fn contains(&self, industry: &str) -> bool {
        self.profiles.contains_key(industry)
    }

    /// Industry keys, sorted.
    pub fn industries(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    pub fn reference_chemical_dose_mg_l(&self) -> f64 {
        self.reference_chemical_dose_mg_l
    }
}

impl Default for ParameterTable {
    fn default() -> Self {
        Self::builtin()
    }
}
