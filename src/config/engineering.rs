//! Engineering parameter configuration

use serde::Deserialize;
use std::path::PathBuf;

use crate::domain::parameters::{ParameterTable, ParameterTableError};

/// Where the per-industry design parameters come from
///
/// Without a path the built-in table is used. A YAML file replaces the
/// whole table and must contain a `default` profile.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineeringConfig {
    /// Optional YAML parameter table
    pub parameter_table_path: Option<PathBuf>,
}

impl EngineeringConfig {
    /// Load the configured parameter table
    pub fn load_table(&self) -> Result<ParameterTable, ParameterTableError> {
        match &self.parameter_table_path {
            Some(path) => ParameterTable::from_yaml_file(path),
            None => Ok(ParameterTable::builtin()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_no_path_uses_builtin_table() {
        let table = EngineeringConfig::default().load_table().unwrap();
        assert_eq!(table, ParameterTable::builtin());
    }

    #[test]
    fn test_loads_table_from_yaml_file() {
        let yaml = r#"
reference_chemical_dose_mg_l: 120
industries:
  default:
    daf: { hydraulic_loading_rate: 9, solids_loading_rate: 7 }
  tannery:
    daf: { hydraulic_loading_rate: 4, solids_loading_rate: 5 }
"#;
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();

        let config = EngineeringConfig {
            parameter_table_path: Some(file.path().to_path_buf()),
        };
        let table = config.load_table().unwrap();

        assert_eq!(table.reference_chemical_dose_mg_l(), 120.0);
        assert_eq!(table.lookup("tannery").daf.hydraulic_loading_rate, 4.0);
        assert_eq!(table.lookup("brewery").daf.hydraulic_loading_rate, 9.0);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let config = EngineeringConfig {
            parameter_table_path: Some(PathBuf::from("/nonexistent/parameters.yaml")),
        };
        assert!(config.load_table().is_err());
    }
}
