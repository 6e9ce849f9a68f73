//! Ruleset options loader.

use std::path::Path;

use tohit_core::OptionsSnapshot;

use crate::loaders::{LoadResult, read_file};

/// Loader for ruleset toggles from TOML files.
///
/// The file is a flat table: booleans become switches, integers become
/// numeric options.
///
/// ```toml
/// friendly_fire = false
/// searchlight_range = 10
/// ```
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load options from a TOML file.
    pub fn load(path: &Path) -> LoadResult<OptionsSnapshot> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub(crate) fn parse(content: &str) -> LoadResult<OptionsSnapshot> {
        let table: toml::Table = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse options TOML: {}", e))?;

        let mut options = OptionsSnapshot::new();
        for (key, value) in table {
            match value {
                toml::Value::Boolean(flag) => {
                    options.booleans.insert(key, flag);
                }
                toml::Value::Integer(number) => {
                    let number = i32::try_from(number).map_err(|_| {
                        anyhow::anyhow!("Option {} is out of range: {}", key, number)
                    })?;
                    options.integers.insert(key, number);
                }
                other => anyhow::bail!(
                    "Option {} must be a boolean or an integer, found {}",
                    key,
                    other.type_str()
                ),
            }
        }

        Ok(options)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tohit_core::GameOptionsView;
    use tohit_core::env::keys;

    use super::*;

    #[test]
    fn splits_switches_from_numbers() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("options.toml");
        fs::write(
            &path,
            "friendly_fire = true\nindustrial_tsm_penalty = false\nsearchlight_range = 6\n",
        )
        .unwrap();

        let options = OptionsLoader::load(&path).unwrap();

        assert!(options.is_enabled(keys::FRIENDLY_FIRE));
        assert_eq!(options.boolean(keys::INDUSTRIAL_TSM_PENALTY), Some(false));
        assert_eq!(options.integer(keys::SEARCHLIGHT_RANGE), Some(6));
        assert!(!options.is_enabled(keys::WEIGHT_CLASS_ATTACK_BONUS));
    }

    #[test]
    fn rejects_other_value_types() {
        let err = OptionsLoader::parse("friendly_fire = \"yes\"").unwrap_err();
        assert!(err.to_string().contains("friendly_fire"));

        let err = OptionsLoader::parse("searchlight_range = 9999999999").unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = OptionsLoader::load(&temp_dir.path().join("absent.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Failed to read file"));
    }
}
