//! Content factory for building battlefields from data files.

use std::path::{Path, PathBuf};

use tohit_core::{BattlefieldSnapshot, OptionsSnapshot};

use crate::loaders::{LoadResult, OptionsLoader, OrdersLoader, ScenarioLoader};
use crate::orders::UnitOrders;

/// Content factory that loads all battlefield content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── options.toml
/// ├── scenarios/
/// │   ├── duel.ron
/// │   └── night_raid.ron
/// └── orders/
///     ├── duel.ron
///     └── night_raid.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load ruleset options from `options.toml`; a missing file means defaults.
    pub fn load_options(&self) -> LoadResult<OptionsSnapshot> {
        let path = self.data_dir.join("options.toml");
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no options file, using defaults");
            return Ok(OptionsSnapshot::default());
        }
        OptionsLoader::load(&path)
    }

    /// Load `scenarios/{name}.ron`.
    ///
    /// Options from `options.toml` fill in keys the scenario leaves unset.
    pub fn load_scenario(&self, name: &str) -> LoadResult<BattlefieldSnapshot> {
        let path = self.data_dir.join("scenarios").join(format!("{name}.ron"));
        let mut battlefield = ScenarioLoader::load(&path)?;

        let defaults = self.load_options()?;
        for (key, value) in defaults.booleans {
            battlefield.options.booleans.entry(key).or_insert(value);
        }
        for (key, value) in defaults.integers {
            battlefield.options.integers.entry(key).or_insert(value);
        }

        Ok(battlefield)
    }

    /// Load `orders/{name}.ron`.
    pub fn load_orders(&self, name: &str) -> LoadResult<Vec<UnitOrders>> {
        let path = self.data_dir.join("orders").join(format!("{name}.ron"));
        OrdersLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;
    use tohit_core::GameOptionsView;
    use tohit_core::env::keys;

    use super::*;

    fn data_dir() -> TempDir {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("scenarios")).unwrap();
        fs::create_dir(temp_dir.path().join("orders")).unwrap();
        fs::write(
            temp_dir.path().join("scenarios/skirmish.ron"),
            r#"(
                board: (width: 6, height: 6),
                roster: [(id: 1, position: (x: 1, y: 1))],
                options: (booleans: {"friendly_fire": true}),
            )"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join("orders/skirmish.ron"),
            "[(unit: 1, attacks: [])]",
        )
        .unwrap();
        temp_dir
    }

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }

    #[test]
    fn options_default_when_the_file_is_absent() {
        let temp_dir = data_dir();
        let factory = ContentFactory::new(temp_dir.path());
        assert_eq!(factory.load_options().unwrap(), OptionsSnapshot::default());
    }

    #[test]
    fn scenario_options_win_over_the_options_file() {
        let temp_dir = data_dir();
        fs::write(
            temp_dir.path().join("options.toml"),
            "friendly_fire = false\nsearchlight_range = 4\n",
        )
        .unwrap();
        let factory = ContentFactory::new(temp_dir.path());

        let battlefield = factory.load_scenario("skirmish").unwrap();

        assert!(battlefield.options.is_enabled(keys::FRIENDLY_FIRE));
        assert_eq!(battlefield.options.integer(keys::SEARCHLIGHT_RANGE), Some(4));
        assert_eq!(factory.load_orders("skirmish").unwrap().len(), 1);
    }

    #[test]
    fn shipped_content_loads() {
        let data = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../data");
        let factory = ContentFactory::new(data);

        for name in ["duel", "night_raid"] {
            let battlefield = factory.load_scenario(name).unwrap();
            let orders = factory.load_orders(name).unwrap();
            assert!(!orders.is_empty());
            for unit_orders in &orders {
                assert!(battlefield.env().entity(unit_orders.unit).is_some());
            }
        }
    }

    #[test]
    fn unknown_scenario_is_an_error() {
        let temp_dir = data_dir();
        let factory = ContentFactory::new(temp_dir.path());
        assert!(factory.load_scenario("missing").is_err());
    }
}
