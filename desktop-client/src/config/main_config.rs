use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::snake::SnakeSettings;
use common::log;
use serde::{Deserialize, Serialize};

use super::DisplayConfig;

const CONFIG_FILE_NAME: &str = "retro_snake_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

/// Reads the config once at startup. A broken file is reported and replaced by
/// the defaults so the game still starts.
pub fn load_config() -> Config {
    let manager = get_config_manager();
    match manager.get_config() {
        Ok(config) => {
            log!("Config source: {}", manager.location());
            config
        }
        Err(e) => {
            log!("Ignoring config at {}: {}", manager.location(), e);
            Config::default()
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    pub snake: SnakeSettings,
    pub display: DisplayConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.snake.validate()?;
        self.display.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_retro_snake_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_config_survives_file_round_trip_through_manager() {
        let config = Config {
            snake: SnakeSettings { board_size: 30, tick_interval_ms: 120 },
            display: DisplayConfig { cell_size: 20, offset: 60 },
        };
        let file_path = get_temp_file_path();
        let manager = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );

        manager.set_config(&config).unwrap();
        assert_eq!(manager.get_config().unwrap(), config);

        let fresh: ConfigManager<_, Config, _> = ConfigManager::new(
            FileContentConfigProvider::new(file_path.clone()),
            YamlConfigSerializer::new(),
        );
        assert_eq!(fresh.get_config().unwrap(), config);

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_config_file_does_not_exist_returns_default_config() {
        let content_provider = FileContentConfigProvider::new("this_file_does_not_exist.yaml");
        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_out_of_range_board_size_cant_be_read() {
        let invalid_config_content = r#"
            snake:
              board_size: 4
              tick_interval_ms: 200
            display:
              cell_size: 30
              offset: 75
        "#;

        let file_path = get_temp_file_path();
        let content_provider = FileContentConfigProvider::new(file_path.clone());
        content_provider
            .set_config_content(invalid_config_content)
            .unwrap();

        let manager: ConfigManager<_, Config, _> =
            ConfigManager::new(content_provider, YamlConfigSerializer::new());
        let error = manager.get_config().unwrap_err();
        assert!(error.contains("board_size"));

        let _ = std::fs::remove_file(file_path);
    }

    #[test]
    fn test_missing_section_cant_be_read() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, String> = serializer.deserialize("snake:\n  board_size: 25\n");
        assert!(result.is_err());
    }
}
