use crate::commands::{CmdMessage, CmdResult, DaynotesPaths};
use crate::config::DaynotesConfig;
use crate::error::{DaynotesError, Result};

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

/// Read or change `config.json` in the data dir.
///
/// Unknown keys and rejected values come back as `DaynotesError::Config`
/// and nothing is written.
pub fn run(paths: &DaynotesPaths, action: ConfigAction) -> Result<CmdResult> {
    let mut config = DaynotesConfig::load(&paths.data_dir)?;
    let mut result = CmdResult::default();

    match action {
        ConfigAction::ShowAll => {}
        ConfigAction::ShowKey(key) => {
            result.add_message(CmdMessage::info(lookup(&config, &key)?));
        }
        ConfigAction::Set(key, value) => {
            config.set(&key, &value)?;
            config.save(&paths.data_dir)?;
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key,
                lookup(&config, &key)?
            )));
        }
    }
    Ok(result.with_config(config))
}

fn lookup(config: &DaynotesConfig, key: &str) -> Result<String> {
    config
        .get(key)
        .ok_or_else(|| DaynotesError::Config(format!("Unknown config key: {}", key)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn paths(temp: &TempDir) -> DaynotesPaths {
        DaynotesPaths {
            data_dir: temp.path().to_path_buf(),
        }
    }

    #[test]
    fn set_then_show_key() {
        let temp = TempDir::new().unwrap();
        let paths = paths(&temp);

        let result = run(
            &paths,
            ConfigAction::Set("log-level".into(), "DEBUG".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].content, "log-level set to debug");

        let result = run(&paths, ConfigAction::ShowKey("log-level".into())).unwrap();
        assert_eq!(result.messages[0].content, "debug");
    }

    #[test]
    fn invalid_value_is_an_error_and_not_saved() {
        let temp = TempDir::new().unwrap();
        let err = run(
            &paths(&temp),
            ConfigAction::Set("storage-key".into(), "a/b".into()),
        )
        .unwrap_err();
        assert!(matches!(err, DaynotesError::Config(_)));
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn unknown_key_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = run(&paths(&temp), ConfigAction::ShowKey("colour".into())).unwrap_err();
        assert_eq!(err.to_string(), "Config error: Unknown config key: colour");
    }

    #[test]
    fn show_all_returns_defaults() {
        let temp = TempDir::new().unwrap();
        let result = run(&paths(&temp), ConfigAction::ShowAll).unwrap();
        assert!(result.messages.is_empty());
        assert_eq!(result.config.unwrap(), DaynotesConfig::default());
    }
}
