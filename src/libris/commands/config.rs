use crate::commands::{CmdMessage, CmdResult, LibrisPaths};
use crate::config::LibrisConfig;
use crate::error::Result;

#[derive(Debug, Clone)]
pub enum ConfigAction {
    ShowAll,
    ShowKey(String),
    Set(String, String),
}

pub fn run(paths: &LibrisPaths, action: ConfigAction) -> Result<CmdResult> {
    let dir = &paths.data;
    match action {
        ConfigAction::ShowAll => {
            let config = LibrisConfig::load(dir)?;
            Ok(CmdResult::default().with_config(config))
        }
        ConfigAction::ShowKey(key) => {
            let config = LibrisConfig::load(dir)?;
            let mut result = CmdResult::default();
            match config.get(&key) {
                Some(val) => result.add_message(CmdMessage::info(val)),
                None => {
                    result.add_message(CmdMessage::error(format!("Unknown config key: {}", key)))
                }
            }
            Ok(result)
        }
        ConfigAction::Set(key, value) => {
            let mut config = LibrisConfig::load(dir)?;
            if let Err(e) = config.set(&key, &value) {
                let mut res = CmdResult::default();
                res.add_message(CmdMessage::error(e));
                return Ok(res);
            }
            config.save(dir)?;
            let display_val = config.get(&key).unwrap_or_else(|| value.clone());
            let mut result = CmdResult::default().with_config(config);
            result.add_message(CmdMessage::success(format!(
                "{} set to {}",
                key, display_val
            )));
            Ok(result)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use tempfile::TempDir;

    #[test]
    fn set_then_show_key() {
        let temp = TempDir::new().unwrap();
        let paths = LibrisPaths::new(temp.path());

        let set = run(
            &paths,
            ConfigAction::Set("history-limit".into(), "7".into()),
        )
        .unwrap();
        assert_eq!(set.messages[0].level, MessageLevel::Success);

        let shown = run(&paths, ConfigAction::ShowKey("history-limit".into())).unwrap();
        assert_eq!(shown.messages[0].content, "7");
    }

    #[test]
    fn invalid_value_is_reported_not_saved() {
        let temp = TempDir::new().unwrap();
        let paths = LibrisPaths::new(temp.path());

        let result = run(
            &paths,
            ConfigAction::Set("history-limit".into(), "zero".into()),
        )
        .unwrap();
        assert_eq!(result.messages[0].level, MessageLevel::Error);
        assert!(!temp.path().join("config.json").exists());
    }

    #[test]
    fn show_all_returns_config() {
        let temp = TempDir::new().unwrap();
        let result = run(&LibrisPaths::new(temp.path()), ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config, Some(LibrisConfig::default()));
    }
}
