use anyhow::{Context, Result};
use message_store::MessageRepository;
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Store and logging configuration, loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// `MESSAGES_FILE`; `None` means the built-in sample collection.
    pub messages_file: Option<PathBuf>,
    /// `LOG_FILE`; when set, logs go to this file as well as stderr.
    pub log_file: Option<String>,
}

impl StoreConfig {
    /// Loads from the environment. A `file` argument overrides MESSAGES_FILE.
    /// Empty variables count as unset.
    pub fn load(file: Option<PathBuf>) -> Result<Self> {
        let messages_file = file.or_else(|| non_empty_var("MESSAGES_FILE").map(PathBuf::from));
        let log_file = non_empty_var("LOG_FILE");

        Ok(Self {
            messages_file,
            log_file,
        })
    }

    pub fn open_repository(&self) -> Result<MessageRepository> {
        match &self.messages_file {
            Some(path) => MessageRepository::from_path(path)
                .with_context(|| format!("Load messages from {}", path.display())),
            None => {
                info!("MESSAGES_FILE not set, using built-in sample messages");
                Ok(MessageRepository::sample())
            }
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_load_config_with_defaults() {
        env::remove_var("MESSAGES_FILE");
        env::remove_var("LOG_FILE");

        let config = StoreConfig::load(None).unwrap();

        assert!(config.messages_file.is_none());
        assert!(config.log_file.is_none());
        assert_eq!(config.open_repository().unwrap().len(), 2);
    }

    #[test]
    #[serial]
    fn test_load_config_with_custom_values() {
        env::set_var("MESSAGES_FILE", "/data/messages.json");
        env::set_var("LOG_FILE", "logs/msgq.log");

        let config = StoreConfig::load(None).unwrap();

        assert_eq!(config.messages_file, Some(PathBuf::from("/data/messages.json")));
        assert_eq!(config.log_file.as_deref(), Some("logs/msgq.log"));

        env::remove_var("MESSAGES_FILE");
        env::remove_var("LOG_FILE");
    }

    #[test]
    #[serial]
    fn test_file_argument_overrides_env() {
        env::set_var("MESSAGES_FILE", "/data/messages.json");

        let config = StoreConfig::load(Some(PathBuf::from("local.json"))).unwrap();

        assert_eq!(config.messages_file, Some(PathBuf::from("local.json")));
        env::remove_var("MESSAGES_FILE");
    }

    #[test]
    #[serial]
    fn test_empty_env_counts_as_unset() {
        env::set_var("MESSAGES_FILE", "  ");
        env::remove_var("LOG_FILE");

        let config = StoreConfig::load(None).unwrap();

        assert!(config.messages_file.is_none());
        env::remove_var("MESSAGES_FILE");
    }

    #[test]
    fn test_open_repository_missing_file_errors() {
        let config = StoreConfig {
            messages_file: Some(PathBuf::from("/nonexistent/messages.json")),
            log_file: None,
        };

        let err = config.open_repository().unwrap_err();

        assert!(err.to_string().contains("/nonexistent/messages.json"));
    }
}
