//! Application state: the last form record and the last exported file
//!
//! Both containers are only ever replaced as a whole, each by its own
//! action. Any other action leaves them untouched.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::ConfigRecord;
use crate::ini::{SerializedConfig, serialize_config};

/// Updates dispatched to the state containers
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum Action {
    /// Replace the stored form record
    SetJsonConfig(ConfigRecord),

    /// Replace the stored exported file
    SetTextConfig(SerializedConfig),
}

/// Last form record, starting from the full set of defaults
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JsonConfigState {
    config: ConfigRecord,
}

impl JsonConfigState {
    pub fn config(&self) -> &ConfigRecord {
        &self.config
    }

    pub fn reduce(&mut self, action: &Action) {
        if let Action::SetJsonConfig(config) = action {
            debug!(fields = config.len(), "replacing json config");
            self.config = config.clone();
        }
    }
}

/// Last exported file, empty until the first export
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextConfigState {
    config: SerializedConfig,
}

impl TextConfigState {
    pub fn config(&self) -> &SerializedConfig {
        &self.config
    }

    pub fn reduce(&mut self, action: &Action) {
        if let Action::SetTextConfig(config) = action {
            debug!(lines = config.len(), "replacing text config");
            self.config = config.clone();
        }
    }
}

/// Top-level state owning both containers
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppState {
    pub json_config: JsonConfigState,
    pub text_config: TextConfigState,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offer `action` to every container
    pub fn dispatch(&mut self, action: Action) {
        self.json_config.reduce(&action);
        self.text_config.reduce(&action);
    }

    /// Serialize the stored record and store the result as the text config
    pub fn export(&mut self) -> &SerializedConfig {
        let text = serialize_config(self.json_config.config());
        self.dispatch(Action::SetTextConfig(text));
        self.text_config.config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert_eq!(state.json_config.config(), &ConfigRecord::default());
        assert!(state.text_config.config().lines().is_empty());
    }

    #[test]
    fn test_set_json_config_replaces_wholesale() {
        let mut state = AppState::new();
        let record = ConfigRecord::empty().with("combatMap", "2-2");

        state.dispatch(Action::SetJsonConfig(record.clone()));

        // no merge with the previous defaults
        assert_eq!(state.json_config.config(), &record);
        assert_eq!(state.json_config.config().len(), 1);
        assert!(state.text_config.config().lines().is_empty());
    }

    #[test]
    fn test_set_text_config_leaves_json_untouched() {
        let mut state = AppState::new();
        let text = SerializedConfig::new(vec!["[General]".to_string(), "Pause: True".to_string()]);

        state.dispatch(Action::SetTextConfig(text.clone()));

        assert_eq!(state.text_config.config(), &text);
        assert_eq!(state.json_config.config(), &ConfigRecord::default());
    }

    #[test]
    fn test_reducers_ignore_foreign_actions() {
        let mut json = JsonConfigState::default();
        let before = json.clone();
        json.reduce(&Action::SetTextConfig(SerializedConfig::default()));
        assert_eq!(json, before);

        let mut text = TextConfigState::default();
        text.reduce(&Action::SetJsonConfig(ConfigRecord::empty()));
        assert!(text.config().lines().is_empty());
    }

    #[test]
    fn test_export_stores_serialized_record() {
        let mut state = AppState::new();
        state.dispatch(Action::SetJsonConfig(ConfigRecord::default().with("pvpEnabled", true)));

        let exported = state.export().clone();

        assert_eq!(exported, serialize_config(state.json_config.config()));
        assert!(exported.lines().iter().any(|line| line == "Enabled: True"));
        assert_eq!(state.text_config.config(), &exported);
    }

    #[test]
    fn test_action_json_shape() {
        let action = Action::SetTextConfig(SerializedConfig::new(vec!["[Quests]".to_string()]));
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json, serde_json::json!({ "SetTextConfig": ["[Quests]"] }));
    }
}
