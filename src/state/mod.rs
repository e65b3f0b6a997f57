use crate::catalog::{PlaygroundArgs, CLICK_ACTION};
use crate::config::CatalogConfig;
use crate::storage::{clear_playground_args, load_playground_args, push_capped, save_playground_args};
use crate::util::now_ms;
use leptos::logging::{log, warn};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub(crate) struct ActionEntry {
    pub action: String,
    pub story: String,
    pub at_ms: i64,
}

#[derive(Clone)]
pub(crate) struct CatalogState {
    pub config: CatalogConfig,

    /// Args of the interactive story, edited through the controls panel.
    pub playground: RwSignal<PlaygroundArgs>,

    /// Newest first, capped at `config.action_log_limit`.
    pub actions: RwSignal<Vec<ActionEntry>>,
}

impl CatalogState {
    pub fn new(config: CatalogConfig) -> Self {
        let playground = if config.persist_playground {
            load_playground_args()
        } else {
            PlaygroundArgs::default()
        };

        Self {
            config,
            playground: RwSignal::new(playground),
            actions: RwSignal::new(vec![]),
        }
    }

    pub fn record_click(&self, story: &str) {
        self.record_click_at(story, now_ms());
    }

    pub fn record_click_at(&self, story: &str, at_ms: i64) {
        log!("[actions] {CLICK_ACTION}: {story}");
        let entry = ActionEntry {
            action: CLICK_ACTION.to_string(),
            story: story.to_string(),
            at_ms,
        };
        let limit = self.config.action_log_limit;
        self.actions
            .update(|items| *items = push_capped(std::mem::take(items), entry, limit));
    }

    /// Records a click on a catalog fixture. Fixtures without a bound action
    /// are ignored; returns whether an entry was written.
    pub fn record_fixture_click(&self, clickable: bool, story: &str, at_ms: i64) -> bool {
        if !clickable {
            return false;
        }
        self.record_click_at(story, at_ms);
        true
    }

    pub fn clear_actions(&self) {
        self.actions.set(vec![]);
    }

    pub fn apply_control(&self, name: &str, value: &str) {
        let mut args = self.playground.get_untracked();
        if !args.apply_control(name, value) {
            warn!("ignoring unknown control {name:?}");
            return;
        }
        if self.config.persist_playground {
            if let Err(e) = save_playground_args(&args) {
                warn!("failed to save playground args: {e}");
            }
        }
        self.playground.set(args);
    }

    pub fn reset_playground(&self) {
        if self.config.persist_playground {
            if let Err(e) = clear_playground_args() {
                warn!("failed to clear playground args: {e}");
            }
        }
        self.playground.set(PlaygroundArgs::default());
    }
}

#[derive(Clone)]
pub(crate) struct CatalogContext(pub CatalogState);

#[cfg(test)]
mod tests {
    use super::*;

    fn in_memory_state(limit: usize) -> CatalogState {
        CatalogState::new(CatalogConfig {
            persist_playground: false,
            action_log_limit: limit,
            ..CatalogConfig::default()
        })
    }

    #[test]
    fn test_actions_log_is_newest_first_and_capped() {
        let owner = Owner::new();
        owner.with(|| {
            let state = in_memory_state(2);
            state.record_click_at("Primary", 1);
            state.record_click_at("Danger", 2);
            state.record_click_at("Interactive", 3);

            let actions = state.actions.get_untracked();
            let stories: Vec<_> = actions.iter().map(|a| a.story.as_str()).collect();
            assert_eq!(stories, vec!["Interactive", "Danger"]);
            assert!(actions.iter().all(|a| a.action == CLICK_ACTION));
            assert_eq!(actions[0].at_ms, 3);

            state.clear_actions();
            assert!(state.actions.get_untracked().is_empty());
        });
    }

    #[test]
    fn test_only_clickable_fixtures_are_recorded() {
        let owner = Owner::new();
        owner.with(|| {
            let state = in_memory_state(10);
            assert!(!state.record_fixture_click(false, "Sizes", 1));
            assert!(state.actions.get_untracked().is_empty());

            assert!(state.record_fixture_click(true, "Primary", 2));
            let actions = state.actions.get_untracked();
            assert_eq!(actions.len(), 1);
            assert_eq!(actions[0].story, "Primary");
        });
    }

    #[test]
    fn test_playground_controls_update_args_without_persistence() {
        let owner = Owner::new();
        owner.with(|| {
            let state = in_memory_state(10);
            state.apply_control("variant", "danger");
            state.apply_control("color", "red");
            assert_eq!(
                state.playground.get_untracked().variant,
                crate::components::ui::button::ButtonVariant::Danger
            );

            state.reset_playground();
            assert_eq!(state.playground.get_untracked(), PlaygroundArgs::default());
        });
    }
}
