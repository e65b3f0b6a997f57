use crate::catalog::PlaygroundArgs;
use leptos::logging::warn;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub(crate) const PLAYGROUND_KEY: &str = "button_catalog_playground";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StorageErrorKind {
    Unavailable,
    Serialize,
    Deserialize,
    Write,
}

#[derive(Clone, Debug)]
pub(crate) struct StorageError {
    pub kind: StorageErrorKind,
    pub message: String,
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl StorageError {
    fn unavailable() -> Self {
        Self {
            kind: StorageErrorKind::Unavailable,
            message: "localStorage is not available".to_string(),
        }
    }

    fn serialize(e: serde_json::Error) -> Self {
        Self {
            kind: StorageErrorKind::Serialize,
            message: e.to_string(),
        }
    }

    fn deserialize(key: &str, e: serde_json::Error) -> Self {
        Self {
            kind: StorageErrorKind::Deserialize,
            message: format!("{key}: {e}"),
        }
    }

    fn write(key: &str, e: impl std::fmt::Debug) -> Self {
        Self {
            kind: StorageErrorKind::Write,
            message: format!("{key}: {e:?}"),
        }
    }
}

pub(crate) type StorageResult<T> = Result<T, StorageError>;

fn local_storage() -> StorageResult<web_sys::Storage> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(StorageError::unavailable)
}

pub(crate) fn load_json_from_storage<T: DeserializeOwned>(key: &str) -> StorageResult<Option<T>> {
    let storage = local_storage()?;
    match storage.get_item(key).ok().flatten() {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| StorageError::deserialize(key, e)),
        None => Ok(None),
    }
}

pub(crate) fn save_json_to_storage<T: Serialize>(key: &str, value: &T) -> StorageResult<()> {
    let json = serde_json::to_string(value).map_err(StorageError::serialize)?;
    local_storage()?
        .set_item(key, &json)
        .map_err(|e| StorageError::write(key, e))
}

pub(crate) fn remove_from_storage(key: &str) -> StorageResult<()> {
    local_storage()?
        .remove_item(key)
        .map_err(|e| StorageError::write(key, e))
}

pub(crate) fn save_playground_args(args: &PlaygroundArgs) -> StorageResult<()> {
    save_json_to_storage(PLAYGROUND_KEY, args)
}

/// Stored playground args, or the defaults when nothing usable is stored.
pub(crate) fn load_playground_args() -> PlaygroundArgs {
    match load_json_from_storage::<PlaygroundArgs>(PLAYGROUND_KEY) {
        Ok(Some(args)) => args,
        Ok(None) => PlaygroundArgs::default(),
        Err(e) => {
            warn!("failed to load playground args ({:?}): {e}", e.kind);
            if e.kind == StorageErrorKind::Deserialize {
                // Drop the unreadable entry so the next save starts clean.
                let _ = remove_from_storage(PLAYGROUND_KEY);
            }
            PlaygroundArgs::default()
        }
    }
}

pub(crate) fn clear_playground_args() -> StorageResult<()> {
    remove_from_storage(PLAYGROUND_KEY)
}

/// Inserts `item` at the front and drops the oldest entries beyond `max`.
pub(crate) fn push_capped<T>(mut items: Vec<T>, item: T, max: usize) -> Vec<T> {
    items.insert(0, item);
    if items.len() > max {
        items.truncate(max);
    }
    items
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_capped_keeps_newest_first() {
        let items = push_capped(vec![2, 1], 3, 10);
        assert_eq!(items, vec![3, 2, 1]);
    }

    #[test]
    fn test_push_capped_drops_oldest() {
        let items = push_capped(vec![3, 2, 1], 4, 3);
        assert_eq!(items, vec![4, 3, 2]);
    }

    #[test]
    fn test_push_capped_zero_max_keeps_nothing() {
        assert!(push_capped(vec![1], 2, 0).is_empty());
    }

    #[test]
    fn test_deserialize_error_names_key() {
        let e = serde_json::from_str::<PlaygroundArgs>("not json").unwrap_err();
        let err = StorageError::deserialize(PLAYGROUND_KEY, e);
        assert_eq!(err.kind, StorageErrorKind::Deserialize);
        assert!(err.to_string().starts_with("button_catalog_playground: "));
    }
}

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use crate::components::ui::button::ButtonVariant;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_playground_args_storage_roundtrip() {
        clear_playground_args().expect("clear should succeed");
        assert_eq!(load_playground_args(), PlaygroundArgs::default());

        let args = PlaygroundArgs {
            variant: ButtonVariant::Ghost,
            loading: true,
            ..Default::default()
        };
        save_playground_args(&args).expect("save should succeed");
        assert_eq!(load_playground_args(), args);

        clear_playground_args().expect("clear should succeed");
        assert_eq!(load_playground_args(), PlaygroundArgs::default());
    }

    #[wasm_bindgen_test]
    fn test_stored_args_with_unknown_variant_keep_label() {
        let storage = local_storage().expect("localStorage should exist");
        storage
            .set_item(PLAYGROUND_KEY, r#"{"label":"Keep me","variant":"neon","loading":true}"#)
            .expect("set_item should succeed");

        let args = load_playground_args();
        assert_eq!(args.label, "Keep me");
        assert_eq!(args.variant, ButtonVariant::Primary);
        assert!(args.loading);

        clear_playground_args().expect("clear should succeed");
    }

    #[wasm_bindgen_test]
    fn test_corrupt_playground_args_fall_back_to_defaults() {
        let storage = local_storage().expect("localStorage should exist");
        storage
            .set_item(PLAYGROUND_KEY, "{broken")
            .expect("set_item should succeed");

        let err = load_json_from_storage::<PlaygroundArgs>(PLAYGROUND_KEY).unwrap_err();
        assert_eq!(err.kind, StorageErrorKind::Deserialize);
        assert_eq!(load_playground_args(), PlaygroundArgs::default());
        assert!(storage.get_item(PLAYGROUND_KEY).expect("get_item").is_none());

        clear_playground_args().expect("clear should succeed");
    }
}
