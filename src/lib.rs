//! Styled button component, its style resolver, and a catalog of example
//! configurations rendered in the browser and snapshotted in tests.

mod app;
pub mod catalog;
pub mod components;
mod config;
mod pages;
mod state;
mod storage;
pub mod theme;
mod util;

pub use catalog::snapshot::{diff_snapshots, snapshot_catalog, FixtureSnapshot, SnapshotChange};
pub use components::ui::button::{
    render, resolve_style, Button, ButtonConfig, ButtonSize, ButtonState, ButtonType,
    ButtonVariant, RenderNode, ResolvedStyle,
};

use crate::app::App;
use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::button_stories;

    #[test]
    fn test_render_contract_is_reexported() {
        let node = render(ButtonConfig::new("Save").variant(ButtonVariant::Secondary));
        let state = ButtonState {
            variant: ButtonVariant::Secondary,
            ..Default::default()
        };
        assert_eq!(node.style, resolve_style(state));
        assert_eq!(node.button_type, ButtonType::Button);
    }

    #[test]
    fn test_snapshot_baseline_is_stable_across_runs() {
        let first = snapshot_catalog(&button_stories());
        let second = snapshot_catalog(&button_stories());
        assert!(diff_snapshots(&first, &second).is_empty());
    }
}
