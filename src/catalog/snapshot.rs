//! Serializable render snapshots for visual-regression runs.
//!
//! Every fixture renders through [`render`] into a [`FixtureSnapshot`];
//! [`diff_snapshots`] compares a stored baseline against a fresh run.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::Story;
use crate::components::ui::button::{
    merge_inline_style, render, ButtonSize, ButtonVariant, Width,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FixtureSnapshot {
    pub story: String,
    pub index: usize,
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub css: String,
    pub width: Width,
    pub non_interactive: bool,
    pub spinners: usize,
    /// Whether a click handler survived rendering.
    pub wired_handler: bool,
}

impl FixtureSnapshot {
    pub fn key(&self) -> String {
        format!("{}#{}", self.story, self.index)
    }

    fn changed_fields(&self, other: &Self) -> Vec<&'static str> {
        let mut fields = Vec::new();
        if self.label != other.label {
            fields.push("label");
        }
        if self.variant != other.variant {
            fields.push("variant");
        }
        if self.size != other.size {
            fields.push("size");
        }
        if self.css != other.css {
            fields.push("css");
        }
        if self.width != other.width {
            fields.push("width");
        }
        if self.non_interactive != other.non_interactive {
            fields.push("non_interactive");
        }
        if self.spinners != other.spinners {
            fields.push("spinners");
        }
        if self.wired_handler != other.wired_handler {
            fields.push("wired_handler");
        }
        fields
    }
}

pub fn snapshot_story(story: &Story) -> Vec<FixtureSnapshot> {
    story
        .fixtures
        .iter()
        .enumerate()
        .map(|(index, fixture)| {
            let mut config = fixture.to_config();
            if fixture.clickable {
                config = config.on_click(|| {});
            }
            let node = render(config);

            FixtureSnapshot {
                story: story.name.to_string(),
                index,
                label: node.content.label.to_string(),
                variant: node.style.variant,
                size: node.style.size,
                css: merge_inline_style(&node.style.to_css(), fixture.inline_style),
                width: node.style.width,
                non_interactive: node.style.non_interactive,
                spinners: usize::from(node.spinner.is_some()),
                wired_handler: node.has_click_handler(),
            }
        })
        .collect()
}

pub fn snapshot_catalog(stories: &[Story]) -> Vec<FixtureSnapshot> {
    stories.iter().flat_map(snapshot_story).collect()
}

pub fn snapshots_to_json(snapshots: &[FixtureSnapshot]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(snapshots)
}

pub fn snapshots_from_json(json: &str) -> serde_json::Result<Vec<FixtureSnapshot>> {
    serde_json::from_str(json)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotChange {
    Added(String),
    Removed(String),
    Changed {
        key: String,
        fields: Vec<&'static str>,
    },
}

/// Differences between a baseline run and the current one, ordered by key.
pub fn diff_snapshots(
    baseline: &[FixtureSnapshot],
    current: &[FixtureSnapshot],
) -> Vec<SnapshotChange> {
    let before: BTreeMap<String, &FixtureSnapshot> =
        baseline.iter().map(|s| (s.key(), s)).collect();
    let after: BTreeMap<String, &FixtureSnapshot> =
        current.iter().map(|s| (s.key(), s)).collect();

    let mut changes = Vec::new();
    for (key, old) in &before {
        match after.get(key) {
            None => changes.push(SnapshotChange::Removed(key.clone())),
            Some(new) => {
                let fields = old.changed_fields(new);
                if !fields.is_empty() {
                    changes.push(SnapshotChange::Changed {
                        key: key.clone(),
                        fields,
                    });
                }
            }
        }
    }
    for key in after.keys() {
        if !before.contains_key(key) {
            changes.push(SnapshotChange::Added(key.clone()));
        }
    }
    changes
}
