//! Named button fixtures for the catalog page and the snapshot runner.
//!
//! Stories are plain data: an ordered list of [`Story`] values, each holding
//! the [`Fixture`]s to render side by side.

pub mod snapshot;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

use crate::components::ui::button::{
    ButtonConfig, ButtonSize, ButtonState, ButtonType, ButtonVariant,
};

pub const CATALOG_TITLE: &str = "components/Button";

/// Action name recorded when a clickable fixture is activated.
pub const CLICK_ACTION: &str = "clicked";

pub const INTERACTIVE_STORY: &str = "Interactive";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryIcon {
    ArrowRight,
    ArrowLeft,
    Folder,
    Trash,
}

/// What a fixture puts inside the button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureContent {
    pub icon: Option<StoryIcon>,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryLayout {
    #[default]
    Centered,
    Row,
    Column {
        width_px: u16,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fixture {
    pub content: FixtureContent,
    pub state: ButtonState,
    pub button_type: ButtonType,
    /// Whether activations are reported to the actions log.
    pub clickable: bool,
    /// Extra inline declarations appended after the resolved style.
    pub inline_style: &'static str,
}

impl Fixture {
    pub fn text(label: &'static str) -> Self {
        Self {
            content: FixtureContent { icon: None, label },
            state: ButtonState::default(),
            button_type: ButtonType::default(),
            clickable: false,
            inline_style: "",
        }
    }

    pub fn icon(icon: StoryIcon, label: &'static str) -> Self {
        Self {
            content: FixtureContent {
                icon: Some(icon),
                label,
            },
            ..Self::text(label)
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.state.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.state.size = size;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.state.disabled = true;
        self
    }

    pub fn loading(mut self) -> Self {
        self.state.loading = true;
        self
    }

    pub fn full_width(mut self) -> Self {
        self.state.full_width = true;
        self
    }

    pub fn clickable(mut self) -> Self {
        self.clickable = true;
        self
    }

    pub fn style(mut self, inline_style: &'static str) -> Self {
        self.inline_style = inline_style;
        self
    }

    /// Render input for this fixture. The host attaches a click handler.
    pub fn to_config(&self) -> ButtonConfig<FixtureContent> {
        ButtonConfig::new(self.content.clone())
            .with_state(self.state)
            .button_type(self.button_type)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Story {
    pub name: &'static str,
    pub layout: StoryLayout,
    pub description: Option<&'static str>,
    pub fixtures: Vec<Fixture>,
}

impl Story {
    fn new(name: &'static str, layout: StoryLayout, fixtures: Vec<Fixture>) -> Self {
        Self {
            name,
            layout,
            description: None,
            fixtures,
        }
    }

    fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// One story per variant with a single md button that reports clicks.
fn variant_story(name: &'static str, label: &'static str, variant: ButtonVariant) -> Story {
    Story::new(
        name,
        StoryLayout::Centered,
        vec![Fixture::text(label)
            .variant(variant)
            .size(ButtonSize::Md)
            .clickable()],
    )
}

fn every_variant(label_for: impl Fn(ButtonVariant) -> &'static str) -> Vec<Fixture> {
    ButtonVariant::iter()
        .map(|variant| Fixture::text(label_for(variant)).variant(variant))
        .collect()
}

/// All button stories in display order.
pub fn button_stories() -> Vec<Story> {
    vec![
        variant_story("Primary", "Primary Button", ButtonVariant::Primary),
        variant_story("Secondary", "Secondary Button", ButtonVariant::Secondary),
        variant_story("Outline", "Outline Button", ButtonVariant::Outline),
        variant_story("Ghost", "Ghost Button", ButtonVariant::Ghost),
        variant_story("Danger", "Danger Button", ButtonVariant::Danger),
        Story::new(
            "Sizes",
            StoryLayout::Row,
            vec![
                Fixture::text("Small").size(ButtonSize::Sm),
                Fixture::text("Medium").size(ButtonSize::Md),
                Fixture::text("Large").size(ButtonSize::Lg),
            ],
        ),
        Story::new(
            "AllVariants",
            StoryLayout::Row,
            every_variant(|variant| match variant {
                ButtonVariant::Primary => "Primary",
                ButtonVariant::Secondary => "Secondary",
                ButtonVariant::Outline => "Outline",
                ButtonVariant::Ghost => "Ghost",
                ButtonVariant::Danger => "Danger",
            }),
        ),
        Story::new(
            "Disabled",
            StoryLayout::Row,
            every_variant(|variant| match variant {
                ButtonVariant::Primary => "Primary Disabled",
                ButtonVariant::Secondary => "Secondary Disabled",
                ButtonVariant::Outline => "Outline Disabled",
                ButtonVariant::Ghost => "Ghost Disabled",
                ButtonVariant::Danger => "Danger Disabled",
            })
            .into_iter()
            .map(Fixture::disabled)
            .collect(),
        ),
        Story::new(
            "Loading",
            StoryLayout::Row,
            every_variant(|_| "Loading")
                .into_iter()
                .map(Fixture::loading)
                .collect(),
        ),
        Story::new(
            "FullWidth",
            StoryLayout::Column { width_px: 300 },
            vec![
                Fixture::text("Full Width Button")
                    .variant(ButtonVariant::Primary)
                    .full_width()
                    .style("margin-bottom: 16px;"),
                Fixture::text("Another Full Width Button")
                    .variant(ButtonVariant::Outline)
                    .full_width(),
            ],
        ),
        Story::new(
            "WithIcon",
            StoryLayout::Row,
            vec![
                Fixture::icon(StoryIcon::ArrowRight, "Next").variant(ButtonVariant::Primary),
                Fixture::icon(StoryIcon::ArrowLeft, "Back").variant(ButtonVariant::Secondary),
                Fixture::icon(StoryIcon::Folder, "Open Folder").variant(ButtonVariant::Outline),
                Fixture::icon(StoryIcon::Trash, "Delete").variant(ButtonVariant::Danger),
            ],
        ),
        Story::new(
            INTERACTIVE_STORY,
            StoryLayout::Centered,
            vec![Fixture::text("Click me!")
                .variant(ButtonVariant::Primary)
                .clickable()],
        )
        .describe("Click the button to see the event in the actions log."),
    ]
}

/* ========================================================== */
/*                     🎛️ CONTROLS 🎛️                         */
/* ========================================================== */

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ControlKind {
    Select { options: Vec<&'static str> },
    Boolean,
    Text,
    Action { action: &'static str },
}

/// Editable argument of the interactive story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Control {
    pub name: &'static str,
    pub kind: ControlKind,
    pub description: &'static str,
}

pub fn button_controls() -> Vec<Control> {
    vec![
        Control {
            name: "label",
            kind: ControlKind::Text,
            description: "Button content",
        },
        Control {
            name: "variant",
            kind: ControlKind::Select {
                options: ButtonVariant::iter().map(ButtonVariant::as_str).collect(),
            },
            description: "Visual style variant of the button",
        },
        Control {
            name: "size",
            kind: ControlKind::Select {
                options: ButtonSize::iter().map(ButtonSize::as_str).collect(),
            },
            description: "Size of the button",
        },
        Control {
            name: "disabled",
            kind: ControlKind::Boolean,
            description: "Whether the button is disabled",
        },
        Control {
            name: "loading",
            kind: ControlKind::Boolean,
            description: "Whether the button is loading",
        },
        Control {
            name: "full_width",
            kind: ControlKind::Boolean,
            description: "Whether the button spans the full width",
        },
        Control {
            name: "on_click",
            kind: ControlKind::Action {
                action: CLICK_ACTION,
            },
            description: "Click event handler",
        },
    ]
}

/// Current arguments of the interactive story, edited through the controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundArgs {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

impl Default for PlaygroundArgs {
    fn default() -> Self {
        Self {
            label: "Click me!".to_string(),
            variant: ButtonVariant::Primary,
            size: ButtonSize::Md,
            disabled: false,
            loading: false,
            full_width: false,
        }
    }
}

impl PlaygroundArgs {
    pub fn state(&self) -> ButtonState {
        ButtonState {
            variant: self.variant,
            size: self.size,
            disabled: self.disabled,
            loading: self.loading,
            full_width: self.full_width,
        }
    }

    /// String form of a control's current value, as shown by its input.
    pub fn control_value(&self, name: &str) -> String {
        match name {
            "label" => self.label.clone(),
            "variant" => self.variant.to_string(),
            "size" => self.size.to_string(),
            "disabled" => self.disabled.to_string(),
            "loading" => self.loading.to_string(),
            "full_width" => self.full_width.to_string(),
            _ => String::new(),
        }
    }

    /// Applies a value coming from a control input. Returns false for names
    /// that are not editable arguments.
    pub fn apply_control(&mut self, name: &str, value: &str) -> bool {
        match name {
            "label" => self.label = value.to_string(),
            "variant" => self.variant = ButtonVariant::parse_lossy(value),
            "size" => self.size = ButtonSize::parse_lossy(value),
            "disabled" => self.disabled = parse_flag(value),
            "loading" => self.loading = parse_flag(value),
            "full_width" => self.full_width = parse_flag(value),
            _ => return false,
        }
        true
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim(), "true" | "1" | "on")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(name: &str) -> Story {
        button_stories()
            .into_iter()
            .find(|s| s.name == name)
            .expect("story should exist")
    }

    #[test]
    fn test_story_order() {
        let names: Vec<_> = button_stories().iter().map(|s| s.name).collect();
        assert_eq!(
            names,
            vec![
                "Primary",
                "Secondary",
                "Outline",
                "Ghost",
                "Danger",
                "Sizes",
                "AllVariants",
                "Disabled",
                "Loading",
                "FullWidth",
                "WithIcon",
                "Interactive",
            ]
        );
    }

    #[test]
    fn test_variant_stories_are_single_clickable_md_buttons() {
        for (name, variant) in [
            ("Primary", ButtonVariant::Primary),
            ("Danger", ButtonVariant::Danger),
        ] {
            let s = story(name);
            assert_eq!(s.fixtures.len(), 1);
            assert_eq!(s.fixtures[0].state.variant, variant);
            assert_eq!(s.fixtures[0].state.size, ButtonSize::Md);
            assert!(s.fixtures[0].clickable);
        }
        assert_eq!(story("Ghost").fixtures[0].content.label, "Ghost Button");
    }

    #[test]
    fn test_disabled_and_loading_cover_every_variant() {
        let disabled = story("Disabled");
        let loading = story("Loading");
        let variants: Vec<_> = ButtonVariant::iter().collect();

        assert_eq!(
            disabled.fixtures.iter().map(|f| f.state.variant).collect::<Vec<_>>(),
            variants
        );
        assert!(disabled.fixtures.iter().all(|f| f.state.disabled && !f.state.loading));
        assert_eq!(disabled.fixtures[2].content.label, "Outline Disabled");

        assert_eq!(loading.fixtures.len(), variants.len());
        assert!(loading.fixtures.iter().all(|f| f.state.loading && !f.state.disabled));
    }

    #[test]
    fn test_full_width_story_uses_fixed_column() {
        let s = story("FullWidth");
        assert_eq!(s.layout, StoryLayout::Column { width_px: 300 });
        assert!(s.fixtures.iter().all(|f| f.state.full_width));
        assert_eq!(s.fixtures[0].inline_style, "margin-bottom: 16px;");
        assert_eq!(s.fixtures[1].inline_style, "");
    }

    #[test]
    fn test_with_icon_fixtures_carry_icons() {
        let s = story("WithIcon");
        let icons: Vec<_> = s.fixtures.iter().filter_map(|f| f.content.icon).collect();
        assert_eq!(
            icons,
            vec![
                StoryIcon::ArrowRight,
                StoryIcon::ArrowLeft,
                StoryIcon::Folder,
                StoryIcon::Trash
            ]
        );
    }

    #[test]
    fn test_interactive_story_has_description() {
        let s = story(INTERACTIVE_STORY);
        assert!(s.description.is_some());
        assert_eq!(s.fixtures[0].content.label, PlaygroundArgs::default().label);
    }

    #[test]
    fn test_fixture_to_config_keeps_state() {
        let fixture = Fixture::text("Save").variant(ButtonVariant::Ghost).loading();
        let config = fixture.to_config();
        assert_eq!(config.state(), fixture.state);
        assert!(config.on_click.is_none());
        assert_eq!(config.content.label, "Save");
    }

    #[test]
    fn test_select_controls_list_every_option() {
        let controls = button_controls();
        let variant = controls.iter().find(|c| c.name == "variant").unwrap();
        assert_eq!(
            variant.kind,
            ControlKind::Select {
                options: vec!["primary", "secondary", "outline", "ghost", "danger"]
            }
        );
        let size = controls.iter().find(|c| c.name == "size").unwrap();
        assert_eq!(
            size.kind,
            ControlKind::Select {
                options: vec!["sm", "md", "lg"]
            }
        );
    }

    #[test]
    fn test_every_editable_control_round_trips_through_args() {
        let mut args = PlaygroundArgs::default();
        for control in button_controls() {
            let value = args.control_value(control.name);
            let applied = args.apply_control(control.name, &value);
            assert_eq!(applied, !matches!(control.kind, ControlKind::Action { .. }));
        }
        assert_eq!(args, PlaygroundArgs::default());
    }

    #[test]
    fn test_apply_control() {
        let mut args = PlaygroundArgs::default();
        assert!(args.apply_control("variant", "danger"));
        assert!(args.apply_control("size", "huge"));
        assert!(args.apply_control("loading", "true"));
        assert!(!args.apply_control("color", "red"));

        assert_eq!(args.variant, ButtonVariant::Danger);
        assert_eq!(args.size, ButtonSize::Md);
        assert!(args.state().is_non_interactive());
    }

    #[test]
    fn test_args_deserialize_missing_fields_with_defaults() {
        let args: PlaygroundArgs =
            serde_json::from_str(r#"{"variant":"outline"}"#).expect("args should parse");
        assert_eq!(args.variant, ButtonVariant::Outline);
        assert_eq!(args.label, "Click me!");
        assert!(!args.disabled);
    }

    #[test]
    fn test_args_with_unknown_names_keep_other_fields() {
        let args: PlaygroundArgs = serde_json::from_str(
            r#"{"label":"Keep me","variant":"neon","size":"xl","loading":true}"#,
        )
        .expect("args should parse");
        assert_eq!(args.label, "Keep me");
        assert_eq!(args.variant, ButtonVariant::Primary);
        assert_eq!(args.size, ButtonSize::Md);
        assert!(args.loading);
    }
}
