use std::fmt::Write as _;
use std::rc::Rc;
use std::str::FromStr;

use leptos::logging::warn;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};
use tw_merge::tw_merge;

use crate::components::ui::spinner::ButtonSpinner;
use crate::theme;

/// Layout and focus classes shared by every variant. Colors come from the
/// `--btn-*` custom properties set inline by [`ResolvedStyle::to_css`], so
/// hover and active rules keep working under an inline style.
pub const BUTTON_BASE_CLASS: &str = "relative inline-flex items-center justify-center gap-2 rounded-md font-medium whitespace-nowrap select-none shrink-0 transition-all duration-200 ease-in-out outline-none focus-visible:ring-[3px] focus-visible:ring-blue-100 bg-(--btn-bg) text-(--btn-fg) hover:bg-(--btn-hover-bg) hover:text-(--btn-hover-fg) active:bg-(--btn-active-bg) touch-manipulation [-webkit-tap-highlight-color:transparent]";

/* ========================================================== */
/*                       🧬 ENUMS 🧬                          */
/* ========================================================== */

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Danger,
}

impl ButtonVariant {
    /// Parses a variant name. Anything unrecognized renders as `Primary`.
    pub fn parse_lossy(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_else(|_| {
            warn!("unknown button variant {name:?}, falling back to primary");
            Self::default()
        })
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn style_profile(self) -> &'static StyleProfile {
        &STYLE_PROFILES[self as usize]
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// Parses a size name. Anything unrecognized renders as `Md`.
    pub fn parse_lossy(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_else(|_| {
            warn!("unknown button size {name:?}, falling back to md");
            Self::default()
        })
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn size_profile(self) -> &'static SizeProfile {
        &SIZE_PROFILES[self as usize]
    }
}

/// Value of the native `type` attribute.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Display,
    AsRefStr,
    IntoStaticStr,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
    Reset,
}

impl ButtonType {
    pub fn parse_lossy(name: &str) -> Self {
        Self::from_str(name.trim()).unwrap_or_else(|_| {
            warn!("unknown button type {name:?}, falling back to button");
            Self::default()
        })
    }

    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

// Deserialization goes through the lossy parsers so a stored or hand-written
// config with an unknown name keeps its other fields.
impl From<String> for ButtonVariant {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<String> for ButtonSize {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

impl From<String> for ButtonType {
    fn from(name: String) -> Self {
        Self::parse_lossy(&name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Width {
    #[default]
    Intrinsic,
    Full,
}

impl Width {
    pub fn css(self) -> &'static str {
        match self {
            Width::Intrinsic => "auto",
            Width::Full => "100%",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Cursor {
    #[default]
    Pointer,
    NotAllowed,
}

impl Cursor {
    pub fn css(self) -> &'static str {
        match self {
            Cursor::Pointer => "pointer",
            Cursor::NotAllowed => "not-allowed",
        }
    }
}

/* ========================================================== */
/*                     🎨 PROFILES 🎨                         */
/* ========================================================== */

/// Colors for one variant: the base pair plus hover and active overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StyleProfile {
    pub background: &'static str,
    pub foreground: &'static str,
    pub border_color: Option<&'static str>,
    pub hover_background: &'static str,
    pub hover_foreground: &'static str,
    pub active_background: &'static str,
}

/// Indexed by `ButtonVariant as usize`.
pub const STYLE_PROFILES: [StyleProfile; 5] = [
    // primary
    StyleProfile {
        background: theme::BLUE_600,
        foreground: theme::WHITE,
        border_color: None,
        hover_background: theme::BLUE_700,
        hover_foreground: theme::WHITE,
        active_background: theme::BLUE_800,
    },
    // secondary
    StyleProfile {
        background: theme::GRAY_100,
        foreground: theme::GRAY_700,
        border_color: None,
        hover_background: theme::GRAY_200,
        hover_foreground: theme::GRAY_700,
        active_background: theme::GRAY_300,
    },
    // outline
    StyleProfile {
        background: theme::TRANSPARENT,
        foreground: theme::BLUE_600,
        border_color: Some(theme::BLUE_600),
        hover_background: theme::BLUE_50,
        hover_foreground: theme::BLUE_600,
        active_background: theme::BLUE_100,
    },
    // ghost
    StyleProfile {
        background: theme::TRANSPARENT,
        foreground: theme::GRAY_600,
        border_color: None,
        hover_background: theme::GRAY_100,
        hover_foreground: theme::GRAY_700,
        active_background: theme::GRAY_200,
    },
    // danger
    StyleProfile {
        background: theme::RED_600,
        foreground: theme::WHITE,
        border_color: None,
        hover_background: theme::RED_700,
        hover_foreground: theme::WHITE,
        active_background: theme::RED_800,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SizeProfile {
    pub padding_y: &'static str,
    pub padding_x: &'static str,
    pub font_size: &'static str,
    pub min_height_px: u16,
}

/// Indexed by `ButtonSize as usize`.
pub const SIZE_PROFILES: [SizeProfile; 3] = [
    // sm
    SizeProfile {
        padding_y: theme::SPACING_2,
        padding_x: theme::SPACING_4,
        font_size: theme::FONT_SIZE_SM,
        min_height_px: 32,
    },
    // md
    SizeProfile {
        padding_y: theme::SPACING_3,
        padding_x: theme::SPACING_6,
        font_size: theme::FONT_SIZE_BASE,
        min_height_px: 40,
    },
    // lg
    SizeProfile {
        padding_y: theme::SPACING_4,
        padding_x: theme::SPACING_8,
        font_size: theme::FONT_SIZE_LG,
        min_height_px: 48,
    },
];

/* ========================================================== */
/*                     ⚙️ RESOLUTION ⚙️                       */
/* ========================================================== */

/// The styling flags of a button, without its content or handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonState {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
}

impl ButtonState {
    pub fn is_non_interactive(&self) -> bool {
        self.disabled || self.loading
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedStyle {
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub background: &'static str,
    pub foreground: &'static str,
    pub border_color: Option<&'static str>,
    pub hover_background: &'static str,
    pub hover_foreground: &'static str,
    pub active_background: &'static str,
    pub padding_y: &'static str,
    pub padding_x: &'static str,
    pub font_size: &'static str,
    pub min_height_px: u16,
    pub width: Width,
    pub opacity: f32,
    pub cursor: Cursor,
    pub pointer_events: bool,
    pub non_interactive: bool,
    pub spinner: bool,
    /// Spinner stroke color; the label color before the loading overlay
    /// made it transparent.
    pub spinner_color: &'static str,
}

/// Resolves the final style for a set of flags.
///
/// Overlays apply in a fixed order: variant and size, full width, disabled,
/// loading. Disabled and loading stack; loading keeps the muted colors of a
/// disabled button. Hover and active colors are frozen to the base colors
/// whenever the button cannot be activated.
pub fn resolve_style(state: ButtonState) -> ResolvedStyle {
    let profile = state.variant.style_profile();
    let size = state.size.size_profile();

    let mut style = ResolvedStyle {
        variant: state.variant,
        size: state.size,
        background: profile.background,
        foreground: profile.foreground,
        border_color: profile.border_color,
        hover_background: profile.hover_background,
        hover_foreground: profile.hover_foreground,
        active_background: profile.active_background,
        padding_y: size.padding_y,
        padding_x: size.padding_x,
        font_size: size.font_size,
        min_height_px: size.min_height_px,
        width: Width::Intrinsic,
        opacity: 1.0,
        cursor: Cursor::Pointer,
        pointer_events: true,
        non_interactive: false,
        spinner: false,
        spinner_color: profile.foreground,
    };

    if state.full_width {
        style.width = Width::Full;
    }

    if state.disabled {
        style.background = theme::MUTED_BACKGROUND;
        style.foreground = theme::MUTED_FOREGROUND;
        style.spinner_color = theme::MUTED_FOREGROUND;
        freeze_non_interactive(&mut style);
    }

    if state.loading {
        style.foreground = theme::TRANSPARENT;
        style.pointer_events = false;
        style.spinner = true;
        freeze_non_interactive(&mut style);
    }

    style
}

fn freeze_non_interactive(style: &mut ResolvedStyle) {
    style.non_interactive = true;
    style.cursor = Cursor::NotAllowed;
    style.opacity = theme::NON_INTERACTIVE_OPACITY;
    style.hover_background = style.background;
    style.hover_foreground = style.foreground;
    style.active_background = style.background;
}

impl ResolvedStyle {
    /// Inline declarations for the host element.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "--btn-bg: {}; --btn-fg: {}; --btn-hover-bg: {}; --btn-hover-fg: {}; --btn-active-bg: {}; --btn-spinner: {}; ",
            self.background,
            self.foreground,
            self.hover_background,
            self.hover_foreground,
            self.active_background,
            self.spinner_color,
        );
        let _ = write!(
            css,
            "padding: {} {}; font-size: {}; min-height: {}px; width: {}; ",
            self.padding_y,
            self.padding_x,
            self.font_size,
            self.min_height_px,
            self.width.css(),
        );
        match self.border_color {
            Some(color) => {
                let _ = write!(css, "border: {}px solid {}; ", theme::BORDER_WIDTH_PX, color);
            }
            None => css.push_str("border: none; "),
        }
        let _ = write!(
            css,
            "opacity: {}; cursor: {};",
            self.opacity,
            self.cursor.css()
        );
        if !self.pointer_events {
            css.push_str(" pointer-events: none;");
        }
        css
    }
}

/// Resolved declarations followed by the caller's own inline style, so the
/// caller's declarations win.
pub fn merge_inline_style(resolved: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        return resolved.to_string();
    }
    let mut css = resolved.trim_end().to_string();
    if !css.is_empty() && !css.ends_with(';') {
        css.push(';');
    }
    if !css.is_empty() {
        css.push(' ');
    }
    css.push_str(extra);
    css
}

/* ========================================================== */
/*                      🧱 RENDER 🧱                          */
/* ========================================================== */

pub type ClickHandler = Rc<dyn Fn()>;

/// Everything needed to render one button. Built fresh for every render.
#[derive(Clone)]
pub struct ButtonConfig<C> {
    pub content: C,
    pub variant: ButtonVariant,
    pub size: ButtonSize,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
    pub button_type: ButtonType,
    pub on_click: Option<ClickHandler>,
}

impl<C> ButtonConfig<C> {
    pub fn new(content: C) -> Self {
        Self {
            content,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            loading: false,
            full_width: false,
            button_type: ButtonType::default(),
            on_click: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    pub fn button_type(mut self, button_type: ButtonType) -> Self {
        self.button_type = button_type;
        self
    }

    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn with_state(mut self, state: ButtonState) -> Self {
        self.variant = state.variant;
        self.size = state.size;
        self.disabled = state.disabled;
        self.loading = state.loading;
        self.full_width = state.full_width;
        self
    }

    pub fn state(&self) -> ButtonState {
        ButtonState {
            variant: self.variant,
            size: self.size,
            disabled: self.disabled,
            loading: self.loading,
            full_width: self.full_width,
        }
    }
}

/// Indeterminate spinner drawn over the label while loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpinnerNode {
    pub size_px: u8,
    pub color: &'static str,
}

impl SpinnerNode {
    pub fn centered(color: &'static str) -> Self {
        Self {
            size_px: theme::SPINNER_SIZE_PX,
            color,
        }
    }

    /// Absolute centering over the parent button.
    pub fn css(&self) -> String {
        format!(
            "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); width: {0}px; height: {0}px; color: {1};",
            self.size_px, self.color
        )
    }
}

pub struct RenderNode<C> {
    pub button_type: ButtonType,
    pub style: ResolvedStyle,
    pub content: C,
    pub spinner: Option<SpinnerNode>,
    on_click: Option<ClickHandler>,
}

impl<C> RenderNode<C> {
    pub fn is_interactive(&self) -> bool {
        !self.style.non_interactive
    }

    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Content plus the spinner overlay, if any.
    pub fn child_count(&self) -> usize {
        1 + usize::from(self.spinner.is_some())
    }

    /// Simulates one activation by the end user. Returns whether a handler ran.
    pub fn activate(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                handler();
                true
            }
            None => false,
        }
    }
}

/// Renders a button: resolves its style, wires the click handler only when
/// the button can be activated, and adds a spinner child while loading.
pub fn render<C>(config: ButtonConfig<C>) -> RenderNode<C> {
    let style = resolve_style(config.state());
    let on_click = if style.non_interactive {
        None
    } else {
        config.on_click
    };
    let spinner = style
        .spinner
        .then(|| SpinnerNode::centered(style.spinner_color));

    RenderNode {
        button_type: config.button_type,
        style,
        content: config.content,
        spinner,
        on_click,
    }
}

/* ========================================================== */
/*                     🧩 COMPONENT 🧩                        */
/* ========================================================== */

#[component]
pub fn Button(
    #[prop(into, optional)] variant: Signal<ButtonVariant>,
    #[prop(into, optional)] size: Signal<ButtonSize>,
    #[prop(into, optional)] disabled: Signal<bool>,
    #[prop(into, optional)] loading: Signal<bool>,
    #[prop(into, optional)] full_width: Signal<bool>,
    #[prop(optional)] button_type: ButtonType,
    #[prop(into, optional)] on_click: Option<Callback<()>>,
    #[prop(into, optional)] class: String,
    #[prop(into, optional)] style: String,
    children: Children,
) -> impl IntoView {
    let state = Memo::new(move |_| ButtonState {
        variant: variant.get(),
        size: size.get(),
        disabled: disabled.get(),
        loading: loading.get(),
        full_width: full_width.get(),
    });
    let resolved = Memo::new(move |_| resolve_style(state.get()));

    let merged_class = tw_merge!(BUTTON_BASE_CLASS, class);

    let handle_click = move |_| {
        if resolved.with(|s| s.non_interactive) {
            return;
        }
        if let Some(callback) = on_click {
            callback.run(());
        }
    };

    view! {
        <button
            type=button_type.as_str()
            class=merged_class
            style=move || resolved.with(|s| merge_inline_style(&s.to_css(), &style))
            disabled=move || resolved.with(|s| s.non_interactive)
            aria-busy=move || resolved.with(|s| s.spinner.to_string())
            data-variant=move || state.with(|s| s.variant.as_str())
            data-size=move || state.with(|s| s.size.as_str())
            on:click=handle_click
        >
            {children()}
            <Show when=move || resolved.with(|s| s.spinner)>
                <ButtonSpinner color=Signal::derive(move || resolved.with(|s| s.spinner_color)) />
            </Show>
        </button>
    }
}
