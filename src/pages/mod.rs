use crate::catalog::{
    button_controls, button_stories, Control, ControlKind, Fixture, FixtureContent, Story,
    StoryIcon, StoryLayout, INTERACTIVE_STORY,
};
use crate::components::ui::{
    Button, ButtonSize, ButtonVariant, Panel, PanelContent, PanelDescription, PanelHeader,
    PanelItem, PanelList, PanelTitle,
};
use crate::state::CatalogContext;
use crate::util::{format_clock, now_ms};
use icons::{ArrowLeft, ArrowRight, FolderOpen, Trash2};
use leptos::prelude::*;

const ICON_CLASS: &str = "size-4";

fn canvas_class(layout: StoryLayout) -> &'static str {
    match layout {
        StoryLayout::Centered => "flex items-center justify-center py-6",
        StoryLayout::Row => "flex flex-wrap items-center gap-4",
        StoryLayout::Column { .. } => "flex flex-col",
    }
}

fn canvas_style(layout: StoryLayout) -> String {
    match layout {
        StoryLayout::Column { width_px } => format!("width: {width_px}px"),
        _ => String::new(),
    }
}

#[component]
fn FixtureLabel(content: FixtureContent) -> impl IntoView {
    let icon = content.icon.map(|icon| match icon {
        StoryIcon::ArrowRight => view! { <ArrowRight class=ICON_CLASS.to_string() /> }.into_any(),
        StoryIcon::ArrowLeft => view! { <ArrowLeft class=ICON_CLASS.to_string() /> }.into_any(),
        StoryIcon::Folder => view! { <FolderOpen class=ICON_CLASS.to_string() /> }.into_any(),
        StoryIcon::Trash => view! { <Trash2 class=ICON_CLASS.to_string() /> }.into_any(),
    });

    view! {
        {icon}
        <span>{content.label}</span>
    }
}

#[component]
fn FixtureButton(fixture: Fixture, story: &'static str) -> impl IntoView {
    let app_state = expect_context::<CatalogContext>();
    let state = fixture.state;
    let clickable = fixture.clickable;

    let on_click = Callback::new(move |_| {
        app_state.0.record_fixture_click(clickable, story, now_ms());
    });

    view! {
        <Button
            variant=state.variant
            size=state.size
            disabled=state.disabled
            loading=state.loading
            full_width=state.full_width
            button_type=fixture.button_type
            style=fixture.inline_style
            on_click=on_click
        >
            <FixtureLabel content=fixture.content />
        </Button>
    }
}

#[component]
fn StoryView(story: Story) -> impl IntoView {
    let name = story.name;
    let layout = story.layout;
    let description = story.description;

    view! {
        <Panel attr:id=name>
            <PanelHeader>
                <PanelTitle>{name}</PanelTitle>
                {description.map(|d| view! { <PanelDescription>{d}</PanelDescription> })}
            </PanelHeader>
            <PanelContent>
                <div class=canvas_class(layout) style=canvas_style(layout)>
                    {story
                        .fixtures
                        .into_iter()
                        .map(|fixture| view! { <FixtureButton fixture=fixture story=name /> })
                        .collect_view()}
                </div>
            </PanelContent>
        </Panel>
    }
}

#[component]
fn ControlField(control: Control) -> impl IntoView {
    let app_state = expect_context::<CatalogContext>();
    let args = app_state.0.playground;
    let name = control.name;
    let current = move || args.with(|a| a.control_value(name));

    let input = match control.kind {
        ControlKind::Select { options } => {
            let state = app_state.0.clone();
            view! {
                <select
                    class="h-8 rounded-md border bg-transparent px-2 text-xs"
                    prop:value=current
                    on:change=move |ev| state.apply_control(name, &event_target_value(&ev))
                >
                    {options
                        .into_iter()
                        .map(|opt| view! { <option value=opt>{opt}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        ControlKind::Boolean => {
            let state = app_state.0.clone();
            view! {
                <input
                    type="checkbox"
                    class="size-4"
                    prop:checked=move || current() == "true"
                    on:change=move |ev| {
                        state.apply_control(name, &event_target_checked(&ev).to_string())
                    }
                />
            }
            .into_any()
        }
        ControlKind::Text => {
            let state = app_state.0.clone();
            view! {
                <input
                    type="text"
                    class="h-8 rounded-md border bg-transparent px-2 text-xs"
                    prop:value=current
                    on:input=move |ev| state.apply_control(name, &event_target_value(&ev))
                />
            }
            .into_any()
        }
        ControlKind::Action { action } => view! {
            <span class="text-xs text-muted-foreground">{format!("action: {action}")}</span>
        }
        .into_any(),
    };

    view! {
        <PanelItem>
            <div class="flex flex-col">
                <span class="font-medium">{name}</span>
                <span class="text-muted-foreground">{control.description}</span>
            </div>
            {input}
        </PanelItem>
    }
}

#[component]
fn PlaygroundPanel() -> impl IntoView {
    let app_state = expect_context::<CatalogContext>();
    let args = app_state.0.playground;

    let click_state = app_state.0.clone();
    let on_click = Callback::new(move |_| click_state.record_click(INTERACTIVE_STORY));

    let reset_state = app_state.0.clone();
    let on_reset = Callback::new(move |_| reset_state.reset_playground());

    view! {
        <Panel>
            <PanelHeader>
                <PanelTitle>"Playground"</PanelTitle>
                <PanelDescription>"Edit the controls to restyle the button."</PanelDescription>
            </PanelHeader>
            <PanelContent>
                <div class="grid gap-6 sm:grid-cols-2">
                    <div class="flex items-center justify-center rounded-md border p-6">
                        <Button
                            variant=Signal::derive(move || args.with(|a| a.variant))
                            size=Signal::derive(move || args.with(|a| a.size))
                            disabled=Signal::derive(move || args.with(|a| a.disabled))
                            loading=Signal::derive(move || args.with(|a| a.loading))
                            full_width=Signal::derive(move || args.with(|a| a.full_width))
                            on_click=on_click
                        >
                            {move || args.with(|a| a.label.clone())}
                        </Button>
                    </div>
                    <PanelList>
                        {button_controls()
                            .into_iter()
                            .map(|control| view! { <ControlField control=control /> })
                            .collect_view()}
                    </PanelList>
                </div>
                <div class="mt-4 flex justify-end">
                    <Button variant=ButtonVariant::Ghost size=ButtonSize::Sm on_click=on_reset>
                        "Reset"
                    </Button>
                </div>
            </PanelContent>
        </Panel>
    }
}

#[component]
fn ActionsPanel() -> impl IntoView {
    let app_state = expect_context::<CatalogContext>();
    let actions = app_state.0.actions;

    let clear_state = app_state.0.clone();
    let on_clear = Callback::new(move |_| clear_state.clear_actions());

    view! {
        <Panel>
            <PanelHeader>
                <PanelTitle>"Actions"</PanelTitle>
                <PanelDescription>
                    {move || format!("{} recorded", actions.with(Vec::len))}
                </PanelDescription>
            </PanelHeader>
            <PanelContent>
                <Show
                    when=move || actions.with(|a| !a.is_empty())
                    fallback=|| view! { <div class="text-xs text-muted-foreground">"No actions yet."</div> }
                >
                    <PanelList>
                        {move || {
                            actions
                                .get()
                                .into_iter()
                                .map(|entry| {
                                    view! {
                                        <PanelItem>
                                            <span class="font-medium">
                                                {format!("{} · {}", entry.action, entry.story)}
                                            </span>
                                            <span class="text-muted-foreground">
                                                {format_clock(entry.at_ms)}
                                            </span>
                                        </PanelItem>
                                    }
                                })
                                .collect_view()
                        }}
                    </PanelList>
                </Show>
                <div class="mt-4 flex justify-end">
                    <Button
                        variant=ButtonVariant::Outline
                        size=ButtonSize::Sm
                        disabled=Signal::derive(move || actions.with(|a| a.is_empty()))
                        on_click=on_clear
                    >
                        "Clear"
                    </Button>
                </div>
            </PanelContent>
        </Panel>
    }
}

#[component]
pub fn CatalogPage() -> impl IntoView {
    let app_state = expect_context::<CatalogContext>();
    let title = app_state.0.config.title.clone();
    let stories = button_stories();
    let story_count = stories.len();

    view! {
        <div class="min-h-screen bg-background">
            <div class="mx-auto flex w-full max-w-[1080px] flex-col gap-6 px-4 py-8">
                <div class="space-y-1">
                    <h1 class="text-xl font-semibold">{title}</h1>
                    <p class="text-xs text-muted-foreground">{format!("{story_count} stories")}</p>
                </div>

                <PlaygroundPanel />
                <ActionsPanel />

                {stories
                    .into_iter()
                    .map(|story| view! { <StoryView story=story /> })
                    .collect_view()}
            </div>
        </div>
    }
}
