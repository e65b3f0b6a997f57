use leptos::prelude::*;
use leptos_ui::clx;

mod components {
    use super::*;
    clx! {Panel, section, "bg-card text-card-foreground flex flex-col gap-4 rounded-xl border py-6 shadow-sm"}
    clx! {PanelHeader, header, "flex flex-col items-start gap-1.5 px-6"}
    clx! {PanelTitle, h2, "leading-none font-semibold"}
    clx! {PanelDescription, p, "text-muted-foreground text-sm"}
    clx! {PanelContent, div, "px-6"}
    clx! {PanelList, ul, "flex flex-col gap-2"}
    clx! {PanelItem, li, "flex items-center justify-between gap-2 text-xs"}
}

pub use components::*;
