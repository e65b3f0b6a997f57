use icons::LoaderCircle;
use leptos::prelude::*;
use tw_merge::tw_merge;

use crate::components::ui::button::SpinnerNode;

/// Indeterminate spinner centered over a loading button's label.
#[component]
pub fn ButtonSpinner(
    #[prop(into)] color: Signal<&'static str>,
    #[prop(into, optional)] class: String,
) -> impl IntoView {
    let merged_class = tw_merge!("pointer-events-none inline-flex", class);
    let style = move || SpinnerNode::centered(color.get()).css();

    view! {
        <span class=merged_class style=style>
            <LoaderCircle
                class="size-4 animate-spin".to_string()
                attr:role="status"
                attr:aria-label="Loading"
            />
        </span>
    }
}
