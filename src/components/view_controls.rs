//! Grid/list toggle, sort dropdown, and result count for a card surface.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::preferences::ViewMode;
use crate::state::sync::{SortMode, Surface};

fn view_button_class(active: bool) -> &'static str {
    if active { "btn view-controls__btn view-controls__btn--active" } else { "btn view-controls__btn" }
}

#[component]
pub fn ViewControls(surface: Surface) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snap = ctx.surfaces.get(surface);
    let current_view = move || snap.with(|s| s.view);
    let set_view = move |view: ViewMode| ctx.sync().set_view(surface, view);

    let on_sort = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        match SortMode::parse_for(surface, &raw) {
            Some(mode) => ctx.sync().set_sort(mode),
            None => log::warn!("unknown sort option {raw:?}"),
        }
    };

    view! {
        <div class="view-controls">
            <span class="view-controls__count">
                {move || format!("{} movies", snap.with(|s| s.counters.results))}
            </span>
            <span class="view-controls__spacer"></span>
            <select class="view-controls__sort" on:change=on_sort prop:value=move || snap.with(|s| s.sort.as_str())>
                {SortMode::options(surface)
                    .into_iter()
                    .map(|(value, label)| view! { <option value=value>{label}</option> })
                    .collect_view()}
            </select>
            <div class="view-controls__toggle">
                <button
                    class=move || view_button_class(current_view() == ViewMode::Grid)
                    title="Grid view"
                    on:click=move |_| set_view(ViewMode::Grid)
                >
                    <i class="fas fa-th"></i>
                </button>
                <button
                    class=move || view_button_class(current_view() == ViewMode::List)
                    title="List view"
                    on:click=move |_| set_view(ViewMode::List)
                >
                    <i class="fas fa-list"></i>
                </button>
            </div>
        </div>
    }
}
