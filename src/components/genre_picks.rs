//! Genre quick-search buttons on the home page.

use leptos::prelude::*;

use crate::app::{AppContext, scroll_into_view};
use crate::state::toast::ToastKind;
use crate::util::picks::{self, GENRES};

/// One button per genre; each runs a search for a random sample title.
#[component]
pub fn GenrePicks() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let pick = move |slug: &'static str, label: &'static str| {
        let Some(title) = picks::pick_for_genre(slug, picks::random_roll()) else {
            return;
        };
        ctx.notify(ToastKind::Info, format!("Searching for {label} movies like \"{title}\""));
        scroll_into_view("search");
        ctx.request_recommendations(title);
    };

    view! {
        <div class="genre-picks">
            {GENRES
                .iter()
                .map(|(slug, label, _)| {
                    let (slug, label) = (*slug, *label);
                    view! {
                        <button class="btn genre-picks__btn" on:click=move |_| pick(slug, label)>
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
