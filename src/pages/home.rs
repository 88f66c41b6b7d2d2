//! Home page: search hero and the recommendations surface.

use leptos::prelude::*;

use crate::app::{AppContext, confirm, scroll_into_view};
use crate::components::genre_picks::GenrePicks;
use crate::components::movie_card::CardList;
use crate::components::search_box::SearchBox;
use crate::components::view_controls::ViewControls;
use crate::state::sync::{PageState, Surface};
use crate::state::toast::ToastKind;

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snap = ctx.surfaces.recommendations;
    ctx.sync().sync(Surface::Recommendations);

    let on_clear = move |_| {
        if !confirm("Are you sure you want to clear current recommendations?") {
            return;
        }
        ctx.sync().clear_recommendations();
        ctx.ui.update(|u| {
            u.query.clear();
            u.hide_suggestions();
        });
        scroll_into_view("search");
        ctx.notify(ToastKind::Info, "Recommendations cleared");
    };

    view! {
        <section id="search" class="hero">
            <h1 class="hero__title">"Discover Your Next Favorite Movie"</h1>
            <p class="hero__subtitle">"Tell us a movie you love and we'll find similar ones."</p>
            <SearchBox/>
            <GenrePicks/>
        </section>

        <section id="recommendations" class="recommendations">
            <Show when=move || ctx.ui.with(|u| u.loading)>
                <div class="loading">
                    <div class="spinner"></div>
                    <p>"Finding perfect recommendations..."</p>
                </div>
            </Show>
            <Show
                when=move || snap.with(|s| s.page == PageState::Loaded)
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <i class="fas fa-film"></i>
                            <h3>"Search for a movie to get started"</h3>
                            <p>"Recommendations appear here and are kept for a day."</p>
                        </div>
                    }
                }
            >
                <div class="recommendations__header">
                    <h2>
                        "Because you liked "
                        <span class="recommendations__source">
                            {move || snap.with(|s| s.source_title.clone().unwrap_or_default())}
                        </span>
                    </h2>
                    <button class="btn btn--ghost" on:click=on_clear>
                        <i class="fas fa-times"></i>
                        " Clear"
                    </button>
                </div>
                <ViewControls surface=Surface::Recommendations/>
                <CardList surface=Surface::Recommendations/>
            </Show>
        </section>
    }
}
