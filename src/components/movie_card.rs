//! Movie cards for the recommendations and favorites surfaces.
//!
//! SYSTEM CONTEXT
//! ==============
//! Cards render `CardRecord`s from the surface snapshot and nothing else.
//! The heart button goes through `RenderSync`, which rewrites the snapshot
//! signals, so the card list re-renders with fresh flags and counters.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::preferences::ViewMode;
use crate::state::sync::{CardRecord, Surface};
use crate::state::toast::ToastKind;
use crate::util::format::PLACEHOLDER_POSTER;

/// Every card on `surface`, in snapshot order.
#[component]
pub fn CardList(surface: Surface) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snap = ctx.surfaces.get(surface);

    view! {
        <div class=move || format!("movie-list movie-list--{}", snap.with(|s| s.view.as_str()))>
            {move || {
                let current = snap.get();
                current
                    .cards
                    .into_iter()
                    .map(|card| view! { <MovieCard card=card layout=current.view surface=surface/> })
                    .collect_view()
            }}
        </div>
    }
}

/// One movie. Clicking the body opens the detail modal.
#[component]
pub fn MovieCard(card: CardRecord, layout: ViewMode, surface: Surface) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let id = card.id;
    let entry = card.entry;

    let on_heart = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        match surface {
            Surface::Recommendations => {
                if ctx.sync().toggle_favorite(entry.clone()) {
                    ctx.notify(ToastKind::Success, "Added to favorites");
                } else {
                    ctx.notify(ToastKind::Info, "Removed from favorites");
                }
            }
            Surface::Favorites => {
                if ctx.sync().remove_favorite(id) {
                    ctx.notify(ToastKind::Info, "Removed from favorites");
                }
            }
        }
    };

    let heart_class = if card.is_favorite { "movie-card__heart movie-card__heart--active" } else { "movie-card__heart" };
    let heart_icon = match (surface, card.is_favorite) {
        (Surface::Favorites, _) => "fas fa-trash",
        (Surface::Recommendations, true) => "fas fa-heart",
        (Surface::Recommendations, false) => "far fa-heart",
    };
    let heart_title = match surface {
        Surface::Favorites => "Remove from favorites",
        Surface::Recommendations => "Toggle favorite",
    };
    let poster = if card.poster.trim().is_empty() { PLACEHOLDER_POSTER.to_owned() } else { card.poster };
    let overview = match surface {
        Surface::Recommendations => {
            Some(card.overview_excerpt.unwrap_or_else(|| "No description available.".to_owned()))
        }
        Surface::Favorites => None,
    };
    let title = card.title;

    view! {
        <article class=format!("movie-card movie-card--{}", layout.as_str()) on:click=move |_| ctx.open_detail(id)>
            <div class="movie-card__poster">
                <img src=poster alt=title.clone() loading="lazy"/>
                {card.similarity_label.map(|label| view! { <span class="movie-card__match">{label}</span> })}
                <button class=heart_class title=heart_title on:click=on_heart>
                    <i class=heart_icon></i>
                </button>
            </div>
            <div class="movie-card__body">
                <h3 class="movie-card__title">{title}</h3>
                <div class="movie-card__meta">
                    <span class="movie-card__rating">
                        <i class="fas fa-star"></i>
                        " "
                        {card.rating_label}
                    </span>
                    <span class="movie-card__year">{card.year_label}</span>
                    {card.runtime_label.map(|runtime| view! { <span class="movie-card__runtime">{runtime}</span> })}
                </div>
                {overview.map(|text| view! { <p class="movie-card__overview">{text}</p> })}
                <div class="movie-card__genres">
                    {card.genres.into_iter().map(|g| view! { <span class="genre-tag">{g}</span> }).collect_view()}
                </div>
            </div>
        </article>
    }
}
