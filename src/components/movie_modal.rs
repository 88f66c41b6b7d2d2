//! Movie detail modal.
//!
//! Driven entirely by `UiState::detail`; `AppContext::open_detail` moves it
//! through loading into loaded or failed.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::types::MovieDetail;
use crate::state::ui::DetailState;
use crate::util::format::star_slots;

/// Cast members listed in the modal.
const CAST_SHOWN: usize = 5;

#[component]
pub fn MovieModal() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let is_open = move || ctx.ui.with(|u| u.detail.is_open());

    view! {
        <Show when=is_open>
            <div class="modal modal--show" on:click=move |_| ctx.close_detail()>
                <div class="modal__dialog" on:click=|ev| ev.stop_propagation()>
                    <button class="modal__close" title="Close" on:click=move |_| ctx.close_detail()>
                        <i class="fas fa-times"></i>
                    </button>
                    {move || match ctx.ui.with(|u| u.detail.clone()) {
                        DetailState::Closed => ().into_any(),
                        DetailState::Loading => {
                            view! {
                                <div class="modal__loading">
                                    <div class="spinner"></div>
                                </div>
                            }
                                .into_any()
                        }
                        DetailState::Failed => {
                            view! {
                                <div class="modal__error">
                                    <i class="fas fa-exclamation-triangle"></i>
                                    <h3>"Failed to Load Details"</h3>
                                    <p>"Could not retrieve information for this movie. Please try again later."</p>
                                </div>
                            }
                                .into_any()
                        }
                        DetailState::Loaded(detail) => view! { <MovieDetailBody detail=*detail/> }.into_any(),
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn MovieDetailBody(detail: MovieDetail) -> impl IntoView {
    let stars = star_slots(detail.rating)
        .into_iter()
        .map(|filled| {
            let class = if filled { "fas fa-star" } else { "far fa-star" };
            view! { <i class=class></i> }
        })
        .collect_view();
    let hero = detail.hero_image().to_owned();
    let director = detail.known_director().map(str::to_owned);
    let runtime = detail.runtime.as_ref().and_then(|r| r.minutes());
    let cast = detail.cast.iter().take(CAST_SHOWN).cloned().collect::<Vec<_>>().join(", ");
    let release = (!detail.release_date.is_empty()).then_some(detail.release_date);
    let overview = if detail.overview.trim().is_empty() { "No description available.".to_owned() } else { detail.overview };

    view! {
        <div class="modal__hero" style=format!("background-image: url('{hero}')")></div>
        <div class="modal__content">
            <h2 class="modal__title">{detail.title}</h2>
            <div class="modal__rating">
                <span class="modal__stars">{stars}</span>
                <span>{format!("{:.1} / 10", detail.rating)}</span>
            </div>
            <div class="modal__meta">
                {release.map(|date| view! {
                    <span><i class="fas fa-calendar"></i> " " {date}</span>
                })}
                {runtime.map(|m| view! {
                    <span><i class="fas fa-clock"></i> " " {format!("{m} min")}</span>
                })}
            </div>
            <p class="modal__overview">{overview}</p>
            <div class="modal__genres">
                {detail.genres.into_iter().map(|g| view! { <span class="genre-tag">{g}</span> }).collect_view()}
            </div>
            {director.map(|name| view! {
                <p class="modal__credit"><strong>"Director: "</strong>{name}</p>
            })}
            {(!cast.is_empty()).then(|| view! {
                <p class="modal__credit"><strong>"Cast: "</strong>{cast}</p>
            })}
        </div>
    }
}
