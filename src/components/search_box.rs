//! Movie search input with debounced live suggestions.
//!
//! DESIGN
//! ======
//! Typing updates `UiState::query` immediately and schedules a suggestion
//! fetch through a [`Debouncer`], so only the last keystroke inside the
//! quiescence window reaches the API. Focusing a short query shows recent
//! searches (or the popular list) without a request. Submitting goes through
//! `AppContext::request_recommendations`.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::net::api;
use crate::state::ui::{InputAction, SuggestionHeader, Suggestions, UiState, idle_suggestions, input_action};
use crate::util::debounce::Debouncer;
use crate::util::picks;

#[component]
pub fn SearchBox() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let (debounce_ms, min_len, limit) = ctx.config.with_value(|c| (c.debounce_ms, c.min_query_len, c.suggestion_limit));
    let debouncer = StoredValue::new_local(Debouncer::new(debounce_ms));

    let fetch_suggestions = move |query: String| {
        leptos::task::spawn_local(async move {
            let base = ctx.config.with_value(|c| c.api_base.clone());
            match api::search_titles(&base, &query).await {
                Ok(results) => ctx.ui.update(|u| {
                    // A response for text the user has since changed is stale.
                    if u.query.trim() == query {
                        u.suggestions = Suggestions::new(SuggestionHeader::Search, results, limit);
                    }
                }),
                Err(e) => log::warn!("suggestions for {query:?} failed: {e}"),
            }
        });
    };

    let on_input = move |ev: leptos::ev::Event| {
        let raw = event_target_value(&ev);
        let action = input_action(&raw, min_len);
        ctx.ui.update(|u| u.query = raw);
        match action {
            InputAction::Hide => {
                debouncer.with_value(Debouncer::cancel);
                ctx.ui.update(UiState::hide_suggestions);
            }
            InputAction::Fetch(query) => debouncer.with_value(|d| d.call(move || fetch_suggestions(query))),
        }
    };

    let on_focus = move |_| {
        let query = ctx.ui.with_untracked(|u| u.query.clone());
        match input_action(&query, min_len) {
            InputAction::Fetch(query) => fetch_suggestions(query),
            InputAction::Hide => {
                let idle = idle_suggestions(ctx.recent_searches().list(), picks::popular_titles(), limit);
                ctx.ui.update(|u| u.suggestions = idle);
            }
        }
    };

    let submit = move || {
        debouncer.with_value(Debouncer::cancel);
        let query = ctx.ui.with_untracked(|u| u.query.clone());
        ctx.request_recommendations(&query);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Enter" => {
            ev.prevent_default();
            submit();
        }
        "Escape" => ctx.ui.update(UiState::hide_suggestions),
        _ => {}
    };

    let select = move |title: String| {
        debouncer.with_value(Debouncer::cancel);
        ctx.request_recommendations(&title);
    };

    view! {
        <div class="search-box">
            <div class="search-box__field">
                <i class="fas fa-search search-box__icon"></i>
                <input
                    id="movieSearch"
                    class="search-box__input"
                    type="text"
                    placeholder="Search for a movie you love..."
                    autocomplete="off"
                    prop:value=move || ctx.ui.with(|u| u.query.clone())
                    on:input=on_input
                    on:focus=on_focus
                    on:blur=move |_| ctx.ui.update(UiState::hide_suggestions)
                    on:keydown=on_keydown
                />
                <button class="btn btn--primary search-box__submit" on:click=move |_| submit()>
                    <Show
                        when=move || ctx.ui.with(|u| u.loading)
                        fallback=|| view! { <span>"Get Recommendations"</span> }
                    >
                        <span class="spinner spinner--small"></span>
                    </Show>
                </button>
            </div>
            {move || {
                ctx.ui
                    .with(|u| u.suggestions.clone())
                    .map(|s| {
                        view! {
                            <div class="search-suggestions search-suggestions--show">
                                <div class="search-suggestions__header">
                                    <i class=s.header.icon_class()></i>
                                    " "
                                    {s.header.label()}
                                </div>
                                {s
                                    .items
                                    .into_iter()
                                    .map(|title| {
                                        let chosen = title.clone();
                                        // mousedown fires before the input's blur hides the list.
                                        view! {
                                            <div
                                                class="search-suggestions__item"
                                                on:mousedown=move |ev| {
                                                    ev.prevent_default();
                                                    select(chosen.clone());
                                                }
                                            >
                                                <i class="fas fa-film"></i>
                                                <span>{title}</span>
                                                <i class="fas fa-arrow-right search-suggestions__arrow"></i>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
