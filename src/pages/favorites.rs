//! Favorites page with export, share, and clear actions.

use leptos::prelude::*;

use crate::app::{AppContext, confirm, scroll_to_top};
use crate::components::movie_card::CardList;
use crate::components::share_menu::ShareMenu;
use crate::components::view_controls::ViewControls;
use crate::state::favorites::EXPORT_FILE_NAME;
use crate::state::sync::{PageState, Surface};
use crate::state::toast::ToastKind;
use crate::state::ui::UiState;
use crate::util::export;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let snap = ctx.surfaces.favorites;
    scroll_to_top();
    ctx.sync().sync(Surface::Favorites);

    let count = move || snap.with(|s| s.counters.favorites);

    let on_export = move |_| {
        let sync = ctx.sync();
        if sync.favorites().count() == 0 {
            ctx.notify(ToastKind::Warning, "No favorites to export");
        } else {
            export::download_json(EXPORT_FILE_NAME, &sync.favorites().export_json());
            ctx.notify(ToastKind::Success, "Favorites exported");
        }
        ctx.ui.update(UiState::close_menus);
    };

    let on_share = move |_| {
        ctx.ui.update(|u| {
            u.fab_open = false;
            u.share_open = !u.share_open;
        });
    };

    let on_clear = move |_| {
        ctx.ui.update(UiState::close_menus);
        if ctx.sync().favorites().count() == 0 || !confirm("Are you sure you want to clear all favorites?") {
            return;
        }
        ctx.sync().clear_favorites();
        ctx.notify(ToastKind::Info, "All favorites cleared");
    };

    let fab_class = move || {
        if ctx.ui.with(|u| u.fab_open) { "fab fab--open" } else { "fab" }
    };

    view! {
        <section class="hero hero--compact">
            <h1 class="hero__title">
                <i class="fas fa-heart"></i>
                " My Favorites"
            </h1>
            <p class="hero__subtitle">
                {move || match count() {
                    1 => "1 movie saved".to_owned(),
                    n => format!("{n} movies saved"),
                }}
            </p>
        </section>

        <section class="favorites">
            <Show
                when=move || snap.with(|s| s.page == PageState::Loaded)
                fallback=|| {
                    view! {
                        <div class="empty-state">
                            <i class="far fa-heart"></i>
                            <h3>"No favorites yet"</h3>
                            <p>"Tap the heart on any recommendation to save it here."</p>
                            <a class="btn btn--primary" href="/">"Discover Movies"</a>
                        </div>
                    }
                }
            >
                <ViewControls surface=Surface::Favorites/>
                <CardList surface=Surface::Favorites/>
            </Show>
        </section>

        <div class=fab_class>
            <div class="fab__actions">
                <button class="fab__action" title="Export favorites" on:click=on_export>
                    <i class="fas fa-download"></i>
                </button>
                <button class="fab__action" title="Share favorites" on:click=on_share>
                    <i class="fas fa-share-alt"></i>
                </button>
                <button class="fab__action fab__action--danger" title="Clear all favorites" on:click=on_clear>
                    <i class="fas fa-trash"></i>
                </button>
            </div>
            <button class="fab__toggle" title="Actions" on:click=move |_| ctx.ui.update(|u| u.fab_open = !u.fab_open)>
                <i class="fas fa-ellipsis-v"></i>
            </button>
        </div>
        <ShareMenu/>
    }
}
