//! Share menu for the favorites list.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::toast::ToastKind;
use crate::state::ui::UiState;
use crate::util::share::{self, ShareAction, SharePlatform};

#[component]
pub fn ShareMenu() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let share_to = move |platform: SharePlatform| {
        let titles = ctx.sync().favorites().list().into_iter().map(|f| f.title).collect::<Vec<_>>();
        let text = share::share_text(&titles);
        match share::share_action(platform, &text, &share::current_url()) {
            ShareAction::Open { url, features } => share::open_window(&url, features),
            ShareAction::Clipboard(text) => leptos::task::spawn_local(async move {
                match share::copy_to_clipboard(&text).await {
                    Ok(()) => ctx.notify(ToastKind::Success, "Link copied to clipboard!"),
                    Err(e) => ctx.notify_error(&e),
                }
            }),
        }
        ctx.ui.update(UiState::close_menus);
    };

    view! {
        <Show when=move || ctx.ui.with(|u| u.share_open)>
            <div class="share-menu share-menu--show">
                <div class="share-menu__header">
                    <span>"Share your favorites"</span>
                    <button class="share-menu__close" on:click=move |_| ctx.ui.update(UiState::close_menus)>
                        <i class="fas fa-times"></i>
                    </button>
                </div>
                {SharePlatform::ALL
                    .into_iter()
                    .map(|platform| {
                        view! {
                            <button class="share-menu__option" on:click=move |_| share_to(platform)>
                                <i class=platform.icon_class()></i>
                                " "
                                {platform.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </Show>
    }
}
