//! Top navigation bar with the favorites counter and theme toggle.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::theme_toggle::ThemeToggle;

/// Site navigation. The counter badge is hidden when there are no favorites.
#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let count = move || ctx.surfaces.favorites.with(|s| s.counters.favorites);

    view! {
        <nav class="navbar">
            <a href="/" class="navbar__brand">
                <i class="fas fa-film"></i>
                " CineMatch"
            </a>
            <span class="navbar__spacer"></span>
            <a href="/" class="navbar__link">"Home"</a>
            <a href="/favorites" class="navbar__link navbar__favorites">
                <i class="fas fa-heart"></i>
                " Favorites"
                <Show when=move || { count() > 0 }>
                    <span class="navbar__counter">{count}</span>
                </Show>
            </a>
            <ThemeToggle/>
        </nav>
    }
}
