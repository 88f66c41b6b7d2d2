//! Dark/light theme toggle button.

use leptos::prelude::*;

use crate::app::AppContext;

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <button class="btn navbar__theme-toggle" title="Toggle theme" on:click=move |_| ctx.toggle_theme()>
            <i class=move || ctx.theme.get().icon_class()></i>
        </button>
    }
}
