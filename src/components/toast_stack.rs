//! Stack of transient notifications in the corner of the page.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::state::toast::Toast;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || ctx.toasts.get().items
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str()) role="status">
                            <i class=toast.kind.icon_class()></i>
                            <span class="toast__message">{toast.message}</span>
                            <button
                                class="toast__close"
                                title="Dismiss"
                                on:click=move |_| ctx.toasts.update(|t| t.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
