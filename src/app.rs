//! Root application component with routing and context providers.
//!
//! DESIGN
//! ======
//! Persisted state lives in `localStorage` only. Components never cache it;
//! they hold one `RwSignal<Snapshot>` per surface, written exclusively by
//! [`Surfaces`] acting as the synchronizer's renderer. A `RenderSync` is
//! built per action from zero-sized browser handles, so nothing non-`Send`
//! ends up inside a signal or context.
//!
//! SYSTEM CONTEXT
//! ==============
//! The window `storage` listener forwards other tabs' writes to
//! `RenderSync::handle_event`, keeping both pages and the navbar counter
//! current across tabs.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::movie_modal::MovieModal;
use crate::components::navbar::Navbar;
use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api;
use crate::pages::{favorites::FavoritesPage, home::HomePage};
use crate::state::favorites::FavoritesStore;
use crate::state::preferences::PreferenceStore;
use crate::state::recent_searches::RecentSearches;
use crate::state::recommendations::{RecommendationCache, SourceMovie};
#[cfg(feature = "csr")]
use crate::state::sync::SyncEvent;
use crate::state::sync::{RenderSync, Renderer, Snapshot, Surface};
use crate::state::toast::{ToastKind, ToastState};
use crate::state::ui::{DetailState, UiState, recommendations_notice};
use crate::util::clock::{Clock, SystemClock};
use crate::util::storage::{BrowserStorage, SharedStore};
use crate::util::theme::{self, Theme};

/// Snapshot signals, one per surface. Implements [`Renderer`].
#[derive(Clone, Copy)]
pub struct Surfaces {
    pub recommendations: RwSignal<Snapshot>,
    pub favorites: RwSignal<Snapshot>,
}

impl Surfaces {
    pub fn new() -> Self {
        Self { recommendations: RwSignal::new(Snapshot::default()), favorites: RwSignal::new(Snapshot::default()) }
    }

    #[must_use]
    pub fn get(self, surface: Surface) -> RwSignal<Snapshot> {
        match surface {
            Surface::Recommendations => self.recommendations,
            Surface::Favorites => self.favorites,
        }
    }
}

impl Default for Surfaces {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for Surfaces {
    fn present(&self, surface: Surface, snapshot: &Snapshot) {
        self.get(surface).set(snapshot.clone());
    }
}

fn browser_store() -> SharedStore {
    Rc::new(BrowserStorage)
}

fn browser_clock() -> Rc<dyn Clock> {
    Rc::new(SystemClock)
}

/// Shared handles provided as context to every page and component.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub surfaces: Surfaces,
    pub ui: RwSignal<UiState>,
    pub toasts: RwSignal<ToastState>,
    pub theme: RwSignal<Theme>,
    pub config: StoredValue<ClientConfig>,
}

impl AppContext {
    /// Synchronizer over browser storage rendering into this app's signals.
    pub fn sync(self) -> RenderSync<Surfaces> {
        let store = browser_store();
        let clock = browser_clock();
        let ttl = self.config.with_value(|c| c.cache_ttl_ms);
        RenderSync::from_stores(
            FavoritesStore::new(store.clone(), clock.clone()),
            RecommendationCache::with_ttl(store.clone(), clock, ttl),
            PreferenceStore::new(store),
            self.surfaces,
        )
    }

    #[allow(clippy::unused_self)]
    pub fn preferences(self) -> PreferenceStore {
        PreferenceStore::new(browser_store())
    }

    pub fn recent_searches(self) -> RecentSearches {
        RecentSearches::with_max(browser_store(), self.config.with_value(|c| c.max_recent))
    }

    /// Show a toast and dismiss it after the configured delay.
    pub fn notify(self, kind: ToastKind, message: impl Into<String>) {
        let id = self.toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();
        #[cfg(feature = "csr")]
        {
            let toasts = self.toasts;
            let delay = self.config.with_value(|c| c.toast_ms);
            gloo_timers::callback::Timeout::new(delay, move || toasts.update(|t| t.dismiss(id))).forget();
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
        }
    }

    pub fn notify_error(self, err: &ClientError) {
        let (kind, message) = err.toast();
        self.notify(kind, message);
    }

    /// Fetch recommendations for `title`, cache them, and show them.
    ///
    /// Concurrent requests are not sequenced; whichever resolves last is
    /// what stays on screen.
    pub fn request_recommendations(self, title: &str) {
        let title = title.trim().to_owned();
        if title.is_empty() {
            self.notify_error(&ClientError::Validation("Please enter a movie name".to_owned()));
            return;
        }
        self.ui.update(|u| {
            u.loading = true;
            u.query.clone_from(&title);
            u.hide_suggestions();
        });
        log::info!("requesting recommendations for {title:?}");

        leptos::task::spawn_local(async move {
            let base = self.config.with_value(|c| c.api_base.clone());
            match api::fetch_recommendations(&base, &title).await {
                Ok(movies) if movies.is_empty() => {
                    // Nothing to cache; the current display stays as it was.
                    let (kind, message) = recommendations_notice(&title, 0);
                    self.notify(kind, message);
                }
                Ok(movies) => {
                    self.recent_searches().record(&title);
                    let (kind, message) = recommendations_notice(&title, movies.len());
                    self.sync().show_recommendations(&movies, Some(&SourceMovie { title }));
                    self.notify(kind, message);
                    scroll_into_view("recommendations");
                }
                Err(e) => {
                    log::warn!("recommendations failed: {e}");
                    self.notify_error(&e);
                }
            }
            self.ui.update(|u| u.loading = false);
        });
    }

    /// Open the detail modal for `id` and load its record.
    pub fn open_detail(self, id: i64) {
        self.ui.update(|u| u.detail = DetailState::Loading);
        leptos::task::spawn_local(async move {
            let base = self.config.with_value(|c| c.api_base.clone());
            let next = match api::fetch_movie_detail(&base, id).await {
                Ok(detail) => DetailState::Loaded(Box::new(detail)),
                Err(e) => {
                    log::warn!("movie detail {id} failed: {e}");
                    self.notify(ToastKind::Error, "Failed to load movie details");
                    DetailState::Failed
                }
            };
            // Ignore a response for a modal the user already closed.
            self.ui.update(|u| {
                if u.detail.is_open() {
                    u.detail = next;
                }
            });
        });
    }

    pub fn close_detail(self) {
        self.ui.update(|u| u.detail = DetailState::Closed);
    }

    pub fn toggle_theme(self) {
        self.theme.set(theme::toggle(&self.preferences()));
    }
}

/// Scroll the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll the window to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "csr")]
    {
        if let Some(w) = web_sys::window() {
            let opts = web_sys::ScrollToOptions::new();
            opts.set_top(0.0);
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            w.scroll_to_with_scroll_to_options(&opts);
        }
    }
}

/// Ask the user to confirm a destructive action. Always true off-browser.
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        true
    }
}

/// Root application component.
///
/// Provides shared contexts, renders both surfaces from storage once, and
/// sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::load();
    log::debug!("client config: {config:?}");

    let ctx = AppContext {
        surfaces: Surfaces::new(),
        ui: RwSignal::new(UiState::default()),
        toasts: RwSignal::new(ToastState::default()),
        theme: RwSignal::new(Theme::default()),
        config: StoredValue::new(config),
    };
    provide_context(ctx);

    ctx.theme.set(theme::init(&ctx.preferences()));
    ctx.sync().sync_all();

    #[cfg(feature = "csr")]
    {
        use crate::util::storage::StorageKey;

        let handle = window_event_listener(leptos::ev::storage, move |ev| {
            let key = ev.key();
            let theme_changed = key.as_deref().is_none_or(|k| k == StorageKey::Theme.as_str());
            let event = SyncEvent::StorageChanged { key };
            let surfaces = ctx.sync().handle_event(&event);
            log::debug!("storage event {event:?} resynced {surfaces:?}");
            if theme_changed {
                ctx.theme.set(theme::init(&ctx.preferences()));
            }
        });
        on_cleanup(move || handle.remove());
    }

    view! {
        <Title text="CineMatch"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("favorites") view=FavoritesPage/>
                </Routes>
            </main>
            <MovieModal/>
            <ToastStack/>
        </Router>
    }
}
