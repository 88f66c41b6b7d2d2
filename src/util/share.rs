//! Share-menu links and clipboard text for the favorites page.
//!
//! The message mentions how many favorites there are and the first three
//! titles. Opening windows and writing the clipboard are browser-only; the
//! text and URL builders are pure.

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use crate::error::{ClientError, ClientResult};

/// Titles quoted in the share message.
pub const SHARED_TITLE_COUNT: usize = 3;

const FALLBACK_TEXT: &str = "Check out CineMatch - AI-powered movie recommendations!";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SharePlatform {
    Twitter,
    Facebook,
    WhatsApp,
    Copy,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 4] =
        [SharePlatform::Twitter, SharePlatform::Facebook, SharePlatform::WhatsApp, SharePlatform::Copy];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Twitter => "Twitter",
            Self::Facebook => "Facebook",
            Self::WhatsApp => "WhatsApp",
            Self::Copy => "Copy Link",
        }
    }

    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Twitter => "fab fa-twitter",
            Self::Facebook => "fab fa-facebook-f",
            Self::WhatsApp => "fab fa-whatsapp",
            Self::Copy => "fas fa-link",
        }
    }
}

/// Where a share action sends the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShareAction {
    /// Open in a new window; the optional value is the window feature string.
    Open { url: String, features: Option<&'static str> },
    Clipboard(String),
}

/// Message built from the favorites' titles in display order.
#[must_use]
pub fn share_text(titles: &[String]) -> String {
    if titles.is_empty() {
        return FALLBACK_TEXT.to_owned();
    }
    let quoted = titles.iter().take(SHARED_TITLE_COUNT).map(String::as_str).collect::<Vec<_>>().join(", ");
    let tail = if titles.len() > SHARED_TITLE_COUNT { " and more!" } else { "!" };
    format!("Check out my {} favorite movies on CineMatch: {quoted}{tail}", titles.len())
}

#[must_use]
pub fn share_action(platform: SharePlatform, text: &str, page_url: &str) -> ShareAction {
    const POPUP: Option<&str> = Some("width=600,height=400");
    match platform {
        SharePlatform::Twitter => ShareAction::Open {
            url: format!(
                "https://twitter.com/intent/tweet?text={}&url={}",
                urlencoding::encode(text),
                urlencoding::encode(page_url)
            ),
            features: POPUP,
        },
        SharePlatform::Facebook => ShareAction::Open {
            url: format!("https://www.facebook.com/sharer/sharer.php?u={}", urlencoding::encode(page_url)),
            features: POPUP,
        },
        SharePlatform::WhatsApp => ShareAction::Open {
            url: format!("https://wa.me/?text={}", urlencoding::encode(&format!("{text}\n{page_url}"))),
            features: None,
        },
        SharePlatform::Copy => ShareAction::Clipboard(format!("{text}\n{page_url}")),
    }
}

/// Current page URL, empty outside the browser.
#[must_use]
pub fn current_url() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().href().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}

/// Open `url` in a new window.
pub fn open_window(url: &str, features: Option<&str>) {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        let result = match features {
            Some(features) => window.open_with_url_and_target_and_features(url, "_blank", features),
            None => window.open_with_url_and_target(url, "_blank"),
        };
        if let Err(e) = result {
            log::warn!("window.open failed: {e:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (url, features);
    }
}

/// Write `text` to the system clipboard.
///
/// # Errors
///
/// Returns `ClientError::Validation` when the clipboard is unavailable or
/// the browser rejects the write.
#[allow(clippy::unused_async)]
pub async fn copy_to_clipboard(text: &str) -> ClientResult<()> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window().ok_or_else(|| ClientError::Validation("no window".to_owned()))?;
        let promise = window.navigator().clipboard().write_text(text);
        wasm_bindgen_futures::JsFuture::from(promise)
            .await
            .map(|_| ())
            .map_err(|e| ClientError::Validation(format!("clipboard write failed: {e:?}")))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = text;
        Err(ClientError::Validation("clipboard not available".to_owned()))
    }
}
