use super::*;

fn titles(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_owned()).collect()
}

// =============================================================
// share_text
// =============================================================

#[test]
fn empty_favorites_use_fallback() {
    assert_eq!(share_text(&[]), "Check out CineMatch - AI-powered movie recommendations!");
}

#[test]
fn up_to_three_titles_end_with_bang() {
    assert_eq!(
        share_text(&titles(&["Heat", "Up", "Alien"])),
        "Check out my 3 favorite movies on CineMatch: Heat, Up, Alien!"
    );
}

#[test]
fn more_than_three_titles_say_and_more() {
    assert_eq!(
        share_text(&titles(&["Heat", "Up", "Alien", "Jaws"])),
        "Check out my 4 favorite movies on CineMatch: Heat, Up, Alien and more!"
    );
}

// =============================================================
// share_action
// =============================================================

#[test]
fn twitter_encodes_text_and_url() {
    let action = share_action(SharePlatform::Twitter, "a b&c", "https://x.test/fav?x=1");
    assert_eq!(
        action,
        ShareAction::Open {
            url: "https://twitter.com/intent/tweet?text=a%20b%26c&url=https%3A%2F%2Fx.test%2Ffav%3Fx%3D1".to_owned(),
            features: Some("width=600,height=400"),
        }
    );
}

#[test]
fn facebook_shares_only_url() {
    let ShareAction::Open { url, .. } = share_action(SharePlatform::Facebook, "ignored", "https://x.test/") else {
        panic!("expected open");
    };
    assert_eq!(url, "https://www.facebook.com/sharer/sharer.php?u=https%3A%2F%2Fx.test%2F");
}

#[test]
fn whatsapp_joins_text_and_url_with_newline() {
    let ShareAction::Open { url, features } = share_action(SharePlatform::WhatsApp, "hi", "https://x.test/") else {
        panic!("expected open");
    };
    assert_eq!(url, "https://wa.me/?text=hi%0Ahttps%3A%2F%2Fx.test%2F");
    assert_eq!(features, None);
}

#[test]
fn copy_returns_clipboard_text() {
    assert_eq!(
        share_action(SharePlatform::Copy, "hi", "https://x.test/"),
        ShareAction::Clipboard("hi\nhttps://x.test/".to_owned())
    );
}
