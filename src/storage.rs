//! Browser storage access. Everything degrades to a no-op when storage
//! is unavailable; reads and writes are idempotent, last-write-wins.

use chrono::{DateTime, Utc};
use web_sys::Storage;

use crate::promo;

/// Session-storage key for the referral code picked up from the URL.
pub const REFERRAL_KEY: &str = "referral_code";

fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

fn session_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.session_storage().ok().flatten())
}

/// When the promotion with `promotion_id` was last dismissed, if ever.
pub fn dismissed_at(promotion_id: &str) -> Option<DateTime<Utc>> {
    let raw = local_storage()?.get_item(&promo::dismissal_key(promotion_id)).ok()??;
    DateTime::parse_from_rfc3339(&raw)
        .ok()
        .map(|t| t.with_timezone(&Utc))
}

/// Persist a dismissal timestamp for `promotion_id`, overwriting any
/// earlier one.
pub fn record_dismissal(promotion_id: &str, at: DateTime<Utc>) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(&promo::dismissal_key(promotion_id), &at.to_rfc3339());
    }
}

/// Copy a `?ref=` query parameter into session storage, once per visit.
/// Later visits with a new code overwrite the old one.
pub fn capture_referral_code() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(search) = window.location().search() else {
        return;
    };
    let Ok(params) = web_sys::UrlSearchParams::new_with_str(&search) else {
        return;
    };
    let Some(code) = params.get("ref") else {
        return;
    };
    if code.is_empty() {
        return;
    }
    if let Some(storage) = session_storage() {
        let _ = storage.set_item(REFERRAL_KEY, &code);
    }
}

/// The referral code captured earlier in this session, if any.
pub fn referral_code() -> Option<String> {
    session_storage()?.get_item(REFERRAL_KEY).ok()?
}
