//! Show/hide decision for the promotional popup.
//!
//! The clock and the stored dismissal timestamp are inputs, so the
//! decision itself stays pure; `storage` owns the persisted side.

use chrono::{DateTime, Duration, Utc};

use crate::models::Promotion;

/// Hours a dismissal keeps the popup hidden when the promotion does not
/// specify its own duration.
pub const DEFAULT_SUPPRESS_HOURS: i64 = 24;

/// Local-storage key holding the dismissal timestamp for a promotion.
pub fn dismissal_key(promotion_id: &str) -> String {
    format!("promotion_{promotion_id}_dismissed")
}

/// A promotion is shown iff it is active, `now` falls inside its date
/// window (inclusive on both ends), and any prior dismissal is older
/// than the suppress duration.
pub fn should_show_promotion(
    promo: &Promotion,
    dismissed_at: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> bool {
    if !promo.is_active {
        return false;
    }
    if now < promo.starts_at || now > promo.ends_at {
        return false;
    }

    let suppress = Duration::hours(promo.suppress_hours.unwrap_or(DEFAULT_SUPPRESS_HOURS));
    match dismissed_at {
        None => true,
        Some(at) => now.signed_duration_since(at) > suppress,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_promotion() -> Promotion {
        Promotion {
            id: "ramadan-sale".to_string(),
            title: "Ramadan Sale".to_string(),
            image: "https://cdn.example.com/promo.png".to_string(),
            url: "/courses".to_string(),
            is_active: true,
            starts_at: Utc.with_ymd_and_hms(2026, 3, 1, 0, 0, 0).unwrap(),
            ends_at: Utc.with_ymd_and_hms(2026, 3, 31, 23, 59, 59).unwrap(),
            suppress_hours: None,
        }
    }

    fn mid_window() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_active_in_window_no_dismissal_shows() {
        assert!(should_show_promotion(&make_promotion(), None, mid_window()));
    }

    #[test]
    fn test_inactive_never_shows() {
        let mut promo = make_promotion();
        promo.is_active = false;
        assert!(!should_show_promotion(&promo, None, mid_window()));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let promo = make_promotion();
        assert!(should_show_promotion(&promo, None, promo.starts_at));
        assert!(should_show_promotion(&promo, None, promo.ends_at));
        assert!(!should_show_promotion(
            &promo,
            None,
            promo.starts_at - Duration::seconds(1)
        ));
        assert!(!should_show_promotion(
            &promo,
            None,
            promo.ends_at + Duration::seconds(1)
        ));
    }

    #[test]
    fn test_recent_dismissal_suppresses() {
        let now = mid_window();
        let dismissed = now - Duration::hours(23);
        assert!(!should_show_promotion(&make_promotion(), Some(dismissed), now));
    }

    #[test]
    fn test_stale_dismissal_reshows() {
        let now = mid_window();
        let dismissed = now - Duration::hours(25);
        assert!(should_show_promotion(&make_promotion(), Some(dismissed), now));
    }

    #[test]
    fn test_custom_suppress_duration() {
        let mut promo = make_promotion();
        promo.suppress_hours = Some(1);
        let now = mid_window();
        assert!(!should_show_promotion(
            &promo,
            Some(now - Duration::minutes(30)),
            now
        ));
        assert!(should_show_promotion(
            &promo,
            Some(now - Duration::minutes(90)),
            now
        ));
    }

    #[test]
    fn test_dismissal_key_format() {
        assert_eq!(dismissal_key("ramadan-sale"), "promotion_ramadan-sale_dismissed");
    }
}
