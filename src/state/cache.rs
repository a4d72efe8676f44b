//! Local Snapshot Cache
//!
//! Persists the last known pledge total in localStorage so the UI can
//! render a meaningful value before the first network response. One key,
//! last-write-wins, no expiry. Only strictly positive totals are written,
//! so an initial-load zero never clobbers a cached value.

/// Local storage key for the cached total
pub const CACHE_KEY: &str = "fund_total";

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Load the cached total, or `0.0` if absent or unusable.
///
/// Read once at startup to seed the displayed total.
pub fn load_total() -> f64 {
    storage()
        .and_then(|s| s.get_item(CACHE_KEY).ok().flatten())
        .map(|raw| parse_total(&raw))
        .unwrap_or(0.0)
}

/// Persist a total, skipping values the cache should not hold.
pub fn save_total(total: f64) {
    if !should_persist(total) {
        return;
    }
    if let Some(storage) = storage() {
        let _ = storage.set_item(CACHE_KEY, &total.to_string());
    }
}

/// Only finite, strictly positive totals are worth caching.
pub fn should_persist(total: f64) -> bool {
    total.is_finite() && total > 0.0
}

/// Parse a cached string back to a total; garbage collapses to `0.0`.
pub fn parse_total(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v >= 0.0)
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_total_roundtrip() {
        assert_eq!(parse_total("120"), 120.0);
        assert_eq!(parse_total("175.5"), 175.5);
        assert_eq!(parse_total(&150.0_f64.to_string()), 150.0);
    }

    #[test]
    fn test_parse_total_garbage_is_zero() {
        assert_eq!(parse_total(""), 0.0);
        assert_eq!(parse_total("abc"), 0.0);
        assert_eq!(parse_total("-5"), 0.0);
        assert_eq!(parse_total("NaN"), 0.0);
        assert_eq!(parse_total("inf"), 0.0);
    }

    #[test]
    fn test_should_persist_gates_on_positive() {
        assert!(should_persist(0.01));
        assert!(should_persist(150.0));
        assert!(!should_persist(0.0));
        assert!(!should_persist(-1.0));
        assert!(!should_persist(f64::NAN));
        assert!(!should_persist(f64::INFINITY));
    }
}
