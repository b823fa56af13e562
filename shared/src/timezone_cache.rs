use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;

static TIMEZONE_CACHE: Lazy<Mutex<HashMap<String, Tz>>> = Lazy::new(|| Mutex::new(HashMap::new()));

/// Get a league timezone from cache or parse and cache it
pub fn get_cached_timezone(timezone_name: &str) -> Option<Tz> {
    if let Ok(cache) = TIMEZONE_CACHE.lock() {
        if let Some(tz) = cache.get(timezone_name) {
            return Some(*tz);
        }
    }

    match timezone_name.parse::<Tz>() {
        Ok(tz) => {
            if let Ok(mut cache) = TIMEZONE_CACHE.lock() {
                cache.insert(timezone_name.to_string(), tz);
            }
            Some(tz)
        }
        Err(_) => {
            log::warn!("Unknown league timezone: {}", timezone_name);
            None
        }
    }
}

/// Convert UTC datetime to a league timezone with caching
pub fn convert_to_timezone_cached(
    utc_dt: DateTime<Utc>,
    timezone_name: &str,
) -> Option<DateTime<Tz>> {
    get_cached_timezone(timezone_name).map(|tz| utc_dt.with_timezone(&tz))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike};
    use test_log::test;

    #[test]
    fn test_timezone_caching() {
        let tz1 = get_cached_timezone("Europe/London");
        let tz2 = get_cached_timezone("Europe/London");
        assert!(tz1.is_some());
        assert_eq!(tz1, tz2);
    }

    #[test]
    fn test_unknown_timezone_is_not_cached() {
        assert!(get_cached_timezone("Nowhere/Special").is_none());
    }

    #[test]
    fn test_conversion_uses_cached_zone() {
        let utc_time = Utc.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap();
        let tokyo = convert_to_timezone_cached(utc_time, "Asia/Tokyo").unwrap();
        assert_eq!(tokyo.hour(), 21);
    }
}
