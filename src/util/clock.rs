//! Wall-clock source for caller-injected `updated_at` stamps.
//!
//! Payload builders take the timestamp as a parameter; this module is the
//! single place that actually reads the browser clock.

/// Current time as an ISO-8601 string. Epoch outside the browser so native
/// test builds stay deterministic.
pub fn now_iso() -> String {
    #[cfg(feature = "hydrate")]
    {
        String::from(js_sys::Date::new_0().to_iso_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        "1970-01-01T00:00:00.000Z".to_owned()
    }
}
