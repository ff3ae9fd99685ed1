//! Wall-clock helpers for element timestamps.

/// Milliseconds since the UNIX epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_millis() -> f64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs_f64() * 1000.0)
        .unwrap_or_default()
}

/// Milliseconds since the UNIX epoch
#[cfg(target_arch = "wasm32")]
pub fn now_millis() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|perf| perf.time_origin() + perf.now())
        .unwrap_or(0.0)
}

/// Whole seconds since the UNIX epoch, as stored in `created_at`
pub fn timestamp_secs() -> u64 {
    (now_millis() / 1000.0) as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_is_after_2020() {
        assert!(timestamp_secs() > 1_577_836_800);
    }
}
