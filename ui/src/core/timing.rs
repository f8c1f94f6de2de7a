//! Millisecond clock and sleep helpers shared by the coordinator and views.

/// Milliseconds on a monotonically increasing clock. Only differences are
/// meaningful; the origin is platform-defined.
pub type InstantStamp = f64;

#[cfg(target_arch = "wasm32")]
pub fn now() -> InstantStamp {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or(0.0)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn now() -> InstantStamp {
    use std::sync::OnceLock;
    use std::time::Instant;

    static ORIGIN: OnceLock<Instant> = OnceLock::new();
    let origin = ORIGIN.get_or_init(Instant::now);
    origin.elapsed().as_secs_f64() * 1000.0
}

#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(duration_ms: u64) {
    gloo_timers::future::TimeoutFuture::new(duration_ms as u32).await;
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn sleep_ms(duration_ms: u64) {
    tokio::time::sleep(std::time::Duration::from_millis(duration_ms)).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_is_monotonic() {
        let first = now();
        let second = now();
        assert!(second >= first);
    }
}
