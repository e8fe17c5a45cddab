//! # Simulated Latency
//!
//! The storefront has no real backend; managers model remote calls by
//! suspending once on a timer before resolving against in-memory state.
//! Every wait always completes - nothing here is cancellable and nothing
//! times out.

use std::time::Duration;

use tokio::time::sleep;

/// Latency profile shared by all managers.
///
/// `simulated()` mirrors the delays the storefront has always shown;
/// tests run `none()` so nothing sleeps.
#[derive(Debug, Clone, Copy)]
pub struct Latency {
    /// Collection reads modeled as remote fetches.
    pub fetch: Duration,
    /// Login and order creation.
    pub mutate: Duration,
    /// The recipe generation step (noticeably slower than search).
    pub generate: Duration,
}

impl Latency {
    /// The production profile: fetches 800 ms, mutations 1 s, generation 2 s.
    pub const fn simulated() -> Self {
        Latency {
            fetch: Duration::from_millis(800),
            mutate: Duration::from_millis(1000),
            generate: Duration::from_millis(2000),
        }
    }

    /// Zero delays everywhere; the profile tests run under.
    pub const fn none() -> Self {
        Latency {
            fetch: Duration::ZERO,
            mutate: Duration::ZERO,
            generate: Duration::ZERO,
        }
    }

    pub(crate) async fn wait_fetch(&self) {
        sleep(self.fetch).await;
    }

    pub(crate) async fn wait_mutate(&self) {
        sleep(self.mutate).await;
    }

    pub(crate) async fn wait_generate(&self) {
        sleep(self.generate).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::simulated()
    }
}
