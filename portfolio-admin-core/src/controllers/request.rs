//! 请求代际标记
//!
//! A page hands out a [`RequestToken`] whenever it starts a request and
//! bumps its generation when the request is superseded (reload) or the page
//! is left. Completions carrying an older token are stale and must be
//! dropped.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identifies one in-flight request of one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Per-page generation counter.
///
/// Clones share the counter, so a background task can check whether its
/// result is still wanted before sending it back.
#[derive(Debug, Clone, Default)]
pub struct RequestGeneration {
    current: Arc<AtomicU64>,
}

impl RequestGeneration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request, invalidating every earlier token.
    pub fn next_token(&self) -> RequestToken {
        RequestToken(self.current.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Token of the most recent request, without starting a new one.
    #[must_use]
    pub fn current_token(&self) -> RequestToken {
        RequestToken(self.current.load(Ordering::SeqCst))
    }

    /// Invalidate every outstanding token (page left).
    pub fn invalidate(&self) {
        self.current.fetch_add(1, Ordering::SeqCst);
    }

    #[must_use]
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.current.load(Ordering::SeqCst) == token.0
    }
}
