//! Transient notification banners.
//!
//! Each page owns one banner per message surface. `show` replaces the text
//! and visual state, then schedules a hide after a fixed five seconds. Every
//! call stamps the banner; a hide timer only clears the banner while its
//! stamp is still current, so a timer from an earlier message can never hide
//! a later one.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::time;
use tracing::debug;

/// How long a banner stays visible after the latest `show`.
pub const HIDE_AFTER: Duration = Duration::from_secs(5);

/// Visual state of a banner message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

#[derive(Debug, Default)]
struct BannerState {
    current: Option<(BannerKind, String)>,
    stamp: u64,
}

/// One notification surface. Cheap to clone; clones share the same state.
#[derive(Debug, Clone, Default)]
pub struct Banner {
    state: Arc<Mutex<BannerState>>,
}

impl Banner {
    pub fn new() -> Self {
        Self::default()
    }

    fn locked(&self) -> MutexGuard<'_, BannerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Shows `message` with the given visual state and schedules the hide.
    pub fn show(&self, message: impl Into<String>, kind: BannerKind) {
        let message = message.into();
        debug!(?kind, %message, "banner shown");
        let stamp = {
            let mut state = self.locked();
            state.stamp += 1;
            state.current = Some((kind, message));
            state.stamp
        };

        let banner = self.clone();
        tokio::spawn(async move {
            time::sleep(HIDE_AFTER).await;
            let mut state = banner.locked();
            if state.stamp == stamp {
                state.current = None;
            }
        });
    }

    pub fn visible(&self) -> bool {
        self.locked().current.is_some()
    }

    pub fn current(&self) -> Option<(BannerKind, String)> {
        self.locked().current.clone()
    }

    pub fn message(&self) -> Option<String> {
        self.current().map(|(_, message)| message)
    }

    pub fn kind(&self) -> Option<BannerKind> {
        self.current().map(|(kind, _)| kind)
    }
}
