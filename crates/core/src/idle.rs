//! Navigation with a network-idle completion condition.
//!
//! Settling follows the `networkidle2` heuristic: navigation is considered
//! complete once no more than [`IdlePolicy::max_inflight`] requests are
//! outstanding for a full quiet window.

use std::collections::HashSet;
use std::time::Duration;

use chromiumoxide::Page;
use chromiumoxide::cdp::browser_protocol::network::{
    EnableParams, EventLoadingFailed, EventLoadingFinished, EventRequestWillBeSent,
};
use futures::StreamExt;
use tracing::debug;

use crate::error::{Error, Result};

/// Completion condition for [`goto_and_settle`].
#[derive(Debug, Clone)]
pub struct IdlePolicy {
    /// Requests allowed to stay in flight while still counting as idle.
    pub max_inflight: usize,
    /// How long the network must stay at or below `max_inflight`.
    pub quiet_for: Duration,
    /// Upper bound on navigation plus settling.
    pub timeout: Duration,
}

impl Default for IdlePolicy {
    fn default() -> Self {
        Self {
            max_inflight: 2,
            quiet_for: Duration::from_millis(500),
            timeout: Duration::from_secs(30),
        }
    }
}

impl IdlePolicy {
    pub fn with_timeout_ms(ms: u64) -> Self {
        Self {
            timeout: Duration::from_millis(ms),
            ..Self::default()
        }
    }
}

/// In-flight request bookkeeping, keyed by CDP request id.
///
/// The request and completion event streams are buffered independently, so
/// a completion can be drained before the request event for the same id.
/// Settled ids are remembered and a late request event for one is ignored,
/// otherwise the id would stay in flight forever.
#[derive(Debug, Default)]
struct InflightTracker {
    inflight: HashSet<String>,
    settled: HashSet<String>,
}

impl InflightTracker {
    fn on_request(&mut self, id: String) {
        if !self.settled.contains(&id) {
            self.inflight.insert(id);
        }
    }

    fn on_settled(&mut self, id: &str) {
        self.inflight.remove(id);
        self.settled.insert(id.to_owned());
    }

    fn is_quiet(&self, budget: usize) -> bool {
        self.inflight.len() <= budget
    }

    fn len(&self) -> usize {
        self.inflight.len()
    }
}

/// Navigates `page` to `url` and waits for the network to go quiet.
///
/// The event streams are subscribed before the navigation is issued so the
/// initial request burst is counted. The quiet window restarts only when
/// the in-flight count comes back down to the threshold; traffic that stays
/// under it leaves the window running. The whole sequence shares one
/// timeout; expiry is a navigation failure and nothing further is attempted
/// on the page.
pub async fn goto_and_settle(page: &Page, url: &str, policy: &IdlePolicy) -> Result<()> {
    page.execute(EnableParams::default()).await?;

    let mut requests = page.event_listener::<EventRequestWillBeSent>().await?;
    let mut finished = page.event_listener::<EventLoadingFinished>().await?;
    let mut failed = page.event_listener::<EventLoadingFailed>().await?;

    let navigate = async {
        page.goto(url).await.map_err(|source| Error::Navigation {
            url: url.to_string(),
            source,
        })?;
        page.wait_for_navigation()
            .await
            .map_err(|source| Error::Navigation {
                url: url.to_string(),
                source,
            })?;

        let mut tracker = InflightTracker::default();
        let mut was_quiet = true;
        let quiet = tokio::time::sleep(policy.quiet_for);
        tokio::pin!(quiet);
        loop {
            tokio::select! {
                Some(event) = requests.next() => {
                    tracker.on_request(event.request_id.inner().clone());
                }
                Some(event) = finished.next() => tracker.on_settled(event.request_id.inner()),
                Some(event) = failed.next() => tracker.on_settled(event.request_id.inner()),
                _ = &mut quiet, if tracker.is_quiet(policy.max_inflight) => {
                    debug!(target = "crumb", inflight = tracker.len(), "network settled");
                    return Ok(());
                }
                // All streams closed: the page is gone, nothing left to wait on.
                else => return Ok(()),
            }

            // Re-arm the window only when the count crosses back under the
            // threshold; events that keep it under must not reset the timer.
            let now_quiet = tracker.is_quiet(policy.max_inflight);
            if now_quiet && !was_quiet {
                quiet
                    .as_mut()
                    .reset(tokio::time::Instant::now() + policy.quiet_for);
            }
            was_quiet = now_quiet;
        }
    };

    tokio::time::timeout(policy.timeout, navigate)
        .await
        .map_err(|_| Error::IdleTimeout {
            url: url.to_string(),
            ms: policy.timeout.as_millis() as u64,
        })?
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_tracker_is_quiet() {
        let tracker = InflightTracker::default();
        assert!(tracker.is_quiet(0));
        assert!(tracker.is_quiet(2));
    }

    #[test]
    fn requests_above_budget_clear_the_quiet_state() {
        let mut tracker = InflightTracker::default();
        for id in ["a", "b", "c"] {
            tracker.on_request(id.to_string());
        }
        assert!(!tracker.is_quiet(2));

        tracker.on_settled("b");
        assert!(tracker.is_quiet(2));
        assert_eq!(tracker.len(), 2);
    }

    #[test]
    fn duplicate_request_ids_count_once() {
        let mut tracker = InflightTracker::default();
        tracker.on_request("a".to_string());
        tracker.on_request("a".to_string());
        assert_eq!(tracker.len(), 1);

        tracker.on_settled("a");
        assert!(tracker.is_quiet(0));
    }

    #[test]
    fn settling_an_unknown_id_is_harmless() {
        let mut tracker = InflightTracker::default();
        tracker.on_settled("never-seen");
        assert!(tracker.is_quiet(0));
    }

    #[test]
    fn completion_drained_before_request_does_not_strand_the_id() {
        let mut tracker = InflightTracker::default();
        tracker.on_settled("x");
        tracker.on_request("x".to_string());

        assert_eq!(tracker.len(), 0);
        assert!(tracker.is_quiet(0));
    }

    #[test]
    fn default_policy_matches_networkidle2() {
        let policy = IdlePolicy::default();
        assert_eq!(policy.max_inflight, 2);
        assert_eq!(policy.quiet_for, Duration::from_millis(500));
    }

    #[test]
    fn with_timeout_ms_overrides_only_the_cap() {
        let policy = IdlePolicy::with_timeout_ms(1_000);
        assert_eq!(policy.timeout, Duration::from_millis(1_000));
        assert_eq!(policy.max_inflight, IdlePolicy::default().max_inflight);
    }
}
