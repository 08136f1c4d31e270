//! Deferred reveals for table rounds.
//!
//! A front end usually shows the dice immediately and reveals the settled result after a short
//! delay. Every round's reveal reads only the [`RoundSnapshot`] captured by value when the round
//! started, so a round started during another round's delay cannot leak into it.
//!
//! ## Overlap policy
//!
//! Overlapping rounds are allowed and each completes with its own snapshot. A reveal can also
//! be cancelled explicitly, in which case waiting on it yields [`RevealError::Cancelled`].
//! Front ends that want one round at a time use [`TriggerGuard`]: the permit moves into the
//! reveal task and the trigger stays disarmed until the reveal finishes or is cancelled.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use quarks_execution::{RoundScheduler, Throw, TriggerGuard};
//!
//! let guard = TriggerGuard::new();
//! let mut scheduler = RoundScheduler::new(Duration::from_millis(800));
//!
//! if let Some(permit) = guard.try_acquire() {
//!     let pending = scheduler.start_guarded(permit, throw, wager);
//!     let revealed = pending.wait().await?;
//! }
//! ```

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use std::time::Duration;

use quarks_types::{ResultPayload, Wager};
use thiserror::Error as ThisError;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::casino::Throw;

/// Round data captured when a round starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RoundSnapshot {
    pub round_id: u64,
    pub throw: Throw,
    pub wager: Wager,
}

/// Output of a completed reveal.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealedRound {
    pub round_id: u64,
    pub throw: Throw,
    pub result: ResultPayload,
}

#[derive(Clone, Debug, ThisError, PartialEq, Eq)]
pub enum RevealError {
    #[error("reveal for round {0} was cancelled")]
    Cancelled(u64),
    #[error("reveal for round {round_id} failed: {reason}")]
    Failed { round_id: u64, reason: String },
}

/// Handle to a reveal that has not been awaited yet.
#[derive(Debug)]
pub struct PendingReveal {
    snapshot: RoundSnapshot,
    handle: JoinHandle<RevealedRound>,
}

impl PendingReveal {
    pub fn round_id(&self) -> u64 {
        self.snapshot.round_id
    }

    pub fn snapshot(&self) -> &RoundSnapshot {
        &self.snapshot
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Cancels the reveal. Has no effect if it already completed.
    pub fn cancel(&self) {
        debug!(round_id = self.snapshot.round_id, "reveal cancelled");
        self.handle.abort();
    }

    pub async fn wait(self) -> Result<RevealedRound, RevealError> {
        let round_id = self.snapshot.round_id;
        match self.handle.await {
            Ok(revealed) => Ok(revealed),
            Err(err) if err.is_cancelled() => Err(RevealError::Cancelled(round_id)),
            Err(err) => Err(RevealError::Failed {
                round_id,
                reason: err.to_string(),
            }),
        }
    }
}

/// Starts rounds and schedules their reveals on the Tokio runtime.
#[derive(Debug)]
pub struct RoundScheduler {
    reveal_delay: Duration,
    next_round_id: u64,
}

impl RoundScheduler {
    pub fn new(reveal_delay: Duration) -> Self {
        Self {
            reveal_delay,
            next_round_id: 1,
        }
    }

    pub fn reveal_delay(&self) -> Duration {
        self.reveal_delay
    }

    /// Starts a round whose reveal runs after the configured delay.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn start_round(&mut self, throw: Throw, wager: Wager) -> PendingReveal {
        self.spawn_reveal(throw, wager, None)
    }

    /// Like [`Self::start_round`], holding `permit` until the reveal completes or is cancelled.
    pub fn start_guarded(
        &mut self,
        permit: TriggerPermit,
        throw: Throw,
        wager: Wager,
    ) -> PendingReveal {
        self.spawn_reveal(throw, wager, Some(permit))
    }

    fn spawn_reveal(
        &mut self,
        throw: Throw,
        wager: Wager,
        permit: Option<TriggerPermit>,
    ) -> PendingReveal {
        let round_id = self.next_round_id;
        self.next_round_id = self.next_round_id.wrapping_add(1);

        let snapshot = RoundSnapshot {
            round_id,
            throw,
            wager,
        };
        info!(
            round_id,
            game = %throw.game(),
            dice = %throw,
            delay_ms = u64::try_from(self.reveal_delay.as_millis()).unwrap_or(u64::MAX),
            "round started"
        );

        let delay = self.reveal_delay;
        let handle = tokio::spawn(async move {
            let _permit = permit;
            tokio::time::sleep(delay).await;
            let result = snapshot.throw.settle(snapshot.wager);
            debug!(round_id, label = result.label, sum = result.sum, "round revealed");
            RevealedRound {
                round_id,
                throw: snapshot.throw,
                result,
            }
        });

        PendingReveal { snapshot, handle }
    }
}

/// Single-registration guard for the play trigger.
///
/// At most one [`TriggerPermit`] exists at a time; the trigger re-arms when it is dropped.
#[derive(Clone, Debug, Default)]
pub struct TriggerGuard {
    busy: Arc<AtomicBool>,
}

impl TriggerGuard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn try_acquire(&self) -> Option<TriggerPermit> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| TriggerPermit {
                busy: Arc::clone(&self.busy),
            })
    }

    pub fn is_armed(&self) -> bool {
        !self.busy.load(Ordering::Acquire)
    }
}

#[derive(Debug)]
pub struct TriggerPermit {
    busy: Arc<AtomicBool>,
}

impl Drop for TriggerPermit {
    fn drop(&mut self) {
        self.busy.store(false, Ordering::Release);
    }
}
