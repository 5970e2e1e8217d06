//! Long polling loop over `getUpdates`.
//!
//! This module provides the [`TelegramSync`] struct, which keeps track of the
//! update offset and feeds every received update to a handler.
//!
//! # Overview
//!
//! The [`TelegramSync::sync`] method:
//! 1. Long polls the Bot API for the next batch of updates
//! 2. Advances the offset past the last received update so it is never delivered twice
//! 3. Runs the handler on the whole batch and waits for it before polling again
//!
//! Transient failures are retried with an exponential backoff; a rejected token
//! ends the loop.

use std::future::Future;

use futures::future::join_all;
use log::{error, info, warn};
use tokio::time::{Duration, sleep};

use crate::telegram::{Requester, TransportError, Update};

/// First retry delay in seconds after a failed poll.
const INITIAL_RETRY_DELAY_SECS: u64 = 1;
/// Upper bound of the retry delay in seconds.
const MAX_RETRY_DELAY_SECS: u64 = 60;

/// Polling state of the update stream.
///
/// # Fields
///
/// * `offset` - Identifier of the next update to fetch, `None` before the first batch
/// * `timeout` - Long polling timeout in seconds
pub struct TelegramSync {
    offset: Option<i64>,
    timeout: u64,
}

impl TelegramSync {
    /// Creates a new TelegramSync starting from the oldest pending update.
    pub fn new(timeout: u64) -> Self {
        TelegramSync {
            offset: None,
            timeout,
        }
    }

    /// Fetches the next batch of updates and advances the offset.
    pub async fn poll<R: Requester>(&mut self, requester: &R) -> Result<Vec<Update>, TransportError> {
        let updates = requester.get_updates(self.offset, self.timeout).await?;

        if let Some(last_update_id) = updates.iter().map(|update| update.update_id).max() {
            self.offset = Some(last_update_id + 1);
        }

        Ok(updates)
    }

    /// Polls forever and runs `on_update` for each received update.
    ///
    /// Updates of a batch are handled concurrently on the current task with
    /// [`join_all`]; handlers needing mutual exclusion must lock shared state
    /// themselves. The next poll starts once the whole batch is handled.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError::Unauthorized`] if the bot token is rejected.
    /// Any other error is logged and the poll is retried after a delay.
    pub async fn sync<R, F, Fut>(&mut self, requester: &R, on_update: F) -> Result<(), TransportError>
    where
        R: Requester,
        F: Fn(Update) -> Fut,
        Fut: Future<Output = ()>,
    {
        info!("start polling updates");
        let mut delay = INITIAL_RETRY_DELAY_SECS;

        loop {
            let updates = match self.poll(requester).await {
                Ok(updates) => {
                    delay = INITIAL_RETRY_DELAY_SECS;
                    updates
                }
                Err(TransportError::Unauthorized) => {
                    error!("bot token rejected, stop polling");
                    return Err(TransportError::Unauthorized);
                }
                Err(e) => {
                    warn!("failed to poll updates ({}), retrying in {}s", e, delay);
                    sleep(Duration::from_secs(delay)).await;
                    delay = (delay * 2).min(MAX_RETRY_DELAY_SECS);
                    continue;
                }
            };

            join_all(updates.into_iter().map(&on_update)).await;
        }
    }
}
