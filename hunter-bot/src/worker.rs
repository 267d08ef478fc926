//! Periodic sentiment worker: polls global buy/sell activity and pushes a
//! formatted notification to the configured channel only when the derived
//! value changes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use chrono::Utc;
use dexhunter_client::{DexHunterClient, GlobalStats};
use tracing::{debug, info, warn};

use crate::core::{Bot, Chat};
use crate::sentiment::{render_update, sentiment_value};

/// Source of global activity records, most-recent-first; the worker reads
/// only the head. Abstracted so tests can script responses.
#[async_trait]
pub trait SentimentSource: Send + Sync {
    async fn global_stats(&self) -> anyhow::Result<Vec<GlobalStats>>;
}

#[async_trait]
impl SentimentSource for DexHunterClient {
    async fn global_stats(&self) -> anyhow::Result<Vec<GlobalStats>> {
        DexHunterClient::global_stats(self).await
    }
}

struct Inner {
    bot: Arc<dyn Bot>,
    source: Arc<dyn SentimentSource>,
    channel: Chat,
    poll_interval: Duration,
    retry_interval: Duration,
    running: AtomicBool,
    /// Last emitted sentiment value; written only by the worker's own loop
    /// (or `poll_once` in tests). Starts unset so the first successful poll
    /// always sends.
    last_value: Mutex<Option<u8>>,
}

/// Background worker with a start/stop contract: one loop task, cooperative
/// cancellation checked at iteration boundaries, dedup gate on the rounded
/// sentiment value.
pub struct SentimentWorker {
    inner: Arc<Inner>,
}

impl SentimentWorker {
    pub fn new(
        bot: Arc<dyn Bot>,
        source: Arc<dyn SentimentSource>,
        channel_id: i64,
        poll_interval: Duration,
        retry_interval: Duration,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                bot,
                source,
                channel: Chat {
                    id: channel_id,
                    chat_type: "channel".to_string(),
                },
                poll_interval,
                retry_interval,
                running: AtomicBool::new(false),
                last_value: Mutex::new(None),
            }),
        }
    }

    /// Starts the poll loop as a background task. Idempotent: a second call
    /// while running is a no-op. Never blocks the caller.
    pub fn start(&self) {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            debug!("Sentiment worker already running");
            return;
        }
        let inner = self.inner.clone();
        tokio::spawn(run_loop(inner));
        info!("Sentiment worker started");
    }

    /// Requests cooperative shutdown; the loop observes the flag at its next
    /// iteration boundary and exits. In-flight fetches are not interrupted.
    pub fn stop(&self) {
        self.inner.running.store(false, Ordering::SeqCst);
        info!("Sentiment worker stop requested");
    }

    pub fn is_running(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }

    /// Last emitted sentiment value, if any poll has sent yet.
    pub fn last_value(&self) -> Option<u8> {
        *self.inner.last_value.lock().unwrap()
    }

    /// Runs one poll iteration: fetch, compute, dedup gate, send. Returns
    /// whether a notification was sent. Exposed so tests drive iterations
    /// deterministically; the loop calls the same path.
    pub async fn poll_once(&self) -> anyhow::Result<bool> {
        poll_once(&self.inner).await
    }
}

async fn run_loop(inner: Arc<Inner>) {
    while inner.running.load(Ordering::SeqCst) {
        // Any failure (fetch, empty payload, send) is non-fatal: log and
        // retry after the shorter interval, indefinitely.
        let delay = match poll_once(&inner).await {
            Ok(_) => inner.poll_interval,
            Err(e) => {
                warn!(error = %e, "Sentiment poll failed");
                inner.retry_interval
            }
        };
        tokio::time::sleep(delay).await;
    }
    info!("Sentiment worker stopped");
}

async fn poll_once(inner: &Inner) -> anyhow::Result<bool> {
    let stats = inner.source.global_stats().await?;
    let latest = stats.first().context("No global activity data available")?;

    let value = sentiment_value(latest);
    let last = *inner.last_value.lock().unwrap();
    if last == Some(value) {
        debug!(value, "Sentiment unchanged, suppressing update");
        return Ok(false);
    }

    let text = render_update(latest, Utc::now());
    inner.bot.send_html(&inner.channel, &text).await?;
    // Only a delivered notification advances the dedup key; a failed send
    // leaves it untouched so the next iteration retries.
    *inner.last_value.lock().unwrap() = Some(value);
    info!(value, last = ?last, "Sentiment update sent");
    Ok(true)
}
