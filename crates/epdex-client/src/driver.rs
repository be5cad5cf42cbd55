//! Tokio event loop hosting one list controller.
//!
//! The driver owns everything the deterministic core refuses to: timers,
//! spawned fetches, and channels. Intents flow in through an unbounded
//! sender; view snapshots flow out through a `watch` channel, one publish
//! per processed batch. Commands drained from the controller map onto
//! tasks:
//!
//! - `ScheduleDebounce` arms a sleep task; the previously armed task is
//!   aborted (hard cancellation), and the controller's generation check
//!   covers any elapse that slips through.
//! - `StartFetch` spawns the transport call; superseded fetches are not
//!   aborted, their completions are simply discarded by the epoch gate
//!   (soft cancellation).
//!
//! The loop ends when every intent sender is dropped; the outstanding
//! debounce task is aborted on the way out.

use std::sync::Arc;
use std::time::Duration;

use epdex_core::{
    Command, ControllerMetrics, HostEvent, Intent, ListController, ListRecord, ListViewState,
};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::debug;

use crate::endpoint::ListTransport;

/// Handle to a running driver: send intents, observe view snapshots.
#[derive(Debug)]
pub struct DriverHandle<R: ListRecord> {
    intents: mpsc::UnboundedSender<Intent<R>>,
    views: watch::Receiver<ListViewState<R>>,
    metrics: Arc<ControllerMetrics>,
}

impl<R: ListRecord> DriverHandle<R> {
    /// Send an intent. Returns `false` when the driver has shut down.
    pub fn send(&self, intent: Intent<R>) -> bool {
        self.intents.send(intent).is_ok()
    }

    /// Subscribe to view snapshots.
    #[must_use]
    pub fn views(&self) -> watch::Receiver<ListViewState<R>> {
        self.views.clone()
    }

    /// Latest view snapshot.
    #[must_use]
    pub fn view(&self) -> ListViewState<R> {
        self.views.borrow().clone()
    }

    /// Shared controller metrics.
    #[must_use]
    pub fn metrics(&self) -> &Arc<ControllerMetrics> {
        &self.metrics
    }
}

/// Spawn the event loop for `controller` fetching through `transport`.
///
/// Dropping every clone of the returned handle's sender side ends the loop.
pub fn spawn<R, T>(controller: ListController<R>, transport: Arc<T>) -> DriverHandle<R>
where
    R: ListRecord,
    T: ListTransport<R> + 'static,
{
    let (intent_tx, intent_rx) = mpsc::unbounded_channel();
    let (view_tx, view_rx) = watch::channel(controller.view());
    let metrics = controller.metrics();
    tokio::spawn(run(controller, transport, intent_rx, view_tx));
    DriverHandle {
        intents: intent_tx,
        views: view_rx,
        metrics,
    }
}

async fn run<R, T>(
    mut controller: ListController<R>,
    transport: Arc<T>,
    mut intents: mpsc::UnboundedReceiver<Intent<R>>,
    views: watch::Sender<ListViewState<R>>,
) where
    R: ListRecord,
    T: ListTransport<R> + 'static,
{
    let (event_tx, mut events) = mpsc::unbounded_channel::<HostEvent<R>>();
    let mut debounce_task: Option<JoinHandle<()>> = None;

    loop {
        tokio::select! {
            maybe_intent = intents.recv() => {
                let Some(intent) = maybe_intent else { break };
                controller.apply_intent(intent);
                // Drain whatever else arrived in the same tick so the batch
                // coalesces into a single fetch.
                while let Ok(intent) = intents.try_recv() {
                    controller.apply_intent(intent);
                }
            }
            maybe_event = events.recv() => {
                // The local `event_tx` keeps this channel open for the
                // lifetime of the loop.
                if let Some(event) = maybe_event {
                    controller.apply_event(event);
                    while let Ok(event) = events.try_recv() {
                        controller.apply_event(event);
                    }
                }
            }
        }

        for command in controller.drain_commands() {
            match command {
                Command::ScheduleDebounce {
                    generation,
                    delay_ms,
                } => {
                    if let Some(task) = debounce_task.take() {
                        task.abort();
                    }
                    let tx = event_tx.clone();
                    debounce_task = Some(tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                        let _ = tx.send(HostEvent::DebounceElapsed { generation });
                    }));
                }
                Command::StartFetch {
                    epoch,
                    query,
                    token,
                } => {
                    let tx = event_tx.clone();
                    let transport = Arc::clone(&transport);
                    tokio::spawn(async move {
                        let outcome = transport.fetch(query, token).await;
                        let _ = tx.send(HostEvent::FetchCompleted { epoch, outcome });
                    });
                }
            }
        }

        views.send_replace(controller.view());
    }

    if let Some(task) = debounce_task.take() {
        task.abort();
    }
    debug!(target: "epdex", "driver loop ended");
}
