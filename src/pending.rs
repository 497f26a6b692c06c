use std::{
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time,
};

use tokio::{sync::watch, task::JoinHandle, time::Instant};
use tracing::{debug, trace};

use crate::estimate::{self, Estimator, RouteEstimate, RouteKey, route_key};

/// What a renderer should currently show for the route.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteState {
    Idle,
    Pending { key: RouteKey },
    Ready { key: RouteKey, estimate: RouteEstimate },
    Rejected { error: estimate::Error },
}

impl RouteState {
    pub fn estimate(&self) -> Option<&RouteEstimate> {
        match self {
            RouteState::Ready { estimate, .. } => Some(estimate),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RouteState::Pending { .. })
    }
}

struct InFlight {
    key: RouteKey,
    handle: JoinHandle<()>,
}

/// Publishes a route estimate a fixed delay after the pair last changed.
///
/// At most one computation is live at a time. Watching a new pair aborts the
/// one in flight, so a stale pair can never overwrite a newer result. Must be
/// driven from inside a tokio runtime.
pub struct RouteWatcher {
    estimator: Arc<Estimator>,
    delay: time::Duration,
    refresh_delay: time::Duration,
    state: Arc<watch::Sender<RouteState>>,
    /// Bumped on every schedule or cancel. A task only publishes while it
    /// still holds the latest value.
    generation: Arc<AtomicU64>,
    in_flight: Option<InFlight>,
}

impl RouteWatcher {
    pub fn new(estimator: Arc<Estimator>) -> Self {
        let delay = estimator.config().estimate_delay;
        let refresh_delay = estimator.config().refresh_delay;
        let (state, _) = watch::channel(RouteState::Idle);
        Self {
            estimator,
            delay,
            refresh_delay,
            state: Arc::new(state),
            generation: Arc::new(AtomicU64::new(0)),
            in_flight: None,
        }
    }

    pub fn with_delay(mut self, delay: time::Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn subscribe(&self) -> watch::Receiver<RouteState> {
        self.state.subscribe()
    }

    pub fn state(&self) -> RouteState {
        self.state.borrow().clone()
    }

    /// Schedules an estimate for the pair. Watching the pair that is already
    /// in flight or shown is a no-op.
    pub fn watch(&mut self, source: &str, destination: &str) -> Result<(), estimate::Error> {
        let key = match route_key(source, destination) {
            Ok(key) => key,
            Err(error) => {
                self.cancel();
                self.state.send_replace(RouteState::Rejected {
                    error: error.clone(),
                });
                return Err(error);
            }
        };
        if self.in_flight.as_ref().is_some_and(|flight| flight.key == key) {
            trace!("Route {key} is already scheduled");
            return Ok(());
        }
        self.schedule(key, source, destination, self.delay);
        Ok(())
    }

    /// Recomputes the current pair with the longer refresh delay, even if it
    /// is already shown.
    pub fn refresh(&mut self, source: &str, destination: &str) -> Result<(), estimate::Error> {
        let key = route_key(source, destination)?;
        self.schedule(key, source, destination, self.refresh_delay);
        Ok(())
    }

    /// Drops whatever is in flight and goes back to idle.
    pub fn clear(&mut self) {
        self.cancel();
        self.state.send_replace(RouteState::Idle);
    }

    fn cancel(&mut self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        if let Some(flight) = self.in_flight.take() {
            if !flight.handle.is_finished() {
                debug!("Cancelling estimate for {}", flight.key);
            }
            flight.handle.abort();
        }
    }

    fn schedule(&mut self, key: RouteKey, source: &str, destination: &str, delay: time::Duration) {
        self.cancel();
        self.state.send_replace(RouteState::Pending { key: key.clone() });

        let generation = self.generation.clone();
        let ticket = generation.load(Ordering::SeqCst);
        let estimator = self.estimator.clone();
        let state = self.state.clone();
        let task_key = key.clone();
        let source = source.to_string();
        let destination = destination.to_string();
        // Deadline is fixed now, not when the task first gets polled
        let deadline = Instant::now() + delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            let next = match estimator.estimate(&source, &destination) {
                Ok(estimate) => RouteState::Ready {
                    key: task_key,
                    estimate,
                },
                Err(error) => RouteState::Rejected { error },
            };
            // Abort is cooperative, a superseded task must not publish even
            // when a later schedule reused its pair
            state.send_if_modified(|current| {
                let ours = generation.load(Ordering::SeqCst) == ticket;
                if ours {
                    *current = next;
                }
                ours
            });
        });
        self.in_flight = Some(InFlight { key, handle });
    }
}

impl Drop for RouteWatcher {
    fn drop(&mut self) {
        self.cancel();
    }
}
