//! Async host for a [`QuizSession`].
//!
//! One tokio task owns the session and drains a single event queue fed by
//! player commands, the countdown ticker, and integrity violations, so each
//! event is applied completely before the next one is looked at.
//!
//! Each started run gets an epoch. The ticker and violation handler tag their
//! events with it, and anything tagged with an older epoch is dropped, so a
//! timer or listener from a finished run can never touch the next one.

use std::sync::Arc;
use std::time::Duration;

use quiz_core::contracts::ResultSink;
use quiz_core::entities::QuizResult;
use quiz_core::enums::ViolationKind;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

use crate::monitor::{IntegritySource, Subscription};
use crate::session::QuizSession;
use crate::transition::Transition;
use crate::view::SessionView;

/// The driver task has stopped and no longer accepts commands.
#[derive(Debug, Error)]
#[error("session driver has shut down")]
pub struct DriverClosed;

/// Pushed to the host after every processed event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionUpdate {
    /// A violation was detected; the penalty transition follows.
    Violation {
        kind: ViolationKind,
        notice: &'static str,
    },
    Transition(Transition),
}

enum Command {
    Start,
    Select(String),
    Next,
    Previous,
    Reset,
    Snapshot(oneshot::Sender<SessionView>),
    Shutdown,
}

enum Event {
    Command(Command),
    Tick { epoch: u64 },
    Violation { epoch: u64, kind: ViolationKind },
}

/// Handle to a running session task.
pub struct SessionDriver {
    events: mpsc::UnboundedSender<Event>,
    task: JoinHandle<QuizSession>,
}

impl SessionDriver {
    /// Move `session` into a new task. Returns the handle and the stream of
    /// updates. Completed results go to `sink` without being awaited.
    pub fn spawn<S>(
        session: QuizSession,
        source: Arc<dyn IntegritySource>,
        sink: Arc<S>,
        tick_period: Duration,
    ) -> (Self, mpsc::UnboundedReceiver<SessionUpdate>)
    where
        S: ResultSink + 'static,
    {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();

        let runner = Runner {
            session,
            source,
            sink,
            tick_period,
            events: events_tx.downgrade(),
            updates: updates_tx,
            epoch: 0,
            run: None,
        };
        let task = tokio::spawn(runner.run(events_rx));

        (
            Self {
                events: events_tx,
                task,
            },
            updates_rx,
        )
    }

    /// # Errors
    ///
    /// Returns `DriverClosed` if the task has stopped.
    pub fn start(&self) -> Result<(), DriverClosed> {
        self.send(Command::Start)
    }

    /// # Errors
    ///
    /// Returns `DriverClosed` if the task has stopped.
    pub fn select(&self, option_id: impl Into<String>) -> Result<(), DriverClosed> {
        self.send(Command::Select(option_id.into()))
    }

    /// # Errors
    ///
    /// Returns `DriverClosed` if the task has stopped.
    pub fn next(&self) -> Result<(), DriverClosed> {
        self.send(Command::Next)
    }

    /// # Errors
    ///
    /// Returns `DriverClosed` if the task has stopped.
    pub fn previous(&self) -> Result<(), DriverClosed> {
        self.send(Command::Previous)
    }

    /// # Errors
    ///
    /// Returns `DriverClosed` if the task has stopped.
    pub fn reset(&self) -> Result<(), DriverClosed> {
        self.send(Command::Reset)
    }

    /// Current view, taken after every event queued before this call.
    ///
    /// # Errors
    ///
    /// Returns `DriverClosed` if the task has stopped.
    pub async fn snapshot(&self) -> Result<SessionView, DriverClosed> {
        let (tx, rx) = oneshot::channel();
        self.send(Command::Snapshot(tx))?;
        rx.await.map_err(|_| DriverClosed)
    }

    /// Stop the task, cancelling any timer and monitoring, and get the
    /// session back.
    ///
    /// # Errors
    ///
    /// Returns `DriverClosed` if the task panicked or was aborted.
    pub async fn shutdown(self) -> Result<QuizSession, DriverClosed> {
        // the task may already be gone; joining reports that
        let _ = self.send(Command::Shutdown);
        self.task.await.map_err(|_| DriverClosed)
    }

    fn send(&self, command: Command) -> Result<(), DriverClosed> {
        self.events
            .send(Event::Command(command))
            .map_err(|_| DriverClosed)
    }
}

// ---------------------------------------------------------------------------
// Runner
// ---------------------------------------------------------------------------

/// Resources tied to one started run. Dropping it stops the ticker and
/// detaches the violation handler.
struct ActiveRun {
    _subscription: Subscription,
    ticker: Option<JoinHandle<()>>,
}

impl Drop for ActiveRun {
    fn drop(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.abort();
        }
    }
}

struct Runner<S> {
    session: QuizSession,
    source: Arc<dyn IntegritySource>,
    sink: Arc<S>,
    tick_period: Duration,
    events: mpsc::WeakUnboundedSender<Event>,
    updates: mpsc::UnboundedSender<SessionUpdate>,
    epoch: u64,
    run: Option<ActiveRun>,
}

impl<S> Runner<S>
where
    S: ResultSink + 'static,
{
    async fn run(mut self, mut events: mpsc::UnboundedReceiver<Event>) -> QuizSession {
        while let Some(event) = events.recv().await {
            match event {
                Event::Command(Command::Shutdown) => break,
                Event::Command(command) => self.on_command(command),
                Event::Tick { epoch } => {
                    if self.is_current(epoch) {
                        let transition = self.session.tick();
                        self.apply(transition);
                    }
                }
                Event::Violation { epoch, kind } => {
                    if self.is_current(epoch) {
                        self.publish(SessionUpdate::Violation {
                            kind,
                            notice: kind.notice(),
                        });
                        let transition = self.session.penalize_and_advance(kind);
                        self.apply(transition);
                    }
                }
            }
        }
        self.end_run();
        tracing::debug!(quiz = %self.session.quiz().id, "session driver stopped");
        self.session
    }

    fn on_command(&mut self, command: Command) {
        let transition = match command {
            Command::Start => {
                let transition = self.session.start();
                if transition == Transition::Started {
                    self.begin_run();
                }
                transition
            }
            Command::Select(option_id) => self.session.select_option(&option_id),
            Command::Next => self.session.next(),
            Command::Previous => self.session.previous(),
            Command::Reset => {
                self.end_run();
                self.session.reset()
            }
            Command::Snapshot(reply) => {
                // requester may have given up
                let _ = reply.send(self.session.view());
                return;
            }
            Command::Shutdown => return,
        };
        self.apply(transition);
    }

    fn apply(&mut self, transition: Transition) {
        if let Some(result) = transition.completed_result() {
            self.end_run();
            self.record(result.clone());
        }
        self.publish(SessionUpdate::Transition(transition));
    }

    fn is_current(&self, epoch: u64) -> bool {
        let current = self.run.is_some() && epoch == self.epoch;
        if !current {
            tracing::debug!(epoch, current = self.epoch, "dropping stale session event");
        }
        current
    }

    fn begin_run(&mut self) {
        self.epoch += 1;
        let epoch = self.epoch;

        let violations = self.events.clone();
        let subscription = self.source.subscribe(Box::new(move |kind| {
            if let Some(events) = violations.upgrade() {
                // a closed queue means the driver is gone
                let _ = events.send(Event::Violation { epoch, kind });
            }
        }));

        let ticker = self
            .session
            .is_timed()
            .then(|| spawn_ticker(self.events.clone(), self.tick_period, epoch));

        tracing::debug!(quiz = %self.session.quiz().id, epoch, timed = ticker.is_some(), "run started");
        self.run = Some(ActiveRun {
            _subscription: subscription,
            ticker,
        });
    }

    fn end_run(&mut self) {
        if self.run.take().is_some() {
            tracing::debug!(quiz = %self.session.quiz().id, epoch = self.epoch, "run ended");
        }
    }

    fn record(&self, result: QuizResult) {
        let sink = Arc::clone(&self.sink);
        tokio::spawn(async move {
            if let Err(error) = sink.record(&result).await {
                tracing::warn!(result = %result.id, %error, "failed to record quiz result");
            }
        });
    }

    fn publish(&self, update: SessionUpdate) {
        if self.updates.send(update).is_err() {
            tracing::trace!("session update dropped, no listener");
        }
    }
}

fn spawn_ticker(
    events: mpsc::WeakUnboundedSender<Event>,
    period: Duration,
    epoch: u64,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        loop {
            interval.tick().await;
            let Some(events) = events.upgrade() else {
                break;
            };
            if events.send(Event::Tick { epoch }).is_err() {
                break;
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use quiz_core::enums::SessionStatus;
    use quiz_core::ids::SequentialIds;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::monitor::SignalHub;
    use crate::test_support::{correct_id, numbered_quiz};

    #[derive(Default)]
    struct Collect(Mutex<Vec<QuizResult>>);

    impl ResultSink for Collect {
        type Error = Infallible;

        async fn record(&self, result: &QuizResult) -> Result<(), Self::Error> {
            self.0.lock().expect("lock").push(result.clone());
            Ok(())
        }
    }

    fn spawn_numbered(
        questions: usize,
        minutes: Option<u32>,
        hub: &SignalHub,
        sink: &Arc<Collect>,
    ) -> (SessionDriver, mpsc::UnboundedReceiver<SessionUpdate>) {
        let mut quiz = numbered_quiz(questions, 4);
        quiz.time_limit = minutes;
        let session = QuizSession::with_rng(
            quiz,
            Arc::new(SequentialIds::new("res")),
            StdRng::seed_from_u64(4),
        )
        .expect("playable");
        SessionDriver::spawn(
            session,
            Arc::new(hub.clone()),
            Arc::clone(sink),
            Duration::from_secs(1),
        )
    }

    async fn until_completed(updates: &mut mpsc::UnboundedReceiver<SessionUpdate>) -> QuizResult {
        while let Some(update) = updates.recv().await {
            if let SessionUpdate::Transition(t) = update {
                if let Some(result) = t.completed_result() {
                    return result.clone();
                }
            }
        }
        panic!("update stream ended before completion");
    }

    #[tokio::test(start_paused = true)]
    async fn subscription_lives_only_while_in_progress() {
        let hub = SignalHub::new();
        let sink = Arc::new(Collect::default());
        let (driver, mut updates) = spawn_numbered(1, None, &hub, &sink);

        driver.snapshot().await.expect("running");
        assert_eq!(hub.subscriber_count(), 0);

        driver.start().expect("running");
        driver.snapshot().await.expect("running");
        assert_eq!(hub.subscriber_count(), 1);

        hub.emit(ViolationKind::Visibility);
        let result = until_completed(&mut updates).await;
        assert_eq!(result.score, 0);
        assert_eq!(hub.subscriber_count(), 0);

        let session = driver.shutdown().await.expect("joins");
        assert_eq!(session.status(), SessionStatus::Completed);
    }

    #[tokio::test(start_paused = true)]
    async fn violation_publishes_notice_then_penalty() {
        let hub = SignalHub::new();
        let sink = Arc::new(Collect::default());
        let (driver, mut updates) = spawn_numbered(3, None, &hub, &sink);

        driver.start().expect("running");
        assert_eq!(
            updates.recv().await,
            Some(SessionUpdate::Transition(Transition::Started))
        );
        driver.snapshot().await.expect("running");
        assert_eq!(hub.emit(ViolationKind::PointerExit), 1);

        assert_eq!(
            updates.recv().await,
            Some(SessionUpdate::Violation {
                kind: ViolationKind::PointerExit,
                notice: ViolationKind::PointerExit.notice(),
            })
        );
        assert_eq!(
            updates.recv().await,
            Some(SessionUpdate::Transition(Transition::Penalized {
                index: 0,
                kind: ViolationKind::PointerExit,
                then: Box::new(Transition::Advanced { index: 1 }),
            }))
        );
        driver.shutdown().await.expect("joins");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_completes_and_result_reaches_sink() {
        let hub = SignalHub::new();
        let sink = Arc::new(Collect::default());
        let (driver, mut updates) = spawn_numbered(2, Some(1), &hub, &sink);

        driver.start().expect("running");
        let result = until_completed(&mut updates).await;
        assert_eq!((result.score, result.total), (0, 2));

        let session = driver.shutdown().await.expect("joins");
        assert_eq!(session.remaining_secs(), Some(0));
        tokio::task::yield_now().await;
        assert_eq!(sink.0.lock().expect("lock").len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn reset_cancels_timer_and_monitoring() {
        let hub = SignalHub::new();
        let sink = Arc::new(Collect::default());
        let (driver, mut updates) = spawn_numbered(2, Some(1), &hub, &sink);

        driver.start().expect("running");
        tokio::time::sleep(Duration::from_millis(3_500)).await;
        driver.reset().expect("running");
        let view = driver.snapshot().await.expect("running");
        assert_eq!(view.status, SessionStatus::NotStarted);
        assert_eq!(view.remaining.as_deref(), Some("1:00"));
        assert_eq!(hub.subscriber_count(), 0);

        // a full minute passes with no run active
        tokio::time::sleep(Duration::from_secs(90)).await;
        let view = driver.snapshot().await.expect("running");
        assert_eq!(view.status, SessionStatus::NotStarted);
        assert_eq!(view.remaining.as_deref(), Some("1:00"));

        let mut ticks = 0;
        while let Ok(update) = updates.try_recv() {
            if matches!(update, SessionUpdate::Transition(Transition::Ticked { .. })) {
                ticks += 1;
            }
        }
        assert_eq!(ticks, 3);
        assert!(sink.0.lock().expect("lock").is_empty());
        driver.shutdown().await.expect("joins");
    }

    #[tokio::test(start_paused = true)]
    async fn commands_drive_the_session() {
        let hub = SignalHub::new();
        let sink = Arc::new(Collect::default());
        let (driver, mut updates) = spawn_numbered(2, None, &hub, &sink);

        driver.start().expect("running");
        for _ in 0..2 {
            let view = driver.snapshot().await.expect("running");
            let question = view.prompt.trim_start_matches("Question ").to_string();
            driver.select(correct_id(&format!("q{question}"))).expect("running");
            driver.next().expect("running");
        }
        let result = until_completed(&mut updates).await;
        assert_eq!((result.score, result.total), (2, 2));
        driver.shutdown().await.expect("joins");
    }

    #[tokio::test]
    async fn commands_after_shutdown_fail() {
        let hub = SignalHub::new();
        let sink = Arc::new(Collect::default());
        let (driver, _updates) = spawn_numbered(1, None, &hub, &sink);
        let events = driver.events.clone();
        driver.shutdown().await.expect("joins");
        assert!(events.send(Event::Command(Command::Start)).is_err());
    }
}
