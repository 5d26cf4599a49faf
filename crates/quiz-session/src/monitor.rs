//! Integrity monitoring.
//!
//! A host observes whatever signals it has (terminal focus, window
//! visibility, pointer position) and reports them through an
//! [`IntegritySource`]. The session driver subscribes when a run starts and
//! drops the [`Subscription`] when the run completes, resets, or shuts down.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, Weak};

use quiz_core::enums::ViolationKind;

/// Callback invoked once per detected violation.
pub type ViolationHandler = Box<dyn Fn(ViolationKind) + Send + Sync>;

/// Something that can report violations to subscribers.
pub trait IntegritySource: Send + Sync {
    /// Register `handler`. It stays attached until the returned
    /// subscription is dropped or unsubscribed.
    fn subscribe(&self, handler: ViolationHandler) -> Subscription;
}

// ---------------------------------------------------------------------------
// Subscription
// ---------------------------------------------------------------------------

/// Detaches its handler when dropped.
#[must_use = "dropping a Subscription detaches the handler immediately"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// A subscription with nothing to detach, for sources that never fire.
    pub const fn detached() -> Self {
        Self { cancel: None }
    }

    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

// ---------------------------------------------------------------------------
// SignalHub
// ---------------------------------------------------------------------------

type SharedHandler = Arc<dyn Fn(ViolationKind) + Send + Sync>;

#[derive(Default)]
struct HubInner {
    next_id: AtomicU64,
    handlers: Mutex<HashMap<u64, SharedHandler>>,
}

impl HubInner {
    fn handlers(&self) -> std::sync::MutexGuard<'_, HashMap<u64, SharedHandler>> {
        self.handlers.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Host-fed integrity source. The host calls [`SignalHub::emit`] whenever it
/// detects a violation; every live subscriber is notified.
///
/// Cloning shares the same subscriber set.
#[derive(Clone, Default)]
pub struct SignalHub {
    inner: Arc<HubInner>,
}

impl SignalHub {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Notify every subscriber of `kind`. Returns how many were notified.
    pub fn emit(&self, kind: ViolationKind) -> usize {
        // snapshot so handlers may subscribe or unsubscribe while running
        let handlers: Vec<SharedHandler> = self.inner.handlers().values().cloned().collect();
        for handler in &handlers {
            handler(kind);
        }
        tracing::debug!(violation = %kind, notified = handlers.len(), "integrity signal emitted");
        handlers.len()
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers().len()
    }
}

impl IntegritySource for SignalHub {
    fn subscribe(&self, handler: ViolationHandler) -> Subscription {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner.handlers().insert(id, Arc::from(handler));

        let weak: Weak<HubInner> = Arc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handlers().remove(&id);
            }
        })
    }
}

impl std::fmt::Debug for SignalHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalHub")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
