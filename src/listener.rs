//! Listener registration and notification fan-out.
//!
//! The listener set is the one piece of state shared between notification
//! and registration paths; a single mutex guards both mutation and the
//! notification loop.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Observer of GPS state transitions.
///
/// Callbacks run synchronously on the thread that detected the change, in
/// transition order: on a disable that also drops a fix,
/// [`on_gps_enabled_changed`] fires strictly before [`on_gps_fix_changed`].
///
/// The monitor holds a strong handle for as long as the listener is
/// registered; callers must unregister before their own teardown. Callbacks
/// must not re-enter `register_listener`/`unregister_listener` on the owning
/// monitor.
///
/// [`on_gps_enabled_changed`]: StatusListener::on_gps_enabled_changed
/// [`on_gps_fix_changed`]: StatusListener::on_gps_fix_changed
pub trait StatusListener: Send + Sync {
    /// The enabled state of the GPS subsystem changed.
    fn on_gps_enabled_changed(&self, gps_enabled: bool);

    /// A position fix was acquired or lost.
    fn on_gps_fix_changed(&self, gps_fixed: bool);
}

/// Recover the guard from a poisoned lock; the guarded collections stay
/// structurally valid even if a listener callback panicked mid-loop.
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Ordered collection of listener handles, deduplicated by identity.
#[derive(Default)]
pub(crate) struct ListenerSet {
    listeners: Mutex<Vec<Arc<dyn StatusListener>>>,
}

impl ListenerSet {
    /// Add a listener. Registering an already-registered handle is a no-op.
    pub(crate) fn register(&self, listener: Arc<dyn StatusListener>) {
        let mut listeners = lock(&self.listeners);
        if !listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    /// Remove a listener. Unregistering an absent handle is a no-op.
    pub(crate) fn unregister(&self, listener: &Arc<dyn StatusListener>) {
        let mut listeners = lock(&self.listeners);
        listeners.retain(|l| !Arc::ptr_eq(l, listener));
    }

    pub(crate) fn len(&self) -> usize {
        lock(&self.listeners).len()
    }

    pub(crate) fn notify_enabled_changed(&self, gps_enabled: bool) {
        let listeners = lock(&self.listeners);
        for listener in listeners.iter() {
            listener.on_gps_enabled_changed(gps_enabled);
        }
    }

    pub(crate) fn notify_fix_changed(&self, gps_fixed: bool) {
        let listeners = lock(&self.listeners);
        for listener in listeners.iter() {
            listener.on_gps_fix_changed(gps_fixed);
        }
    }
}
