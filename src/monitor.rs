//! GPS status monitor.
//!
//! Tracks the enabled and fix-acquired state of the positioning subsystem,
//! mirrors the host's location mode setting, and fans state transitions out
//! to registered listeners. The settings store stays the single source of
//! truth: [`StatusMonitor::set_gps_enabled`] only writes the store, and the
//! local state converges once the host delivers the mode-change trigger.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use tracing::{debug, warn};

use crate::env::MonitorEnv;
use crate::event::{Capability, GpsEvent, UserId};
use crate::listener::{lock, ListenerSet, StatusListener};
use crate::mode::LocationMode;

/// Construction-time configuration.
#[derive(Debug, Clone, Default)]
pub struct MonitorConfig {
    /// Emit per-event debug diagnostics.
    pub verbose_logging: bool,
}

/// Pending listener notifications, computed under the transition lock and
/// dispatched in order after the lock is released.
#[derive(Debug, Clone, Copy)]
enum Notification {
    Enabled(bool),
    Fix(bool),
}

/// GPS status monitor.
///
/// The two inbound entry points ([`on_location_mode_changed`] and
/// [`on_gps_event`]) may arrive on different host threads; both serialize
/// through one transition lock so that listeners observe consistent
/// transitions. Notifications are dispatched after the lock is released, so
/// every accessor, `is_tracking_active` included, is safe to call from
/// listener callbacks.
///
/// [`on_location_mode_changed`]: StatusMonitor::on_location_mode_changed
/// [`on_gps_event`]: StatusMonitor::on_gps_event
pub struct StatusMonitor {
    env: MonitorEnv,
    cfg: MonitorConfig,
    gps_enabled: AtomicBool,
    gps_fixed: AtomicBool,
    /// Transition lock. The guarded bool is the hardware-tracking
    /// subscription state; holding the lock serializes both entry points.
    tracking: Mutex<bool>,
    listeners: ListenerSet,
    collaborator_failures: AtomicU64,
}

impl StatusMonitor {
    /// Create a monitor in the all-disabled initial state: not enabled, no
    /// fix, tracking inactive, empty listener set.
    #[must_use]
    pub fn new(env: MonitorEnv, cfg: MonitorConfig) -> Self {
        Self {
            env,
            cfg,
            gps_enabled: AtomicBool::new(false),
            gps_fixed: AtomicBool::new(false),
            tracking: Mutex::new(false),
            listeners: ListenerSet::default(),
            collaborator_failures: AtomicU64::new(0),
        }
    }

    /// Entry point for the host's "location mode setting changed" trigger.
    ///
    /// Re-reads the mode from the settings store rather than trusting any
    /// payload. An unchanged enabled state is a no-op. On a change, listeners
    /// are notified of the enabled transition first, then the hardware
    /// tracking subscription is converged; a fix dropped by a disable is
    /// notified last.
    pub fn on_location_mode_changed(&self) {
        let mut pending = Vec::new();
        {
            let mut tracking = lock(&self.tracking);

            let mode = self.read_location_mode();
            let new_enabled = mode.gps_enabled();
            let old_enabled = self.gps_enabled.load(Ordering::Acquire);

            if new_enabled == old_enabled {
                if self.cfg.verbose_logging {
                    debug!(
                        mode = mode.raw(),
                        gps_enabled = old_enabled,
                        "location mode changed: enabled state unchanged"
                    );
                }
                return;
            }

            self.gps_enabled.store(new_enabled, Ordering::Release);
            pending.push(Notification::Enabled(new_enabled));

            if new_enabled {
                self.start_tracking(&mut tracking);
            } else {
                self.stop_tracking(&mut tracking);
                if self.gps_fixed.swap(false, Ordering::AcqRel) {
                    pending.push(Notification::Fix(false));
                }
            }

            if self.cfg.verbose_logging {
                debug!(mode = mode.raw(), gps_enabled = new_enabled, "location mode changed");
            }
        }

        self.dispatch(&pending);
    }

    /// Entry point for hardware events delivered by the GPS status source.
    ///
    /// `Started` is informational. `Stopped` drops a held fix. `FirstFix`
    /// sets the fix and notifies unconditionally, even if a fix was already
    /// held; every fix event is observable, unlike the deduplicated
    /// enabled-change path.
    pub fn on_gps_event(&self, event: GpsEvent) {
        let mut pending = Vec::new();
        {
            let _tracking = lock(&self.tracking);

            match event {
                GpsEvent::Started => {
                    if self.cfg.verbose_logging {
                        debug!("gps event: started");
                    }
                }
                GpsEvent::Stopped => {
                    if self.cfg.verbose_logging {
                        debug!("gps event: stopped");
                    }
                    if self.gps_fixed.swap(false, Ordering::AcqRel) {
                        pending.push(Notification::Fix(false));
                    }
                }
                GpsEvent::FirstFix => {
                    if self.cfg.verbose_logging {
                        debug!("gps event: first fix");
                    }
                    self.gps_fixed.store(true, Ordering::Release);
                    pending.push(Notification::Fix(true));
                }
            }
        }

        self.dispatch(&pending);
    }

    /// Fire-and-forget request to enable or disable the GPS subsystem.
    ///
    /// Writes `HighAccuracy` or `BatterySaving` to the settings store for the
    /// active user. Local state is left untouched; the change arrives back
    /// through [`on_location_mode_changed`] once the host delivers the
    /// trigger. A restricted user is a silent no-op. Write failures are
    /// logged and swallowed.
    ///
    /// [`on_location_mode_changed`]: StatusMonitor::on_location_mode_changed
    pub fn set_gps_enabled(&self, gps_enabled: bool) {
        let user = self.env.users.current_user();
        if self.is_user_location_restricted(user) {
            if self.cfg.verbose_logging {
                debug!(user = %user, "set_gps_enabled vetoed by restriction");
            }
            return;
        }

        let mode = if gps_enabled {
            LocationMode::HighAccuracy
        } else {
            LocationMode::BatterySaving
        };
        if let Err(e) = self.env.settings.set_location_mode(mode, user) {
            self.collaborator_failures.fetch_add(1, Ordering::Relaxed);
            warn!(user = %user, mode = mode.raw(), error = %e, "failed to write location mode");
        }
    }

    /// Whether the GPS subsystem is currently considered enabled.
    #[must_use]
    pub fn is_gps_enabled(&self) -> bool {
        self.gps_enabled.load(Ordering::Acquire)
    }

    /// Whether a position fix is currently held.
    #[must_use]
    pub fn is_gps_fixed(&self) -> bool {
        self.gps_fixed.load(Ordering::Acquire)
    }

    /// Whether the hardware event subscription is currently active.
    #[must_use]
    pub fn is_tracking_active(&self) -> bool {
        *lock(&self.tracking)
    }

    /// Number of collaborator calls that failed and were substituted with a
    /// safe default.
    #[must_use]
    pub fn collaborator_failures(&self) -> u64 {
        self.collaborator_failures.load(Ordering::Relaxed)
    }

    /// Number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Register a listener. Registering an already-registered handle is a
    /// no-op.
    pub fn register_listener(&self, listener: Arc<dyn StatusListener>) {
        self.listeners.register(listener);
    }

    /// Unregister a listener. Unknown handles are a no-op.
    pub fn unregister_listener(&self, listener: &Arc<dyn StatusListener>) {
        self.listeners.unregister(listener);
    }

    fn dispatch(&self, pending: &[Notification]) {
        for notification in pending {
            match *notification {
                Notification::Enabled(gps_enabled) => {
                    self.listeners.notify_enabled_changed(gps_enabled);
                }
                Notification::Fix(gps_fixed) => {
                    self.listeners.notify_fix_changed(gps_fixed);
                }
            }
        }
    }

    fn read_location_mode(&self) -> LocationMode {
        let user = self.env.users.current_user();
        match self.env.settings.location_mode(user) {
            Ok(raw) => {
                let mode = LocationMode::from_raw(raw);
                if self.cfg.verbose_logging {
                    debug!(user = %user, raw, ?mode, "read location mode");
                }
                mode
            }
            Err(e) => {
                self.collaborator_failures.fetch_add(1, Ordering::Relaxed);
                warn!(user = %user, error = %e, "failed to read location mode, assuming off");
                LocationMode::Off
            }
        }
    }

    fn is_user_location_restricted(&self, user: UserId) -> bool {
        match self
            .env
            .restrictions
            .is_restricted(Capability::ShareLocation, user)
        {
            Ok(restricted) => restricted,
            Err(e) => {
                self.collaborator_failures.fetch_add(1, Ordering::Relaxed);
                warn!(user = %user, error = %e, "restriction check failed, assuming unrestricted");
                false
            }
        }
    }

    fn start_tracking(&self, tracking: &mut bool) {
        if *tracking {
            return;
        }
        match self.env.gps.start_tracking() {
            Ok(()) => {
                *tracking = true;
                if self.cfg.verbose_logging {
                    debug!("gps status tracking started");
                }
            }
            Err(e) => {
                self.collaborator_failures.fetch_add(1, Ordering::Relaxed);
                warn!(error = %e, "failed to start gps status tracking");
            }
        }
    }

    fn stop_tracking(&self, tracking: &mut bool) {
        if !*tracking {
            return;
        }
        if let Err(e) = self.env.gps.stop_tracking() {
            self.collaborator_failures.fetch_add(1, Ordering::Relaxed);
            warn!(error = %e, "failed to stop gps status tracking");
        }
        // The flag drops regardless; a source that failed to unsubscribe is
        // not re-stopped on the next disable.
        *tracking = false;
        if self.cfg.verbose_logging {
            debug!("gps status tracking stopped");
        }
    }
}
