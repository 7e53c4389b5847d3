//! Collaborator trait seams and the hosting environment bundle.
//!
//! These traits define the narrow contracts the monitor consumes from its
//! host: the per-user settings store, the restriction policy, the hardware
//! GPS status source, and active-user resolution. By using traits, we
//! enable:
//! - In-memory fakes for testing
//! - Platform bindings for production hosts
//!
//! The monitor never manages collaborator lifecycle; the handles are shared
//! references into the host.

use std::sync::Arc;

use crate::error::{CollaboratorError, MonitorError, MonitorResult};
use crate::event::{Capability, UserId};
use crate::mode::LocationMode;

/// Read/write access to the host's per-user location mode setting.
///
/// The setting is the single source of truth for the enabled state; the
/// monitor mirrors it and never caches a divergent value.
pub trait SettingsStore: Send + Sync {
    /// Current raw location mode for `user`.
    ///
    /// Returned as the raw integer because external writers may store values
    /// outside the known enumeration; the monitor decodes with
    /// [`LocationMode::from_raw`].
    fn location_mode(&self, user: UserId) -> Result<i32, CollaboratorError>;

    /// Write the location mode for `user`.
    fn set_location_mode(&self, mode: LocationMode, user: UserId) -> Result<(), CollaboratorError>;
}

/// Answers whether a user carries a capability restriction.
pub trait RestrictionPolicy: Send + Sync {
    /// Whether `user` is restricted from using `capability`.
    fn is_restricted(&self, capability: Capability, user: UserId) -> Result<bool, CollaboratorError>;
}

/// Start/stop switch for the hardware GPS status event stream.
///
/// While tracking is active the host delivers [`GpsEvent`]s to
/// [`StatusMonitor::on_gps_event`]. The monitor only invokes these on actual
/// transitions; implementations are not required to tolerate double starts.
///
/// [`GpsEvent`]: crate::event::GpsEvent
/// [`StatusMonitor::on_gps_event`]: crate::monitor::StatusMonitor::on_gps_event
pub trait GpsStatusSource: Send + Sync {
    /// Begin delivering GPS status events.
    fn start_tracking(&self) -> Result<(), CollaboratorError>;

    /// Stop delivering GPS status events.
    fn stop_tracking(&self) -> Result<(), CollaboratorError>;
}

/// Resolves the active user whose settings the monitor reads.
pub trait UserResolver: Send + Sync {
    /// The currently active user.
    fn current_user(&self) -> UserId;
}

/// Single-user hosts can pass the user id itself as the resolver.
impl UserResolver for UserId {
    fn current_user(&self) -> UserId {
        *self
    }
}

/// Bundle of collaborator handles the monitor is constructed with.
#[derive(Clone)]
pub struct MonitorEnv {
    pub(crate) settings: Arc<dyn SettingsStore>,
    pub(crate) restrictions: Arc<dyn RestrictionPolicy>,
    pub(crate) gps: Arc<dyn GpsStatusSource>,
    pub(crate) users: Arc<dyn UserResolver>,
}

impl std::fmt::Debug for MonitorEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MonitorEnv").finish_non_exhaustive()
    }
}

impl MonitorEnv {
    /// Start building an environment.
    #[must_use]
    pub fn builder() -> MonitorEnvBuilder {
        MonitorEnvBuilder::default()
    }
}

/// Builder for [`MonitorEnv`].
///
/// `build` fails fast with [`MonitorError::MissingCollaborator`] if any
/// handle is absent; a monitor is never constructed over a partial
/// environment.
#[derive(Default)]
pub struct MonitorEnvBuilder {
    settings: Option<Arc<dyn SettingsStore>>,
    restrictions: Option<Arc<dyn RestrictionPolicy>>,
    gps: Option<Arc<dyn GpsStatusSource>>,
    users: Option<Arc<dyn UserResolver>>,
}

impl MonitorEnvBuilder {
    /// Settings store handle.
    #[must_use]
    pub fn settings(mut self, settings: Arc<dyn SettingsStore>) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Restriction policy handle.
    #[must_use]
    pub fn restrictions(mut self, restrictions: Arc<dyn RestrictionPolicy>) -> Self {
        self.restrictions = Some(restrictions);
        self
    }

    /// GPS status source handle.
    #[must_use]
    pub fn gps(mut self, gps: Arc<dyn GpsStatusSource>) -> Self {
        self.gps = Some(gps);
        self
    }

    /// Active-user resolver handle.
    #[must_use]
    pub fn users(mut self, users: Arc<dyn UserResolver>) -> Self {
        self.users = Some(users);
        self
    }

    /// Assemble the environment.
    ///
    /// # Errors
    /// `MissingCollaborator` naming the first absent handle.
    pub fn build(self) -> MonitorResult<MonitorEnv> {
        Ok(MonitorEnv {
            settings: self
                .settings
                .ok_or(MonitorError::MissingCollaborator { field: "settings" })?,
            restrictions: self
                .restrictions
                .ok_or(MonitorError::MissingCollaborator { field: "restrictions" })?,
            gps: self
                .gps
                .ok_or(MonitorError::MissingCollaborator { field: "gps" })?,
            users: self
                .users
                .ok_or(MonitorError::MissingCollaborator { field: "users" })?,
        })
    }
}
