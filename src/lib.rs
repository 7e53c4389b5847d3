//! # gpsmon - GPS status monitor
//!
//! gpsmon tracks the enabled and fix-acquired state of a host's positioning
//! subsystem. It mirrors the host's per-user location mode setting into a
//! boolean enabled state, follows hardware fix events while enabled, and
//! fans every transition out to registered listeners.
//!
//! ## Core Concepts
//!
//! - **LocationMode**: the host's integer positioning mode, mirrored read-only
//! - **StatusMonitor**: owns the enabled/fixed state and the listener set
//! - **StatusListener**: observer of enabled-change and fix-change transitions
//! - **MonitorEnv**: bundle of collaborator handles (settings store,
//!   restriction policy, GPS status source, user resolution)
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use gpsmon::{MonitorConfig, MonitorEnv, StatusMonitor, UserId};
//!
//! let env = MonitorEnv::builder()
//!     .settings(settings)
//!     .restrictions(restrictions)
//!     .gps(gps)
//!     .users(Arc::new(UserId::OWNER))
//!     .build()?;
//!
//! let monitor = StatusMonitor::new(env, MonitorConfig::default());
//! monitor.register_listener(listener);
//!
//! // Host wiring: deliver the mode-change trigger and hardware events.
//! monitor.on_location_mode_changed();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod env;
pub mod error;
pub mod event;
pub mod listener;
pub mod mode;
pub mod monitor;

// Re-export primary types at crate root for convenience
pub use env::{
    GpsStatusSource, MonitorEnv, MonitorEnvBuilder, RestrictionPolicy, SettingsStore, UserResolver,
};
pub use error::{CollaboratorError, MonitorError, MonitorResult};
pub use event::{Capability, GpsEvent, UserId};
pub use listener::StatusListener;
pub use mode::LocationMode;
pub use monitor::{MonitorConfig, StatusMonitor};
