//! Error types for gpsmon.
//!
//! All errors are strongly typed using thiserror. Collaborator failures are
//! never propagated out of the monitor's entry points; they are logged at
//! the call site and substituted with a safe default (mode off / not
//! restricted). Only construction can fail.

use thiserror::Error;

/// Failures reported by external collaborators (settings store, restriction
/// policy, GPS status source).
#[derive(Debug, Error)]
pub enum CollaboratorError {
    /// The caller lacks permission for the requested operation.
    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    /// The collaborator is no longer reachable.
    #[error("Collaborator disconnected: {0}")]
    Disconnected(String),

    /// Backend error.
    #[error("Collaborator backend error: {0}")]
    BackendError(String),
}

/// Top-level error type for gpsmon.
///
/// Runtime entry points degrade to a logged no-op instead of returning
/// errors, so this only surfaces at construction time.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// A required collaborator handle was not supplied to the environment
    /// builder.
    #[error("Required collaborator '{field}' is missing")]
    MissingCollaborator {
        /// Name of the absent collaborator.
        field: &'static str,
    },
}

/// Result type alias for gpsmon operations.
pub type MonitorResult<T> = Result<T, MonitorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collaborator_error_display() {
        let err = CollaboratorError::PermissionDenied("secure settings".to_string());
        let msg = format!("{err}");
        assert!(msg.contains("Permission denied"));
        assert!(msg.contains("secure settings"));

        let err = CollaboratorError::BackendError("ipc failure".to_string());
        assert!(err.to_string().contains("ipc failure"));
    }

    #[test]
    fn test_missing_collaborator_names_field() {
        let err = MonitorError::MissingCollaborator { field: "settings" };
        let msg = format!("{err}");
        assert!(msg.contains("'settings'"));
        assert!(msg.contains("missing"));
    }
}
