use crate::model::ScriptRecord;
use crate::rules::duplicates::DuplicateReason;
use thiserror::Error;

/// Result type alias using ScriptManError
pub type Result<T> = std::result::Result<T, ScriptManError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by the registry maps onto one of these kinds. Each
/// kind has a stable code that callers can match on, print, or turn into a
/// process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    /// Caller supplied an empty or missing required value
    InvalidArgument,
    /// No record matches a name-based lookup
    NotFound,
    /// Candidate path or derived name collides with an existing record
    DuplicateScript,
    /// A record exists but its backing file is missing
    StaleRegistration,
    /// Database or filesystem failure (read, write, copy, delete, initialize)
    Storage,
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidArgument => "ERR_INVALID_ARGUMENT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::DuplicateScript => "ERR_DUPLICATE_SCRIPT",
            ExErrorKind::StaleRegistration => "ERR_STALE_REGISTRATION",
            ExErrorKind::Storage => "ERR_STORAGE",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries the classification plus whatever context the failing layer knew
/// about: the operation, the script name or path involved, and for
/// duplicates the conflicting record itself.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    name: Option<String>,
    path: Option<String>,
    message: String,
    record: Option<Box<ScriptRecord>>,
    reason: Option<DuplicateReason>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            name: None,
            path: None,
            message: String::new(),
            record: None,
            reason: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add script name context
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add filesystem path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the record involved (the conflicting one for duplicates)
    pub fn with_record(mut self, record: ScriptRecord) -> Self {
        self.record = Some(Box::new(record));
        self
    }

    /// Attach the duplicate-detection reason
    pub fn with_reason(mut self, reason: DuplicateReason) -> Self {
        self.reason = Some(reason);
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the script name context, if any
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the attached record, if any
    pub fn record(&self) -> Option<&ScriptRecord> {
        self.record.as_deref()
    }

    /// Get the duplicate-detection reason (populated on DuplicateScript)
    pub fn reason(&self) -> Option<DuplicateReason> {
        self.reason
    }

    /// True for database and filesystem failures
    pub fn is_storage(&self) -> bool {
        self.kind == ExErrorKind::Storage
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(name) = &self.name {
            write!(f, " (name: {})", name)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Domain error taxonomy for registration rules
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptManError {
    /// A required value was empty or missing
    #[error("Invalid argument: {reason}")]
    InvalidArgument { reason: String },

    /// The source path is absent or not a regular file
    #[error("script path does not exist: {path}")]
    ScriptPathMissing { path: String },

    /// No record with this name
    #[error("Script not found: {name}")]
    ScriptNotFound { name: String },

    /// Path or derived name already registered
    #[error("Duplicate script ({reason}): {}", existing.name)]
    DuplicateScript {
        reason: DuplicateReason,
        existing: Box<ScriptRecord>,
    },

    /// Record exists but its backing file is gone
    #[error("Script {name} is registered but its file is missing: {path}")]
    StaleRegistration { name: String, path: String },
}

/// Conversion from ScriptManError to ExError
///
/// Rule functions return the domain enum; the service boundary converts into
/// the canonical facility with `?`.
impl From<ScriptManError> for ExError {
    fn from(err: ScriptManError) -> Self {
        match err {
            ScriptManError::InvalidArgument { reason } => {
                ExError::new(ExErrorKind::InvalidArgument).with_message(reason)
            }

            ScriptManError::ScriptPathMissing { path } => {
                ExError::new(ExErrorKind::InvalidArgument)
                    .with_path(path)
                    .with_message("script path does not exist")
            }

            ScriptManError::ScriptNotFound { name } => ExError::new(ExErrorKind::NotFound)
                .with_name(name)
                .with_message("Script not found"),

            ScriptManError::DuplicateScript { reason, existing } => {
                let existing = *existing;
                ExError::new(ExErrorKind::DuplicateScript)
                    .with_name(existing.name.clone())
                    .with_path(existing.path.clone())
                    .with_message(reason.to_string())
                    .with_reason(reason)
                    .with_record(existing)
            }

            ScriptManError::StaleRegistration { name, path } => {
                ExError::new(ExErrorKind::StaleRegistration)
                    .with_name(name)
                    .with_path(path)
                    .with_message("Script file is missing")
            }
        }
    }
}

impl From<serde_json::Error> for ExError {
    fn from(err: serde_json::Error) -> Self {
        ExError::new(ExErrorKind::Internal)
            .with_op("serialize")
            .with_message(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sample_record() -> ScriptRecord {
        ScriptRecord {
            id: 7,
            name: "build".to_string(),
            path: "/tmp/build.sh".to_string(),
            info: String::new(),
            registered_at: Utc.timestamp_millis_opt(1_700_000_000_000).unwrap(),
        }
    }

    #[test]
    fn test_error_kind_codes_are_stable() {
        assert_eq!(ExErrorKind::InvalidArgument.code(), "ERR_INVALID_ARGUMENT");
        assert_eq!(ExErrorKind::NotFound.code(), "ERR_NOT_FOUND");
        assert_eq!(ExErrorKind::DuplicateScript.code(), "ERR_DUPLICATE_SCRIPT");
        assert_eq!(
            ExErrorKind::StaleRegistration.code(),
            "ERR_STALE_REGISTRATION"
        );
        assert_eq!(ExErrorKind::Storage.code(), "ERR_STORAGE");
    }

    #[test]
    fn test_duplicate_conversion_carries_record_and_reason() {
        let err: ExError = ScriptManError::DuplicateScript {
            reason: DuplicateReason::PathAlreadyRegistered,
            existing: Box::new(sample_record()),
        }
        .into();

        assert_eq!(err.kind(), ExErrorKind::DuplicateScript);
        assert_eq!(err.reason(), Some(DuplicateReason::PathAlreadyRegistered));
        assert_eq!(err.message(), "already registered at this path");
        assert_eq!(err.record().map(|r| r.id), Some(7));
        assert_eq!(err.path(), Some("/tmp/build.sh"));
    }

    #[test]
    fn test_stale_is_distinct_from_not_found() {
        let stale: ExError = ScriptManError::StaleRegistration {
            name: "build".to_string(),
            path: "/tmp/build.sh".to_string(),
        }
        .into();
        let missing: ExError = ScriptManError::ScriptNotFound {
            name: "build".to_string(),
        }
        .into();

        assert_eq!(stale.kind(), ExErrorKind::StaleRegistration);
        assert_eq!(missing.kind(), ExErrorKind::NotFound);
    }

    #[test]
    fn test_display_includes_code_op_and_context() {
        let err = ExError::new(ExErrorKind::Storage)
            .with_op("copy_script")
            .with_path("/nope")
            .with_message("permission denied");
        let rendered = err.to_string();
        assert!(rendered.starts_with("[ERR_STORAGE] in operation 'copy_script'"));
        assert!(rendered.contains("permission denied"));
        assert!(rendered.contains("(path: /nope)"));
        assert!(err.is_storage());
    }
}
