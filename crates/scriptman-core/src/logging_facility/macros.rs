//! Boundary logging macros for registry operations
//!
//! Every public `ScriptRegistry` operation brackets its work with these:
//! one `start` event on entry, then exactly one of `end` or `end_error`.
//! All three stamp `component` (the calling module) and `op` (a stable
//! `script_*` operation name); anything after the required arguments is
//! passed through to `tracing` as extra fields, e.g. `script_name = name`.
//!
//! Field and event names come from [`crate::schema`].

/// Emit the `start` event of a registry operation
///
/// ```
/// # use scriptman_core::log_op_start;
/// log_op_start!("script_list");
/// log_op_start!("script_add", script_path = "/tmp/build.sh", copy = true);
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Emit the `end` event of a registry operation
///
/// `duration_ms` is required; counts and ids of what the operation touched
/// follow as extra fields.
///
/// ```
/// # use scriptman_core::log_op_end;
/// log_op_end!("script_autoremove", duration_ms = 3, removed_count = 2_u64, failed_count = 0_u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Emit the `end_error` event of a failed registry operation
///
/// `$err` is anything convertible into `ExError` (usually a clone of the
/// error about to be returned). The event carries its kind, stable code and
/// message at error level.
///
/// ```
/// # use scriptman_core::log_op_error;
/// # use scriptman_core::errors::ScriptManError;
/// let err = ScriptManError::ScriptNotFound { name: "build".to_string() };
/// log_op_error!("script_remove", err, duration_ms = 1, script_name = "build");
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = ex_err.message(),
            $($($field)*)?
        );
    }};
}
