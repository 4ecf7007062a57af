//! Macros for command timing

/// Log elapsed time for a command phase when `--verbose` is set
///
/// ```ignore
/// trace_command!(ctx, "discover_store");
/// ```
macro_rules! trace_command {
    ($ctx:expr, $label:expr) => {
        if $ctx.cli.verbose {
            ::tracing::debug!(elapsed = ?$ctx.start.elapsed(), $label);
        }
    };
}

pub(crate) use trace_command;
