use std::process::ExitStatus;

/// Converts a child's exit status into this program's exit code.
///
/// A child terminated by signal `N` maps to `128 + N`, the shell convention.
#[must_use]
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
