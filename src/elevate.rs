//! Privilege checks and re-execution under `sudo`.
//!
//! Aggressive cleaning touches `/var/log` and other root-owned paths. The
//! binary checks [`is_privileged`] before any work starts and, if needed,
//! replaces itself with an equivalent command line run through
//! [`ELEVATION_HELPER`].

use std::convert::Infallible;
use std::ffi::{CStr, CString, OsStr, OsString};
use std::os::unix::ffi::OsStrExt;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

use crate::error::{BilgeError, Result};

/// The program used to re-run bilge-pump with root privileges.
pub const ELEVATION_HELPER: &str = "sudo";

/// Whether the effective user is root.
pub fn is_privileged() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

/// Whether this process is root only because someone ran it through sudo.
///
/// In that case `~` resolves to root's home, not the invoking user's.
pub fn running_under_sudo() -> bool {
    is_privileged() && std::env::var_os("SUDO_USER").is_some()
}

/// Home directory of the user who invoked sudo, if `SUDO_USER` is set.
///
/// Falls back to `/home/<user>` when the account cannot be looked up.
pub fn sudo_user_home() -> Option<PathBuf> {
    let user = std::env::var_os("SUDO_USER").filter(|user| !user.is_empty())?;
    Some(home_of(&user).unwrap_or_else(|| PathBuf::from("/home").join(&user)))
}

/// Looks up a user's home directory in the password database.
fn home_of(user: &OsStr) -> Option<PathBuf> {
    let name = CString::new(user.as_bytes()).ok()?;
    // SAFETY: `name` is NUL-terminated and outlives the call. The returned
    // record is copied out before any other passwd function runs.
    unsafe {
        let entry = libc::getpwnam(name.as_ptr());
        if entry.is_null() || (*entry).pw_dir.is_null() {
            return None;
        }
        let dir = CStr::from_ptr((*entry).pw_dir);
        Some(PathBuf::from(OsStr::from_bytes(dir.to_bytes())))
    }
}

/// Builds `sudo <program> <args...>`.
pub fn elevation_command(
    program: impl Into<OsString>,
    args: impl IntoIterator<Item = OsString>,
) -> Command {
    let mut command = Command::new(ELEVATION_HELPER);
    command.arg(program.into()).args(args);
    command
}

/// Replaces the current process with itself run under sudo.
///
/// `args` must carry every setting explicitly: sudo resets the environment,
/// so `BILGE_*` variables do not reach the elevated process. Only returns
/// when the exec fails.
pub fn reinvoke_elevated(args: impl IntoIterator<Item = OsString>) -> Result<Infallible> {
    let program = match std::env::current_exe() {
        Ok(exe) => exe.into_os_string(),
        Err(_) => std::env::args_os()
            .next()
            .unwrap_or_else(|| OsString::from("bilge-pump")),
    };

    let source = elevation_command(program, args).exec();
    Err(BilgeError::ElevationFailed {
        program: ELEVATION_HELPER.to_string(),
        source,
    })
}
