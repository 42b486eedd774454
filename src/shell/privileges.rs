//! Privilege elevation and privilege dropping.
//!
//! Installing package requirements needs root, so a framework whose
//! requirements are missing re-executes the whole process under `sudo`,
//! blocks until the child finishes, and the parent exits with the child's
//! status. Everything else runs as the invoking human user.

use std::process::Command;

use tracing::debug;

use crate::error::{Result, ToolchestError};

/// Whether the current process runs with root privileges.
#[cfg(unix)]
pub fn is_elevated() -> bool {
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub fn is_elevated() -> bool {
    false
}

/// Re-invoke the current process under `sudo`, preserving the environment,
/// PATH, and the full argument vector. Blocks until the child terminates
/// and returns its exit status for the caller to propagate.
pub fn reexec_elevated() -> Result<i32> {
    if cfg!(not(unix)) {
        return Err(ToolchestError::Privilege {
            message: "privilege elevation is only supported on unix".to_string(),
        });
    }

    let path = std::env::var("PATH").unwrap_or_default();
    debug!("re-executing under sudo: {:?}", std::env::args().collect::<Vec<_>>());

    let status = Command::new("sudo")
        .arg("-E")
        .arg("env")
        .arg(format!("PATH={path}"))
        .args(std::env::args())
        .status()
        .map_err(|e| ToolchestError::Privilege {
            message: format!("could not spawn sudo: {e}"),
        })?;

    Ok(status.code().unwrap_or(1))
}

/// Drop elevated privileges back to the invoking human user.
///
/// Idempotent: a no-op when the process is not elevated, or when there is
/// no invoking user to return to (not running under sudo).
#[cfg(unix)]
pub fn drop_privileges() -> Result<()> {
    if !is_elevated() {
        return Ok(());
    }

    let uid = sudo_id("SUDO_UID");
    let gid = sudo_id("SUDO_GID");
    let (Some(uid), Some(gid)) = (uid, gid) else {
        debug!("elevated without sudo context, keeping current user");
        return Ok(());
    };

    // Group first: setuid would forfeit the right to change groups.
    if unsafe { libc::setgid(gid) } != 0 {
        return Err(ToolchestError::Privilege {
            message: format!("setgid({gid}) failed: {}", std::io::Error::last_os_error()),
        });
    }
    if unsafe { libc::setuid(uid) } != 0 {
        return Err(ToolchestError::Privilege {
            message: format!("setuid({uid}) failed: {}", std::io::Error::last_os_error()),
        });
    }
    debug!("dropped privileges to uid {uid}, gid {gid}");
    Ok(())
}

#[cfg(not(unix))]
pub fn drop_privileges() -> Result<()> {
    Ok(())
}

#[cfg(unix)]
fn sudo_id(var: &str) -> Option<u32> {
    std::env::var(var).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drop_privileges_is_idempotent_when_unprivileged() {
        // Running unprivileged (the common test case) this is a no-op;
        // running as root outside sudo it keeps the current user.
        assert!(drop_privileges().is_ok());
        assert!(drop_privileges().is_ok());
    }
}
