//! Shell command execution and privilege management.

pub mod command;
pub mod privileges;

pub use command::{execute_quiet, CommandOutput};
pub use privileges::{drop_privileges, is_elevated, reexec_elevated};
