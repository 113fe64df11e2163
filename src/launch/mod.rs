//! Launch orchestration
//!
//! The dispatcher gates every launch behind the probe/build sequence and
//! then hands off to one of two mutually exclusive run modes: the
//! interactive shell session or single-file execution.

mod dispatcher;
mod session;

pub use dispatcher::{LaunchMode, Launcher};
pub use session::{script_session, shell_session};
