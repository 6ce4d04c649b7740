//! Report data structures for commands.
//!
//! Operations build reports, then render them to an Output target.

mod output;
mod platform;
mod pointer;

pub use output::{Report, TerminalOutput};
pub use platform::{PlatformReport, PlatformRow};
pub use pointer::{PointerReport, PointerRow};
