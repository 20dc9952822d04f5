//! Message macros with debug-aware output routing.
//!
//! Every macro takes a [`Message`](super::Message) (or anything `Display`)
//! and either prints it for the user or, when debug mode is on, emits it as
//! a `tracing` event so it lands in the same stream as the library's own
//! logs.
//!
//! ```text
//! msg_info!(..) ──▶ debug mode? ──yes──▶ tracing::info!
//!                        │
//!                        └──no───▶ println!
//! ```
//!
//! Debug mode is on when `TASKTRACK_DEBUG` or `RUST_LOG` is set. The check
//! runs once and is cached.
//!
//! ## Usage
//!
//! ```rust
//! use tasktrack::libs::messages::Message;
//! use tasktrack::{msg_info, msg_success};
//!
//! msg_success!(Message::TaskCreated(1, "Write report".to_string()));
//! msg_info!(Message::NoTasks);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether message macros should route through `tracing`.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("TASKTRACK_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Shared body of the `msg_*` macros: a `tracing` event at `$level` in
/// debug mode, `$print!` otherwise.
#[doc(hidden)]
#[macro_export]
macro_rules! __msg_emit {
    ($level:ident, $print:ident, $prefix:literal, $msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::$level!("{}{}", $prefix, $msg);
        } else {
            $print!("{}{}", $prefix, $msg);
        }
    };
}

/// Prints a plain message; `true` pads it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "", $msg)
    };
    ($msg:expr, true) => {
        $crate::__msg_emit!(info, println, "\n", format_args!("{}\n", $msg))
    };
}

/// Prints a success message with a ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "✅ ", $msg)
    };
}

/// Prints a warning with a ⚠️ prefix, on stderr in normal mode.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        $crate::__msg_emit!(warn, eprintln, "⚠️ ", $msg)
    };
}

/// Prints an informational message with an ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        $crate::__msg_emit!(info, println, "ℹ️ ", $msg)
    };
}

/// Returns early with an `anyhow::Error` carrying the message text.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
