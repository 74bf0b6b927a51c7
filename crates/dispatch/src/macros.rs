//! crates/dispatch/src/macros.rs
//! Call-site macros wrapping the dispatcher's guarded writers.
//!
//! Every emitting macro expands to the dispatcher call expression, so `?`
//! applies directly at the call site. The `sim_debug*` family is compiled
//! only with the `debug-messages` feature; without it each debug macro
//! expands to `Ok(())` and its arguments are never evaluated.

/// Guarded message write: `sim_message!(d, "Core", 4, "x={}", x)?`.
#[macro_export]
macro_rules! sim_message {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.message($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Continuation write without tag or indent, same gating as [`sim_message!`].
#[macro_export]
macro_rules! sim_message_cont {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.message_cont($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Guarded write, then grow the shared indentation by one unit.
#[macro_export]
macro_rules! sim_message_inc {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.message_inc($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Shrink the shared indentation by one unit, then perform the guarded write.
#[macro_export]
macro_rules! sim_message_dec {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.message_dec($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Grow the indentation without writing, gated on the type's threshold.
#[macro_export]
macro_rules! sim_inc_tab {
    ($d:expr, $kind:expr, $level:expr) => {
        $d.inc_tab($kind, $level)
    };
}

/// Shrink the indentation without writing, gated on the type's threshold.
#[macro_export]
macro_rules! sim_dec_tab {
    ($d:expr, $kind:expr, $level:expr) => {
        $d.dec_tab($kind, $level)
    };
}

/// Clears the shared indentation. Ungated.
#[macro_export]
macro_rules! sim_reset_tab {
    ($d:expr) => {
        $d.reset_tab()
    };
}

/// Two-tier warning, capturing the call-site file and line.
#[macro_export]
macro_rules! sim_warning {
    ($d:expr, $($arg:tt)+) => {
        $d.warning($crate::log_source!(), ::std::format_args!($($arg)+))
    };
}

/// Fatal error attributable to an object instance.
///
/// Writes the formatted line to the sink, flushes, and invokes the fatal
/// handler. With the default handler this does not return.
#[macro_export]
macro_rules! sim_fatal {
    ($d:expr, $($arg:tt)+) => {
        $d.fatal($crate::log_source!(), ::std::format_args!($($arg)+))
    };
}

/// Fatal error at global or static scope; handler only, no sink write.
#[macro_export]
macro_rules! sim_global_fatal {
    ($d:expr, $($arg:tt)+) => {
        $d.global_fatal($crate::log_source!(), ::std::format_args!($($arg)+))
    };
}

/// Quick value dump: `dump_value!(d, half_life)` writes
/// `half_life = [ 3.2 ]` as a "Core" level-0 message.
#[macro_export]
macro_rules! dump_value {
    ($d:expr, $value:expr) => {
        $d.message(
            "Core",
            0,
            ::std::format_args!("{} = [ {} ]", stringify!($value), $value),
        )
    };
}

/// Debug-category guarded write, tagged `[Debug-<type>-<level>]`.
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! sim_debug {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.debug_message($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Debug continuation write without tag or indent.
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! sim_debug_cont {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.debug_message_cont($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Debug write, then grow the shared indentation by one unit.
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! sim_debug_inc {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.debug_message_inc($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Shrink the shared indentation by one unit, then perform the debug write.
#[cfg(feature = "debug-messages")]
#[macro_export]
macro_rules! sim_debug_dec {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        $d.debug_message_dec($kind, $level, ::std::format_args!($($arg)+))
    };
}

/// Without `debug-messages` the debug macros expand to `Ok(())`; the
/// arguments are discarded unevaluated.
#[cfg(not(feature = "debug-messages"))]
#[macro_export]
macro_rules! sim_debug {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        ::std::io::Result::Ok(())
    };
}

#[cfg(not(feature = "debug-messages"))]
#[macro_export]
#[doc(hidden)]
macro_rules! sim_debug_cont {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        ::std::io::Result::Ok(())
    };
}

#[cfg(not(feature = "debug-messages"))]
#[macro_export]
#[doc(hidden)]
macro_rules! sim_debug_inc {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        ::std::io::Result::Ok(())
    };
}

#[cfg(not(feature = "debug-messages"))]
#[macro_export]
#[doc(hidden)]
macro_rules! sim_debug_dec {
    ($d:expr, $kind:expr, $level:expr, $($arg:tt)+) => {
        ::std::io::Result::Ok(())
    };
}
