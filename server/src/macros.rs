//! Log macro generator.
//!
//! Every subsystem logs to its own target so the log4rs configuration can
//! route or filter it independently. Invoke once at the top of a module,
//! before its child modules are declared:
//!
//! ```ignore
//! log_macros!("app::router", router_debug, router_info, router_warn, router_error);
//! ```

/// Generates `debug`, `info`, `warn` and `error` macros bound to `target`.
macro_rules! log_macros {
    ($target:literal, $debug:ident, $info:ident, $warn:ident, $error:ident) => {
        log_macros!(@emit ($) $target, $debug => debug, $info => info, $warn => warn, $error => error);
    };
    (@emit ($d:tt) $target:literal, $($name:ident => $level:ident),+) => {
        $(
            #[allow(unused_macros)]
            macro_rules! $name {
                ($d($d arg:tt)+) => {
                    log::$level!(target: $target, $d($d arg)+)
                };
            }
        )+
    };
}
