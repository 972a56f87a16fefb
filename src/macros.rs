/// Prints a timestamped progress line to stderr. Stdout is kept for the report.
/// You can pass in the starting time and it will print how long it took from starting time to now.
/// ```
/// # use soulmate::info_time;
/// info_time!("str {}, {}", 1, 2);
/// let time = chrono::Local::now();
/// info_time!(time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        eprintln!("{}", $crate::__log_line!(@now "INFO", $strfm $(, $arg)*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        eprintln!("{}", $crate::__log_line!(@since $time, "INFO", $strfm $(, $arg)*));
    }};
}

/// Same as `info_time!` with a `WARN` level. Used for episodes that get skipped.
#[macro_export]
macro_rules! warn_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        eprintln!("{}", $crate::__log_line!(@now "WARN", $strfm $(, $arg)*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        eprintln!("{}", $crate::__log_line!(@since $time, "WARN", $strfm $(, $arg)*));
    }};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __log_line {
    (@now $level:literal, $strfm:literal $(, $arg:expr)*) => {{
        let local_now = ::chrono::Local::now();
        format!("{:<30} {:<5}: {}", local_now, $level, format!($strfm $(, $arg)*))
    }};
    (@since $time:expr, $level:literal, $strfm:literal $(, $arg:expr)*) => {{
        let local_now = ::chrono::Local::now();
        let run_time = (local_now - $time)
                .num_microseconds()
                .map(|n| n as f64 / 1_000_000.0)
                .unwrap_or(0.0);
        format!(
            "{:<30} {:<5}: {}\nRUNTIME: {} sec",
            local_now,
            $level,
            format!($strfm $(, $arg)*),
            run_time
        )
    }};
}
