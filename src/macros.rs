/// Timestamped `println!`. With a starting `chrono` time as the first
/// argument it also reports the elapsed seconds since that time.
/// ```ignore
/// info_time!("str {}, {}", 1, 2);
/// let time = Local::now();
/// info_time!(time, "str {}, {}", 1, 2);
/// ```
#[macro_export]
macro_rules! info_time {
    ($strfm:literal $(,)? $($arg:expr),*) => {{
        println!("{:<30} : {}", Local::now(), format!($strfm, $($arg),*));
    }};
    ($time:expr, $strfm:literal $(,)? $($arg:expr),*) => {{
        let local_now = Local::now();
        let elapsed = (local_now - $time).num_milliseconds() as f64 / 1_000.0;
        println!(
            "{:<30} : {} [{:.3} sec]",
            local_now,
            format!($strfm, $($arg),*),
            elapsed
        );
    }};
}
