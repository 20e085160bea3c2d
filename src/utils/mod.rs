mod time;

pub use time::{current_time_millis, current_timestamp};
