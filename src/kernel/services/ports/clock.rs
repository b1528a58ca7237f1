use chrono::{DateTime, Local};

/// Wall-clock source for the `date` and `time` commands.
pub trait Clock {
    fn now(&self) -> DateTime<Local>;
}
