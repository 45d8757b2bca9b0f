use std::time::Duration;

pub const DEFAULT_LOGGING_BATCH_SIZE: usize = 100;
pub const QUICKWIT_LOGGING_CHANNEL_CAPACITY: usize = 1024;
pub const DEFAULT_FLUSH_INTERVAL: Duration = Duration::from_secs(10);
