pub mod clock;
pub mod config;
pub mod date;
pub mod entry;
pub mod error;

pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{BiteloConfig, HeaderConfig, HeadingConfig};
pub use date::{CalendarDate, DatePolicy, MonthDisplay};
pub use entry::{EntryKind, MountTarget};
pub use error::{BiteloError, Result};
