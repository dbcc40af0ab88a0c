pub mod driver;
pub mod stats;
pub mod trace;

pub use driver::Sim;
pub use stats::{ProcessStats, Summary};
pub use trace::{TickEvent, TraceRecord};
