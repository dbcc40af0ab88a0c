pub mod observer;
pub mod state;

pub use observer::Observer;
pub use state::{ProcId, Process, SimCtx, Ticks};
