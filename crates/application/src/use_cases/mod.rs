//! Application use cases (business logic orchestration).

mod load_clocks;
mod stamp_current_time;
mod write_clocks;

pub use load_clocks::*;
pub use stamp_current_time::*;
pub use write_clocks::*;
