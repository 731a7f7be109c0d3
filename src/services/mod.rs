pub mod cycle;
pub mod scheduler;

pub use cycle::{RenderedLeaderboards, StatsCycle};
pub use scheduler::{Scheduler, SchedulerHandle};
