//! Schedule construction: one cron entry per manifest plus fixed maintenance jobs.

mod builder;
pub(crate) mod cron;
mod entry;

#[cfg(test)]
mod tests;

pub use self::builder::build_schedule;
pub use self::entry::{Schedule, ScheduleEntry, TaskTarget};
