//! Scheduling domain models.
//!
//! Provides the data types fed to the simulators (disk request queues and
//! process sets) and the timeline they produce.
//!
//! # Domain Mappings
//!
//! | argos-shell | Textbook term |
//! |-------------|---------------|
//! | DiskRequest | Cylinder/track request |
//! | DiskWorkload | Request queue + head start |
//! | Process | Process control block (arrival, burst, priority) |
//! | Timeline | Gantt chart |

mod disk;
mod process;
mod timeline;

pub use disk::{DiskRequest, DiskWorkload, SAMPLE_HEAD_START, SAMPLE_REQUESTS};
pub use process::{sample_processes, Process};
pub use timeline::{Timeline, TimelineEntry};
