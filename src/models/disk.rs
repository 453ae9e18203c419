//! Disk request queue model.

use serde::{Deserialize, Serialize};

/// A pending disk request, identified by the cylinder it targets.
pub type DiskRequest = u32;

/// Cylinders requested by the `disk` command, in arrival order.
pub const SAMPLE_REQUESTS: [DiskRequest; 8] = [98, 183, 37, 122, 14, 124, 65, 67];

/// Cylinder under the disk arm before the first request is served.
pub const SAMPLE_HEAD_START: DiskRequest = 53;

/// A disk request queue plus the initial arm position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiskWorkload {
    /// Initial head position.
    pub head_start: DiskRequest,
    /// Pending requests in arrival order.
    pub requests: Vec<DiskRequest>,
}

impl DiskWorkload {
    /// Creates an empty queue with the head at `head_start`.
    pub fn new(head_start: DiskRequest) -> Self {
        Self {
            head_start,
            requests: Vec::new(),
        }
    }

    /// Appends a request.
    pub fn with_request(mut self, cylinder: DiskRequest) -> Self {
        self.requests.push(cylinder);
        self
    }

    /// Appends several requests in order.
    pub fn with_requests(mut self, cylinders: impl IntoIterator<Item = DiskRequest>) -> Self {
        self.requests.extend(cylinders);
        self
    }

    /// The fixed textbook workload: head at 53, eight queued requests.
    pub fn sample() -> Self {
        Self::new(SAMPLE_HEAD_START).with_requests(SAMPLE_REQUESTS)
    }

    /// Number of pending requests.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}
