//! External collaborators: the host's URL handler and tactile feedback.
//!
//! Both are best effort.  Failures are reported to the caller for logging
//! and the status bar; the animation engine never depends on them.

pub mod haptics;
pub mod link;
