//! Operations that combine the calculations with persistence.
//!
//! Each operation validates its input, reads what it needs from an
//! [`EntityStore`](crate::store::EntityStore), derives the rows to write with
//! the pure functions in [`crate::calculation`], and commits them as a single
//! [`UnitOfWork`](crate::store::UnitOfWork). Timestamps are supplied by the
//! caller.

mod attendance;
mod hierarchy;
mod promotion;

pub use attendance::{AttendanceEntry, save_attendance, update_attendance};
pub use hierarchy::assign_manager;
pub use promotion::promote_employee;

use crate::error::{RecordsError, RecordsResult};

/// Returns the id of the write at `index` from a commit result.
fn committed_id(ids: &[u64], index: usize) -> RecordsResult<u64> {
    ids.get(index).copied().ok_or_else(|| RecordsError::Transaction {
        message: format!("commit returned no id for write {}", index + 1),
    })
}
