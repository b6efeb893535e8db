//! Post selection - match a queue entry against a target date

use crate::model::ScheduledPost;

/// Return the first post whose `date` field exactly equals `date`.
///
/// Date uniqueness across the queue is not enforced; when several entries
/// share a date, the earliest in file order wins. Comparison is exact string
/// equality, matching the ISO calendar date format of queue entries.
pub fn select_for_date<'a>(posts: &'a [ScheduledPost], date: &str) -> Option<&'a ScheduledPost> {
    posts.iter().find(|post| post.date == date)
}
