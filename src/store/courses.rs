//! Cached course cards.
//!
//! The chat view resolves its header (subject, teacher) from this cache so
//! opening `/chat/{id}` directly never needs a list round trip.

use crate::net::types::Course;

/// Storage key for the course-cache document.
pub const TABLE_KEY: &str = "courses";

/// Replace the cached course list.
pub fn put_all(courses: &[Course]) {
    super::save_table(TABLE_KEY, &courses);
}

/// Look up a cached course by id.
pub fn get(course_id: &str) -> Option<Course> {
    let cached: Vec<Course> = super::load_table(TABLE_KEY)?;
    cached.into_iter().find(|c| c.id == course_id)
}
