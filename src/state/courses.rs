//! Course-library state for the student view.

#[cfg(test)]
#[path = "courses_test.rs"]
mod courses_test;

use crate::net::types::Course;

/// Course list state backed by `GET /api/courses`.
#[derive(Clone, Debug)]
pub struct CoursesState {
    pub items: Vec<Course>,
    pub loading: bool,
}

impl Default for CoursesState {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: true,
        }
    }
}

/// Seed repository shown when the API returns nothing or is unreachable,
/// so a fresh deployment still renders a browsable library.
pub fn seed_courses() -> Vec<Course> {
    let seed = [
        (
            "1",
            "Advanced Calculus",
            "Dr. Serikzhanov",
            "t1",
            "Multivariate functions and vector analysis.",
            12,
            156,
        ),
        (
            "2",
            "Machine Learning",
            "Prof. Alimov",
            "t2",
            "Fundamental algorithms and statistical modeling.",
            24,
            320,
        ),
        (
            "3",
            "UI/UX Design",
            "Ms. Kim",
            "t3",
            "Interface design principles and user psychology.",
            8,
            85,
        ),
        (
            "4",
            "Network Security",
            "Dr. Ivanov",
            "t4",
            "Securing modern infrastructures against threats.",
            15,
            110,
        ),
    ];
    seed.into_iter()
        .map(
            |(id, subject, teacher, teacher_id, description, materials, students)| Course {
                id: id.to_owned(),
                subject: subject.to_owned(),
                teacher_name: teacher.to_owned(),
                teacher_id: teacher_id.to_owned(),
                description: description.to_owned(),
                materials_count: materials,
                student_count: students,
            },
        )
        .collect()
}

/// Case-insensitive filter over subject and teacher name.
pub fn filter_courses<'a>(courses: &'a [Course], query: &str) -> Vec<&'a Course> {
    let needle = query.trim().to_lowercase();
    courses
        .iter()
        .filter(|c| {
            needle.is_empty()
                || c.subject.to_lowercase().contains(&needle)
                || c.teacher_name.to_lowercase().contains(&needle)
        })
        .collect()
}
