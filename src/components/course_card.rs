//! Course tile for the student library.

use leptos::prelude::*;

use crate::net::types::Course;

/// One course in the library grid or list. Clicking opens the chat view.
#[component]
pub fn CourseCard(course: Course, on_open: Callback<String>) -> impl IntoView {
    let course_id = course.id.clone();
    let on_click = move |_| on_open.run(course_id.clone());

    view! {
        <button class="course-card" on:click=on_click>
            <span class="course-card__subject">{course.subject}</span>
            <span class="course-card__teacher">{course.teacher_name}</span>
            <p class="course-card__description">{course.description}</p>
            <div class="course-card__meta">
                <span>{format!("{} materials", course.materials_count)}</span>
                <span>{format!("{} students", course.student_count)}</span>
            </div>
        </button>
    }
}
