use super::*;

fn course(id: &str, subject: &str) -> Course {
    Course {
        id: id.to_owned(),
        subject: subject.to_owned(),
        teacher_name: "Dr. Ivanov".to_owned(),
        teacher_id: "t1".to_owned(),
        description: String::new(),
        materials_count: 0,
        student_count: 0,
    }
}

#[test]
fn course_name_comes_from_the_loaded_list() {
    let items = vec![course("c1", "Network Security"), course("c2", "Calculus")];
    assert_eq!(
        resolve_course_name(&items, "c2"),
        Some("Calculus".to_owned())
    );
}

#[test]
fn unknown_course_resolves_to_none_without_a_cache() {
    assert_eq!(resolve_course_name(&[], "missing"), None);
}
