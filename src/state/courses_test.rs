use super::*;

#[test]
fn seed_courses_have_unique_ids() {
    let seed = seed_courses();
    assert!(!seed.is_empty());
    let mut ids: Vec<&str> = seed.iter().map(|c| c.id.as_str()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), seed.len());
}

#[test]
fn filter_matches_subject_case_insensitively() {
    let seed = seed_courses();
    let hits = filter_courses(&seed, "machine");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].subject, "Machine Learning");
}

#[test]
fn filter_matches_teacher_name() {
    let seed = seed_courses();
    let hits = filter_courses(&seed, "ivanov");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].teacher_name, "Dr. Ivanov");
}

#[test]
fn empty_query_returns_everything() {
    let seed = seed_courses();
    assert_eq!(filter_courses(&seed, "").len(), seed.len());
    assert_eq!(filter_courses(&seed, "   ").len(), seed.len());
}

#[test]
fn unmatched_query_returns_nothing() {
    let seed = seed_courses();
    assert!(filter_courses(&seed, "quantum basket weaving").is_empty());
}
