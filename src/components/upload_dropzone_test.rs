use super::*;
use crate::net::types::MaterialStatus;

#[test]
fn pending_rows_start_unprocessed() {
    let row = pending_material("week3.pdf", "application/pdf", 1_300_000.0);
    assert_eq!(row.name, "week3.pdf");
    assert_eq!(row.kind, "application/pdf");
    assert_eq!(row.size, "1.24 MB");
    assert_eq!(row.status, MaterialStatus::Pending);
    assert_eq!(row.progress, 0);
}

#[test]
fn missing_mime_type_falls_back_to_document() {
    let row = pending_material("notes", "", 512.0);
    assert_eq!(row.kind, "document");
}

#[test]
fn pending_rows_get_distinct_ids() {
    let a = pending_material("a.pdf", "application/pdf", 1.0);
    let b = pending_material("b.pdf", "application/pdf", 1.0);
    assert_ne!(a.id, b.id);
}
