//! File picker for course materials with optimistic pending rows.
//!
//! ARCHITECTURE
//! ============
//! Selected files appear in the material list immediately as pending rows
//! so the teacher sees feedback before the multipart upload finishes. On
//! success the list is replaced by the server's view and the page starts
//! polling ingestion status; on failure the optimistic rows flip to error.

use leptos::prelude::*;

use crate::net::types::MaterialRecord;
use crate::state::materials::MaterialsState;
use crate::util::format;

#[cfg(test)]
#[path = "upload_dropzone_test.rs"]
mod upload_dropzone_test;

/// Optimistic pending row for a file the browser just selected.
pub fn pending_material(name: &str, kind: &str, size_bytes: f64) -> MaterialRecord {
    MaterialRecord {
        id: uuid::Uuid::new_v4().to_string(),
        name: name.to_owned(),
        kind: if kind.is_empty() {
            "document".to_owned()
        } else {
            kind.to_owned()
        },
        size: format::size_label(size_bytes),
        status: crate::net::types::MaterialStatus::Pending,
        progress: 0,
    }
}

/// Upload picker for the teacher dashboard. `on_uploaded` fires after a
/// successful upload so the page can begin status polling.
#[component]
pub fn UploadDropzone(course_id: String, on_uploaded: Callback<()>) -> impl IntoView {
    let materials = expect_context::<RwSignal<MaterialsState>>();

    let on_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        {
            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(list) = input.files() else {
                return;
            };
            let mut files = Vec::new();
            for idx in 0..list.length() {
                if let Some(file) = list.get(idx) {
                    files.push(file);
                }
            }
            input.set_value("");
            if files.is_empty() {
                return;
            }

            let pending: Vec<MaterialRecord> = files
                .iter()
                .map(|f| pending_material(&f.name(), &f.type_(), f.size()))
                .collect();
            let pending_ids: Vec<String> = pending.iter().map(|m| m.id.clone()).collect();

            materials.update(|m| {
                m.items.extend(pending.clone());
                m.syncing = true;
                m.status_line = Some("UPLOADING...".to_owned());
            });

            let course_id = course_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::upload_materials(&course_id, &files).await {
                    Ok(()) => {
                        if let Some(items) = crate::net::api::fetch_materials(&course_id).await {
                            materials.update(|m| m.items = items);
                        }
                        on_uploaded.run(());
                    }
                    Err(e) => {
                        leptos::logging::warn!("upload failed: {e}");
                        materials.update(|m| {
                            crate::state::materials::mark_upload_failed(&mut m.items, &pending_ids);
                            m.syncing = false;
                            m.status_line = Some("UPLOAD FAILED".to_owned());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &ev;
        }
    };

    view! {
        <label class="upload-dropzone">
            <span class="upload-dropzone__hint">"Drop course materials here or click to browse"</span>
            <input
                class="upload-dropzone__input"
                type="file"
                multiple
                on:change=on_change
            />
        </label>
    }
}
