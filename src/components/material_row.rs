//! One material in the teacher dashboard list.

use leptos::prelude::*;

use crate::net::types::{MaterialRecord, MaterialStatus};

fn status_class(status: MaterialStatus) -> &'static str {
    match status {
        MaterialStatus::Pending => "material-row__badge material-row__badge--pending",
        MaterialStatus::Processing => "material-row__badge material-row__badge--processing",
        MaterialStatus::Ready => "material-row__badge material-row__badge--ready",
        MaterialStatus::Error => "material-row__badge material-row__badge--error",
    }
}

fn status_label(status: MaterialStatus) -> &'static str {
    match status {
        MaterialStatus::Pending => "Pending",
        MaterialStatus::Processing => "Processing",
        MaterialStatus::Ready => "Ready",
        MaterialStatus::Error => "Error",
    }
}

/// Material row with status badge, progress, size, and delete action.
#[component]
pub fn MaterialRow(material: MaterialRecord, on_delete: Callback<String>) -> impl IntoView {
    let file_name = material.name.clone();
    let on_click = move |_| on_delete.run(file_name.clone());
    let progress_style = format!("width: {}%", material.progress.min(100));

    view! {
        <div class="material-row">
            <div class="material-row__info">
                <span class="material-row__name">{material.name}</span>
                <span class="material-row__size">{material.size}</span>
            </div>
            <div class="material-row__progress">
                <div class="material-row__progress-fill" style=progress_style></div>
            </div>
            <span class=status_class(material.status)>{status_label(material.status)}</span>
            <button class="btn btn--danger material-row__delete" on:click=on_click title="Delete material">
                "Delete"
            </button>
        </div>
    }
}
