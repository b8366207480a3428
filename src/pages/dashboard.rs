//! Teacher workspace: material management and knowledge-base training.
//!
//! ARCHITECTURE
//! ============
//! Uploads and resyncs both funnel into the same ingestion status poller:
//! the backend indexes the whole course workspace, and the dashboard polls
//! `GET /api/ingest/status/{course_id}` at a fixed interval until the
//! workspace reports ready, folding each report into the material rows.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::material_row::MaterialRow;
use crate::components::upload_dropzone::UploadDropzone;
use crate::state::auth::AuthState;
use crate::state::materials::MaterialsState;
use crate::store::app_state::{self, AppStateUpdate, View};
use crate::store::courses as course_cache;

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

/// Fixed delay between ingestion status polls.
pub const INGEST_POLL_MS: u64 = 800;

/// Consecutive failed status fetches before the poller gives up.
#[cfg(feature = "hydrate")]
const MAX_POLL_FAILURES: u32 = 3;

/// Course the dashboard manages, from the persisted shell state and the
/// course cache. Falls back to a placeholder so the page stays usable
/// before any course has been opened.
pub fn resolve_active_course(active_course_id: Option<&str>) -> (String, String) {
    let Some(id) = active_course_id else {
        return ("default".to_owned(), "Your Course".to_owned());
    };
    match course_cache::get(id) {
        Some(course) => (course.id, course.subject),
        None => (id.to_owned(), "Your Course".to_owned()),
    }
}

/// Poll workspace ingestion until it reports ready, folding each report
/// into the material rows.
#[cfg(feature = "hydrate")]
fn start_status_polling(course_id: String, materials: RwSignal<MaterialsState>) {
    if materials.get_untracked().syncing {
        return;
    }
    materials.update(|m| m.syncing = true);

    leptos::task::spawn_local(async move {
        let mut failures = 0;
        loop {
            gloo_timers::future::sleep(std::time::Duration::from_millis(INGEST_POLL_MS)).await;

            let Some(status) = crate::net::api::fetch_ingest_status(&course_id).await else {
                failures += 1;
                if failures >= MAX_POLL_FAILURES {
                    leptos::logging::warn!("ingestion polling gave up for course {course_id}");
                    materials.update(|m| m.syncing = false);
                    return;
                }
                continue;
            };
            failures = 0;

            let done = status.is_ready();
            materials.update(|m| {
                let line = crate::state::materials::apply_ingest_status(&mut m.items, &status);
                m.status_line = Some(line);
                if done {
                    m.syncing = false;
                }
            });
            if done {
                return;
            }
        }
    });
}

/// Teacher dashboard. Redirects to the sign-in page without a session.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let materials = expect_context::<RwSignal<MaterialsState>>();
    let navigate = use_navigate();

    let shell = app_state::load();
    let (course_id, course_name) = resolve_active_course(shell.active_course_id.as_deref());

    let nav_guard = navigate.clone();
    Effect::new(move || {
        if auth.get().is_guest() {
            nav_guard("/login", NavigateOptions::default());
        }
    });

    Effect::new(move || {
        app_state::save(&AppStateUpdate {
            view: Some(View::Dashboard),
            ..AppStateUpdate::default()
        });
    });

    // Load the material list on mount.
    {
        let course_id = course_id.clone();
        Effect::new(move || {
            let course_id = course_id.clone();
            #[cfg(feature = "hydrate")]
            leptos::task::spawn_local(async move {
                let items = crate::net::api::fetch_materials(&course_id)
                    .await
                    .unwrap_or_default();
                materials.update(|m| {
                    m.items = items;
                    m.loading = false;
                });
            });
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = course_id;
            }
        });
    }

    let poll_course_id = course_id.clone();
    let on_uploaded = Callback::new(move |()| {
        #[cfg(feature = "hydrate")]
        {
            materials.update(|m| m.syncing = false);
            start_status_polling(poll_course_id.clone(), materials);
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &poll_course_id;
        }
    });

    let retrain_course_id = course_id.clone();
    let on_retrain = move |_| {
        if materials.get().syncing {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let course_id = retrain_course_id.clone();
            materials.update(|m| m.status_line = Some("Updating knowledge base...".to_owned()));
            leptos::task::spawn_local(async move {
                match crate::net::api::start_ingest(&course_id).await {
                    Ok(()) => start_status_polling(course_id, materials),
                    Err(e) => {
                        leptos::logging::warn!("resync failed: {e}");
                        materials.update(|m| {
                            m.status_line = Some("SYNC FAILED".to_owned());
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &retrain_course_id;
        }
    };

    let delete_course_id = course_id.clone();
    let on_delete = Callback::new(move |file_name: String| {
        #[cfg(feature = "hydrate")]
        {
            let course_id = delete_course_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_material(&course_id, &file_name).await {
                    Ok(()) => materials.update(|m| m.items.retain(|r| r.name != file_name)),
                    Err(e) => leptos::logging::warn!("delete failed: {e}"),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&delete_course_id, file_name);
        }
    });

    let chat_course_id = course_id.clone();
    let on_open_chat = move |_| {
        navigate(&format!("/chat/{chat_course_id}"), NavigateOptions::default());
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <span class="dashboard-page__badge">"Teacher Dashboard"</span>
                    <span class="dashboard-page__course">{course_name.clone()}</span>
                    <h1>"Manage Assistant"</h1>
                </div>
                <button class="btn btn--primary" on:click=on_open_chat>
                    "Launch AI Assistant"
                </button>
            </header>

            <div class="dashboard-page__grid">
                <section class="dashboard-page__training">
                    <h2>"AI Training Status"</h2>
                    <div class="dashboard-page__meter-label">
                        <span>"Knowledge Base"</span>
                        <span>{move || format!("{} Ready", materials.get().ready_count())}</span>
                    </div>
                    <div class="dashboard-page__meter">
                        <div
                            class="dashboard-page__meter-fill"
                            style=move || format!("width: {}%", materials.get().readiness_percent())
                        ></div>
                    </div>

                    <Show when=move || materials.get().status_line.is_some()>
                        <div class="dashboard-page__status-log">
                            {move || materials.get().status_line.unwrap_or_default()}
                        </div>
                    </Show>

                    <button
                        class="btn btn--primary dashboard-page__retrain"
                        disabled=move || materials.get().syncing
                        on:click=on_retrain
                    >
                        {move || {
                            if materials.get().syncing {
                                "Updating Knowledge Base..."
                            } else {
                                "Sync Knowledge Base"
                            }
                        }}
                    </button>
                </section>

                <section class="dashboard-page__files">
                    <UploadDropzone course_id=course_id.clone() on_uploaded=on_uploaded/>

                    <div class="dashboard-page__files-header">
                        <h3>"Course Materials"</h3>
                        <span class="dashboard-page__total">
                            {move || format!("Total: {}", materials.get().items.len())}
                        </span>
                    </div>

                    <Show
                        when=move || !materials.get().loading
                        fallback=move || view! {
                            <p class="dashboard-page__loading">"Scanning repository..."</p>
                        }
                    >
                        {move || {
                            let items = materials.get().items;
                            if items.is_empty() {
                                return view! {
                                    <div class="dashboard-page__empty">
                                        <h4>"Empty Repository"</h4>
                                        <p>"Start by uploading your course materials above."</p>
                                    </div>
                                }
                                    .into_any();
                            }
                            items
                                .into_iter()
                                .map(|material| view! {
                                    <MaterialRow material=material on_delete=on_delete/>
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </Show>
                </section>
            </div>
        </div>
    }
}
