//! Student course library.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::course_card::CourseCard;
use crate::state::courses::{CoursesState, filter_courses, seed_courses};
use crate::state::ui::{LibraryLayout, UiState};
use crate::store::app_state::{self, AppStateUpdate, View};

/// Course library with search and a grid/list toggle.
///
/// The list comes from `GET /api/courses`; when the API is unreachable the
/// seed repository keeps the page browsable. Fetched courses are cached in
/// the record store so the chat view can resolve names offline.
#[component]
pub fn CoursesPage() -> impl IntoView {
    let courses = expect_context::<RwSignal<CoursesState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());

    Effect::new(move || {
        app_state::save(&AppStateUpdate {
            view: Some(View::Student),
            ..AppStateUpdate::default()
        });
    });

    // Fetch on mount; fall back to the seed repository. Tracks nothing, so
    // it runs once.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let items = match crate::net::api::fetch_courses().await {
                Some(list) if !list.is_empty() => {
                    crate::store::courses::put_all(&list);
                    list
                }
                _ => seed_courses(),
            };
            courses.update(|c| {
                c.items = items;
                c.loading = false;
            });
        });
    });

    let on_open = Callback::new(move |course_id: String| {
        app_state::save(&AppStateUpdate {
            active_course_id: Some(Some(course_id.clone())),
            ..AppStateUpdate::default()
        });
        navigate(&format!("/chat/{course_id}"), NavigateOptions::default());
    });

    let on_toggle_layout = move |_| {
        ui.update(|u| {
            u.library_layout = match u.library_layout {
                LibraryLayout::Grid => LibraryLayout::List,
                LibraryLayout::List => LibraryLayout::Grid,
            };
        });
    };

    view! {
        <div class="courses-page">
            <div class="courses-page__toolbar">
                <h1>"Course Library"</h1>
                <input
                    class="courses-page__search"
                    placeholder="Search by subject or teacher..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <button class="btn courses-page__layout" on:click=on_toggle_layout>
                    {move || match ui.get().library_layout {
                        LibraryLayout::Grid => "List view",
                        LibraryLayout::List => "Grid view",
                    }}
                </button>
            </div>

            <Show
                when=move || !courses.get().loading
                fallback=move || view! { <p class="courses-page__loading">"Loading courses..."</p> }
            >
                <div
                    class="courses-page__cards"
                    class:courses-page__cards--list=move || {
                        ui.get().library_layout == LibraryLayout::List
                    }
                >
                    {move || {
                        let state = courses.get();
                        let filtered = filter_courses(&state.items, &query.get());
                        if filtered.is_empty() {
                            return view! {
                                <p class="courses-page__empty">"No courses match your search."</p>
                            }
                                .into_any();
                        }
                        filtered
                            .into_iter()
                            .map(|course| view! { <CourseCard course=course.clone() on_open=on_open/> })
                            .collect_view()
                            .into_any()
                    }}
                </div>
            </Show>
        </div>
    }
}
