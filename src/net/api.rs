//! REST API helpers for communicating with the backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net` against same-origin
//! endpoints. Server-side (SSR): stubs returning `None`/error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option`/`Result` outputs instead of panics so fetch failures
//! degrade UI behavior (fallback lists, in-chat error bubbles) without
//! crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ChatReply, Course, ForumEntry, IngestStatus, LoginResponse, MaterialRecord};
#[cfg(feature = "hydrate")]
use crate::util::session;

#[cfg(any(test, feature = "hydrate"))]
fn materials_endpoint(course_id: &str) -> String {
    format!("/api/materials/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn material_delete_endpoint(course_id: &str, file_name: &str) -> String {
    format!("/api/materials/{course_id}/{file_name}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ingest_endpoint(course_id: &str) -> String {
    format!("/api/ingest/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn ingest_status_endpoint(course_id: &str) -> String {
    format!("/api/ingest/status/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn forum_history_endpoint(course_id: &str) -> String {
    format!("/api/chat/history/{course_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(what: &str, status: u16) -> String {
    format!("{what} failed: {status}")
}

/// Attach the bearer token when a session exists.
#[cfg(feature = "hydrate")]
fn with_auth(req: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match session::token() {
        Some(token) => req.header("Authorization", &session::bearer(&token)),
        None => req,
    }
}

/// Pull the backend's `detail` message out of a non-OK response, falling
/// back to `fallback` when the body is not the expected error shape.
#[cfg(feature = "hydrate")]
async fn error_detail(resp: gloo_net::http::Response, fallback: String) -> String {
    match resp.json::<super::types::ApiErrorBody>().await {
        Ok(body) => body.detail.unwrap_or(fallback),
        Err(_) => fallback,
    }
}

/// Sign in via `POST /api/auth/login`.
///
/// # Errors
///
/// Returns the backend's `detail` message, or a transport error string.
pub async fn login(email: &str, password: &str) -> Result<LoginResponse, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/login")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message("login", resp.status());
            return Err(error_detail(resp, fallback).await);
        }
        resp.json::<LoginResponse>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/register`.
///
/// # Errors
///
/// Returns the backend's `detail` message, or a transport error string.
pub async fn register(email: &str, password: &str, name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "name": name });
        let resp = gloo_net::http::Request::post("/api/auth/register")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let fallback = request_failed_message("register", resp.status());
            return Err(error_detail(resp, fallback).await);
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err("not available on server".to_owned())
    }
}

/// Fetch the course library from `GET /api/courses`.
/// Returns `None` on failure or on the server.
pub async fn fetch_courses() -> Option<Vec<Course>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/courses").send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<Course>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch a course's materials from `GET /api/materials/{course_id}`.
/// Returns `None` on failure or on the server.
pub async fn fetch_materials(course_id: &str) -> Option<Vec<MaterialRecord>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&materials_endpoint(course_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<MaterialRecord>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// Delete one material via `DELETE /api/materials/{course_id}/{file_name}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn delete_material(course_id: &str, file_name: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::delete(&material_delete_endpoint(
            course_id, file_name,
        )))
        .send()
        .await
        .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("delete", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (course_id, file_name);
        Err("not available on server".to_owned())
    }
}

/// Upload materials via multipart `POST /api/upload`.
///
/// The form carries `course_id` plus one `files` part per selected file;
/// the browser supplies the multipart content type.
///
/// # Errors
///
/// Returns an error string if the request fails.
#[cfg(feature = "hydrate")]
pub async fn upload_materials(course_id: &str, files: &[web_sys::File]) -> Result<(), String> {
    let form = web_sys::FormData::new().map_err(|_| "form construction failed".to_owned())?;
    form.append_with_str("course_id", course_id)
        .map_err(|_| "form construction failed".to_owned())?;
    for file in files {
        form.append_with_blob_and_filename("files", file, &file.name())
            .map_err(|_| "form construction failed".to_owned())?;
    }

    let resp = with_auth(gloo_net::http::Request::post("/api/upload"))
        .body(form)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(request_failed_message("upload", resp.status()));
    }
    Ok(())
}

/// Kick off a workspace resync via `POST /api/ingest/{course_id}`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn start_ingest(course_id: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post(&ingest_endpoint(course_id)))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("ingest", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        Err("not available on server".to_owned())
    }
}

/// Poll workspace indexing via `GET /api/ingest/status/{course_id}`.
/// Returns `None` on failure or on the server.
pub async fn fetch_ingest_status(course_id: &str) -> Option<IngestStatus> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&ingest_status_endpoint(course_id))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<IngestStatus>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// Fetch the shared forum feed from `GET /api/chat/history/{course_id}`.
///
/// Works for guests; the bearer token is attached when present so the
/// server can include course-restricted entries.
pub async fn fetch_forum_history(course_id: &str) -> Option<Vec<ForumEntry>> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::get(&forum_history_endpoint(course_id)))
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Vec<ForumEntry>>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = course_id;
        None
    }
}

/// Submit a chat request (fresh or ticket-bearing poll) via `POST /api/chat`.
///
/// # Errors
///
/// Returns an error string on transport failure or a non-OK status.
pub async fn send_chat(payload: &serde_json::Value) -> Result<ChatReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = with_auth(gloo_net::http::Request::post("/api/chat"))
            .json(payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("chat", resp.status()));
        }
        resp.json::<ChatReply>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = payload;
        Err("not available on server".to_owned())
    }
}
