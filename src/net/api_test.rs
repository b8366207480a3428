use super::*;

#[test]
fn endpoint_builders_interpolate_course_id() {
    assert_eq!(materials_endpoint("c1"), "/api/materials/c1");
    assert_eq!(ingest_endpoint("c1"), "/api/ingest/c1");
    assert_eq!(ingest_status_endpoint("c1"), "/api/ingest/status/c1");
    assert_eq!(forum_history_endpoint("c1"), "/api/chat/history/c1");
}

#[test]
fn delete_endpoint_keys_on_course_and_file_name() {
    assert_eq!(
        material_delete_endpoint("c1", "week3.pdf"),
        "/api/materials/c1/week3.pdf"
    );
}

#[test]
fn request_failed_message_names_operation_and_status() {
    assert_eq!(request_failed_message("upload", 413), "upload failed: 413");
    assert_eq!(request_failed_message("chat", 500), "chat failed: 500");
}

#[test]
fn ssr_stubs_degrade_without_panicking() {
    futures_lite_block_on(async {
        assert!(fetch_courses().await.is_none());
        assert!(fetch_materials("c1").await.is_none());
        assert!(fetch_ingest_status("c1").await.is_none());
        assert!(fetch_forum_history("c1").await.is_none());
        assert!(login("a@b.c", "pw").await.is_err());
        assert!(send_chat(&serde_json::json!({})).await.is_err());
    });
}

/// Minimal executor for futures that are immediately ready (the SSR stubs).
fn futures_lite_block_on<F: std::future::Future<Output = ()>>(fut: F) {
    use std::pin::pin;
    use std::sync::Arc;
    use std::task::{Context, Poll, Wake, Waker};

    struct NoopWake;
    impl Wake for NoopWake {
        fn wake(self: Arc<Self>) {}
    }

    let waker = Waker::from(Arc::new(NoopWake));
    let mut cx = Context::from_waker(&waker);
    let mut fut = pin!(fut);
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(()) => {}
        Poll::Pending => panic!("SSR stubs must resolve immediately"),
    }
}
