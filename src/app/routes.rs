use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::app::{
    handlers::{
        backup_bucket_probe_handler, delete_backup_probe_segment_handler,
        delete_queue_probe_segment_handler, delete_title_handler, get_title_handler,
        put_title_handler, queue_probe_handler, BACKUP_PROBE_SEGMENT, QUEUE_PROBE_SEGMENT,
    },
    AppState,
};

/// Create the titles API router
pub fn create_titles_router(state: AppState) -> Router {
    Router::new()
        .route("/api/titles", post(put_title_handler).put(put_title_handler))
        // Connectivity probes; static segments win over `{isbn}`, so DELETE
        // on them is routed back to the title delete with the literal segment.
        .route(
            &format!("/api/titles/{QUEUE_PROBE_SEGMENT}"),
            get(queue_probe_handler).delete(delete_queue_probe_segment_handler),
        )
        .route(
            &format!("/api/titles/{BACKUP_PROBE_SEGMENT}"),
            get(backup_bucket_probe_handler).delete(delete_backup_probe_segment_handler),
        )
        .route(
            "/api/titles/{isbn}",
            get(get_title_handler).delete(delete_title_handler),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
