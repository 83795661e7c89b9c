// src/routes.rs

use axum::{Router, http::Method, routing::post};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{handlers::quiz, state::AppState};

/// Assembles the main application router.
///
/// * Mounts the quiz routes under `/quizzes`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (in-memory quiz store).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    let quiz_routes = Router::new()
        .route("/", post(quiz::create_quiz).get(quiz::list_quizzes))
        .route(
            "/{quiz_id}/questions",
            post(quiz::add_question).get(quiz::get_questions),
        )
        .route("/{quiz_id}/submit", post(quiz::submit_answers));

    Router::new()
        .nest("/quizzes", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
