//! Centralized route configuration for the forum API.
//!
//! Both the main server and the integration tests configure their routes
//! through this function, so the two always agree on the table.

use crate::handlers::{answer_handlers, comment_handlers, main_handlers, question_handlers};
use crate::middleware::IdentityMiddleware;
use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .wrap(IdentityMiddleware)
            .route("/health", web::get().to(main_handlers::health_check))
            .route(
                "/questions",
                web::get().to(question_handlers::get_all_questions),
            )
            .route("/questions", web::post().to(question_handlers::add_question))
            .route(
                "/questions/{id}",
                web::get().to(question_handlers::find_one_question),
            )
            .route(
                "/questions/{id}",
                web::delete().to(question_handlers::delete_question),
            )
            .route(
                "/questions/{id}/answers",
                web::post().to(answer_handlers::create_answer),
            )
            .route(
                "/questions/{id}/answers/{answer_id}/comments",
                web::post().to(comment_handlers::create_comment),
            )
            .route(
                "/users/{id}/questions",
                web::get().to(question_handlers::find_questions_by_user),
            ),
    );
}
