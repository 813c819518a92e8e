use super::main_handlers::AppState;
use crate::error::AppError;
use crate::models::CreateCommentRequest;
use actix_web::{web, HttpResponse, Result};

pub async fn create_comment(
    data: web::Data<AppState>,
    path: web::Path<(String, String)>,
    request: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse, AppError> {
    let (question_id, answer_id) = path.into_inner();

    let question_id = question_id
        .parse::<i64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::InvalidRequest("Invalid Question ID Provided".to_string()))?;

    let answer_id = answer_id
        .parse::<i64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::InvalidRequest("Invalid Answer ID Provided".to_string()))?;

    let comment = request
        .into_inner()
        .comment
        .filter(|c| !c.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("Invalid Comment Provided".to_string()))?;

    // The lookup is scoped to the question named in the path, so an answer
    // id belonging to a different question is treated as absent.
    if data
        .database
        .find_answer_for_question(question_id, answer_id)?
        .is_none()
    {
        return Err(AppError::NotFound("Answer not found".to_string()));
    }

    let created = data.database.create_comment(answer_id, &comment)?;

    Ok(HttpResponse::Ok().json(created))
}
