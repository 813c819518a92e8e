use super::main_handlers::AppState;
use crate::error::AppError;
use crate::models::CreateAnswerRequest;
use actix_web::{web, HttpResponse, Result};

pub async fn create_answer(
    data: web::Data<AppState>,
    path: web::Path<String>,
    request: web::Json<CreateAnswerRequest>,
) -> Result<HttpResponse, AppError> {
    let question_id = path
        .into_inner()
        .parse::<i64>()
        .ok()
        .filter(|id| *id != 0)
        .ok_or_else(|| AppError::Unauthorized("You did not include a Question ID".to_string()))?;

    let body = request.into_inner();
    let (situation, task, action, result) = match (
        body.situation.filter(|s| !s.is_empty()),
        body.task.filter(|s| !s.is_empty()),
        body.action.filter(|s| !s.is_empty()),
        body.result.filter(|s| !s.is_empty()),
    ) {
        (Some(situation), Some(task), Some(action), Some(result)) => {
            (situation, task, action, result)
        }
        _ => {
            return Err(AppError::Unauthorized(
                "Your Answer was not Complete".to_string(),
            ));
        }
    };

    // Existence check and insert are two separate statements; a question
    // deleted between them fails the insert on the foreign key instead of
    // leaving an orphaned answer.
    if data.database.get_question_by_id(question_id)?.is_none() {
        return Err(AppError::Unauthorized(format!(
            "There is no Question with ID {question_id}"
        )));
    }

    let answer = data
        .database
        .create_answer(question_id, &situation, &task, &action, &result)
        .map_err(|e| {
            tracing::error!("Failed to insert answer for question {question_id}: {e}");
            AppError::Internal("Error Adding Your Answer to the Database".to_string())
        })?;

    Ok(HttpResponse::Ok().json(answer))
}
