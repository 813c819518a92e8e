use super::main_handlers::AppState;
use crate::error::AppError;
use crate::models::{CreateQuestionRequest, UserInfo};
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse, Result};

pub async fn add_question(
    data: web::Data<AppState>,
    request: web::Json<CreateQuestionRequest>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    // The authenticator upstream attaches the identity; a request reaching
    // this handler without one is a middleware failure, not a client error.
    let user = req
        .extensions()
        .get::<UserInfo>()
        .cloned()
        .ok_or_else(|| AppError::Internal("No User attached to the Request".to_string()))?;

    let question = request
        .into_inner()
        .question
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::InvalidRequest("No Question on the Request Body".to_string()))?;

    let created = data.database.create_question(user.id, &question)?;

    Ok(HttpResponse::Ok().json(created))
}

pub async fn get_all_questions(data: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let questions = data.database.get_all_questions()?;
    Ok(HttpResponse::Ok().json(questions))
}

pub async fn find_questions_by_user(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let user_id: i64 = path
        .into_inner()
        .parse()
        .map_err(|_| AppError::InvalidRequest("Invalid userId format".to_string()))?;

    let questions = data.database.get_questions_by_user(user_id)?;
    Ok(HttpResponse::Ok().json(questions))
}

pub async fn find_one_question(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question_id: i64 = path
        .into_inner()
        .parse()
        .map_err(|_| AppError::InvalidRequest("Invalid questionId format".to_string()))?;

    let thread = data
        .database
        .get_question_thread(question_id)?
        .ok_or_else(|| AppError::NotFound("No Question Found".to_string()))?;

    Ok(HttpResponse::Ok().json(thread))
}

pub async fn delete_question(
    data: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let question_id = path.into_inner();

    if question_id.is_empty() {
        return Err(AppError::InvalidRequest(
            "No questionId provided".to_string(),
        ));
    }

    let question_id: i64 = question_id
        .parse()
        .map_err(|_| AppError::InvalidRequest("Invalid questionId format".to_string()))?;

    data.database.delete_question(question_id)?;

    Ok(HttpResponse::NoContent().finish())
}
