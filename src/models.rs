use serde::{Deserialize, Serialize};

/// Identity the upstream authenticator attaches to a request. Only its
/// presence and the user id are ever inspected here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub user_id: i64,
    pub body: String,
}

/// An answer in the situation/task/action/result narrative format. All four
/// fields are required together; partial answers never reach the database.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub id: i64,
    pub question_id: i64,
    pub situation: String,
    pub task: String,
    pub action: String,
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: i64,
    pub answer_id: i64,
    pub comment: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AnswerWithComments {
    #[serde(flatten)]
    pub answer: Answer,
    pub comments: Vec<Comment>,
}

/// A question with its answers and each answer's comments, assembled by the
/// data-access layer as one composite read.
#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionThread {
    #[serde(flatten)]
    pub question: Question,
    pub answers: Vec<AnswerWithComments>,
}

// Request payloads keep their fields optional so the handlers own the
// missing-field reporting instead of the JSON deserializer.

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateAnswerRequest {
    pub situation: Option<String>,
    pub task: Option<String>,
    pub action: Option<String>,
    pub result: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateCommentRequest {
    pub comment: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ServerStatus {
    pub status: String,
    pub version: String,
    pub uptime: u64,
}
