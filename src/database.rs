use crate::error::{AppError, AppResult};
use crate::models::{Answer, AnswerWithComments, Comment, Question, QuestionThread};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub type DbConnection = Arc<Mutex<Connection>>;

pub struct Database {
    connection: DbConnection,
}

impl Database {
    pub fn new(db_path: &Path) -> AppResult<Self> {
        // Ensure the database directory exists
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;

        // Enable foreign key constraints (SQLite3 has them disabled by default)
        conn.execute("PRAGMA foreign_keys = ON", [])?;

        let database = Database {
            connection: Arc::new(Mutex::new(conn)),
        };

        database.run_migrations()?;

        Ok(database)
    }

    #[allow(dead_code)]
    pub fn connection(&self) -> DbConnection {
        Arc::clone(&self.connection)
    }

    fn conn(&self) -> AppResult<MutexGuard<'_, Connection>> {
        self.connection
            .lock()
            .map_err(|e| AppError::Internal(format!("Failed to acquire database lock: {e}")))
    }

    fn run_migrations(&self) -> AppResult<()> {
        let conn = self.conn()?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS questions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                user_id INTEGER NOT NULL,
                body TEXT NOT NULL
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_questions_user_id ON questions(user_id)",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS answers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                question_id INTEGER NOT NULL,
                situation TEXT NOT NULL,
                task TEXT NOT NULL,
                action TEXT NOT NULL,
                result TEXT NOT NULL,
                FOREIGN KEY (question_id) REFERENCES questions (id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_answers_question_id ON answers(question_id)",
            [],
        )?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS comments (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                answer_id INTEGER NOT NULL,
                comment TEXT NOT NULL,
                FOREIGN KEY (answer_id) REFERENCES answers (id)
            )",
            [],
        )?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_comments_answer_id ON comments(answer_id)",
            [],
        )?;

        tracing::info!("Database migrations completed");
        Ok(())
    }

    pub fn create_question(&self, user_id: i64, body: &str) -> AppResult<Question> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO questions (user_id, body) VALUES (?, ?)",
            params![user_id, body],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!("Created question {} for user {}", id, user_id);

        Ok(Question {
            id,
            user_id,
            body: body.to_string(),
        })
    }

    pub fn get_all_questions(&self) -> AppResult<Vec<Question>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare("SELECT id, user_id, body FROM questions ORDER BY id ASC")?;

        let question_iter = stmt.query_map([], |row| {
            Ok(Question {
                id: row.get(0)?,
                user_id: row.get(1)?,
                body: row.get(2)?,
            })
        })?;

        let mut questions = Vec::new();
        for question in question_iter {
            questions.push(question?);
        }

        Ok(questions)
    }

    pub fn get_questions_by_user(&self, user_id: i64) -> AppResult<Vec<Question>> {
        let conn = self.conn()?;

        let mut stmt = conn.prepare(
            "SELECT id, user_id, body FROM questions WHERE user_id = ? ORDER BY id ASC",
        )?;

        let question_iter = stmt.query_map([user_id], |row| {
            Ok(Question {
                id: row.get(0)?,
                user_id: row.get(1)?,
                body: row.get(2)?,
            })
        })?;

        let mut questions = Vec::new();
        for question in question_iter {
            questions.push(question?);
        }

        Ok(questions)
    }

    pub fn get_question_by_id(&self, id: i64) -> AppResult<Option<Question>> {
        let conn = self.conn()?;

        let question = conn
            .query_row(
                "SELECT id, user_id, body FROM questions WHERE id = ?",
                [id],
                |row| {
                    Ok(Question {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        body: row.get(2)?,
                    })
                },
            )
            .optional()?;

        Ok(question)
    }

    /// Fetches a question together with its answers and each answer's
    /// comments, assembled into one nested structure.
    pub fn get_question_thread(&self, id: i64) -> AppResult<Option<QuestionThread>> {
        let conn = self.conn()?;

        let question = conn
            .query_row(
                "SELECT id, user_id, body FROM questions WHERE id = ?",
                [id],
                |row| {
                    Ok(Question {
                        id: row.get(0)?,
                        user_id: row.get(1)?,
                        body: row.get(2)?,
                    })
                },
            )
            .optional()?;

        let Some(question) = question else {
            return Ok(None);
        };

        let mut answer_stmt = conn.prepare(
            "SELECT id, question_id, situation, task, action, result
             FROM answers WHERE question_id = ? ORDER BY id ASC",
        )?;

        let answer_iter = answer_stmt.query_map([id], |row| {
            Ok(Answer {
                id: row.get(0)?,
                question_id: row.get(1)?,
                situation: row.get(2)?,
                task: row.get(3)?,
                action: row.get(4)?,
                result: row.get(5)?,
            })
        })?;

        let mut comment_stmt = conn.prepare(
            "SELECT id, answer_id, comment FROM comments WHERE answer_id = ? ORDER BY id ASC",
        )?;

        let mut answers = Vec::new();
        for answer in answer_iter {
            let answer = answer?;

            let comment_iter = comment_stmt.query_map([answer.id], |row| {
                Ok(Comment {
                    id: row.get(0)?,
                    answer_id: row.get(1)?,
                    comment: row.get(2)?,
                })
            })?;

            let mut comments = Vec::new();
            for comment in comment_iter {
                comments.push(comment?);
            }

            answers.push(AnswerWithComments { answer, comments });
        }

        Ok(Some(QuestionThread { question, answers }))
    }

    /// Removes a question and its dependents. Comments go first, then
    /// answers, then the question row itself, so no orphans survive a
    /// partial failure. Deleting an id with no matching row is a success.
    pub fn delete_question(&self, id: i64) -> AppResult<()> {
        let conn = self.conn()?;

        conn.execute(
            "DELETE FROM comments WHERE answer_id IN
                 (SELECT id FROM answers WHERE question_id = ?)",
            [id],
        )?;
        conn.execute("DELETE FROM answers WHERE question_id = ?", [id])?;
        let rows_affected = conn.execute("DELETE FROM questions WHERE id = ?", [id])?;

        tracing::info!("Deleted question {} ({} rows)", id, rows_affected);
        Ok(())
    }

    pub fn create_answer(
        &self,
        question_id: i64,
        situation: &str,
        task: &str,
        action: &str,
        result: &str,
    ) -> AppResult<Answer> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO answers (question_id, situation, task, action, result)
             VALUES (?, ?, ?, ?, ?)",
            params![question_id, situation, task, action, result],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!("Created answer {} for question {}", id, question_id);

        Ok(Answer {
            id,
            question_id,
            situation: situation.to_string(),
            task: task.to_string(),
            action: action.to_string(),
            result: result.to_string(),
        })
    }

    /// Looks up an answer scoped to the question it belongs to. An answer id
    /// paired with a different question's id yields no row.
    pub fn find_answer_for_question(
        &self,
        question_id: i64,
        answer_id: i64,
    ) -> AppResult<Option<Answer>> {
        let conn = self.conn()?;

        let answer = conn
            .query_row(
                "SELECT answers.id, answers.question_id, answers.situation,
                        answers.task, answers.action, answers.result
                 FROM questions
                 INNER JOIN answers ON questions.id = answers.question_id
                 WHERE questions.id = ? AND answers.id = ?",
                params![question_id, answer_id],
                |row| {
                    Ok(Answer {
                        id: row.get(0)?,
                        question_id: row.get(1)?,
                        situation: row.get(2)?,
                        task: row.get(3)?,
                        action: row.get(4)?,
                        result: row.get(5)?,
                    })
                },
            )
            .optional()?;

        Ok(answer)
    }

    pub fn create_comment(&self, answer_id: i64, comment: &str) -> AppResult<Comment> {
        let conn = self.conn()?;

        conn.execute(
            "INSERT INTO comments (answer_id, comment) VALUES (?, ?)",
            params![answer_id, comment],
        )?;

        let id = conn.last_insert_rowid();
        tracing::info!("Created comment {} on answer {}", id, answer_id);

        Ok(Comment {
            id,
            answer_id,
            comment: comment.to_string(),
        })
    }
}
