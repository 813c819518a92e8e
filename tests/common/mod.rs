//! Common test utilities: each test gets an isolated application state over
//! a throwaway database file.

use actix_web::web;
use std::sync::Arc;
use std::time::SystemTime;
use tempfile::TempDir;

use star_forum::database::Database;
use star_forum::handlers::AppState;

pub struct TestApp {
    pub app_state: web::Data<AppState>,
    _temp_dir: TempDir,
}

#[allow(dead_code)]
impl TestApp {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let db_path = temp_dir.path().join("forum.db");
        let database = Arc::new(Database::new(&db_path).expect("failed to open test database"));

        let app_state = web::Data::new(AppState {
            database,
            start_time: SystemTime::now(),
        });

        Self {
            app_state,
            _temp_dir: temp_dir,
        }
    }

    pub fn app_state(&self) -> &web::Data<AppState> {
        &self.app_state
    }

    pub fn db(&self) -> &Arc<Database> {
        &self.app_state.database
    }

    /// Row count straight from the storage layer, for asserting that a
    /// rejected request persisted nothing.
    pub fn count_rows(&self, table: &str) -> i64 {
        let connection = self.db().connection();
        let conn = connection.lock().unwrap();
        conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
            row.get(0)
        })
        .unwrap()
    }
}
