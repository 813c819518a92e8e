// Main handlers (system/health handlers)
pub mod main_handlers;
pub use main_handlers::AppState;

// Question handlers module
pub mod question_handlers;

// Answer handlers module
pub mod answer_handlers;

// Comment handlers module
pub mod comment_handlers;
