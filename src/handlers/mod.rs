pub mod auth_handler;
pub mod health_handler;
pub mod quiz_handler;
pub mod rating_handler;

pub use auth_handler::{google_auth, logout};
pub use health_handler::{health_check, health_check_live, health_check_ready};
pub use quiz_handler::generate_quiz;
pub use rating_handler::{check_rating, submit_rating};
