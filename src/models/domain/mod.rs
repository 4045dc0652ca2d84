pub mod quiz_question;
pub mod quiz_request;
pub mod saved_quiz;
pub mod user;

pub use quiz_question::QuizQuestion;
pub use quiz_request::{Difficulty, QuizCategory};
pub use saved_quiz::SavedQuiz;
pub use user::User;
