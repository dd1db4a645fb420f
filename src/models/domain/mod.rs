pub mod answer;
pub mod form;
pub mod question;
pub mod score;
pub mod submission;
pub use answer::AnswerSet;
pub use form::Form;
pub use question::{Question, SubQuestion};
pub use score::Score;
pub use submission::RawSubmission;
