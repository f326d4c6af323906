pub mod choice;
pub mod question;
pub mod response;

pub use choice::Choice;
pub use question::{Question, QuestionRecord};
pub use response::ResponseEntry;
