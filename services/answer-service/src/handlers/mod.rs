pub mod docs;
pub mod health;
pub mod question_answer;

pub use docs::*;
pub use health::*;
pub use question_answer::*;
