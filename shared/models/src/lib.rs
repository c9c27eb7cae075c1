//! # DocQA Core Domain Models
//!
//! Data types shared by the answer service, the chat client and the batch
//! extractor.
//!
//! ## Key Models
//!
//! - **TranscriptEntry**: one chat message, tagged with the speaking role
//! - **ChunkRecord**: one line of the fine-tuning output file
//! - **QuestionAnswerRequest / QuestionAnswerResponse**: answer endpoint payloads
//! - **ChatSession**: per-session context (transcript and selected page)

pub mod transcript;
pub mod chunk;
pub mod question;
pub mod session;

pub use transcript::*;
pub use chunk::*;
pub use question::*;
pub use session::*;
