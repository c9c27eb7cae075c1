//! Chat session context.
//!
//! Holds everything a single chat session mutates: the append-only
//! transcript and the selected page. Handlers receive the session explicitly.

use thiserror::Error;

use crate::transcript::{Role, TranscriptEntry};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("page {page} is out of range (document has {total_pages} pages)")]
    PageOutOfRange { page: usize, total_pages: usize },
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    messages: Vec<TranscriptEntry>,
    selected_page_number: usize,
    total_pages: usize,
}

impl ChatSession {
    pub fn new(total_pages: usize) -> Self {
        Self {
            messages: Vec::new(),
            selected_page_number: 0,
            total_pages,
        }
    }

    pub fn messages(&self) -> &[TranscriptEntry] {
        &self.messages
    }

    /// Zero-based index of the selected page.
    pub fn selected_page_number(&self) -> usize {
        self.selected_page_number
    }

    pub fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Select a page by zero-based index. The selection is unchanged on error.
    pub fn select_page(&mut self, page_index: usize) -> Result<(), SessionError> {
        if page_index >= self.total_pages {
            return Err(SessionError::PageOutOfRange {
                page: page_index + 1,
                total_pages: self.total_pages,
            });
        }
        self.selected_page_number = page_index;
        Ok(())
    }

    /// Select a page the way it is shown to the user, starting at 1.
    pub fn select_display_page(&mut self, page: usize) -> Result<(), SessionError> {
        match page.checked_sub(1) {
            Some(index) => self.select_page(index),
            None => Err(SessionError::PageOutOfRange {
                page,
                total_pages: self.total_pages,
            }),
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) {
        self.push(Role::User, content);
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) {
        self.push(Role::Assistant, content);
    }

    fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(TranscriptEntry {
            role,
            content: content.into(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_session_starts_on_first_page() {
        let session = ChatSession::new(15);
        assert_eq!(session.selected_page_number(), 0);
        assert!(session.messages().is_empty());
    }

    #[test]
    fn test_transcript_is_ordered() {
        let mut session = ChatSession::new(3);
        session.push_user("What animal?");
        session.push_assistant("A fox");
        session.push_user("What colour?");

        let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Assistant, Role::User]);
        assert_eq!(session.messages()[1].content, "A fox");
    }

    #[test]
    fn test_display_page_is_one_based() {
        let mut session = ChatSession::new(3);
        session.select_display_page(3).unwrap();
        assert_eq!(session.selected_page_number(), 2);

        assert_eq!(
            session.select_display_page(0),
            Err(SessionError::PageOutOfRange { page: 0, total_pages: 3 })
        );
        assert_eq!(
            session.select_display_page(4),
            Err(SessionError::PageOutOfRange { page: 4, total_pages: 3 })
        );
        assert_eq!(session.selected_page_number(), 2);
    }

    #[test]
    fn test_empty_document_rejects_every_page() {
        let mut session = ChatSession::new(0);
        assert!(session.select_page(0).is_err());
        assert_eq!(session.selected_page_number(), 0);
    }

    proptest! {
        #[test]
        fn prop_selected_page_stays_in_bounds(
            total in 1usize..50,
            picks in proptest::collection::vec(0usize..100, 0..20),
        ) {
            let mut session = ChatSession::new(total);
            for pick in picks {
                let _ = session.select_page(pick);
                prop_assert!(session.selected_page_number() < total);
            }
        }
    }
}
