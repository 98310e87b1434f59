//! Transient Notices
//!
//! Toast-style success and error messages. Every front end shows the same
//! texts; the board only tracks them, dismissal timing belongs to the view.

/// How long a notice stays on screen
pub const NOTICE_TTL_MS: u32 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Ordered collection of live notices
#[derive(Debug, Clone, Default)]
pub struct NoticeBoard {
    notices: Vec<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Post a notice and return its id
    pub fn push(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.notices.push(Notice {
            id: self.next_id,
            kind,
            message: message.into(),
        });
        self.next_id
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeKind::Error, message)
    }

    /// Remove a notice; returns false if it was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.notices.len();
        self.notices.retain(|n| n.id != id);
        self.notices.len() != before
    }

    /// Live notices, oldest first
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Most recent notice of a kind
    pub fn latest(&self, kind: NoticeKind) -> Option<&Notice> {
        self.notices.iter().rev().find(|n| n.kind == kind)
    }

    /// Take every live notice, leaving the board empty
    pub fn drain(&mut self) -> Vec<Notice> {
        std::mem::take(&mut self.notices)
    }

    pub fn len(&self) -> usize {
        self.notices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_increase() {
        let mut board = NoticeBoard::new();
        let a = board.error("Please select a service");
        let b = board.success("Booking confirmed successfully!");
        assert!(b > a);
        assert_eq!(board.len(), 2);
    }

    #[test]
    fn test_dismiss() {
        let mut board = NoticeBoard::new();
        let id = board.error("Failed to load staff members");
        assert!(board.dismiss(id));
        assert!(!board.dismiss(id));
        assert!(board.is_empty());
    }

    #[test]
    fn test_latest_by_kind() {
        let mut board = NoticeBoard::new();
        board.error("first");
        board.success("ok");
        board.error("second");

        assert_eq!(board.latest(NoticeKind::Error).unwrap().message, "second");
        assert_eq!(board.latest(NoticeKind::Success).unwrap().message, "ok");

        let drained = board.drain();
        assert_eq!(drained.len(), 3);
        assert!(board.latest(NoticeKind::Error).is_none());
    }
}
