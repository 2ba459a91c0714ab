//! Transient user-facing notices raised by page actions.
//!
//! DESIGN
//! ======
//! Pages push a notice and forget about it. The banner shows the newest
//! notice and dismisses it by id after a timeout, so a stale timer can never
//! clear a newer message.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NoticeLevel {
    #[default]
    Info,
    Success,
    Error,
}

impl NoticeLevel {
    pub fn css_modifier(self) -> &'static str {
        match self {
            NoticeLevel::Info => "notice--info",
            NoticeLevel::Success => "notice--success",
            NoticeLevel::Error => "notice--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub message: String,
}

/// Most recent notice plus the id sequence.
#[derive(Clone, Debug, Default)]
pub struct NoticeState {
    pub current: Option<Notice>,
    pub seq: u64,
}

impl NoticeState {
    /// Replace the current notice; returns its id.
    pub fn push(&mut self, level: NoticeLevel, message: impl Into<String>) -> u64 {
        self.seq += 1;
        self.current = Some(Notice { id: self.seq, level, message: message.into() });
        self.seq
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Success, message)
    }

    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Error, message)
    }

    pub fn info(&mut self, message: impl Into<String>) -> u64 {
        self.push(NoticeLevel::Info, message)
    }

    /// Clear the current notice only if it is still `id`.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}
