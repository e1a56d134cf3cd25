//! Widget controls and user-facing notices.

use std::fmt;

/// One of the board widget's own buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
    /// Flip the board orientation.
    Flip,
}

impl Control {
    /// Verb phrase used in feedback ("cannot undo").
    pub fn verb(self) -> &'static str {
        match self {
            Self::Undo => "undo",
            Self::Redo => "redo",
            Self::Flip => "flip board",
        }
    }

    /// Notice shown after a successful click.
    pub fn success_text(self) -> &'static str {
        match self {
            Self::Undo => "↩ Undo",
            Self::Redo => "↪ Redo",
            Self::Flip => "Board flipped",
        }
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.verb())
    }
}

/// Notice styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// Progress or success.
    Info,
    /// Something could not be done.
    Error,
}

/// Transient message for the feedback surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// Text shown to the user.
    pub text: String,
    /// Styling.
    pub kind: NoticeKind,
}

impl Notice {
    /// Informational notice.
    pub fn info(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Info }
    }

    /// Error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: NoticeKind::Error }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
