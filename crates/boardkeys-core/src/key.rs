//! Platform-agnostic key strokes and their classification into tokens.
//!
//! A [`KeyStroke`] carries what a keydown event reports: the physical key code
//! (`KeyE`, `Digit4`, `Escape`), the produced character, and the modifier
//! flags. [`KeyStroke::token`] resolves it to a [`Token`] the input state
//! machine understands.
//!
//! Resolution prefers the physical code so the mapping is layout independent.
//! Codes without a mapping fall back to the produced character, lower-cased,
//! which still lets a file letter or rank digit through.

use crate::square::{File, Rank};

/// Modifier keys held during a stroke.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Control key.
    pub ctrl: bool,
    /// Meta / Command key.
    pub meta: bool,
    /// Shift key.
    pub shift: bool,
    /// Alt / Option key.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self { ctrl: false, meta: false, shift: false, alt: false };

    /// Only Control held.
    pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };

    /// Only Meta held.
    pub const META: Self = Self { meta: true, ..Self::NONE };

    /// Control or Meta, the platform "command" modifier.
    pub fn command(self) -> bool {
        self.ctrl || self.meta
    }
}

/// A single keydown as reported by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyStroke {
    /// Physical key code (`KeyA`, `Digit1`, `Escape`, ...).
    pub code: String,
    /// Produced character or named key (`a`, `A`, `Escape`, ...).
    pub key: String,
    /// Modifiers held.
    pub modifiers: Modifiers,
}

impl KeyStroke {
    /// Stroke from raw code, key and modifiers.
    pub fn new(code: impl Into<String>, key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self { code: code.into(), key: key.into(), modifiers }
    }

    /// Unmodified stroke of a printable character on a US layout.
    ///
    /// Convenience for tests and scripted input: `'e'` becomes
    /// `KeyE`/`e`, `'4'` becomes `Digit4`/`4`.
    pub fn typed(c: char) -> Self {
        let code = if c.is_ascii_alphabetic() {
            format!("Key{}", c.to_ascii_uppercase())
        } else if c.is_ascii_digit() {
            format!("Digit{c}")
        } else {
            String::new()
        };
        Self::new(code, c.to_string(), Modifiers::NONE)
    }

    /// The Escape key.
    pub fn escape() -> Self {
        Self::new("Escape", "Escape", Modifiers::NONE)
    }

    /// Resolve the stroke to a token, ignoring modifiers.
    pub fn token(&self) -> Token {
        if let Some(token) = Token::from_code(&self.code) {
            return token;
        }

        let literal = self.key.to_lowercase();
        let mut chars = literal.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Token::from_char(c),
            _ => Token::Other(literal),
        }
    }

    /// Command chord that maps straight to undo or redo.
    ///
    /// Ctrl/Meta+Z undoes and Ctrl/Meta+Y redoes. The physical code and the
    /// literal character are both consulted, so the chord works even though
    /// the bare `KeyZ` code means "flip".
    pub fn command_chord(&self) -> Option<Token> {
        if !self.modifiers.command() {
            return None;
        }
        let literal = self.key.to_lowercase();
        if self.code == "KeyZ" || literal == "z" {
            Some(Token::Undo)
        } else if self.code == "KeyY" || literal == "y" {
            Some(Token::Redo)
        } else {
            None
        }
    }
}

/// Classified unit of keyboard input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// File letter `a`-`h`.
    File(File),
    /// Rank digit `1`-`8`.
    Rank(Rank),
    /// Abandon the move being typed.
    Cancel,
    /// Flip the board orientation.
    Flip,
    /// Step back one move.
    Undo,
    /// Step forward one move.
    Redo,
    /// Anything else, lower-cased. Never acted on.
    Other(String),
}

impl Token {
    /// Token for a physical key code, if the code has a fixed meaning.
    pub fn from_code(code: &str) -> Option<Self> {
        let token = match code {
            "Escape" => Self::Cancel,
            "KeyZ" => Self::Flip,
            "KeyU" => Self::Undo,
            "KeyY" | "KeyR" => Self::Redo,
            _ => {
                if let Some(letter) = code.strip_prefix("Key") {
                    let mut chars = letter.chars();
                    return match (chars.next(), chars.next()) {
                        (Some(c), None) => File::try_from(c.to_ascii_lowercase()).ok().map(Self::File),
                        _ => None,
                    };
                }
                if let Some(digit) = code.strip_prefix("Digit") {
                    let mut chars = digit.chars();
                    return match (chars.next(), chars.next()) {
                        (Some(c), None) => Rank::try_from(c).ok().map(Self::Rank),
                        _ => None,
                    };
                }
                return None;
            },
        };
        Some(token)
    }

    /// Token for a literal character.
    pub fn from_char(c: char) -> Self {
        if let Ok(file) = File::try_from(c) {
            Self::File(file)
        } else if let Ok(rank) = Rank::try_from(c) {
            Self::Rank(rank)
        } else {
            Self::Other(c.to_string())
        }
    }
}
