pub mod bank;
pub mod record;
pub mod session;

use std::fmt;

/// Topic a question belongs to. The discriminant is the code shown in the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    GeneralScience = 1,
    Biology = 2,
    Geography = 3,
}

impl Section {
    /// Every section, in menu order.
    pub const ALL: [Section; 3] = [
        Section::GeneralScience,
        Section::Biology,
        Section::Geography,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }

    pub fn from_code(code: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|s| i64::from(s.code()) == code)
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::GeneralScience => "GeneralScience",
            Section::Biology => "Biology",
            Section::Geography => "Geography",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One of the four answer labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionLetter {
    A,
    B,
    C,
    D,
}

impl OptionLetter {
    pub const ALL: [OptionLetter; 4] = [
        OptionLetter::A,
        OptionLetter::B,
        OptionLetter::C,
        OptionLetter::D,
    ];

    /// Case-insensitive: 'b' and 'B' both give `B`.
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'A' => Some(OptionLetter::A),
            'B' => Some(OptionLetter::B),
            'C' => Some(OptionLetter::C),
            'D' => Some(OptionLetter::D),
            _ => None,
        }
    }

    /// Accepts a line holding exactly one letter, surrounding whitespace ignored.
    pub fn parse(input: &str) -> Option<Self> {
        let mut chars = input.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_char(self) -> char {
        match self {
            OptionLetter::A => 'A',
            OptionLetter::B => 'B',
            OptionLetter::C => 'C',
            OptionLetter::D => 'D',
        }
    }
}

impl fmt::Display for OptionLetter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub correct: OptionLetter,
}

impl Question {
    /// Returns `None` when `correct` is not one of A-D.
    pub fn new(text: impl Into<String>, options: [&str; 4], correct: char) -> Option<Self> {
        Some(Self {
            text: text.into(),
            options: options.map(String::from),
            correct: OptionLetter::from_char(correct)?,
        })
    }

    pub fn check_answer(&self, input: char) -> bool {
        input.to_ascii_uppercase() == self.correct.as_char()
    }

    /// Options paired with their labels, in display order.
    pub fn labelled_options(&self) -> impl Iterator<Item = (OptionLetter, &str)> {
        OptionLetter::ALL
            .into_iter()
            .zip(self.options.iter().map(String::as_str))
    }
}

#[derive(Debug)]
pub enum QuizError {
    /// The input stream ended before the session finished.
    InputClosed,
    Io(std::io::Error),
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::InputClosed => f.write_str("input closed before the quiz was finished"),
            QuizError::Io(err) => write!(f, "i/o error: {err}"),
        }
    }
}

impl std::error::Error for QuizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            QuizError::InputClosed => None,
            QuizError::Io(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for QuizError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}
