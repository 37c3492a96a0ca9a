use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

pub const ANONYMOUS: &str = "Anonymous";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of one finished session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerResult {
    name: String,
    section_name: String,
    score: usize,
    total: usize,
    timestamp: DateTime<Local>,
}

impl PlayerResult {
    /// Timestamped with the current local time.
    pub fn new(name: &str, section_name: &str, score: usize, total: usize) -> Self {
        Self::with_timestamp(name, section_name, score, total, Local::now())
    }

    pub fn with_timestamp(
        name: &str,
        section_name: &str,
        score: usize,
        total: usize,
        timestamp: DateTime<Local>,
    ) -> Self {
        let name = if name.trim().is_empty() { ANONYMOUS } else { name };
        Self {
            name: name.to_string(),
            section_name: section_name.to_string(),
            score: score.min(total),
            total,
            timestamp,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn section_name(&self) -> &str {
        &self.section_name
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn timestamp(&self) -> DateTime<Local> {
        self.timestamp
    }
}

/// `<Name> | <SectionName> | <Score>/<Total> | <Timestamp>`
impl fmt::Display for PlayerResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {}/{} | {}",
            escape_field(&self.name),
            escape_field(&self.section_name),
            self.score,
            self.total,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

/// Keeps a field on one line and free of bare `|` delimiters.
fn escape_field(field: &str) -> String {
    let mut escaped = String::with_capacity(field.len());
    for c in field.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '|' => escaped.push_str("\\|"),
            c if c.is_control() => escaped.push(' '),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Appends one line per result to a text file.
#[derive(Debug, Clone)]
pub struct ResultRecorder {
    path: PathBuf,
}

impl ResultRecorder {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `file_name` inside the user's desktop directory, or the home directory
    /// (then the working directory) when there is none.
    pub fn on_desktop(file_name: &str) -> Self {
        Self::new(desktop_dir().join(file_name))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn append(&self, result: &PlayerResult) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{result}")?;
        log::info!("Saved result for {} to {}", result.name(), self.path.display());
        Ok(())
    }
}

pub fn desktop_dir() -> PathBuf {
    dirs::desktop_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}
