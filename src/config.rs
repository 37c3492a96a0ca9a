use std::env;
use std::path::PathBuf;

use crate::quiz::record::ResultRecorder;

pub const DEFAULT_RESULTS_FILE: &str = "results.txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub results_file: String,
    /// `None` means the desktop directory.
    pub results_dir: Option<PathBuf>,
}

impl Config {
    /// Reads `QUIZ_RESULTS_FILE` and `QUIZ_RESULTS_DIR`. Call `dotenv()` first
    /// for `.env` values to be picked up.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let results_file = lookup("QUIZ_RESULTS_FILE")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_RESULTS_FILE.to_string());

        let results_dir = lookup("QUIZ_RESULTS_DIR")
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Self {
            results_file,
            results_dir,
        }
    }

    /// Recorder for the configured file, on the desktop unless a directory
    /// is set.
    pub fn recorder(&self) -> ResultRecorder {
        match &self.results_dir {
            Some(dir) => ResultRecorder::new(dir.join(&self.results_file)),
            None => ResultRecorder::on_desktop(&self.results_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results_file: DEFAULT_RESULTS_FILE.to_string(),
            results_dir: None,
        }
    }
}
