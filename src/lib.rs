//! Console multiple-choice quiz: pick a section, answer its questions, and the
//! score is appended to a results file.

pub mod config;
pub mod quiz;
