use std::fs;
use std::io;

use chrono::{Local, TimeZone};
use tempfile::TempDir;

use console_quiz::quiz::{
    bank::QuestionBank,
    record::{PlayerResult, ResultRecorder},
    session::Session,
    QuizError, Section,
};

fn answer_key(bank: &QuestionBank, section: Section) -> String {
    bank.questions(section)
        .iter()
        .map(|q| format!("{}\n", q.correct))
        .collect()
}

#[test]
fn perfect_general_science_run_is_recorded() {
    let tmp = TempDir::new().expect("tmp");
    let recorder = ResultRecorder::new(tmp.path().join("results.txt"));
    let bank = QuestionBank::new();

    let input = format!("Alice\n1\n{}", answer_key(&bank, Section::GeneralScience));
    let mut output = Vec::new();
    let result = Session::new(&bank, input.as_bytes(), &mut output)
        .run()
        .expect("session");

    assert_eq!(result.score(), 11);
    assert_eq!(result.total(), 11);

    recorder.append(&result).expect("append");
    let contents = fs::read_to_string(recorder.path()).expect("read");
    assert_eq!(contents, format!("{result}\n"));
    assert!(contents.starts_with("Alice | GeneralScience | 11/11 | "));
}

#[test]
fn every_section_reports_its_own_total() {
    let bank = QuestionBank::new();
    for section in Section::ALL {
        let total = bank.questions(section).len();
        let input = format!("P\n{}\n{}", section.code(), "d\n".repeat(total));
        let result = Session::new(&bank, input.as_bytes(), io::sink())
            .run()
            .expect("session");
        assert_eq!(result.total(), total, "{section}");
        assert_eq!(result.section_name(), section.name());
    }
}

#[test]
fn appends_keep_earlier_lines() {
    let tmp = TempDir::new().expect("tmp");
    let recorder = ResultRecorder::new(tmp.path().join("results.txt"));
    let t = Local.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap();

    let first = PlayerResult::with_timestamp("Alice", "Biology", 2, 3, t);
    let second = PlayerResult::with_timestamp("", "Geography", 4, 4, t);
    recorder.append(&first).expect("append first");
    recorder.append(&second).expect("append second");

    let contents = fs::read_to_string(recorder.path()).expect("read");
    assert_eq!(
        contents,
        "Alice | Biology | 2/3 | 2025-01-02 03:04:05\n\
         Anonymous | Geography | 4/4 | 2025-01-02 03:04:05\n"
    );
}

#[test]
fn append_into_missing_directory_fails() {
    let tmp = TempDir::new().expect("tmp");
    let recorder = ResultRecorder::new(tmp.path().join("nope").join("results.txt"));
    let result = PlayerResult::new("Alice", "Biology", 0, 3);
    assert!(recorder.append(&result).is_err());
}

#[test]
fn interrupted_session_records_nothing() {
    let tmp = TempDir::new().expect("tmp");
    let recorder = ResultRecorder::new(tmp.path().join("results.txt"));
    let bank = QuestionBank::new();

    let outcome = Session::new(&bank, "Alice\n3\nC\nB\n".as_bytes(), io::sink()).run();
    match outcome {
        Ok(result) => recorder.append(&result).expect("append"),
        Err(err) => assert!(matches!(err, QuizError::InputClosed)),
    }
    assert!(!recorder.path().exists());
}

#[test]
fn desktop_recorder_uses_file_name() {
    let recorder = ResultRecorder::on_desktop("results.txt");
    assert_eq!(
        recorder.path().file_name().and_then(|n| n.to_str()),
        Some("results.txt")
    );
}
