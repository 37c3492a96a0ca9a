use std::io::{BufRead, Write};

use crate::quiz::bank::QuestionBank;
use crate::quiz::record::PlayerResult;
use crate::quiz::{OptionLetter, Question, QuizError, Section};

/// Where the player currently is in the quiz.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    AwaitName,
    AwaitSection {
        name: String,
    },
    Answering {
        name: String,
        section: Section,
        question_number: usize,
        score: usize,
    },
    Done(PlayerResult),
}

/// One play-through for one player over a line-based input and an output sink.
pub struct Session<'a, R, W> {
    bank: &'a QuestionBank,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Session<'a, R, W> {
    pub fn new(bank: &'a QuestionBank, input: R, output: W) -> Self {
        Self {
            bank,
            input,
            output,
        }
    }

    /// Drives the session to completion. Nothing is returned for a quiz the
    /// input ran out on.
    pub fn run(mut self) -> Result<PlayerResult, QuizError> {
        let mut state = State::AwaitName;
        loop {
            state = match self.step(state)? {
                State::Done(result) => return Ok(result),
                next => next,
            };
        }
    }

    /// Performs the reads and writes of `state` and returns the state after it.
    pub fn step(&mut self, state: State) -> Result<State, QuizError> {
        match state {
            State::AwaitName => {
                let name = self.prompt("Enter your name: ")?;
                log::info!("Starting quiz for {:?}", name.trim());
                Ok(State::AwaitSection { name })
            }
            State::AwaitSection { name } => {
                let section = self.read_section()?;
                log::info!("Section chosen: {section}");
                Ok(State::Answering {
                    name,
                    section,
                    question_number: 0,
                    score: 0,
                })
            }
            State::Answering {
                name,
                section,
                question_number,
                score,
            } => {
                let bank = self.bank;
                let questions = bank.questions(section);
                let Some(question) = questions.get(question_number) else {
                    return Ok(State::Done(PlayerResult::new(
                        &name,
                        section.name(),
                        score,
                        questions.len(),
                    )));
                };

                let correct = self.ask(question)?;
                log::debug!(
                    "Question {} of {section}: correct = {correct}",
                    question_number + 1
                );
                Ok(State::Answering {
                    name,
                    section,
                    question_number: question_number + 1,
                    score: score + usize::from(correct),
                })
            }
            done @ State::Done(_) => Ok(done),
        }
    }

    fn read_section(&mut self) -> Result<Section, QuizError> {
        writeln!(self.output, "\nChoose a section:")?;
        for section in self.bank.sections() {
            writeln!(self.output, "{}. {}", section.code(), section)?;
        }

        loop {
            let input = self.prompt("Enter number of your choice: ")?;
            let chosen = input.trim().parse::<i64>().ok().and_then(Section::from_code);
            if let Some(section) = chosen {
                return Ok(section);
            }
            log::debug!("Rejected section input {input:?}");
            writeln!(self.output, "Invalid section. Try again.")?;
        }
    }

    /// Shows `question`, reads a valid letter and reports the outcome.
    /// Returns whether the answer was right.
    fn ask(&mut self, question: &Question) -> Result<bool, QuizError> {
        writeln!(self.output, "\n{}", question.text)?;
        for (letter, option) in question.labelled_options() {
            writeln!(self.output, "{letter}) {option}")?;
        }

        let answer = loop {
            let input = self.prompt("Choose A, B, C, or D: ")?;
            match OptionLetter::parse(&input) {
                Some(letter) => break letter,
                None => {
                    log::debug!("Rejected option input {input:?}");
                    writeln!(self.output, "  (Invalid choice, try again)")?;
                }
            }
        };

        let correct = question.check_answer(answer.as_char());
        if correct {
            writeln!(self.output, "Correct!")?;
        } else {
            writeln!(self.output, "Wrong. Correct answer: {}", question.correct)?;
        }
        Ok(correct)
    }

    fn prompt(&mut self, text: &str) -> Result<String, QuizError> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and fail validation like any
        // other bad input.
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Err(QuizError::InputClosed);
        }
        let line = String::from_utf8_lossy(&line);
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }
}
