use std::io::{self, BufRead, Write};

use console_quiz::config::Config;
use console_quiz::quiz::bank::QuestionBank;
use console_quiz::quiz::session::Session;
use dotenv::dotenv;

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

fn main() -> HandlerResult {
    // Missing .env is fine, defaults apply.
    dotenv().ok();
    pretty_env_logger::init();

    if let Err(err) = run() {
        log::error!("Quiz aborted: {err}");
        return Err(err);
    }
    Ok(())
}

fn run() -> HandlerResult {
    let config = Config::from_env();
    let recorder = config.recorder();
    log::debug!("Results file: {}", recorder.path().display());

    let bank = QuestionBank::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    let result = Session::new(&bank, stdin.lock(), &mut stdout).run()?;

    writeln!(stdout, "\n{result}")?;
    recorder.append(&result)?;
    writeln!(stdout, "Result saved to {}", recorder.path().display())?;

    write!(stdout, "Press Enter to exit...")?;
    stdout.flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(())
}
