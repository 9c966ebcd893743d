//! EmPhon - phonetic transcription of analyzed Hungarian text
//!
//! Reads `form<TAB>anas` lines from stdin, one token per line, sentences
//! separated by a blank line. Writes `form<TAB>phon` lines.

use emphon::{load_config, Emphon, Token};
use std::error::Error;
use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    // only warnings and errors unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let emphon = match Emphon::new(&config) {
        Ok(emphon) => emphon,
        Err(e) => {
            log::error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&emphon) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(emphon: &Emphon) -> Result<(), Box<dyn Error>> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut sentence = Vec::new();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            write_sentence(emphon, &mut sentence, &mut out)?;
        } else {
            sentence.push(parse_line(&line));
        }
    }
    write_sentence(emphon, &mut sentence, &mut out)?;

    out.flush()?;
    Ok(())
}

fn parse_line(line: &str) -> Token {
    match line.split_once('\t') {
        Some((form, anas)) => Token::new(form, anas),
        None => Token::new(line, ""),
    }
}

fn write_sentence(
    emphon: &Emphon,
    sentence: &mut Vec<Token>,
    out: &mut impl Write,
) -> Result<(), Box<dyn Error>> {
    if sentence.is_empty() {
        return Ok(());
    }

    let result = emphon.process_sentence(&sentence[..])?;
    if let Some(comment) = &result.comment {
        writeln!(out, "{}", comment)?;
    }
    for (token, phon) in sentence.iter().zip(&result.phon) {
        writeln!(out, "{}\t{}", token.form, phon.trim_end())?;
    }
    writeln!(out)?;

    sentence.clear();
    Ok(())
}
