use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("parse error on line {line}: bare \" in non-quoted field")]
    BareQuote { line: usize },
    #[error("parse error on line {line}: extraneous or missing \" in quoted field")]
    UnbalancedQuote { line: usize },
    #[error("{0}")]
    Csv(#[from] csv::Error),
    #[error("{0}")]
    Io(#[from] io::Error),
}

enum State {
    FieldStart,
    Unquoted,
    Quoted { opened_on: usize },
    ClosingQuote { opened_on: usize },
}

/// Rejects quoting the `csv` crate silently tolerates: a quote inside an unquoted
/// field, text after a closing quote, and a quoted field still open at end of input.
pub fn check_quoting(source: &[u8]) -> Result<(), FormatError> {
    let mut line = 1;
    let mut state = State::FieldStart;

    for &byte in source {
        state = match (state, byte) {
            (State::FieldStart, b'"') => State::Quoted { opened_on: line },
            (State::FieldStart, b',') | (State::FieldStart, b'\n') => State::FieldStart,
            (State::FieldStart, _) => State::Unquoted,

            (State::Unquoted, b'"') => return Err(FormatError::BareQuote { line }),
            (State::Unquoted, b',') | (State::Unquoted, b'\n') => State::FieldStart,
            (State::Unquoted, _) => State::Unquoted,

            (State::Quoted { opened_on }, b'"') => State::ClosingQuote { opened_on },
            (quoted @ State::Quoted { .. }, _) => quoted,

            // A doubled quote is an escaped quote
            (State::ClosingQuote { opened_on }, b'"') => State::Quoted { opened_on },
            (State::ClosingQuote { .. }, b',')
            | (State::ClosingQuote { .. }, b'\n')
            | (State::ClosingQuote { .. }, b'\r') => State::FieldStart,
            (State::ClosingQuote { .. }, _) => {
                return Err(FormatError::UnbalancedQuote { line })
            }
        };
        if byte == b'\n' {
            line += 1;
        }
    }

    match state {
        State::Quoted { opened_on } => Err(FormatError::UnbalancedQuote { line: opened_on }),
        _ => Ok(()),
    }
}
