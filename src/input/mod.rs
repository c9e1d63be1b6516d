use std::io::{self, BufReader, Bytes, Read, Stdin};

#[cfg(test)]
pub mod mock;
#[cfg(test)]
mod tests;

/// A blocking source of responses. Reads may take arbitrarily long, which is why
/// sessions only ever call this from a background thread.
pub trait AnswerSource: Send + 'static {
    fn read_answer(&mut self) -> io::Result<String>;
}

/// Yields one whitespace-delimited token per read.
pub struct TokenReader<R: Read> {
    bytes: Bytes<BufReader<R>>,
}

impl TokenReader<Stdin> {
    pub fn stdin() -> Self {
        TokenReader::new(io::stdin())
    }
}

impl<R: Read> TokenReader<R> {
    pub fn new(reader: R) -> Self {
        TokenReader {
            bytes: BufReader::new(reader).bytes(),
        }
    }

    fn next_token(&mut self) -> io::Result<String> {
        let mut token = Vec::new();
        for byte in &mut self.bytes {
            let byte = byte?;
            if byte.is_ascii_whitespace() {
                if token.is_empty() {
                    continue;
                }
                break;
            }
            token.push(byte);
        }

        if token.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "no more input",
            ));
        }

        String::from_utf8(token).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}

impl<R: Read + Send + 'static> AnswerSource for TokenReader<R> {
    fn read_answer(&mut self) -> io::Result<String> {
        self.next_token()
    }
}
