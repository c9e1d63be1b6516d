use super::*;
use std::io::ErrorKind;

#[test]
fn reads_one_token_per_answer() {
    let mut reader = TokenReader::new("  4\nParis  \n\n Rome".as_bytes());
    assert_eq!(reader.read_answer().unwrap(), "4");
    assert_eq!(reader.read_answer().unwrap(), "Paris");
    assert_eq!(reader.read_answer().unwrap(), "Rome");
}

#[test]
fn splits_tokens_on_the_same_line() {
    let mut reader = TokenReader::new("New York\n".as_bytes());
    assert_eq!(reader.read_answer().unwrap(), "New");
    assert_eq!(reader.read_answer().unwrap(), "York");
}

#[test]
fn end_of_input_is_an_error() {
    let mut reader = TokenReader::new("4\n  \n".as_bytes());
    assert_eq!(reader.read_answer().unwrap(), "4");
    let error = reader.read_answer().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::UnexpectedEof);
}

#[test]
fn invalid_utf8_is_an_error() {
    let source: &[u8] = b"\xff\xfe next";
    let mut reader = TokenReader::new(source);
    let error = reader.read_answer().unwrap_err();
    assert_eq!(error.kind(), ErrorKind::InvalidData);
    assert_eq!(reader.read_answer().unwrap(), "next");
}
