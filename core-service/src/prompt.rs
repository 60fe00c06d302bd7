//! Line-oriented prompting over any `BufRead` / `Write` pair.

use std::io::{BufRead, Write};

use tracing::trace;

use crate::error::Result;
use crate::selection::strip_line_terminator;

pub struct PromptReader<R> {
    input: R,
    buffer: String,
}

impl<R: BufRead> PromptReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            buffer: String::new(),
        }
    }

    /// Write `prompt` without a newline, flush, then read one line.
    ///
    /// Returns `Ok(None)` once the input is exhausted.
    pub fn ask(&mut self, out: &mut dyn Write, prompt: &str) -> Result<Option<String>> {
        out.write_all(prompt.as_bytes())?;
        out.flush()?;

        self.buffer.clear();
        if self.input.read_line(&mut self.buffer)? == 0 {
            trace!(prompt, "input exhausted");
            return Ok(None);
        }

        let answer = strip_line_terminator(&self.buffer).to_string();
        trace!(prompt, answer = %answer, "prompt answered");
        Ok(Some(answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_writes_prompt_and_reads_line() {
        let mut reader = PromptReader::new(Cursor::new("api\r\n  padded  \n"));
        let mut out: Vec<u8> = Vec::new();

        assert_eq!(reader.ask(&mut out, "A: ").unwrap().as_deref(), Some("api"));
        assert_eq!(
            reader.ask(&mut out, "B: ").unwrap().as_deref(),
            Some("  padded  ")
        );
        assert_eq!(reader.ask(&mut out, "C: ").unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "A: B: C: ");
    }

    #[test]
    fn test_blank_line_is_an_empty_answer() {
        let mut reader = PromptReader::new(Cursor::new("\n"));
        let mut out: Vec<u8> = Vec::new();
        assert_eq!(reader.ask(&mut out, "").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let mut reader = PromptReader::new(Cursor::new(vec![0xff, 0xfe, b'\n']));
        let mut out: Vec<u8> = Vec::new();
        assert!(reader.ask(&mut out, "").is_err());
    }
}
