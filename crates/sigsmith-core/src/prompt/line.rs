//! Line-oriented prompter over any reader/writer pair.

use std::io::{BufRead, Write};

use super::fields::FieldSpec;
use super::{PromptError, Prompter};

/// Asks each question on `output` and reads one line of `input` per attempt.
///
/// An empty answer selects the field default. Invalid answers print the
/// validation message and ask again. End of input is an error.
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn prompt(&mut self, field: &FieldSpec) -> Result<String, PromptError> {
        loop {
            write!(self.output, "{} ({}): ", field.message, field.default)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PromptError::Closed { field: field.key });
            }
            let answer = line.trim_end_matches(['\r', '\n']);
            let value = if answer.is_empty() {
                field.default.as_str()
            } else {
                answer
            };

            match field.check(value) {
                Ok(()) => return Ok(value.to_string()),
                Err(e) => {
                    tracing::debug!(field = field.key, error = %e, "rejected answer");
                    writeln!(self.output, ">> {}", e.message)?;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::fields::interview_fields;
    use std::io::Cursor;

    fn prompter(input: &str) -> LinePrompter<Cursor<Vec<u8>>, Vec<u8>> {
        LinePrompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn empty_answer_takes_default() {
        let fields = interview_fields("https://x/");
        let mut p = prompter("\n");
        assert_eq!(p.prompt(&fields[0]).unwrap(), "Joseph Akintolayo");
    }

    #[test]
    fn answer_used_verbatim() {
        let fields = interview_fields("https://x/");
        let mut p = prompter("Jane Doe\r\n");
        assert_eq!(p.prompt(&fields[0]).unwrap(), "Jane Doe");
    }

    #[test]
    fn invalid_answer_reprompts() {
        let fields = interview_fields("https://x/");
        let mut p = prompter("nope\njane@x.com\n");
        assert_eq!(p.prompt(&fields[2]).unwrap(), "jane@x.com");
        let (_, out) = p.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert_eq!(out.matches("Email address").count(), 2);
        assert!(out.contains(">> please enter a valid email address"));
    }

    #[test]
    fn whitespace_only_answer_rejected() {
        let fields = interview_fields("https://x/");
        let mut p = prompter("   \nCEO\n");
        assert_eq!(p.prompt(&fields[1]).unwrap(), "CEO");
    }

    #[test]
    fn eof_is_an_error() {
        let fields = interview_fields("https://x/");
        let mut p = prompter("bad-email\n");
        match p.prompt(&fields[2]) {
            Err(PromptError::Closed { field }) => assert_eq!(field, "email"),
            other => panic!("expected Closed, got {other:?}"),
        }
    }
}
