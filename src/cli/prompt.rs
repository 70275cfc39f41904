//! Line-oriented console I/O
//!
//! Reads whole lines from the input and parses them as integers. Anything
//! that is not an integer, including bytes that are not UTF-8, is reported
//! as [`PromptError::Malformed`] and never reaches the ordering service.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("expected a whole number, got {input:?}")]
    Malformed { input: String },

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// A console made of an input line reader and an output sink
pub struct Prompt<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompt<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `text` followed by a newline.
    pub async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.write_all(b"\n").await?;
        self.output.flush().await
    }

    /// Prints `question` and reads one integer from the next input line.
    ///
    /// Returns `Ok(None)` at end of input.
    pub async fn ask_number(&mut self, question: &str) -> Result<Option<i64>, PromptError> {
        self.output.write_all(question.as_bytes()).await?;
        self.output.flush().await?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line).await? == 0 {
            return Ok(None);
        }
        parse_number(&String::from_utf8_lossy(&line)).map(Some)
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

/// Parses a user-typed integer, ignoring surrounding whitespace.
pub fn parse_number(line: &str) -> Result<i64, PromptError> {
    let trimmed = line.trim();
    trimmed.parse().map_err(|_| PromptError::Malformed {
        input: trimmed.to_owned(),
    })
}
