//! Line-based rename prompt.

use netdraw_core::{ElementProperties, PromptResponse, RenamePrompt};
use std::io::{self, BufRead, Write};

/// Asks for a new name on a text stream and reads one line back.
///
/// End of input cancels. A read or write failure is logged and treated as a
/// cancel.
pub struct LinePrompt<R, W> {
    input: R,
    output: W,
}

impl LinePrompt<io::StdinLock<'static>, io::Stderr> {
    /// Prompt on stderr, answer on stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> LinePrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn ask(&mut self, properties: &ElementProperties) -> io::Result<PromptResponse> {
        writeln!(self.output, "{properties}")?;
        write!(self.output, "New name: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(PromptResponse::Cancelled);
        }
        Ok(PromptResponse::Submitted(
            line.trim_end_matches(['\r', '\n']).to_string(),
        ))
    }
}

impl<R: BufRead, W: Write> RenamePrompt for LinePrompt<R, W> {
    fn prompt_name(&mut self, properties: &ElementProperties) -> PromptResponse {
        self.ask(properties).unwrap_or_else(|err| {
            log::warn!("Rename prompt failed: {err}");
            PromptResponse::Cancelled
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use netdraw_core::ElementKind;
    use std::io::Cursor;

    fn properties() -> ElementProperties {
        ElementProperties {
            name: "Client1".to_string(),
            kind: ElementKind::Client,
        }
    }

    #[test]
    fn test_reads_one_line() {
        let mut output = Vec::new();
        let mut prompt = LinePrompt::new(Cursor::new("Laptop\r\nDesk\n"), &mut output);

        assert_eq!(
            prompt.prompt_name(&properties()),
            PromptResponse::Submitted("Laptop".to_string())
        );
        assert_eq!(
            prompt.prompt_name(&properties()),
            PromptResponse::Submitted("Desk".to_string())
        );
        drop(prompt);
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.starts_with("Name: Client1, Icon: Client\nNew name: "));
    }

    #[test]
    fn test_empty_line_is_empty_name() {
        let mut prompt = LinePrompt::new(Cursor::new("\n"), Vec::new());
        assert_eq!(
            prompt.prompt_name(&properties()),
            PromptResponse::Submitted(String::new())
        );
    }

    #[test]
    fn test_eof_cancels() {
        let mut prompt = LinePrompt::new(Cursor::new(""), Vec::new());
        assert_eq!(prompt.prompt_name(&properties()), PromptResponse::Cancelled);
    }
}
