use std::io::{self, BufRead, Write};

use player::Controls;

/// Reads continue/stop answers line by line, prompting on `prompt`.
pub struct TerminalControls<R: BufRead, W: Write> {
    input: R,
    prompt: W,
}

impl<R: BufRead, W: Write> TerminalControls<R, W> {
    pub fn new(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }

    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.prompt, "{}", question)?;
        self.prompt.flush()?;

        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            return Ok(None);
        }
        Ok(Some(answer.trim().to_ascii_lowercase()))
    }
}

impl<R: BufRead, W: Write> Controls for TerminalControls<R, W> {
    fn wait_for_continue(&mut self) -> io::Result<()> {
        self.ask("-- Press Enter to continue --")?;
        Ok(())
    }

    fn keep_listing(&mut self) -> io::Result<bool> {
        let answer = self.ask("\nShow more posts? (Enter to continue, 'q' to stop): ")?;
        Ok(!matches!(answer.as_deref(), None | Some("q" | "n" | "no")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn enter_keeps_listing() {
        let mut controls = TerminalControls::new(Cursor::new("\nQ\n"), Vec::new());

        assert!(controls.keep_listing().unwrap());
        assert!(!controls.keep_listing().unwrap());
    }

    #[test]
    fn end_of_input_stops_listing() {
        let mut controls = TerminalControls::new(Cursor::new(""), Vec::new());

        assert!(!controls.keep_listing().unwrap());
    }

    #[test]
    fn continue_consumes_one_line() {
        let mut controls = TerminalControls::new(Cursor::new("\nno\n"), Vec::new());

        controls.wait_for_continue().unwrap();

        assert!(!controls.keep_listing().unwrap());
        let (_, prompt) = (controls.input, controls.prompt);
        assert!(String::from_utf8(prompt).unwrap().starts_with("-- Press Enter"));
    }
}
