//! Console capability: the only I/O a menu performs.
//!
//! `Terminal` talks to real streams; `ScriptedConsole` replays canned input
//! and records output so menu trees can be tested without a terminal.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::time::Duration;

/// Line-oriented display and input used by `MenuNode::run`.
pub trait Console {
    /// Emit one line of text.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Show `prompt` and block until a line arrives.
    ///
    /// Returns `Ok(None)` at end of input. The returned line excludes the
    /// trailing newline; callers trim further as needed.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>>;

    /// Pause before the screen is redrawn after an error notice.
    fn sleep(&mut self, duration: Duration);
}

impl<C: Console + ?Sized> Console for &mut C {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        (**self).write_line(text)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn sleep(&mut self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Console over any buffered reader and writer.
pub struct Terminal<R, W> {
    input: R,
    output: W,
}

impl Terminal<io::StdinLock<'static>, io::Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the underlying streams.
    pub fn into_parts(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl<R: BufRead, W: Write> Console for Terminal<R, W> {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            // Keep the next screen off the prompt line.
            writeln!(self.output)?;
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD and fail selector parsing like any typo.
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    fn sleep(&mut self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// In-memory console fed from a fixed list of input lines.
///
/// Reading past the last line reports end of input. Sleeps are recorded,
/// never performed.
#[derive(Debug, Default, Clone)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    lines: Vec<String>,
    prompts: Vec<String>,
    sleeps: Vec<Duration>,
}

impl ScriptedConsole {
    pub fn new<I, S>(input: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: input.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// Every line written so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Every prompt shown so far, one per read attempt.
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every pause requested so far.
    pub fn sleeps(&self) -> &[Duration] {
        &self.sleeps
    }

    /// Input lines not yet consumed.
    pub fn remaining(&self) -> usize {
        self.input.len()
    }

    /// Written output joined with newlines.
    pub fn transcript(&self) -> String {
        let mut out = self.lines.join("\n");
        out.push('\n');
        out
    }

    /// How many written lines equal `text` exactly.
    pub fn count_lines(&self, text: &str) -> usize {
        self.lines.iter().filter(|l| l.as_str() == text).count()
    }
}

impl Console for ScriptedConsole {
    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.lines.push(text.to_string());
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        self.prompts.push(prompt.to_string());
        Ok(self.input.pop_front())
    }

    fn sleep(&mut self, duration: Duration) {
        self.sleeps.push(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn terminal_writes_prompt_and_strips_newline() {
        let input = io::Cursor::new(b"2\r\nq\n".to_vec());
        let mut term = Terminal::new(input, Vec::new());

        assert_eq!(term.read_line("Choice: ").unwrap().as_deref(), Some("2"));
        assert_eq!(term.read_line("Choice: ").unwrap().as_deref(), Some("q"));
        assert_eq!(term.read_line("Choice: ").unwrap(), None);

        let (_, output) = term.into_parts();
        assert_eq!(
            String::from_utf8(output).unwrap(),
            "Choice: Choice: Choice: \n"
        );
    }

    #[test]
    fn terminal_keeps_inner_whitespace() {
        let input = io::Cursor::new(b"  1 \n".to_vec());
        let mut term = Terminal::new(input, Vec::new());
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("  1 "));
    }

    #[test]
    fn terminal_replaces_invalid_utf8() {
        let input = io::Cursor::new(b"\xE9\n1\n".to_vec());
        let mut term = Terminal::new(input, Vec::new());

        assert_eq!(term.read_line("").unwrap().as_deref(), Some("\u{FFFD}"));
        assert_eq!(term.read_line("").unwrap().as_deref(), Some("1"));
    }

    #[test]
    fn terminal_write_line_appends_newline() {
        let mut term = Terminal::new(io::Cursor::new(Vec::new()), Vec::new());
        term.write_line("hello").unwrap();
        let (_, output) = term.into_parts();
        assert_eq!(output, b"hello\n");
    }

    #[test]
    fn scripted_console_records_everything() {
        let mut console = ScriptedConsole::new(["1"]);
        console.write_line("title").unwrap();
        assert_eq!(console.read_line("> ").unwrap().as_deref(), Some("1"));
        assert_eq!(console.read_line("> ").unwrap(), None);
        console.sleep(Duration::from_millis(5));

        assert_eq!(console.lines(), ["title"]);
        assert_eq!(console.prompts(), ["> ", "> "]);
        assert_eq!(console.sleeps(), [Duration::from_millis(5)]);
        assert_eq!(console.remaining(), 0);
        assert_eq!(console.transcript(), "title\n");
    }
}
