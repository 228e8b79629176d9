use super::Console;
use anyhow::Context;
use std::io::BufRead;
use std::io::Write;

/// Plain console over a buffered reader and a writer.
/// Prompts are written verbatim and answers read one line at a time.
#[derive(Debug)]
pub struct Stdio<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Stdio<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl Stdio<std::io::StdinLock<'static>, std::io::Stdout> {
    pub fn std() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for Stdio<R, W> {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{}", prompt).context("write prompt")?;
        self.output.flush().context("flush prompt")?;
        let ref mut line = String::new();
        match self.input.read_line(line).context("read answer")? {
            0 => Ok(None),
            _ => Ok(Some(String::from(line.trim_end_matches(['\n', '\r'])))),
        }
    }
    fn say(&mut self, line: &str) -> anyhow::Result<()> {
        writeln!(self.output, "{}", line).context("write line")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn console(input: &str) -> Stdio<Cursor<Vec<u8>>, Vec<u8>> {
        Stdio::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn ask_strips_line_endings_only() {
        let mut io = console("  Schere \r\nstein\n");
        assert_eq!(io.ask("? ").unwrap().as_deref(), Some("  Schere "));
        assert_eq!(io.ask("? ").unwrap().as_deref(), Some("stein"));
        assert_eq!(String::from_utf8_lossy(io.output()), "? ? ");
    }

    #[test]
    fn ask_accepts_empty_lines() {
        let mut io = console("\n");
        assert_eq!(io.ask("").unwrap().as_deref(), Some(""));
    }

    #[test]
    fn ask_reports_exhaustion() {
        let mut io = console("");
        assert_eq!(io.ask("").unwrap(), None);
    }

    #[test]
    fn last_line_without_newline() {
        let mut io = console("papier");
        assert_eq!(io.ask("").unwrap().as_deref(), Some("papier"));
        assert_eq!(io.ask("").unwrap(), None);
    }

    #[test]
    fn say_appends_newline() {
        let mut io = console("");
        io.say("hallo").unwrap();
        assert_eq!(String::from_utf8_lossy(io.output()), "hallo\n");
    }
}
