/// Append-only list of output lines, joined with `\n` once at the end.
#[derive(Debug, Default)]
pub struct LineBuilder {
    lines: Vec<String>,
}

impl LineBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line(&mut self, line: impl Into<String>) -> &mut Self {
        self.lines.push(line.into());
        self
    }

    pub fn blank(&mut self) -> &mut Self {
        self.lines.push(String::new());
        self
    }

    pub fn lines<I, S>(&mut self, lines: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Blank separator line followed by the heading.
    pub fn heading(&mut self, heading: impl Into<String>) -> &mut Self {
        self.blank().line(heading)
    }

    /// Blank separator line followed by a paragraph.
    pub fn paragraph(&mut self, text: impl Into<String>) -> &mut Self {
        self.blank().line(text)
    }

    /// A fenced code block; `body` is emitted verbatim.
    pub fn fenced(&mut self, lang: &str, body: &str) -> &mut Self {
        self.line(format!("```{}", lang)).line(body).line("```")
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn finish(self) -> String {
        self.lines.join("\n")
    }
}
