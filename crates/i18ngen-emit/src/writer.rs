//! Indentation-aware text buffer for generated Rust source.

const INDENT: &str = "    ";

/// Accumulates generated source line by line
#[derive(Debug, Default)]
pub struct CodeWriter {
    buf: String,
    depth: usize,
}

impl CodeWriter {
    /// Empty writer at depth zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current depth
    pub fn line(&mut self, text: impl AsRef<str>) -> &mut Self {
        let text = text.as_ref();
        if !text.is_empty() {
            for _ in 0..self.depth {
                self.buf.push_str(INDENT);
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
        self
    }

    /// Write an empty line
    pub fn blank(&mut self) -> &mut Self {
        self.buf.push('\n');
        self
    }

    /// Write `text` and indent the following lines
    pub fn open(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.line(text);
        self.depth += 1;
        self
    }

    /// Dedent and write `text`
    pub fn close(&mut self, text: impl AsRef<str>) -> &mut Self {
        self.depth = self.depth.saturating_sub(1);
        self.line(text)
    }

    /// Write a `///` doc comment, one line per input line
    pub fn doc(&mut self, text: &str) -> &mut Self {
        for line in text.lines() {
            if line.is_empty() {
                self.line("///");
            } else {
                self.line(format!("/// {line}"));
            }
        }
        self
    }

    /// The accumulated source
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Render `text` as a Rust string literal.
pub fn rust_string(text: &str) -> String {
    format!("{text:?}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nests_blocks() {
        let mut w = CodeWriter::new();
        w.open("impl Foo {")
            .open("fn bar() {")
            .line("baz();")
            .close("}")
            .close("}");
        assert_eq!(
            w.finish(),
            "impl Foo {\n    fn bar() {\n        baz();\n    }\n}\n"
        );
    }

    #[test]
    fn doc_comments_keep_blank_lines() {
        let mut w = CodeWriter::new();
        w.doc("first\n\nsecond");
        assert_eq!(w.finish(), "/// first\n///\n/// second\n");
    }

    #[test]
    fn string_literals_are_escaped() {
        assert_eq!(rust_string("say \"hi\"\n"), r#""say \"hi\"\n""#);
        assert_eq!(rust_string("ユーザー"), "\"ユーザー\"");
    }
}
