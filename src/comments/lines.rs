//! Line buffer shared by the relocation transforms.

/// A text split on `\n`, remembering whether it ended with a newline so the
/// transforms can rejoin without gaining or losing a trailing blank line.
pub(super) struct LineBuffer<'a> {
    lines: Vec<&'a str>,
    terminated: bool,
}

impl<'a> LineBuffer<'a> {
    pub(super) fn split(text: &'a str) -> Self {
        if text.is_empty() {
            return Self { lines: Vec::new(), terminated: false };
        }
        let (body, terminated) = match text.strip_suffix('\n') {
            Some(body) => (body, true),
            None => (text, false),
        };
        Self { lines: body.split('\n').collect(), terminated }
    }

    pub(super) fn len(&self) -> usize {
        self.lines.len()
    }

    pub(super) fn lines(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.lines.iter().copied()
    }

    /// Rejoin `lines` with the original terminator convention. An empty
    /// result stays empty.
    pub(super) fn join(&self, lines: &[&str]) -> String {
        let mut out = lines.join("\n");
        if self.terminated && !lines.is_empty() {
            out.push('\n');
        }
        out
    }
}
