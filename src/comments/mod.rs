//! Comment relocation for line-oriented documents
//!
//! Structure-preserving writers anchor a standalone comment block to the
//! content line that follows it. After entries are merged or reordered that
//! anchor is often the wrong line. `postpone` moves every comment block
//! below the content line it annotates before the document is edited, and
//! `prepone` moves the blocks back above their line afterwards.

mod lines;

use clap::ValueEnum;
use lines::LineBuffer;

pub const DEFAULT_MARKER: &str = "#";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after trimming, or starts with the comment marker
    CommentOrBlank,
    Content,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Transform {
    /// Move each comment block below the content line that follows it
    Postpone,
    /// Move each comment block back above its content line
    Prepone,
    /// Drop every comment and blank line
    Strip,
}

#[derive(Debug, Clone)]
pub struct CommentRelocator {
    marker: String,
}

impl Default for CommentRelocator {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentRelocator {
    pub fn new() -> Self {
        Self::with_marker(DEFAULT_MARKER)
    }

    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self { marker: marker.into() }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn classify(&self, line: &str) -> LineKind {
        let trimmed = line.trim();
        // An empty marker would match every line.
        if trimmed.is_empty() || (!self.marker.is_empty() && trimmed.starts_with(&self.marker)) {
            LineKind::CommentOrBlank
        } else {
            LineKind::Content
        }
    }

    pub fn transform(&self, transform: Transform, text: &str) -> String {
        match transform {
            Transform::Postpone => self.postpone(text),
            Transform::Prepone => self.prepone(text),
            Transform::Strip => self.strip(text),
        }
    }

    /// Emit each content line followed by the comment block that preceded it.
    ///
    /// A block with no content line after it stays at the end, minus its
    /// last line when that line is blank.
    pub fn postpone(&self, text: &str) -> String {
        let buffer = LineBuffer::split(text);
        let mut out = Vec::with_capacity(buffer.len());
        let mut pending: Vec<&str> = Vec::new();

        for line in buffer.lines() {
            match self.classify(line) {
                LineKind::CommentOrBlank => pending.push(line),
                LineKind::Content => {
                    out.push(line);
                    out.append(&mut pending);
                }
            }
        }
        if pending.last().is_some_and(|line| line.trim().is_empty()) {
            pending.pop();
        }
        out.append(&mut pending);

        buffer.join(&out)
    }

    /// Inverse of [`postpone`](Self::postpone).
    ///
    /// A content line is held back until the next one arrives, so the block
    /// that follows it in the postponed text is emitted ahead of it.
    pub fn prepone(&self, text: &str) -> String {
        let buffer = LineBuffer::split(text);
        let mut out = Vec::with_capacity(buffer.len());
        let mut pending: Vec<&str> = Vec::new();
        let mut held: Option<&str> = None;

        for line in buffer.lines() {
            match self.classify(line) {
                LineKind::CommentOrBlank => pending.push(line),
                LineKind::Content => {
                    out.append(&mut pending);
                    if let Some(previous) = held.replace(line) {
                        out.push(previous);
                    }
                }
            }
        }
        out.append(&mut pending);
        if let Some(last) = held {
            out.push(last);
        }

        buffer.join(&out)
    }

    /// Keep content lines only, in their original order.
    pub fn strip(&self, text: &str) -> String {
        let buffer = LineBuffer::split(text);
        let out: Vec<&str> = buffer
            .lines()
            .filter(|line| self.classify(line) == LineKind::Content)
            .collect();
        buffer.join(&out)
    }
}
