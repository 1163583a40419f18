use serde::Serialize;
use tracing::{debug, info};

use crate::numeral::extract_chapter_number;
use crate::pattern::{self, is_heading, trim_line};

/// Title of the text that precedes the first heading.
pub const START_TITLE: &str = "<start>";
/// Title of the single chapter produced when no heading is found.
pub const WHOLE_DOCUMENT_TITLE: &str = "<whole-document>";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Chapter {
    pub title: String,
    /// First line of the chapter, zero-based. The heading line itself.
    pub start_line: usize,
    /// Last line of the chapter, inclusive.
    pub end_line: usize,
    pub content: String,
    pub chapter_num: Option<u64>,
}

impl Chapter {
    fn new(title: String, start_line: usize, end_line: usize, content: String) -> Self {
        let chapter_num = extract_chapter_number(&title);
        Self {
            title,
            start_line,
            end_line,
            content,
            chapter_num,
        }
    }

    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChapterSummary {
    pub index: usize,
    pub title: String,
    pub line_count: usize,
}

/// Splits `document` into chapters at every heading line.
///
/// Text before the first heading becomes a `<start>` chapter unless it is
/// blank. A document with no heading at all comes back as one
/// `<whole-document>` chapter. Only empty input yields an empty list.
pub fn detect_chapters(document: &str) -> Vec<Chapter> {
    if document.is_empty() {
        return Vec::new();
    }

    let lines: Vec<&str> = document.split('\n').collect();
    let mut chapters: Vec<Chapter> = Vec::new();
    let mut current_start = 0;
    let mut current_title = START_TITLE.to_string();
    let mut seen_heading = false;

    for (i, line) in lines.iter().enumerate() {
        if !is_heading(line) {
            continue;
        }
        let title = trim_line(line).to_string();
        debug!(line = i, family = ?pattern::classify(&title), %title, "heading");

        // close previous
        let content = join_trimmed(&lines[current_start..i]);
        if !content.is_empty() {
            let prev_title = std::mem::replace(&mut current_title, title);
            chapters.push(Chapter::new(prev_title, current_start, i - 1, content));
        } else {
            current_title = title;
        }
        current_start = i;
        seen_heading = true;
    }

    if !seen_heading {
        info!(lines = lines.len(), "no chapter headings found");
        return vec![Chapter::new(
            WHOLE_DOCUMENT_TITLE.to_string(),
            0,
            lines.len() - 1,
            trim_line(document).to_string(),
        )];
    }

    let content = join_trimmed(&lines[current_start..]);
    if !content.is_empty() {
        chapters.push(Chapter::new(current_title, current_start, lines.len() - 1, content));
    }

    info!(chapters = chapters.len(), lines = lines.len(), "segmented document");
    chapters
}

fn join_trimmed(lines: &[&str]) -> String {
    trim_line(&lines.join("\n")).to_string()
}

pub fn chapter_summaries(chapters: &[Chapter]) -> Vec<ChapterSummary> {
    chapters
        .iter()
        .enumerate()
        .map(|(index, chapter)| ChapterSummary {
            index,
            title: chapter.title.clone(),
            line_count: chapter.line_count(),
        })
        .collect()
}
