use std::io::Write;

use color_eyre::Result;
use serde::Serialize;

use crate::book::BookInfo;
use crate::chapter::{Chapter, ChapterSummary};
use crate::pattern;

#[derive(Serialize)]
struct Listing<'a> {
    book: &'a BookInfo,
    chapters: &'a [ChapterSummary],
}

pub fn write_listing_text(
    out: &mut impl Write,
    book: &BookInfo,
    chapters: &[Chapter],
    summaries: &[ChapterSummary],
) -> Result<()> {
    writeln!(
        out,
        "{} ({} chars, {} lines, {} chapters)",
        book.title,
        book.char_count,
        book.line_count,
        summaries.len()
    )?;
    for (summary, chapter) in summaries.iter().zip(chapters) {
        let num = chapter
            .chapter_num
            .map(|n| n.to_string())
            .unwrap_or_else(|| "-".to_string());
        let family = pattern::classify(&chapter.title)
            .map(|f| f.label())
            .unwrap_or("none");
        writeln!(
            out,
            "{:>5}  {:>5}  {}  [{} lines, {}]",
            summary.index, num, summary.title, summary.line_count, family
        )?;
    }
    Ok(())
}

pub fn write_listing_json(
    out: &mut impl Write,
    book: &BookInfo,
    summaries: &[ChapterSummary],
) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, &Listing { book, chapters: summaries })?;
    writeln!(out)?;
    Ok(())
}

/// Writes chapter content with every line wrapped to `width` columns.
pub fn write_chapter_text(out: &mut impl Write, chapter: &Chapter, width: usize) -> Result<()> {
    for line in chapter.content.lines() {
        if line.trim().is_empty() {
            writeln!(out)?;
            continue;
        }
        for wrapped in textwrap::wrap(line, width) {
            writeln!(out, "{}", wrapped)?;
        }
    }
    Ok(())
}

pub fn write_chapter_json(out: &mut impl Write, chapter: &Chapter) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, chapter)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chapter::{chapter_summaries, detect_chapters};
    use std::path::Path;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_listing() {
        let doc = "前言\n第一章 开端\nHello\n第二章 终章\nWorld";
        let chapters = detect_chapters(doc);
        let summaries = chapter_summaries(&chapters);
        let book = BookInfo::from_document(Path::new("novel.txt"), doc);
        let text = render(|buf| write_listing_text(buf, &book, &chapters, &summaries));

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("novel ("));
        assert!(lines[0].ends_with("3 chapters)"));
        assert!(lines[1].contains("<start>"));
        assert!(lines[1].contains("none"));
        assert!(lines[2].contains("第一章 开端"));
        assert!(lines[2].contains("chinese-chapter"));
    }

    #[test]
    fn test_json_listing() {
        let doc = "Chapter 1\nA\nChapter 2\nB";
        let chapters = detect_chapters(doc);
        let summaries = chapter_summaries(&chapters);
        let book = BookInfo::from_document(Path::new("book.txt"), doc);
        let text = render(|buf| write_listing_json(buf, &book, &summaries));

        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["book"]["title"], "book");
        assert_eq!(value["chapters"][1]["title"], "Chapter 2");
        assert_eq!(value["chapters"][1]["line_count"], 2);
    }

    #[test]
    fn test_chapter_text_wraps() {
        let chapters = detect_chapters("Chapter 1\nthe quick brown fox jumps over the lazy dog\n\nend");
        let text = render(|buf| write_chapter_text(buf, &chapters[0], 20));
        for line in text.lines() {
            assert!(line.chars().count() <= 20, "{line:?} is too wide");
        }
        assert!(text.contains("\n\n"));
        assert!(text.ends_with("end\n"));
    }

    #[test]
    fn test_chapter_json() {
        let chapters = detect_chapters("第十五章 雨\n下雨了");
        let text = render(|buf| write_chapter_json(buf, &chapters[0]));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["chapter_num"], 15);
        assert_eq!(value["content"], "第十五章 雨\n下雨了");
    }
}
