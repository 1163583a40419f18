use std::io::Write;
use std::path::PathBuf;

use crate::args::{Format, Options};
use crate::book::{self, BookInfo};
use crate::chapter::{Chapter, chapter_summaries, detect_chapters};
use crate::output;
use color_eyre::{Result, eyre::eyre};

#[derive(Debug)]
pub struct App {
    file_path: PathBuf,
    format: Format,
    chapter: Option<usize>,
    width: usize,
    document: String,
    chapters: Vec<Chapter>,
}

impl App {
    pub fn new(args: Options) -> Self {
        Self {
            file_path: args.file_path,
            format: args.format,
            chapter: args.chapter,
            width: args.width,
            document: String::new(),
            chapters: Vec::new(),
        }
    }

    fn load_file(&mut self) -> Result<()> {
        self.document = book::load_document(&self.file_path)?;
        self.chapters = detect_chapters(&self.document);
        Ok(())
    }

    pub fn run(&mut self, out: &mut impl Write) -> Result<()> {
        self.load_file()?;
        match self.chapter {
            Some(index) => self.render_chapter(out, index),
            None => self.render_listing(out),
        }
    }

    fn render_listing(&self, out: &mut impl Write) -> Result<()> {
        let book = BookInfo::from_document(&self.file_path, &self.document);
        let summaries = chapter_summaries(&self.chapters);
        match self.format {
            Format::Text => output::write_listing_text(out, &book, &self.chapters, &summaries),
            Format::Json => output::write_listing_json(out, &book, &summaries),
        }
    }

    fn render_chapter(&self, out: &mut impl Write, index: usize) -> Result<()> {
        let chapter = self.chapters.get(index).ok_or_else(|| {
            eyre!(
                "chapter {} out of range, {} has {} chapters",
                index,
                self.file_path.display(),
                self.chapters.len()
            )
        })?;
        match self.format {
            Format::Text => output::write_chapter_text(out, chapter, self.width),
            Format::Json => output::write_chapter_json(out, chapter),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options(path: PathBuf, chapter: Option<usize>, format: Format) -> Options {
        Options {
            file_path: path,
            format,
            chapter,
            width: 80,
            verbose: false,
        }
    }

    fn novel_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("第一章 开端\nHello\n第二章 终章\nWorld".as_bytes())
            .unwrap();
        file
    }

    #[test]
    fn test_run_listing() {
        let file = novel_file();
        let mut app = App::new(options(file.path().to_path_buf(), None, Format::Text));
        let mut buf = Vec::new();
        app.run(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("2 chapters"));
        assert!(text.contains("第二章 终章"));
    }

    #[test]
    fn test_run_single_chapter() {
        let file = novel_file();
        let mut app = App::new(options(file.path().to_path_buf(), Some(1), Format::Text));
        let mut buf = Vec::new();
        app.run(&mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "第二章 终章\nWorld\n");
    }

    #[test]
    fn test_run_chapter_out_of_range() {
        let file = novel_file();
        let mut app = App::new(options(file.path().to_path_buf(), Some(5), Format::Json));
        let err = app.run(&mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}
