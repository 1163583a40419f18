pub mod app;
pub mod args;
pub mod book;
pub mod chapter;
pub mod numeral;
pub mod output;
pub mod pattern;

pub use chapter::{Chapter, ChapterSummary, chapter_summaries, detect_chapters};
pub use numeral::extract_chapter_number;
