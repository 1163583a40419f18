use once_cell::sync::Lazy;
use regex::Regex;

/// Headings must be strictly shorter than this many characters.
pub const MAX_HEADING_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingFamily {
    /// 第一章 / 第12章
    ChineseChapter,
    /// 第一卷 第三章
    ChineseVolumeChapter,
    /// Chapter 7 / CHAPTER One
    EnglishChapter,
    /// 001 / 1. / 3、
    NumericPrefix,
}

static CHINESE_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^第[0-9零一二三四五六七八九十百千]+章").unwrap());
static ENGLISH_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^chapter\s+[0-9A-Za-z]+").unwrap());
static NUMERIC_PREFIX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{1,4}[.、\s]").unwrap());
static VOLUME_CHAPTER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^第[0-9零一二三四五六七八九十百千]+卷\s*第[0-9零一二三四五六七八九十百千]+章").unwrap()
});

// Order is the numeral extraction priority; detection is a plain disjunction.
const FAMILIES: [HeadingFamily; 4] = [
    HeadingFamily::ChineseChapter,
    HeadingFamily::EnglishChapter,
    HeadingFamily::NumericPrefix,
    HeadingFamily::ChineseVolumeChapter,
];

impl HeadingFamily {
    pub fn matches(self, line: &str) -> bool {
        let re: &Regex = match self {
            HeadingFamily::ChineseChapter => &*CHINESE_CHAPTER,
            HeadingFamily::ChineseVolumeChapter => &*VOLUME_CHAPTER,
            HeadingFamily::EnglishChapter => &*ENGLISH_CHAPTER,
            HeadingFamily::NumericPrefix => &*NUMERIC_PREFIX,
        };
        re.is_match(line)
    }

    pub fn label(self) -> &'static str {
        match self {
            HeadingFamily::ChineseChapter => "chinese-chapter",
            HeadingFamily::ChineseVolumeChapter => "chinese-volume-chapter",
            HeadingFamily::EnglishChapter => "english-chapter",
            HeadingFamily::NumericPrefix => "numeric-prefix",
        }
    }
}

/// Trims whitespace and the byte-order mark some editors put in front of
/// the first line.
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

fn within_length(trimmed: &str) -> bool {
    !trimmed.is_empty() && trimmed.chars().count() < MAX_HEADING_CHARS
}

/// Whether `line` looks like a chapter heading.
///
/// The line is trimmed first. Anything at or above [`MAX_HEADING_CHARS`]
/// is treated as prose even when it starts like a heading.
pub fn is_heading(line: &str) -> bool {
    let trimmed = trim_line(line);
    within_length(trimmed) && FAMILIES.iter().any(|family| family.matches(trimmed))
}

/// The first family that recognises `line` as a heading.
pub fn classify(line: &str) -> Option<HeadingFamily> {
    let trimmed = trim_line(line);
    if !within_length(trimmed) {
        return None;
    }
    FAMILIES.into_iter().find(|family| family.matches(trimmed))
}
