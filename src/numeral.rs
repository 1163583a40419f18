use once_cell::sync::Lazy;
use regex::Regex;

static ARABIC_CHAPTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"第([0-9]+)章").unwrap());
static CHINESE_CHAPTER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"第([零一二三四五六七八九十百千]+)章").unwrap());
static ENGLISH_CHAPTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)chapter\s+([0-9]+)").unwrap());
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([0-9]+)[.、\s]").unwrap());

fn capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures(text).and_then(|caps| caps.get(1)).map(|m| m.as_str())
}

fn parse_decimal(digits: &str) -> Option<u64> {
    digits.parse::<u64>().ok()
}

/// Best-effort chapter number of a heading.
///
/// Tried in order: `第12章`, `第十二章`, `Chapter 12`, then a leading
/// `12.` / `12、` / `12 `. Returns `None` when nothing matches, e.g. `楔子`.
pub fn extract_chapter_number(title: &str) -> Option<u64> {
    if title.is_empty() {
        return None;
    }
    capture(&ARABIC_CHAPTER, title)
        .and_then(parse_decimal)
        .or_else(|| capture(&CHINESE_CHAPTER, title).map(chinese_to_number))
        .or_else(|| capture(&ENGLISH_CHAPTER, title).and_then(parse_decimal))
        .or_else(|| capture(&LEADING_NUMBER, title).and_then(parse_decimal))
}

fn digit_value(ch: char) -> Option<u64> {
    let value = match ch {
        '零' => 0,
        '一' => 1,
        '二' => 2,
        '三' => 3,
        '四' => 4,
        '五' => 5,
        '六' => 6,
        '七' => 7,
        '八' => 8,
        '九' => 9,
        _ => return None,
    };
    Some(value)
}

fn unit_value(ch: char) -> Option<u64> {
    match ch {
        '十' => Some(10),
        '百' => Some(100),
        '千' => Some(1000),
        _ => None,
    }
}

/// Converts a Chinese numeral such as `一百二十三` to an integer.
///
/// Only 零..九 with the units 十/百/千 are understood; other characters are
/// skipped. A unit with no digit in front counts as one of that unit (`十五`
/// is 15). A unit larger than the one before it scales everything read so
/// far (`二十百` is 2000). Values are reliable up to 9999.
pub fn chinese_to_number(numeral: &str) -> u64 {
    let mut result: u64 = 0;
    let mut pending: Option<u64> = None;
    let mut prev_unit: u64 = 1;

    for ch in numeral.chars() {
        if let Some(digit) = digit_value(ch) {
            pending = Some(digit);
        } else if let Some(unit) = unit_value(ch) {
            if unit > prev_unit && result > 0 {
                // fold: the bigger place value absorbs the completed groups
                result = result
                    .saturating_add(pending.take().unwrap_or(0))
                    .saturating_mul(unit);
            } else {
                result = result.saturating_add(pending.take().unwrap_or(1).saturating_mul(unit));
            }
            prev_unit = unit;
        }
    }

    result.saturating_add(pending.unwrap_or(0))
}
