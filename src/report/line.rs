pub const TITLE_PREFIX: &str = "Post Title:";
pub const TARGET_DIR_PREFIX: &str = "Target Directory:";
pub const TERMINATOR_PREFIX: &str = "=";
pub const WARNING_PREFIX: &str = "WARNING";
pub const IMG_TAG_PREFIX: &str = "<img>";

/// Values start at a fixed character offset: the prefix plus one separator.
const TITLE_VALUE_OFFSET: usize = 12;
const TARGET_DIR_VALUE_OFFSET: usize = 18;

/// What a single report line means to the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    Title(&'a str),
    TargetDir(&'a str),
    Terminator,
    Ignorable,
    FileName(&'a str),
}

/// Classify one report line with its trailing newline already removed.
///
/// Rules are checked in order; the first match wins.
pub fn classify_line(line: &str) -> LineKind<'_> {
    if line.starts_with(TITLE_PREFIX) {
        LineKind::Title(value_at(line, TITLE_VALUE_OFFSET))
    } else if line.starts_with(TARGET_DIR_PREFIX) {
        LineKind::TargetDir(value_at(line, TARGET_DIR_VALUE_OFFSET).trim_matches('/'))
    } else if line.starts_with(TERMINATOR_PREFIX) {
        LineKind::Terminator
    } else if line.starts_with(WARNING_PREFIX) || line.starts_with(IMG_TAG_PREFIX) || line.is_empty()
    {
        LineKind::Ignorable
    } else {
        LineKind::FileName(line)
    }
}

/// Slice from the `offset`-th character, or empty if the line is shorter.
fn value_at(line: &str, offset: usize) -> &str {
    match line.char_indices().nth(offset) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}
