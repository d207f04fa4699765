//! Mark extraction from ticket titles.
//!
//! A mark is the integer score an operator appends to a title in parentheses,
//! e.g. `"Замена картриджа (3)"`. Corrections are appended as further groups, so
//! among the groups that contain a digit the rightmost one wins.

use std::sync::LazyLock;

use regex::Regex;

// ASCII digits only: titles come from a Cyrillic export and Unicode `\d` would
// accept digits the integer parse below cannot read.
static SCORED_TITLE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\([0-9]").expect("SCORED_TITLE_REGEX: invalid pattern"));

static DIGIT_GROUP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\([^)]*[0-9][^)]*\)").expect("DIGIT_GROUP_REGEX: invalid pattern")
});

static DIGIT_RUN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("DIGIT_RUN_REGEX: invalid pattern"));

/// True when the title contains an opening parenthesis immediately followed by a digit.
pub fn has_scored_title(title: &str) -> bool {
    SCORED_TITLE_REGEX.is_match(title)
}

/// Extract the mark of a title, or `""` when there is none.
///
/// The returned string is always either empty or an ASCII digit run, returned
/// verbatim whatever its magnitude.
pub fn extract_mark(title: &str) -> String {
    if !title.contains('(') {
        return String::new();
    }
    let Some(last_group) = DIGIT_GROUP_REGEX.find_iter(title).last() else {
        return String::new();
    };
    DIGIT_RUN_REGEX
        .find(last_group.as_str())
        .map(|run| run.as_str().to_string())
        .unwrap_or_default()
}
