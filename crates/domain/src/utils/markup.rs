//! Chat markup helpers

/// Remove bold, italic and bold-italic asterisk delimiters from a message.
///
/// Every emphasis form (`*x*`, `**x**`, `***x***`) is built from asterisks,
/// so dropping them all leaves the plain text. Underscores are left alone
/// because they routinely appear inside links.
///
/// # Examples
///
/// ```
/// use papersync_domain::strip_emphasis;
///
/// assert_eq!(strip_emphasis("**Topic**: *NLP*"), "Topic: NLP");
/// assert_eq!(strip_emphasis("***all***"), "all");
/// ```
#[must_use]
pub fn strip_emphasis(text: &str) -> String {
    text.chars().filter(|c| *c != '*').collect()
}
