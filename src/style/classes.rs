//! Class-list joining.

/// Join class tokens with single spaces, omitting empty entries.
///
/// Tokens are taken in order; `None` and empty strings contribute nothing.
pub fn class_names<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut joined = String::new();
    for token in tokens.into_iter().flatten() {
        if token.is_empty() {
            continue;
        }
        if !joined.is_empty() {
            joined.push(' ');
        }
        joined.push_str(token);
    }
    joined
}
