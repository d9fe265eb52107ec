pub mod addresses;
pub mod auth;
pub mod cards;
pub mod cart;
pub mod checkout;
pub mod reviews;

/// Collapse internal whitespace and trim the ends of a single-line
/// user-supplied value.
pub(crate) fn sanitize_inline_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_inline_text_collapses_whitespace() {
        assert_eq!(sanitize_inline_text("  a   b \t c "), "a b c");
        assert_eq!(sanitize_inline_text("   "), "");
    }
}
