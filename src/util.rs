/// escapes html in user-provided text so it can't be reflected back to a client as markup.
///
/// `&`, `<`, `>`, and `"` are converted to their entities. Single quotes are left as-is
pub fn sanitize(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

#[cfg(test)]
mod tests {
    use super::sanitize;

    #[test]
    fn sanitize_escapes_script_tags() {
        assert_eq!(
            sanitize("bad <script>alert('xss');</script>"),
            "bad &lt;script&gt;alert('xss');&lt;/script&gt;"
        );
    }

    #[test]
    fn sanitize_escapes_double_quotes_and_ampersands() {
        assert_eq!(
            sanitize(r#"<img src="x" onerror="a&b">"#),
            "&lt;img src=&quot;x&quot; onerror=&quot;a&amp;b&quot;&gt;"
        );
    }

    #[test]
    fn sanitize_leaves_plain_text_alone() {
        assert_eq!(sanitize("test folder 1"), "test folder 1");
    }
}
