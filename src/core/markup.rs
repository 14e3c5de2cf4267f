/// Escape the characters Telegram's HTML parse mode treats as markup.
///
/// `&` is replaced first so the entities produced for `<` and `>` are not
/// escaped a second time. Quotes are left untouched.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
