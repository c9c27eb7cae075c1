//! Prompt construction and answer cleanup.

const ANSWER_PREFIX: &str = "answer=";

pub fn build_prompt(page_text: &str, question: &str) -> String {
    format!("Document: {}\n\nQuestion: {}\nAnswer:", page_text, question)
}

/// Trim the raw completion, drop a leading `answer=` and decode
/// form-urlencoded sequences (`+` and `%XX`).
pub fn clean_answer(raw: &str) -> String {
    let trimmed = raw.trim();
    let answer = trimmed.strip_prefix(ANSWER_PREFIX).unwrap_or(trimmed);
    unquote_plus(answer)
}

fn unquote_plus(text: &str) -> String {
    let spaced = text.replace('+', " ");
    String::from_utf8_lossy(&urlencoding::decode_binary(spaced.as_bytes())).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_template() {
        assert_eq!(
            build_prompt("The quick brown fox.", "What animal?"),
            "Document: The quick brown fox.\n\nQuestion: What animal?\nAnswer:"
        );
        assert_eq!(build_prompt("", "Why?"), "Document: \n\nQuestion: Why?\nAnswer:");
    }

    #[test]
    fn test_clean_answer_trims_and_strips_prefix() {
        assert_eq!(clean_answer("  A fox. \n"), "A fox.");
        assert_eq!(clean_answer(" answer=A fox"), "A fox");
        assert_eq!(clean_answer("the answer=42"), "the answer=42");
    }

    #[test]
    fn test_clean_answer_unquotes_plus_encoding() {
        assert_eq!(clean_answer("answer=A+brown+fox%21"), "A brown fox!");
        assert_eq!(clean_answer("caf%C3%A9"), "caf\u{e9}");
        assert_eq!(clean_answer("100%"), "100%");
        assert_eq!(clean_answer("bad%FFbyte"), "bad\u{FFFD}byte");
    }
}
