//! Helpers for Telegram's legacy Markdown parse mode.

/// Telegram rejects messages longer than this, measured in UTF-16 code
/// units.
pub const MAX_MESSAGE_LEN: usize = 4096;

/// Length of `text` as Telegram counts it.
///
/// Emoji outside the Basic Multilingual Plane count as two units. Markup
/// is counted too, which only overestimates the parsed length.
pub fn message_len(text: &str) -> usize {
    text.encode_utf16().count()
}

/// Escape text so it renders literally in legacy Markdown.
///
/// Station names such as `Joe's *Best* Gas_Mart` would otherwise open
/// entities that never close, and Telegram rejects the whole message.
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '_' | '*' | '`' | '[') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Split a message into chunks of at most `limit` UTF-16 code units.
///
/// Splits happen at line boundaries so formatting entities, which never
/// span lines here, stay intact. A single line longer than `limit` is
/// hard-split on character boundaries.
pub fn chunk_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(2);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0;

    for line in text.split_inclusive('\n') {
        let line_len = message_len(line);

        if current_len + line_len > limit && !current.is_empty() {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }

        if line_len > limit {
            let mut piece = String::new();
            let mut piece_len = 0;
            for c in line.chars() {
                if piece_len + c.len_utf16() > limit {
                    chunks.push(std::mem::take(&mut piece));
                    piece_len = 0;
                }
                piece.push(c);
                piece_len += c.len_utf16();
            }
            chunks.push(piece);
            continue;
        }

        current.push_str(line);
        current_len += line_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_entity_characters() {
        assert_eq!(escape_markdown("Gas_Mart *24h*"), "Gas\\_Mart \\*24h\\*");
        assert_eq!(escape_markdown("[Shell] `x`"), "\\[Shell] \\`x\\`");
        assert_eq!(escape_markdown("Plain Name"), "Plain Name");
    }

    #[test]
    fn short_message_is_one_chunk() {
        assert_eq!(chunk_message("hello\nworld\n", 100), vec!["hello\nworld\n"]);
    }

    #[test]
    fn splits_at_line_boundaries() {
        let chunks = chunk_message("aaaa\nbbbb\ncccc\n", 10);
        assert_eq!(chunks, vec!["aaaa\nbbbb\n", "cccc\n"]);
    }

    #[test]
    fn every_chunk_within_limit() {
        let text = "⛽ station line\n".repeat(1000);
        let chunks = chunk_message(&text, MAX_MESSAGE_LEN);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| message_len(c) <= MAX_MESSAGE_LEN));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn astral_emoji_count_as_two_units() {
        assert_eq!(message_len("🏙️"), 3);
        assert_eq!(message_len("⛽"), 1);

        let chunks = chunk_message("🏙🏙🏙", 4);
        assert_eq!(chunks, vec!["🏙🏙", "🏙"]);
    }

    #[test]
    fn preview_sized_text_fits_in_utf16_units() {
        let text = "     🏙️ Beverly Hills, CA 90210\n".repeat(400);
        assert!(text.chars().count() < text.encode_utf16().count());

        let chunks = chunk_message(&text, MAX_MESSAGE_LEN);
        assert!(chunks.iter().all(|c| message_len(c) <= MAX_MESSAGE_LEN));
        assert_eq!(chunks.concat(), text);
    }

    #[test]
    fn overlong_line_is_hard_split() {
        let chunks = chunk_message(&"x".repeat(25), 10);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[2], "xxxxx");
    }

    #[test]
    fn empty_text_has_no_chunks() {
        assert!(chunk_message("", 10).is_empty());
    }
}
