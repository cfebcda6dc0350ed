// file: src/extractor/email.rs
// description: collects the decoded text/plain and text/html parts of a MIME message
// reference: https://docs.rs/mail-parser

use crate::error::Result;
use mail_parser::{Message, MessageParser, MimeHeaders, PartType};

/// Turns the bytes of one message file into the text the combination
/// search runs over.
pub trait TextExtractor {
    fn extract(&self, raw: &[u8]) -> Result<String>;
}

/// Walks every MIME part, nested multiparts and attached messages included,
/// and joins the decoded text of the `text/plain` and `text/html` parts with
/// a single space. Markup is kept as-is. Charset decoding is lossy, so bad
/// byte sequences come out as U+FFFD instead of failing.
pub struct EmailExtractor {
    parser: MessageParser,
}

impl EmailExtractor {
    pub fn new() -> Self {
        Self {
            parser: MessageParser::default(),
        }
    }

    /// Input without a header block is read as a bare text/plain body.
    pub fn extract_text(&self, raw: &[u8]) -> String {
        if raw.trim_ascii().is_empty() {
            return String::new();
        }

        let Some(message) = self.parser.parse(raw) else {
            return String::from_utf8_lossy(raw).into_owned();
        };

        let mut parts = Vec::new();
        collect_text_parts(&message, &mut parts);
        parts.join(" ")
    }
}

impl TextExtractor for EmailExtractor {
    fn extract(&self, raw: &[u8]) -> Result<String> {
        Ok(self.extract_text(raw))
    }
}

impl Default for EmailExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn collect_text_parts<'a>(message: &'a Message<'_>, out: &mut Vec<&'a str>) {
    for part in &message.parts {
        match &part.body {
            PartType::Text(text) | PartType::Html(text) => {
                if is_plain_or_html(MimeHeaders::content_type(part)) && !text.is_empty() {
                    out.push(text.as_ref());
                }
            }
            PartType::Message(nested) => collect_text_parts(nested, out),
            _ => {}
        }
    }
}

// A part without a Content-Type header is text/plain.
fn is_plain_or_html(content_type: Option<&mail_parser::ContentType<'_>>) -> bool {
    let Some(content_type) = content_type else {
        return true;
    };

    content_type.ctype().eq_ignore_ascii_case("text")
        && content_type
            .subtype()
            .is_none_or(|sub| sub.eq_ignore_ascii_case("plain") || sub.eq_ignore_ascii_case("html"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_part_plain_text() {
        let raw = b"From: a@example.com\r\nSubject: Hi\r\nContent-Type: text/plain; charset=utf-8\r\n\r\nBonjour le monde\r\n";
        let text = EmailExtractor::new().extract_text(raw);
        assert!(text.contains("Bonjour le monde"));
        assert!(!text.contains("Subject"));
    }

    #[test]
    fn test_multipart_joins_text_and_html_and_skips_attachments() {
        let raw = concat!(
            "From: a@example.com\r\n",
            "Subject: mixed\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: multipart/mixed; boundary=\"outer\"\r\n",
            "\r\n",
            "--outer\r\n",
            "Content-Type: multipart/alternative; boundary=\"inner\"\r\n",
            "\r\n",
            "--inner\r\n",
            "Content-Type: text/plain; charset=utf-8\r\n",
            "\r\n",
            "plain alpha\r\n",
            "--inner\r\n",
            "Content-Type: text/html; charset=utf-8\r\n",
            "\r\n",
            "<p>html beta</p>\r\n",
            "--inner--\r\n",
            "--outer\r\n",
            "Content-Type: application/octet-stream\r\n",
            "Content-Disposition: attachment; filename=\"data.bin\"\r\n",
            "Content-Transfer-Encoding: base64\r\n",
            "\r\n",
            "c2VjcmV0IGdhbW1h\r\n",
            "--outer--\r\n",
        );

        let text = EmailExtractor::new().extract_text(raw.as_bytes());
        assert!(text.contains("plain alpha"));
        assert!(text.contains("<p>html beta</p>"));
        assert!(!text.contains("secret gamma"));
        assert!(!text.contains("c2VjcmV0"));
    }

    #[test]
    fn test_decodes_transfer_encoding_and_charset() {
        let raw = concat!(
            "Subject: latin\r\n",
            "Content-Type: text/plain; charset=iso-8859-1\r\n",
            "Content-Transfer-Encoding: quoted-printable\r\n",
            "\r\n",
            "caf=E9 cr=E8me\r\n",
        );
        let text = EmailExtractor::new().extract_text(raw.as_bytes());
        assert!(text.contains("café crème"));
    }

    #[test]
    fn test_invalid_bytes_become_replacement_character() {
        // base64 of b"caf\xff"
        let raw = concat!(
            "Subject: broken\r\n",
            "Content-Type: text/plain; charset=utf-8\r\n",
            "Content-Transfer-Encoding: base64\r\n",
            "\r\n",
            "Y2Fm/w==\r\n",
        );
        let text = EmailExtractor::new().extract_text(raw.as_bytes());
        assert!(text.contains("caf"));
        assert!(text.contains('\u{FFFD}'));
    }

    #[test]
    fn test_empty_input_is_empty_text() {
        assert_eq!(EmailExtractor::new().extract_text(b""), "");
    }

    #[test]
    fn test_headerless_input_is_plain_body() {
        let extractor = EmailExtractor::new();
        assert_eq!(
            extractor.extract_text(b"hello world alpha beta\n"),
            "hello world alpha beta\n"
        );
        assert_eq!(extractor.extract_text(b"   "), "");
        assert_eq!(extractor.extract(b"   \r\n").unwrap(), "");
    }
}
