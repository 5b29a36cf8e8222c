//! URL helper functions

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters escaped in a query value: everything but RFC 3986 unreserved
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Default greeting pre-filled in WhatsApp chats
pub const DEFAULT_WHATSAPP_GREETING: &str = "Merhaba...Sitenizden Yazıyorum";

/// Encode a query parameter value
pub fn encode_query_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

/// Phone link
///
/// # Examples
/// ```ignore
/// tel_url("+90 555 000") // -> "tel:+90 555 000"
/// ```
pub fn tel_url(phone: &str) -> String {
    format!("tel:{}", phone)
}

/// Mail link
pub fn mailto_url(email: &str) -> String {
    format!("mailto:{}", email)
}

/// WhatsApp chat link with a pre-filled greeting
///
/// # Examples
/// ```ignore
/// whatsapp_url("905550001122", "Hi there") // -> "https://wa.me/905550001122/?text=Hi%20there"
/// ```
pub fn whatsapp_url(number: &str, greeting: &str) -> String {
    format!(
        "https://wa.me/{}/?text={}",
        number,
        encode_query_value(greeting)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_url() {
        assert_eq!(
            whatsapp_url("905550001122", "Hi there"),
            "https://wa.me/905550001122/?text=Hi%20there"
        );
        assert_eq!(
            whatsapp_url("1", DEFAULT_WHATSAPP_GREETING),
            "https://wa.me/1/?text=Merhaba...Sitenizden%20Yaz%C4%B1yorum"
        );
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(tel_url("+1 555"), "tel:+1 555");
        assert_eq!(mailto_url("a@b.c"), "mailto:a@b.c");
    }
}
