//! # WhatsApp Handoff
//!
//! Builds the `wa.me` deep link checkout hands the composed order message
//! to. The storefront only constructs the URL; opening it, delivery and
//! confirmation all happen on the customer's device.

use url::form_urlencoded;
use url::Url;

/// Builds `https://wa.me/{number}?text={encoded message}`.
///
/// Form serialization writes spaces as `+`; `wa.me` expects `%20`, so the
/// encoded text is rewritten before being attached as the query. Literal
/// `+` characters in the message are already `%2B` by then.
pub fn order_handoff_url(number: &str, message: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(&format!("https://wa.me/{}", number))?;

    let encoded: String = form_urlencoded::byte_serialize(message.as_bytes())
        .collect::<String>()
        .replace('+', "%20");

    url.set_query(Some(&format!("text={}", encoded)));
    Ok(url)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoff_url_shape() {
        let url = order_handoff_url("6281250070876", "Halo Admin, saya Budi.").unwrap();

        assert_eq!(url.host_str(), Some("wa.me"));
        assert_eq!(url.path(), "/6281250070876");
        assert_eq!(
            url.query(),
            Some("text=Halo%20Admin%2C%20saya%20Budi.")
        );
    }

    #[test]
    fn test_newlines_and_rupiah_encode() {
        let url = order_handoff_url("6281250070876", "Total: Rp30.000\nMetode: dine-in").unwrap();
        let query = url.query().unwrap();

        assert!(query.contains("%0A"));
        assert!(query.contains("Rp30.000"));
        assert!(!query.contains('+'));
    }

    #[test]
    fn test_literal_plus_survives() {
        let url = order_handoff_url("6281250070876", "1+1 promo").unwrap();
        assert_eq!(url.query(), Some("text=1%2B1%20promo"));
    }
}
