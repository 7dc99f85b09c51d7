//! Transport wrapper
//!
//! Carries an encoded record as `nut://<base64>`.

use base64::{engine::general_purpose::STANDARD, Engine};
use url::Url;

use super::error::{NutCodeError, NutCodeResult};
use super::record::{self, DecodeOptions};
use crate::models::{Food, FoodOrServing, Serving};

/// URL scheme of a nut code
pub const SCHEME: &str = "nut";

/// Wrap an encoded byte stream in a nut URL
///
/// Only codec output is accepted: its leading version byte keeps the base64
/// text starting with `A`, so it always lands in the URL host.
pub(crate) fn urlify_bytes(bytes: &[u8]) -> NutCodeResult<Url> {
    let encoded = STANDARD.encode(bytes);
    Ok(Url::parse(&format!("{}://{}", SCHEME, encoded))?)
}

pub fn urlify_food(food: &Food) -> NutCodeResult<Url> {
    urlify_bytes(&record::encode_food(food))
}

pub fn urlify_serving(serving: &Serving) -> NutCodeResult<Url> {
    urlify_bytes(&record::encode_serving(serving))
}

pub fn urlify(record: &FoodOrServing) -> NutCodeResult<Url> {
    urlify_bytes(&record::encode(record))
}

/// Extract the raw byte stream from a nut URL
///
/// The standard base64 alphabet includes `/`, which URL parsing splits off
/// into the path, so the payload is the host followed by the path.
pub fn payload(url: &Url) -> NutCodeResult<Vec<u8>> {
    if url.scheme() != SCHEME {
        return Err(NutCodeError::InvalidScheme(url.scheme().to_string()));
    }

    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or(NutCodeError::MissingData)?;

    let mut encoded = String::with_capacity(host.len() + url.path().len());
    encoded.push_str(host);
    encoded.push_str(url.path());

    Ok(STANDARD.decode(encoded)?)
}

/// Decode a nut URL, skipping unknown extended tags
pub fn parse(url: &Url) -> NutCodeResult<FoodOrServing> {
    parse_with(url, DecodeOptions::default())
}

pub fn parse_with(url: &Url, options: DecodeOptions) -> NutCodeResult<FoodOrServing> {
    let bytes = payload(url)?;
    record::decode_with(&bytes, options)
}

/// Decode a nut URL given as text
pub fn parse_str(url: &str) -> NutCodeResult<FoodOrServing> {
    parse(&Url::parse(url.trim())?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nutrition::Nutrient;

    #[test]
    fn test_urlify_shape() {
        let url = urlify_food(&Food::new(61.0, 17.0, 15.0)).unwrap();
        assert_eq!(url.scheme(), "nut");
        assert_eq!(url.as_str(), "nut://AT0RDwAAAAAA");
        assert_eq!(url.query(), None);
        assert_eq!(url.fragment(), None);
    }

    #[test]
    fn test_payload_roundtrip() {
        let bytes = vec![1, 61, 17, 15, 10, 4, 4, 46, 8, 0x33, 0x8D];
        let url = urlify_bytes(&bytes).unwrap();
        assert_eq!(payload(&url).unwrap(), bytes);
    }

    #[test]
    fn test_payload_with_slash_in_base64() {
        // 0xFF 0xFF encodes to "//8=" in the standard alphabet
        let bytes = vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0xFF, 0xFF, 0xFF];
        let url = urlify_bytes(&bytes).unwrap();
        assert!(url.as_str().contains('/'));
        assert_eq!(payload(&url).unwrap(), bytes);
    }

    #[test]
    fn test_every_supported_version_lands_in_host() {
        for version in 0..=record::VERSION {
            for tail in [[0x00, 0x00], [0xFF, 0xFF], [0xFC, 0x00]] {
                let mut bytes = vec![version, 0xFF, 0, 0, 0, 0, 0, 0, 0];
                bytes.extend_from_slice(&tail);
                let url = urlify_bytes(&bytes).unwrap();
                assert!(url.host_str().is_some_and(|h| h.starts_with('A')));
                assert_eq!(payload(&url).unwrap(), bytes);
            }
        }
    }

    #[test]
    fn test_invalid_scheme() {
        let url = Url::parse("http://AT0RDwAAAAAA").unwrap();
        assert_eq!(
            parse(&url),
            Err(NutCodeError::InvalidScheme("http".to_string()))
        );
    }

    #[test]
    fn test_missing_data() {
        let url = Url::parse("nut:AT0RDwAAAAAA").unwrap();
        assert_eq!(parse(&url), Err(NutCodeError::MissingData));
        assert_eq!(parse_str("nut://"), Err(NutCodeError::MissingData));
    }

    #[test]
    fn test_base64_decoding_error() {
        let result = parse_str("nut://not*base64");
        assert!(matches!(result, Err(NutCodeError::Base64Decoding(_))));
    }

    #[test]
    fn test_malformed_url() {
        assert!(matches!(
            parse_str("just some text"),
            Err(NutCodeError::MalformedUrl(_))
        ));
    }

    #[test]
    fn test_version_checked_after_transport() {
        let url = urlify_bytes(&[9, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        assert_eq!(parse(&url), Err(NutCodeError::UnrecognizedVersion(9)));
    }

    #[test]
    fn test_parse_with_strict() {
        let url = urlify_bytes(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0x7F, 0x01]).unwrap();
        assert!(parse(&url).is_ok());
        assert_eq!(
            parse_with(&url, DecodeOptions::strict()),
            Err(NutCodeError::UnrecognizedNutrientCode(0x7F))
        );
    }

    #[test]
    fn test_serving_roundtrip() {
        let serving = Serving::new(Food::new(1.0, 2.0, 3.0).with(Nutrient::Caffeine, 0.08), 240.0);
        let url = urlify_serving(&serving).unwrap();
        let decoded = parse(&url).unwrap();
        let decoded = decoded.as_serving().expect("Expected serving, not food");
        assert_eq!(decoded.mass, 240.0);
        assert!((decoded.food.caffeine - 0.08).abs() < 0.008);
    }
}
