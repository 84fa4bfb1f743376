//! Value extraction from url-encoded request bodies.
//!
//! POST and PUT bodies are decoded as `application/x-www-form-urlencoded`
//! whatever the request's Content-Type says. The canonical field is
//! `value`; when the legacy fallback is on, a field named after the key
//! itself is accepted too, which is what older clients send
//! (`0001=apple`).
//!
//! POST and PUT share the lookup, and an empty `value` counts as absent for
//! both: a PUT body of `value=&0001=x` stores `x`, not the empty string. A
//! PUT that carries no non-empty candidate stores `""`.

use url::form_urlencoded;

use crate::error::RequestError;

/// Canonical form field carrying the member value.
pub const VALUE_FIELD: &str = "value";

/// Decoded form body, in the order the fields were sent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    /// Decode `body` for the request addressed to `key`.
    pub fn decode(key: &str, body: &[u8]) -> Result<Self, RequestError> {
        if std::str::from_utf8(body).is_err() {
            return Err(RequestError::InvalidForm {
                key: key.to_string(),
            });
        }
        let fields = form_urlencoded::parse(body).into_owned().collect();
        Ok(Self { fields })
    }

    /// First occurrence of `name`, if any.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// The member value for `key`: the canonical field when non-empty,
    /// otherwise the key-named field if `legacy_key_field` is set. Empty
    /// strings count as absent.
    pub fn member_value(&self, key: &str, legacy_key_field: bool) -> Option<String> {
        let canonical = self.field(VALUE_FIELD).filter(|v| !v.is_empty());
        let legacy = || {
            legacy_key_field
                .then(|| self.field(key))
                .flatten()
                .filter(|v| !v.is_empty())
        };
        canonical.or_else(legacy).map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> FormBody {
        FormBody::decode("0001", body.as_bytes()).unwrap()
    }

    #[test]
    fn canonical_field_wins() {
        let form = decode("0001=apple&value=mango");
        assert_eq!(form.member_value("0001", true).as_deref(), Some("mango"));
    }

    #[test]
    fn falls_back_to_key_named_field() {
        let form = decode("0001=apple");
        assert_eq!(form.member_value("0001", true).as_deref(), Some("apple"));
    }

    #[test]
    fn fallback_can_be_disabled() {
        let form = decode("0001=apple");
        assert_eq!(form.member_value("0001", false), None);
    }

    #[test]
    fn empty_canonical_falls_through() {
        let form = decode("value=&0001=apple");
        assert_eq!(form.member_value("0001", true).as_deref(), Some("apple"));
        assert_eq!(decode("value=").member_value("0001", true), None);
    }

    #[test]
    fn percent_and_plus_are_decoded() {
        let form = decode("value=green%20apple+pie%26co");
        assert_eq!(
            form.member_value("0001", true).as_deref(),
            Some("green apple pie&co")
        );
    }

    #[test]
    fn first_duplicate_field_wins() {
        let form = decode("value=first&value=second");
        assert_eq!(form.field("value"), Some("first"));
    }

    #[test]
    fn empty_body_has_no_value() {
        assert_eq!(decode("").member_value("0001", true), None);
    }

    #[test]
    fn non_utf8_body_is_rejected() {
        let err = FormBody::decode("0001", &[0x76, 0x3d, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, RequestError::InvalidForm { ref key } if key == "0001"));
    }
}
