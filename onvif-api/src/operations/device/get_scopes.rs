//! GetScopes operation for the Device service
//!
//! Scope URIs look like `onvif://www.onvif.org/name/Front%20Door`. The
//! values are percent-encoded on the wire and decoded here.

use std::collections::BTreeMap;

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::types::scope_keys;
use crate::xml;

/// Common prefix of all standard ONVIF scopes
pub const SCOPE_PREFIX: &str = "onvif://www.onvif.org/";

/// Characters left unescaped in scope values
const SCOPE_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

crate::define_onvif_operation! {
    /// List the scope URIs configured on the device
    operation: GetScopesOperation,
    action: "GetScopes",
    service: Device,
    request: {},
    response: Vec<String>,
    payload: |_req| Ok(String::new()),
    parse: |response| Ok(xml::children(response, "Scopes")
        .filter_map(|scope| xml::text(scope, &["ScopeItem"]))
        .collect()),
}

/// Build a standard scope URI such as `onvif://www.onvif.org/name/<value>`
pub fn scope_uri(kind: &str, value: &str) -> String {
    format!("{}{}/{}", SCOPE_PREFIX, kind, utf8_percent_encode(value, SCOPE_VALUE))
}

/// Reduce raw scope URIs to the `name`, `location` and `hardware` entries
///
/// Non-standard scopes are ignored. When a key repeats, the last one wins.
pub fn scope_map(scopes: &[String]) -> BTreeMap<String, String> {
    let mut map = BTreeMap::new();
    for scope in scopes {
        let Some(rest) = scope.strip_prefix(SCOPE_PREFIX) else {
            continue;
        };
        let Some((kind, value)) = rest.split_once('/') else {
            continue;
        };
        if [scope_keys::NAME, scope_keys::LOCATION, scope_keys::HARDWARE].contains(&kind) {
            let decoded = percent_decode_str(value).decode_utf8_lossy().into_owned();
            map.insert(kind.to_string(), decoded);
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::OnvifOperation;
    use proptest::prelude::*;
    use xmltree::Element;

    #[test]
    fn test_get_scopes_response_parsing() {
        let xml_str = r#"
            <tds:GetScopesResponse xmlns:tds="http://www.onvif.org/ver10/device/wsdl"
                                   xmlns:tt="http://www.onvif.org/ver10/schema">
                <tds:Scopes>
                    <tt:ScopeDef>Fixed</tt:ScopeDef>
                    <tt:ScopeItem>onvif://www.onvif.org/type/video_encoder</tt:ScopeItem>
                </tds:Scopes>
                <tds:Scopes>
                    <tt:ScopeDef>Configurable</tt:ScopeDef>
                    <tt:ScopeItem>onvif://www.onvif.org/name/Front%20Door</tt:ScopeItem>
                </tds:Scopes>
                <tds:Scopes>
                    <tt:ScopeDef>Configurable</tt:ScopeDef>
                    <tt:ScopeItem>onvif://www.onvif.org/location/country/nl</tt:ScopeItem>
                </tds:Scopes>
                <tds:Scopes>
                    <tt:ScopeDef>Fixed</tt:ScopeDef>
                    <tt:ScopeItem>onvif://www.onvif.org/hardware/IPC-100</tt:ScopeItem>
                </tds:Scopes>
            </tds:GetScopesResponse>
        "#;
        let xml = Element::parse(xml_str.as_bytes()).unwrap();

        let scopes = GetScopesOperation::parse_response(&xml).unwrap();
        assert_eq!(scopes.len(), 4);

        let map = scope_map(&scopes);
        assert_eq!(map.len(), 3);
        assert_eq!(map[scope_keys::NAME], "Front Door");
        assert_eq!(map[scope_keys::LOCATION], "country/nl");
        assert_eq!(map[scope_keys::HARDWARE], "IPC-100");
    }

    #[test]
    fn test_scope_map_ignores_foreign_scopes() {
        let scopes = vec![
            "http://example.com/name/x".to_string(),
            "onvif://www.onvif.org/Profile/Streaming".to_string(),
        ];
        assert!(scope_map(&scopes).is_empty());
    }

    #[test]
    fn test_scope_uri_encodes_value() {
        assert_eq!(
            scope_uri(scope_keys::NAME, "Front Door/1"),
            "onvif://www.onvif.org/name/Front%20Door%2F1"
        );
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_scope_values_survive_encoding(value in "\\PC{0,24}") {
            let uri = scope_uri(scope_keys::LOCATION, &value);
            let map = scope_map(&[uri]);
            prop_assert_eq!(map.get(scope_keys::LOCATION).map(String::as_str), Some(value.as_str()));
        }
    }
}
