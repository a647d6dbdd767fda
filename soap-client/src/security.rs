//! WS-Security UsernameToken header generation
//!
//! ONVIF devices authenticate SOAP requests with an OASIS UsernameToken
//! carrying a password digest: `Base64(SHA1(nonce + created + password))`.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chrono::{DateTime, SecondsFormat, Utc};
use rand::RngCore;
use sha1::{Digest, Sha1};

const WSSE_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-secext-1.0.xsd";
const WSU_NS: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-wssecurity-utility-1.0.xsd";
const PASSWORD_DIGEST_TYPE: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-username-token-profile-1.0#PasswordDigest";
const NONCE_ENCODING: &str =
    "http://docs.oasis-open.org/wss/2004/01/oasis-200401-wss-soap-message-security-1.0#Base64Binary";

/// Username and password used to sign requests
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Build a `wsse:Security` header with a fresh random nonce
    pub fn security_header(&self) -> String {
        let mut nonce = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut nonce);
        self.security_header_with(&nonce, Utc::now())
    }

    /// Build a `wsse:Security` header from an explicit nonce and timestamp
    pub fn security_header_with(&self, nonce: &[u8], created: DateTime<Utc>) -> String {
        let created = created.to_rfc3339_opts(SecondsFormat::Secs, true);
        let digest = password_digest(nonce, &created, &self.password);

        format!(
            r#"<wsse:Security xmlns:wsse="{wsse}" xmlns:wsu="{wsu}"><wsse:UsernameToken><wsse:Username>{user}</wsse:Username><wsse:Password Type="{ptype}">{digest}</wsse:Password><wsse:Nonce EncodingType="{enc}">{nonce}</wsse:Nonce><wsu:Created>{created}</wsu:Created></wsse:UsernameToken></wsse:Security>"#,
            wsse = WSSE_NS,
            wsu = WSU_NS,
            user = escape_text(&self.username),
            ptype = PASSWORD_DIGEST_TYPE,
            digest = digest,
            enc = NONCE_ENCODING,
            nonce = BASE64.encode(nonce),
            created = created,
        )
    }
}

// Never print the password.
impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

/// Compute the UsernameToken password digest
pub fn password_digest(nonce: &[u8], created: &str, password: &str) -> String {
    let mut hasher = Sha1::new();
    hasher.update(nonce);
    hasher.update(created.as_bytes());
    hasher.update(password.as_bytes());
    BASE64.encode(hasher.finalize())
}

/// Escape the five XML special characters in element text
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
