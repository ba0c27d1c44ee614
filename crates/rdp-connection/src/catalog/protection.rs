//! Protected password support for [`TerminalServiceClient`].
//!
//! The `password 51` field stores the password as UTF-16LE bytes passed
//! through a platform data-protection facility (DPAPI on Windows). The
//! facility itself is supplied by the caller as a [`DataProtector`].

use super::client::{PASSWORD_FIELD, TerminalServiceClient};
use crate::error::ProtectionError;
use crate::model::{PropertySet, Value};

/// Encrypts and decrypts opaque blobs for the current user.
pub trait DataProtector {
    type Error: std::error::Error + Send + Sync + 'static;

    fn protect(&self, data: &[u8]) -> Result<Vec<u8>, Self::Error>;

    fn unprotect(&self, data: &[u8]) -> Result<Vec<u8>, Self::Error>;
}

fn protector_error<E: std::error::Error + Send + Sync + 'static>(err: E) -> ProtectionError {
    ProtectionError::Protector(Box::new(err))
}

fn encode_utf16le(text: &str) -> Vec<u8> {
    text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

fn decode_utf16le(bytes: &[u8]) -> Result<String, ProtectionError> {
    if bytes.len() % 2 != 0 {
        return Err(ProtectionError::InvalidUtf16);
    }
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    String::from_utf16(&units).map_err(|_| ProtectionError::InvalidUtf16)
}

impl PropertySet<TerminalServiceClient> {
    /// Protects `raw` and stores it in `password 51`.
    pub fn set_password<P: DataProtector>(
        &mut self,
        raw: &str,
        protector: &P,
    ) -> Result<(), ProtectionError> {
        let protected = protector
            .protect(&encode_utf16le(raw))
            .map_err(protector_error)?;
        self.put(PASSWORD_FIELD.source_name, Some(Value::Bytes(protected)));
        Ok(())
    }

    /// Unprotects and decodes the stored password.
    pub fn password<P: DataProtector>(&self, protector: &P) -> Result<String, ProtectionError> {
        let protected = self
            .get_bytes(PASSWORD_FIELD.source_name)
            .ok_or(ProtectionError::Missing)?;
        let raw = protector.unprotect(protected).map_err(protector_error)?;
        decode_utf16le(&raw)
    }

    /// Replaces the stored password with a protected empty password.
    pub fn redact_password<P: DataProtector>(&mut self, protector: &P) -> Result<(), ProtectionError> {
        self.set_password("", protector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{MarshalOptions, Marshaller};

    /// XORs every byte; enough to tell protected from raw.
    struct XorProtector(u8);

    #[derive(Debug, thiserror::Error)]
    #[error("refused")]
    struct Refused;

    impl DataProtector for XorProtector {
        type Error = Refused;

        fn protect(&self, data: &[u8]) -> Result<Vec<u8>, Refused> {
            Ok(data.iter().map(|b| b ^ self.0).collect())
        }

        fn unprotect(&self, data: &[u8]) -> Result<Vec<u8>, Refused> {
            self.protect(data)
        }
    }

    struct Failing;

    impl DataProtector for Failing {
        type Error = Refused;

        fn protect(&self, _: &[u8]) -> Result<Vec<u8>, Refused> {
            Err(Refused)
        }

        fn unprotect(&self, _: &[u8]) -> Result<Vec<u8>, Refused> {
            Err(Refused)
        }
    }

    #[test]
    fn test_utf16le() {
        assert_eq!(encode_utf16le("A"), vec![0x41, 0x00]);
        assert_eq!(decode_utf16le(&[0x41, 0x00, 0xE9, 0x00]).unwrap(), "Aé");
        assert!(matches!(decode_utf16le(&[0x41]), Err(ProtectionError::InvalidUtf16)));
        assert!(matches!(
            decode_utf16le(&[0x00, 0xD8]),
            Err(ProtectionError::InvalidUtf16)
        ));
    }

    #[test]
    fn test_password_roundtrip() {
        let protector = XorProtector(0xFF);
        let mut set = PropertySet::<TerminalServiceClient>::new();
        assert!(matches!(set.password(&protector), Err(ProtectionError::Missing)));

        set.set_password("A", &protector).unwrap();
        assert_eq!(set.get_bytes("Password"), Some(&[0xBEu8, 0xFF][..]));
        assert_eq!(set.password(&protector).unwrap(), "A");

        let text = Marshaller::default().serialize_to_string(&set).unwrap();
        assert_eq!(text, "password 51:b:BEFF\r\n");

        let decoded: PropertySet<TerminalServiceClient> =
            Marshaller::default().deserialize_str(&text).unwrap();
        assert_eq!(decoded.password(&protector).unwrap(), "A");
    }

    #[test]
    fn test_redact_password() {
        let protector = XorProtector(0x5A);
        let mut set = PropertySet::<TerminalServiceClient>::new();
        set.set_password("secret", &protector).unwrap();
        set.redact_password(&protector).unwrap();

        assert_eq!(set.get_bytes("Password"), Some(&[][..]));
        assert_eq!(set.password(&protector).unwrap(), "");

        let lines = Marshaller::new(MarshalOptions::strict())
            .serialize(&set)
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(lines, vec!["password 51:b:"]);
    }

    #[test]
    fn test_protector_failure() {
        let mut set = PropertySet::<TerminalServiceClient>::new();
        let err = set.set_password("x", &Failing).unwrap_err();
        assert_eq!(err.to_string(), "data protection failed: refused");
        assert!(!set.contains("Password"));
    }
}
