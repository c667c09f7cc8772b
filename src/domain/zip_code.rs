pub const ZIP_CODE_REQUIRED: &str = "Zip-code is required";
pub const ZIP_CODE_MALFORMED: &str = "Zip-code must match 99999-999";

/// A zip-code in the `NNNNN-NNN` format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZipCode(String);

impl ZipCode {
    pub fn parse(s: String) -> Result<ZipCode, String> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ZIP_CODE_REQUIRED.to_string());
        }

        let bytes = trimmed.as_bytes();
        let well_formed = bytes.len() == 9
            && bytes[5] == b'-'
            && bytes[..5].iter().all(u8::is_ascii_digit)
            && bytes[6..].iter().all(u8::is_ascii_digit);

        if well_formed {
            Ok(Self(trimmed.to_string()))
        } else {
            Err(ZIP_CODE_MALFORMED.to_string())
        }
    }
}

impl AsRef<str> for ZipCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
