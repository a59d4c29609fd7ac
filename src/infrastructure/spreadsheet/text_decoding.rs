// ============================================================
// TEXT DECODING
// ============================================================
// Turn uploaded bytes into text for the delimited reader

use encoding_rs::{Encoding, UTF_8, WINDOWS_1252};

/// Decode uploaded bytes: BOM first, then strict UTF-8, then Windows-1252
pub fn decode_text(bytes: &[u8]) -> String {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return text.into_owned();
    }

    if let Some(text) = UTF_8.decode_without_bom_handling_and_without_replacement(bytes) {
        return text.into_owned();
    }

    // Excel "CSV" exports on Windows are usually cp1252
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(bytes);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_utf8() {
        assert_eq!(decode_text("Name,José".as_bytes()), "Name,José");
    }

    #[test]
    fn test_strips_utf8_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice(b"EmployeeID,Name");
        assert_eq!(decode_text(&bytes), "EmployeeID,Name");
    }

    #[test]
    fn test_utf16_bom() {
        let bytes = [0xFF, 0xFE, b'I', 0x00, b'D', 0x00];
        assert_eq!(decode_text(&bytes), "ID");
    }

    #[test]
    fn test_windows_1252_fallback() {
        // "José" with é as 0xE9
        let bytes = [b'J', b'o', b's', 0xE9];
        assert_eq!(decode_text(&bytes), "José");
    }
}
