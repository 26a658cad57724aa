//! Byte → text decoding for input files.

use std::path::Path;

use encoding_rs::{UTF_8, WINDOWS_1252};
use medcode_model::TextEncoding;

use crate::error::{IngestError, Result};

/// Decodes raw file contents.
///
/// Latin-1 input is decoded with the WHATWG `windows-1252` table, which is
/// what the `iso-8859-1` label resolves to. A UTF-8 byte order mark is removed.
pub fn decode_bytes(bytes: &[u8], encoding: TextEncoding) -> String {
    match encoding {
        TextEncoding::Latin1 => {
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            text.into_owned()
        }
        TextEncoding::Utf8 => {
            let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
            if had_errors {
                tracing::warn!("invalid UTF-8 sequences replaced while decoding");
            }
            text.into_owned()
        }
    }
}

/// Reads and decodes a whole file.
pub fn read_text(path: &Path, encoding: TextEncoding) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    Ok(decode_bytes(&bytes, encoding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin1_bytes_become_accented_letters() {
        // "crème" and "ë" in ISO-8859-1
        let bytes = [b'c', b'r', 0xE8, b'm', b'e', b' ', 0xEB];
        assert_eq!(decode_bytes(&bytes, TextEncoding::Latin1), "crème ë");
    }

    #[test]
    fn utf8_bom_is_removed() {
        let bytes = "\u{feff}PSEUDOIDEXT".as_bytes();
        assert_eq!(decode_bytes(bytes, TextEncoding::Utf8), "PSEUDOIDEXT");
    }
}
