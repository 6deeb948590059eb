//! Content-based binary detection.
//!
//! Whether a file needs signing is decided from its leading bytes, never
//! from its name: executables and dylibs in an app bundle frequently have
//! no extension at all, while text resources may use arbitrary ones.

use super::error::{Error, ErrorExt, Result};
use std::{future::Future, path::Path, pin::Pin};
use tokio::io::AsyncReadExt;

/// Number of leading bytes inspected by [`ContentSniffer`].
pub const SNIFF_LEN: usize = 512;

/// Boxed future returned by [`BinaryDetector::is_binary`].
pub type DetectFuture<'a> = Pin<Box<dyn Future<Output = Result<bool>> + Send + 'a>>;

/// Decides whether a regular file is a binary that needs signing.
///
/// Implementations read the file but must not modify or lock it. A read
/// failure is returned as an error; it must never be reported as "not
/// binary".
pub trait BinaryDetector: Send + Sync {
    /// Returns `true` if the file at `path` is binary.
    fn is_binary<'a>(&'a self, path: &'a Path) -> DetectFuture<'a>;
}

/// Default [`BinaryDetector`] that sniffs the first [`SNIFF_LEN`] bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct ContentSniffer;

impl BinaryDetector for ContentSniffer {
    fn is_binary<'a>(&'a self, path: &'a Path) -> DetectFuture<'a> {
        Box::pin(async move {
            let head = read_head(path).await?;
            Ok::<_, Error>(looks_binary(&head))
        })
    }
}

/// Reads up to [`SNIFF_LEN`] bytes from the start of `path`.
async fn read_head(path: &Path) -> Result<Vec<u8>> {
    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("failed to open file for content inspection", path)?;

    let mut buffer = vec![0u8; SNIFF_LEN];
    let mut filled = 0;
    while filled < SNIFF_LEN {
        let n = file
            .read(&mut buffer[filled..])
            .await
            .fs_context("failed to read file for content inspection", path)?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    buffer.truncate(filled);
    Ok(buffer)
}

const MACHO_MAGICS: [[u8; 4]; 5] = [
    [0xfe, 0xed, 0xfa, 0xce],
    [0xfe, 0xed, 0xfa, 0xcf],
    [0xce, 0xfa, 0xed, 0xfe],
    [0xcf, 0xfa, 0xed, 0xfe],
    [0xca, 0xfe, 0xba, 0xbe],
];

const TEXT_BOMS: [&[u8]; 5] = [
    &[0xef, 0xbb, 0xbf],
    &[0x00, 0x00, 0xfe, 0xff],
    &[0xff, 0xfe, 0x00, 0x00],
    &[0xfe, 0xff],
    &[0xff, 0xfe],
];

/// Percentage of suspicious bytes above which a buffer is binary.
const SUSPICIOUS_PERCENT: usize = 10;

/// Heuristic binary check over a file's leading bytes.
///
/// Empty input is text. Unicode byte-order marks mark text; Mach-O magic
/// and `%PDF-` mark binary; any NUL byte marks binary. Otherwise the buffer
/// is binary when more than 10% of its bytes are control characters or
/// bytes outside a well-formed UTF-8 sequence.
pub fn looks_binary(bytes: &[u8]) -> bool {
    if bytes.is_empty() {
        return false;
    }

    if TEXT_BOMS.iter().any(|bom| bytes.starts_with(bom)) {
        return false;
    }

    if MACHO_MAGICS.iter().any(|magic| bytes.starts_with(magic)) || bytes.starts_with(b"%PDF-") {
        return true;
    }

    if bytes.contains(&0) {
        return true;
    }

    let mut suspicious = 0usize;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if is_control(b) {
            suspicious += 1;
            i += 1;
            continue;
        }
        if b < 0x80 {
            i += 1;
            continue;
        }
        match utf8_sequence_len(&bytes[i..]) {
            Some(len) => i += len,
            // A sequence cut off by the end of the sniff window is not suspicious.
            None if is_truncated_sequence(&bytes[i..]) => break,
            None => {
                suspicious += 1;
                i += 1;
            }
        }
    }

    suspicious * 100 / bytes.len() > SUSPICIOUS_PERCENT
}

fn is_control(b: u8) -> bool {
    // Tab, newline, form feed, carriage return and ESC occur in real text.
    b < 7 || (b > 14 && b < 32 && b != 0x1b)
}

/// Length of the well-formed UTF-8 sequence at the start of `bytes`.
fn utf8_sequence_len(bytes: &[u8]) -> Option<usize> {
    let len = match *bytes.first()? {
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return None,
    };
    let seq = bytes.get(..len)?;
    std::str::from_utf8(seq).ok().map(|_| len)
}

fn is_truncated_sequence(bytes: &[u8]) -> bool {
    let want = match bytes.first().copied() {
        Some(0xc2..=0xdf) => 2,
        Some(0xe0..=0xef) => 3,
        Some(0xf0..=0xf4) => 4,
        _ => return false,
    };
    bytes.len() < want && bytes[1..].iter().all(|b| (0x80..=0xbf).contains(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_text() {
        assert!(!looks_binary(b""));
    }

    #[test]
    fn plain_and_unicode_text() {
        assert!(!looks_binary(b"<?xml version=\"1.0\"?>\n<plist>\n</plist>\n"));
        assert!(!looks_binary("Grüße, 世界 🚀\n".as_bytes()));
        assert!(!looks_binary(b"\x1b[1mbold\x1b[0m\r\n\t"));
    }

    #[test]
    fn bom_prefixed_utf16_is_text() {
        let mut bytes = vec![0xff, 0xfe];
        for c in "hello".encode_utf16() {
            bytes.extend_from_slice(&c.to_le_bytes());
        }
        assert!(!looks_binary(&bytes));
    }

    #[test]
    fn macho_and_fat_magic_are_binary() {
        assert!(looks_binary(&[0xcf, 0xfa, 0xed, 0xfe, 0x07, 0x00, 0x00, 0x01]));
        assert!(looks_binary(&[0xca, 0xfe, 0xba, 0xbe, 0x00, 0x00, 0x00, 0x02]));
    }

    #[test]
    fn pdf_is_binary() {
        assert!(looks_binary(b"%PDF-1.7\n"));
    }

    #[test]
    fn nul_byte_is_binary() {
        assert!(looks_binary(b"looks like text\0but is not"));
    }

    #[test]
    fn control_heavy_buffer_is_binary() {
        let bytes: Vec<u8> = (0..64).map(|i| if i % 4 == 0 { 0x01 } else { b'a' }).collect();
        assert!(looks_binary(&bytes));
    }

    #[test]
    fn invalid_utf8_heavy_buffer_is_binary() {
        let bytes: Vec<u8> = (0..64).map(|i| if i % 3 == 0 { 0xff } else { b'a' }).collect();
        assert!(looks_binary(&bytes));
    }

    #[test]
    fn truncated_multibyte_at_window_end_is_text() {
        let mut bytes = "ä".repeat(10).into_bytes();
        bytes.push(0xe4);
        bytes.push(0xb8);
        assert!(!looks_binary(&bytes));
    }

    #[tokio::test]
    async fn sniffer_reads_only_the_head() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("big.txt");
        let mut content = "a".repeat(SNIFF_LEN).into_bytes();
        // Binary tail past the sniff window is not inspected.
        content.extend_from_slice(&[0u8; 64]);
        std::fs::write(&path, content).unwrap();

        assert!(!ContentSniffer.is_binary(&path).await.unwrap());
    }

    #[tokio::test]
    async fn sniffer_missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ContentSniffer
            .is_binary(&dir.path().join("gone"))
            .await
            .unwrap_err();
        assert!(err.path().is_some());
    }
}
