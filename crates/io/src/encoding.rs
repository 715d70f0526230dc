// Text encoding detection and strict decoding

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Number of leading bytes fed to the statistical detector.
pub const SAMPLE_BYTES: usize = 10_000;

/// Fallbacks tried, in order, after the detected encoding.
pub const FALLBACK_LABELS: [&str; 4] = ["utf-8", "iso-8859-1", "windows-1252", "latin1"];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A decoder for one candidate encoding.
///
/// `encoding_rs` follows WHATWG, where `iso-8859-1` and `latin1` are aliases for
/// windows-1252. Those labels get a true Latin-1 decoder instead: every byte maps
/// to the code point of the same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Codec {
    Latin1,
    Whatwg(&'static Encoding),
}

impl Codec {
    pub fn for_label(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "latin1" | "latin-1" | "l1" | "iso-8859-1" | "iso8859-1" | "iso_8859-1" => {
                Some(Self::Latin1)
            }
            other => Encoding::for_label(other.as_bytes()).map(Self::Whatwg),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Latin1 => "ISO-8859-1",
            Self::Whatwg(encoding) => encoding.name(),
        }
    }

    /// Decode the whole buffer, or `None` on the first malformed sequence.
    pub fn decode(&self, bytes: &[u8]) -> Option<String> {
        match self {
            Self::Latin1 => Some(bytes.iter().map(|&b| char::from(b)).collect()),
            Self::Whatwg(encoding) => {
                let bytes = if *encoding == encoding_rs::UTF_8 {
                    bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes)
                } else {
                    bytes
                };
                encoding
                    .decode_without_bom_handling_and_without_replacement(bytes)
                    .map(|text| text.into_owned())
            }
        }
    }
}

/// Best-guess encoding for a byte sample. `complete` says whether the sample
/// is the entire file.
pub fn detect_encoding(sample: &[u8], complete: bool) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(sample, complete);
    detector.guess(None, true)
}

/// Candidate labels: the detected one first, then the fallbacks.
/// Repeats are dropped, first occurrence wins.
pub fn candidate_labels(detected: &str) -> Vec<String> {
    let mut labels: Vec<String> = Vec::with_capacity(FALLBACK_LABELS.len() + 1);
    for label in std::iter::once(detected).chain(FALLBACK_LABELS) {
        if !labels.iter().any(|seen| seen.eq_ignore_ascii_case(label)) {
            labels.push(label.to_string());
        }
    }
    labels
}
