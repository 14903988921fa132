//! Encoding name to `encoding_rs` encoding mapping.
//!
//! Accepts the short names people tend to type on a command line
//! (`latin1`, `ansi_1252`, `utf8`) in addition to every WHATWG label that
//! `encoding_rs` knows about.

use encoding_rs::Encoding;

/// Get the `encoding_rs` encoding for an encoding name.
///
/// Returns `None` if the name is not recognized.
///
/// # Rules
/// - Names are matched case-insensitively, surrounding whitespace ignored.
/// - `ascii` maps to windows-1252, as it does in the WHATWG encoding standard.
/// - Windows code pages may be written as `ansi_<n>`, `cp<n>` or `windows-<n>`.
pub fn encoding_for_label(name: &str) -> Option<&'static Encoding> {
    let name = name.trim().to_ascii_lowercase();
    let encoding = match name.as_str() {
        "utf8" | "utf-8" | "unicode" => encoding_rs::UTF_8,
        "ascii" | "us-ascii" | "latin1" | "latin-1" | "iso8859-1" | "iso_8859-1" => {
            encoding_rs::WINDOWS_1252
        }

        // Windows/ANSI code pages
        "ansi_874" | "cp874" => encoding_rs::WINDOWS_874,
        "ansi_1250" | "cp1250" => encoding_rs::WINDOWS_1250,
        "ansi_1251" | "cp1251" => encoding_rs::WINDOWS_1251,
        "ansi_1252" | "cp1252" => encoding_rs::WINDOWS_1252,
        "ansi_1253" | "cp1253" => encoding_rs::WINDOWS_1253,
        "ansi_1254" | "cp1254" => encoding_rs::WINDOWS_1254,
        "ansi_1255" | "cp1255" => encoding_rs::WINDOWS_1255,
        "ansi_1256" | "cp1256" => encoding_rs::WINDOWS_1256,
        "ansi_1257" | "cp1257" => encoding_rs::WINDOWS_1257,
        "ansi_1258" | "cp1258" => encoding_rs::WINDOWS_1258,

        // Asian encodings
        "gb2312" | "ansi_936" | "cp936" => encoding_rs::GBK,
        "ansi_950" | "cp950" => encoding_rs::BIG5,
        "ansi_949" | "cp949" => encoding_rs::EUC_KR,
        "ansi_932" | "cp932" => encoding_rs::SHIFT_JIS,

        // Everything else goes through the WHATWG label table
        other => return Encoding::for_label(other.as_bytes()),
    };
    Some(encoding)
}
