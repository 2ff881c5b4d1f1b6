// The standard Helvetica faces are written in WinAnsiEncoding. printpdf drops
// any character without a WinAnsi code, so values are checked before they
// reach the page.

use crate::error::AppError;

/// WinAnsi (cp1252) code for `ch`, if it has one. Control characters have
/// no glyph and map to `None`.
pub fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch {
        '\u{0020}'..='\u{007E}' => ch as u8,
        '\u{00A0}'..='\u{00FF}' => ch as u8,
        '\u{20AC}' => 0x80,
        '\u{201A}' => 0x82,
        '\u{0192}' => 0x83,
        '\u{201E}' => 0x84,
        '\u{2026}' => 0x85,
        '\u{2020}' => 0x86,
        '\u{2021}' => 0x87,
        '\u{02C6}' => 0x88,
        '\u{2030}' => 0x89,
        '\u{0160}' => 0x8A,
        '\u{2039}' => 0x8B,
        '\u{0152}' => 0x8C,
        '\u{017D}' => 0x8E,
        '\u{2018}' => 0x91,
        '\u{2019}' => 0x92,
        '\u{201C}' => 0x93,
        '\u{201D}' => 0x94,
        '\u{2022}' => 0x95,
        '\u{2013}' => 0x96,
        '\u{2014}' => 0x97,
        '\u{02DC}' => 0x98,
        '\u{2122}' => 0x99,
        '\u{0161}' => 0x9A,
        '\u{203A}' => 0x9B,
        '\u{0153}' => 0x9C,
        '\u{017E}' => 0x9E,
        '\u{0178}' => 0x9F,
        _ => return None,
    };
    Some(byte)
}

/// Fails on the first character of `value` the form fonts cannot print.
pub fn check_win_ansi(value: &str) -> Result<(), AppError> {
    match value.chars().find(|ch| win_ansi_byte(*ch).is_none()) {
        Some(ch) => Err(AppError::InputError(format!(
            "{:?} contains {:?} (U+{:04X}), which the form font cannot print",
            value, ch, ch as u32
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latin_names_are_printable() {
        for name in ["Thibodeaux", "Guidry-Hébert", "Françoise", "O\u{2019}Neil", "Nuñez"] {
            assert!(check_win_ansi(name).is_ok(), "{name}");
        }
        assert_eq!(win_ansi_byte('é'), Some(0xE9));
        assert_eq!(win_ansi_byte('\u{2019}'), Some(0x92));
    }

    #[test]
    fn unencodable_character_names_the_value() {
        let err = check_win_ansi("Nguyễn").unwrap_err();
        match err {
            AppError::InputError(message) => {
                assert!(message.contains("\"Nguyễn\""), "{message}");
                assert!(message.contains("U+1EC5"), "{message}");
            }
            other => panic!("expected an input error, got {other:?}"),
        }
    }

    #[test]
    fn control_characters_have_no_glyph() {
        assert_eq!(win_ansi_byte('\n'), None);
        assert_eq!(win_ansi_byte('\t'), None);
        assert!(check_win_ansi("line one\nline two").is_err());
    }
}
