// Advance widths for the two standard-14 faces the forms are set in.
//
// The built-in PDF fonts carry no metrics inside the document, so centering
// needs the AFM widths. Values are in 1/1000 em for ASCII 0x20..=0x7E.

use crate::style::Weight;

/// Width used for characters outside the printable ASCII range
const FALLBACK_WIDTH: u16 = 556;

#[rustfmt::skip]
const HELVETICA: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    278, 278, 584, 584, 584, 556, 1015,
    // A-Z
    667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    278, 278, 278, 469, 556, 333,
    // a-z
    556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833,
    556, 556, 556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500,
    // { | } ~
    334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD: [u16; 95] = [
    // space ! " # $ % & ' ( ) * + , - . /
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    // 0-9
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556,
    // : ; < = > ? @
    333, 333, 584, 584, 584, 611, 975,
    // A-Z
    722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833,
    722, 778, 667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611,
    // [ \ ] ^ _ `
    333, 278, 333, 584, 556, 333,
    // a-z
    556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889,
    611, 611, 611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500,
    // { | } ~
    389, 280, 389, 584,
];

fn char_width(character: char, weight: Weight) -> u16 {
    let table = match weight {
        Weight::Regular => &HELVETICA,
        Weight::Bold => &HELVETICA_BOLD,
    };
    let code = character as u32;
    if (0x20..=0x7E).contains(&code) {
        table[(code - 0x20) as usize]
    } else {
        FALLBACK_WIDTH
    }
}

/// Width of `text` in points when set at `size` points.
pub fn text_width(text: &str, size: f32, weight: Weight) -> f32 {
    let units: u32 = text.chars().map(|c| u32::from(char_width(c, weight))).sum();
    units as f32 * size / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_glyph_widths() {
        assert_eq!(text_width("A", 1000.0, Weight::Regular), 667.0);
        assert_eq!(text_width("A", 1000.0, Weight::Bold), 722.0);
        assert_eq!(text_width(" ", 1000.0, Weight::Bold), 278.0);
    }

    #[test]
    fn scales_with_size() {
        let at_ten = text_width("Petitioner", 10.0, Weight::Regular);
        let at_twenty = text_width("Petitioner", 20.0, Weight::Regular);
        assert!((at_twenty - 2.0 * at_ten).abs() < 1e-3);
    }

    #[test]
    fn bold_is_never_narrower() {
        let text = "LOUISIANA UNIFORM ABUSE PREVENTION ORDER";
        assert!(text_width(text, 12.0, Weight::Bold) >= text_width(text, 12.0, Weight::Regular));
    }

    #[test]
    fn title_fits_left_of_admin_box() {
        let width = text_width("LOUISIANA UNIFORM ABUSE PREVENTION ORDER", 12.0, Weight::Bold);
        assert!((width - 298.68).abs() < 0.01);
    }

    #[test]
    fn non_ascii_uses_fallback() {
        assert_eq!(text_width("é", 1000.0, Weight::Regular), 556.0);
        assert_eq!(text_width("", 12.0, Weight::Regular), 0.0);
    }
}
