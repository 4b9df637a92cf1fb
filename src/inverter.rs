//! Color inversion
//!
//! This module rewrites `#RRGGBB` and `#RGB` color codes found in a line of
//! text into their bitwise complement (`#ffffff - code`).

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::{BRAND_SUBSTITUTIONS, COLOR_MARKER};

static LONG_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-F]{6}[^0-9a-fA-F]")
        .expect("Failed to compile regex pattern for LONG_UPPER")
});
static LONG_LOWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{6}[^0-9a-fA-F]")
        .expect("Failed to compile regex pattern for LONG_LOWER")
});
static SHORT_UPPER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9A-F]{3}[^0-9a-fA-F]")
        .expect("Failed to compile regex pattern for SHORT_UPPER")
});
static SHORT_LOWER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9a-f]{3}[^0-9a-fA-F]")
        .expect("Failed to compile regex pattern for SHORT_LOWER")
});

/// Number of hex digits in a color code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DigitWidth {
    /// `#RGB`
    Short,
    /// `#RRGGBB`
    Long,
}

impl DigitWidth {
    /// Number of digits for this width
    pub fn digits(&self) -> usize {
        match self {
            DigitWidth::Short => 3,
            DigitWidth::Long => 6,
        }
    }

    /// Largest value representable with this many hex digits
    pub fn max_value(&self) -> u32 {
        (1 << (4 * self.digits())) - 1
    }

    /// Uppercase pattern first, then lowercase
    fn patterns(&self) -> [&'static Regex; 2] {
        match self {
            DigitWidth::Short => [&*SHORT_UPPER, &*SHORT_LOWER],
            DigitWidth::Long => [&*LONG_UPPER, &*LONG_LOWER],
        }
    }

    /// Value of the color code at the start of `segment`, if there is one
    fn parse_code(&self, segment: &str) -> Option<u32> {
        let digits = self
            .patterns()
            .iter()
            .find_map(|pattern| pattern.find(segment))
            .map(|_| &segment[..self.digits()])?;

        u32::from_str_radix(digits, 16).ok()
    }

    /// Complement of `value`, zero-padded to this width
    fn complement(&self, value: u32) -> String {
        format!("{:0width$x}", self.max_value() - value, width = self.digits())
    }
}

/// Inverts every color code of the given width in a line
///
/// The line is split on `#`; each segment that starts with exactly
/// `width` hex digits of a single case followed by a non-hex character
/// has those digits replaced by their complement, in lowercase. Anything
/// else passes through untouched, so this never fails.
///
/// # Examples
/// ```
/// use skin_invert::inverter::{invert_color, DigitWidth};
///
/// assert_eq!(invert_color("color: #112233;", DigitWidth::Long), "color: #eeddcc;");
/// assert_eq!(invert_color("#abc ", DigitWidth::Short), "#543 ");
/// ```
pub fn invert_color(line: &str, width: DigitWidth) -> String {
    let mut segments = line.split(COLOR_MARKER);
    let mut inverted = segments.next().unwrap_or_default().to_string();

    for segment in segments {
        inverted.push(COLOR_MARKER);
        match width.parse_code(segment) {
            Some(value) => {
                inverted.push_str(&width.complement(value));
                inverted.push_str(&segment[width.digits()..]);
            }
            None => inverted.push_str(segment),
        }
    }

    replace_brand(inverted)
}

/// Inverts both `#RRGGBB` and `#RGB` codes in a line
///
/// The long pass runs first; its lowercase output is always followed by
/// another hex digit after three characters, so the short pass leaves it
/// alone.
pub fn invert_line(line: &str) -> String {
    invert_color(&invert_color(line, DigitWidth::Long), DigitWidth::Short)
}

/// Inverts a whole text, line by line
///
/// Line endings are kept byte for byte, so a newline can terminate a
/// color code. `\r\n` and a lone `\r` are not normalised to `\n`: a CRLF
/// skin stays CRLF, unlike a text-mode rewrite that would turn it into LF.
pub fn invert_text(text: &str) -> String {
    text.split_inclusive('\n').map(invert_line).collect()
}

fn replace_brand(line: String) -> String {
    BRAND_SUBSTITUTIONS
        .iter()
        .fold(line, |acc, (from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_long_extremes() {
        assert_eq!(invert_color("#000000;", DigitWidth::Long), "#ffffff;");
        assert_eq!(invert_color("#FFFFFF;", DigitWidth::Long), "#000000;");
    }

    #[test]
    fn test_invert_short() {
        assert_eq!(invert_color("#abc ", DigitWidth::Short), "#543 ");
        assert_eq!(invert_color("#FFF\n", DigitWidth::Short), "#000\n");
    }

    #[test]
    fn test_output_is_zero_padded() {
        assert_eq!(invert_color("#fffff0;", DigitWidth::Long), "#00000f;");
        assert_eq!(invert_color("#ff0 ", DigitWidth::Short), "#00f ");
    }

    #[test]
    fn test_long_inversion_is_its_own_inverse() {
        for line in ["#123456;", "a #0a0b0c b", "x#ffffff\n", "#7f7f7f\"/>"] {
            let twice = invert_color(&invert_color(line, DigitWidth::Long), DigitWidth::Long);
            assert_eq!(twice, line);
        }
    }

    #[test]
    fn test_line_without_marker_is_unchanged() {
        let line = "<Style>background: red;</Style>\n";
        assert_eq!(invert_color(line, DigitWidth::Long), line);
        assert_eq!(invert_line(line), line);
    }

    #[test]
    fn test_non_hex_code_is_kept() {
        assert_eq!(invert_color("#zz1122;", DigitWidth::Long), "#zz1122;");
        assert_eq!(invert_line("#zz1122;"), "#zz1122;");
    }

    #[test]
    fn test_mixed_case_is_not_a_color() {
        assert_eq!(invert_color("#AbCdEf;", DigitWidth::Long), "#AbCdEf;");
        assert_eq!(invert_color("#aBc;", DigitWidth::Short), "#aBc;");
    }

    #[test]
    fn test_code_needs_a_boundary() {
        // End of line without a newline
        assert_eq!(invert_color("#112233", DigitWidth::Long), "#112233");
        // Too few digits
        assert_eq!(invert_color("#1122;", DigitWidth::Long), "#1122;");
        // Too many digits
        assert_eq!(invert_color("#11223344;", DigitWidth::Long), "#11223344;");
        // Trailing marker
        assert_eq!(invert_color("color: #", DigitWidth::Long), "color: #");
    }

    #[test]
    fn test_multiple_codes_on_one_line() {
        assert_eq!(
            invert_color("#000000,#FFFFFF;##123456 ", DigitWidth::Long),
            "#ffffff,#000000;##edcba9 "
        );
    }

    #[test]
    fn test_invert_line_handles_both_widths() {
        assert_eq!(invert_line("a: #112233; b: #abc;\n"), "a: #eeddcc; b: #543;\n");
        // The short pass does not touch the output of the long pass
        assert_eq!(invert_line("#000000;"), "#ffffff;");
    }

    #[test]
    fn test_brand_substitution() {
        assert_eq!(
            invert_color("PaleMoon skin in palemoon/", DigitWidth::Short),
            "PaleSun skin in palesun/"
        );
        assert_eq!(
            invert_line("<Title>PaleMoon</Title> #000000;"),
            "<Title>PaleSun</Title> #ffffff;"
        );
        // Case-sensitive
        assert_eq!(invert_line("PALEMOON"), "PALEMOON");
    }

    #[test]
    fn test_invert_text_keeps_line_endings() {
        let text = "color: #112233;\r\nplain\n#FFF\n#000";
        assert_eq!(invert_text(text), "color: #eeddcc;\r\nplain\n#000\n#000");
        assert_eq!(invert_text(""), "");
    }

    #[test]
    fn test_digit_width() {
        assert_eq!(DigitWidth::Short.digits(), 3);
        assert_eq!(DigitWidth::Long.digits(), 6);
        assert_eq!(DigitWidth::Short.max_value(), 0xfff);
        assert_eq!(DigitWidth::Long.max_value(), 0xffffff);
    }
}
