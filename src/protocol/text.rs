//! # Display Text
//!
//! Page text handling: inline style tokens, escaping of untrusted input, and
//! normalization to the sign's character set.
//!
//! ## Inline Tokens
//!
//! Page content may embed bracketed tokens that change how the following text
//! is shown. They are plain text as far as this crate is concerned and survive
//! both [`escape`] and [`normalize`] untouched.
//!
//! | Prefix | Purpose | Range |
//! |--------|---------|-------|
//! | `<Cx>` | Colour | `A`..`Z` |
//! | `<Fx>` | Entry effect / speed | `A`..`Z` |
//! | `<Sx>` | Flashing / italic / bold | `A`..`H` |
//!
//! ## Control Tags
//!
//! A handful of tags reprogram the sign instead of styling text (define a
//! page, delete all timers, set the clock, ...). The firmware has proven
//! unstable when these appear in unexpected places: it can stop consuming
//! input until it is physically power-cycled. [`escape`] removes them from
//! untrusted text. It is never applied implicitly.
//!
//! ## Example
//!
//! ```
//! use prolite::protocol::text;
//!
//! let untrusted = "Héllo <IDFF><DP*>world";
//! let safe = text::escape(&text::normalize(untrusted));
//! assert_eq!(safe, "Hello world");
//! assert_eq!(text::format(false, false, true), text::FORMAT_BOLD);
//! ```

use deunicode::deunicode_char;
use log::debug;
use unicode_normalization::UnicodeNormalization;

use super::fold;

// ============================================================================
// COLOURS
// ============================================================================

pub const COLOR_DIM_RED: &str = "<CA>";
pub const COLOR_RED: &str = "<CB>";
pub const COLOR_BRIGHT_RED: &str = "<CC>";
pub const COLOR_ORANGE: &str = "<CD>";
pub const COLOR_BRIGHT_ORANGE: &str = "<CE>";
pub const COLOR_LIGHT_YELLOW: &str = "<CF>";
pub const COLOR_YELLOW: &str = "<CG>";
pub const COLOR_BRIGHT_YELLOW: &str = "<CH>";
pub const COLOR_LIME: &str = "<CI>";
pub const COLOR_DIM_LIME: &str = "<CJ>";
pub const COLOR_BRIGHT_LIME: &str = "<CK>";
pub const COLOR_BRIGHT_GREEN: &str = "<CL>";
pub const COLOR_GREEN: &str = "<CM>";
pub const COLOR_DIM_GREEN: &str = "<CN>";
pub const COLOR_YELLOW_GREEN_RED: &str = "<CO>";
pub const COLOR_RAINBOW: &str = "<CP>";
pub const COLOR_RED_GREEN_3D: &str = "<CQ>";
pub const COLOR_RED_YELLOW_3D: &str = "<CR>";
pub const COLOR_GREEN_RED_3D: &str = "<CS>";
pub const COLOR_GREEN_YELLOW_3D: &str = "<CT>";
pub const COLOR_GREEN_ON_RED: &str = "<CU>";
pub const COLOR_RED_ON_GREEN: &str = "<CV>";
pub const COLOR_ORANGE_ON_GREEN_3D: &str = "<CW>";
pub const COLOR_LIME_ON_RED_3D: &str = "<CX>";
pub const COLOR_GREEN_ON_RED_3D: &str = "<CY>";
pub const COLOR_RED_ON_GREEN_3D: &str = "<CZ>";

// ============================================================================
// EFFECTS
// ============================================================================

/// Random colour and presentation
pub const DISPLAY_AUTO: &str = "<FA>";
/// Open from center
pub const DISPLAY_OPEN: &str = "<FB>";
/// Covers text
pub const DISPLAY_COVER: &str = "<FC>";
/// Instantly replaces text
pub const DISPLAY_APPEAR: &str = "<FD>";
/// Rolling colours
pub const DISPLAY_CYCLING: &str = "<FE>";
/// Blank screen right to left
pub const DISPLAY_CLOSE_RL: &str = "<FF>";
/// Blank screen left to right
pub const DISPLAY_CLOSE_LR: &str = "<FG>";
/// Blank screen outer to center
pub const DISPLAY_CLOSE_OC: &str = "<FH>";
/// Scroll up from bottom
pub const DISPLAY_SCROLL_UP: &str = "<FI>";
/// Scroll down from top
pub const DISPLAY_SCROLL_DOWN: &str = "<FJ>";
/// Two layers slide together to form text
pub const DISPLAY_OVERLAP: &str = "<FK>";
/// Falling dots form text
pub const DISPLAY_STACKING: &str = "<FL>";
/// Pac-Man
pub const DISPLAY_PACMAN: &str = "<FM>";
/// Random creature walking
pub const DISPLAY_RANDOM_CREATURE_WALKING: &str = "<FN>";
/// Sign beeps
pub const DISPLAY_BEEP: &str = "<FO>";
/// Short delay of motion
pub const DISPLAY_PAUSE: &str = "<FP>";
/// Blank screen until the next timer fires
pub const DISPLAY_BLANK: &str = "<FQ>";
/// Random dots appear forming text
pub const DISPLAY_RANDOM: &str = "<FR>";
/// Roll message right to left (default)
pub const DISPLAY_SHIFT: &str = "<FS>";
/// Show time and date, fixed formatting
pub const DISPLAY_TIME_AND_DATE: &str = "<FT>";
/// Change text colour each time
pub const DISPLAY_MAGIC: &str = "<FU>";
/// Cursive "Thank you"
pub const DISPLAY_THANK_YOU: &str = "<FV>";
/// Cursive "Welcome"
pub const DISPLAY_WELCOME: &str = "<FW>";
pub const DISPLAY_SPEED_1: &str = "<FX>";
pub const DISPLAY_SPEED_2: &str = "<FY>";
pub const DISPLAY_SPEED_3: &str = "<FZ>";

// ============================================================================
// FORMATS
// ============================================================================

pub const FORMAT_NORMAL: &str = "<SA>";
pub const FORMAT_BOLD: &str = "<SB>";
pub const FORMAT_ITALIC: &str = "<SC>";
pub const FORMAT_BOLD_ITALIC: &str = "<SD>";
pub const FORMAT_FLASHING_NORMAL: &str = "<SE>";
pub const FORMAT_FLASHING_BOLD: &str = "<SF>";
pub const FORMAT_FLASHING_ITALIC: &str = "<SG>";
pub const FORMAT_FLASHING_BOLD_ITALIC: &str = "<SH>";

/// Format tokens indexed by `flashing << 2 | italic << 1 | bold`.
const FORMATS: [&str; 8] = [
    FORMAT_NORMAL,
    FORMAT_BOLD,
    FORMAT_ITALIC,
    FORMAT_BOLD_ITALIC,
    FORMAT_FLASHING_NORMAL,
    FORMAT_FLASHING_BOLD,
    FORMAT_FLASHING_ITALIC,
    FORMAT_FLASHING_BOLD_ITALIC,
];

/// # Format Token (`<Sx>`)
///
/// Text after the token is shown with the requested style until the next
/// format token.
///
/// ## Encoding
///
/// | Flag | Weight |
/// |------|--------|
/// | flashing | 4 |
/// | italic | 2 |
/// | bold | 1 |
///
/// The sum is added to `'A'`: plain text is `<SA>`, everything on is `<SH>`.
pub fn format(flashing: bool, italic: bool, bold: bool) -> &'static str {
    let code = (usize::from(flashing) << 2) | (usize::from(italic) << 1) | usize::from(bold);
    FORMATS[code]
}

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalize text to the sign's character set.
///
/// 1. Characters in the [`fold`](super::fold::fold) table get its spelling:
///    `ß` → `ss`, `«` → `"`.
/// 2. Any other non-ASCII character is transliterated: `Привет` → `Privet`,
///    `Ａ` → `A`, `²` → `2`. Transliterations never contribute `<` or `>`,
///    so non-ASCII input cannot assemble a control tag.
/// 3. Whatever is left is canonically decomposed and combining marks are
///    dropped: `é` → `e`.
/// 4. Control characters (below 0x20) and anything outside ASCII are removed.
///
/// The result is printable ASCII, so normalizing twice changes nothing.
///
/// ```
/// use prolite::protocol::text::normalize;
///
/// assert_eq!(normalize("Helló world"), "Hello world");
/// assert_eq!(normalize("Привет мир"), "Privet mir");
/// assert_eq!(normalize("\u{13}"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut transliterated = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii() {
            transliterated.push(ch);
        } else if let Some(ascii) = fold::fold(ch) {
            transliterated.push_str(ascii);
        } else if let Some(ascii) = deunicode_char(ch) {
            transliterated.extend(ascii.chars().filter(|&c| !is_tag_delimiter(c)));
        } else {
            transliterated.push(ch);
        }
    }

    transliterated.nfd().filter(|&ch| is_sign_char(ch)).collect()
}

#[inline]
fn is_tag_delimiter(ch: char) -> bool {
    ch == '<' || ch == '>'
}

/// Printable ASCII plus DEL; everything the sign accepts verbatim.
#[inline]
fn is_sign_char(ch: char) -> bool {
    ('\u{20}'..='\u{7F}').contains(&ch)
}

// ============================================================================
// ESCAPING
// ============================================================================

/// Remove control tags from untrusted text.
///
/// Only tags of exactly one of the shapes below are removed. Anything that
/// merely resembles one (wrong length, lowercase, extra characters) is kept,
/// as are colour, effect and format tokens.
///
/// | Shape | Meaning |
/// |-------|---------|
/// | `<IDhh>` | Address header, `hh` uppercase hex |
/// | `<Px>` `<RPx>` `<DPx>` | Define / run / delete page |
/// | `<Tx>` `<DTx>` | Define / delete timer |
/// | `<Gx>` `<DGx>` | Define / delete graphic |
/// | `<Uc>` | Utility tag, any single ASCII character but newline |
/// | `<D*>` | Delete everything |
/// | `<Tnnnnnnnnnnnnn>` | Set clock, 13 digits |
/// | `<Q+>` `<Q->` | Utility tag |
///
/// `x` is a letter `A`..`Z` or `*`. Removal is a single left-to-right pass;
/// text is not rescanned after a tag is removed.
///
/// ```
/// use prolite::protocol::text::escape;
///
/// assert_eq!(escape("<ID01>"), "");
/// assert_eq!(escape("<IDX1>"), "<IDX1>");
/// assert_eq!(escape("Hello <PA> world"), "Hello  world");
/// assert_eq!(escape("Hello <P1> world"), "Hello <P1> world");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(open) = rest.find('<') {
        out.push_str(&rest[..open]);
        let candidate = &rest[open..];

        match control_tag_len(candidate) {
            Some(len) => {
                debug!("escape: removed control tag {:?}", &candidate[..len]);
                rest = &candidate[len..];
            }
            None => {
                out.push('<');
                rest = &candidate[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

/// Commands taking one slot letter or `*`.
const SLOT_COMMANDS: [&str; 7] = ["RP", "DP", "DT", "DG", "P", "T", "G"];

/// Tag body matchers. Each returns the length of the body it recognises.
const SHAPES: [fn(&[u8]) -> Option<usize>; 5] =
    [address_tag, slot_tag, utility_tag, clock_tag, literal_tag];

/// Byte length of the control tag at the start of `s`, if there is one.
///
/// `s` starts with `<`. A shape only counts when `>` follows its body directly.
fn control_tag_len(s: &str) -> Option<usize> {
    let body = s.get(1..)?.as_bytes();

    SHAPES
        .iter()
        .filter_map(|shape| shape(body))
        .find(|&inner| body.get(inner) == Some(&b'>'))
        .map(|inner| inner + 2)
}

/// `IDhh`
fn address_tag(body: &[u8]) -> Option<usize> {
    match body {
        [b'I', b'D', a, b, ..] if is_upper_hex(*a) && is_upper_hex(*b) => Some(4),
        _ => None,
    }
}

/// `Px`, `RPx`, `DPx`, `Tx`, `DTx`, `Gx`, `DGx`
fn slot_tag(body: &[u8]) -> Option<usize> {
    SLOT_COMMANDS.iter().find_map(|cmd| {
        let key = *body.strip_prefix(cmd.as_bytes())?.first()?;
        (key.is_ascii_uppercase() || key == b'*').then_some(cmd.len() + 1)
    })
}

/// `Uc`
fn utility_tag(body: &[u8]) -> Option<usize> {
    match body {
        [b'U', c, ..] if c.is_ascii() && *c != b'\n' => Some(2),
        _ => None,
    }
}

/// `T` followed by 13 digits
fn clock_tag(body: &[u8]) -> Option<usize> {
    let digits = body.strip_prefix(b"T")?.get(..13)?;
    digits.iter().all(u8::is_ascii_digit).then_some(14)
}

/// `D*`, `Q+`, `Q-`
fn literal_tag(body: &[u8]) -> Option<usize> {
    [b"D*", b"Q+", b"Q-"]
        .iter()
        .find(|lit| body.starts_with(&lit[..]))
        .map(|lit| lit.len())
}

#[inline]
fn is_upper_hex(b: u8) -> bool {
    b.is_ascii_digit() || (b'A'..=b'F').contains(&b)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_tokens() {
        assert_eq!(format(false, false, false), FORMAT_NORMAL);
        assert_eq!(format(false, false, true), FORMAT_BOLD);
        assert_eq!(format(false, true, false), FORMAT_ITALIC);
        assert_eq!(format(false, true, true), FORMAT_BOLD_ITALIC);
        assert_eq!(format(true, false, false), FORMAT_FLASHING_NORMAL);
        assert_eq!(format(true, false, true), FORMAT_FLASHING_BOLD);
        assert_eq!(format(true, true, false), FORMAT_FLASHING_ITALIC);
        assert_eq!(format(true, true, true), FORMAT_FLASHING_BOLD_ITALIC);
    }

    #[test]
    fn test_normalize_diacritics() {
        assert_eq!(normalize("Helló world"), "Hello world");
        assert_eq!(normalize("áćéǵj́"), "acegj");
    }

    #[test]
    fn test_normalize_strips_control_and_high() {
        assert_eq!(normalize("\u{13}"), "");
        assert_eq!(normalize("\u{80}"), "");
        assert_eq!(normalize("a\r\nb\tc"), "abc");
        assert_eq!(normalize("private \u{E000} use"), "private  use");
    }

    #[test]
    fn test_normalize_keeps_del_and_tokens() {
        assert_eq!(normalize("\u{7F}"), "\u{7F}");
        assert_eq!(normalize("<FD><CB>Hi"), "<FD><CB>Hi");
    }

    #[test]
    fn test_normalize_folds_letters() {
        assert_eq!(normalize("Straße"), "Strasse");
        assert_eq!(normalize("Øresund"), "Oresund");
        assert_eq!(normalize("Łódź"), "Lodz");
        assert_eq!(normalize("it’s — done…"), "it's - done...");
    }

    #[test]
    fn test_normalize_transliterates_other_scripts() {
        assert_eq!(normalize("Привет мир"), "Privet mir");
        assert_eq!(normalize("Αθήνα"), "Athena");
        assert_eq!(normalize("ＡＢＣ１２３"), "ABC123");
        assert_eq!(normalize("ǣ"), "ae");
    }

    #[test]
    fn test_normalize_compatibility_forms() {
        let result = normalize("x² ½");
        assert!(result.starts_with("x2"), "got {:?}", result);
        assert!(result.contains("1/2"), "got {:?}", result);
    }

    #[test]
    fn test_normalize_never_forms_tags_from_non_ascii() {
        let result = normalize("＜PA＞«ID01»‹RPA›");
        assert!(!result.contains(['<', '>']), "got {:?}", result);
        assert!(result.contains("PA"));
        // ASCII delimiters are left to escape()
        assert_eq!(normalize("<PA>"), "<PA>");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for s in [
            "Helló world",
            "áćéǵj́",
            "Straße\u{13}\u{80}",
            "<ID01>ÿ",
            "Привет ＡＢＣ x² ½ ǣ",
            "",
        ] {
            let once = normalize(s);
            assert_eq!(normalize(&once), once);
        }
    }

    #[test]
    fn test_escape_address() {
        assert_eq!(escape("<ID01>"), "");
        assert_eq!(escape("<IDFF>"), "");
        assert_eq!(escape("<IDX1>"), "<IDX1>");
        assert_eq!(escape("<IDff>"), "<IDff>");
        assert_eq!(escape("<ID012>"), "<ID012>");
    }

    #[test]
    fn test_escape_page_tags() {
        assert_eq!(escape("Hello <PA> world"), "Hello  world");
        assert_eq!(escape("Hello <P1> world"), "Hello <P1> world");
        assert_eq!(escape("Hello <PBC> world"), "Hello <PBC> world");
        assert_eq!(escape("Hello <RPA> world"), "Hello  world");
        assert_eq!(escape("Hello <RP*> world"), "Hello  world");
        assert_eq!(escape("Hello <RP**> world"), "Hello <RP**> world");
        assert_eq!(escape("Hello <RPAB> world"), "Hello <RPAB> world");
        assert_eq!(escape("Hello <RP1> world"), "Hello <RP1> world");
        assert_eq!(escape("Hello <RP> world"), "Hello <RP> world");
    }

    #[test]
    fn test_escape_delete_tags() {
        for cmd in ["DP", "DT", "DG"] {
            assert_eq!(escape(&format!("Hello <{cmd}A> world")), "Hello  world");
            assert_eq!(escape(&format!("Hello <{cmd}*> world")), "Hello  world");
            for kept in ["**", "AB", "1", ""] {
                let s = format!("Hello <{cmd}{kept}> world");
                assert_eq!(escape(&s), s);
            }
        }
        assert_eq!(escape("Hello <D*> world"), "Hello  world");
        assert_eq!(escape("Hello <D**> world"), "Hello <D**> world");
    }

    #[test]
    fn test_escape_timer_tags() {
        assert_eq!(escape("Hello <TA>10203A world"), "Hello 10203A world");
        assert_eq!(escape("Hello <TA>*****1 world"), "Hello *****1 world");
        assert_eq!(escape("Hello <T0001023040506> world"), "Hello  world");
        assert_eq!(escape("Hello <TA000000000000> world"), "Hello <TA000000000000> world");
        assert_eq!(escape("Hello <T000102304050> world"), "Hello <T000102304050> world");
    }

    #[test]
    fn test_escape_graphic_tags() {
        assert_eq!(escape("Hello <GA> world"), "Hello  world");
        assert_eq!(escape("Hello <GAB> world"), "Hello <GAB> world");
        assert_eq!(escape("Hello <G1> world"), "Hello <G1> world");
        assert_eq!(escape("Hello <G> world"), "Hello <G> world");
    }

    #[test]
    fn test_escape_utility_tags() {
        assert_eq!(escape("Hello <U#> world"), "Hello  world");
        assert_eq!(escape("Hello <U_> world"), "Hello  world");
        assert_eq!(escape("Hello <U>> world"), "Hello  world");
        assert_eq!(escape("Hello <U> world"), "Hello <U> world");
        assert_eq!(escape("Hello <U\n> world"), "Hello <U\n> world");
        assert_eq!(escape("<Q+><Q->"), "");
        assert_eq!(escape("<Q*>"), "<Q*>");
    }

    #[test]
    fn test_escape_keeps_style_tokens() {
        for prefix in ["B", "C", "S", "F"] {
            for suffix in ["A", "AB", "1", ""] {
                let s = format!("Hello <{prefix}{suffix}> world");
                assert_eq!(escape(&s), s);
            }
        }
    }

    #[test]
    fn test_escape_single_pass() {
        // Removing the inner tag joins the outer halves, which are not rescanned
        assert_eq!(escape("<I<PA>D01>"), "<ID01>");
        assert_eq!(escape("<<PA>"), "<");
        assert_eq!(escape("<PA><GB>"), "");
    }

    #[test]
    fn test_escape_non_ascii_passthrough() {
        assert_eq!(escape("Héllo <Ué> wörld"), "Héllo <Ué> wörld");
        assert_eq!(escape("<"), "<");
        assert_eq!(escape(""), "");
    }
}
