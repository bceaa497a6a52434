//! # Latin Folding
//!
//! Fixed ASCII spellings, consulted by [`super::text::normalize`] before the
//! general transliteration.
//!
//! Entries here win over the transliteration table. They pin the spelling
//! of common letters (`ß`, `ø`, `ł`) and punctuation, and keep guillemets
//! away from `<` and `>`.

/// ASCII replacement for `ch`, or `None` if the character is not folded here.
///
/// Reference: Unicode CLDR Latin-ASCII transliteration, letters and the
/// punctuation that commonly leaks in from word processors.
pub fn fold(ch: char) -> Option<&'static str> {
    let ascii = match ch {
        // Letters without a canonical decomposition
        'ß' => "ss",  // U+00DF
        'ẞ' => "SS",  // U+1E9E
        'Æ' => "AE",  // U+00C6
        'æ' => "ae",  // U+00E6
        'Ø' => "O",   // U+00D8
        'ø' => "o",   // U+00F8
        'Œ' => "OE",  // U+0152
        'œ' => "oe",  // U+0153
        'Ð' => "D",   // U+00D0
        'ð' => "d",   // U+00F0
        'Đ' => "D",   // U+0110
        'đ' => "d",   // U+0111
        'Þ' => "TH",  // U+00DE
        'þ' => "th",  // U+00FE
        'Ł' => "L",   // U+0141
        'ł' => "l",   // U+0142
        'Ħ' => "H",   // U+0126
        'ħ' => "h",   // U+0127
        'ı' => "i",   // U+0131
        'Ĳ' => "IJ",  // U+0132
        'ĳ' => "ij",  // U+0133
        'Ŀ' => "L",   // U+013F
        'ŀ' => "l",   // U+0140
        'Ŋ' => "N",   // U+014A
        'ŋ' => "n",   // U+014B
        'Ŧ' => "T",   // U+0166
        'ŧ' => "t",   // U+0167
        'ſ' => "s",   // U+017F
        'ƒ' => "f",   // U+0192

        // Ligatures
        'ﬀ' => "ff",  // U+FB00
        'ﬁ' => "fi",  // U+FB01
        'ﬂ' => "fl",  // U+FB02
        'ﬃ' => "ffi", // U+FB03
        'ﬄ' => "ffl", // U+FB04

        // Quotes
        '‘' | '’' | '‚' | '′' => "'",
        '“' | '”' | '„' | '″' => "\"",
        // Guillemets must not fold to tag delimiters
        '«' | '»' => "\"",
        '‹' | '›' => "'",

        // Dashes and spaces
        '‐' | '‑' | '‒' | '–' | '—' | '―' | '−' => "-",
        '\u{00A0}' | '\u{2002}' | '\u{2003}' | '\u{2009}' | '\u{202F}' => " ",
        '…' => "...", // U+2026
        '•' | '·' => "*",

        // Misc symbols with a conventional ASCII form
        '©' => "(C)", // U+00A9
        '®' => "(R)", // U+00AE
        '™' => "TM",  // U+2122
        '×' => "x",   // U+00D7
        '÷' => "/",   // U+00F7

        _ => return None,
    };
    Some(ascii)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_undecomposable_letters() {
        assert_eq!(fold('ß'), Some("ss"));
        assert_eq!(fold('ø'), Some("o"));
        assert_eq!(fold('Ł'), Some("L"));
        assert_eq!(fold('Æ'), Some("AE"));
    }

    #[test]
    fn test_punctuation() {
        assert_eq!(fold('’'), Some("'"));
        assert_eq!(fold('“'), Some("\""));
        assert_eq!(fold('—'), Some("-"));
        assert_eq!(fold('…'), Some("..."));
    }

    #[test]
    fn test_decomposable_letters_are_not_folded() {
        // Left to transliteration
        assert_eq!(fold('é'), None);
        assert_eq!(fold('ñ'), None);
    }

    #[test]
    fn test_never_produces_tag_delimiters() {
        for ch in ['«', '»', '‹', '›'] {
            let folded = fold(ch).unwrap();
            assert!(!folded.contains('<') && !folded.contains('>'));
        }
    }

    #[test]
    fn test_ascii_is_not_folded() {
        assert_eq!(fold('a'), None);
        assert_eq!(fold('<'), None);
    }
}
