//! Kana classification helpers.

const HIRAGANA: core::ops::RangeInclusive<char> = '\u{3041}'..='\u{3096}';
const KATAKANA: core::ops::RangeInclusive<char> = '\u{30a1}'..='\u{30f6}';
/// Distance between a katakana character and its hiragana counterpart.
const KATAKANA_OFFSET: u32 = 0x60;

/// Test if a character is hiragana.
#[inline]
pub fn is_hiragana(c: char) -> bool {
    HIRAGANA.contains(&c)
}

/// Test if a character is katakana, including the prolonged sound mark.
#[inline]
pub fn is_katakana(c: char) -> bool {
    KATAKANA.contains(&c) || c == 'ー'
}

/// Test if a character is a CJK ideograph or the iteration mark.
#[inline]
pub fn is_kanji(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}' | '\u{3400}'..='\u{4dbf}' | '々')
}

/// Test if the whole string is made up of kana.
pub fn is_kana(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| is_hiragana(c) || is_katakana(c))
}

/// Fold katakana into hiragana, leaving everything else untouched.
pub fn to_hiragana(s: &str) -> String {
    s.chars()
        .map(|c| {
            if KATAKANA.contains(&c) {
                char::from_u32(c as u32 - KATAKANA_OFFSET).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

#[test]
fn classify() {
    assert!(is_hiragana('か'));
    assert!(!is_hiragana('カ'));
    assert!(is_katakana('カ'));
    assert!(is_katakana('ー'));
    assert!(is_kanji('書'));
    assert!(is_kanji('々'));
    assert!(!is_kanji('か'));
    assert!(is_kana("たべる"));
    assert!(!is_kana("食べる"));
    assert!(!is_kana(""));
}

#[test]
fn fold_katakana() {
    assert_eq!(to_hiragana("タベマス"), "たべます");
    assert_eq!(to_hiragana("食ベル"), "食べる");
    assert_eq!(to_hiragana("abc"), "abc");
}
