// Kana script conversion
//
// The input CSV carries bank and branch readings as half-width katakana
// (U+FF61..U+FF9F), the legacy fixed-width encoding. The output wants all
// three variants: the half-width original, the full-width katakana form,
// and the hiragana form derived from the full-width one.
//
// Conversion is a fixed character mapping. Nothing here validates that the
// input is actually kana; unmapped characters (ASCII, kanji, whatever)
// pass through untouched.

/// All three script variants of one reading, derived from the half-width
/// katakana field of a CSV row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Readings {
    pub half_width: String,
    pub full_width: String,
    pub hiragana: String,
}

impl Readings {
    /// Derivation chain: half-width → full-width katakana → hiragana.
    /// The hiragana form is computed from the full-width form, not from
    /// the raw input, so voiced-mark composition happens exactly once.
    pub fn from_half_width(raw: &str) -> Self {
        let full_width = half_to_full(raw);
        let hiragana = katakana_to_hiragana(&full_width);
        Readings {
            half_width: raw.to_string(),
            full_width,
            hiragana,
        }
    }
}

/// Convert half-width katakana to full-width katakana.
///
/// A base letter followed by a half-width voiced (ﾞ) or semi-voiced (ﾟ)
/// sound mark composes into the precomposed full-width letter: ｶ+ﾞ → ガ,
/// ﾊ+ﾟ → パ, ｳ+ﾞ → ヴ. A mark that cannot compose with what precedes it
/// becomes its standalone full-width form (゛/゜). Everything outside the
/// half-width kana block passes through unchanged.
pub fn half_to_full(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let full = match full_width_base(c) {
            Some(full) => full,
            None => {
                out.push(c);
                continue;
            }
        };

        let composed = match chars.peek() {
            Some('ﾞ') => with_voiced_mark(full),
            Some('ﾟ') => with_semi_voiced_mark(full),
            _ => None,
        };

        match composed {
            Some(letter) => {
                out.push(letter);
                chars.next(); // consume the sound mark
            }
            None => out.push(full),
        }
    }

    out
}

/// Convert full-width katakana to hiragana.
///
/// Katakana letters ァ..ヶ sit exactly 0x60 above their hiragana
/// counterparts, so this is a block shift. The prolonged sound mark ー has
/// no hiragana counterpart and stays as-is, as does anything non-katakana.
pub fn katakana_to_hiragana(input: &str) -> String {
    input
        .chars()
        .map(|c| {
            if ('ァ'..='ヶ').contains(&c) {
                char::from_u32(c as u32 - 0x60).unwrap_or(c)
            } else {
                c
            }
        })
        .collect()
}

/// Single-character half-width → full-width mapping, sound marks included
/// as their standalone forms. Returns None outside U+FF61..U+FF9F.
fn full_width_base(c: char) -> Option<char> {
    let full = match c {
        '｡' => '。',
        '｢' => '「',
        '｣' => '」',
        '､' => '、',
        '･' => '・',
        'ｦ' => 'ヲ',
        'ｧ' => 'ァ',
        'ｨ' => 'ィ',
        'ｩ' => 'ゥ',
        'ｪ' => 'ェ',
        'ｫ' => 'ォ',
        'ｬ' => 'ャ',
        'ｭ' => 'ュ',
        'ｮ' => 'ョ',
        'ｯ' => 'ッ',
        'ｰ' => 'ー',
        'ｱ' => 'ア',
        'ｲ' => 'イ',
        'ｳ' => 'ウ',
        'ｴ' => 'エ',
        'ｵ' => 'オ',
        'ｶ' => 'カ',
        'ｷ' => 'キ',
        'ｸ' => 'ク',
        'ｹ' => 'ケ',
        'ｺ' => 'コ',
        'ｻ' => 'サ',
        'ｼ' => 'シ',
        'ｽ' => 'ス',
        'ｾ' => 'セ',
        'ｿ' => 'ソ',
        'ﾀ' => 'タ',
        'ﾁ' => 'チ',
        'ﾂ' => 'ツ',
        'ﾃ' => 'テ',
        'ﾄ' => 'ト',
        'ﾅ' => 'ナ',
        'ﾆ' => 'ニ',
        'ﾇ' => 'ヌ',
        'ﾈ' => 'ネ',
        'ﾉ' => 'ノ',
        'ﾊ' => 'ハ',
        'ﾋ' => 'ヒ',
        'ﾌ' => 'フ',
        'ﾍ' => 'ヘ',
        'ﾎ' => 'ホ',
        'ﾏ' => 'マ',
        'ﾐ' => 'ミ',
        'ﾑ' => 'ム',
        'ﾒ' => 'メ',
        'ﾓ' => 'モ',
        'ﾔ' => 'ヤ',
        'ﾕ' => 'ユ',
        'ﾖ' => 'ヨ',
        'ﾗ' => 'ラ',
        'ﾘ' => 'リ',
        'ﾙ' => 'ル',
        'ﾚ' => 'レ',
        'ﾛ' => 'ロ',
        'ﾜ' => 'ワ',
        'ﾝ' => 'ン',
        'ﾞ' => '゛',
        'ﾟ' => '゜',
        _ => return None,
    };
    Some(full)
}

/// Precomposed voiced (dakuten) form of a full-width katakana letter.
/// The voiced letter sits one codepoint above its base in the ka/sa/ta/ha
/// rows; ウ and ワ have their own precomposed forms.
fn with_voiced_mark(full: char) -> Option<char> {
    const VOICEABLE: &str = "カキクケコサシスセソタチツテトハヒフヘホ";
    if VOICEABLE.contains(full) {
        char::from_u32(full as u32 + 1)
    } else {
        match full {
            'ウ' => Some('ヴ'),
            'ワ' => Some('ヷ'),
            _ => None,
        }
    }
}

/// Precomposed semi-voiced (handakuten) form: ハ行 only, two codepoints up.
fn with_semi_voiced_mark(full: char) -> Option<char> {
    const SEMI_VOICEABLE: &str = "ハヒフヘホ";
    if SEMI_VOICEABLE.contains(full) {
        char::from_u32(full as u32 + 2)
    } else {
        None
    }
}
