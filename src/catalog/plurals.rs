//! Per-language plural rules.
//!
//! Numerus messages carry one `<numerusform>` per plural category of the
//! catalog language. The rules here decide how many forms a language uses
//! and which form a given count selects, matching the tables Qt's lrelease
//! ships. Unknown languages fall back to the two-form Germanic rule, which
//! covers English, Greek and most European languages.

/// The plural rule family of a catalog language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralRule {
    /// One form for every count (Japanese, Chinese, ...).
    Single,
    /// Two forms, singular only for exactly 1 (English, Greek, German, ...).
    NotEqualOne,
    /// Two forms, singular for 0 and 1 (French, Occitan, Brazilian Portuguese).
    GreaterThanOne,
    /// Two forms, singular for counts ending in 1 but not 11 (Icelandic).
    Icelandic,
    /// Two forms, singular for counts ending in 1 except 11 (Macedonian).
    Macedonian,
    /// Three forms shared by Russian, Ukrainian, Serbian, Croatian, ...
    EastSlavic,
    /// Three forms, Polish few/many split.
    Polish,
    /// Three forms, 2-4 take the paucal (Czech, Slovak).
    CzechSlovak,
    /// Three forms (Lithuanian).
    Lithuanian,
    /// Three forms, 0 and 1-19 hundreds take the paucal (Romanian).
    Romanian,
    /// Four forms keyed on count modulo 100 (Slovenian).
    Slovenian,
    /// Three forms, singular, dual, plural (Irish).
    Irish,
    /// Six forms (Arabic).
    Arabic,
}

impl PluralRule {
    /// Resolves the rule for a language code such as `el`, `pt_BR` or `zh_CN`.
    ///
    /// Region subtags are ignored except where the region changes the rule
    /// (Brazilian Portuguese). Unknown languages use [`PluralRule::NotEqualOne`].
    pub fn for_language(code: &str) -> PluralRule {
        let normalized = code.trim().replace('_', "-").to_ascii_lowercase();
        if normalized == "pt-br" {
            return PluralRule::GreaterThanOne;
        }
        let primary = normalized.split('-').next().unwrap_or("");
        match primary {
            "ja" | "zh" | "ko" | "th" | "vi" | "id" | "ms" | "km" | "lo" => PluralRule::Single,
            "fr" | "oc" => PluralRule::GreaterThanOne,
            "is" => PluralRule::Icelandic,
            "mk" => PluralRule::Macedonian,
            "ru" | "uk" | "be" | "sr" | "hr" | "bs" => PluralRule::EastSlavic,
            "pl" => PluralRule::Polish,
            "cs" | "sk" => PluralRule::CzechSlovak,
            "lt" => PluralRule::Lithuanian,
            "ro" => PluralRule::Romanian,
            "sl" => PluralRule::Slovenian,
            "ga" => PluralRule::Irish,
            "ar" => PluralRule::Arabic,
            _ => PluralRule::NotEqualOne,
        }
    }

    /// How many `<numerusform>` entries a translation needs.
    pub fn form_count(&self) -> usize {
        match self {
            PluralRule::Single => 1,
            PluralRule::NotEqualOne
            | PluralRule::GreaterThanOne
            | PluralRule::Icelandic
            | PluralRule::Macedonian => 2,
            PluralRule::EastSlavic
            | PluralRule::Polish
            | PluralRule::CzechSlovak
            | PluralRule::Lithuanian
            | PluralRule::Romanian
            | PluralRule::Irish => 3,
            PluralRule::Slovenian => 4,
            PluralRule::Arabic => 6,
        }
    }

    /// The index of the form a count selects. Always below [`Self::form_count`].
    pub fn index(&self, n: u64) -> usize {
        match self {
            PluralRule::Single => 0,
            PluralRule::NotEqualOne => usize::from(n != 1),
            PluralRule::GreaterThanOne => usize::from(n > 1),
            PluralRule::Icelandic | PluralRule::Macedonian => {
                usize::from(!(n % 10 == 1 && n % 100 != 11))
            }
            PluralRule::EastSlavic => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Polish => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&(n % 10)) && !(12..=14).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::CzechSlovak => {
                if n == 1 {
                    0
                } else if (2..=4).contains(&n) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Lithuanian => {
                if n % 10 == 1 && n % 100 != 11 {
                    0
                } else if n % 10 >= 2 && !(11..=19).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Romanian => {
                if n == 1 {
                    0
                } else if n == 0 || (1..=19).contains(&(n % 100)) {
                    1
                } else {
                    2
                }
            }
            PluralRule::Slovenian => match n % 100 {
                1 => 0,
                2 => 1,
                3 | 4 => 2,
                _ => 3,
            },
            PluralRule::Irish => {
                if n == 1 {
                    0
                } else if n == 2 {
                    1
                } else {
                    2
                }
            }
            PluralRule::Arabic => {
                if n == 0 {
                    0
                } else if n == 1 {
                    1
                } else if n == 2 {
                    2
                } else if (3..=10).contains(&(n % 100)) {
                    3
                } else if (11..=99).contains(&(n % 100)) {
                    4
                } else {
                    5
                }
            }
        }
    }
}
