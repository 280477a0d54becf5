//! Number formatting conventions for display strings.
//!
//! Only the pieces `format_time` needs are modelled: the decimal separator,
//! the digit group separator and whether grouping is applied at all. Tags are
//! resolved against a fixed table; anything unknown formats like the
//! invariant locale.

use serde::Serialize;
use thousands::{Separable, SeparatorPolicy, digits};

const NARROW_NBSP: &str = "\u{202f}";
const NBSP: &str = "\u{a0}";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Locale {
    pub tag: String,
    pub decimal_separator: &'static str,
    pub group_separator: &'static str,
    pub grouping: bool,
}

impl Default for Locale {
    fn default() -> Self {
        Self::invariant()
    }
}

impl Locale {
    pub fn invariant() -> Self {
        Self {
            tag: String::new(),
            decimal_separator: ".",
            group_separator: ",",
            grouping: false,
        }
    }

    /// Resolve a BCP 47 or POSIX locale name (`de-DE`, `de_DE.UTF-8@euro`).
    pub fn from_tag(tag: &str) -> Self {
        let canonical = canonicalize(tag);
        if canonical.is_empty() {
            return Self::invariant();
        }

        let mut parts = canonical.split('-');
        let language = parts.next().unwrap_or_default().to_ascii_lowercase();
        let region = parts.next().unwrap_or_default().to_ascii_uppercase();

        let (decimal_separator, group_separator) = match (language.as_str(), region.as_str()) {
            ("de" | "fr" | "it", "CH") => (".", "'"),
            ("en" | "ja" | "zh" | "ko" | "th" | "he" | "hi", _) => (".", ","),
            ("de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" | "el" | "ro", _) => (",", "."),
            ("fr", _) => (",", NARROW_NBSP),
            ("ru" | "pl" | "cs" | "sk" | "sv" | "nb" | "no" | "fi" | "uk" | "hu" | "bg", _) => {
                (",", NBSP)
            }
            _ => (".", ","),
        };

        Self {
            tag: canonical,
            decimal_separator,
            group_separator,
            grouping: false,
        }
    }

    /// The locale named by the environment (`LC_ALL`, `LC_NUMERIC`, `LANG`).
    pub fn current() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Like [`Locale::current`] with an injectable variable lookup.
    pub fn from_env_with<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        ["LC_ALL", "LC_NUMERIC", "LANG"]
            .iter()
            .filter_map(|key| lookup(key))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_tag(&value))
            .unwrap_or_else(Self::invariant)
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    /// Rewrite a plain `-1234.5` style number into this locale's conventions.
    pub fn localize_number(&self, plain: &str) -> String {
        let (sign, unsigned) = match plain.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", plain),
        };
        let (integer, fraction) = match unsigned.split_once('.') {
            Some((integer, fraction)) => (integer, Some(fraction)),
            None => (unsigned, None),
        };

        let integer = if self.grouping {
            let policy = SeparatorPolicy {
                separator: self.group_separator,
                groups: &[3],
                digits: digits::ASCII_DECIMAL,
            };
            integer.separate_by_policy(policy)
        } else {
            integer.to_string()
        };

        match fraction {
            Some(fraction) => format!("{sign}{integer}{}{fraction}", self.decimal_separator),
            None => format!("{sign}{integer}"),
        }
    }
}

fn canonicalize(tag: &str) -> String {
    let tag = tag.trim();
    let tag = tag.split(['.', '@']).next().unwrap_or_default();
    if tag.eq_ignore_ascii_case("c") || tag.eq_ignore_ascii_case("posix") {
        return String::new();
    }
    tag.replace('_', "-")
}
