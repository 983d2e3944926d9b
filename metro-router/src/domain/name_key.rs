//! Station name keys.
//!
//! Line data and user queries spell the same station in different ways
//! ("M.G. Road", "mg road", "M G ROAD"). Every name is reduced to a
//! canonical key before it is compared with anything else.

use std::fmt;

/// Maximum length of a key, in characters. Longer names are truncated.
pub const MAX_KEY_CHARS: usize = 79;

/// Error returned when a name has no alphanumeric content.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name {raw:?}: normalizes to an empty key")]
pub struct InvalidName {
    raw: String,
}

impl InvalidName {
    /// The input that failed to normalize.
    pub fn raw(&self) -> &str {
        &self.raw
    }
}

/// Canonicalize a free-form station name into its matching key.
///
/// Steps, in order:
/// 1. keep only alphanumeric characters and whitespace
/// 2. collapse whitespace runs into a single space and trim
/// 3. fuse adjacent single-letter tokens ("m g road" -> "mg road")
/// 4. lower-case
///
/// Lower-casing may expand a character (`'İ'` becomes `i` plus a combining
/// dot); anything the expansion adds that is not alphanumeric is dropped,
/// so keys stay inside the step 1 alphabet.
///
/// The result may be empty; use [`NameKey::parse`] where an empty key
/// must be rejected.
///
/// # Examples
///
/// ```
/// use metro_router::domain::normalize;
///
/// assert_eq!(normalize("M.G. Road"), "mg road");
/// assert_eq!(normalize("M G ROAD"), "mg road");
/// assert_eq!(normalize("  Channasandra(HopeFarm) "), "channasandrahopefarm");
/// assert_eq!(normalize("..."), "");
/// ```
pub fn normalize(raw: &str) -> String {
    let kept: Vec<char> = raw
        .chars()
        .take(MAX_KEY_CHARS)
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let collapsed = collapse_whitespace(&kept);
    let fused = fuse_single_letters(&collapsed);

    let mut key: String = fused
        .iter()
        .flat_map(|c| c.to_lowercase())
        .filter(|c| c.is_alphanumeric() || *c == ' ')
        .collect();

    // Lower-casing can expand some characters past the bound.
    if key.chars().count() > MAX_KEY_CHARS {
        key = key.chars().take(MAX_KEY_CHARS).collect();
        key.truncate(key.trim_end().len());
    }
    key
}

fn collapse_whitespace(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut pending_space = false;

    for &c in chars {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
        } else {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(c);
        }
    }
    out
}

/// True when `chars[i]` is a letter standing alone between spaces.
fn is_single_letter(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|c| c.is_alphabetic())
        && (i == 0 || chars[i - 1] == ' ')
        && chars.get(i + 1).is_none_or(|&c| c == ' ')
}

fn fuse_single_letters(chars: &[char]) -> Vec<char> {
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        if is_single_letter(chars, i)
            && chars.get(i + 1) == Some(&' ')
            && is_single_letter(chars, i + 2)
        {
            out.push(chars[i]);
            out.push(chars[i + 2]);
            i += 3;
            continue;
        }
        out.push(chars[i]);
        i += 1;
    }
    out
}

/// A validated, non-empty station key.
///
/// Two stations are the same station exactly when their keys are equal.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NameKey(String);

impl NameKey {
    /// Normalize `raw` and reject it if nothing is left.
    pub fn parse(raw: &str) -> Result<Self, InvalidName> {
        let key = normalize(raw);
        if key.is_empty() {
            return Err(InvalidName {
                raw: raw.to_string(),
            });
        }
        Ok(NameKey(key))
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this key starts with the given (already normalized) prefix.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }
}

impl fmt::Debug for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NameKey({})", self.0)
    }
}

impl fmt::Display for NameKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Normalizing a key again changes nothing
        #[test]
        fn idempotent(s in "[A-Za-z0-9 \t]{0,100}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Idempotence holds for any letters and digits, not just ASCII
        #[test]
        fn idempotent_unicode(s in "[\\p{L}\\p{N} ]{0,60}") {
            let once = normalize(&s);
            prop_assert_eq!(normalize(&once), once);
        }

        /// Punctuation never affects the key
        #[test]
        fn punctuation_ignored(s in "[a-z ]{0,40}") {
            let dotted: String = s.chars().flat_map(|c| [c, '.']).collect();
            prop_assert_eq!(normalize(&dotted), normalize(&s));
        }

        /// Keys contain only lower-case alphanumerics and single spaces
        #[test]
        fn key_alphabet(s in "\\PC{0,60}") {
            let key = normalize(&s);
            prop_assert!(!key.starts_with(' ') && !key.ends_with(' '));
            prop_assert!(!key.contains("  "));
            prop_assert!(key.chars().count() <= MAX_KEY_CHARS);
        }

        /// Case never affects the key
        #[test]
        fn case_insensitive(s in "[A-Za-z ]{0,60}") {
            prop_assert_eq!(normalize(&s.to_uppercase()), normalize(&s.to_lowercase()));
        }
    }
}
