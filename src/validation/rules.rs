use crate::error::{NotNativeCause, RejectReason};
use crate::validation::dictionary::WordDictionary;

/// The 29 letters of the Turkish alphabet
pub const ALPHABET: &str = "abcçdefgğhıijklmnoöprsştuüvyz";

pub const VOWELS: &str = "aeıioöuü";

/// Long vowels, only found in loanwords
pub const BORROWED_VOWELS: &str = "âîû";

/// Vowels allowed in the first syllable only
pub const FIRST_SYLLABLE_VOWELS: &str = "oö";

/// Outcome of checking one word against the current game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// Lowercase using Turkish casing, where `I` pairs with `ı` and `İ` with `i`
pub fn to_turkish_lowercase(text: &str) -> String {
    let mut lowered = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            'I' => lowered.push('ı'),
            'İ' => lowered.push('i'),
            _ => lowered.extend(c.to_lowercase()),
        }
    }
    lowered
}

fn is_vowel(c: char) -> bool {
    VOWELS.contains(c)
}

/// Split a word into syllables.
///
/// Every vowel closes the current syllable. Consonants after the last vowel
/// join the last syllable, and a word with no vowels is a single syllable.
pub fn syllables(word: &str) -> Vec<String> {
    let mut syllables: Vec<String> = Vec::new();
    let mut current = String::new();

    for c in word.chars() {
        current.push(c);
        if is_vowel(c) {
            syllables.push(std::mem::take(&mut current));
        }
    }

    if !current.is_empty() {
        match syllables.last_mut() {
            Some(last) => last.push_str(&current),
            None => syllables.push(current),
        }
    }

    syllables
}

/// Check whether `candidate` may follow `last_word` in the game.
///
/// Rules are checked in order and the first one broken is reported:
/// 1. only Turkish letters
/// 2. no long vowels (â, î, û)
/// 3. present in the dictionary
/// 4. no 'o' or 'ö' after the first syllable
/// 5. starts with the last letter of the previous word
pub fn validate(candidate: &str, last_word: Option<&str>, dictionary: &WordDictionary) -> Verdict {
    let word = to_turkish_lowercase(candidate);

    if word.is_empty() {
        return Verdict::Rejected(RejectReason::EmptyInput);
    }

    if !word.chars().all(|c| ALPHABET.contains(c)) {
        return Verdict::Rejected(RejectReason::InvalidCharacters);
    }

    if word.chars().any(|c| BORROWED_VOWELS.contains(c)) {
        return Verdict::Rejected(RejectReason::NotNative(NotNativeCause::BorrowedVowel));
    }

    if !dictionary.contains(&word) {
        return Verdict::Rejected(RejectReason::NotNative(NotNativeCause::UnknownWord));
    }

    if let Some(reason) = check_mid_word_vowels(&word) {
        return Verdict::Rejected(reason);
    }

    if let Some(expected) = last_word.and_then(|w| w.chars().last()) {
        if word.chars().next() != Some(expected) {
            return Verdict::Rejected(RejectReason::ChainMismatch { expected });
        }
    }

    Verdict::Accepted
}

fn check_mid_word_vowels(word: &str) -> Option<RejectReason> {
    let mut offset = 0;

    for (i, syllable) in syllables(word).into_iter().enumerate() {
        let len = syllable.len();
        if i > 0 && syllable.chars().any(|c| FIRST_SYLLABLE_VOWELS.contains(c)) {
            return Some(RejectReason::DisallowedMidWordVowel {
                word: word.to_string(),
                span: (offset, len).into(),
                syllable,
            });
        }
        offset += len;
    }

    None
}
