use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;
use tracing::{info, warn};

use crate::error::{DictionaryError, Result};
use crate::validation::rules::to_turkish_lowercase;

/// Read-only set of known Turkish words, shared by every game session
#[derive(Debug, Default)]
pub struct WordDictionary {
    words: HashSet<String>,
}

impl WordDictionary {
    /// Load the word list at `dictionary_path`, one word per line.
    ///
    /// Lines are trimmed and lowercased; blank lines are skipped. An empty file
    /// gives an empty dictionary which rejects every word.
    pub fn load(dictionary_path: &str) -> Result<Self> {
        info!("Loading dictionary from {}", dictionary_path);

        let file = File::open(Path::new(dictionary_path)).map_err(DictionaryError::LoadError)?;
        let dictionary = Self::from_reader(io::BufReader::new(file))?;

        if dictionary.is_empty() {
            warn!("Dictionary {} contains no words", dictionary_path);
        } else {
            info!("Loaded {} words from dictionary", dictionary.len());
        }

        Ok(dictionary)
    }

    /// Like [`WordDictionary::load`], but a missing file yields an empty
    /// dictionary so the rest of the bot keeps running.
    pub fn load_or_empty(dictionary_path: &str) -> Result<Self> {
        match Self::load(dictionary_path) {
            Err(crate::Error::Dictionary(DictionaryError::LoadError(e)))
                if e.kind() == io::ErrorKind::NotFound =>
            {
                warn!(
                    "Dictionary file {} not found, every word will be rejected",
                    dictionary_path
                );
                Ok(Self::default())
            }
            other => other,
        }
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self> {
        let mut words = HashSet::new();

        for line in reader.lines() {
            let line = line.map_err(DictionaryError::LoadError)?;
            let word = to_turkish_lowercase(line.trim());
            if !word.is_empty() {
                words.insert(word);
            }
        }

        Ok(Self { words })
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| to_turkish_lowercase(w.as_ref().trim()))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Membership test; expects an already lowercased word
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_dictionary() -> std::io::Result<()> {
        let mut file = NamedTempFile::new()?;
        writeln!(file, "elma")?;
        writeln!(file, "  Masa  ")?;
        writeln!(file)?;
        writeln!(file, "IRMAK")?;

        let dictionary = WordDictionary::load(file.path().to_str().unwrap()).unwrap();

        assert_eq!(dictionary.len(), 3);
        assert!(dictionary.contains("elma"));
        assert!(dictionary.contains("masa"));
        // Dotless capital I lowercases to ı
        assert!(dictionary.contains("ırmak"));
        assert!(!dictionary.contains("irmak"));
        assert!(!dictionary.contains(""));

        Ok(())
    }

    #[test]
    fn test_empty_dictionary_is_valid() -> std::io::Result<()> {
        let file = NamedTempFile::new()?;

        let dictionary = WordDictionary::load(file.path().to_str().unwrap()).unwrap();
        assert!(dictionary.is_empty());

        Ok(())
    }

    #[test]
    fn test_missing_dictionary() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let path = path.to_str().unwrap();

        match WordDictionary::load(path) {
            Err(crate::Error::Dictionary(DictionaryError::LoadError(_))) => {}
            _ => panic!("Expected LoadError"),
        }

        let dictionary = WordDictionary::load_or_empty(path).unwrap();
        assert!(dictionary.is_empty());
    }

    #[test]
    fn test_from_words() {
        let dictionary = WordDictionary::from_words(["Elma", " ayak", ""]);
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("elma"));
        assert!(dictionary.contains("ayak"));
    }
}
