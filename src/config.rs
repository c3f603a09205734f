use crate::bitfile::DEFAULT_FILE_NAME;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub binary_path: PathBuf,
    /// `None` selects the embedded English list.
    pub wordlist_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            binary_path: PathBuf::from(DEFAULT_FILE_NAME),
            wordlist_path: None,
        }
    }
}

impl EngineConfig {

    pub fn new() -> Self {
        Self::default()
    }

    pub fn binary_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.binary_path = path.into();
        self
    }

    pub fn wordlist_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.wordlist_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.binary_path, PathBuf::from("binary.txt"));
        assert!(config.wordlist_path.is_none());
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .binary_path("/tmp/bits.txt")
            .wordlist_path("words.txt");
        assert_eq!(config.binary_path, PathBuf::from("/tmp/bits.txt"));
        assert_eq!(config.wordlist_path, Some(PathBuf::from("words.txt")));
    }
}
