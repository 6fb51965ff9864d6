//! Validator options
//!
//! Options arrive as raw strings from annotation text; each validator parses
//! the ones it understands in [`Validator::set_options`](crate::Validator::set_options).

use crate::errors::OptionError;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Name to raw value mapping passed to a validator
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatorOptions {
    entries: BTreeMap<String, String>,
}

impl ValidatorOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an option, replacing any earlier value for the same name
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Merge `other` into `self`; values from `other` win on name clashes
    pub fn merge(&mut self, other: ValidatorOptions) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Parse an optional option into `T`
    ///
    /// Absent options yield `Ok(None)`; present but unparsable ones an
    /// [`OptionError::Invalid`].
    pub fn parse<T>(&self, name: &str) -> Result<Option<T>, OptionError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        match self.get(name) {
            None => Ok(None),
            Some(raw) => raw
                .trim()
                .parse::<T>()
                .map(Some)
                .map_err(|e| OptionError::Invalid {
                    option: name.to_string(),
                    value: raw.to_string(),
                    reason: e.to_string(),
                }),
        }
    }

    /// Like [`parse`](Self::parse) but the option must be present
    pub fn require<T>(&self, name: &str) -> Result<T, OptionError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.parse(name)?.ok_or_else(|| OptionError::Missing {
            option: name.to_string(),
        })
    }
}

impl<K, V> FromIterator<(K, V)> for ValidatorOptions
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_present_and_absent() {
        let options = ValidatorOptions::new().with("minimum", " 3 ");
        assert_eq!(options.parse::<usize>("minimum"), Ok(Some(3)));
        assert_eq!(options.parse::<usize>("maximum"), Ok(None));
    }

    #[test]
    fn test_parse_invalid() {
        let options = ValidatorOptions::new().with("minimum", "three");
        let err = options.parse::<usize>("minimum").unwrap_err();
        assert!(matches!(err, OptionError::Invalid { ref option, .. } if option == "minimum"));
    }

    #[test]
    fn test_require_missing() {
        let options = ValidatorOptions::new();
        assert_eq!(
            options.require::<String>("pattern"),
            Err(OptionError::Missing {
                option: "pattern".to_string()
            })
        );
    }

    #[test]
    fn test_merge_later_wins() {
        let mut options: ValidatorOptions = [("a", "1"), ("b", "2")].into_iter().collect();
        options.merge([("b", "3")].into_iter().collect());
        assert_eq!(options.get("a"), Some("1"));
        assert_eq!(options.get("b"), Some("3"));
        assert_eq!(options.len(), 2);
    }
}
