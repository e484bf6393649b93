use std::{fmt::Display, ops::Deref};

use super::FetchError;

/// A validated GitHub username.
///
/// Only non empty ASCII alphanumeric names are accepted. This is stricter than
/// the rules GitHub applies, hyphenated names are rejected as well.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Username(String);

impl Username {
    /// Validates the given name.
    pub fn parse(name: &str) -> Result<Self, FetchError> {
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(FetchError::InvalidUsername(name.to_string()));
        }

        Ok(Self(name.to_string()))
    }
}

impl TryFrom<&str> for Username {
    type Error = FetchError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        Self::parse(name)
    }
}

impl Deref for Username {
    type Target = String;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_alphanumeric_names() {
        for name in ["Apple", "apple", "OAIR22", "InvalidUserName123", "a", "42"] {
            let username = Username::parse(name).unwrap();

            assert_eq!(name, username.as_str());
        }
    }

    #[test]
    fn converts_from_str() {
        let username = Username::try_from("octocat").unwrap();

        assert_eq!("octocat", username.to_string());
        Username::try_from("octo_cat").expect_err("Underscore should be rejected");
    }

    #[test]
    fn rejects_empty_name() {
        let error = Username::parse("").expect_err("Empty username should be rejected");

        assert!(matches!(error, FetchError::InvalidUsername(name) if name.is_empty()));
    }

    #[test]
    fn rejects_names_with_any_non_alphanumeric_character() {
        for name in [
            "OAIR_22",
            "octo-cat",
            "with space",
            " Apple",
            "Apple\n",
            "a/b",
            "../repos",
            "café",
            "Ａpple",
        ] {
            let error = Username::parse(name)
                .expect_err(&format!("Username {name:?} should be rejected"));

            assert!(matches!(error, FetchError::InvalidUsername(_)));
        }
    }
}
