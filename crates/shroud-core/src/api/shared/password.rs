use std::fmt::{self, Debug, Formatter};

use crate::result::Result;
use crate::ShroudError;

/// A password that never shows up in `Debug` output
#[derive(Default, Clone)]
pub struct Password(Option<String>);

impl Password {
    /// the password, an empty one counts as missing
    pub fn require(&self) -> Result<&str> {
        match self.0.as_deref() {
            Some(password) if !password.is_empty() => Ok(password),
            _ => Err(ShroudError::MissingPassword),
        }
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_ref() {
        let password: Password = None.into();
        assert_eq!(password.as_ref(), &None);

        let password: Password = "password".into();
        assert_eq!(password.as_ref(), &Some("password".to_string()));
    }

    #[test]
    fn test_debug() {
        let password: Password = None.into();
        assert_eq!(format!("{:?}", password), "Password(None)");

        let password: Password = "pw123".into();
        assert_eq!(format!("{:?}", password), "Password(*****)");
    }

    #[test]
    fn test_require() {
        assert_eq!(Password::from("pw123").require().unwrap(), "pw123");
        assert!(matches!(
            Password::default().require(),
            Err(ShroudError::MissingPassword)
        ));
        assert!(matches!(
            Password::from("").require(),
            Err(ShroudError::MissingPassword)
        ));
    }
}
