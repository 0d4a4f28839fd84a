use scrypt::Params;
use zeroize::Zeroizing;

use crate::{Result, SealError, KEY_LEN};

pub type Key = [u8; KEY_LEN];

/// scrypt cost parameters, `N = 2^log_n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KdfParams {
    pub log_n: u8,
    pub r: u32,
    pub p: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            log_n: 14,
            r: 8,
            p: 1,
        }
    }
}

impl KdfParams {
    pub fn new(log_n: u8, r: u32, p: u32) -> Result<Self> {
        let params = Self { log_n, r, p };
        params.to_scrypt()?;

        Ok(params)
    }

    fn to_scrypt(self) -> Result<Params> {
        Params::new(self.log_n, self.r, self.p, KEY_LEN).map_err(SealError::KeyDerivationParamError)
    }
}

/// derives a 32 byte key from a password and a salt, with scrypt
pub fn derive_key(password: &[u8], salt: &[u8], params: &KdfParams) -> Result<Zeroizing<Key>> {
    if password.is_empty() {
        return Err(SealError::EmptyPassword);
    }
    if salt.is_empty() {
        return Err(SealError::EmptySalt);
    }

    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    scrypt::scrypt(password, salt, &params.to_scrypt()?, key.as_mut())
        .map_err(SealError::KeyDerivationError)?;

    Ok(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    // keeps the test suite fast, the production cost is covered by `default_params_are_accepted`
    const CHEAP: KdfParams = KdfParams {
        log_n: 4,
        r: 8,
        p: 1,
    };

    #[test]
    fn default_params_are_accepted() {
        let params = KdfParams::default();
        assert_eq!((params.log_n, params.r, params.p), (14, 8, 1));
        assert!(params.to_scrypt().is_ok());
    }

    #[test]
    fn should_be_deterministic() {
        let salt = [7u8; 16];
        let a = derive_key(b"hunter42", &salt, &CHEAP).unwrap();
        let b = derive_key(b"hunter42", &salt, &CHEAP).unwrap();

        assert_eq!(*a, *b);
        assert_ne!(*a, [0u8; KEY_LEN]);
    }

    #[test]
    fn should_depend_on_password_and_salt() {
        let a = derive_key(b"hunter42", &[1u8; 16], &CHEAP).unwrap();
        let b = derive_key(b"hunter43", &[1u8; 16], &CHEAP).unwrap();
        let c = derive_key(b"hunter42", &[2u8; 16], &CHEAP).unwrap();

        assert_ne!(*a, *b);
        assert_ne!(*a, *c);
    }

    #[test]
    fn should_reject_empty_password_and_salt() {
        assert!(matches!(
            derive_key(b"", &[1u8; 16], &CHEAP),
            Err(SealError::EmptyPassword)
        ));
        assert!(matches!(
            derive_key(b"pw", &[], &CHEAP),
            Err(SealError::EmptySalt)
        ));
    }

    #[test]
    fn should_reject_invalid_cost_params() {
        assert!(matches!(
            KdfParams::new(14, 8, 0),
            Err(SealError::KeyDerivationParamError(_))
        ));
        assert!(matches!(
            KdfParams::new(14, 0, 1),
            Err(SealError::KeyDerivationParamError(_))
        ));
    }
}
