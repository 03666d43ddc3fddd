use derive_more::{Deref, From, Into};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::fmt;

pub const UUID_LEN: usize = 16;

/// A universally unique identifier, as 16 opaque bytes.
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Debug)]
pub struct Uuid([u8; UUID_LEN]);

impl Uuid {
    /// Draws 16 bytes from the operating system's secure random source.
    pub fn generate() -> Result<Self, rand::Error> {
        Self::generate_with(&mut OsRng)
    }

    pub fn generate_with<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self, rand::Error> {
        let mut buf = [0u8; UUID_LEN];
        rng.try_fill_bytes(&mut buf)?;
        Ok(Self(buf))
    }

    pub fn as_bytes(&self) -> &[u8; UUID_LEN] {
        &self.0
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = std::array::TryFromSliceError;
    fn try_from(buf: &[u8]) -> Result<Self, Self::Error> {
        let arr = <[u8; UUID_LEN]>::try_from(buf)?;
        Ok(Self(arr))
    }
}

/// The canonical `8-4-4-4-12` lowercase hex form.
impl fmt::Display for Uuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                f.write_str("-")?;
            }
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
