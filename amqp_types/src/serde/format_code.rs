use crate::serde::{UnknownFormatCode, Width};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;

/// The raw leading byte of an encoded value.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct FormatCodeInt(u8);
impl From<FormatCode> for FormatCodeInt {
    fn from(code: FormatCode) -> Self {
        Self(code as u8)
    }
}

/// Every format code this encoder emits.
///
/// Variable-width and composite kinds have a one-byte-length member (`*8`)
/// and a four-byte-length member (`*32`). The empty list has its own member.
#[repr(u8)]
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, FromPrimitive, Debug)]
pub enum FormatCode {
    Described = 0x00,

    Null = 0x40,
    True = 0x41,
    False = 0x42,
    List0 = 0x45,

    UByte = 0x50,
    Byte = 0x51,
    UShort = 0x60,
    Short = 0x61,
    UInt = 0x70,
    Int = 0x71,
    Float = 0x72,
    ULong = 0x80,
    Long = 0x81,
    Double = 0x82,
    Timestamp = 0x83,
    Uuid = 0x98,

    Vbin8 = 0xa0,
    Str8 = 0xa1,
    Sym8 = 0xa3,
    Vbin32 = 0xb0,
    Str32 = 0xb1,
    Sym32 = 0xb3,

    List8 = 0xc0,
    Map8 = 0xc1,
    List32 = 0xd0,
    Map32 = 0xd1,
}
impl TryFrom<FormatCodeInt> for FormatCode {
    type Error = UnknownFormatCode;
    fn try_from(int: FormatCodeInt) -> Result<Self, Self::Error> {
        FormatCode::from_u8(int.0).ok_or(UnknownFormatCode(int.0))
    }
}
impl FormatCode {
    pub fn to_byte(self) -> u8 {
        *FormatCodeInt::from(self)
    }

    /// Whether the byte(s) following this code hold a 4-byte length.
    pub fn is_large_form(self) -> bool {
        matches!(
            self,
            Self::Vbin32 | Self::Str32 | Self::Sym32 | Self::List32 | Self::Map32
        )
    }
}

/// The one-byte-length and four-byte-length codes of a variable-width or composite kind.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Forms {
    pub small: FormatCode,
    pub large: FormatCode,
}
impl Forms {
    pub const BINARY: Self = Self::new(FormatCode::Vbin8, FormatCode::Vbin32);
    pub const STRING: Self = Self::new(FormatCode::Str8, FormatCode::Str32);
    pub const SYMBOL: Self = Self::new(FormatCode::Sym8, FormatCode::Sym32);
    pub const LIST: Self = Self::new(FormatCode::List8, FormatCode::List32);
    pub const MAP: Self = Self::new(FormatCode::Map8, FormatCode::Map32);

    const fn new(small: FormatCode, large: FormatCode) -> Self {
        Self { small, large }
    }

    pub fn pick(self, width: Width) -> FormatCode {
        match width {
            Width::Small => self.small,
            Width::Large => self.large,
        }
    }
}
