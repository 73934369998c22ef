//! Compile-time selection of the narrowest unsigned integer for a bound.
//!
//! Chunk records store a byte size and a successor index. Both are packed
//! into the smallest unsigned word that can represent the arena capacity
//! and the chunk-table length respectively. [`UintWidth::for_bound`] is the
//! `const` mapping from a bound to a width; [`SmallUint`] connects each
//! width back to its concrete integer type.

use core::fmt;
use core::hash::Hash;

/// One rung of the 8/16/32/64-bit escalation ladder.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UintWidth {
    /// `u8`
    U8,
    /// `u16`
    U16,
    /// `u32`
    U32,
    /// `u64`
    U64,
}

impl UintWidth {
    /// The smallest width whose maximum value is at least `bound`.
    pub const fn for_bound(bound: u64) -> Self {
        if bound <= u8::MAX as u64 {
            Self::U8
        } else if bound <= u16::MAX as u64 {
            Self::U16
        } else if bound <= u32::MAX as u64 {
            Self::U32
        } else {
            Self::U64
        }
    }

    /// Largest value representable at this width.
    pub const fn max_value(self) -> u64 {
        match self {
            Self::U8 => u8::MAX as u64,
            Self::U16 => u16::MAX as u64,
            Self::U32 => u32::MAX as u64,
            Self::U64 => u64::MAX,
        }
    }

    /// Whether every value in `0..=bound` fits at this width.
    pub const fn covers(self, bound: u64) -> bool {
        bound <= self.max_value()
    }

    /// Width in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 => 8,
            Self::U16 => 16,
            Self::U32 => 32,
            Self::U64 => 64,
        }
    }

    /// Width in bytes.
    pub const fn bytes(self) -> usize {
        (self.bits() / 8) as usize
    }
}

impl fmt::Display for UintWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "u{}", self.bits())
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// An unsigned integer usable as a packed chunk-metadata word.
///
/// Implemented for `u8`, `u16`, `u32` and `u64` only. Conversions to and
/// from `usize` are plain casts: callers are expected to have checked at
/// compile time (via [`UintWidth::covers`]) that every value they store
/// fits the word.
pub trait SmallUint:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + fmt::Display + sealed::Sealed
{
    /// The width rung this type occupies.
    const WIDTH: UintWidth;
    /// All bits set; used as the NONE sentinel for index words.
    const MAX: Self;
    /// Zero.
    const ZERO: Self;

    /// Narrow a `usize` into this word.
    fn from_usize(value: usize) -> Self;

    /// Widen this word into a `usize`.
    fn to_usize(self) -> usize;
}

macro_rules! impl_small_uint {
    ($($ty:ty => $width:ident),* $(,)?) => {
        $(
            impl SmallUint for $ty {
                const WIDTH: UintWidth = UintWidth::$width;
                const MAX: Self = <$ty>::MAX;
                const ZERO: Self = 0;

                #[inline]
                fn from_usize(value: usize) -> Self {
                    value as $ty
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )*
    };
}

impl_small_uint!(u8 => U8, u16 => U16, u32 => U32, u64 => U64);
