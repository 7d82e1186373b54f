//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony. The inner integer is `pub` to allow
//! direct indexing into dense `Vec`s via `id.0 as usize`, but callers should
//! prefer the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to the inner type's MAX.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Dense index of a DRT request within one enumeration run.
    ///
    /// Assigned by the demand preprocessor before the request list reaches
    /// this crate; the enumeration engine never renumbers requests.
    pub struct RequestId(u32);
}

typed_id! {
    /// Dense index of an admitted ride, assigned by `EnumerationDriver` in
    /// strictly increasing emission order, ascending by degree then by
    /// content within a degree.
    pub struct RideId(u32);
}

typed_id! {
    /// Opaque road/transit link identifier, normalized to a dense handle by
    /// whatever owns the network (`drt-network`'s `LinkRegistry`). Requests
    /// reference links only by this handle; link geometry and speed live in
    /// the registry, not on `DrtRequest`.
    pub struct LinkId(u32);
}

typed_id! {
    /// Opaque person identifier. Used only to disallow same-person sharing
    /// in one ride — never interpreted otherwise.
    pub struct PaxId(u64);
}

typed_id! {
    /// Opaque group identifier, passed through unmodified.
    pub struct GroupId(u64);
}
