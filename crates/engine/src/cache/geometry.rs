//! Address geometry: tag/index/offset decomposition.
//!
//! This module derives the cache geometry (set count, bitfield widths,
//! masks) from a [`CacheConfig`] and splits linear addresses into their
//! tag, index, and offset fields. It provides:
//! 1. **Validation:** Every geometry invariant is checked once, here, so the
//!    rest of the engine can do mask arithmetic without failure modes.
//! 2. **Decomposition:** Pure, stateless address splitting and the inverse
//!    reconstruction.
//! 3. **Introspection:** Read-only accessors for widths and masks.
//!
//! The bitfield layout is contiguous: offset occupies the low `offset_bits`
//! bits, index the next `index_bits`, and the tag everything above. Address
//! bits beyond `address_bits` are not masked off; they flow into the tag.

use crate::config::CacheConfig;
use crate::error::ConfigError;

/// Returns a mask of `bits` contiguous low one-bits.
const fn bitmask(bits: u32) -> u64 {
    if bits == 0 {
        0
    } else if bits >= u64::BITS {
        u64::MAX
    } else {
        (1u64 << bits) - 1
    }
}

/// Shifts `value` right by `shift`, yielding zero at a full 64-bit shift.
///
/// `index_bits + offset_bits` may legally equal 64 (a tagless geometry),
/// which a plain `>>` would reject.
const fn shr(value: u64, shift: u32) -> u64 {
    if shift >= u64::BITS { 0 } else { value >> shift }
}

/// Shifts `value` left by `shift`, yielding zero at a full 64-bit shift.
const fn shl(value: u64, shift: u32) -> u64 {
    if shift >= u64::BITS { 0 } else { value << shift }
}

/// The tag, index, and offset fields of a decomposed address.
///
/// Produced by [`Geometry::decompose`]; `index` selects the set, `offset`
/// the byte within a line, and `tag` identifies which memory line occupies
/// a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddressParts {
    /// High-order bits identifying the memory line (unmasked: bits above
    /// the configured address width land here).
    pub tag: u64,
    /// Mid-order bits selecting the set.
    pub index: u64,
    /// Low-order bits selecting a byte within the line.
    pub offset: u64,
}

/// Derived cache geometry: set count, bitfield widths, and masks.
///
/// Immutable once constructed. Construction validates every invariant of
/// the configuration, so decomposition is a pure function with no failure
/// modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    size_bytes: usize,
    ways: usize,
    line_bytes: usize,
    sets: usize,
    address_bits: u32,
    offset_bits: u32,
    index_bits: u32,
    tag_bits: u32,
    offset_mask: u64,
    index_mask: u64,
    tag_mask: u64,
}

impl Geometry {
    /// Derives the geometry from a configuration, validating its invariants.
    ///
    /// # Arguments
    ///
    /// * `config` - Cache configuration specifying total size, associativity,
    ///   line size, and address width.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when any field is zero, `line_bytes` or the
    /// derived set count is not a power of two, `size_bytes` is not an exact
    /// multiple of `ways * line_bytes`, or the address width cannot hold the
    /// index and offset bitfields (or exceeds 64).
    pub fn new(config: &CacheConfig) -> Result<Self, ConfigError> {
        if config.size_bytes == 0 {
            return Err(ConfigError::ZeroField { field: "size_bytes" });
        }
        if config.ways == 0 {
            return Err(ConfigError::ZeroField { field: "ways" });
        }
        if config.line_bytes == 0 {
            return Err(ConfigError::ZeroField { field: "line_bytes" });
        }
        if config.address_bits == 0 {
            return Err(ConfigError::ZeroField { field: "address_bits" });
        }
        if config.address_bits > u64::BITS {
            return Err(ConfigError::AddressWidthTooWide {
                address_bits: config.address_bits,
            });
        }
        if !config.line_bytes.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "line_bytes",
                value: config.line_bytes,
            });
        }

        let line_capacity = config.ways * config.line_bytes;
        if config.size_bytes % line_capacity != 0 {
            return Err(ConfigError::SizeMismatch {
                size_bytes: config.size_bytes,
                ways: config.ways,
                line_bytes: config.line_bytes,
            });
        }
        let sets = config.size_bytes / line_capacity;
        if !sets.is_power_of_two() {
            return Err(ConfigError::NotPowerOfTwo {
                field: "num_sets",
                value: sets,
            });
        }

        let offset_bits = config.line_bytes.trailing_zeros();
        let index_bits = sets.trailing_zeros();
        let required = index_bits + offset_bits;
        if config.address_bits < required {
            return Err(ConfigError::AddressWidthTooSmall {
                address_bits: config.address_bits,
                required,
            });
        }
        let tag_bits = config.address_bits - required;

        Ok(Self {
            size_bytes: config.size_bytes,
            ways: config.ways,
            line_bytes: config.line_bytes,
            sets,
            address_bits: config.address_bits,
            offset_bits,
            index_bits,
            tag_bits,
            offset_mask: bitmask(offset_bits),
            index_mask: bitmask(index_bits) << offset_bits,
            tag_mask: shl(bitmask(tag_bits), required),
        })
    }

    /// Splits an address into its tag, index, and offset fields.
    ///
    /// Pure and stateless. Only the low `address_bits` bits are semantically
    /// meaningful; higher bits are captured by the tag rather than masked.
    pub const fn decompose(&self, address: u64) -> AddressParts {
        AddressParts {
            tag: shr(address, self.index_bits + self.offset_bits),
            index: (address & self.index_mask) >> self.offset_bits,
            offset: address & self.offset_mask,
        }
    }

    /// Reassembles an address from its decomposed fields.
    ///
    /// Inverse of [`Geometry::decompose`]: for any address,
    /// `reconstruct(decompose(a)) == a`.
    pub const fn reconstruct(&self, parts: AddressParts) -> u64 {
        shl(parts.tag, self.index_bits + self.offset_bits)
            | (parts.index << self.offset_bits)
            | parts.offset
    }

    /// Total cache size in bytes.
    #[inline]
    pub const fn size_bytes(&self) -> usize {
        self.size_bytes
    }

    /// Associativity (number of ways per set).
    #[inline]
    pub const fn ways(&self) -> usize {
        self.ways
    }

    /// Cache line size in bytes.
    #[inline]
    pub const fn line_bytes(&self) -> usize {
        self.line_bytes
    }

    /// Number of sets.
    #[inline]
    pub const fn sets(&self) -> usize {
        self.sets
    }

    /// Configured address width in bits.
    #[inline]
    pub const fn address_bits(&self) -> u32 {
        self.address_bits
    }

    /// Width of the byte-offset bitfield.
    #[inline]
    pub const fn offset_bits(&self) -> u32 {
        self.offset_bits
    }

    /// Width of the set-index bitfield.
    #[inline]
    pub const fn index_bits(&self) -> u32 {
        self.index_bits
    }

    /// Width of the tag bitfield.
    #[inline]
    pub const fn tag_bits(&self) -> u32 {
        self.tag_bits
    }

    /// Bitmask selecting the offset field of an address.
    #[inline]
    pub const fn offset_mask(&self) -> u64 {
        self.offset_mask
    }

    /// Bitmask selecting the index field of an address.
    #[inline]
    pub const fn index_mask(&self) -> u64 {
        self.index_mask
    }

    /// Bitmask selecting the tag field of an address (within the configured
    /// address width).
    #[inline]
    pub const fn tag_mask(&self) -> u64 {
        self.tag_mask
    }
}
