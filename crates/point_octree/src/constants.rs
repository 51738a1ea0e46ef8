//! Octant layout constants.
//!
//! An octant index is a 3-bit code, one bit per axis. A set bit means the
//! point lies strictly on the positive side of the node center along that
//! axis.
//!
//! ```text
//! index  bit2(Z)  bit1(Y)  bit0(X)   offset from center
//!   0      -        -        -       (-x, -y, -z)
//!   1      -        -        +       (+x, -y, -z)
//!   2      -        +        -       (-x, +y, -z)
//!   3      -        +        +       (+x, +y, -z)
//!   4      +        -        -       (-x, -y, +z)
//!   5      +        -        +       (+x, -y, +z)
//!   6      +        +        -       (-x, +y, +z)
//!   7      +        +        +       (+x, +y, +z)
//! ```

/// Number of children of an interior node.
pub const OCTANT_COUNT: usize = 8;

/// Octant bit for the positive X half.
pub const OCTANT_X: u8 = 0b001;

/// Octant bit for the positive Y half.
pub const OCTANT_Y: u8 = 0b010;

/// Octant bit for the positive Z half.
pub const OCTANT_Z: u8 = 0b100;

/// Default maximum depth of an interior node below the root.
///
/// 64 halvings shrink an extent by 2^64, far below any separation that a
/// caller can meaningfully distinguish in f64 world coordinates.
pub const DEFAULT_MAX_DEPTH: u32 = 64;

/// Depth at which halving any finite positive f64 extent reaches zero.
///
/// The largest finite value is just under 2^1024 and the smallest subnormal
/// is 2^-1074; one more halving past that rounds to zero.
pub const MAX_USEFUL_DEPTH: u32 = 1024 + 1075;

#[cfg(test)]
#[path = "constants_test.rs"]
mod constants_test;
