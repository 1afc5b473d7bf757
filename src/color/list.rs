//! Fixed-capacity color lists
//!
//! Palettes and patterns are copied into the actors that use them, so an
//! actor never borrows color data it does not own.

use core::fmt;
use core::ops::Deref;

use super::{BLACK, Rgb};

/// Maximum number of colors in a palette
pub const PALETTE_CAPACITY: usize = 16;

/// Maximum number of colors in a moving pattern
pub const PATTERN_CAPACITY: usize = 32;

/// Set of colors an actor samples from
pub type Palette = ColorList<PALETTE_CAPACITY>;

/// Sequence of colors an actor draws as one shape
pub type Pattern = ColorList<PATTERN_CAPACITY>;

/// Error returned when a color list cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteError {
    /// No colors were given
    Empty,
    /// More colors were given than the list can hold
    Overflow { capacity: usize },
}

impl fmt::Display for PaletteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("color list is empty"),
            Self::Overflow { capacity } => {
                write!(f, "color list holds at most {capacity} colors")
            }
        }
    }
}

/// Non-empty ordered list of at most `CAP` colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorList<const CAP: usize> {
    colors: [Rgb; CAP],
    len: usize,
}

impl<const CAP: usize> ColorList<CAP> {
    /// Copy colors from a slice
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        if colors.len() > CAP {
            return Err(PaletteError::Overflow { capacity: CAP });
        }
        let mut list = Self {
            colors: [BLACK; CAP],
            len: colors.len(),
        };
        list.colors[..colors.len()].copy_from_slice(colors);
        Ok(list)
    }

    /// Build a list from an array at compile time
    ///
    /// Fails to compile when used in a const context with an empty or
    /// oversized array.
    pub const fn from_array<const M: usize>(colors: [Rgb; M]) -> Self {
        assert!(M > 0, "color list is empty");
        assert!(M <= CAP, "color list overflows its capacity");
        let mut buf = [BLACK; CAP];
        let mut i = 0;
        while i < M {
            buf[i] = colors[i];
            i += 1;
        }
        Self { colors: buf, len: M }
    }

    /// List with a single color
    pub const fn single(color: Rgb) -> Self {
        Self::from_array([color])
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    /// Always false, lists are never empty
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.colors[..self.len]
    }
}

impl<const CAP: usize> Deref for ColorList<CAP> {
    type Target = [Rgb];

    fn deref(&self) -> &[Rgb] {
        self.as_slice()
    }
}
