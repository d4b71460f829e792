//! Byte classes carried by NFA vertices.

use std::fmt;

/// Set of bytes a vertex can match, one bit per byte value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct CharReach([u64; 4]);

impl CharReach {
    /// Empty class (matches nothing).
    pub fn none() -> Self {
        Self([0; 4])
    }

    /// Class matching every byte (`.` in dotall mode).
    pub fn all() -> Self {
        Self([u64::MAX; 4])
    }

    pub fn byte(b: u8) -> Self {
        let mut cr = Self::none();
        cr.set(b);
        cr
    }

    /// Inclusive byte range `lo..=hi`. Empty when `lo > hi`.
    pub fn range(lo: u8, hi: u8) -> Self {
        let mut cr = Self::none();
        for b in lo..=hi {
            cr.set(b);
        }
        cr
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut cr = Self::none();
        for &b in bytes {
            cr.set(b);
        }
        cr
    }

    #[inline]
    pub fn set(&mut self, b: u8) {
        self.0[(b >> 6) as usize] |= 1 << (b & 63);
    }

    #[inline]
    pub fn clear(&mut self, b: u8) {
        self.0[(b >> 6) as usize] &= !(1 << (b & 63));
    }

    #[inline]
    pub fn contains(&self, b: u8) -> bool {
        self.0[(b >> 6) as usize] & (1 << (b & 63)) != 0
    }

    pub fn count(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.0 == [0; 4]
    }

    pub fn is_all(&self) -> bool {
        self.0 == [u64::MAX; 4]
    }

    pub fn union(&self, other: &Self) -> Self {
        let mut words = self.0;
        for (w, o) in words.iter_mut().zip(other.0) {
            *w |= o;
        }
        Self(words)
    }

    /// Iterate over member bytes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&b| self.contains(b))
    }

    /// Maximal runs of consecutive member bytes as inclusive ranges.
    fn runs(&self) -> Vec<(u8, u8)> {
        let mut runs: Vec<(u8, u8)> = Vec::new();
        for b in self.iter() {
            match runs.last_mut() {
                Some((_, hi)) if *hi as u16 + 1 == b as u16 => *hi = b,
                _ => runs.push((b, b)),
            }
        }
        runs
    }
}

fn write_byte(f: &mut fmt::Formatter<'_>, b: u8) -> fmt::Result {
    match b {
        b'\\' | b']' | b'[' | b'-' | b'^' => write!(f, "\\{}", b as char),
        0x21..=0x7e => write!(f, "{}", b as char),
        _ => write!(f, "\\x{b:02x}"),
    }
}

impl fmt::Display for CharReach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_all() {
            return f.write_str(".");
        }
        let runs = self.runs();
        if let [(lo, hi)] = runs.as_slice()
            && lo == hi
        {
            return write_byte(f, *lo);
        }
        f.write_str("[")?;
        for (lo, hi) in runs {
            write_byte(f, lo)?;
            if hi > lo {
                if hi > lo + 1 {
                    f.write_str("-")?;
                }
                write_byte(f, hi)?;
            }
        }
        f.write_str("]")
    }
}

impl fmt::Debug for CharReach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CharReach({self})")
    }
}
