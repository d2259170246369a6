//! Domain fingerprinting
//!
//! Every synthetic metric is driven by a single integer derived from the
//! hostname: the sum of its character codes. The same hostname always yields
//! the same fingerprint, which keeps generated profiles reproducible.

/// Integer fingerprint of a hostname.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fingerprint(u64);

impl Fingerprint {
    /// Sum the character codes of `host`.
    pub fn of(host: &str) -> Self {
        Self(host.chars().map(|c| u64::from(u32::from(c))).sum())
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// `fingerprint mod modulus`, narrowed for use in small counts and indices.
    pub fn rem(self, modulus: u64) -> u32 {
        (self.0 % modulus) as u32
    }

    /// `fingerprint mod modulus != 0`; the hash half of every derived boolean.
    pub fn not_divisible_by(self, modulus: u64) -> bool {
        self.0 % modulus != 0
    }
}
