//! Mapping between the value domain `1..=N` and the residue domain `0..N`.
//!
//! Value `N` maps to residue `0`; every other value maps to itself. The two
//! functions are exact inverses over their domains.

use crate::ParticipantCount;

/// Map a drawn value in `1..=N` to its residue in `0..N`.
pub fn to_residue(value: u64, n: ParticipantCount) -> u64 {
    debug_assert!((1..=n.get()).contains(&value), "value out of range");
    if value == n.get() {
        0
    } else {
        value % n.get()
    }
}

/// Map a residue in `0..N` back to the value domain `1..=N`.
pub fn from_residue(residue: u64, n: ParticipantCount) -> u64 {
    debug_assert!(residue < n.get(), "residue out of range");
    if residue == 0 {
        n.get()
    } else {
        residue
    }
}

/// Reduce a possibly negative number modulo `N` into `0..N`.
///
/// The remainder of a negative operand is negative, so `N` is added back.
pub fn mod_normalized(value: i64, n: ParticipantCount) -> u64 {
    let modulus = n.get() as i64;
    let mut reduced = value % modulus;
    if reduced < 0 {
        reduced += modulus;
    }
    reduced as u64
}
