//! Benchmark profiles for valbuf buffer operations.
//!
//! - [`PROFILE_LENGTHS`]: element counts from a cache line to a few MB
//! - [`profile_buffer`]: deterministic contents for a given length

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use valbuf::buffer::ValueBuffer;

/// Buffer lengths exercised by each benchmark group.
pub const PROFILE_LENGTHS: [usize; 4] = [16, 1_024, 65_536, 1_048_576];

/// Build a buffer of `len` deterministic pseudo-random values in `[0, 1)`.
pub fn profile_buffer(len: usize) -> ValueBuffer {
    (0..len as u64)
        .map(|i| {
            let bits = i.wrapping_mul(6364136223846793007).wrapping_add(1442695040888963407);
            (bits >> 40) as f32 / (1u64 << 24) as f32
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_buffer_has_requested_length() {
        for &len in &PROFILE_LENGTHS[..2] {
            assert_eq!(profile_buffer(len).len(), len);
        }
    }

    #[test]
    fn profile_buffer_is_deterministic_and_in_range() {
        let a = profile_buffer(256);
        let b = profile_buffer(256);
        assert_eq!(a, b);
        assert!(a.iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}
