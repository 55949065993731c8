//! Reusable buffer fixtures.

use valbuf_core::ValueBuffer;

/// The three-element buffer `[1.0, 2.0, 3.0]`.
pub fn sample() -> ValueBuffer {
    ValueBuffer::from_slice(&[1.0, 2.0, 3.0])
}

/// A buffer of `len` elements counting up from zero.
pub fn ramp(len: usize) -> ValueBuffer {
    (0..len).map(|i| i as f32).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_counts_up() {
        let b = ramp(4);
        assert_eq!(b.as_slice(), &[0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn ramp_zero_is_empty() {
        assert!(ramp(0).is_empty());
    }
}
