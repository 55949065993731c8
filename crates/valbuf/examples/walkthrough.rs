//! Walk a buffer through construction, copy, and move, dumping it at
//! each step.
//!
//! Run with: `cargo run -p valbuf --example walkthrough`

use valbuf::prelude::*;

fn main() {
    let mut b1 = ValueBuffer::from([1.0, 2.0, 3.0]);
    println!("{}", dump!(b1));
    println!("{}", b1.dump());
    println!("Called from {}", call_site!());

    // Copy: b2 gets its own storage.
    let b2 = b1.clone();
    println!("{}", dump!(b2));
    println!("{}", dump!(b1));

    // Move: b3 adopts b1's storage, b1 is left empty.
    let b3 = b1.take();
    println!("{}", dump!(b3));
    println!("{}", dump!(b1));

    let compact = DumpConfig {
        max_elements: Some(4),
        precision: Some(1),
        show_address: false,
    };
    if let Err(e) = compact.validate() {
        eprintln!("invalid dump config: {e}");
        return;
    }
    let ramp: ValueBuffer = (0..12).map(|i| i as f32 * 0.5).collect();
    println!("{}", dump!(ramp, compact));
}
