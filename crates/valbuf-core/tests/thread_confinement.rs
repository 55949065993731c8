//! Buffers cross threads by ownership transfer and are read concurrently
//! through shared references.

use std::thread;

use crossbeam_channel::bounded;
use valbuf_core::ValueBuffer;

#[test]
fn buffers_move_between_threads_over_a_channel() {
    let (tx, rx) = bounded::<ValueBuffer>(4);

    let producer = thread::spawn(move || {
        for i in 0..16 {
            let b = ValueBuffer::from_slice(&[i as f32, (i * 2) as f32]);
            tx.send(b).unwrap();
        }
    });

    let mut received = 0;
    for (i, b) in rx.iter().enumerate() {
        assert_eq!(b.len(), 2);
        assert_eq!(b.at(0), i as f32);
        assert_eq!(b.at(1), (i * 2) as f32);
        received += 1;
    }
    producer.join().unwrap();
    assert_eq!(received, 16);
}

#[test]
fn concurrent_readers_see_identical_contents() {
    let b: ValueBuffer = (0..1024).map(|i| i as f32).collect();
    let expected: f32 = b.iter().sum();

    thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| b.iter().sum::<f32>()))
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap(), expected);
        }
    });
    assert_eq!(b.len(), 1024);
}

#[test]
fn copies_handed_to_workers_are_independent() {
    let original = ValueBuffer::from_slice(&[1.0, 2.0, 3.0]);
    let (tx, rx) = bounded::<ValueBuffer>(1);

    let worker = {
        let mut copy = original.clone();
        thread::spawn(move || {
            for v in copy.as_mut_slice() {
                *v *= 10.0;
            }
            tx.send(copy).unwrap();
        })
    };

    let scaled = rx.recv().unwrap();
    worker.join().unwrap();
    assert_eq!(scaled.as_slice(), &[10.0, 20.0, 30.0]);
    assert_eq!(original.as_slice(), &[1.0, 2.0, 3.0]);
}
