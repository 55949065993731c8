//! The owning value buffer.
//!
//! A [`ValueBuffer`] is a fixed-length run of `f32` values held behind a
//! single-owner handle. Copying allocates fresh storage, moving hands the
//! handle over, and dropping releases it. There is no shared or
//! reference-counted state.

use std::fmt;
use std::ops::{Index, IndexMut};

use crate::error::BufferError;

/// Size of one element in bytes.
const ELEMENT_BYTES: usize = std::mem::size_of::<f32>();

/// An owning, fixed-length buffer of `f32` values with value semantics.
///
/// The buffer is in one of two states: holding `N > 0` elements in a
/// heap block it owns exclusively, or empty with no allocation at all.
/// Every operation maps between these two states; there is no partially
/// allocated buffer.
///
/// - **Copy** ([`Clone`]) always allocates new storage.
/// - **Move** is the language move. [`take`](Self::take) and
///   [`move_from`](Self::move_from) expose the moved-from side, which is
///   always left empty.
/// - **Destroy** is [`Drop`] on the owning handle, or
///   [`clear`](Self::clear) for explicit teardown.
#[derive(Default)]
pub struct ValueBuffer {
    /// `None` iff the buffer is empty. Never `Some` of a zero-length slice.
    data: Option<Box<[f32]>>,
}

impl ValueBuffer {
    /// Create an empty buffer. Does not allocate.
    pub const fn new() -> Self {
        Self { data: None }
    }

    /// Create a buffer holding a copy of `values`, in order.
    ///
    /// An empty slice yields the empty buffer without allocating.
    /// Allocation failure aborts the process; use
    /// [`try_from_slice`](Self::try_from_slice) to observe it instead.
    pub fn from_slice(values: &[f32]) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        Self {
            data: Some(Box::from(values)),
        }
    }

    /// Fallible form of [`from_slice`](Self::from_slice).
    ///
    /// On error no buffer is produced and nothing is leaked.
    pub fn try_from_slice(values: &[f32]) -> Result<Self, BufferError> {
        if values.is_empty() {
            return Ok(Self::new());
        }
        let mut storage = reserve_storage(values.len())?;
        storage.extend_from_slice(values);
        Ok(Self {
            data: Some(storage.into_boxed_slice()),
        })
    }

    /// Fallible deep copy. See [`Clone`] for the infallible form.
    pub fn try_clone(&self) -> Result<Self, BufferError> {
        Self::try_from_slice(self.as_slice())
    }

    /// Copy-assign from `source`, reporting allocation failure.
    ///
    /// The copy is built before `self` is touched, so on error `self`
    /// still holds its previous contents.
    pub fn try_clone_from(&mut self, source: &Self) -> Result<(), BufferError> {
        let mut copy = source.try_clone()?;
        self.swap(&mut copy);
        Ok(())
    }

    /// Move the contents out, leaving `self` empty.
    ///
    /// Constant time; no element is copied and nothing is allocated.
    pub fn take(&mut self) -> Self {
        Self {
            data: self.data.take(),
        }
    }

    /// Move-assign: release the current storage, adopt `source`'s, and
    /// leave `source` empty.
    pub fn move_from(&mut self, source: &mut Self) {
        self.data = source.data.take();
    }

    /// Exchange contents with `other`. Never allocates, never fails.
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(&mut self.data, &mut other.data);
    }

    /// Release the storage and return to the empty state.
    ///
    /// A no-op on an already-empty buffer.
    pub fn clear(&mut self) {
        self.data = None;
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, |d| d.len())
    }

    /// Whether the buffer holds no elements (and therefore no storage).
    pub fn is_empty(&self) -> bool {
        self.data.is_none()
    }

    /// Element at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`. Out-of-range access is a caller bug,
    /// not a recoverable condition; use [`get`](Self::get) to probe.
    #[track_caller]
    pub fn at(&self, index: usize) -> f32 {
        match self.get(index) {
            Some(value) => value,
            None => out_of_range(index, self.len()),
        }
    }

    /// Element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<f32> {
        self.as_slice().get(index).copied()
    }

    /// View the elements as a slice. Empty for an empty buffer.
    pub fn as_slice(&self) -> &[f32] {
        self.data.as_deref().unwrap_or(&[])
    }

    /// View the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        match self.data.as_deref_mut() {
            Some(data) => data,
            None => &mut [],
        }
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.as_slice().iter()
    }

    /// Opaque storage identity, for diagnostics only.
    ///
    /// Null for an empty buffer. Two live buffers never report the same
    /// non-null pointer.
    pub fn as_ptr(&self) -> *const f32 {
        self.data.as_ref().map_or(std::ptr::null(), |d| d.as_ptr())
    }

    /// Bytes of heap storage owned by this buffer.
    pub fn memory_bytes(&self) -> usize {
        self.len() * ELEMENT_BYTES
    }
}

/// Reserve exactly `len` elements, mapping the failure to [`BufferError`].
fn reserve_storage(len: usize) -> Result<Vec<f32>, BufferError> {
    let mut storage = Vec::new();
    storage
        .try_reserve_exact(len)
        .map_err(|_| allocation_error(len))?;
    Ok(storage)
}

fn allocation_error(len: usize) -> BufferError {
    match len.checked_mul(ELEMENT_BYTES) {
        Some(bytes) if bytes <= isize::MAX as usize => BufferError::AllocationFailed {
            requested_bytes: bytes,
        },
        _ => BufferError::CapacityOverflow { len },
    }
}

#[cold]
#[track_caller]
fn out_of_range(index: usize, len: usize) -> ! {
    panic!("index {index} out of range for buffer of length {len}")
}

impl Clone for ValueBuffer {
    fn clone(&self) -> Self {
        Self::from_slice(self.as_slice())
    }

    /// Copy-and-swap: the copy is completed before `self` changes, and
    /// the old storage is released once, when the temporary drops.
    fn clone_from(&mut self, source: &Self) {
        let mut copy = source.clone();
        self.swap(&mut copy);
    }
}

impl PartialEq for ValueBuffer {
    /// Element-wise `f32` equality, so a buffer containing NaN is not
    /// equal to itself.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl fmt::Debug for ValueBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ValueBuffer").field(&self.as_slice()).finish()
    }
}

impl Index<usize> for ValueBuffer {
    type Output = f32;

    #[track_caller]
    fn index(&self, index: usize) -> &f32 {
        let len = self.len();
        match self.as_slice().get(index) {
            Some(value) => value,
            None => out_of_range(index, len),
        }
    }
}

impl IndexMut<usize> for ValueBuffer {
    #[track_caller]
    fn index_mut(&mut self, index: usize) -> &mut f32 {
        let len = self.len();
        match self.as_mut_slice().get_mut(index) {
            Some(value) => value,
            None => out_of_range(index, len),
        }
    }
}

impl AsRef<[f32]> for ValueBuffer {
    fn as_ref(&self) -> &[f32] {
        self.as_slice()
    }
}

impl From<&[f32]> for ValueBuffer {
    fn from(values: &[f32]) -> Self {
        Self::from_slice(values)
    }
}

impl<const N: usize> From<[f32; N]> for ValueBuffer {
    fn from(values: [f32; N]) -> Self {
        Self::from_slice(&values)
    }
}

impl From<Vec<f32>> for ValueBuffer {
    fn from(values: Vec<f32>) -> Self {
        if values.is_empty() {
            return Self::new();
        }
        Self {
            data: Some(values.into_boxed_slice()),
        }
    }
}

impl FromIterator<f32> for ValueBuffer {
    fn from_iter<I: IntoIterator<Item = f32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<f32>>())
    }
}

impl<'a> IntoIterator for &'a ValueBuffer {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
