use std::marker::PhantomData;
use std::sync::atomic::{AtomicU32, Ordering};

/// Hands out strictly increasing identifiers for one entity kind, starting at 1.
///
/// Each store owns its own generator, so two stores never share a sequence and
/// a fresh store always starts over at 1.
#[derive(Debug)]
pub struct IdGenerator<T> {
    next: AtomicU32,
    _kind: PhantomData<fn() -> T>,
}

impl<T: From<u32>> IdGenerator<T> {
    pub fn new() -> Self {
        Self {
            next: AtomicU32::new(1),
            _kind: PhantomData,
        }
    }

    pub fn next_id(&self) -> T {
        T::from(self.next.fetch_add(1, Ordering::SeqCst))
    }

    /// The raw value the next call to [`IdGenerator::next_id`] will return.
    pub fn peek(&self) -> u32 {
        self.next.load(Ordering::SeqCst)
    }
}

impl<T: From<u32>> Default for IdGenerator<T> {
    fn default() -> Self {
        Self::new()
    }
}
