//! Capped, geometrically growing byte accumulator.

use super::LoadError;

/// Size of the first allocation; later growth doubles.
const MIN_FIRST_ALLOC: usize = 32;

/// Append-only buffer that refuses to grow past `max` bytes.
#[derive(Debug)]
pub struct AccumBuffer {
    data: Vec<u8>,
    max: usize,
}

impl AccumBuffer {
    pub fn new(max: usize) -> Self {
        Self {
            data: Vec::new(),
            max,
        }
    }

    /// Appends `bytes`, failing with [`LoadError::CapacityExceeded`] if the
    /// result would exceed the limit or the allocation fails. On failure the
    /// buffer is left as it was.
    pub fn push(&mut self, bytes: &[u8]) -> Result<(), LoadError> {
        if bytes.is_empty() {
            return Ok(());
        }
        let too_big = LoadError::CapacityExceeded { limit: self.max };
        let needed = match self.data.len().checked_add(bytes.len()) {
            Some(n) if n <= self.max => n,
            _ => return Err(too_big),
        };

        if needed > self.data.capacity() {
            let mut cap = self.data.capacity().max(MIN_FIRST_ALLOC);
            while cap < needed {
                cap = cap.saturating_mul(2);
            }
            let cap = cap.min(self.max);
            self.data
                .try_reserve_exact(cap - self.data.len())
                .map_err(|_| too_big)?;
        }

        self.data.extend_from_slice(bytes);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Hands the accumulated bytes to the caller.
    pub fn into_inner(self) -> Vec<u8> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grows_geometrically() {
        let mut acc = AccumBuffer::new(1024);
        acc.push(b"a").unwrap();
        assert_eq!(acc.capacity(), 32);
        acc.push(&[b'b'; 40]).unwrap();
        assert_eq!(acc.capacity(), 64);
        acc.push(&[b'c'; 100]).unwrap();
        assert_eq!(acc.capacity(), 256);
        assert_eq!(acc.len(), 141);
    }

    #[test]
    fn capacity_clamped_to_limit() {
        let mut acc = AccumBuffer::new(100);
        acc.push(&[0u8; 70]).unwrap();
        assert_eq!(acc.capacity(), 100);
        acc.push(&[0u8; 30]).unwrap();
        assert_eq!(acc.len(), 100);
    }

    #[test]
    fn over_limit_rejected_and_unchanged() {
        let mut acc = AccumBuffer::new(10);
        acc.push(b"12345678").unwrap();
        match acc.push(b"abc") {
            Err(LoadError::CapacityExceeded { limit }) => assert_eq!(limit, 10),
            other => panic!("expected CapacityExceeded, got {:?}", other),
        }
        assert_eq!(acc.into_inner(), b"12345678");
    }

    #[test]
    fn empty_push_is_noop() {
        let mut acc = AccumBuffer::new(0);
        acc.push(b"").unwrap();
        assert!(acc.is_empty());
        assert!(acc.push(b"x").is_err());
    }
}
