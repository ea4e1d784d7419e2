use crate::pipeline::{Entries, Entry};
use std::collections::VecDeque;

/// Positional window over the upstream, keys preserved.
///
/// | `length`  | behaviour                                              | space |
/// |-----------|--------------------------------------------------------|-------|
/// | `0`       | empty, upstream never pulled                           | O(1)  |
/// | `-1`      | everything from `index` to the end                     | O(1)  |
/// | `n >= 1`  | at most `n` entries from `index`, then stop pulling    | O(1)  |
/// | `n < -1`  | from `index` to the end minus the last `abs(n)`        | O(abs(n)) |
///
/// The last regime runs the tail through a fixed-capacity FIFO: once the
/// buffer holds more than `abs(n)` entries the oldest one is released.
/// Whatever is still buffered when upstream ends is the trimmed tail.
pub struct Slice {
    index: usize,
    length: i64,
}

impl Slice {
    #[must_use]
    pub const fn new(index: usize, length: i64) -> Self {
        Self { index, length }
    }

    /// Whether this slice trims a tail and therefore buffers.
    #[must_use]
    pub const fn is_buffered(&self) -> bool {
        self.length < -1
    }

    pub(crate) fn apply<'a>(&'a self, input: Entries<'a>) -> Entries<'a> {
        match self.length {
            0 => Box::new(std::iter::empty()),
            -1 => Box::new(input.skip(self.index)),
            n if n > 0 => {
                let take = usize::try_from(n).unwrap_or(usize::MAX);
                Box::new(input.skip(self.index).take(take))
            }
            n => {
                let capacity = usize::try_from(n.unsigned_abs()).unwrap_or(usize::MAX);
                Box::new(TrimTail {
                    upstream: input.skip(self.index).fuse(),
                    buffer: VecDeque::new(),
                    capacity,
                })
            }
        }
    }

    pub(crate) fn describe(&self) -> String {
        match self.length {
            0 => "empty".to_string(),
            -1 => format!("from index {} to end", self.index),
            n if n > 0 => format!("{n} element(s) from index {}", self.index),
            n => format!(
                "from index {} to end, minus last {}",
                self.index,
                n.unsigned_abs()
            ),
        }
    }
}

struct TrimTail<I> {
    upstream: I,
    buffer: VecDeque<Entry>,
    capacity: usize,
}

impl<I: Iterator<Item = Entry>> Iterator for TrimTail<I> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        for entry in self.upstream.by_ref() {
            self.buffer.push_back(entry);
            if self.buffer.len() > self.capacity {
                return self.buffer.pop_front();
            }
        }
        self.buffer.clear();
        None
    }
}
