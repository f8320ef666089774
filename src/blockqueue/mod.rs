//! Provides a queue of tile indices for the worker threads of the
//! parallel image tracer. The queue itself is not changed after
//! creation, we simply work through it with an atomic counter to
//! track the index of the next tile to work on.
//!
//! Tiles are handed out in Morton order, so consecutive tiles are
//! close to each other on the image.

use std::sync::atomic::{AtomicUsize, Ordering};

/// The queue of tiles to be worked on shared immutably between worker threads.
pub struct BlockQueue {
    /// The tile coordinates of tiles to work on for the image
    blocks: Vec<(u32, u32)>,
    /// Number of tiles along x and y
    num_blocks: (u32, u32),
    /// Index of the next tile to be worked on
    next: AtomicUsize,
}

impl BlockQueue {
    /// Create a tile queue covering an image of `img` pixels with tiles
    /// of `dim` pixels. Border tiles may stick out of the image.
    pub fn new(img: (u32, u32), dim: (u32, u32)) -> BlockQueue {
        assert!(dim.0 > 0 && dim.1 > 0, "empty tiles {:?}", dim);
        let num_blocks = ((img.0 + dim.0 - 1) / dim.0, (img.1 + dim.1 - 1) / dim.1);
        let mut blocks: Vec<(u32, u32)> = (0..num_blocks.0 * num_blocks.1)
            .map(|i| (i % num_blocks.0, i / num_blocks.0))
            .collect();
        blocks.sort_by(|a, b| morton2(*a).cmp(&morton2(*b)));
        BlockQueue {
            blocks,
            num_blocks,
            next: AtomicUsize::new(0),
        }
    }
    /// Row-major index of a tile, independent of the order in which
    /// tiles are handed out.
    pub fn block_index(&self, block: (u32, u32)) -> u64 {
        block.1 as u64 * self.num_blocks.0 as u64 + block.0 as u64
    }
    /// Get an iterator to work through the queue
    pub fn iter(&self) -> BlockQueueIterator<'_> {
        BlockQueueIterator { queue: self }
    }
    /// Get the next tile in the queue or None if the queue is finished
    pub fn next(&self) -> Option<(u32, u32)> {
        let i = self.next.fetch_add(1, Ordering::AcqRel);
        if i >= self.blocks.len() {
            None
        } else {
            Some(self.blocks[i])
        }
    }
    /// Get the length of the queue
    pub fn len(&self) -> usize {
        self.blocks.len()
    }
}

/// Iterator to work through the queue safely
pub struct BlockQueueIterator<'a> {
    queue: &'a BlockQueue,
}

impl<'a> Iterator for BlockQueueIterator<'a> {
    type Item = (u32, u32);
    fn next(&mut self) -> Option<(u32, u32)> {
        self.queue.next()
    }
}

/// Insert a 0 bit between each of the low 16 bits of x
fn part1_by1(mut x: u32) -> u32 {
    // x = ---- ---- ---- ---- fedc ba98 7654 3210
    x &= 0x0000_ffff;
    // x = ---- ---- fedc ba98 ---- ---- 7654 3210
    x = (x ^ (x << 8)) & 0x00ff_00ff;
    // x = ---- fedc ---- ba98 ---- 7654 ---- 3210
    x = (x ^ (x << 4)) & 0x0f0f_0f0f;
    // x = --fe --dc --ba --98 --76 --54 --32 --10
    x = (x ^ (x << 2)) & 0x3333_3333;
    // x = -f-e -d-c -b-a -9-8 -7-6 -5-4 -3-2 -1-0
    (x ^ (x << 1)) & 0x5555_5555
}

/// Compute the Morton code for the `(x, y)` position.
fn morton2(p: (u32, u32)) -> u32 {
    (part1_by1(p.1) << 1) + part1_by1(p.0)
}
