//! Circularly padded slide sequence.
//!
//! Layout for N real records: `[ghost(N-1), 0, 1, .., N-1, ghost(0)]`, so the
//! extended sequence has N + 2 slots. Position `p` in `1..=N` shows real record
//! `p - 1`; positions 0 and N + 1 are clones used to make wrap-around motion
//! visually continuous.

use serde::Serialize;

use crate::content::{ContentRecord, ContentSet};

/// Map an extended position to the real record it displays.
///
/// `real_len` is N. Positions past N + 1 are clamped onto the trailing ghost.
#[inline]
pub fn real_index_for(position: usize, real_len: usize) -> usize {
    if position == 0 {
        real_len - 1
    } else if position > real_len {
        0
    } else {
        position - 1
    }
}

#[inline]
pub fn is_ghost(position: usize, real_len: usize) -> bool {
    position == 0 || position == real_len + 1
}

/// One slot of the extended sequence as handed to the surface.
#[derive(Clone, Debug, Serialize)]
pub struct Slide<'a> {
    pub position: usize,
    pub real_index: usize,
    pub ghost: bool,
    pub record: &'a ContentRecord,
}

/// Extended sequence derived once from a [`ContentSet`].
#[derive(Clone, Debug)]
pub struct ExtendedSequence {
    content: ContentSet,
}

impl ExtendedSequence {
    pub fn new(content: ContentSet) -> Self {
        Self { content }
    }

    /// Number of real slides (N).
    #[inline]
    pub fn real_len(&self) -> usize {
        self.content.len()
    }

    /// Number of slots including both ghosts (N + 2).
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len() + 2
    }

    /// Never empty: even a single record yields three slots.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn content(&self) -> &ContentSet {
        &self.content
    }

    pub fn get(&self, position: usize) -> Option<Slide<'_>> {
        if position >= self.len() {
            return None;
        }
        let real_index = real_index_for(position, self.real_len());
        let record = self.content.get(real_index)?;
        Some(Slide {
            position,
            real_index,
            ghost: is_ghost(position, self.real_len()),
            record,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = Slide<'_>> {
        (0..self.len()).filter_map(move |p| self.get(p))
    }
}
