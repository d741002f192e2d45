//! Overlap trimming
//!
//! Turns a moving block into a placed block by cutting away whatever hangs
//! past the block beneath it. A zero-width result means nothing survived.

use super::block::Block;
use crate::error::SimError;

/// Highest block in `stack` whose top does not rise above `moving`'s bottom
pub fn find_support<'a>(moving: &Block, stack: &'a [Block]) -> Option<&'a Block> {
    stack
        .iter()
        .filter(|b| b.top() <= moving.y)
        .max_by(|a, b| a.top().total_cmp(&b.top()))
}

/// Raw horizontal overlap of two blocks as `(left, right)`, width never negative
pub fn overlap_interval(a: &Block, b: &Block) -> (f32, f32) {
    let left = a.left().max(b.left());
    let right = a.right().min(b.right());
    (left, right.max(left))
}

/// Trim `moving` against its support in `stack`
///
/// Overlaps narrower than `noise_floor` are treated as no overlap. The
/// surviving block is kept inside `[0, screen_width]`.
pub fn trim(
    moving: &Block,
    stack: &[Block],
    screen_width: f32,
    noise_floor: f32,
) -> Result<Block, SimError> {
    let support = find_support(moving, stack).ok_or(SimError::NoSupportBlock {
        level: moving.level,
        bottom: moving.y,
    })?;

    let (left, right) = overlap_interval(moving, support);
    let mut width = right - left;
    if width < noise_floor {
        width = 0.0;
    }

    if width == 0.0 {
        return Ok(Block {
            width: 0.0,
            ..*moving
        });
    }

    let midpoint = (left + right) / 2.0;
    let (lo, hi) = (width / 2.0, screen_width - width / 2.0);
    let x = if lo <= hi {
        midpoint.clamp(lo, hi)
    } else {
        screen_width / 2.0
    };

    Ok(Block {
        x,
        width,
        ..*moving
    })
}
