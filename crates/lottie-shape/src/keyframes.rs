use crate::errors::ShapeError;
use lottie_data::model::{BezierPath, Easing, ShapeKeyframe};
use tracing::trace;

/// Blocks sit on adjacent frames, so their easing curve never shows.
pub const ADJACENT_EASING: Easing = Easing::splat(0.5);

/// Where a new block goes in the sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Append,
    Index(usize),
}

impl InsertAt {
    /// Maps the `-1` append sentinel; any other negative index is rejected.
    pub fn from_index(index: isize, len: usize) -> Result<Self, ShapeError> {
        match index {
            -1 => Ok(InsertAt::Append),
            i if i >= 0 => Ok(InsertAt::Index(i as usize)),
            _ => Err(ShapeError::InsertOutOfRange { index, len }),
        }
    }
}

/// Adds an empty block and returns its start and end paths for filling.
///
/// The frame stamp always lands on the last block of `blocks`, also when the
/// new block is inserted before the tail; the inserted block is then left
/// unstamped.
pub fn insert_block(
    blocks: &mut Vec<ShapeKeyframe>,
    at: InsertAt,
    frame: i32,
    closed: bool,
) -> Result<(&mut BezierPath, &mut BezierPath), ShapeError> {
    let block = ShapeKeyframe {
        i: ADJACENT_EASING,
        o: ADJACENT_EASING,
        t: None,
        s: vec![BezierPath::new(closed)],
        e: vec![BezierPath::new(closed)],
    };

    let idx = match at {
        InsertAt::Append => {
            blocks.push(block);
            blocks.len() - 1
        }
        InsertAt::Index(i) if i <= blocks.len() => {
            blocks.insert(i, block);
            i
        }
        InsertAt::Index(i) => {
            return Err(ShapeError::InsertOutOfRange {
                index: i as isize,
                len: blocks.len(),
            })
        }
    };
    trace!(idx, frame, closed, "inserted shape block");

    if let Some(last) = blocks.last_mut() {
        last.t = Some(frame as f32);
    }

    let ShapeKeyframe { s, e, .. } = &mut blocks[idx];
    Ok((&mut s[0], &mut e[0]))
}
