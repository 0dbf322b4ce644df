//! Saddle-stitch imposition planning.
//!
//! A booklet printed on loose duplex sheets is a single signature: each
//! physical sheet carries two pages per side, and the sheets nest so that
//! folding the stack once down the middle yields pages in reading order.
//! The back document holds the sides printed first, the front document the
//! sides printed second; printing one on the rectos and the other on the
//! versos and folding the stack reconstructs the sequence.

use crate::types::*;

/// Arrange a padded slot sequence into back and front sheet runs.
///
/// With `N = slots.len()` (0-based indices):
/// - back sheet *k* pairs slot `2k` (left) with slot `N-1-2k` (right)
/// - front sheet *k* pairs slot `N-2-2k` (left) with slot `2k+1` (right)
///
/// for `k` in `0..N/4`. The outermost physical sheet therefore carries the
/// first and last slots on its back side and the second and second-to-last
/// on its front side, and so on inward.
///
/// The caller pads; a slot count that is not a multiple of four is an
/// internal fault, not user input, and is rejected rather than repaired.
pub fn plan(slots: &[PageSlot]) -> Result<Imposition> {
    let n = slots.len();
    if n % 4 != 0 {
        return Err(BookletError::UnpaddedPageCount(n));
    }

    let half = |slot: &PageSlot| -> Option<SheetHalf> {
        slot.source.as_ref().map(|source| SheetHalf {
            number: slot.number,
            source: source.clone(),
        })
    };

    let mut back = Vec::with_capacity(n / 4);
    let mut front = Vec::with_capacity(n / 4);
    for k in 0..n / 4 {
        back.push(Sheet {
            left: half(&slots[2 * k]),
            right: half(&slots[n - 1 - 2 * k]),
        });
        front.push(Sheet {
            left: half(&slots[n - 2 - 2 * k]),
            right: half(&slots[2 * k + 1]),
        });
    }

    Ok(Imposition { back, front })
}
