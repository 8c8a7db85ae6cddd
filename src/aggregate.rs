//! Range aggregation
//!
//! Merging reorders and compacts the caller's collection in place: after the call the vector holds
//! the merged ranges, ascending by address, and nothing of its original order or length.

use alloc::vec::Vec;

use crate::bits::{self, Octets};
use crate::range::AddressRange;
use crate::Cidr;

const ONE: Octets = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1];

///Checks whether `next` overlaps or is adjacent to `current`, given `next.low >= current.low`.
fn is_mergeable(current: &AddressRange, next: &AddressRange) -> bool {
    match bits::add(&current.high.0, &ONE) {
        //`current` reaches the top of address space, so anything sorted after it is already covered
        (_, true) => true,
        (successor, false) => !bits::cmp(&next.low.0, &successor).is_gt(),
    }
}

///Merges overlapping, contained and adjacent ranges.
///
///On return `ranges` is the minimal set of disjoint, non-adjacent ranges with the same union as
///input, sorted ascending by address.
pub fn merge(ranges: &mut Vec<AddressRange>) {
    let input_len = ranges.len();
    ranges.iter_mut().for_each(AddressRange::normalize);
    if input_len < 2 {
        return;
    }

    ranges.sort_by(|left, right| bits::cmp(&left.low.0, &right.low.0));

    let mut top = 0;
    for idx in 1..ranges.len() {
        let next = ranges[idx];
        let current = &mut ranges[top];
        if is_mergeable(current, &next) {
            if bits::cmp(&next.high.0, &current.high.0).is_gt() {
                current.high = next.high;
            }
            continue;
        }

        top += 1;
        ranges[top] = next;
    }
    ranges.truncate(top + 1);

    tracing::debug!(input = input_len, merged = ranges.len(), "merged address ranges");
}

///Merges `ranges` and splits result into minimal list of CIDR blocks, ascending by address.
///
///`ranges` is left holding the merged ranges, see [merge](fn.merge.html).
pub fn aggregate(ranges: &mut Vec<AddressRange>) -> Vec<Cidr> {
    merge(ranges);
    ranges.iter().flat_map(|range| range.deaggregate()).collect()
}
