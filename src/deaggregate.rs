//! Range to CIDR conversion

use core::iter::FusedIterator;

use crate::bits::{self, Octets};
use crate::range::AddressRange;
use crate::Cidr;

///Iterator over minimal CIDR blocks covering single range.
///
///Blocks are produced ascending by address, each one the largest block that is aligned at the
///current low bound and does not extend past the high bound.
///
///Created by [AddressRange::deaggregate](../range/struct.AddressRange.html#method.deaggregate).
#[derive(Clone, Debug)]
pub struct Deaggregate {
    low: Octets,
    high: Octets,
    is_done: bool,
}

impl Deaggregate {
    #[inline(always)]
    pub(crate) const fn new(range: AddressRange) -> Self {
        Self {
            low: range.low.0,
            high: range.high.0,
            is_done: !range.is_normalized(),
        }
    }
}

impl Iterator for Deaggregate {
    type Item = Cidr;

    fn next(&mut self) -> Option<Self::Item> {
        if self.is_done {
            return None;
        }

        let base = self.low;
        let mut step = 0;
        //base | mask of `step + 1` low bits; base's low bits are already zero
        let mut block_end = base;
        while step < bits::WIDTH && !bits::get_bit(&base, step) {
            bits::set_bit(&mut block_end, step, true);
            if bits::cmp(&block_end, &self.high).is_gt() {
                break;
            }
            step += 1;
        }

        let length = (bits::WIDTH - step) as u8;
        let block = Cidr::from_block(crate::Address(base), length);
        tracing::trace!(%block, "emit block");

        if step == bits::WIDTH {
            self.is_done = true;
            return Some(block);
        }

        let mut stride = [0; 16];
        bits::set_bit(&mut stride, step, true);
        match bits::add(&base, &stride) {
            //Block ended at the top of address space
            (_, true) => self.is_done = true,
            (next, false) if bits::cmp(&next, &self.high).is_gt() => self.is_done = true,
            (next, false) => self.low = next,
        }

        Some(block)
    }
}

impl FusedIterator for Deaggregate {}
