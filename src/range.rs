//! Address range module

use core::fmt;

use crate::addr::Address;
use crate::bits;
use crate::deaggregate::Deaggregate;

///Closed interval of addresses `[low, high]`.
///
///Algorithms normalize ranges before use, so endpoints may be supplied in either order.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    ///First address within range
    pub low: Address,
    ///Last address within range
    pub high: Address,
}

impl AddressRange {
    #[inline]
    ///Creates range from two endpoints in arbitrary order
    pub const fn from_endpoints(a: Address, b: Address) -> Self {
        let mut range = Self {
            low: a,
            high: b,
        };
        range.normalize();
        range
    }

    #[inline(always)]
    ///Creates range containing only `addr`
    pub const fn single(addr: Address) -> Self {
        Self {
            low: addr,
            high: addr,
        }
    }

    ///Creates range covered by CIDR block `base/length` within address space of `address_bits`.
    ///
    ///Low `address_bits - length` bits of `base` are cleared to produce `low` and set to produce `high`.
    pub const fn from_prefix(base: Address, length: u8, address_bits: u8) -> Self {
        debug_assert!(length <= address_bits);
        debug_assert!(address_bits <= Address::BITS);

        let host_bits = address_bits.saturating_sub(length) as u32;
        let mut low = base.0;
        let mut high = base.0;
        let mut idx = 0;
        while idx < host_bits {
            bits::set_bit(&mut low, idx, false);
            bits::set_bit(&mut high, idx, true);
            idx += 1;
        }

        Self {
            low: Address(low),
            high: Address(high),
        }
    }

    #[inline]
    ///Swaps endpoints if `low` is greater than `high`
    pub const fn normalize(&mut self) {
        if bits::cmp(&self.low.0, &self.high.0).is_gt() {
            let low = self.high;
            self.high = self.low;
            self.low = low;
        }
    }

    #[inline]
    ///Checks whether `low <= high`
    pub const fn is_normalized(&self) -> bool {
        !bits::cmp(&self.low.0, &self.high.0).is_gt()
    }

    #[inline]
    ///Checks if `addr` lies within range
    pub const fn contains(&self, addr: Address) -> bool {
        !bits::cmp(&addr.0, &self.low.0).is_lt() && !bits::cmp(&addr.0, &self.high.0).is_gt()
    }

    #[inline]
    ///Returns minimal sequence of CIDR blocks covering exactly this range, ascending by address
    pub const fn deaggregate(mut self) -> Deaggregate {
        self.normalize();
        Deaggregate::new(self)
    }
}

impl From<crate::Cidr> for AddressRange {
    #[inline(always)]
    fn from(cidr: crate::Cidr) -> Self {
        cidr.range()
    }
}

impl fmt::Display for AddressRange {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { low, high } = self;
        fmt.write_fmt(format_args!("{low}-{high}"))
    }
}
