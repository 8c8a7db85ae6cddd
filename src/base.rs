//! Base module

use core::fmt;

use crate::addr::Address;
use crate::range::AddressRange;

///Network address trait
pub trait NetworkAddress: Clone + Copy + fmt::Debug + fmt::Display + PartialEq + Eq + PartialOrd + Ord {
    ///Max possible length of the address in bits
    const BITS_LEN: u8;

    ///Converts address into its 128-bit form
    fn to_address(self) -> Address;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///CIDR representation of network within single address family
///
///Ordering is by address first, then by prefix.
pub struct Cidr<A> {
    addr: A,
    prefix: u8,
}

impl<A: NetworkAddress> Cidr<A> {
    #[inline]
    ///Constructs new CIDR verifying that `prefix` fits provided `addrs`
    ///
    ///Returns `None` if `prefix` is greater than address length
    pub const fn new(addr: A, prefix: u8) -> Option<Self> {
        if prefix > A::BITS_LEN {
            None
        } else {
            Some(Self {
                addr,
                prefix,
            })
        }
    }

    #[inline(always)]
    ///Constructs CIDR covering only `addr`
    pub const fn new_single(addr: A) -> Self {
        Self {
            addr,
            prefix: A::BITS_LEN,
        }
    }

    #[inline(always)]
    pub(crate) const fn with_prefix(self, prefix: u8) -> Self {
        debug_assert!(prefix <= A::BITS_LEN);
        Self {
            addr: self.addr,
            prefix,
        }
    }

    #[inline(always)]
    ///Returns address
    pub const fn addr(&self) -> A {
        self.addr
    }

    #[inline(always)]
    ///Returns prefix
    pub const fn prefix(&self) -> u8 {
        self.prefix
    }

    #[inline]
    ///Returns range of addresses covered by the block.
    ///
    ///Host bits of the address are ignored.
    pub fn range(&self) -> AddressRange {
        AddressRange::from_prefix(self.addr.to_address(), self.prefix, A::BITS_LEN)
    }

    #[inline]
    ///Checks that no host bits are set within address
    pub fn is_aligned(&self) -> bool {
        self.range().low == self.addr.to_address()
    }
}

impl<A: NetworkAddress> fmt::Display for Cidr<A> {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { addr, prefix } = self;
        fmt.write_fmt(format_args!("{addr}/{prefix}"))
    }
}
