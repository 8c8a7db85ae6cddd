//! Conversion between IP address ranges and minimal CIDR prefix lists
//!
//! All addresses are handled as 128-bit [Address](addr/struct.Address.html) values with IPv4
//! stored in IPv4-mapped form, so that the same algorithms serve both families.
//!
//! - [AddressRange::deaggregate](range/struct.AddressRange.html#method.deaggregate) splits single
//!   range into minimal list of CIDR blocks.
//! - [aggregate](aggregate/fn.aggregate.html) merges arbitrary collection of ranges and then splits
//!   merged result into CIDR blocks.
//!
//! ```
//! use range_cidr::{AddressRange, Cidr};
//!
//! let range: AddressRange = "23.128.1.0-23.128.7.255".parse().expect("valid range");
//! let blocks: Vec<Cidr> = range.deaggregate().collect();
//! assert_eq!(blocks.len(), 3);
//! assert_eq!(blocks[0].to_string(), "23.128.1.0/24");
//! ```

#![no_std]
#![warn(missing_docs)]
#![allow(clippy::style)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod addr;
pub mod aggregate;
pub mod base;
pub mod bits;
pub mod deaggregate;
mod error;
pub mod range;
mod text;
pub mod v4;
pub mod v6;
#[cfg(feature = "std")]
pub mod batch;

pub use addr::Address;
pub use aggregate::{aggregate, merge};
pub use error::Error;
pub use range::AddressRange;

use core::{fmt, net};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
///CIDR representation
pub enum Cidr {
    ///IPv4 block
    V4(v4::Cidr),
    ///IPv6 block
    V6(v6::Cidr),
}

impl Cidr {
    ///Number of bits within ipv4 address
    pub const IPV4_BITS: u8 = v4::BITS_LEN;
    ///Number of bits within ipv6 address
    pub const IPV6_BITS: u8 = v6::BITS_LEN;

    #[inline(always)]
    ///Constructs new CIDR verifying that `prefix` fits provided `addrs`
    ///
    ///Returns `None` if `prefix` is greater than address length
    pub const fn new(addr: net::IpAddr, prefix: u8) -> Option<Self> {
        match addr {
            net::IpAddr::V4(addr) => Self::new_v4(addr, prefix),
            net::IpAddr::V6(addr) => Self::new_v6(addr, prefix),
        }
    }

    #[inline]
    ///Constructs new CIDR verifying that `prefix` fits provided `addrs`
    ///
    ///Returns `None` if `prefix` is greater than address length
    pub const fn new_v4(addr: net::Ipv4Addr, prefix: u8) -> Option<Self> {
        match v4::Cidr::new(addr, prefix) {
            Some(cidr) => Some(Self::V4(cidr)),
            None => None,
        }
    }

    #[inline]
    ///Constructs new CIDR verifying that `prefix` fits provided `addrs`
    ///
    ///Returns `None` if `prefix` is greater than address length
    pub const fn new_v6(addr: net::Ipv6Addr, prefix: u8) -> Option<Self> {
        match v6::Cidr::new(addr, prefix) {
            Some(cidr) => Some(Self::V6(cidr)),
            None => None,
        }
    }

    #[inline]
    ///Constructs CIDR covering single address
    pub const fn new_single(addr: net::IpAddr) -> Self {
        match addr {
            net::IpAddr::V4(addr) => Self::V4(v4::Cidr::new_single(addr)),
            net::IpAddr::V6(addr) => Self::V6(v6::Cidr::new_single(addr)),
        }
    }

    ///Renders block `base/length` of 128-bit address space in its external form.
    ///
    ///Block is IPv4 when `base` is IPv4-mapped and the block does not reach outside of mapped space.
    pub fn from_block(base: Address, length: u8) -> Self {
        debug_assert!(length <= Address::BITS);

        match base.to_ipv4_mapped() {
            Some(addr) if length >= Address::IPV4_MAPPED_PREFIX_BITS => {
                Self::V4(v4::Cidr::new_single(addr).with_prefix(length - Address::IPV4_MAPPED_PREFIX_BITS))
            },
            _ => {
                let addr = net::Ipv6Addr::from_bits(base.to_bits());
                Self::V6(v6::Cidr::new_single(addr).with_prefix(length.min(Address::BITS)))
            }
        }
    }

    #[inline(always)]
    ///Returns address
    pub const fn addr(&self) -> net::IpAddr {
        match self {
            Self::V4(cidr) => net::IpAddr::V4(cidr.addr()),
            Self::V6(cidr) => net::IpAddr::V6(cidr.addr()),
        }
    }

    #[inline(always)]
    ///Returns prefix
    pub const fn prefix(&self) -> u8 {
        match self {
            Self::V4(cidr) => cidr.prefix(),
            Self::V6(cidr) => cidr.prefix(),
        }
    }

    #[inline(always)]
    ///Returns number of bits within address of the block's family
    pub const fn address_bits(&self) -> u8 {
        match self {
            Self::V4(_) => Self::IPV4_BITS,
            Self::V6(_) => Self::IPV6_BITS,
        }
    }

    #[inline]
    ///Returns range of addresses covered by the block, ignoring host bits of the address
    pub fn range(&self) -> AddressRange {
        match self {
            Self::V4(cidr) => cidr.range(),
            Self::V6(cidr) => cidr.range(),
        }
    }

    #[inline]
    ///Checks that no host bits are set within address
    pub fn is_aligned(&self) -> bool {
        match self {
            Self::V4(cidr) => cidr.is_aligned(),
            Self::V6(cidr) => cidr.is_aligned(),
        }
    }

    #[inline]
    ///Checks if a given `addr` is contained within `self`
    pub fn contains(&self, addr: net::IpAddr) -> bool {
        self.range().contains(Address::from(addr))
    }
}

impl fmt::Display for Cidr {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V4(cidr) => fmt::Display::fmt(cidr, fmt),
            Self::V6(cidr) => fmt::Display::fmt(cidr, fmt),
        }
    }
}
