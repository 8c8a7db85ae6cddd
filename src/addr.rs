//! 128-bit address module

use core::{fmt, net};

use crate::bits::Octets;

///Fixed width address.
///
///IPv4 addresses are stored in IPv4-mapped form (`::ffff:a.b.c.d`), so both families share the same
///ordering and arithmetic.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Address(pub(crate) Octets);

const MAPPED_PREFIX: [u8; 12] = [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff];

impl Address {
    ///Lowest possible address `::`
    pub const ZERO: Self = Self([0; 16]);
    ///Highest possible address `ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff`
    pub const MAX: Self = Self([u8::MAX; 16]);
    ///Number of bits in the address
    pub const BITS: u8 = 128;
    ///Number of leading bits occupied by the IPv4-mapped marker
    pub const IPV4_MAPPED_PREFIX_BITS: u8 = 96;

    #[inline(always)]
    ///Creates address from big-endian octets
    pub const fn from_octets(octets: Octets) -> Self {
        Self(octets)
    }

    #[inline(always)]
    ///Returns big-endian octets
    pub const fn octets(&self) -> Octets {
        self.0
    }

    #[inline(always)]
    ///Creates address from its numeric value
    pub const fn from_bits(bits: u128) -> Self {
        Self(bits.to_be_bytes())
    }

    #[inline(always)]
    ///Returns numeric value of the address
    pub const fn to_bits(&self) -> u128 {
        u128::from_be_bytes(self.0)
    }

    #[inline]
    ///Maps IPv4 address into 128-bit space
    pub const fn from_ipv4(addr: net::Ipv4Addr) -> Self {
        let [a, b, c, d] = addr.octets();
        Self([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, a, b, c, d])
    }

    #[inline]
    ///Checks whether address is IPv4-mapped, i.e. high 80 bits are zero and the next 16 are one.
    pub const fn is_ipv4_mapped(&self) -> bool {
        let mut idx = 0;
        while idx < MAPPED_PREFIX.len() {
            if self.0[idx] != MAPPED_PREFIX[idx] {
                return false;
            }
            idx += 1;
        }
        true
    }

    #[inline]
    ///Returns IPv4 address if `self` is IPv4-mapped
    pub const fn to_ipv4_mapped(&self) -> Option<net::Ipv4Addr> {
        if self.is_ipv4_mapped() {
            Some(net::Ipv4Addr::new(self.0[12], self.0[13], self.0[14], self.0[15]))
        } else {
            None
        }
    }

    #[inline]
    ///Returns address in its external form, unmapping IPv4 addresses
    pub const fn to_ip(&self) -> net::IpAddr {
        match self.to_ipv4_mapped() {
            Some(addr) => net::IpAddr::V4(addr),
            None => net::IpAddr::V6(net::Ipv6Addr::from_bits(self.to_bits())),
        }
    }
}

impl From<net::Ipv4Addr> for Address {
    #[inline(always)]
    fn from(addr: net::Ipv4Addr) -> Self {
        Self::from_ipv4(addr)
    }
}

impl From<net::Ipv6Addr> for Address {
    #[inline(always)]
    fn from(addr: net::Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<net::IpAddr> for Address {
    #[inline]
    fn from(addr: net::IpAddr) -> Self {
        match addr {
            net::IpAddr::V4(addr) => addr.into(),
            net::IpAddr::V6(addr) => addr.into(),
        }
    }
}

impl From<Address> for net::IpAddr {
    #[inline(always)]
    fn from(addr: Address) -> Self {
        addr.to_ip()
    }
}

impl fmt::Display for Address {
    #[inline(always)]
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.to_ip(), fmt)
    }
}
