//!IPv4 module

use core::net;

use crate::addr::Address;
use crate::base;

pub(crate) const BITS_LEN: u8 = net::Ipv4Addr::BITS as u8;

///IPv4 CIDR
pub type Cidr = base::Cidr<net::Ipv4Addr>;

impl base::NetworkAddress for net::Ipv4Addr {
    const BITS_LEN: u8 = BITS_LEN;

    #[inline(always)]
    fn to_address(self) -> Address {
        Address::from_ipv4(self)
    }
}
