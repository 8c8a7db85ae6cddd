//! Textual forms of addresses, prefixes and ranges

use core::net;
use core::str::FromStr;

use crate::{Address, AddressRange, Cidr, Error};

const PREFIX_SEP: char = '/';
const RANGE_SEP: char = '-';

impl FromStr for Address {
    type Err = Error;

    ///Parses any IPv4 or IPv6 address, mapping IPv4 into 128-bit form
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match net::IpAddr::from_str(text.trim()) {
            Ok(addr) => Ok(addr.into()),
            Err(_) => Err(Error::invalid_address(text)),
        }
    }
}

impl FromStr for Cidr {
    type Err = Error;

    ///Parses `addr/prefix`.
    ///
    ///If `prefix` is missing, block covers single address.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        let (addr, prefix) = match text.split_once(PREFIX_SEP) {
            Some((addr, prefix)) => (addr, Some(prefix)),
            None => (text, None),
        };

        let addr = net::IpAddr::from_str(addr).map_err(|_| Error::invalid_address(text))?;
        match prefix {
            None => Ok(Cidr::new_single(addr)),
            Some(prefix) => {
                let prefix = u8::from_str(prefix).map_err(|_| Error::invalid_address(text))?;
                Cidr::new(addr, prefix).ok_or_else(|| Error::invalid_address(text))
            }
        }
    }
}

impl FromStr for AddressRange {
    type Err = Error;

    ///Parses `low-high`, or CIDR block as range of its addresses
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        match text.split_once(RANGE_SEP) {
            Some((low, high)) => {
                let low = Address::from_str(low).map_err(|_| Error::invalid_address(text))?;
                let high = Address::from_str(high).map_err(|_| Error::invalid_address(text))?;
                Ok(AddressRange::from_endpoints(low, high))
            },
            None => Cidr::from_str(text).map(AddressRange::from),
        }
    }
}
