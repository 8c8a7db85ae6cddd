use core::net;

use range_cidr::{Address, AddressRange, Cidr, Error};

fn deaggregate(low: &str, high: &str) -> Vec<String> {
    let low: Address = low.parse().expect("valid low address");
    let high: Address = high.parse().expect("valid high address");
    AddressRange::from_endpoints(low, high).deaggregate().map(|cidr| cidr.to_string()).collect()
}

#[test]
fn should_split_range_into_growing_blocks() {
    let inputs = [
        ("23.128.1.0", "23.128.7.255", &["23.128.1.0/24", "23.128.2.0/23", "23.128.4.0/22"][..]),
        ("61.32.0.0", "61.43.255.255", &["61.32.0.0/13", "61.40.0.0/14"][..]),
        ("61.43.255.255", "61.32.0.0", &["61.32.0.0/13", "61.40.0.0/14"][..]),
        ("0.0.0.0", "0.0.0.0", &["0.0.0.0/32"][..]),
        ("61.32.0.0", "61.32.0.1", &["61.32.0.0/31"][..]),
        ("0.0.0.254", "0.0.1.0", &["0.0.0.254/31", "0.0.1.0/32"][..]),
        ("0.0.0.1", "0.0.0.2", &["0.0.0.1/32", "0.0.0.2/32"][..]),
        ("10.0.0.0", "10.255.255.255", &["10.0.0.0/8"][..]),
        ("255.255.255.255", "255.255.255.255", &["255.255.255.255/32"][..]),
    ];

    for (low, high, expected) in inputs {
        println!("Deaggregate {low} - {high}");
        assert_eq!(deaggregate(low, high), expected, "range {low} - {high}");
    }
}

#[test]
fn should_cover_whole_ipv4_space_with_single_block() {
    let blocks: Vec<Cidr> = AddressRange::from_endpoints(
        net::Ipv4Addr::UNSPECIFIED.into(),
        net::Ipv4Addr::BROADCAST.into(),
    ).deaggregate().collect();

    assert_eq!(blocks, [Cidr::new_v4(net::Ipv4Addr::UNSPECIFIED, 0).expect("to create")]);
    assert_eq!(blocks[0].to_string(), "0.0.0.0/0");
    assert_eq!(blocks[0].address_bits(), Cidr::IPV4_BITS);
}

#[cfg_attr(miri, ignore)]
#[test]
fn should_split_almost_full_ipv4_space() {
    let blocks = deaggregate("0.0.0.1", "255.255.255.254");
    let expected = [
        "0.0.0.1/32", "0.0.0.2/31", "0.0.0.4/30", "0.0.0.8/29",
        "0.0.0.16/28", "0.0.0.32/27", "0.0.0.64/26", "0.0.0.128/25",
        "0.0.1.0/24", "0.0.2.0/23", "0.0.4.0/22", "0.0.8.0/21",
        "0.0.16.0/20", "0.0.32.0/19", "0.0.64.0/18", "0.0.128.0/17",
        "0.1.0.0/16", "0.2.0.0/15", "0.4.0.0/14", "0.8.0.0/13",
        "0.16.0.0/12", "0.32.0.0/11", "0.64.0.0/10", "0.128.0.0/9",
        "1.0.0.0/8", "2.0.0.0/7", "4.0.0.0/6", "8.0.0.0/5",
        "16.0.0.0/4", "32.0.0.0/3", "64.0.0.0/2", "128.0.0.0/2",
        "192.0.0.0/3", "224.0.0.0/4", "240.0.0.0/5", "248.0.0.0/6",
        "252.0.0.0/7", "254.0.0.0/8", "255.0.0.0/9", "255.128.0.0/10",
        "255.192.0.0/11", "255.224.0.0/12", "255.240.0.0/13", "255.248.0.0/14",
        "255.252.0.0/15", "255.254.0.0/16", "255.255.0.0/17", "255.255.128.0/18",
        "255.255.192.0/19", "255.255.224.0/20", "255.255.240.0/21", "255.255.248.0/22",
        "255.255.252.0/23", "255.255.254.0/24", "255.255.255.0/25", "255.255.255.128/26",
        "255.255.255.192/27", "255.255.255.224/28", "255.255.255.240/29", "255.255.255.248/30",
        "255.255.255.252/31", "255.255.255.254/32",
    ];

    assert_eq!(blocks.len(), 62);
    assert_eq!(blocks, expected);
}

#[test]
fn should_round_trip_prefix() {
    let inputs = ["0.0.0.0/0", "10.0.0.0/8", "192.168.1.0/24", "172.16.0.0/12", "203.0.113.7/32", "128.0.0.0/1"];

    for text in inputs {
        let cidr: Cidr = text.parse().expect("valid prefix");
        let blocks: Vec<Cidr> = cidr.range().deaggregate().collect();
        assert_eq!(blocks, [cidr], "prefix {text}");
    }
}

#[test]
fn should_mask_host_bits_of_prefix() {
    let cidr: Cidr = "172.16.5.10/20".parse().expect("valid prefix");
    assert!(!cidr.is_aligned());

    let range = cidr.range();
    assert_eq!(range.low, Address::from(net::Ipv4Addr::new(172, 16, 0, 0)));
    assert_eq!(range.high, Address::from(net::Ipv4Addr::new(172, 16, 15, 255)));

    let blocks: Vec<String> = range.deaggregate().map(|cidr| cidr.to_string()).collect();
    assert_eq!(blocks, ["172.16.0.0/20"]);
}

#[test]
fn should_map_ipv4_into_128_bits() {
    let addr = Address::from(net::Ipv4Addr::new(192, 168, 1, 0));
    assert!(addr.is_ipv4_mapped());
    assert_eq!(addr.to_bits(), 0xffff_c0a8_0100);
    assert_eq!(addr.octets(), [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 192, 168, 1, 0]);
    assert_eq!(Address::from_octets(addr.octets()), addr);
    assert_eq!(addr.to_ip(), net::IpAddr::V4(net::Ipv4Addr::new(192, 168, 1, 0)));
    assert_eq!(addr.to_string(), "192.168.1.0");

    let mapped: Address = "::ffff:192.168.1.0".parse().expect("valid address");
    assert_eq!(mapped, addr);
}

#[test]
fn should_parse_ranges() {
    let inputs = [
        ("10.0.0.0-10.0.0.255", "10.0.0.0", "10.0.0.255"),
        ("10.0.0.255 - 10.0.0.0", "10.0.0.0", "10.0.0.255"),
        ("10.0.0.0/25", "10.0.0.0", "10.0.0.127"),
        ("10.0.0.7", "10.0.0.7", "10.0.0.7"),
    ];

    for (text, low, high) in inputs {
        println!("Parse '{text}'");
        let range: AddressRange = text.parse().expect("valid range");
        assert_eq!(range.low, low.parse::<Address>().expect("valid address"));
        assert_eq!(range.high, high.parse::<Address>().expect("valid address"));
    }
}

#[test]
fn should_not_parse_invalid_input() {
    let inputs = [
        "",
        "10.0.0",
        "256.0.0.1",
        "10.0.0.0/33",
        "10.0.0.0/",
        "10.0.0.0/x",
        "10.0.0.0-",
        "-10.0.0.0",
        "10.0.0.0-10.0.0.0.1",
    ];

    for text in inputs {
        println!("Parse '{text}'");
        let error = text.parse::<AddressRange>().expect_err("should fail");
        assert_eq!(error, Error::InvalidAddress(text.to_owned()));
        assert_eq!(error.to_string(), format!("invalid address: '{text}'"));
    }
}
