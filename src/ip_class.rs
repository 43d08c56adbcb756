use std::fmt;

/// Address family recognised by [`classify_ip_address`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IpKind {
    V4,
    V6,
    Neither,
}

impl fmt::Display for IpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            IpKind::V4 => "IPv4",
            IpKind::V6 => "IPv6",
            IpKind::Neither => "Neither",
        };
        f.write_str(name)
    }
}

/// Classifies `s` as a dotted-quad IPv4 address, a full eight-group IPv6
/// address, or neither.
///
/// IPv4 parts are decimal in `0..=255` with no leading zeros. IPv6 groups are
/// one to four hex digits of either case; the `::` shorthand is not accepted.
///
/// ```
/// use windowing_rs::{classify_ip_address, IpKind};
///
/// assert_eq!(classify_ip_address("172.16.254.1"), IpKind::V4);
/// assert_eq!(classify_ip_address("2001:0db8:85a3:0:0:8A2E:0370:7334"), IpKind::V6);
/// assert_eq!(classify_ip_address("256.256.256.256"), IpKind::Neither);
/// ```
pub fn classify_ip_address(s: &str) -> IpKind {
    if s.contains('.') {
        if is_ipv4(s) {
            IpKind::V4
        } else {
            IpKind::Neither
        }
    } else if s.contains(':') {
        if is_ipv6(s) {
            IpKind::V6
        } else {
            IpKind::Neither
        }
    } else {
        IpKind::Neither
    }
}

fn is_ipv4(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    parts.len() == 4 && parts.iter().all(|part| is_ipv4_part(part))
}

fn is_ipv4_part(part: &str) -> bool {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    if part.len() > 1 && part.starts_with('0') {
        return false;
    }
    // At most three digits after the leading-zero check, so this cannot overflow.
    part.len() <= 3 && part.parse::<u16>().map_or(false, |n| n <= 255)
}

fn is_ipv6(s: &str) -> bool {
    let groups: Vec<&str> = s.split(':').collect();
    groups.len() == 8
        && groups
            .iter()
            .all(|group| (1..=4).contains(&group.len()) && group.bytes().all(|b| b.is_ascii_hexdigit()))
}
