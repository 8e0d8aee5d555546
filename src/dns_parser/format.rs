//! Text forms of the addresses carried by A and AAAA records

use byteorder::{BigEndian, ByteOrder};

/// Dotted-decimal form of an IPv4 address
pub fn format_ipv4(octets: &[u8; 4]) -> String {
    format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
}

/// Shortened colon-hex form of an IPv6 address
///
/// The longest run of two or more all-zero groups (the first one on a tie)
/// becomes `::`, and leading zeros are dropped from every other group.
pub fn format_ipv6(octets: &[u8; 16]) -> String {
    let mut groups = [0u16; 8];
    for (i, group) in groups.iter_mut().enumerate() {
        *group = BigEndian::read_u16(&octets[i * 2..i * 2 + 2]);
    }

    let mut longest: Option<(usize, usize)> = None;
    let mut i = 0;
    while i < groups.len() {
        if groups[i] != 0 {
            i += 1;
            continue;
        }
        let start = i;
        while i < groups.len() && groups[i] == 0 {
            i += 1;
        }
        let len = i - start;
        if len >= 2 && longest.map_or(true, |(_, best)| len > best) {
            longest = Some((start, len));
        }
    }

    match longest {
        Some((start, len)) => format!(
            "{}::{}",
            join_groups(&groups[..start]),
            join_groups(&groups[start + len..])
        ),
        None => join_groups(&groups),
    }
}

fn join_groups(groups: &[u16]) -> String {
    groups
        .iter()
        .map(|group| format!("{:x}", group))
        .collect::<Vec<_>>()
        .join(":")
}
