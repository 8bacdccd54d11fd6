//! Subnet exclusion engine.
//!
//! Walks the binary trie of address space below a base network and yields every
//! maximal sub-network that shares no address with any exclusion.

use crate::models::{Network, MAX_LENGTH};

/// What to do with one node of the trie.
#[derive(Debug, PartialEq, Eq)]
enum Verdict {
    /// Lies inside an exclusion; nothing below it survives.
    Excluded,
    /// Holds at least one exclusion; both halves must be examined.
    Split,
    /// Disjoint from every exclusion; emitted whole.
    Keep,
}

/// The whole list is checked for a covering exclusion before any containment
/// test, so the order of `exclusions` never changes the result.
fn classify(network: &Network, exclusions: &[Network]) -> Verdict {
    if exclusions.iter().any(|x| x.contains(network)) {
        Verdict::Excluded
    } else if exclusions.iter().any(|x| network.contains(x)) {
        Verdict::Split
    } else {
        Verdict::Keep
    }
}

/// Lazy iterator over the networks left after exclusion.
///
/// Created by [`exclude`]. Results come out in ascending address order: every
/// output of a low half precedes every output of the matching high half.
#[derive(Debug, Clone)]
pub struct Exclude<'a> {
    exclusions: &'a [Network],
    pending: Vec<Network>,
}

impl Iterator for Exclude<'_> {
    type Item = Network;

    fn next(&mut self) -> Option<Network> {
        while let Some(network) = self.pending.pop() {
            match classify(&network, self.exclusions) {
                Verdict::Excluded => {
                    log::trace!("drop {network}");
                }
                Verdict::Split => {
                    // A /32 holding an exclusion is that exclusion, so it was dropped above.
                    if let Some((lo, hi)) = network.split() {
                        log::trace!("split {network} -> {lo} + {hi}");
                        self.pending.push(hi);
                        self.pending.push(lo);
                    }
                }
                Verdict::Keep => {
                    log::trace!("keep {network}");
                    return Some(network);
                }
            }
        }
        None
    }
}

/// Subtract `exclusions` from `network`.
///
/// Exclusions that do not touch `network` are ignored, and overlapping
/// exclusions are fine. The pending stack never holds more than one entry per
/// prefix length below `network`, plus one.
///
/// # Examples
/// ```
/// use net_exclude::models::Network;
/// use net_exclude::processing::exclude;
///
/// let base: Network = "10.0.0.0/24".parse().unwrap();
/// let hole: Network = "10.0.0.128/25".parse().unwrap();
/// let left: Vec<String> = exclude(base, &[hole]).map(|n| n.to_string()).collect();
/// assert_eq!(left, vec!["10.0.0.0/25"]);
/// ```
pub fn exclude(network: Network, exclusions: &[Network]) -> Exclude<'_> {
    let mut pending = Vec::with_capacity(usize::from(MAX_LENGTH - network.prefix_len()) + 1);
    pending.push(network);
    Exclude {
        exclusions,
        pending,
    }
}

/// Collect [`exclude`] into a vector.
pub fn exclude_all(network: Network, exclusions: &[Network]) -> Vec<Network> {
    let result: Vec<Network> = exclude(network, exclusions).collect();
    log::debug!(
        "{network} minus {} exclusion(s) leaves {} network(s)",
        exclusions.len(),
        result.len()
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn net(s: &str) -> Network {
        s.parse().unwrap()
    }

    fn nets(list: &[&str]) -> Vec<Network> {
        list.iter().map(|s| net(s)).collect()
    }

    #[test]
    fn test_classify() {
        let base = net("10.0.0.0/24");
        assert_eq!(classify(&base, &nets(&["10.0.0.0/24"])), Verdict::Excluded);
        assert_eq!(classify(&base, &nets(&["10.0.0.0/16"])), Verdict::Excluded);
        assert_eq!(classify(&base, &nets(&["10.0.0.5/32"])), Verdict::Split);
        assert_eq!(classify(&base, &nets(&["10.0.1.0/24"])), Verdict::Keep);
        assert_eq!(classify(&base, &[]), Verdict::Keep);
    }

    #[test]
    fn test_classify_checks_cover_before_split() {
        let n = net("10.0.0.0/30");
        // the contained host is listed first but the equal network wins
        let exclusions = nets(&["10.0.0.1/32", "10.0.0.0/30"]);
        assert_eq!(classify(&n, &exclusions), Verdict::Excluded);
    }

    #[test]
    fn test_exclude_upper_half() {
        let result = exclude_all(net("10.0.0.0/24"), &nets(&["10.0.0.128/25"]));
        assert_eq!(result, nets(&["10.0.0.0/25"]));
    }

    #[test]
    fn test_exclude_single_host() {
        let result = exclude_all(net("10.0.0.0/24"), &nets(&["10.0.0.5/32"]));
        assert_eq!(
            result,
            nets(&[
                "10.0.0.0/30",
                "10.0.0.4/32",
                "10.0.0.6/31",
                "10.0.0.8/29",
                "10.0.0.16/28",
                "10.0.0.32/27",
                "10.0.0.64/26",
                "10.0.0.128/25",
            ])
        );
    }

    #[test]
    fn test_exclude_nothing() {
        let base = net("192.168.0.0/16");
        assert_eq!(exclude_all(base, &[]), vec![base]);
        assert_eq!(exclude_all(base, &nets(&["10.0.0.0/8"])), vec![base]);
    }

    #[test]
    fn test_exclude_self() {
        let base = net("10.0.0.0/24");
        assert!(exclude_all(base, &[base]).is_empty());
        assert!(exclude_all(base, &nets(&["0.0.0.0/0"])).is_empty());
    }

    #[test]
    fn test_exclude_overlapping_exclusions() {
        let base = net("10.0.0.0/24");
        let expected = nets(&[
            "10.0.0.4/30",
            "10.0.0.8/29",
            "10.0.0.16/28",
            "10.0.0.32/27",
            "10.0.0.64/26",
            "10.0.0.128/25",
        ]);
        let a = exclude_all(base, &nets(&["10.0.0.1/32", "10.0.0.0/30"]));
        let b = exclude_all(base, &nets(&["10.0.0.0/30", "10.0.0.1/32"]));
        assert_eq!(a, expected);
        assert_eq!(b, expected);
    }

    #[test]
    fn test_exclude_both_ends() {
        let result = exclude_all(
            net("10.0.0.0/29"),
            &nets(&["10.0.0.0/32", "10.0.0.7/32"]),
        );
        assert_eq!(
            result,
            nets(&["10.0.0.1/32", "10.0.0.2/31", "10.0.0.4/31", "10.0.0.6/32"])
        );
    }

    #[test]
    fn test_exclude_is_lazy() {
        let base = net("0.0.0.0/0");
        let exclusions = nets(&["255.255.255.255/32"]);
        let mut iter = exclude(base, &exclusions);
        assert_eq!(iter.next(), Some(net("0.0.0.0/1")));
        assert_eq!(iter.next(), Some(net("128.0.0.0/2")));
        assert_eq!(iter.count(), 30);
    }

    #[test]
    fn test_exclude_host_base() {
        let host = net("10.0.0.1/32");
        assert_eq!(exclude_all(host, &nets(&["10.0.0.2/32"])), vec![host]);
        assert!(exclude_all(host, &[host]).is_empty());
    }
}
