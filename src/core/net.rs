//! Tablet address validation.

use std::net::IpAddr;

/// Whether `s` is a valid IPv4 or IPv6 literal.
///
/// The tablet is reached by raw IP (USB interface default `10.11.99.1`),
/// so hostnames are not accepted here.
pub fn is_ip_valid(s: &str) -> bool {
    s.parse::<IpAddr>().is_ok()
}
