//! Control API endpoint paths.
//!
//! Note that the aggregate health snapshot reads [`VPN_SETTINGS`] while the
//! single-resource settings route reads [`OPENVPN_SETTINGS`]. These are two
//! different upstream resources.

pub const VPN_STATUS: &str = "/v1/vpn/status";
pub const PUBLIC_IP: &str = "/v1/publicip/ip";
pub const PORT_FORWARD: &str = "/v1/portforward";
pub const OPENVPN_SETTINGS: &str = "/v1/openvpn/settings";
pub const DNS_STATUS: &str = "/v1/dns/status";
pub const VPN_SETTINGS: &str = "/v1/vpn/settings";
