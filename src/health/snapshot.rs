//! Health snapshot aggregation.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

use crate::http::envelope::Envelope;
use crate::observability::metrics;
use crate::upstream::{endpoints, UpstreamClient};

/// Point-in-time view of the VPN container, one envelope per upstream resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthSnapshot {
    /// RFC 3339 UTC timestamp with millisecond precision.
    pub timestamp: String,
    pub vpn_status: Envelope,
    pub public_ip: Envelope,
    pub port_forwarded: Envelope,
    pub dns_status: Envelope,
    pub vpn_settings: Envelope,
}

impl HealthSnapshot {
    /// Sections paired with their wire names.
    pub fn sections(&self) -> [(&'static str, &Envelope); 5] {
        [
            ("vpnStatus", &self.vpn_status),
            ("publicIp", &self.public_ip),
            ("portForwarded", &self.port_forwarded),
            ("dnsStatus", &self.dns_status),
            ("vpnSettings", &self.vpn_settings),
        ]
    }

    pub fn failed_sections(&self) -> usize {
        self.sections().iter().filter(|(_, e)| !e.is_ok()).count()
    }
}

/// Query all five resources concurrently and merge the outcomes.
pub async fn collect_snapshot(client: &UpstreamClient) -> HealthSnapshot {
    let (vpn_status, public_ip, port_forwarded, dns_status, vpn_settings) = tokio::join!(
        client.get(endpoints::VPN_STATUS),
        client.get(endpoints::PUBLIC_IP),
        client.get(endpoints::PORT_FORWARD),
        client.get(endpoints::DNS_STATUS),
        client.get(endpoints::VPN_SETTINGS),
    );

    let snapshot = HealthSnapshot {
        timestamp: timestamp_now(),
        vpn_status: vpn_status.into(),
        public_ip: public_ip.into(),
        port_forwarded: port_forwarded.into(),
        dns_status: dns_status.into(),
        vpn_settings: vpn_settings.into(),
    };

    let failed = snapshot.failed_sections();
    metrics::record_health_snapshot(failed);
    if failed > 0 {
        let sections: Vec<&str> = snapshot
            .sections()
            .iter()
            .filter(|(_, e)| !e.is_ok())
            .map(|(name, _)| *name)
            .collect();
        tracing::info!(failed, sections = ?sections, "Health snapshot has failed sections");
    }

    snapshot
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UpstreamConfig;
    use crate::upstream::AuthConfig;
    use chrono::DateTime;
    use serde_json::json;

    #[test]
    fn test_timestamp_format() {
        let ts = timestamp_now();
        assert!(ts.ends_with('Z'));
        let parsed = DateTime::parse_from_rfc3339(&ts).unwrap();
        let drift = Utc::now().signed_duration_since(parsed).num_seconds().abs();
        assert!(drift < 5);
    }

    #[test]
    fn test_wire_names() {
        let snapshot = HealthSnapshot {
            timestamp: "2024-01-01T00:00:00.000Z".into(),
            vpn_status: Envelope::success(json!({"status": "running"})),
            public_ip: Envelope::failure("x"),
            port_forwarded: Envelope::success(json!({"port": 0})),
            dns_status: Envelope::success(json!({"status": "running"})),
            vpn_settings: Envelope::success(json!({})),
        };

        let value = serde_json::to_value(&snapshot).unwrap();
        for key in ["timestamp", "vpnStatus", "publicIp", "portForwarded", "dnsStatus", "vpnSettings"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert_eq!(snapshot.failed_sections(), 1);
    }

    #[tokio::test]
    async fn test_unreachable_upstream_fails_every_section() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let config = UpstreamConfig {
            base_url: format!("http://{}", addr),
            timeout_ms: 2000,
        };
        let client = UpstreamClient::new(&config, &AuthConfig::None).unwrap();

        let snapshot = collect_snapshot(&client).await;
        assert_eq!(snapshot.failed_sections(), 5);
        for (_, envelope) in snapshot.sections() {
            assert!(!envelope.error().unwrap_or_default().is_empty());
        }
    }
}
