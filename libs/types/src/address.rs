//! Validated destination address for one submission

use serde::{Deserialize, Serialize};
use std::fmt;

/// Host/IP plus port of the monitoring server.
///
/// Immutable for the lifetime of one `send` call. Port 0 is rejected by the
/// config layer before an address is ever constructed from file input; the
/// type itself only guarantees the port is in u16 range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerAddress {
    pub host: String,
    pub port: u16,
}

impl ServerAddress {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }
}

impl fmt::Display for ServerAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_as_dial_string() {
        let addr = ServerAddress::new("192.168.1.10", 10051);
        assert_eq!(addr.to_string(), "192.168.1.10:10051");
    }
}
