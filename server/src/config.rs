use std::net::{IpAddr, Ipv4Addr, SocketAddr};

pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_BIND_ADDR: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_STATIC_DIR: &str = "client/dist";

/// Dataset payloads never change while the process runs.
pub const DATASET_CACHE_CONTROL: &str = "public, max-age=300";

pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|value| value.trim().parse::<u16>().ok())
        .filter(|value| *value > 0)
        .unwrap_or(DEFAULT_SERVER_PORT)
}

pub fn bind_addr() -> IpAddr {
    std::env::var("BIND_ADDR")
        .ok()
        .and_then(|value| value.trim().parse::<IpAddr>().ok())
        .unwrap_or(DEFAULT_BIND_ADDR)
}

pub fn listen_addr() -> SocketAddr {
    SocketAddr::new(bind_addr(), server_port())
}

pub fn static_dir() -> String {
    std::env::var("STATIC_DIR")
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        temp_env::with_vars_unset(["PORT", "BIND_ADDR", "STATIC_DIR"], || {
            assert_eq!(server_port(), 3000);
            assert_eq!(bind_addr(), DEFAULT_BIND_ADDR);
            assert_eq!(static_dir(), "client/dist");
            assert_eq!(listen_addr().to_string(), "0.0.0.0:3000");
        });
    }

    #[test]
    fn env_overrides_are_parsed() {
        temp_env::with_vars(
            [
                ("PORT", Some("8080")),
                ("BIND_ADDR", Some("127.0.0.1")),
                ("STATIC_DIR", Some(" /srv/flood-watch ")),
            ],
            || {
                assert_eq!(listen_addr().to_string(), "127.0.0.1:8080");
                assert_eq!(static_dir(), "/srv/flood-watch");
            },
        );
    }

    #[test]
    fn invalid_values_fall_back() {
        temp_env::with_vars(
            [
                ("PORT", Some("0")),
                ("BIND_ADDR", Some("localhost")),
                ("STATIC_DIR", Some("   ")),
            ],
            || {
                assert_eq!(server_port(), DEFAULT_SERVER_PORT);
                assert_eq!(bind_addr(), DEFAULT_BIND_ADDR);
                assert_eq!(static_dir(), DEFAULT_STATIC_DIR);
            },
        );
        temp_env::with_var("PORT", Some("not-a-port"), || {
            assert_eq!(server_port(), DEFAULT_SERVER_PORT);
        });
    }
}
