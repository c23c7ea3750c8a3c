use super::*;

fn site_addr() -> SocketAddr {
    "127.0.0.1:3000".parse().unwrap()
}

#[test]
fn falls_back_to_site_addr_when_unset() {
    let cfg = HostConfig::from_values(None, None, site_addr()).unwrap();
    assert_eq!(cfg.addr, site_addr());
}

#[test]
fn blank_values_fall_back_to_site_addr() {
    let cfg = HostConfig::from_values(Some(" "), Some(""), site_addr()).unwrap();
    assert_eq!(cfg.addr, site_addr());
}

#[test]
fn host_and_port_override_independently() {
    let port_only = HostConfig::from_values(None, Some("8080"), site_addr()).unwrap();
    assert_eq!(port_only.addr, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());

    let host_only = HostConfig::from_values(Some("0.0.0.0"), None, site_addr()).unwrap();
    assert_eq!(host_only.addr, "0.0.0.0:3000".parse::<SocketAddr>().unwrap());
}

#[test]
fn rejects_bad_port() {
    assert_eq!(
        HostConfig::from_values(None, Some("http"), site_addr()),
        Err(ConfigError::InvalidPort("http".to_owned()))
    );
    assert_eq!(
        HostConfig::from_values(None, Some("0"), site_addr()),
        Err(ConfigError::InvalidPort("0".to_owned()))
    );
    assert!(HostConfig::from_values(None, Some("70000"), site_addr()).is_err());
}

#[test]
fn rejects_hostname() {
    assert_eq!(
        HostConfig::from_values(Some("localhost"), None, site_addr()),
        Err(ConfigError::InvalidHost("localhost".to_owned()))
    );
}
