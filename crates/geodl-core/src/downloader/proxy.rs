//! Proxy selection for transfers.

use anyhow::{bail, Result};

use crate::config::ProxyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProxyKind {
    Http,
    Socks5,
}

/// A single proxy to route transfers through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxySettings {
    pub kind: ProxyKind,
    /// `host:port`, without scheme.
    pub address: String,
    /// User and password; only used when both were given.
    pub credentials: Option<(String, String)>,
}

impl ProxySettings {
    /// Builds proxy settings from a `[proxy]` config table (or equivalent
    /// command-line flags). `None` when no proxy address is set.
    ///
    /// HTTP and SOCKS5 cannot be combined.
    pub fn from_config(cfg: &ProxyConfig) -> Result<Option<Self>> {
        let non_empty = |v: &Option<String>| v.clone().filter(|s| !s.trim().is_empty());
        let (kind, address) = match (non_empty(&cfg.http), non_empty(&cfg.socks5)) {
            (Some(_), Some(_)) => bail!("HTTP and SOCKS5 proxies are mutually exclusive"),
            (Some(addr), None) => (ProxyKind::Http, addr),
            (None, Some(addr)) => (ProxyKind::Socks5, addr),
            (None, None) => return Ok(None),
        };
        if address.contains("://") {
            bail!("proxy address must be host:port without scheme, got {}", address);
        }
        let credentials = match (non_empty(&cfg.user), non_empty(&cfg.pass)) {
            (Some(user), Some(pass)) => Some((user, pass)),
            _ => None,
        };
        Ok(Some(Self {
            kind,
            address: address.trim().to_string(),
            credentials,
        }))
    }

    /// Proxy URL as libcurl expects it. SOCKS5 resolves host names through the proxy.
    pub fn url(&self) -> String {
        let scheme = match self.kind {
            ProxyKind::Http => "http",
            ProxyKind::Socks5 => "socks5h",
        };
        format!("{}://{}", scheme, self.address)
    }

    pub(crate) fn apply(&self, easy: &mut curl::easy::Easy) -> Result<()> {
        easy.proxy(&self.url())?;
        if let Some((user, pass)) = &self.credentials {
            easy.proxy_username(user)?;
            easy.proxy_password(pass)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg(http: Option<&str>, socks5: Option<&str>, user: Option<&str>, pass: Option<&str>) -> ProxyConfig {
        ProxyConfig {
            http: http.map(String::from),
            socks5: socks5.map(String::from),
            user: user.map(String::from),
            pass: pass.map(String::from),
        }
    }

    #[test]
    fn no_address_means_no_proxy() {
        assert!(ProxySettings::from_config(&ProxyConfig::default()).unwrap().is_none());
        assert!(ProxySettings::from_config(&cfg(Some(""), None, Some("u"), Some("p")))
            .unwrap()
            .is_none());
    }

    #[test]
    fn http_proxy_url() {
        let p = ProxySettings::from_config(&cfg(Some("proxy.local:3128"), None, None, None))
            .unwrap()
            .unwrap();
        assert_eq!(p.kind, ProxyKind::Http);
        assert_eq!(p.url(), "http://proxy.local:3128");
        assert!(p.credentials.is_none());
    }

    #[test]
    fn socks5_proxy_with_credentials() {
        let p = ProxySettings::from_config(&cfg(None, Some("10.0.0.1:1080"), Some("osm"), Some("pw")))
            .unwrap()
            .unwrap();
        assert_eq!(p.url(), "socks5h://10.0.0.1:1080");
        assert_eq!(p.credentials, Some(("osm".to_string(), "pw".to_string())));
    }

    #[test]
    fn credentials_need_both_parts() {
        let p = ProxySettings::from_config(&cfg(Some("h:1"), None, Some("osm"), None))
            .unwrap()
            .unwrap();
        assert!(p.credentials.is_none());
    }

    #[test]
    fn both_kinds_rejected() {
        assert!(ProxySettings::from_config(&cfg(Some("a:1"), Some("b:2"), None, None)).is_err());
    }

    #[test]
    fn scheme_in_address_rejected() {
        assert!(ProxySettings::from_config(&cfg(Some("http://a:1"), None, None, None)).is_err());
    }
}
