use crate::args::Args;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use url::Url;

pub type SharedConfig = Arc<Config>;

/// The immutable configuration snapshot, built once at startup
#[derive(Debug)]
pub struct Config {
    pub server: Server,
    pub bridge: Bridge,
    pub upstream: Upstream,
    pub commit: Option<String>,
}

#[derive(Debug)]
pub struct Server {
    pub address: SocketAddr,
    pub log: String,
    pub sentry: Option<String>,
}

/// Credentials and targets for forwarding a request
#[derive(Clone, Debug, Default)]
pub struct Bridge {
    pub token: Option<String>,
    pub repository: Option<String>,
    pub issue: Option<String>,
    pub github_token: Option<String>,
}

#[derive(Debug)]
pub struct Upstream {
    pub api: Url,
    pub timeout: Duration,
}

impl Config {
    /// The commit reported by the version endpoint
    pub fn version(&self) -> &str {
        self.commit.as_deref().unwrap_or("unknown")
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Config {
        let mut address = args.address;
        if let Some(port) = args.port {
            address.set_port(port);
        }

        Config {
            server: Server {
                address,
                log: args.log_level,
                sentry: non_empty(args.sentry_dsn),
            },
            bridge: Bridge {
                token: non_empty(args.bridge_token),
                repository: non_empty(args.repository),
                issue: non_empty(args.issue),
                github_token: non_empty(args.github_token),
            },
            upstream: Upstream {
                api: args.github_api,
                timeout: Duration::from_secs(args.timeout),
            },
            commit: non_empty(args.commit),
        }
    }
}

/// Unset and empty values are treated the same
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::Config;
    use crate::args::Args;
    use std::time::Duration;
    use structopt::StructOpt;

    fn parse(args: &[&str]) -> Config {
        let args = Args::from_iter_safe(std::iter::once("ghbridge").chain(args.iter().copied()))
            .expect("failed to parse arguments");
        Config::from(args)
    }

    #[test]
    fn parse_config() {
        let config = parse(&[
            "--address",
            "127.0.0.1:8000",
            "--port",
            "8000",
            "--log-level",
            "debug",
            "--bridge-token",
            "bridge-secret",
            "--repository",
            "octo/hello",
            "--issue",
            "42",
            "--github-token",
            "ghp_test",
            "--github-api",
            "https://github.example.com/api/v3",
            "--timeout",
            "5",
            "--commit",
            "abc123",
        ]);

        assert_eq!("127.0.0.1:8000", &config.server.address.to_string());
        assert_eq!("debug", &config.server.log);

        assert_eq!(Some("bridge-secret"), config.bridge.token.as_deref());
        assert_eq!(Some("octo/hello"), config.bridge.repository.as_deref());
        assert_eq!(Some("42"), config.bridge.issue.as_deref());
        assert_eq!(Some("ghp_test"), config.bridge.github_token.as_deref());

        assert_eq!(
            "https://github.example.com/api/v3",
            config.upstream.api.as_str()
        );
        assert_eq!(Duration::from_secs(5), config.upstream.timeout);
        assert_eq!("abc123", config.version());
    }

    #[test]
    fn port_overrides_address() {
        let config = parse(&["--address", "127.0.0.1:8000", "--port", "9123"]);
        assert_eq!("127.0.0.1:9123", &config.server.address.to_string());
    }

    #[test]
    fn empty_values_are_absent() {
        let config = parse(&[
            "--bridge-token",
            "",
            "--repository",
            "",
            "--issue",
            "",
            "--github-token",
            "",
            "--commit",
            "",
        ]);

        assert!(config.bridge.token.is_none());
        assert!(config.bridge.repository.is_none());
        assert!(config.bridge.issue.is_none());
        assert!(config.bridge.github_token.is_none());
        assert_eq!("unknown", config.version());
    }

    #[test]
    fn invalid_api_url_is_rejected() {
        let result = Args::from_iter_safe(["ghbridge", "--github-api", "not a url"]);
        assert!(result.is_err());
    }
}
