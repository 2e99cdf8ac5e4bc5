use std::net::SocketAddr;
use structopt::StructOpt;
use url::Url;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ghbridge",
    about = "Relay authenticated requests to GitHub issue comments and repository dispatches"
)]
pub struct Args {
    /// The listen address and port
    ///
    /// The port and address where the server should listen for bridge requests
    #[structopt(short, long, env = "BRIDGE_ADDRESS", default_value = "0.0.0.0:8000")]
    pub address: SocketAddr,

    /// Override the port of the listen address
    ///
    /// Most hosting platforms inject the port to listen on through the PORT
    /// environment variable.
    #[structopt(long, env = "PORT")]
    pub port: Option<u16>,

    /// The minimum level to log at
    ///
    /// The minimum log level specification, supports the rust log format. The
    /// environment variable RUST_LOG can also be used.
    #[structopt(short, long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,

    /// Where to report errors to
    #[structopt(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,

    /// The token callers must present as `Authorization: Bearer <token>`
    #[structopt(long, env = "BRIDGE_TOKEN", hide_env_values = true)]
    pub bridge_token: Option<String>,

    /// The repository to forward to, formatted as `<owner>/<repo>`
    #[structopt(long, env = "GH_REPO")]
    pub repository: Option<String>,

    /// The issue number to comment on in issue mode
    #[structopt(long, env = "GH_ISSUE")]
    pub issue: Option<String>,

    /// The token used to authenticate against the GitHub API
    #[structopt(long, env = "GH_TOKEN", hide_env_values = true)]
    pub github_token: Option<String>,

    /// The base URL of the GitHub REST API
    #[structopt(long, env = "GH_API_URL", default_value = "https://api.github.com")]
    pub github_api: Url,

    /// How long to wait on GitHub before giving up, in seconds
    #[structopt(long, env = "GH_TIMEOUT", default_value = "20")]
    pub timeout: u64,

    /// The commit the running build was made from
    #[structopt(long, env = "RAILWAY_GIT_COMMIT_SHA")]
    pub commit: Option<String>,
}
