use base64::{Engine, engine::general_purpose::STANDARD};
use reqwest::Client;

use crate::{
    config,
    types::{AccessToken, TokenResponse},
    utils,
};

/// Safety margin subtracted from the provider's advertised token lifetime.
///
/// A token is treated as expired this many seconds before the provider would
/// actually reject it, so a request started just before the boundary still
/// carries a valid credential.
pub const EXPIRY_BUFFER_SECS: u64 = 60;

/// Errors produced by the client-credentials token exchange.
///
/// `Config` means the request was never sent because credentials are missing
/// or still template values; `Exchange` means Spotify rejected the exchange;
/// `Http` covers transport failures and unreadable responses.
#[derive(Debug)]
pub enum TokenError {
    Config(String),
    Exchange { status: u16 },
    Http(reqwest::Error),
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Config(msg) => write!(f, "configuration error: {}", msg),
            TokenError::Exchange { status } => {
                write!(f, "token exchange rejected with status {}", status)
            }
            TokenError::Http(e) => write!(f, "token request failed: {}", e),
        }
    }
}

impl std::error::Error for TokenError {}

impl From<reqwest::Error> for TokenError {
    fn from(e: reqwest::Error) -> Self {
        TokenError::Http(e)
    }
}

/// Performs an OAuth 2.0 client-credentials exchange against Spotify.
///
/// Sends a `grant_type=client_credentials` POST to the token endpoint with
/// the application's client ID and secret as an HTTP Basic authorization
/// header, and converts the response into an [`AccessToken`] whose expiry
/// already includes the [`EXPIRY_BUFFER_SECS`] safety margin.
///
/// The client-credentials flow grants app-level access only (track search,
/// catalog browsing); it never touches user data and therefore needs no
/// browser round trip or user consent.
///
/// # Arguments
///
/// * `token_url` - Token endpoint, e.g. `https://accounts.spotify.com/api/token`
/// * `client_id` - Application client ID from the Spotify developer dashboard
/// * `client_secret` - Application client secret
///
/// # Returns
///
/// Returns a `Result` containing:
/// - `Ok(AccessToken)` - Bearer value plus the buffered unix expiry timestamp
/// - `Err(TokenError)` - Configuration, exchange, or transport failure
///
/// # Error Conditions
///
/// - Missing or placeholder credentials fail fast with `TokenError::Config`
///   before any network traffic
/// - A non-success HTTP status maps to `TokenError::Exchange` with the status
/// - Network failures and unreadable bodies map to `TokenError::Http`
///
/// # Security Note
///
/// The client secret is only ever sent inside the Basic authorization header
/// over TLS; it is never logged or included in error messages.
///
/// # Example
///
/// ```
/// let token = request_client_token(
///     "https://accounts.spotify.com/api/token",
///     &config::spotify_client_id(),
///     &config::spotify_client_secret(),
/// )
/// .await?;
/// println!("valid until {}", token.expires_at);
/// ```
pub async fn request_client_token(
    token_url: &str,
    client_id: &str,
    client_secret: &str,
) -> Result<AccessToken, TokenError> {
    if config::is_placeholder(client_id) || config::is_placeholder(client_secret) {
        return Err(TokenError::Config(String::from(
            "Spotify API credentials are not configured",
        )));
    }

    let basic = STANDARD.encode(format!("{}:{}", client_id, client_secret));

    let client = Client::new();
    let res = client
        .post(token_url)
        .header("Authorization", format!("Basic {}", basic))
        .form(&[("grant_type", "client_credentials")])
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(TokenError::Exchange {
            status: res.status().as_u16(),
        });
    }

    let token: TokenResponse = res.json().await?;

    Ok(AccessToken {
        value: token.access_token,
        expires_at: utils::now_ts() + token.expires_in.saturating_sub(EXPIRY_BUFFER_SECS),
    })
}
