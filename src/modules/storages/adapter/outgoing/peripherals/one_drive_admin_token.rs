use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::modules::storages::application::domain::entities::OneDriveStorage;

const GRAPH_DEFAULT_SCOPE: &str = "https://graph.microsoft.com/.default";

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum CredentialError {
    #[error("token endpoint rejected the client credentials ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("token request failed: {0}")]
    Transport(String),

    #[error("token response is malformed: {0}")]
    MalformedResponse(String),

    #[error("invalid token endpoint: {0}")]
    InvalidEndpoint(String),
}

// ============================================================================
// Admin token
// ============================================================================

/// Bearer token of the storage's application identity.
#[derive(Clone)]
pub struct AdminAccessToken(String);

impl AdminAccessToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AdminAccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AdminAccessToken([REDACTED])")
    }
}

#[async_trait]
pub trait AdminTokenSource: Send + Sync {
    async fn acquire(&self, storage: &OneDriveStorage) -> Result<AdminAccessToken, CredentialError>;
}

// ============================================================================
// Scoped admin context
// ============================================================================

/// Client and admin token for one remote operation. The token is wiped on drop.
pub struct AdminContext {
    http: Client,
    token: AdminAccessToken,
}

impl AdminContext {
    pub fn http(&self) -> &Client {
        &self.http
    }

    pub fn bearer_token(&self) -> &str {
        self.token.secret()
    }
}

impl Drop for AdminContext {
    fn drop(&mut self) {
        self.token.0.clear();
    }
}

/// Runs `op` with a freshly acquired admin context.
///
/// The context is owned by `op`, so it ends with `op` whether it completes,
/// is cancelled or panics. Tokens are never cached between calls.
pub async fn using_admin_context<F, Fut, T>(
    source: &dyn AdminTokenSource,
    http: &Client,
    storage: &OneDriveStorage,
    op: F,
) -> Result<T, CredentialError>
where
    F: FnOnce(AdminContext) -> Fut,
    Fut: Future<Output = T>,
{
    let token = source.acquire(storage).await?;

    let context = AdminContext {
        http: http.clone(),
        token,
    };

    Ok(op(context).await)
}

// ============================================================================
// OAuth2 client credentials grant
// ============================================================================

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
}

/// Acquires app-only Graph tokens from the Microsoft identity platform.
#[derive(Clone)]
pub struct ClientCredentialsTokenSource {
    http: Client,
    login_base_url: String,
}

impl ClientCredentialsTokenSource {
    pub fn new(http: Client, login_base_url: impl Into<String>) -> Self {
        Self {
            http,
            login_base_url: login_base_url.into(),
        }
    }

    /// `{login_base}/{tenant_id}/oauth2/v2.0/token`
    fn token_url(&self, tenant_id: &str) -> Result<Url, CredentialError> {
        let mut url = Url::parse(&self.login_base_url)
            .map_err(|e| CredentialError::InvalidEndpoint(e.to_string()))?;

        url.path_segments_mut()
            .map_err(|_| CredentialError::InvalidEndpoint(self.login_base_url.clone()))?
            .pop_if_empty()
            .extend([tenant_id, "oauth2", "v2.0", "token"]);

        Ok(url)
    }
}

#[async_trait]
impl AdminTokenSource for ClientCredentialsTokenSource {
    async fn acquire(&self, storage: &OneDriveStorage) -> Result<AdminAccessToken, CredentialError> {
        let url = self.token_url(&storage.tenant_id)?;

        let response = self
            .http
            .post(url)
            .form(&[
                ("grant_type", "client_credentials"),
                ("client_id", storage.client_id.as_str()),
                ("client_secret", storage.client_secret()),
                ("scope", GRAPH_DEFAULT_SCOPE),
            ])
            .send()
            .await
            .map_err(|e| CredentialError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<TokenErrorResponse>().await {
                Ok(body) => body.error_description.unwrap_or(body.error),
                Err(_) => "no error description".to_string(),
            };
            tracing::warn!(
                tenant_id = %storage.tenant_id,
                status = status.as_u16(),
                "Admin token request rejected"
            );
            return Err(CredentialError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| CredentialError::MalformedResponse(e.to_string()))?;

        Ok(AdminAccessToken::new(body.access_token))
    }
}
