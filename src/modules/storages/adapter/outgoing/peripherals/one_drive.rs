use std::sync::Arc;

use reqwest::{Client, Url};

use crate::modules::storages::application::domain::entities::OneDriveStorage;
use crate::modules::storages::application::ports::outgoing::RemoteFolderOutcome;

use super::one_drive_admin_token::{using_admin_context, AdminTokenSource};
use super::{normalize_delete_status, transport_failure};

/// Removes drive items through Microsoft Graph using the storage's admin identity.
#[derive(Clone)]
pub struct OneDriveFolderDeleter {
    http: Client,
    graph_base_url: String,
    tokens: Arc<dyn AdminTokenSource + Send + Sync>,
}

impl OneDriveFolderDeleter {
    pub fn new(
        http: Client,
        graph_base_url: impl Into<String>,
        tokens: Arc<dyn AdminTokenSource + Send + Sync>,
    ) -> Self {
        Self {
            http,
            graph_base_url: graph_base_url.into(),
            tokens,
        }
    }

    /// `{graph_base}/v1.0/drives/{drive_id}/items/{item_id}`
    pub(crate) fn drive_item_url(&self, drive_id: &str, item_id: &str) -> Result<Url, String> {
        let mut url = Url::parse(&self.graph_base_url)
            .map_err(|e| format!("invalid Graph base URL `{}`: {e}", self.graph_base_url))?;

        url.path_segments_mut()
            .map_err(|_| format!("Graph base URL `{}` cannot hold a path", self.graph_base_url))?
            .pop_if_empty()
            .extend(["v1.0", "drives", drive_id, "items", item_id]);

        Ok(url)
    }

    pub async fn delete_folder(&self, storage: &OneDriveStorage, item_id: &str) -> RemoteFolderOutcome {
        let url = match self.drive_item_url(&storage.drive_id, item_id) {
            Ok(url) => url,
            Err(reason) => return RemoteFolderOutcome::Failed(reason),
        };

        tracing::debug!(%url, "Deleting OneDrive folder");

        let result = using_admin_context(self.tokens.as_ref(), &self.http, storage, |ctx| async move {
            match ctx
                .http()
                .delete(url)
                .bearer_auth(ctx.bearer_token())
                .send()
                .await
            {
                Ok(response) => normalize_delete_status(response.status()),
                Err(e) => transport_failure(&e),
            }
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(e) => RemoteFolderOutcome::Failed(format!("admin credentials unavailable: {e}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::modules::storages::adapter::outgoing::peripherals::one_drive_admin_token::{
        AdminAccessToken, CredentialError,
    };

    struct StubTokenSource {
        result: Result<AdminAccessToken, CredentialError>,
    }

    #[async_trait]
    impl AdminTokenSource for StubTokenSource {
        async fn acquire(
            &self,
            _storage: &OneDriveStorage,
        ) -> Result<AdminAccessToken, CredentialError> {
            self.result.clone()
        }
    }

    fn storage() -> OneDriveStorage {
        OneDriveStorage::new("tenant", "b!drive-42", "client", "secret")
    }

    fn deleter(base: &str, token: Result<AdminAccessToken, CredentialError>) -> OneDriveFolderDeleter {
        OneDriveFolderDeleter::new(
            Client::new(),
            base,
            Arc::new(StubTokenSource { result: token }),
        )
    }

    #[test]
    fn url_addresses_the_drive_item() {
        let deleter = deleter("https://graph.microsoft.com", Ok(AdminAccessToken::new("t")));

        let url = deleter.drive_item_url("b!drive-42", "01ABCDEF").unwrap();

        assert_eq!(
            url.as_str(),
            "https://graph.microsoft.com/v1.0/drives/b!drive-42/items/01ABCDEF"
        );
    }

    #[tokio::test]
    async fn deletes_item_with_admin_bearer_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", "/v1.0/drives/b!drive-42/items/01ABCDEF")
            .match_header("authorization", "Bearer admin-token")
            .with_status(204)
            .expect(1)
            .create_async()
            .await;

        let outcome = deleter(&server.url(), Ok(AdminAccessToken::new("admin-token")))
            .delete_folder(&storage(), "01ABCDEF")
            .await;

        assert_eq!(outcome, RemoteFolderOutcome::Deleted);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn missing_item_is_already_absent() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/v1.0/drives/b!drive-42/items/01ABCDEF")
            .with_status(404)
            .with_body(r#"{"error":{"code":"itemNotFound"}}"#)
            .create_async()
            .await;

        let outcome = deleter(&server.url(), Ok(AdminAccessToken::new("admin-token")))
            .delete_folder(&storage(), "01ABCDEF")
            .await;

        assert_eq!(outcome, RemoteFolderOutcome::AlreadyAbsent);
    }

    #[tokio::test]
    async fn forbidden_is_a_failure() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("DELETE", "/v1.0/drives/b!drive-42/items/01ABCDEF")
            .with_status(403)
            .create_async()
            .await;

        let outcome = deleter(&server.url(), Ok(AdminAccessToken::new("admin-token")))
            .delete_folder(&storage(), "01ABCDEF")
            .await;

        assert_eq!(
            outcome,
            RemoteFolderOutcome::Failed("unexpected status 403".to_string())
        );
    }

    #[tokio::test]
    async fn no_request_is_sent_without_admin_token() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("DELETE", mockito::Matcher::Any)
            .expect(0)
            .create_async()
            .await;

        let outcome = deleter(
            &server.url(),
            Err(CredentialError::Rejected {
                status: 401,
                message: "invalid_client".to_string(),
            }),
        )
        .delete_folder(&storage(), "01ABCDEF")
        .await;

        assert!(matches!(
            outcome,
            RemoteFolderOutcome::Failed(reason) if reason.contains("admin credentials unavailable")
        ));
        mock.assert_async().await;
    }
}
