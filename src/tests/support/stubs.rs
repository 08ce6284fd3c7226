use async_trait::async_trait;
use uuid::Uuid;

use crate::auth::application::domain::entities::UserId;
use crate::auth::application::ports::outgoing::token_provider::{
    TokenClaims, TokenError, TokenProvider,
};
use crate::storages::application::ports::incoming::use_cases::{
    DeleteProjectStorageError, DeleteProjectStorageUseCase, DeletedProjectStorage,
};

// ============================================================
// TokenProvider
// ============================================================

/// Accepts any bearer token as an access token for `user_id`.
#[derive(Clone)]
pub struct StubTokenProvider {
    pub user_id: Uuid,
    pub is_verified: bool,
}

impl StubTokenProvider {
    pub fn verified(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_verified: true,
        }
    }

    pub fn unverified(user_id: Uuid) -> Self {
        Self {
            user_id,
            is_verified: false,
        }
    }
}

impl TokenProvider for StubTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Ok(TokenClaims {
            sub: self.user_id,
            exp: 9_999_999_999,
            iat: 0,
            nbf: 0,
            token_type: "access".to_string(),
            is_verified: self.is_verified,
        })
    }
}

/// Rejects every token.
#[derive(Clone, Default)]
pub struct RejectingTokenProvider;

impl TokenProvider for RejectingTokenProvider {
    fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
        Err(TokenError::TokenExpired)
    }
}

// ============================================================
// Storages
// ============================================================

#[derive(Default, Clone)]
pub struct StubDeleteProjectStorageUseCase;

#[async_trait]
impl DeleteProjectStorageUseCase for StubDeleteProjectStorageUseCase {
    async fn execute(
        &self,
        _actor: UserId,
        _project_storage_id: Uuid,
    ) -> Result<DeletedProjectStorage, DeleteProjectStorageError> {
        unimplemented!("Not used in this test")
    }
}
