use async_trait::async_trait;
use mockall::mock;

use crate::models::StoredIdentity;
use crate::password::Argon2Hasher;
use crate::password::CredentialHasher;
use crate::ports::LookupError;
use crate::ports::UsernameLookup;

pub(crate) const SECRET: &[u8] = b"test_secret_key_at_least_32_bytes!";

mock! {
    pub TestLookup {}

    #[async_trait]
    impl UsernameLookup for TestLookup {
        async fn get(&self, username: &str) -> Result<Option<StoredIdentity>, LookupError>;
    }
}

pub(crate) fn identity(username: &str, password: &str, active: bool) -> StoredIdentity {
    StoredIdentity {
        username: username.to_string(),
        full_name: None,
        email: Some(format!("{}@example.com", username)),
        password_hash: Argon2Hasher::new().hash(password).unwrap(),
        active,
    }
}

/// Lookup that always answers with `identity` for its username and None otherwise.
pub(crate) fn lookup_with(identity: StoredIdentity) -> MockTestLookup {
    let mut lookup = MockTestLookup::new();
    lookup.expect_get().returning(move |username| {
        Ok((username == identity.username).then(|| identity.clone()))
    });
    lookup
}
