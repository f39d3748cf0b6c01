use chrono::Utc;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::domain::{NewUser, UserRecord};
use crate::auth::repository::{RepositoryError, UserRepository};

pub struct SeaOrmUserRepository {
    pub db: DatabaseConnection,
}

fn to_record(m: models::user::Model) -> UserRecord {
    UserRecord {
        id: m.id,
        email: m.email,
        password_hash: m.password_hash,
        name: m.name,
        created_at: m.created_at.with_timezone(&Utc),
        updated_at: m.updated_at.with_timezone(&Utc),
    }
}

#[async_trait::async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, RepositoryError> {
        let res = models::user::find_by_email(&self.db, email)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(res.map(to_record))
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<UserRecord>, RepositoryError> {
        let res = models::user::find_by_id(&self.db, id)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;
        Ok(res.map(to_record))
    }

    async fn create(&self, user: NewUser) -> Result<UserRecord, RepositoryError> {
        models::user::create(&self.db, &user.email, &user.password_hash, user.name.as_deref())
            .await
            .map(to_record)
            .map_err(|e| {
                let msg = e.to_string();
                // Postgres reports the unique key on email as a constraint violation
                if msg.contains("duplicate key value violates unique constraint") {
                    RepositoryError::DuplicateEmail
                } else {
                    RepositoryError::Storage(msg)
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::domain::{LoginInput, RegisterInput};
    use crate::auth::CredentialService;
    use crate::test_support::get_db;
    use std::sync::Arc;

    #[tokio::test]
    async fn register_and_authenticate_against_db() -> Result<(), anyhow::Error> {
        if std::env::var("SKIP_DB_TESTS").is_ok() {
            return Ok(());
        }
        let db = get_db().await?;
        let repo = Arc::new(SeaOrmUserRepository { db: db.clone() });
        let svc = CredentialService::new(repo);

        let email = format!("svc_{}@example.com", Uuid::new_v4());
        let user = svc
            .register(RegisterInput {
                email: email.clone(),
                password: "secret1".into(),
                name: Some("Svc User".into()),
            })
            .await?;
        assert_eq!(user.email, email);

        let authed = svc
            .authenticate(LoginInput { email: email.clone(), password: "secret1".into() })
            .await?;
        assert_eq!(authed.id, user.id);

        let found = svc.get_user_by_id(user.id).await.expect("registered user is findable");
        assert_eq!(found.email, email);

        models::user::hard_delete(&db, user.id).await?;
        Ok(())
    }
}
