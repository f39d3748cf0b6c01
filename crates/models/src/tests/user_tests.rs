use crate::db::connect;
use crate::user;
use anyhow::Result;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

/// Setup test database with migrations
async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = connect().await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

#[tokio::test]
async fn test_user_crud() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let email = format!("crud_{}@example.com", Uuid::new_v4());
    let created = user::create(&db, &email, "$2b$12$abcdefghabcdefghabcdefgh", Some("Crud User")).await?;
    assert_eq!(created.email, email);
    assert_eq!(created.name.as_deref(), Some("Crud User"));

    let by_id = user::find_by_id(&db, created.id).await?;
    assert_eq!(by_id.as_ref().map(|u| u.id), Some(created.id));

    let by_email = user::find_by_email(&db, &email).await?;
    assert_eq!(by_email.map(|u| u.id), Some(created.id));

    user::hard_delete(&db, created.id).await?;
    assert!(user::find_by_id(&db, created.id).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn test_user_create_without_name() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let email = format!("noname_{}@example.com", Uuid::new_v4());
    let created = user::create(&db, &email, "$2b$12$abcdefghabcdefghabcdefgh", None).await?;
    // Absent name is NULL, never the string "null"
    assert!(created.name.is_none());

    user::hard_delete(&db, created.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_duplicate_email_rejected_by_store() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    let email = format!("dup_{}@example.com", Uuid::new_v4());
    let first = user::create(&db, &email, "$2b$12$abcdefghabcdefghabcdefgh", None).await?;
    let second = user::create(&db, &email, "$2b$12$abcdefghabcdefghabcdefgh", None).await;
    assert!(second.is_err(), "unique key on email must reject the duplicate");

    user::hard_delete(&db, first.id).await?;
    Ok(())
}

#[tokio::test]
async fn test_user_create_guards() -> Result<()> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return Ok(());
    }

    let db = setup_test_db().await?;

    assert!(user::create(&db, "not-an-email", "$2b$12$x", None).await.is_err());
    assert!(user::create(&db, "guard@example.com", "   ", None).await.is_err());
    Ok(())
}
