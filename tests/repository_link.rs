use encurtador::domain::entities::NewLink;
use encurtador::domain::repositories::LinkRepository;
use encurtador::error::AppError;
use encurtador::infrastructure::persistence::PgLinkRepository;
use sqlx::PgPool;
use std::sync::Arc;

#[sqlx::test]
async fn test_create_link(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    let link = repo
        .create(NewLink::new("ABCDE", "www.teste.com/essa-url-e-longa"))
        .await
        .unwrap();

    assert_eq!(link.short_id, "ABCDE");
    assert_eq!(link.original_url, "www.teste.com/essa-url-e-longa");
}

#[sqlx::test]
async fn test_find_by_short_id(pool: PgPool) {
    sqlx::query("INSERT INTO links (short_id, original_url) VALUES ($1, $2)")
        .bind("teste")
        .bind("www.teste.com")
        .execute(&pool)
        .await
        .unwrap();

    let repo = PgLinkRepository::new(Arc::new(pool));
    let link = repo.find_by_short_id("teste").await.unwrap();

    assert_eq!(link.unwrap().original_url, "www.teste.com");
}

#[sqlx::test]
async fn test_find_by_short_id_not_found(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.find_by_short_id("missing").await.unwrap().is_none());
}

#[sqlx::test]
async fn test_duplicate_short_id_is_conflict(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    repo.create(NewLink::new("dup", "www.first.com"))
        .await
        .unwrap();
    let result = repo.create(NewLink::new("dup", "www.second.com")).await;

    match result {
        Err(AppError::Conflict { message, details }) => {
            assert_eq!(message, "Short ID já existe...");
            assert_eq!(details["shortId"], "dup");
        }
        other => panic!("expected conflict, got {other:?}"),
    }

    let stored = repo.find_by_short_id("dup").await.unwrap().unwrap();
    assert_eq!(stored.original_url, "www.first.com");
}

#[sqlx::test]
async fn test_list_recent_and_count(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    for short_id in ["one", "two", "three"] {
        repo.create(NewLink::new(short_id, "www.teste.com"))
            .await
            .unwrap();
    }

    assert_eq!(repo.count().await.unwrap(), 3);

    let recent = repo.list_recent(2).await.unwrap();
    assert_eq!(recent.len(), 2);
    assert_eq!(recent[0].short_id, "three");
}

#[sqlx::test]
async fn test_ping(pool: PgPool) {
    let repo = PgLinkRepository::new(Arc::new(pool));

    assert!(repo.ping().await.is_ok());
}
