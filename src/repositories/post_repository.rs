use tokio_postgres::{Client, Error, Row};

/// Data access for the `posts` table. Every fn is a single statement with
/// bound parameters against a request-scoped session; updates return the
/// affected-row count so callers can distinguish not-found from success.
pub struct PostRepository;

impl PostRepository {
    /// All non-removed posts, newest id first.
    pub async fn list(client: &Client) -> Result<Vec<Row>, Error> {
        client
            .query(
                "SELECT id, content, likes, created FROM posts \
                 WHERE removed = false ORDER BY id DESC",
                &[],
            )
            .await
    }

    /// One post by id, visible rows only.
    pub async fn find_visible(client: &Client, id: i32) -> Result<Vec<Row>, Error> {
        client
            .query(
                "SELECT id, content, likes, created FROM posts \
                 WHERE id = $1 AND removed = false",
                &[&id],
            )
            .await
    }

    /// One post by id regardless of the removed flag. Used for the re-fetch
    /// after create, edit, delete and restore.
    pub async fn find_any(client: &Client, id: i32) -> Result<Vec<Row>, Error> {
        client
            .query(
                "SELECT id, content, likes, created FROM posts WHERE id = $1",
                &[&id],
            )
            .await
    }

    /// Inserts a row and returns its generated id.
    pub async fn insert(client: &Client, content: &str) -> Result<i32, Error> {
        let row = client
            .query_one(
                "INSERT INTO posts (content) VALUES ($1) RETURNING id",
                &[&content],
            )
            .await?;
        Ok(row.get(0))
    }

    pub async fn update_content(client: &Client, id: i32, content: &str) -> Result<u64, Error> {
        client
            .execute(
                "UPDATE posts SET content = $2 WHERE id = $1 AND removed = false",
                &[&id, &content],
            )
            .await
    }

    /// Flips the soft-delete flag. The predicate excludes rows already in the
    /// target state, so the count is zero for an absent id, a double delete,
    /// or a restore of a live row.
    pub async fn set_removed(client: &Client, id: i32, removed: bool) -> Result<u64, Error> {
        client
            .execute(
                "UPDATE posts SET removed = $2 WHERE id = $1 AND removed <> $2",
                &[&id, &removed],
            )
            .await
    }

    pub async fn set_likes(client: &Client, id: i32, likes: i32) -> Result<u64, Error> {
        client
            .execute("UPDATE posts SET likes = $2 WHERE id = $1", &[&id, &likes])
            .await
    }
}
