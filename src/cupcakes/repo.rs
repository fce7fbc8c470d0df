use sqlx::PgPool;

use super::dto::{CreateCupcakeRequest, UpdateCupcakeRequest};
use super::repo_types::Cupcake;

pub async fn list_all(db: &PgPool) -> sqlx::Result<Vec<Cupcake>> {
    sqlx::query_as::<_, Cupcake>(
        r#"
        SELECT id, flavor, size, rating, image
        FROM cupcakes
        ORDER BY id
        "#,
    )
    .fetch_all(db)
    .await
}

pub async fn find_by_id(db: &PgPool, id: i32) -> sqlx::Result<Option<Cupcake>> {
    sqlx::query_as::<_, Cupcake>(
        r#"
        SELECT id, flavor, size, rating, image
        FROM cupcakes
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(db)
    .await
}

pub async fn create(db: &PgPool, new: &CreateCupcakeRequest) -> sqlx::Result<Cupcake> {
    sqlx::query_as::<_, Cupcake>(
        r#"
        INSERT INTO cupcakes (flavor, size, rating, image)
        VALUES ($1, $2, $3, $4)
        RETURNING id, flavor, size, rating, image
        "#,
    )
    .bind(&new.flavor)
    .bind(&new.size)
    .bind(new.rating)
    .bind(&new.image)
    .fetch_one(db)
    .await
}

/// Partial update: fields left as `None` keep their stored value.
pub async fn update(
    db: &PgPool,
    id: i32,
    patch: &UpdateCupcakeRequest,
) -> sqlx::Result<Option<Cupcake>> {
    sqlx::query_as::<_, Cupcake>(
        r#"
        UPDATE cupcakes
        SET flavor = COALESCE($2, flavor),
            size   = COALESCE($3, size),
            rating = COALESCE($4, rating),
            image  = COALESCE($5, image)
        WHERE id = $1
        RETURNING id, flavor, size, rating, image
        "#,
    )
    .bind(id)
    .bind(patch.flavor.as_deref())
    .bind(patch.size.as_deref())
    .bind(patch.rating)
    .bind(patch.image.as_deref())
    .fetch_optional(db)
    .await
}

pub async fn delete(db: &PgPool, id: i32) -> sqlx::Result<bool> {
    let res = sqlx::query("DELETE FROM cupcakes WHERE id = $1")
        .bind(id)
        .execute(db)
        .await?;
    Ok(res.rows_affected() > 0)
}

#[cfg(test)]
pub async fn count(db: &PgPool) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM cupcakes")
        .fetch_one(db)
        .await
}
