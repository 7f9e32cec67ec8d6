// src/db/users.rs
use rusqlite::{params, Connection, OptionalExtension};

use crate::auth::password::{generate_salt, hash_password, verify_password};
use crate::errors::ServerError;

#[derive(Debug)]
struct CredentialRow {
    id: i64,
    password_hash: Vec<u8>,
    password_salt: Vec<u8>,
}

/// Trim + lowercase, minimal sanity check.
pub fn normalize_email(email: &str) -> Result<String, ServerError> {
    let e = email.trim().to_lowercase();
    if e.is_empty() || !e.contains('@') || e.starts_with('@') || e.ends_with('@') {
        return Err(ServerError::BadRequest("invalid email".into()));
    }
    Ok(e)
}

/// Create an account with a fresh salt. Fails on duplicate email.
pub fn create_user(
    conn: &Connection,
    email: &str,
    password: &str,
    now: i64,
) -> Result<i64, ServerError> {
    let email = normalize_email(email)?;
    if password.is_empty() {
        return Err(ServerError::BadRequest("empty password".into()));
    }

    let salt = generate_salt();
    let hash = hash_password(password, &salt);

    conn.execute(
        "insert into users (email, password_hash, password_salt, created_at) values (?, ?, ?, ?)",
        params![email, hash.as_slice(), salt.as_slice(), now],
    )
    .map_err(|e| ServerError::UpdateFailed(format!("insert user failed: {e}")))?;

    Ok(conn.last_insert_rowid())
}

/// Check an email/password pair. Returns the user id on success, `None` for
/// an unknown email or a wrong password (callers should not distinguish).
pub fn verify_credentials(
    conn: &Connection,
    email: &str,
    password: &str,
    now: i64,
) -> Result<Option<i64>, ServerError> {
    let email = normalize_email(email)?;

    let row: Option<CredentialRow> = conn
        .query_row(
            "select id, password_hash, password_salt from users where email = ?",
            params![email],
            |r| {
                Ok(CredentialRow {
                    id: r.get(0)?,
                    password_hash: r.get(1)?,
                    password_salt: r.get(2)?,
                })
            },
        )
        .optional()
        .map_err(|e| ServerError::QueryFailed(format!("select user failed: {e}")))?;

    let Some(row) = row else {
        return Ok(None);
    };

    if !verify_password(password, &row.password_salt, &row.password_hash) {
        return Ok(None);
    }

    conn.execute(
        "update users set last_login_at = ? where id = ?",
        params![now, row.id],
    )
    .map_err(|e| ServerError::UpdateFailed(format!("update last_login_at failed: {e}")))?;

    Ok(Some(row.id))
}

pub fn count_users(conn: &Connection) -> Result<i64, ServerError> {
    conn.query_row("select count(*) from users", [], |r| r.get(0))
        .map_err(|e| ServerError::QueryFailed(format!("count users failed: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply_schema(conn: &Connection) {
        conn.execute_batch(
            r#"
            create table if not exists users (
              id            integer primary key,
              email         text not null unique,
              password_hash blob not null,
              password_salt blob not null,
              created_at    integer not null,
              last_login_at integer
            );
            "#,
        )
        .unwrap();
    }

    #[test]
    fn normalize_email_trims_and_lowercases() {
        assert_eq!(
            normalize_email("  Test@Example.COM ").unwrap(),
            "test@example.com"
        );
    }

    #[test]
    fn normalize_email_rejects_invalid() {
        assert!(normalize_email("").is_err());
        assert!(normalize_email("no-at-symbol").is_err());
        assert!(normalize_email("@example.com").is_err());
        assert!(normalize_email("test@").is_err());
    }

    #[test]
    fn create_then_verify() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn);

        let now = 1000;
        let id = create_user(&conn, "User@Example.com", "pw123", now).unwrap();

        let ok = verify_credentials(&conn, "user@example.com", "pw123", now + 1).unwrap();
        assert_eq!(ok, Some(id));

        let last_login: Option<i64> = conn
            .query_row("select last_login_at from users where id = ?", [id], |r| {
                r.get(0)
            })
            .unwrap();
        assert_eq!(last_login, Some(now + 1));
    }

    #[test]
    fn wrong_password_and_unknown_email_both_yield_none() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn);

        create_user(&conn, "a@b.com", "right", 1000).unwrap();

        assert_eq!(
            verify_credentials(&conn, "a@b.com", "wrong", 1001).unwrap(),
            None
        );
        assert_eq!(
            verify_credentials(&conn, "nobody@b.com", "right", 1001).unwrap(),
            None
        );
    }

    #[test]
    fn duplicate_email_is_rejected() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn);

        create_user(&conn, "a@b.com", "pw", 1000).unwrap();
        let second = create_user(&conn, "a@b.com", "pw", 1001);
        assert!(matches!(second, Err(ServerError::UpdateFailed(_))));
    }
}
