//! Test fixtures for wire objects and access tokens.

use base64::Engine;
use chrono::NaiveDate;
use serde_json::json;
use techblog_client::article::ArticleStatus;
use techblog_client::{
    AccountId, Article, ArticleId, Author, Comment, CommentId, OpinionId, Opinion, Technology,
    TechnologyCategory, TokenResponse, User, UserAccount, UserId,
};

pub const ADMIN_ACCOUNT: &str = "0b7a4d4e-6f1a-4b39-9d0e-2f4c1a7e9b11";
pub const MEMBER_ACCOUNT: &str = "5c2e8f90-1d3b-4a6c-8e7f-9a0b1c2d3e4f";

pub fn account_id(raw: &str) -> AccountId {
    AccountId::parse(raw).unwrap()
}

/// Unsigned JWT carrying the claims the client reads.
pub fn access_token(sub: &str, roles: &[&str]) -> String {
    let engine = base64::engine::general_purpose::URL_SAFE_NO_PAD;
    let claims = json!({
        "sub": sub,
        "preferred_username": "test-user",
        "realm_access": { "roles": roles },
        "exp": 1_900_000_000_i64,
    });
    format!(
        "{}.{}.{}",
        engine.encode(r#"{"alg":"RS256","typ":"JWT"}"#),
        engine.encode(claims.to_string()),
        engine.encode("signature")
    )
}

pub fn token_response(sub: &str, roles: &[&str]) -> TokenResponse {
    TokenResponse {
        access_token: access_token(sub, roles),
        expires_in: 300,
        refresh_token: format!("refresh-{}", sub),
        refresh_expires_in: 1800,
    }
}

pub fn user(id: i64, account: &str, nickname: &str) -> User {
    User {
        id: UserId::new(id),
        user_account_id: account_id(account),
        nickname: nickname.to_string(),
        firstname: "Anna".to_string(),
        surname: nickname.to_uppercase(),
        email: format!("{}@example.com", nickname),
        avatar: None,
        is_reviewer: Some(false),
    }
}

pub fn user_account(account: &str, username: &str) -> UserAccount {
    UserAccount {
        id: account_id(account),
        username: username.to_string(),
        email: Some(format!("{}@example.com", username)),
        enabled: Some(true),
    }
}

fn timestamp() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 5, 17)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .unwrap()
}

pub fn article(id: &str, author_id: UserId, status: ArticleStatus) -> Article {
    Article {
        id: ArticleId::new(id),
        title: "Ownership without tears".to_string(),
        content: "Borrowing rules in practice".to_string(),
        status,
        author: Author {
            id: author_id,
            nickname: "author".to_string(),
            avatar: None,
        },
        technology: Technology {
            id: 1,
            name: "Rust".to_string(),
            provider: Some("Rust Foundation".to_string()),
            description: String::new(),
            icon: None,
            category: TechnologyCategory {
                id: 1,
                name: "Languages".to_string(),
                parent: None,
            },
        },
        creation_date: timestamp(),
        modification_date: timestamp(),
        average_rating: None,
    }
}

pub fn opinion(id: OpinionId, author_id: UserId, article_id: &ArticleId) -> Opinion {
    Opinion {
        id,
        article_id: article_id.clone(),
        author: Author {
            id: author_id,
            nickname: "reviewer".to_string(),
            avatar: None,
        },
        rating: 4.0,
        content: "Well structured".to_string(),
        creation_date: timestamp(),
        positive_acceptances_count: 3,
        negative_acceptances_count: 1,
        logged_user_acceptance: 0,
    }
}

pub fn comment(id: CommentId, author_id: UserId, article_id: &ArticleId) -> Comment {
    Comment {
        id,
        article_id: article_id.clone(),
        author: Author {
            id: author_id,
            nickname: "commenter".to_string(),
            avatar: None,
        },
        content: "Does this hold for async code too?".to_string(),
        creation_date: timestamp(),
    }
}
