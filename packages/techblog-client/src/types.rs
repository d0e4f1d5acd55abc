//! Wire types for the application and identity services.
//!
//! Field names follow the backend DTOs (camelCase, with the `...DTO` suffix
//! on some nested objects).

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::article::ArticleStatus;
use crate::id::{AccountId, ArticleId, CommentId, OpinionId, UserId};

// ============================================================================
// Users
// ============================================================================

/// Application-service user profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub user_account_id: AccountId,
    pub nickname: String,
    #[serde(default)]
    pub firstname: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub email: String,
    /// Base64-encoded JPEG
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_reviewer: Option<bool>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname).trim().to_string()
    }
}

/// The author block embedded in articles and opinions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: UserId,
    pub nickname: String,
    #[serde(default)]
    pub avatar: Option<String>,
}

/// Identity-provider account as returned by the admin user search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: AccountId,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
}

// ============================================================================
// Articles
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TechnologyCategory {
    pub id: i64,
    pub name: String,
    #[serde(rename = "parentTechnologyCategoryDTO", default)]
    pub parent: Option<Box<TechnologyCategory>>,
}

impl TechnologyCategory {
    /// Category names from the root down to this category.
    pub fn path(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        let mut current = self.parent.as_deref();
        while let Some(category) = current {
            names.push(category.name.as_str());
            current = category.parent.as_deref();
        }
        names.reverse();
        names
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technology {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(rename = "technologyCategoryDTO")]
    pub category: TechnologyCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub content: String,
    pub status: ArticleStatus,
    #[serde(rename = "authorDTO")]
    pub author: Author,
    #[serde(rename = "technologyDTO")]
    pub technology: Technology,
    pub creation_date: NaiveDateTime,
    pub modification_date: NaiveDateTime,
    #[serde(default)]
    pub average_rating: Option<f64>,
}

/// Reviewer feedback attached to a refused or published article.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationMessage {
    pub message: String,
    #[serde(default)]
    pub creation_date: Option<NaiveDateTime>,
}

// ============================================================================
// Opinions and acceptances
// ============================================================================

/// A single up/down vote. Neutral is represented by the absence of a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
pub enum Vote {
    Up,
    Down,
}

impl Vote {
    pub fn value(self) -> i8 {
        match self {
            Vote::Up => 1,
            Vote::Down => -1,
        }
    }

    /// Decode the `loggedUserAcceptance` wire value (-1, 0 or 1).
    pub fn from_acceptance(value: i8) -> Option<Vote> {
        match value {
            1 => Some(Vote::Up),
            -1 => Some(Vote::Down),
            _ => None,
        }
    }
}

impl From<Vote> for i8 {
    fn from(vote: Vote) -> i8 {
        vote.value()
    }
}

impl TryFrom<i8> for Vote {
    type Error = String;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        Vote::from_acceptance(value).ok_or_else(|| format!("invalid vote value: {}", value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opinion {
    pub id: OpinionId,
    pub article_id: ArticleId,
    pub author: Author,
    /// 0 to 5, fractional
    pub rating: f64,
    pub content: String,
    pub creation_date: NaiveDateTime,
    #[serde(default)]
    pub positive_acceptances_count: u32,
    #[serde(default)]
    pub negative_acceptances_count: u32,
    /// The requesting viewer's own vote: -1, 0 or 1
    #[serde(default)]
    pub logged_user_acceptance: i8,
}

impl Opinion {
    pub fn viewer_vote(&self) -> Option<Vote> {
        Vote::from_acceptance(self.logged_user_acceptance)
    }
}

/// Body of `POST /opinions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOpinion {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub rating: f64,
    pub content: String,
}

/// Body of `PUT /opinions/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOpinion {
    pub rating: f64,
    pub content: String,
}

/// Body of `POST /acceptances`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAcceptance {
    pub opinion_id: OpinionId,
    pub user_id: UserId,
    pub value: Vote,
}

/// Body of `DELETE /acceptances`: one acceptance per (opinion, user).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AcceptanceKey {
    pub opinion_id: OpinionId,
    pub user_id: UserId,
}

// ============================================================================
// Comments
// ============================================================================

/// Free-text discussion under an article. Unlike opinions, comments carry
/// no rating and no acceptance votes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub article_id: ArticleId,
    pub author: Author,
    pub content: String,
    pub creation_date: NaiveDateTime,
}

/// Body of `POST /comments`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    pub article_id: ArticleId,
    pub author_id: UserId,
    pub content: String,
}

// ============================================================================
// Identity service
// ============================================================================

/// OpenID Connect token endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Seconds
    pub expires_in: i64,
    pub refresh_token: String,
    /// Seconds
    pub refresh_expires_in: i64,
}
