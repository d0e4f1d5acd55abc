//! Administrative user search and details.

use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn};

use crate::api::{IdentityApi, UserApi};
use crate::error::Result;
use crate::id::{AccountId, UserId};
use crate::notification::Notifier;
use crate::types::User;

pub const PASSWORD_RESET_MESSAGE: &str = "Password has been reset";
pub const PASSWORD_RESET_FAILED_MESSAGE: &str = "Failed to reset password";

/// One row of the user search table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRow {
    /// Display number, from 1
    pub row: usize,
    pub user_id: UserId,
    pub user_account_id: AccountId,
    pub username: String,
    pub nickname: String,
    pub firstname: String,
    pub surname: String,
}

impl UserRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.firstname, self.surname)
    }
}

/// Search identity accounts by username and join each with its
/// application profile. Rows keep the account order; accounts whose profile
/// cannot be fetched are left out.
pub async fn search_users<I, U>(identity: &I, users: &U, username: &str) -> Result<Vec<UserRow>>
where
    I: IdentityApi + ?Sized,
    U: UserApi + ?Sized,
{
    let accounts = identity.search_accounts(username).await?;
    if accounts.is_empty() {
        return Ok(Vec::new());
    }

    let profiles = join_all(accounts.iter().map(|a| users.get_user_by_account(a.id))).await;

    let rows: Vec<UserRow> = accounts
        .into_iter()
        .zip(profiles)
        .filter_map(|(account, profile)| match profile {
            Ok(user) => Some((account.username, user)),
            Err(e) => {
                warn!(account_id = %account.id, error = %e, "Skipping account without profile");
                None
            }
        })
        .enumerate()
        .map(|(i, (username, user))| UserRow {
            row: i + 1,
            user_id: user.id,
            user_account_id: user.user_account_id,
            username,
            nickname: user.nickname,
            firstname: user.firstname,
            surname: user.surname,
        })
        .collect();

    info!(query = %username, count = rows.len(), "User search");
    Ok(rows)
}

/// Profile plus the identity-provider username for the details screen.
pub async fn user_details<I, U>(
    identity: &I,
    users: &U,
    user_id: UserId,
    account_id: AccountId,
) -> Result<(User, String)>
where
    I: IdentityApi + ?Sized,
    U: UserApi + ?Sized,
{
    let (user, account) = futures::join!(users.get_user(user_id), identity.get_account(account_id));
    Ok((user?, account?.username))
}

/// Trigger a password reset for the account. Returns whether it succeeded.
pub async fn reset_password<I>(identity: &I, notifier: &Notifier, account_id: AccountId) -> bool
where
    I: IdentityApi + ?Sized,
{
    match identity.reset_password(account_id).await {
        Ok(()) => {
            info!(%account_id, "Password reset");
            notifier.success(PASSWORD_RESET_MESSAGE);
            true
        }
        Err(e) => {
            warn!(%account_id, error = %e, "Password reset failed");
            notifier.error(PASSWORD_RESET_FAILED_MESSAGE);
            false
        }
    }
}
