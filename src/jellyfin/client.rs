use reqwest::{Response, StatusCode};

use super::models::{
    auth::{AuthRequest, AuthResponse},
    items::ItemsResponse,
    users::User,
};
use crate::error::SweepError;

/// Client context for one Jellyfin server. Holds the single reqwest client
/// reused across the run plus the credential attached to every request as an
/// `api_key` query parameter. Once a user is resolved, `UserId` rides along on
/// every request too.
pub struct Jellyfin {
    base_url: String,
    api_key: String,
    user_id: Option<String>,
    http: reqwest::Client,
}

impl Jellyfin {
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            api_key: api_key.into(),
            user_id: None,
            http: reqwest::Client::new(),
        }
    }

    /// Swaps the API key for an access token. Deletion requires an access
    /// token; the long-lived API key alone is not enough.
    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = api_key;
    }

    pub fn set_user_id(&mut self, user_id: String) {
        self.user_id = Some(user_id);
    }

    fn credentials(&self) -> Vec<(&str, &str)> {
        let mut params = vec![("api_key", self.api_key.as_str())];
        if let Some(user_id) = &self.user_id {
            params.push(("UserId", user_id.as_str()));
        }
        params
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Response, anyhow::Error> {
        let response = self
            .http
            .get(format!("{}{}", self.base_url, path))
            .query(&self.credentials())
            .query(query)
            .send()
            .await?;
        Ok(response)
    }

    pub async fn authenticate_by_name(
        &self,
        username: &str,
        password: &str,
    ) -> Result<AuthResponse, anyhow::Error> {
        let body = AuthRequest {
            username: username.to_string(),
            pw: password.to_string(),
        };
        let response = self
            .http
            .post(format!("{}/Users/AuthenticateByName", self.base_url))
            .query(&self.credentials())
            .json(&body)
            .send()
            .await?;
        Ok(response.json().await?)
    }

    pub async fn users(&self) -> Result<Vec<User>, anyhow::Error> {
        let response = self.get("/Users", &[]).await?;
        if !response.status().is_success() {
            return Err(SweepError::ApiCall(format!(
                "User ID retrieval failed with {}. Check your access token",
                reason(response.status())
            ))
            .into());
        }
        Ok(response.json().await?)
    }

    /// One-page search for everything the sweep cares about: recursive,
    /// played, non-favorite, oldest first.
    pub async fn watched_items(&self) -> Result<ItemsResponse, anyhow::Error> {
        let query = [
            ("Recursive", "true"),
            ("IsPlayed", "true"),
            ("SortOrder", "Ascending"),
            ("isFavorite", "false"),
        ];
        let response = self.get("/Items", &query).await?;
        if !response.status().is_success() {
            return Err(SweepError::ApiCall(format!(
                "Item retrieval failed with {}. Check your access token",
                reason(response.status())
            ))
            .into());
        }
        Ok(response.json().await?)
    }

    /// Issues the delete and hands the raw response back; the sweep loop
    /// decides per item whether a failure is worth more than a warning.
    pub async fn delete_item(&self, id: &str) -> Result<Response, anyhow::Error> {
        let response = self
            .http
            .delete(format!("{}/Items/{}", self.base_url, id))
            .query(&self.credentials())
            .send()
            .await?;
        Ok(response)
    }
}

fn reason(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.to_string())
}
