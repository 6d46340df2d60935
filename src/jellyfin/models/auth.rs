use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct AuthRequest {
    #[serde(rename = "Username")]
    pub username: String,
    #[serde(rename = "Pw")]
    pub pw: String,
}

#[derive(Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(rename = "AccessToken")]
    pub access_token: String,
}
