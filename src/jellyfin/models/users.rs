use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct User {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}
