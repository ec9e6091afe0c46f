use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identity handed over by the upstream SSO gateway after it verified the user.
#[derive(Serialize, Deserialize, Clone, Debug, Default, ToSchema)]
#[serde(default)]
pub struct LoginDto {
    pub user_id: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct UserDto {
    pub user_id: String,
}
