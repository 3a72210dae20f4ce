//! Account management calls. All of them are admin-only server side; the UI
//! additionally hides the views behind a role gate.

use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};

use crate::shared::list_controller::fetch::{post_json, put_json};
use crate::shared::list_controller::response::LoadOutcome;

pub async fn create_user(dto: &CreateUserDto, jwt: &str) -> LoadOutcome<User> {
    post_json("/api/users", dto, Some(jwt)).await
}

pub async fn update_user(dto: &UpdateUserDto, jwt: &str) -> LoadOutcome<User> {
    put_json(&format!("/api/users/{}", dto.id), dto, Some(jwt)).await
}

pub async fn change_password(dto: &ChangePasswordDto, jwt: &str) -> LoadOutcome<User> {
    put_json(&format!("/api/users/{}/password", dto.user_id), dto, Some(jwt)).await
}
