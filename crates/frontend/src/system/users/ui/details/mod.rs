//! Create / edit form for an account. Rendered by the user list in place of
//! the table; on failure the server's message is shown and the inputs keep
//! their values so the admin can correct and resubmit.

use contracts::system::auth::{ROLE_ADMIN, ROLE_SUPERVISOR, ROLE_USER};
use contracts::system::users::{ChangePasswordDto, CreateUserDto, UpdateUserDto, User};
use leptos::prelude::*;
use thaw::*;

use crate::system::auth::context::use_session;
use crate::system::users::api;
use crate::shared::list_controller::response::LoadOutcome;

fn none_if_empty(value: String) -> Option<String> {
    let value = value.trim().to_string();
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
pub fn UserDetails(
    /// Existing account to edit; `None` switches the form to create mode.
    target: Option<User>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let is_edit = target.is_some();

    let username = RwSignal::new(
        target.as_ref().map(|u| u.username.clone()).unwrap_or_default(),
    );
    let password = RwSignal::new(String::new());
    let full_name = RwSignal::new(
        target
            .as_ref()
            .and_then(|u| u.full_name.clone())
            .unwrap_or_default(),
    );
    let email = RwSignal::new(
        target
            .as_ref()
            .and_then(|u| u.email.clone())
            .unwrap_or_default(),
    );
    let role = RwSignal::new(
        target
            .as_ref()
            .map(|u| u.role.clone())
            .unwrap_or_else(|| ROLE_USER.to_string()),
    );
    let pharmacy = RwSignal::new(
        target
            .as_ref()
            .and_then(|u| u.pharmacy.clone())
            .unwrap_or_default(),
    );
    let is_active = RwSignal::new(
        target
            .as_ref()
            .map(|u| if u.is_active { "active" } else { "inactive" })
            .unwrap_or("active")
            .to_string(),
    );

    let edit_id = target.as_ref().map(|u| u.id.clone());

    let (error, set_error) = signal(Option::<String>::None);
    let (is_saving, set_is_saving) = signal(false);

    let save = move |_| {
        let Some(jwt) = session.jwt() else {
            session.invalidate();
            return;
        };

        if username.get_untracked().trim().is_empty() {
            set_error.set(Some("Username is required".to_string()));
            return;
        }
        if !is_edit && password.get_untracked().is_empty() {
            set_error.set(Some("Password is required".to_string()));
            return;
        }

        set_is_saving.set(true);
        set_error.set(None);

        let edit_id = edit_id.clone();
        leptos::task::spawn_local(async move {
            let outcome = match &edit_id {
                Some(id) => {
                    let dto = UpdateUserDto {
                        id: id.clone(),
                        full_name: none_if_empty(full_name.get_untracked()),
                        email: none_if_empty(email.get_untracked()),
                        role: role.get_untracked(),
                        pharmacy: none_if_empty(pharmacy.get_untracked()),
                        is_active: is_active.get_untracked() == "active",
                    };
                    let updated = api::update_user(&dto, &jwt).await;
                    // Password changes ride along only when a new one was typed.
                    match (&updated, none_if_empty(password.get_untracked())) {
                        (LoadOutcome::Ok(_), Some(new_password)) => {
                            let dto = ChangePasswordDto {
                                user_id: id.clone(),
                                new_password,
                            };
                            api::change_password(&dto, &jwt).await
                        }
                        _ => updated,
                    }
                }
                None => {
                    let dto = CreateUserDto {
                        username: username.get_untracked().trim().to_string(),
                        password: password.get_untracked(),
                        full_name: none_if_empty(full_name.get_untracked()),
                        email: none_if_empty(email.get_untracked()),
                        role: role.get_untracked(),
                        pharmacy: none_if_empty(pharmacy.get_untracked()),
                    };
                    api::create_user(&dto, &jwt).await
                }
            };

            set_is_saving.set(false);
            match outcome {
                LoadOutcome::Ok(_) => on_saved.run(()),
                LoadOutcome::Unauthenticated => {
                    if session.invalidate() {
                        log::warn!("session rejected by the API, returning to login");
                    }
                }
                LoadOutcome::Denied { message, reason } => {
                    set_error.set(Some(match reason {
                        Some(r) => format!("{} ({})", message, r),
                        None => message,
                    }));
                }
                LoadOutcome::Failed(message) => set_error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="details-form">
            <h2 class="details-form__title">
                {if is_edit { "Edit User" } else { "New User" }}
            </h2>

            {move || {
                if let Some(e) = error.get() {
                    view! {
                        <div class="warning-box warning-box--error">
                            <span class="warning-box__icon">"⚠"</span>
                            <span class="warning-box__text">{e}</span>
                            <button
                                class="warning-box__close"
                                on:click=move |_| set_error.set(None)
                                title="Dismiss"
                            >
                                "×"
                            </button>
                        </div>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}

            <Flex vertical=true gap=FlexGap::Medium>
                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Username:"</Label>
                    <Input value=username disabled=Signal::derive(move || is_edit) />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>
                        {if is_edit { "New password (leave blank to keep):" } else { "Password:" }}
                    </Label>
                    <Input value=password input_type=InputType::Password />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Full name:"</Label>
                    <Input value=full_name />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Email:"</Label>
                    <Input value=email />
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Role:"</Label>
                    <Select value=role>
                        <option value=ROLE_USER>{ROLE_USER}</option>
                        <option value=ROLE_SUPERVISOR>{ROLE_SUPERVISOR}</option>
                        <option value=ROLE_ADMIN>{ROLE_ADMIN}</option>
                    </Select>
                </Flex>

                <Flex vertical=true gap=FlexGap::Small>
                    <Label>"Pharmacy:"</Label>
                    <Input value=pharmacy placeholder="Attached pharmacy, if any" />
                </Flex>

                {is_edit
                    .then(|| {
                        view! {
                            <Flex vertical=true gap=FlexGap::Small>
                                <Label>"Status:"</Label>
                                <Select value=is_active>
                                    <option value="active">"Active"</option>
                                    <option value="inactive">"Inactive"</option>
                                </Select>
                            </Flex>
                        }
                    })}

                <Flex gap=FlexGap::Small>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=save
                        disabled=Signal::derive(move || is_saving.get())
                    >
                        {move || if is_saving.get() { "Saving..." } else { "Save" }}
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_cancel.run(())
                    >
                        "Cancel"
                    </Button>
                </Flex>
            </Flex>
        </div>
    }
}
