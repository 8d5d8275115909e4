//! Session actions that end in an outbound dispatch.
//!
//! Chat lines honour the persisted mud-mode flag. Credentials are always
//! sent plain and never pre-terminated; the dispatcher owns termination.

use thiserror::Error;

use crate::{
    domain::{outbound::LineMode, settings_key::SettingKey},
    infra::{contracts::SettingsStore, error::AppError},
    transport::Transport,
    usecases::dispatch::{DispatchReport, OutboundDispatcher},
};

pub const TELECONFERENCE_COMMAND: &str = "/go teleconference";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no {0} given and none remembered")]
    MissingCredential(&'static str),
    #[error(transparent)]
    Storage(#[from] AppError),
}

/// What to do with the "remember" flag of a credential.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RememberChoice {
    /// Keep whatever flag is stored.
    #[default]
    Keep,
    Remember,
    Forget,
}

#[derive(Debug, Clone, Copy)]
struct CredentialKeys {
    label: &'static str,
    value: SettingKey,
    remember: SettingKey,
}

const USERNAME: CredentialKeys = CredentialKeys {
    label: "username",
    value: SettingKey::Username,
    remember: SettingKey::RememberUsername,
};

const PASSWORD: CredentialKeys = CredentialKeys {
    label: "password",
    value: SettingKey::Password,
    remember: SettingKey::RememberPassword,
};

/// Sends a chat line, prefixed when mud mode is on.
pub fn send_line(
    store: &dyn SettingsStore,
    dispatcher: &OutboundDispatcher,
    transport: &mut dyn Transport,
    line: &str,
) -> Result<DispatchReport, SessionError> {
    let mode = LineMode::from_flag(store.flag(SettingKey::MudMode)?);
    Ok(dispatcher.dispatch(transport, line, mode))
}

pub fn join_teleconference(
    store: &dyn SettingsStore,
    dispatcher: &OutboundDispatcher,
    transport: &mut dyn Transport,
) -> Result<DispatchReport, SessionError> {
    send_line(store, dispatcher, transport, TELECONFERENCE_COMMAND)
}

/// Returns the stored password when remembering is on.
pub fn remembered_password(store: &dyn SettingsStore) -> Result<Option<String>, SessionError> {
    remembered(store, PASSWORD)
}

pub fn send_username(
    store: &mut dyn SettingsStore,
    dispatcher: &OutboundDispatcher,
    transport: &mut dyn Transport,
    username: Option<&str>,
    choice: RememberChoice,
) -> Result<DispatchReport, SessionError> {
    let username = settle_credential(store, USERNAME, username, choice)?;
    Ok(dispatcher.dispatch(transport, &username, LineMode::Plain))
}

pub fn send_password(
    store: &mut dyn SettingsStore,
    dispatcher: &OutboundDispatcher,
    transport: &mut dyn Transport,
    password: Option<&str>,
    choice: RememberChoice,
) -> Result<DispatchReport, SessionError> {
    let password = settle_credential(store, PASSWORD, password, choice)?;

    transport.conceal(true);
    let report = dispatcher.dispatch(transport, &password, LineMode::Plain);
    transport.conceal(false);

    Ok(report)
}

fn remembered(
    store: &dyn SettingsStore,
    keys: CredentialKeys,
) -> Result<Option<String>, SessionError> {
    if !store.flag(keys.remember)? {
        return Ok(None);
    }

    Ok(store.text(keys.value)?)
}

/// Applies the remember choice and resolves the value to send.
fn settle_credential(
    store: &mut dyn SettingsStore,
    keys: CredentialKeys,
    given: Option<&str>,
    choice: RememberChoice,
) -> Result<String, SessionError> {
    let remember = match choice {
        RememberChoice::Keep => store.flag(keys.remember)?,
        RememberChoice::Remember => true,
        RememberChoice::Forget => false,
    };

    let value = match given {
        Some(value) => value.to_owned(),
        None => remembered(store, keys)?.ok_or(SessionError::MissingCredential(keys.label))?,
    };

    store.set_flag(keys.remember, remember)?;
    if remember {
        store.set_text(keys.value, &value)?;
    } else {
        store.remove(keys.value)?;
    }

    tracing::debug!(credential = keys.label, remember, "credential settled");
    Ok(value)
}
