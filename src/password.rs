// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use secrecy::SecretString;
use tokio::task;

use crate::error::{self, Result};

#[async_trait]
pub(crate) trait Prompt: Send + Sync {
    async fn prompt(&self, label: &str) -> Result<Option<SecretString>>;
}

#[async_trait]
impl<T: Prompt + ?Sized> Prompt for Box<T> {
    async fn prompt(&self, label: &str) -> Result<Option<SecretString>> {
        (**self).prompt(label).await
    }
}

pub(crate) struct RpasswordPrompt;

#[async_trait]
impl Prompt for RpasswordPrompt {
    async fn prompt(&self, label: &str) -> Result<Option<SecretString>> {
        let prompt_text = format!("{label}: ");
        Ok(Some(
            task::spawn_blocking(move || {
                rpassword::prompt_password(prompt_text).map(SecretString::new)
            })
            .await??,
        ))
    }
}

pub(crate) async fn require(prompt: &dyn Prompt, label: &str) -> Result<SecretString> {
    prompt
        .prompt(label)
        .await?
        .ok_or_else(|| error::Password::NoPrompt.into())
}
