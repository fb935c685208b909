// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::{error::Result, password, role::Role};

/// Sign in to the portal and persist the issued credential.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The account role to authenticate as.
    #[arg(value_enum)]
    role: Role,

    /// The portal username.
    username: String,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, env: &mut super::Environment<'_>) -> Result<()> {
        let secret = password::require(env.prompt, "Password").await?;
        let response = env.api.login(self.role, &self.username, &secret).await?;

        // Trust the server's echo of the role and username over our own
        // arguments, the way the login form does.
        let role = env
            .ctx
            .login(env.api, response.token, response.role, response.username)
            .await?;

        if let Some(identity) = env.ctx.identity() {
            println!("Logged in as {} ({})", identity.name(), role);
        }
        println!("Continue at {}", role.home_route());
        Ok(())
    }
}
