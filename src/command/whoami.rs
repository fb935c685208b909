// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

/// Resolve the stored credential and show the authenticated identity.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, env: &mut super::Environment<'_>) -> Result<()> {
        env.ctx.bootstrap(env.api).await?;

        match env.ctx.identity() {
            Some(identity) => {
                println!("{} <{}>", identity.name(), identity.email());
                println!("Role: {}", identity.role());
                println!("Home: {}", identity.role().home_route());
            }
            None => println!("Not signed in."),
        }
        Ok(())
    }
}
