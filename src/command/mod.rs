// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;

use crate::{api::PortalApi, context::IdentityContext, error::Result, password::Prompt};

pub(crate) mod login;
pub(crate) mod logout;
pub(crate) mod open;
pub(crate) mod whoami;

/// Everything a command needs to run: the API client, the session context,
/// and an interactive password source.
pub(crate) struct Environment<'run> {
    pub(crate) api: &'run dyn PortalApi,
    pub(crate) ctx: &'run mut IdentityContext,
    pub(crate) prompt: &'run dyn Prompt,
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, env: &mut Environment<'_>) -> Result<()>;
}
