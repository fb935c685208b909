// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;

use crate::error::Result;

/// Discard the stored credential and end the session.
#[derive(Debug, Parser)]
pub(crate) struct Command {}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, env: &mut super::Environment<'_>) -> Result<()> {
        env.ctx.logout().await?;
        println!("Signed out. Continue at /login");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        api::fake::{FakeApi, VALID_TOKEN},
        context::IdentityContext,
        credential::{Credential, Token},
        role::Role,
        router::{decide, Decision},
        storage::{Memory, Storage},
    };

    // Logging out while parked inside an impersonation route must tear down
    // the real admin session, and the next navigation to that route must land
    // on the login surface, not the admin dashboard.
    #[tokio::test]
    async fn logout_inside_impersonation_ends_the_admin_session() {
        let mut store = Memory::new();
        store
            .update(&Credential::new(
                Token::from(VALID_TOKEN.to_owned()),
                Role::Admin,
                "root".to_owned(),
            ))
            .await
            .unwrap();

        let api = FakeApi {
            users: vec![FakeApi::student("root", "Root"), FakeApi::student("S123", "Asha")],
            ..FakeApi::default()
        };
        let mut ctx = IdentityContext::new(Box::new(store.clone()));
        ctx.bootstrap(&api).await.unwrap();
        assert_eq!(ctx.role(), Some(Role::Admin));

        ctx.logout().await.unwrap();

        assert!(store.clone().get().await.unwrap().is_none());
        assert_eq!(
            decide(ctx.role(), "/admin/view-as/S123/dashboard"),
            Decision::Redirect("/login")
        );
    }
}
