// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use clap::Parser;
use log::info;

use crate::{
    api::ProfilePatch,
    error::Result,
    impersonate,
    model::application::ApplicationStatus,
    router::{self, Decision},
    view,
};

/// Navigate to a portal path and render the view it resolves to. Paths
/// outside the session's route tree redirect the way the browser client
/// would.
#[derive(Debug, Parser)]
pub(crate) struct Command {
    /// The path to open, e.g. /dashboard or /admin/view-as/S123/dashboard.
    path: String,

    /// Update this application's status from an applicants view.
    #[arg(long, requires = "status")]
    application: Option<String>,

    /// The status to apply with --application.
    #[arg(long, value_enum, requires = "application")]
    status: Option<ApplicationStatus>,

    /// New display name to submit through the profile view.
    #[arg(long)]
    name: Option<String>,

    /// New email address to submit through the profile view.
    #[arg(long)]
    email: Option<String>,

    /// New phone number to submit through the profile view.
    #[arg(long)]
    phone: Option<String>,
}

#[async_trait]
impl super::Command for Command {
    async fn execute(self, env: &mut super::Environment<'_>) -> Result<()> {
        env.ctx.bootstrap(env.api).await?;

        let status_change =
            self.application
                .zip(self.status)
                .map(|(application_id, status)| view::StatusChange {
                    application_id,
                    status,
                });
        let profile = if self.name.is_some() || self.email.is_some() || self.phone.is_some() {
            Some(ProfilePatch {
                name: self.name,
                email: self.email,
                phone: self.phone,
            })
        } else {
            None
        };

        // Reachability is re-evaluated on every hop; redirect chains settle
        // on a route that renders for the current role within one step.
        let mut path = self.path;
        let route = loop {
            match router::decide(env.ctx.role(), &path) {
                Decision::Redirect(target) => {
                    info!(r#""{path}" redirects to "{target}""#);
                    println!("-> {target}");
                    path = target.to_owned();
                }
                Decision::Render(route) => break route,
            }
        };

        if let Some(overlay) = impersonate::Overlay::from_route(&route) {
            info!(
                "entering admin overlay for {} {}",
                overlay.target_role, overlay.target_id
            );
        }

        view::render(
            &route,
            env.ctx,
            env.api,
            env.prompt,
            view::FormInput {
                status_change,
                profile,
            },
        )
        .await
    }
}
