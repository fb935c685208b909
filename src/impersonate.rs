// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Admin-only overlay that renders another account's views without a second
//! login. No token is issued for the target and no impersonation flag is kept
//! in the identity context: the overlay is derived from the route alone, so
//! re-entering the same path after a restart re-derives the same view from
//! the URL plus the admin's own credential.

use log::{debug, warn};

use crate::{
    api::PortalApi,
    context::IdentityContext,
    credential::Token,
    error::Result,
    model::{
        application::{Application, ApplicationStatus},
        company::CompanyRecord,
        user::UserRecord,
    },
    role::Role,
    router::Route,
};

pub(crate) const EXIT_ROUTE: &str = "/admin/dashboard";

/// The account whose views the admin is looking at. Exists only while the
/// current route is inside an impersonation subtree; the router only hands
/// those routes to admin sessions, which is what keeps this admin-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Overlay {
    pub(crate) target_id: String,
    pub(crate) target_role: Role,
}

impl Overlay {
    pub(crate) fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::ViewAsStudent { student_id, .. } => Some(Self {
                target_id: student_id.clone(),
                target_role: Role::Student,
            }),
            Route::ViewAsCompany { company_id, .. } => Some(Self {
                target_id: company_id.clone(),
                target_role: Role::Company,
            }),
            Route::Login
            | Route::ForgotPassword
            | Route::GenerateResume { .. }
            | Route::Student(_)
            | Route::Company(_)
            | Route::Admin(_) => None,
        }
    }
}

/// Where the switcher control navigates when the admin picks a different
/// student without leaving impersonation.
pub(crate) fn switch_route(student_id: &str) -> String {
    format!("/admin/view-as/{student_id}/dashboard")
}

/// Looks up the target student's display data in the directory cache,
/// fetching the whole directory first if the cache is empty. An O(n) fetch to
/// resolve one id is tolerable at this scale, and it doubles as the option
/// list for the switcher. `None` means the id is not in the directory; the
/// caller renders a placeholder rather than failing hard.
pub(crate) async fn resolve_student(
    ctx: &mut IdentityContext,
    api: &dyn PortalApi,
    target_id: &str,
) -> Result<Option<UserRecord>> {
    if ctx.ensure_students(api).await? {
        debug!("fetched the student directory to resolve impersonation target {target_id}");
    }
    Ok(ctx
        .directory()
        .students
        .iter()
        .find(|u| u.id == target_id)
        .cloned())
}

/// Company analog of `resolve_student`, used for the view-as-company banner.
pub(crate) async fn resolve_company(
    ctx: &mut IdentityContext,
    api: &dyn PortalApi,
    target_id: &str,
) -> Result<Option<CompanyRecord>> {
    ctx.ensure_companies(api).await?;
    Ok(ctx
        .directory()
        .companies
        .iter()
        .find(|c| c.id == target_id)
        .cloned())
}

/// Applies an applicant-status change unless the view is an admin overlay, in
/// which case the mutation is suppressed before any request is made.
/// Impersonation is an oversight capability: reads match the real company
/// view, writes do not happen.
pub(crate) async fn apply_status_change(
    api: &dyn PortalApi,
    token: &Token,
    application_id: &str,
    status: ApplicationStatus,
    read_only: bool,
) -> Result<Option<Application>> {
    if read_only {
        warn!("status changes are disabled while viewing as a company; nothing was sent");
        return Ok(None);
    }
    api.set_application_status(token, application_id, status)
        .await
        .map(Some)
}
