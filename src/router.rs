// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Single source of truth for which routes a session may reach. A pure
//! function of (role, path), re-evaluated on every navigation and never
//! cached, since the role can change between login and logout within one
//! process lifetime.

use crate::role::Role;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum StudentPage {
    Dashboard,
    Jobs,
    MyApplications,
    CreateResume,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum CompanyPage {
    Dashboard,
    PostJob,
    Applicants { job_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum AdminPage {
    Dashboard,
    Students,
    Companies,
    Jobs,
    ChangePassword,
    Profile,
}

/// The slice of the student tree available under impersonation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ViewAsStudentPage {
    Dashboard,
    MyApplications,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ViewAsCompanyPage {
    Dashboard,
    Applicants { job_id: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Login,
    ForgotPassword,
    GenerateResume {
        student_id: String,
    },
    Student(StudentPage),
    Company(CompanyPage),
    Admin(AdminPage),
    ViewAsStudent {
        student_id: String,
        page: ViewAsStudentPage,
    },
    ViewAsCompany {
        company_id: String,
        page: ViewAsCompanyPage,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Decision {
    Render(Route),
    Redirect(&'static str),
}

fn parse(path: &str) -> Option<Route> {
    let trimmed = path.trim_end_matches('/');
    let segments: Vec<&str> = trimmed.strip_prefix('/')?.split('/').collect();

    match segments.as_slice() {
        ["login"] => Some(Route::Login),
        ["forgot-password"] => Some(Route::ForgotPassword),
        ["generate-resume", id] if !id.is_empty() => Some(Route::GenerateResume {
            student_id: (*id).to_owned(),
        }),

        ["dashboard"] => Some(Route::Student(StudentPage::Dashboard)),
        ["jobs"] => Some(Route::Student(StudentPage::Jobs)),
        ["my-applications"] => Some(Route::Student(StudentPage::MyApplications)),
        ["create-resume"] => Some(Route::Student(StudentPage::CreateResume)),

        ["company", "dashboard"] => Some(Route::Company(CompanyPage::Dashboard)),
        ["company", "post-job"] => Some(Route::Company(CompanyPage::PostJob)),
        ["company", "jobs", job_id, "applicants"] if !job_id.is_empty() => {
            Some(Route::Company(CompanyPage::Applicants {
                job_id: (*job_id).to_owned(),
            }))
        }

        ["admin", "dashboard"] => Some(Route::Admin(AdminPage::Dashboard)),
        ["admin", "students"] => Some(Route::Admin(AdminPage::Students)),
        ["admin", "companies"] => Some(Route::Admin(AdminPage::Companies)),
        ["admin", "jobs"] => Some(Route::Admin(AdminPage::Jobs)),
        ["admin", "change-password"] => Some(Route::Admin(AdminPage::ChangePassword)),
        ["admin", "profile"] => Some(Route::Admin(AdminPage::Profile)),

        ["admin", "view-as", student_id, "dashboard"] if !student_id.is_empty() => {
            Some(Route::ViewAsStudent {
                student_id: (*student_id).to_owned(),
                page: ViewAsStudentPage::Dashboard,
            })
        }
        ["admin", "view-as", student_id, "my-applications"] if !student_id.is_empty() => {
            Some(Route::ViewAsStudent {
                student_id: (*student_id).to_owned(),
                page: ViewAsStudentPage::MyApplications,
            })
        }
        ["admin", "view-as-company", company_id, "dashboard"] if !company_id.is_empty() => {
            Some(Route::ViewAsCompany {
                company_id: (*company_id).to_owned(),
                page: ViewAsCompanyPage::Dashboard,
            })
        }
        ["admin", "view-as-company", company_id, "jobs", job_id, "applicants"]
            if !company_id.is_empty() && !job_id.is_empty() =>
        {
            Some(Route::ViewAsCompany {
                company_id: (*company_id).to_owned(),
                page: ViewAsCompanyPage::Applicants {
                    job_id: (*job_id).to_owned(),
                },
            })
        }

        _ => None,
    }
}

/// Decides what a navigation to `path` does for the given session state.
/// Unknown paths, and known paths outside the session's route tree, redirect
/// to the session's home route; for an unauthenticated session that is the
/// login route. The login and forgot-password routes are always reachable,
/// and the resume route is reachable by every authenticated role, since
/// companies view applicant resumes and students their own.
pub(crate) fn decide(role: Option<Role>, path: &str) -> Decision {
    let home = role.map_or("/login", Role::home_route);

    let Some(route) = parse(path) else {
        return Decision::Redirect(home);
    };

    let reachable = match (&route, role) {
        (Route::Login | Route::ForgotPassword, _) => true,
        (Route::GenerateResume { .. }, Some(_)) => true,
        (Route::Student(_), Some(Role::Student)) => true,
        (Route::Company(_), Some(Role::Company)) => true,
        (
            Route::Admin(_) | Route::ViewAsStudent { .. } | Route::ViewAsCompany { .. },
            Some(Role::Admin),
        ) => true,
        _ => false,
    };

    if reachable {
        Decision::Render(route)
    } else {
        Decision::Redirect(home)
    }
}
