// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal renderings of the portal's views. Each view fetches what it
//! needs, surfaces errors inline through the command's error path, and prints
//! a populated table; independent resources for one view are fetched
//! concurrently and awaited jointly, so a single failure surfaces as one
//! error rather than partial data.

use tabled::{settings::Style, Table, Tabled};

use crate::{
    api::{PortalApi, ProfilePatch},
    context::IdentityContext,
    error::{self, Result},
    impersonate,
    model::application::{Application, ApplicationStatus},
    password::{self, Prompt},
    router::{AdminPage, CompanyPage, Route, StudentPage, ViewAsCompanyPage, ViewAsStudentPage},
};

/// An applicant-status mutation requested alongside a navigation, the CLI
/// stand-in for the status select control on the applicants page.
pub(crate) struct StatusChange {
    pub(crate) application_id: String,
    pub(crate) status: ApplicationStatus,
}

/// Form inputs a navigation can carry, standing in for the portal's inline
/// forms: a status change for an applicants view, a profile patch for the
/// profile view.
#[derive(Default)]
pub(crate) struct FormInput {
    pub(crate) status_change: Option<StatusChange>,
    pub(crate) profile: Option<ProfilePatch>,
}

#[derive(Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
}

#[derive(Tabled)]
struct StatRow {
    #[tabled(rename = "Metric")]
    metric: &'static str,
    #[tabled(rename = "Value")]
    value: usize,
}

#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Skills")]
    skills: String,
}

#[derive(Tabled)]
struct ApplicationRow {
    #[tabled(rename = "Job")]
    job: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Applied On")]
    applied_on: String,
}

#[derive(Tabled)]
struct ApplicantRow {
    #[tabled(rename = "Application")]
    id: String,
    #[tabled(rename = "Student Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Resume")]
    resume: String,
}

#[derive(Tabled)]
struct DirectoryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
}

fn print_table<T: Tabled>(rows: impl IntoIterator<Item = T>) {
    println!("{}", Table::new(rows).with(Style::rounded()));
}

pub(crate) async fn render(
    route: &Route,
    ctx: &mut IdentityContext,
    api: &dyn PortalApi,
    prompt: &dyn Prompt,
    input: FormInput,
) -> Result<()> {
    match route {
        Route::Login => {
            println!(
                "Not signed in. Run `{} login <role> <username>` to authenticate.",
                *crate::metadata::CLIENT_NAME
            );
            Ok(())
        }
        Route::ForgotPassword => {
            println!("Password resets go through the portal's one-time-code flow; ask the placement office to start one for your account.");
            Ok(())
        }
        Route::GenerateResume { student_id } => resume(ctx, api, student_id).await,
        Route::Student(page) => {
            let student_id = active_identity_id(ctx)?;
            student_page(page, ctx, api, &student_id).await
        }
        Route::Company(page) => {
            let company_id = active_identity_id(ctx)?;
            company_page(page, ctx, api, &company_id, false, input.status_change).await
        }
        Route::Admin(page) => admin_page(page, ctx, api, prompt, input.profile).await,
        Route::ViewAsStudent { student_id, page } => {
            view_as_student(ctx, api, student_id, page).await
        }
        Route::ViewAsCompany { company_id, page } => {
            let Some(company) = impersonate::resolve_company(ctx, api, company_id).await? else {
                println!("ADMIN VIEW: company {company_id} is not in the directory yet.");
                return Ok(());
            };
            println!("ADMIN VIEW: viewing as company {} (read-only)", company.name);
            let company_view = match page {
                ViewAsCompanyPage::Dashboard => CompanyPage::Dashboard,
                ViewAsCompanyPage::Applicants { job_id } => CompanyPage::Applicants {
                    job_id: job_id.clone(),
                },
            };
            company_page(&company_view, ctx, api, company_id, true, input.status_change).await
        }
    }
}

fn active_identity_id(ctx: &IdentityContext) -> Result<String> {
    ctx.identity()
        .map(|identity| identity.id().to_owned())
        .ok_or_else(|| error::Session::NoCredential.into())
}

/// The student route tree. `student_id` is the identity every read is keyed
/// by: the session's own id for a real student, the target's id under
/// impersonation.
async fn student_page(
    page: &StudentPage,
    ctx: &IdentityContext,
    api: &dyn PortalApi,
    student_id: &str,
) -> Result<()> {
    let token = ctx.session_token()?.clone();

    match page {
        StudentPage::Dashboard => {
            let record = api.user(&token, student_id).await?;
            print_table([
                FieldRow {
                    field: "Name",
                    value: record.name,
                },
                FieldRow {
                    field: "Email",
                    value: record.email,
                },
                FieldRow {
                    field: "Phone",
                    value: record.phone.unwrap_or_default(),
                },
                FieldRow {
                    field: "Skills",
                    value: record.skills.join(", "),
                },
            ]);
            Ok(())
        }
        StudentPage::Jobs => {
            let (jobs, applications) = tokio::try_join!(
                api.open_jobs(&token),
                api.student_applications(&token, student_id)
            )?;
            let applied =
                |job_id: &str| applications.iter().any(|a| application_job_id(a) == job_id);
            print_table(jobs.into_iter().map(|job| {
                let status = if applied(&job.id) {
                    "Applied".to_owned()
                } else {
                    job.status.clone()
                };
                let company = job.company_name().to_owned();
                JobRow {
                    id: job.id,
                    title: job.title,
                    company,
                    status,
                    skills: job.required_skills.join(", "),
                }
            }));
            Ok(())
        }
        StudentPage::MyApplications => {
            let applications = api.student_applications(&token, student_id).await?;
            print_table(applications.into_iter().map(|application| ApplicationRow {
                job: application
                    .job
                    .as_ref()
                    .map(|job| job.title().to_owned())
                    .unwrap_or_default(),
                status: application.status.to_string(),
                applied_on: application.applied_on.unwrap_or_default(),
            }));
            Ok(())
        }
        StudentPage::CreateResume => {
            resume_record(api, &token, student_id).await?;
            println!("Edit these sections through the portal's resume form.");
            Ok(())
        }
    }
}

fn application_job_id(application: &Application) -> &str {
    use crate::model::application::JobLink;

    match application.job.as_ref() {
        Some(JobLink::Full(job)) => &job.id,
        Some(JobLink::Id(id)) => id,
        None => "",
    }
}

async fn resume(ctx: &IdentityContext, api: &dyn PortalApi, student_id: &str) -> Result<()> {
    let token = ctx.session_token()?.clone();
    resume_record(api, &token, student_id).await
}

async fn resume_record(
    api: &dyn PortalApi,
    token: &crate::credential::Token,
    student_id: &str,
) -> Result<()> {
    let record = api.user(token, student_id).await?;
    print_table([
        FieldRow {
            field: "Name",
            value: record.name,
        },
        FieldRow {
            field: "Email",
            value: record.email,
        },
        FieldRow {
            field: "Summary",
            value: record.summary.unwrap_or_default(),
        },
        FieldRow {
            field: "Education",
            value: record.education.unwrap_or_default(),
        },
        FieldRow {
            field: "Experience",
            value: record.experience.unwrap_or_default(),
        },
        FieldRow {
            field: "Skills",
            value: record.skills.join(", "),
        },
    ]);
    Ok(())
}

/// The company route tree. `read_only` marks the admin oversight overlay,
/// where the status mutation is suppressed.
async fn company_page(
    page: &CompanyPage,
    ctx: &IdentityContext,
    api: &dyn PortalApi,
    company_id: &str,
    read_only: bool,
    status_change: Option<StatusChange>,
) -> Result<()> {
    let token = ctx.session_token()?.clone();

    match page {
        CompanyPage::Dashboard => {
            let jobs = api.company_jobs(&token, company_id).await?;
            print_table(jobs.into_iter().map(|job| JobRow {
                company: job.company_name().to_owned(),
                id: job.id,
                title: job.title,
                status: job.status,
                skills: job.required_skills.join(", "),
            }));
            Ok(())
        }
        CompanyPage::PostJob => {
            println!("Job postings are created through the portal's posting form.");
            Ok(())
        }
        CompanyPage::Applicants { job_id } => {
            if let Some(change) = status_change {
                let updated = impersonate::apply_status_change(
                    api,
                    &token,
                    &change.application_id,
                    change.status,
                    read_only,
                )
                .await?;
                if let Some(application) = updated {
                    println!(
                        "Application {} is now {}.",
                        application.id, application.status
                    );
                }
            }

            let (job, applicants) = tokio::try_join!(
                api.job(&token, job_id),
                api.job_applications(&token, job_id)
            )?;

            println!("Applicants for: {}", job.title);
            print_table(applicants.into_iter().map(|application| ApplicantRow {
                id: application.id,
                name: application
                    .student
                    .as_ref()
                    .map(|s| s.name.clone())
                    .unwrap_or_default(),
                email: application
                    .student
                    .as_ref()
                    .map(|s| s.email.clone())
                    .unwrap_or_default(),
                status: application.status.to_string(),
                resume: application
                    .student
                    .as_ref()
                    .map(|s| format!("/generate-resume/{}", s.id))
                    .unwrap_or_default(),
            }));
            Ok(())
        }
    }
}

async fn admin_page(
    page: &AdminPage,
    ctx: &mut IdentityContext,
    api: &dyn PortalApi,
    prompt: &dyn Prompt,
    profile: Option<ProfilePatch>,
) -> Result<()> {
    let token = ctx.session_token()?.clone();

    match page {
        AdminPage::Dashboard => {
            let (users, companies, jobs) = tokio::try_join!(
                api.users(&token),
                api.companies(&token),
                api.open_jobs(&token)
            )?;
            print_table([
                StatRow {
                    metric: "Total Students",
                    value: users.len(),
                },
                StatRow {
                    metric: "Companies Onboard",
                    value: companies.len(),
                },
                StatRow {
                    metric: "Open Jobs",
                    value: jobs.iter().filter(|j| j.is_open()).count(),
                },
            ]);
            // Quick-view shortcut: the first student doubles as the default
            // impersonation target.
            if let Some(student) = users.first() {
                println!(
                    "View as student: {} ({})",
                    student.name,
                    impersonate::switch_route(&student.id)
                );
            }
            Ok(())
        }
        AdminPage::Students => {
            ctx.refresh_students(api).await?;
            print_table(ctx.directory().students.iter().map(|student| DirectoryRow {
                id: student.id.clone(),
                name: student.name.clone(),
                email: student.email.clone(),
            }));
            Ok(())
        }
        AdminPage::Companies => {
            ctx.refresh_companies(api).await?;
            print_table(ctx.directory().companies.iter().map(|company| DirectoryRow {
                id: company.id.clone(),
                name: company.name.clone(),
                email: company.email.clone(),
            }));
            Ok(())
        }
        AdminPage::Jobs => {
            ctx.refresh_jobs(api).await?;
            print_table(ctx.directory().jobs.iter().map(|job| JobRow {
                id: job.id.clone(),
                title: job.title.clone(),
                company: job.company_name().to_owned(),
                status: job.status.clone(),
                skills: job.required_skills.join(", "),
            }));
            Ok(())
        }
        AdminPage::ChangePassword => {
            let current = password::require(prompt, "Current password").await?;
            let new = password::require(prompt, "New password").await?;
            api.change_password(&token, &current, &new).await?;
            println!("Password updated.");
            Ok(())
        }
        AdminPage::Profile => {
            if let Some(patch) = profile {
                let record = api.update_profile(&token, &patch).await?;
                println!("Profile updated.");
                print_table([
                    FieldRow {
                        field: "Name",
                        value: record.name,
                    },
                    FieldRow {
                        field: "Email",
                        value: record.email,
                    },
                    FieldRow {
                        field: "Phone",
                        value: record.phone.unwrap_or_default(),
                    },
                ]);
                return Ok(());
            }

            let identity = ctx
                .identity()
                .ok_or_else(|| error::Error::from(error::Session::NoCredential))?;
            print_table([
                FieldRow {
                    field: "Name",
                    value: identity.name().to_owned(),
                },
                FieldRow {
                    field: "Email",
                    value: identity.email().to_owned(),
                },
                FieldRow {
                    field: "Role",
                    value: identity.role().to_string(),
                },
            ]);
            Ok(())
        }
    }
}

async fn view_as_student(
    ctx: &mut IdentityContext,
    api: &dyn PortalApi,
    student_id: &str,
    page: &ViewAsStudentPage,
) -> Result<()> {
    let Some(target) = impersonate::resolve_student(ctx, api, student_id).await? else {
        println!("ADMIN VIEW: student {student_id} is not in the directory yet.");
        return Ok(());
    };

    println!("ADMIN VIEW: viewing as student {}", target.name);
    let switch_targets = ctx
        .directory()
        .students
        .iter()
        .filter(|s| s.id != student_id)
        .map(|s| format!("{} ({})", s.name, impersonate::switch_route(&s.id)))
        .collect::<Vec<_>>();
    if !switch_targets.is_empty() {
        println!("Switch student: {}", switch_targets.join(", "));
    }
    println!("Exit student view: {}", impersonate::EXIT_ROUTE);

    let student_view = match page {
        ViewAsStudentPage::Dashboard => StudentPage::Dashboard,
        ViewAsStudentPage::MyApplications => StudentPage::MyApplications,
    };
    student_page(&student_view, ctx, api, student_id).await
}
