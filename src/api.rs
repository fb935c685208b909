// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{
    credential::Token,
    error::{self, Result},
    model::{
        application::{Application, ApplicationStatus},
        company::CompanyRecord,
        job::Job,
        user::UserRecord,
    },
    role::Role,
};

#[derive(Clone, Deserialize)]
pub(crate) struct LoginResponse {
    pub(crate) token: Token,
    pub(crate) role: Role,
    pub(crate) username: String,
}

#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProfilePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) phone: Option<String>,
}

/// The portal's REST surface. Everything except `login` is bearer-token
/// authenticated. Commands and views depend on this trait rather than on the
/// HTTP implementation so they can run against an in-process fake.
#[async_trait]
pub(crate) trait PortalApi: Send + Sync {
    async fn login(
        &self,
        role: Role,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse>;

    async fn current_user(&self, token: &Token) -> Result<UserRecord>;
    async fn current_company(&self, token: &Token) -> Result<CompanyRecord>;

    async fn users(&self, token: &Token) -> Result<Vec<UserRecord>>;
    async fn user(&self, token: &Token, id: &str) -> Result<UserRecord>;
    async fn companies(&self, token: &Token) -> Result<Vec<CompanyRecord>>;
    async fn open_jobs(&self, token: &Token) -> Result<Vec<Job>>;
    async fn all_jobs(&self, token: &Token) -> Result<Vec<Job>>;
    async fn job(&self, token: &Token, id: &str) -> Result<Job>;
    async fn company_jobs(&self, token: &Token, company_id: &str) -> Result<Vec<Job>>;
    async fn job_applications(&self, token: &Token, job_id: &str) -> Result<Vec<Application>>;
    async fn student_applications(
        &self,
        token: &Token,
        student_id: &str,
    ) -> Result<Vec<Application>>;

    async fn set_application_status(
        &self,
        token: &Token,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application>;
    async fn update_profile(&self, token: &Token, patch: &ProfilePatch) -> Result<UserRecord>;
    async fn change_password(
        &self,
        token: &Token,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<()>;
}

/// Error payload the backend attaches to non-success responses.
#[derive(Deserialize)]
struct ErrorBody {
    msg: String,
}

pub(crate) struct HttpApi {
    base: Url,
    http: reqwest::Client,
}

impl HttpApi {
    pub(crate) fn new(base: Url) -> Self {
        Self {
            base,
            http: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base.as_str().trim_end_matches('/'), path)
    }

    async fn message(response: reqwest::Response, status: reqwest::StatusCode) -> String {
        response
            .json::<ErrorBody>()
            .await
            .map(|body| body.msg)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("unrecognized status")
                    .to_owned()
            })
    }

    async fn read<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(error::Api::Server {
                status: status.as_u16(),
                message: Self::message(response, status).await,
            }
            .into())
        }
    }

    /// Like `read`, but for write endpoints, where a non-success status is a
    /// rejected form rather than a broken session.
    async fn read_write<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            Ok(response.json().await?)
        } else {
            Err(error::Api::Validation(Self::message(response, status).await).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, token: &Token, path: &str) -> Result<T> {
        let response = self
            .http
            .get(self.endpoint(path))
            .bearer_auth(token.expose())
            .send()
            .await?;
        Self::read(response).await
    }
}

#[async_trait]
impl PortalApi for HttpApi {
    async fn login(
        &self,
        role: Role,
        username: &str,
        password: &SecretString,
    ) -> Result<LoginResponse> {
        let response = self
            .http
            .post(self.endpoint("/auth/login"))
            .json(&serde_json::json!({
                "username": username,
                "password": password.expose_secret(),
                "role": role,
            }))
            .send()
            .await?;
        Self::read(response).await
    }

    async fn current_user(&self, token: &Token) -> Result<UserRecord> {
        self.get(token, "/auth").await
    }

    async fn current_company(&self, token: &Token) -> Result<CompanyRecord> {
        self.get(token, "/companies/me").await
    }

    async fn users(&self, token: &Token) -> Result<Vec<UserRecord>> {
        self.get(token, "/users").await
    }

    async fn user(&self, token: &Token, id: &str) -> Result<UserRecord> {
        self.get(token, &format!("/users/{id}")).await
    }

    async fn companies(&self, token: &Token) -> Result<Vec<CompanyRecord>> {
        self.get(token, "/companies").await
    }

    async fn open_jobs(&self, token: &Token) -> Result<Vec<Job>> {
        self.get(token, "/jobs").await
    }

    async fn all_jobs(&self, token: &Token) -> Result<Vec<Job>> {
        self.get(token, "/jobs/all").await
    }

    async fn job(&self, token: &Token, id: &str) -> Result<Job> {
        self.get(token, &format!("/jobs/{id}")).await
    }

    async fn company_jobs(&self, token: &Token, company_id: &str) -> Result<Vec<Job>> {
        self.get(token, &format!("/jobs/company/{company_id}")).await
    }

    async fn job_applications(&self, token: &Token, job_id: &str) -> Result<Vec<Application>> {
        self.get(token, &format!("/applications/job/{job_id}")).await
    }

    async fn student_applications(
        &self,
        token: &Token,
        student_id: &str,
    ) -> Result<Vec<Application>> {
        self.get(token, &format!("/applications/student/{student_id}"))
            .await
    }

    async fn set_application_status(
        &self,
        token: &Token,
        id: &str,
        status: ApplicationStatus,
    ) -> Result<Application> {
        let response = self
            .http
            .patch(self.endpoint(&format!("/applications/{id}/status")))
            .bearer_auth(token.expose())
            .json(&serde_json::json!({ "status": status }))
            .send()
            .await?;
        Self::read_write(response).await
    }

    async fn update_profile(&self, token: &Token, patch: &ProfilePatch) -> Result<UserRecord> {
        let response = self
            .http
            .patch(self.endpoint("/users/admin/profile"))
            .bearer_auth(token.expose())
            .json(patch)
            .send()
            .await?;
        Self::read_write(response).await
    }

    async fn change_password(
        &self,
        token: &Token,
        current: &SecretString,
        new: &SecretString,
    ) -> Result<()> {
        let response = self
            .http
            .patch(self.endpoint("/auth/change-password"))
            .bearer_auth(token.expose())
            .json(&serde_json::json!({
                "currentPassword": current.expose_secret(),
                "newPassword": new.expose_secret(),
            }))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(error::Api::Validation(Self::message(response, status).await).into())
        }
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use std::{io, sync::Mutex};

    use async_trait::async_trait;
    use secrecy::SecretString;

    use super::{LoginResponse, PortalApi, ProfilePatch};
    use crate::{
        credential::Token,
        error::{self, Result},
        model::{
            application::{Application, ApplicationStatus},
            company::CompanyRecord,
            job::Job,
            user::UserRecord,
        },
        role::Role,
    };

    pub(crate) const VALID_TOKEN: &str = "tok";

    /// In-process stand-in for the portal. Records every call so tests can
    /// assert on request counts (directory fetched once, no status request in
    /// admin view, and so on).
    pub(crate) struct FakeApi {
        pub(crate) users: Vec<UserRecord>,
        pub(crate) companies: Vec<CompanyRecord>,
        pub(crate) jobs: Vec<Job>,
        pub(crate) applications: Mutex<Vec<Application>>,
        pub(crate) calls: Mutex<Vec<String>>,
        pub(crate) unreachable: bool,
    }

    impl Default for FakeApi {
        fn default() -> Self {
            Self {
                users: vec![],
                companies: vec![],
                jobs: vec![],
                applications: Mutex::new(vec![]),
                calls: Mutex::new(vec![]),
                unreachable: false,
            }
        }
    }

    impl FakeApi {
        pub(crate) fn student(id: &str, name: &str) -> UserRecord {
            UserRecord {
                id: id.to_owned(),
                name: name.to_owned(),
                username: Some(name.to_lowercase()),
                email: format!("{}@example.edu", name.to_lowercase()),
                phone: None,
                summary: None,
                education: None,
                experience: None,
                skills: vec![],
            }
        }

        pub(crate) fn company(id: &str, name: &str) -> CompanyRecord {
            CompanyRecord {
                id: id.to_owned(),
                name: name.to_owned(),
                email: format!("talent@{}.example.com", name.to_lowercase()),
                phone: None,
                description: None,
            }
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        pub(crate) fn call_count(&self, call: &str) -> usize {
            self.calls().iter().filter(|c| *c == call).count()
        }

        fn touch(&self, call: &str, token: &Token) -> Result<()> {
            self.calls.lock().unwrap().push(call.to_owned());
            if self.unreachable {
                return Err(io::Error::from(io::ErrorKind::ConnectionRefused).into());
            }
            if token.expose() != VALID_TOKEN {
                return Err(error::Api::Server {
                    status: 401,
                    message: "Token is not valid".to_owned(),
                }
                .into());
            }
            Ok(())
        }
    }

    #[async_trait]
    impl PortalApi for FakeApi {
        async fn login(
            &self,
            role: Role,
            username: &str,
            _password: &SecretString,
        ) -> Result<LoginResponse> {
            self.calls.lock().unwrap().push("POST /auth/login".to_owned());
            Ok(LoginResponse {
                token: Token::from(VALID_TOKEN.to_owned()),
                role,
                username: username.to_owned(),
            })
        }

        async fn current_user(&self, token: &Token) -> Result<UserRecord> {
            self.touch("GET /auth", token)?;
            self.users.first().cloned().ok_or_else(|| {
                error::Api::Server {
                    status: 404,
                    message: "User not found".to_owned(),
                }
                .into()
            })
        }

        async fn current_company(&self, token: &Token) -> Result<CompanyRecord> {
            self.touch("GET /companies/me", token)?;
            self.companies.first().cloned().ok_or_else(|| {
                error::Api::Server {
                    status: 404,
                    message: "Company not found".to_owned(),
                }
                .into()
            })
        }

        async fn users(&self, token: &Token) -> Result<Vec<UserRecord>> {
            self.touch("GET /users", token)?;
            Ok(self.users.clone())
        }

        async fn user(&self, token: &Token, id: &str) -> Result<UserRecord> {
            self.touch(&format!("GET /users/{id}"), token)?;
            self.users.iter().find(|u| u.id == id).cloned().ok_or_else(|| {
                error::Api::Server {
                    status: 404,
                    message: "User not found".to_owned(),
                }
                .into()
            })
        }

        async fn companies(&self, token: &Token) -> Result<Vec<CompanyRecord>> {
            self.touch("GET /companies", token)?;
            Ok(self.companies.clone())
        }

        async fn open_jobs(&self, token: &Token) -> Result<Vec<Job>> {
            self.touch("GET /jobs", token)?;
            Ok(self.jobs.iter().filter(|j| j.is_open()).cloned().collect())
        }

        async fn all_jobs(&self, token: &Token) -> Result<Vec<Job>> {
            self.touch("GET /jobs/all", token)?;
            Ok(self.jobs.clone())
        }

        async fn job(&self, token: &Token, id: &str) -> Result<Job> {
            self.touch(&format!("GET /jobs/{id}"), token)?;
            self.jobs.iter().find(|j| j.id == id).cloned().ok_or_else(|| {
                error::Api::Server {
                    status: 404,
                    message: "Job not found".to_owned(),
                }
                .into()
            })
        }

        async fn company_jobs(&self, token: &Token, company_id: &str) -> Result<Vec<Job>> {
            self.touch(&format!("GET /jobs/company/{company_id}"), token)?;
            Ok(self
                .jobs
                .iter()
                .filter(|j| match j.company.as_ref() {
                    Some(crate::model::job::CompanyLink::Full(c)) => c.id == company_id,
                    Some(crate::model::job::CompanyLink::Id(id)) => id == company_id,
                    None => false,
                })
                .cloned()
                .collect())
        }

        async fn job_applications(&self, token: &Token, job_id: &str) -> Result<Vec<Application>> {
            self.touch(&format!("GET /applications/job/{job_id}"), token)?;
            Ok(self.applications.lock().unwrap().clone())
        }

        async fn student_applications(
            &self,
            token: &Token,
            student_id: &str,
        ) -> Result<Vec<Application>> {
            self.touch(&format!("GET /applications/student/{student_id}"), token)?;
            Ok(self.applications.lock().unwrap().clone())
        }

        async fn set_application_status(
            &self,
            token: &Token,
            id: &str,
            status: ApplicationStatus,
        ) -> Result<Application> {
            self.touch(&format!("PATCH /applications/{id}/status"), token)?;
            let mut applications = self.applications.lock().unwrap();
            let application = applications
                .iter_mut()
                .find(|a| a.id == id)
                .ok_or_else(|| error::Api::Validation("Application not found".to_owned()))?;
            application.status = status;
            Ok(application.clone())
        }

        async fn update_profile(&self, token: &Token, _patch: &ProfilePatch) -> Result<UserRecord> {
            self.touch("PATCH /users/admin/profile", token)?;
            self.users.first().cloned().ok_or_else(|| {
                error::Api::Validation("User not found".to_owned()).into()
            })
        }

        async fn change_password(
            &self,
            token: &Token,
            _current: &SecretString,
            _new: &SecretString,
        ) -> Result<()> {
            self.touch("PATCH /auth/change-password", token)?;
            Ok(())
        }
    }
}
