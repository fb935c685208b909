// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use log::{debug, warn};

use crate::{
    api::PortalApi,
    credential::{Credential, Token},
    error::{self, Error, Result},
    model::{company::CompanyRecord, identity::Identity, job::Job, user::UserRecord},
    resolver,
    role::Role,
    storage::Storage,
};

/// Lazily populated full listings used for lookups and switch-target pickers.
///
/// Reads and wholesale refreshes from concurrently active views are
/// last-writer-wins with no version check. That race is accepted: this is a
/// single-operator, low-write-rate client, and the lists are advisory display
/// data reconciled by the next full refresh.
#[derive(Default)]
pub(crate) struct DirectoryCache {
    pub(crate) students: Vec<UserRecord>,
    pub(crate) companies: Vec<CompanyRecord>,
    pub(crate) jobs: Vec<Job>,
}

/// Process-wide session state: the stored credential, the identity it
/// resolves to, and the directory caches shared by the views. Initialized
/// once at startup and mutated only through the methods below; logout resets
/// everything.
pub(crate) struct IdentityContext {
    store: Box<dyn Storage<Credential>>,
    credential: Option<Credential>,
    identity: Option<Identity>,
    loading: bool,
    directory: DirectoryCache,
}

impl IdentityContext {
    pub(crate) fn new(store: Box<dyn Storage<Credential>>) -> Self {
        Self {
            store,
            credential: None,
            identity: None,
            loading: false,
            directory: DirectoryCache::default(),
        }
    }

    pub(crate) fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub(crate) fn role(&self) -> Option<Role> {
        self.identity.as_ref().map(Identity::role)
    }

    pub(crate) const fn is_loading(&self) -> bool {
        self.loading
    }

    pub(crate) fn directory(&self) -> &DirectoryCache {
        &self.directory
    }

    fn token(&self) -> Result<&Token> {
        self.credential
            .as_ref()
            .map(Credential::token)
            .ok_or_else(|| error::Session::NoCredential.into())
    }

    /// Establishes the session from whatever credential survived the last
    /// run. A missing credential is the ordinary logged-out state; a
    /// credential that no longer resolves is cleared on the spot, so the
    /// caller always ends up either authenticated or cleanly logged out.
    pub(crate) async fn bootstrap(&mut self, api: &dyn PortalApi) -> Result<()> {
        let Some(credential) = self.store.get().await? else {
            return Ok(());
        };

        self.loading = true;
        let resolved = resolver::resolve(api, &credential).await;
        self.loading = false;

        match resolved {
            Ok(identity) => {
                self.credential = Some(credential);
                self.identity = Some(identity);
                Ok(())
            }
            Err(Error::Session(e)) => {
                warn!("clearing stored credential: {e}");
                self.deauthenticate().await
            }
            Err(e) => Err(e),
        }
    }

    /// Persists the freshly issued credential and resolves it immediately.
    /// Returns the role so the caller can redirect to its home route. If
    /// resolution fails the credential is cleared again and the error
    /// surfaces to the login form.
    pub(crate) async fn login(
        &mut self,
        api: &dyn PortalApi,
        token: Token,
        role: Role,
        username: String,
    ) -> Result<Role> {
        let credential = Credential::new(token, role, username);
        self.store.update(&credential).await?;

        self.loading = true;
        let resolved = resolver::resolve(api, &credential).await;
        self.loading = false;

        match resolved {
            Ok(identity) => {
                self.credential = Some(credential);
                self.identity = Some(identity);
                Ok(role)
            }
            Err(e) => {
                self.deauthenticate().await?;
                Err(e)
            }
        }
    }

    pub(crate) async fn logout(&mut self) -> Result<()> {
        self.deauthenticate().await
    }

    async fn deauthenticate(&mut self) -> Result<()> {
        self.store.clear().await?;
        self.credential = None;
        self.identity = None;
        self.directory = DirectoryCache::default();
        Ok(())
    }

    /// Fetches the student directory only if the local cache is empty, so a
    /// view mounting repeatedly does not refetch on every render. Returns
    /// whether a fetch actually happened.
    pub(crate) async fn ensure_students(&mut self, api: &dyn PortalApi) -> Result<bool> {
        if !self.directory.students.is_empty() {
            return Ok(false);
        }
        self.refresh_students(api).await?;
        Ok(true)
    }

    pub(crate) async fn refresh_students(&mut self, api: &dyn PortalApi) -> Result<()> {
        debug!("refreshing student directory");
        self.loading = true;
        let fetched = api.users(self.token()?).await;
        self.loading = false;
        self.directory.students = fetched?;
        Ok(())
    }

    pub(crate) async fn ensure_companies(&mut self, api: &dyn PortalApi) -> Result<bool> {
        if !self.directory.companies.is_empty() {
            return Ok(false);
        }
        self.refresh_companies(api).await?;
        Ok(true)
    }

    pub(crate) async fn refresh_companies(&mut self, api: &dyn PortalApi) -> Result<()> {
        debug!("refreshing company directory");
        self.loading = true;
        let fetched = api.companies(self.token()?).await;
        self.loading = false;
        self.directory.companies = fetched?;
        Ok(())
    }

    pub(crate) async fn refresh_jobs(&mut self, api: &dyn PortalApi) -> Result<()> {
        debug!("refreshing job directory");
        self.loading = true;
        let fetched = api.all_jobs(self.token()?).await;
        self.loading = false;
        self.directory.jobs = fetched?;
        Ok(())
    }

    /// Optimistically prepends a just-created record so lists reflect the
    /// create before any round trip completes. Possibly stale until the next
    /// wholesale refresh replaces it.
    pub(crate) fn append_student(&mut self, record: UserRecord) {
        self.directory.students.insert(0, record);
    }

    pub(crate) fn append_job(&mut self, job: Job) {
        self.directory.jobs.insert(0, job);
    }

    pub(crate) fn session_token(&self) -> Result<&Token> {
        self.token()
    }
}
