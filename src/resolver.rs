// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use log::debug;

use crate::{
    api::PortalApi,
    credential::Credential,
    error::{self, Error, Result},
    model::identity::Identity,
    role::Role,
};

/// Exchanges a stored credential for the authenticated identity it proves.
///
/// Students and administrators live in the users collection and resolve
/// through `GET /auth`; companies live in their own collection and resolve
/// through `GET /companies/me`, whose response omits the role, so the role is
/// tagged here from the credential. Safe to call repeatedly; it caches
/// nothing.
///
/// Any failure other than a missing token maps to a `Session` error, and the
/// caller is expected to clear the credential store in response: a session
/// that cannot be resolved right now is treated as no session at all.
pub(crate) async fn resolve(api: &dyn PortalApi, credential: &Credential) -> Result<Identity> {
    if credential.token().is_empty() {
        return Err(error::Session::NoCredential.into());
    }

    debug!(
        "resolving session for {} ({})",
        credential.username(),
        credential.role()
    );

    let resolved = match credential.role() {
        role @ (Role::Student | Role::Admin) => api
            .current_user(credential.token())
            .await
            .map(|record| Identity::Member { role, record }),
        Role::Company => api
            .current_company(credential.token())
            .await
            .map(|record| Identity::Company { record }),
    };

    resolved.map_err(|e| match e {
        Error::Api(error::Api::Server { .. }) => error::Session::InvalidCredential.into(),
        // Fail closed: transport errors, malformed responses, anything else
        // deauthenticates rather than leaving a stale identity on screen.
        _ => error::Session::Unreachable.into(),
    })
}

#[cfg(test)]
mod tests {
    use super::resolve;
    use crate::{
        api::fake::{FakeApi, VALID_TOKEN},
        credential::{Credential, Token},
        error::{Error, Session},
        role::Role,
    };

    fn credential(token: &str, role: Role) -> Credential {
        Credential::new(Token::from(token.to_owned()), role, "someone".to_owned())
    }

    #[tokio::test]
    async fn empty_token_fails_without_a_network_call() {
        let api = FakeApi::default();
        let outcome = resolve(&api, &credential("", Role::Student)).await;

        assert!(matches!(outcome, Err(Error::Session(Session::NoCredential))));
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn student_and_admin_resolve_through_the_users_endpoint() {
        let api = FakeApi {
            users: vec![FakeApi::student("S1", "Asha")],
            ..FakeApi::default()
        };

        for role in [Role::Student, Role::Admin] {
            let identity = resolve(&api, &credential(VALID_TOKEN, role)).await.unwrap();
            assert_eq!(identity.role(), role);
            assert_eq!(identity.id(), "S1");
        }
        assert_eq!(api.call_count("GET /auth"), 2);
        assert_eq!(api.call_count("GET /companies/me"), 0);
    }

    #[tokio::test]
    async fn company_resolves_through_its_own_endpoint_and_gets_tagged() {
        let api = FakeApi {
            companies: vec![FakeApi::company("C1", "Acme")],
            ..FakeApi::default()
        };

        let identity = resolve(&api, &credential(VALID_TOKEN, Role::Company))
            .await
            .unwrap();
        assert_eq!(identity.role(), Role::Company);
        assert_eq!(identity.id(), "C1");
        assert_eq!(api.call_count("GET /companies/me"), 1);
    }

    #[tokio::test]
    async fn rejected_token_is_an_invalid_credential() {
        let api = FakeApi {
            users: vec![FakeApi::student("S1", "Asha")],
            ..FakeApi::default()
        };

        let outcome = resolve(&api, &credential("expired", Role::Student)).await;
        assert!(matches!(
            outcome,
            Err(Error::Session(Session::InvalidCredential))
        ));
    }

    #[tokio::test]
    async fn transport_failure_is_unreachable() {
        let api = FakeApi {
            unreachable: true,
            ..FakeApi::default()
        };

        let outcome = resolve(&api, &credential(VALID_TOKEN, Role::Company)).await;
        assert!(matches!(outcome, Err(Error::Session(Session::Unreachable))));
    }
}
