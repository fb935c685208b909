// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::role::Role;

/// A bearer token issued by the portal at login. Opaque to the client.
#[derive(Clone, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub(crate) struct Token(SecretString);

impl Token {
    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.expose_secret().is_empty()
    }
}

impl From<String> for Token {
    fn from(value: String) -> Self {
        Self(SecretString::new(value))
    }
}

impl From<Token> for String {
    fn from(value: Token) -> Self {
        value.0.expose_secret().clone()
    }
}

/// The durable proof of a prior login. Serialized as a single record so the
/// token, role and username fields can never be persisted out of step with
/// each other; absence of the whole record means unauthenticated.
#[derive(Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Credential {
    auth_token: Token,
    user_role: Role,
    username: String,
}

impl Credential {
    pub(crate) fn new(auth_token: Token, user_role: Role, username: String) -> Self {
        Self {
            auth_token,
            user_role,
            username,
        }
    }

    pub(crate) const fn token(&self) -> &Token {
        &self.auth_token
    }

    pub(crate) const fn role(&self) -> Role {
        self.user_role
    }

    pub(crate) fn username(&self) -> &str {
        &self.username
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Configure, Token as SerdeToken};

    use super::{Credential, Token};
    use crate::role::Role;

    impl PartialEq for Credential {
        fn eq(&self, other: &Self) -> bool {
            self.auth_token.expose() == other.auth_token.expose()
                && self.user_role == other.user_role
                && self.username == other.username
        }
    }

    impl std::fmt::Debug for Credential {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.debug_struct("Credential")
                .field("userRole", &self.user_role)
                .field("username", &self.username)
                .finish_non_exhaustive()
        }
    }

    #[test]
    fn round_trips_under_the_stable_storage_keys() {
        let credential = Credential::new(
            Token::from("abc".to_owned()),
            Role::Student,
            "s123".to_owned(),
        );

        assert_tokens(
            &credential.readable(),
            &[
                SerdeToken::Struct {
                    name: "Credential",
                    len: 3,
                },
                SerdeToken::Str("authToken"),
                SerdeToken::Str("abc"),
                SerdeToken::Str("userRole"),
                SerdeToken::UnitVariant {
                    name: "Role",
                    variant: "student",
                },
                SerdeToken::Str("username"),
                SerdeToken::Str("s123"),
                SerdeToken::StructEnd,
            ],
        );
    }
}
