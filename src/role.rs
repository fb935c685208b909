// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::ValueEnum;
use inflector::Inflector;
use serde::{Deserialize, Serialize};

/// The three account kinds the portal serves. A credential carries exactly one
/// role, and the resolved identity must carry the same one.
#[derive(ValueEnum, Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Role {
    Student,
    Company,
    Admin,
}

impl Role {
    /// The route a freshly authenticated account of this role lands on, and
    /// the target of any cross-role redirect.
    pub(crate) const fn home_route(self) -> &'static str {
        match self {
            Self::Student => "/dashboard",
            Self::Company => "/company/dashboard",
            Self::Admin => "/admin/dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.to_possible_value().ok_or(std::fmt::Error)?;
        write!(f, "{}", value.get_name().to_title_case())
    }
}

#[cfg(test)]
mod tests {
    use serde_test::{assert_tokens, Token};

    use super::Role;

    #[test]
    fn serializes_in_the_backend_vocabulary() {
        assert_tokens(
            &Role::Student,
            &[Token::UnitVariant {
                name: "Role",
                variant: "student",
            }],
        );
        assert_tokens(
            &Role::Company,
            &[Token::UnitVariant {
                name: "Role",
                variant: "company",
            }],
        );
        assert_tokens(
            &Role::Admin,
            &[Token::UnitVariant {
                name: "Role",
                variant: "admin",
            }],
        );
    }

    #[test]
    fn home_routes() {
        assert_eq!(Role::Student.home_route(), "/dashboard");
        assert_eq!(Role::Company.home_route(), "/company/dashboard");
        assert_eq!(Role::Admin.home_route(), "/admin/dashboard");
    }
}
