// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    model::{company::CompanyRecord, user::UserRecord},
    role::Role,
};

/// The resolved, authenticated account driving the client. Derived from the
/// stored credential on every session load, never persisted itself.
///
/// Students and administrators resolve from the users collection; companies
/// from the companies collection. The role on `Member` comes from the
/// credential, which is why it can never disagree with it.
#[derive(Clone, Debug)]
pub(crate) enum Identity {
    Member { role: Role, record: UserRecord },
    Company { record: CompanyRecord },
}

impl Identity {
    pub(crate) fn id(&self) -> &str {
        match self {
            Self::Member { record, .. } => &record.id,
            Self::Company { record } => &record.id,
        }
    }

    pub(crate) const fn role(&self) -> Role {
        match self {
            Self::Member { role, .. } => *role,
            Self::Company { .. } => Role::Company,
        }
    }

    pub(crate) fn name(&self) -> &str {
        match self {
            Self::Member { record, .. } => &record.name,
            Self::Company { record } => &record.name,
        }
    }

    pub(crate) fn email(&self) -> &str {
        match self {
            Self::Member { record, .. } => &record.email,
            Self::Company { record } => &record.email,
        }
    }
}
