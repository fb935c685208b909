// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// A record from the portal's users collection. Students and administrators
/// share this shape; the resume fields are only ever populated for students.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UserRecord {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) name: String,
    #[serde(default)]
    pub(crate) username: Option<String>,
    pub(crate) email: String,
    #[serde(default)]
    pub(crate) phone: Option<String>,
    #[serde(default)]
    pub(crate) summary: Option<String>,
    #[serde(default)]
    pub(crate) education: Option<String>,
    #[serde(default)]
    pub(crate) experience: Option<String>,
    #[serde(default)]
    pub(crate) skills: Vec<String>,
}
