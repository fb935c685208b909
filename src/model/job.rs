// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Job {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) title: String,
    #[serde(default)]
    pub(crate) company: Option<CompanyLink>,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) required_skills: Vec<String>,
    #[serde(default = "default_status")]
    pub(crate) status: String,
    #[serde(default)]
    pub(crate) posted_on: Option<String>,
}

fn default_status() -> String {
    "Open".to_owned()
}

impl Job {
    pub(crate) fn is_open(&self) -> bool {
        self.status == "Open"
    }

    pub(crate) fn company_name(&self) -> &str {
        match self.company.as_ref() {
            Some(CompanyLink::Full(company)) => &company.name,
            Some(CompanyLink::Id(_)) | None => "",
        }
    }
}

/// The job's owning company, which the backend returns either as a bare id or
/// as a populated reference depending on the endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum CompanyLink {
    Full(CompanyRef),
    Id(String),
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct CompanyRef {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) name: String,
}

#[cfg(test)]
mod tests {
    use super::{CompanyLink, Job};

    #[test]
    fn company_deserializes_populated_or_bare() {
        let populated: Job = serde_json::from_str(
            r#"{"_id": "J1", "title": "Backend Intern", "company": {"_id": "C1", "name": "Acme"}}"#,
        )
        .unwrap();
        assert_eq!(populated.company_name(), "Acme");
        assert!(populated.is_open());

        let bare: Job =
            serde_json::from_str(r#"{"_id": "J2", "title": "Analyst", "company": "C1"}"#).unwrap();
        assert!(matches!(bare.company, Some(CompanyLink::Id(ref id)) if id == "C1"));
        assert_eq!(bare.company_name(), "");
    }
}
