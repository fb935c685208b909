// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

use clap::ValueEnum;
use inflector::Inflector;
use serde::{Deserialize, Serialize};

#[derive(ValueEnum, Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub(crate) enum ApplicationStatus {
    Applied,
    Shortlisted,
    Interview,
    Hired,
    Rejected,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let value = self.to_possible_value().ok_or(std::fmt::Error)?;
        write!(f, "{}", value.get_name().to_title_case())
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Application {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    #[serde(default)]
    pub(crate) student: Option<StudentRef>,
    #[serde(default)]
    pub(crate) job: Option<JobLink>,
    pub(crate) status: ApplicationStatus,
    #[serde(default)]
    pub(crate) applied_on: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct StudentRef {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) email: String,
}

/// The applied-to job, populated or bare depending on the endpoint.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub(crate) enum JobLink {
    Full(JobRef),
    Id(String),
}

impl JobLink {
    pub(crate) fn title(&self) -> &str {
        match self {
            Self::Full(job) => &job.title,
            Self::Id(_) => "",
        }
    }
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub(crate) struct JobRef {
    #[serde(rename = "_id")]
    pub(crate) id: String,
    pub(crate) title: String,
}
