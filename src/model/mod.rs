// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

pub(crate) mod application;
pub(crate) mod company;
pub(crate) mod identity;
pub(crate) mod job;
pub(crate) mod user;
