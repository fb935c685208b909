// SPDX-FileCopyrightText: 2026 Placeport contributors
//
// SPDX-License-Identifier: Apache-2.0

#![forbid(unsafe_code)]
#![deny(elided_lifetimes_in_paths)]
#![warn(
    rust_2018_idioms,
    future_incompatible,
    unused,
    unused_lifetimes,
    unused_qualifications,
    unused_results,
    anonymous_parameters,
    deprecated_in_future,
    elided_lifetimes_in_paths,
    explicit_outlives_requirements,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::unseparated_literal_suffix,
    clippy::decimal_literal_representation,
    clippy::single_char_lifetime_names,
    clippy::fallible_impl_from,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::wildcard_enum_match_arm,
    clippy::deref_by_slicing,
    clippy::default_numeric_fallback,
    clippy::shadow_reuse,
    clippy::clone_on_ref_ptr,
    clippy::todo,
    clippy::string_add,
    clippy::use_debug,
    clippy::future_not_send
)]
#![cfg_attr(not(test), warn(clippy::panic_in_result_fn))]

mod api;
mod command;
mod context;
mod credential;
mod error;
mod impersonate;
mod metadata;
mod model;
mod password;
mod resolver;
mod role;
mod router;
mod storage;
mod view;

use std::process;

use async_trait::async_trait;
use clap::{Parser, Subcommand};
use error::Result;
use log::{error, warn};
use url::Url;

#[derive(Debug, Subcommand)]
enum Command {
    Login(command::login::Command),
    Logout(command::logout::Command),
    Open(command::open::Command),
    Whoami(command::whoami::Command),
}

#[async_trait]
impl command::Command for Command {
    async fn execute(self, env: &mut command::Environment<'_>) -> Result<()> {
        match self {
            Self::Login(cmd) => cmd.execute(env).await,
            Self::Logout(cmd) => cmd.execute(env).await,
            Self::Open(cmd) => cmd.execute(env).await,
            Self::Whoami(cmd) => cmd.execute(env).await,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// The base URL of the portal's REST API.
    #[arg(long, env = "PLACEPORT_URL", default_value = "http://localhost:5001/api", value_parser = Url::parse)]
    url: Url,

    #[clap(subcommand)]
    command: Command,
}

fn get_credential_storage() -> Box<dyn storage::Storage<credential::Credential>> {
    if let Some(file_storage) = storage::File::new("credential.json") {
        return Box::new(file_storage);
    }

    warn!("We need to fall back to in-memory storage because no home directory is available; the session will not outlive this process");
    Box::new(storage::Memory::new())
}

async fn run(args: Args) -> Result<()> {
    let api = api::HttpApi::new(args.url);
    let mut ctx = context::IdentityContext::new(get_credential_storage());
    let prompt = password::RpasswordPrompt;

    let mut env = command::Environment {
        api: &api,
        ctx: &mut ctx,
        prompt: &prompt,
    };

    command::Command::execute(args.command, &mut env).await
}

#[tokio::main]
async fn main() {
    let logger_env = env_logger::Env::new()
        .filter_or("PLACEPORT_LOG", "warn")
        .write_style("PLACEPORT_LOG_STYLE");
    env_logger::Builder::from_env(logger_env).init();

    if let Err(e) = run(Args::parse()).await {
        error!("We encountered an error: {}", e);
        process::exit(1);
    };
}
