// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use blood_bank_client::{BASE_URL_ENV, ClientConfig, ConfigError, TIMEOUT_ENV};
use blood_bank_domain::BloodType;
use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Where the session is kept when no state directory is given.
pub const DEFAULT_STATE_DIR: &str = ".blood-bank";

#[derive(Debug, Parser)]
#[command(name = "blood-bank-console", author, version, about, long_about = None)]
pub struct Args {
    /// API base URL
    #[arg(long, env = BASE_URL_ENV)]
    pub api_url: Option<String>,

    /// Request timeout in milliseconds
    #[arg(long, env = TIMEOUT_ENV)]
    pub timeout_ms: Option<u64>,

    /// Directory holding the saved session
    #[arg(long, env = "BLOOD_BANK_STATE_DIR", default_value = DEFAULT_STATE_DIR)]
    pub state_dir: PathBuf,

    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }

    /// Builds the client configuration from flags, with the usual defaults
    /// for anything left unset.
    pub fn client_config(&self) -> Result<ClientConfig, ConfigError> {
        let api_url: Option<String> = self.api_url.clone();
        let timeout_ms: Option<String> = self.timeout_ms.map(|ms| ms.to_string());
        ClientConfig::from_lookup(|key| match key {
            BASE_URL_ENV => api_url.clone(),
            TIMEOUT_ENV => timeout_ms.clone(),
            _ => None,
        })
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Log in and remember the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "BLOOD_BANK_PASSWORD", hide_env_values = true)]
        password: String,
    },

    /// Create a donor account and log in
    Register {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "BLOOD_BANK_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        phone: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: Option<String>,
        #[arg(long)]
        address: Option<String>,
        #[arg(long)]
        gender: Option<String>,
    },

    /// Forget the saved session
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Show donor, request and stock totals
    #[command(visible_alias = "dash")]
    Dashboard,

    /// List user accounts
    Users {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List blood requests visible to the current role
    Requests {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Confirm or flag a blood request
    RequestAction {
        /// Blood request id
        id: i64,
        #[arg(value_enum)]
        action: RequestAction,
    },

    /// List blood stock by type
    Inventory {
        #[command(flatten)]
        list: ListArgs,
    },

    /// Set the units on hand for an inventory row
    SetStock {
        /// Inventory row id
        id: i64,
        #[arg(long)]
        blood_type: BloodType,
        /// Units on hand; negative values are stored as zero
        #[arg(long, allow_hyphen_values = true)]
        quantity: i64,
    },

    /// List donation schedules
    Schedules {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List donation sites
    Locations {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List pending donor registrations
    Donors {
        #[command(flatten)]
        list: ListArgs,
    },

    /// List the receivers of the logged-in medical center
    Receivers {
        #[command(flatten)]
        list: ListArgs,
    },
}

/// Server-side transitions a blood request can be asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RequestAction {
    /// Fulfil the request from inventory
    Confirm,
    /// Escalate the request
    Priority,
    /// Record that stock cannot cover the request
    OutOfStock,
}

/// Search, filter and sort flags shared by every list command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Case-insensitive text to look for
    #[arg(long, default_value = "")]
    pub search: String,

    /// Only rows in this category; ALL shows everything
    #[arg(long, default_value = "ALL")]
    pub category: String,

    /// Column to sort by
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,
}
