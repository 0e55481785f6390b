// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::cli::{Args, Command, DEFAULT_STATE_DIR, RequestAction};
use blood_bank_client::{ClientConfig, DEFAULT_BASE_URL};
use blood_bank_domain::BloodType;
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::time::Duration;

#[test]
fn test_cli_definition_is_consistent() {
    Args::command().debug_assert();
}

#[test]
fn test_list_flags_parse() {
    let args: Args = Args::try_parse_from([
        "blood-bank-console",
        "requests",
        "--search",
        "smith",
        "--category",
        "PENDING",
        "--sort",
        "urgency",
        "--desc",
    ])
    .unwrap();

    match args.command {
        Command::Requests { list } => {
            assert_eq!(list.search, "smith");
            assert_eq!(list.category, "PENDING");
            assert_eq!(list.sort.as_deref(), Some("urgency"));
            assert!(list.desc);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_desc_requires_sort() {
    let result = Args::try_parse_from(["blood-bank-console", "users", "--desc"]);
    assert!(result.is_err());
}

#[test]
fn test_set_stock_accepts_negative_quantity() {
    let args: Args = Args::try_parse_from([
        "blood-bank-console",
        "set-stock",
        "4",
        "--blood-type",
        "AB+",
        "--quantity",
        "-5",
    ])
    .unwrap();

    match args.command {
        Command::SetStock {
            id,
            blood_type,
            quantity,
        } => {
            assert_eq!(id, 4);
            assert_eq!(blood_type, BloodType::AbPositive);
            assert_eq!(quantity, -5);
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_unknown_blood_type_is_rejected() {
    let result = Args::try_parse_from([
        "blood-bank-console",
        "set-stock",
        "4",
        "--blood-type",
        "C+",
        "--quantity",
        "5",
    ]);
    assert!(result.is_err());
}

#[test]
fn test_request_action_names() {
    let args: Args =
        Args::try_parse_from(["blood-bank-console", "request-action", "12", "out-of-stock"])
            .unwrap();
    assert!(matches!(
        args.command,
        Command::RequestAction {
            id: 12,
            action: RequestAction::OutOfStock
        }
    ));
}

#[test]
fn test_client_config_from_flags() {
    let args: Args = Args::try_parse_from([
        "blood-bank-console",
        "--api-url",
        "https://bank.example.org/api/",
        "--timeout-ms",
        "1500",
        "whoami",
    ])
    .unwrap();

    let config: ClientConfig = args.client_config().unwrap();
    assert_eq!(config.base_url(), "https://bank.example.org/api");
    assert_eq!(config.timeout(), Duration::from_millis(1500));
}

#[test]
fn test_defaults_without_flags() {
    let args: Args = Args::try_parse_from(["blood-bank-console", "whoami"]).unwrap();

    assert_eq!(args.state_dir, PathBuf::from(DEFAULT_STATE_DIR));
    if args.api_url.is_none() {
        assert_eq!(args.client_config().unwrap().base_url(), DEFAULT_BASE_URL);
    }
}
