// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tillbook")
        .about("Daily cash-register ledger")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database if missing and print its path"))
        .subcommand(
            Command::new("user")
                .about("Manage register users")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("display").long("display")),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rm").arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("category")
                .about("Manage income/expense categories")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("type").long("type").required(true)),
                )
                .subcommand(Command::new("list").arg(Arg::new("type").long("type")))
                .subcommand(
                    Command::new("rm")
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("type").long("type").required(true)),
                ),
        )
        .subcommand(
            Command::new("costcenter")
                .about("Manage cost-center labels")
                .subcommand(
                    Command::new("add").arg(Arg::new("name").long("name").required(true)),
                )
                .subcommand(Command::new("list"))
                .subcommand(
                    Command::new("rm").arg(Arg::new("name").long("name").required(true)),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and list transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("user").long("user").required(true))
                        .arg(Arg::new("type").long("type").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(Arg::new("method").long("method").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .help("Business date/time, defaults to now"),
                        )
                        .arg(Arg::new("bank").long("bank"))
                        .arg(Arg::new("transfer-number").long("transfer-number"))
                        .arg(Arg::new("recipient").long("recipient"))
                        .arg(Arg::new("recipient-id").long("recipient-id"))
                        .arg(Arg::new("cost-center").long("cost-center")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .arg(Arg::new("user").long("user"))
                        .arg(Arg::new("day").long("day").help("YYYY-MM-DD"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                )),
        )
        .subcommand(
            Command::new("withdraw")
                .about("Record and list balance withdrawals")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("user").long("user").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("source").long("source").required(true))
                        .arg(Arg::new("concept").long("concept").required(true))
                        .arg(
                            Arg::new("authorized-by")
                                .long("authorized-by")
                                .required(true),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list").arg(Arg::new("user").long("user")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Derived summaries")
                .subcommand(json_flags(
                    Command::new("daily")
                        .arg(Arg::new("user").long("user"))
                        .arg(Arg::new("date").long("date").help("YYYY-MM-DD, defaults to today")),
                ))
                .subcommand(json_flags(
                    Command::new("categories")
                        .arg(Arg::new("user").long("user"))
                        .arg(Arg::new("type").long("type").required(true)),
                ))
                .subcommand(json_flags(
                    Command::new("balances").arg(Arg::new("user").long("user")),
                ))
                .subcommand(json_flags(
                    Command::new("withdrawals").arg(Arg::new("user").long("user")),
                )),
        )
        .subcommand(
            Command::new("close")
                .about("Daily cash close: archive active transactions and withdrawals")
                .arg(Arg::new("user").long("user").help("Close only this user's day")),
        )
        .subcommand(
            Command::new("export")
                .about("Export ledgers for printing or external tools")
                .subcommand(
                    Command::new("transactions")
                        .arg(Arg::new("format").long("format").required(true))
                        .arg(Arg::new("out").long("out").required(true)),
                )
                .subcommand(
                    Command::new("archive")
                        .arg(Arg::new("format").long("format").required(true))
                        .arg(Arg::new("out").long("out").required(true)),
                ),
        )
        .subcommand(
            Command::new("currency")
                .about("Display currency configuration")
                .subcommand(
                    Command::new("set")
                        .arg(Arg::new("code").long("code").required(true))
                        .arg(
                            Arg::new("decimals")
                                .long("decimals")
                                .value_parser(value_parser!(u32)),
                        ),
                )
                .subcommand(Command::new("show")),
        )
        .subcommand(Command::new("doctor").about("Run ledger integrity checks"))
}
