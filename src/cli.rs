// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

pub fn build_cli() -> Command {
    Command::new("gastos")
        .about("Calendar-centric personal expense and income tracker")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Initialize the local store and print its location"))
        .subcommand(tx_cmd())
        .subcommand(category_cmd())
        .subcommand(calendar_cmd())
        .subcommand(summary_cmd())
        .subcommand(config_cmd())
}

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Reference month, defaults to the current one")
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Record, list and delete transactions")
        .subcommand(
            Command::new("add")
                .about("Record a transaction")
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .required(true),
                )
                .arg(Arg::new("amount").long("amount").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("income|expense")
                        .default_value("expense"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_name("ID")
                        .required(true),
                )
                .arg(Arg::new("note").long("note")),
        )
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, most recent first")
                .arg(month_arg())
                .arg(
                    Arg::new("date")
                        .long("date")
                        .value_name("YYYY-MM-DD")
                        .help("Only transactions on this date"),
                )
                .arg(
                    Arg::new("category")
                        .long("category")
                        .value_name("ID")
                        .help("Only transactions of this category"),
                )
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction after confirmation")
                .arg(Arg::new("id").required(true))
                .arg(
                    Arg::new("yes")
                        .long("yes")
                        .short('y')
                        .action(ArgAction::SetTrue)
                        .help("Skip the confirmation prompt"),
                ),
        )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage the category taxonomy")
        .subcommand(
            Command::new("add")
                .about("Create a category; its id is derived from the name")
                .arg(Arg::new("name").long("name").required(true))
                .arg(
                    Arg::new("name-en")
                        .long("name-en")
                        .help("English label, defaults to the name"),
                )
                .arg(
                    Arg::new("type")
                        .long("type")
                        .value_name("income|expense")
                        .default_value("expense"),
                )
                .arg(
                    Arg::new("color")
                        .long("color")
                        .value_name("HEX")
                        .help("Display color, defaults per type"),
                ),
        )
        .subcommand(json_flags(
            Command::new("list").about("List categories"),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a category without transactions attached")
                .arg(Arg::new("id").required(true)),
        )
}

fn calendar_cmd() -> Command {
    Command::new("calendar")
        .about("Show the month grid with per-day totals")
        .arg(month_arg())
}

fn summary_cmd() -> Command {
    json_flags(
        Command::new("summary")
            .about("Month totals and the income/expense listings")
            .arg(month_arg()),
    )
}

fn config_cmd() -> Command {
    Command::new("config")
        .about("Show or change display settings")
        .subcommand(Command::new("show").about("Show the current settings"))
        .subcommand(
            Command::new("lang")
                .about("Set the display language")
                .arg(Arg::new("value").value_name("es|en").required(true)),
        )
        .subcommand(
            Command::new("theme")
                .about("Set the display theme")
                .arg(Arg::new("value").value_name("light|dark").required(true)),
        )
}
