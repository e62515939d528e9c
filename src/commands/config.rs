// Copyright (c) 2025 Gastos contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Language, Theme};
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;

pub fn handle(store: &Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("lang", sub)) => {
            let language: Language = sub.get_one::<String>("value").unwrap().parse()?;
            let mut settings = store.load_settings();
            settings.language = language;
            store.save_settings(&settings)?;
            println!("Language set to {}", language.as_str());
        }
        Some(("theme", sub)) => {
            let theme: Theme = sub.get_one::<String>("value").unwrap().parse()?;
            let mut settings = store.load_settings();
            settings.theme = theme;
            store.save_settings(&settings)?;
            println!("Theme set to {}", theme.as_str());
        }
        _ => {
            let settings = store.load_settings();
            println!(
                "{}",
                pretty_table(
                    &["Language", "Theme"],
                    vec![vec![
                        settings.language.as_str().to_string(),
                        settings.theme.as_str().to_string(),
                    ]],
                )
            );
        }
    }
    Ok(())
}
