//! Cart command implementation.
//!
//! `cartgate cart` runs the pre-checkout integrity pass over the stored cart.

use std::path::PathBuf;

use crate::cli::args::CartArgs;
use crate::error::Result;
use crate::gate::{CartGate, CollectingSink};
use crate::ui::UserInterface;

use super::context::StoreContext;
use super::dispatcher::{Command, CommandResult, EXIT_DENIED};

/// The cart command implementation.
pub struct CartCommand {
    store_path: PathBuf,
    cache_dir: Option<PathBuf>,
    args: CartArgs,
}

impl CartCommand {
    pub fn new(store_path: PathBuf, cache_dir: Option<PathBuf>, args: CartArgs) -> Self {
        Self {
            store_path,
            cache_dir,
            args,
        }
    }
}

impl Command for CartCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = StoreContext::open(&self.store_path, self.cache_dir.as_deref())?;
        let evaluator = ctx.evaluator();
        let gate = CartGate::new(&evaluator);
        let identity = self.args.shopper.identity();

        let mut sink = CollectingSink::new();
        let report = gate.check_cart_items(&identity, &mut sink);

        if self.args.json {
            let output = serde_json::to_string_pretty(&report).map_err(anyhow::Error::from)?;
            ui.data(&output);
        } else if report.checked == 0 {
            ui.message("Cart is empty");
        } else {
            ui.show_header(&format!("Checked {} cart lines", report.checked));
            for notice in sink.notices() {
                ui.error(&format!("#{}: {}", notice.product_id, notice.text));
            }
            if report.is_clean() {
                ui.success("Every cart line satisfies its dependencies");
            }
        }

        Ok(if report.is_clean() {
            CommandResult::success()
        } else {
            CommandResult::failure(EXIT_DENIED)
        })
    }
}
