//! Check command implementation.
//!
//! `cartgate check --product ID` answers the add-to-cart question for one
//! product against the stored cart.

use std::path::PathBuf;

use crate::catalog::ProductId;
use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::evaluator::Decision;
use crate::ui::UserInterface;

use super::context::StoreContext;
use super::dispatcher::{Command, CommandResult, EXIT_DENIED};
use super::display::show_result;

/// The check command implementation.
pub struct CheckCommand {
    store_path: PathBuf,
    cache_dir: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    pub fn new(store_path: PathBuf, cache_dir: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            store_path,
            cache_dir,
            args,
        }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = StoreContext::open(&self.store_path, self.cache_dir.as_deref())?;
        let evaluator = ctx.evaluator();
        let identity = self.args.shopper.identity();
        let product = ProductId(self.args.product);

        let decision = evaluator.evaluate_current(product, &identity);
        let admitted = !decision.is_blocking();

        if self.args.json {
            let output = serde_json::to_string_pretty(&decision).map_err(anyhow::Error::from)?;
            ui.data(&output);
        } else {
            match &decision {
                Decision::Undecided => {
                    ui.warning(&format!(
                        "Product {} was not found, nothing to enforce",
                        product
                    ));
                }
                Decision::Evaluated(result) => {
                    match &result.notice {
                        Some(notice) => ui.error(notice),
                        None => ui.success(&format!(
                            "\"{}\" may be added to the cart",
                            result.product_title
                        )),
                    }
                    show_result(ui, result);
                }
            }
        }

        Ok(if admitted {
            CommandResult::success()
        } else {
            CommandResult::failure(EXIT_DENIED)
        })
    }
}
