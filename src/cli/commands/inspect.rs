//! Inspect command implementation.
//!
//! `cartgate inspect --product ID` shows the normalized dependency
//! configuration of a product and which tied entities still resolve.

use std::path::PathBuf;

use crate::catalog::{Catalog, ProductId};
use crate::cli::args::InspectArgs;
use crate::config::{load_dependency_config, DependencyConfig, SelectionMode};
use crate::error::Result;
use crate::notice::display_name;
use crate::ui::UserInterface;

use super::context::StoreContext;
use super::dispatcher::{Command, CommandResult};

/// The inspect command implementation.
pub struct InspectCommand {
    store_path: PathBuf,
    args: InspectArgs,
}

impl InspectCommand {
    pub fn new(store_path: PathBuf, args: InspectArgs) -> Self {
        Self { store_path, args }
    }
}

impl Command for InspectCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let ctx = StoreContext::open(&self.store_path, None)?;
        let store = &ctx.store;

        let Some(product) = store.product(ProductId(self.args.product)) else {
            ui.error(&format!("Product {} not found", self.args.product));
            return Ok(CommandResult::failure(1));
        };

        let owner = match product.parent_id {
            Some(parent) => match store.product(parent) {
                Some(owner) => owner,
                None => {
                    ui.error(&format!(
                        "Parent {} of variation {} not found",
                        parent, product.id
                    ));
                    return Ok(CommandResult::failure(1));
                }
            },
            None => product.clone(),
        };

        ui.show_header(&display_name(&product));
        if owner.id != product.id {
            ui.show_detail("rules from", &display_name(&owner));
        }

        let config = load_dependency_config(store, owner.id)?;
        if !config.has_tied_ids() {
            ui.message("No dependencies configured");
            return Ok(CommandResult::success());
        }

        ui.show_detail("kind", &config.kind.to_string());
        ui.show_detail("relationship", &config.relationship.to_string());
        ui.show_detail("selection", &config.selection_mode.to_string());
        for line in tied_lines(store, &config) {
            ui.show_detail("tied", &line);
        }
        if let Some(notice) = &config.custom_notice {
            ui.show_detail("notice", notice);
        }

        Ok(CommandResult::success())
    }
}

/// One line per configured tied id, flagging the ones that no longer count.
fn tied_lines(catalog: &dyn Catalog, config: &DependencyConfig) -> Vec<String> {
    match config.selection_mode {
        SelectionMode::ProductIds => config
            .tied_product_ids
            .iter()
            .map(|id| match catalog.product(*id) {
                Some(p) if p.purchasable => display_name(&p),
                Some(p) => format!("{} [not purchasable, ignored]", display_name(&p)),
                None => format!("#{} [missing, ignored]", id),
            })
            .collect(),
        SelectionMode::CategoryIds => config
            .tied_category_ids
            .iter()
            .map(|id| match catalog.category(*id) {
                Some(c) => c.name,
                None => format!("#{} [missing, ignored]", id),
            })
            .collect(),
    }
}
