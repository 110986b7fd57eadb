//! Human-readable rendering of evaluation results.

use crate::evaluator::{CheckOutcome, EvaluationResult, RequiredEntity};
use crate::ui::UserInterface;

/// Render the details of an evaluation as key/value lines.
pub fn show_result(ui: &mut dyn UserInterface, result: &EvaluationResult) {
    ui.show_detail("product", &format!("{} (#{})", result.product_title, result.product_id));
    if result.required.is_empty() {
        ui.show_detail("requires", "nothing");
        return;
    }

    ui.show_detail("kind", &result.kind.to_string());
    ui.show_detail("relationship", &result.relationship.to_string());
    ui.show_detail("selection", &result.selection_mode.to_string());
    ui.show_detail("requires", &titles(&result.required));
    ui.show_detail("cart", outcome_label(result.cart_check));
    ui.show_detail("ownership", outcome_label(result.ownership_check));
    if !result.satisfied.is_empty() {
        ui.show_detail("satisfied", &titles(&result.satisfied));
    }
    if !result.unsatisfied.is_empty() {
        ui.show_detail("missing", &titles(&result.unsatisfied));
    }
}

pub fn outcome_label(outcome: CheckOutcome) -> &'static str {
    match outcome {
        CheckOutcome::Satisfied => "satisfied",
        CheckOutcome::Unsatisfied => "unsatisfied",
        CheckOutcome::NotChecked => "not checked",
    }
}

fn titles(entities: &[RequiredEntity]) -> String {
    entities
        .iter()
        .map(|e| e.title.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductId;
    use crate::config::{DependencyKind, Relationship, SelectionMode};
    use crate::evaluator::EntityRef;
    use crate::ui::MockUI;

    fn entity(id: u64, title: &str) -> RequiredEntity {
        RequiredEntity {
            entity: EntityRef::Product(ProductId(id)),
            title: title.into(),
            permalink: None,
        }
    }

    #[test]
    fn shows_missing_entities() {
        let result = EvaluationResult {
            product_id: ProductId(1),
            product_title: "Expansion".into(),
            admitted: false,
            kind: DependencyKind::Ownership,
            relationship: Relationship::All,
            selection_mode: SelectionMode::ProductIds,
            cart_check: CheckOutcome::NotChecked,
            ownership_check: CheckOutcome::Unsatisfied,
            required: vec![entity(2, "Base Game"), entity(3, "Rulebook")],
            satisfied: vec![entity(2, "Base Game")],
            unsatisfied: vec![entity(3, "Rulebook")],
            notice: None,
        };
        let mut ui = MockUI::new();
        show_result(&mut ui, &result);

        assert_eq!(ui.detail("product"), Some("Expansion (#1)"));
        assert_eq!(ui.detail("kind"), Some("ownership"));
        assert_eq!(ui.detail("requires"), Some("Base Game, Rulebook"));
        assert_eq!(ui.detail("cart"), Some("not checked"));
        assert_eq!(ui.detail("missing"), Some("Rulebook"));
    }
}
