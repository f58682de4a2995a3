pub mod catalog;
pub mod category;
pub mod classify;
pub mod walker;

use tracing::debug;

use crate::common::context::ScanContext;
use crate::engine::state::StateHandle;
use category::{CacheCategory, CategoryResult};

/// Analysis worker body: classify each concrete category in order,
/// publishing progress as it goes.
///
/// The caller has already claimed the engine via
/// [`StateHandle::try_begin_analysis`]; this function ends the run by
/// replacing the published results wholesale and clearing the busy flag.
pub fn run_analysis(
    ctx: &ScanContext,
    state: &StateHandle,
    category: CacheCategory,
) -> Vec<CategoryResult> {
    let categories = category.expand();
    let total = categories.len();
    let mut results = Vec::with_capacity(total);

    for (index, cat) in categories.into_iter().enumerate() {
        state.publish_task(&format!("Analyzing {cat}"), index as f64 / total as f64);

        let items = classify::list_items(ctx, cat);
        let result = CategoryResult::from_items(cat, items);
        debug!(
            category = %cat,
            items = result.item_count,
            bytes = result.total_bytes,
            "category analyzed"
        );
        results.push(result);
    }

    state.finish_analysis(results.clone());
    results
}
