//! Report CLI commands
//!
//! Dashboard summary, recent activity feed and the spending chart.

use super::AppContext;
use crate::error::BudgetResult;
use crate::reports::activity::format_activity;
use crate::reports::{recent_activity, CategoryBreakdown, FinancialSummary};

/// Print income, expense, balance and savings totals
pub fn handle_summary_command(ctx: &AppContext) -> BudgetResult<()> {
    let store = ctx.budget_store();
    let summary = FinancialSummary::generate(store.state());
    print!("{}", summary.format_terminal(ctx.currency()));
    Ok(())
}

/// Print the most recent income and expense entries
pub fn handle_activity_command(ctx: &AppContext, limit: Option<usize>) -> BudgetResult<()> {
    let store = ctx.budget_store();
    let limit = limit.unwrap_or(ctx.settings.recent_activity_limit);
    let items = recent_activity(store.state(), limit);
    println!(
        "{}",
        format_activity(&items, ctx.currency(), ctx.date_format()).trim_end()
    );
    Ok(())
}

/// Print spending by category as a bar chart
pub fn handle_chart_command(ctx: &AppContext) -> BudgetResult<()> {
    let store = ctx.budget_store();
    let breakdown = CategoryBreakdown::generate(&store.state().expenses);
    println!("{}", breakdown.format_terminal(ctx.currency()).trim_end());
    Ok(())
}
