//! Analytics aggregation.

use std::collections::{BTreeMap, HashMap};

use atrio_shared::types::round_money;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{AnalyticsReport, MonthlyPoint, SpecialtyRevenue, StatusSlice};
use crate::budget::totals::percent_of;
use crate::budget::{Budget, BudgetStatus, line_total};
use crate::company::{Company, Specialty};
use crate::plan::{Feature, PlanError, PlanLimits, SubscriptionService};

/// Analytics service.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Fails unless the company's plan includes analytics.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::FeatureUnavailable` on the Free plan.
    pub fn ensure_available(company: &Company, today: NaiveDate) -> Result<(), PlanError> {
        let plan = SubscriptionService::effective_plan(company, today);
        PlanLimits::ensure_feature(plan, Feature::Analytics)
    }

    /// Builds the report for one company's budgets.
    #[must_use]
    pub fn build(budgets: &[Budget]) -> AnalyticsReport {
        let approved: Vec<&Budget> = budgets
            .iter()
            .filter(|b| b.status == BudgetStatus::Approved)
            .collect();

        let mut total_approved_revenue = Decimal::ZERO;
        let mut total_approved_costs = Decimal::ZERO;
        for budget in &approved {
            let totals = budget.totals();
            total_approved_revenue = total_approved_revenue.saturating_add(totals.total);
            total_approved_costs = total_approved_costs.saturating_add(totals.costs);
        }

        AnalyticsReport {
            status_breakdown: Self::status_breakdown(budgets),
            revenue_by_specialty: Self::revenue_by_specialty(&approved),
            monthly_trend: Self::monthly_trend(&approved),
            total_approved_revenue,
            total_approved_costs,
            net_profit: total_approved_revenue.saturating_sub(total_approved_costs),
            conversion_rate: conversion_rate(approved.len(), budgets.len()),
            cached: false,
        }
    }

    /// Budget count per status with empty statuses left out.
    #[must_use]
    pub fn status_breakdown(budgets: &[Budget]) -> Vec<StatusSlice> {
        BudgetStatus::ALL
            .into_iter()
            .map(|status| StatusSlice {
                status,
                count: budgets.iter().filter(|b| b.status == status).count(),
            })
            .filter(|slice| slice.count > 0)
            .collect()
    }

    fn revenue_by_specialty(approved: &[&Budget]) -> Vec<SpecialtyRevenue> {
        let mut per_specialty: HashMap<Specialty, Decimal> = HashMap::new();
        for item in approved.iter().flat_map(|b| &b.items) {
            let revenue = per_specialty.entry(item.category).or_default();
            *revenue = revenue.saturating_add(line_total(item.quantity, item.price_per_unit));
        }

        let mut bars: Vec<SpecialtyRevenue> = per_specialty
            .into_iter()
            .map(|(specialty, revenue)| SpecialtyRevenue {
                specialty,
                label: specialty.label().to_string(),
                revenue: round_money(revenue),
            })
            .collect();
        bars.sort_by(|a, b| {
            b.revenue
                .cmp(&a.revenue)
                .then_with(|| a.specialty.cmp(&b.specialty))
        });
        bars
    }

    fn monthly_trend(approved: &[&Budget]) -> Vec<MonthlyPoint> {
        let mut per_month: BTreeMap<(i32, u32), (Decimal, Decimal)> = BTreeMap::new();
        for budget in approved {
            let totals = budget.totals();
            let entry = per_month
                .entry((budget.date.year(), budget.date.month()))
                .or_default();
            entry.0 = entry.0.saturating_add(totals.total);
            entry.1 = entry.1.saturating_add(totals.costs);
        }

        per_month
            .into_iter()
            .map(|((year, month), (revenue, costs))| MonthlyPoint {
                label: format!("{month}/{year}"),
                year,
                month,
                revenue: round_money(revenue),
                costs: round_money(costs),
            })
            .collect()
    }
}

fn conversion_rate(approved: usize, all: usize) -> Decimal {
    percent_of(Decimal::from(approved), Decimal::from(all))
}
