//! Budget-constrained route selection (exact 0/1 knapsack).

use tp_core::FlowPeriod;

use crate::error::{TransitError, TransitResult};

/// Demand served per vehicle when deriving a route's vehicle requirement.
const DEMAND_PER_VEHICLE: f64 = 100.0;

// ── RouteRecord ───────────────────────────────────────────────────────────────

/// One row of the route/demand table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteRecord {
    pub route_id: String,
    /// Total demand served by the route.  When absent, derived as the sum
    /// of the per-period figures.
    pub demand: Option<f64>,
    /// Per-period demand figures, in [`FlowPeriod::ALL`] order; missing
    /// figures read as 0.0.
    pub period_demand: [Option<f64>; 4],
    /// Vehicles needed to run the route.  When absent, derived as
    /// `ceil(demand / 100)`.
    pub required_vehicles: Option<u32>,
}

impl RouteRecord {
    /// A record with explicit demand and vehicle figures.
    pub fn new(route_id: impl Into<String>, demand: f64, required_vehicles: u32) -> Self {
        Self {
            route_id: route_id.into(),
            demand: Some(demand),
            period_demand: [None; 4],
            required_vehicles: Some(required_vehicles),
        }
    }

    /// A record carrying only per-period demand; totals and vehicle counts
    /// are derived.
    pub fn from_period_demand(
        route_id: impl Into<String>,
        morning: f64,
        afternoon: f64,
        evening: f64,
        night: f64,
    ) -> Self {
        Self {
            route_id: route_id.into(),
            demand: None,
            period_demand: [Some(morning), Some(afternoon), Some(evening), Some(night)],
            required_vehicles: None,
        }
    }

    /// Demand figure for one period, defaulting to `0.0` when absent.
    #[inline]
    pub fn demand_for(&self, period: FlowPeriod) -> f64 {
        self.period_demand[period as usize].unwrap_or(0.0)
    }

    /// Effective demand: the explicit figure, or the period sum.
    pub fn total_demand(&self) -> f64 {
        self.demand
            .unwrap_or_else(|| FlowPeriod::ALL.iter().map(|&p| self.demand_for(p)).sum())
    }

    /// Effective vehicle cost: the explicit figure, or `ceil(demand / 100)`.
    pub fn vehicle_cost(&self) -> u32 {
        self.required_vehicles
            .unwrap_or_else(|| (self.total_demand() / DEMAND_PER_VEHICLE).ceil() as u32)
    }

    fn validate(&self) -> TransitResult<()> {
        let ok = |v: Option<f64>| v.is_none_or(|x| x >= 0.0);
        if !ok(self.demand) || !self.period_demand.iter().all(|&d| ok(d)) {
            return Err(TransitError::InvalidInput(format!(
                "route `{}` has negative demand",
                self.route_id
            )));
        }
        Ok(())
    }
}

// ── TransitOptimizer ──────────────────────────────────────────────────────────

/// Exact dynamic-programming route selection under a vehicle budget.
pub struct TransitOptimizer {
    routes: Vec<RouteRecord>,
}

impl TransitOptimizer {
    pub fn new(routes: Vec<RouteRecord>) -> Self {
        Self { routes }
    }

    pub fn routes(&self) -> &[RouteRecord] {
        &self.routes
    }

    /// Select the subset of routes maximizing total served demand with
    /// total vehicle cost ≤ `vehicle_budget`.
    ///
    /// Returns the selected route ids in input order.  Exact optimum,
    /// O(routes × budget) time and space.  A budget of 0 selects nothing;
    /// a route whose own cost exceeds the budget is never selected.
    pub fn optimize(&self, vehicle_budget: u32) -> TransitResult<Vec<String>> {
        for route in &self.routes {
            route.validate()?;
        }

        let budget = vehicle_budget as usize;
        let n = self.routes.len();
        let cost: Vec<usize> = self.routes.iter().map(|r| r.vehicle_cost() as usize).collect();
        let benefit: Vec<f64> = self.routes.iter().map(RouteRecord::total_demand).collect();

        // dp[i][v] = best demand using the first i routes and ≤ v vehicles.
        let mut dp = vec![vec![0.0f64; budget + 1]; n + 1];
        for i in 1..=n {
            for v in 0..=budget {
                dp[i][v] = if cost[i - 1] <= v {
                    dp[i - 1][v].max(dp[i - 1][v - cost[i - 1]] + benefit[i - 1])
                } else {
                    dp[i - 1][v]
                };
            }
        }

        // Backtrack: a route is in the optimum iff dropping it lowers dp.
        let mut selected = Vec::new();
        let mut v = budget;
        for i in (1..=n).rev() {
            if dp[i][v] != dp[i - 1][v] {
                selected.push(self.routes[i - 1].route_id.clone());
                v -= cost[i - 1];
            }
        }
        selected.reverse();
        Ok(selected)
    }
}
