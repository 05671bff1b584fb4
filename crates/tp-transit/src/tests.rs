//! Unit tests for tp-transit.

#[cfg(test)]
mod derivation {
    use crate::RouteRecord;

    #[test]
    fn demand_falls_back_to_period_sum() {
        let r = RouteRecord::from_period_demand("r1", 100.0, 50.0, 30.0, 20.0);
        assert_eq!(r.total_demand(), 200.0);
    }

    #[test]
    fn explicit_demand_wins_over_periods() {
        let mut r = RouteRecord::from_period_demand("r1", 100.0, 50.0, 30.0, 20.0);
        r.demand = Some(500.0);
        assert_eq!(r.total_demand(), 500.0);
    }

    #[test]
    fn vehicle_cost_is_ceiling_of_demand_over_100() {
        let r = RouteRecord {
            route_id: "r1".into(),
            demand: Some(250.0),
            period_demand: [None; 4],
            required_vehicles: None,
        };
        assert_eq!(r.vehicle_cost(), 3);

        let exact = RouteRecord {
            route_id: "r2".into(),
            demand: Some(300.0),
            period_demand: [None; 4],
            required_vehicles: None,
        };
        assert_eq!(exact.vehicle_cost(), 3);
    }

    #[test]
    fn explicit_vehicle_count_wins() {
        let r = RouteRecord::new("r1", 250.0, 1);
        assert_eq!(r.vehicle_cost(), 1);
    }
}

#[cfg(test)]
mod optimize {
    use crate::{RouteRecord, TransitError, TransitOptimizer};

    fn fixture() -> TransitOptimizer {
        TransitOptimizer::new(vec![
            RouteRecord::new("r1", 600.0, 6),
            RouteRecord::new("r2", 400.0, 4),
            RouteRecord::new("r3", 300.0, 5),
            RouteRecord::new("r4", 250.0, 2),
        ])
    }

    #[test]
    fn zero_budget_selects_nothing() {
        assert!(fixture().optimize(0).unwrap().is_empty());
    }

    #[test]
    fn budget_covering_all_costs_selects_everything() {
        let selected = fixture().optimize(17).unwrap();
        assert_eq!(selected, ["r1", "r2", "r3", "r4"]);
    }

    #[test]
    fn route_costlier_than_budget_is_never_selected() {
        let opt = TransitOptimizer::new(vec![RouteRecord::new("big", 5000.0, 10)]);
        assert!(opt.optimize(9).unwrap().is_empty());
        assert_eq!(opt.optimize(10).unwrap(), ["big"]);
    }

    #[test]
    fn prefers_higher_demand_within_budget() {
        // Budget 10: r1 (600, cost 6) + r2 (400, cost 4) beats any other mix.
        let selected = fixture().optimize(10).unwrap();
        assert_eq!(selected, ["r1", "r2"]);
    }

    #[test]
    fn derived_cost_gates_selection() {
        // demand 250 → ceil(250/100) = 3 vehicles.
        let route = RouteRecord {
            route_id: "r1".into(),
            demand: Some(250.0),
            period_demand: [None; 4],
            required_vehicles: None,
        };
        let opt = TransitOptimizer::new(vec![route]);
        assert!(opt.optimize(2).unwrap().is_empty());
        assert_eq!(opt.optimize(3).unwrap(), ["r1"]);
    }

    #[test]
    fn negative_demand_is_invalid_input() {
        let opt = TransitOptimizer::new(vec![RouteRecord::new("r1", -5.0, 1)]);
        assert!(matches!(
            opt.optimize(10),
            Err(TransitError::InvalidInput(_))
        ));
    }

    /// Best achievable demand by trying every subset — the DP must match.
    fn brute_force_best(routes: &[RouteRecord], budget: u32) -> f64 {
        let n = routes.len();
        let mut best = 0.0f64;
        for mask in 0u32..(1u32 << n) {
            let (mut demand, mut cost) = (0.0, 0u32);
            for (i, r) in routes.iter().enumerate() {
                if mask & (1 << i) != 0 {
                    demand += r.total_demand();
                    cost += r.vehicle_cost();
                }
            }
            if cost <= budget && demand > best {
                best = demand;
            }
        }
        best
    }

    #[test]
    fn dp_matches_brute_force() {
        let routes: Vec<RouteRecord> = (0..12)
            .map(|i| {
                // Deterministic but uneven demand/cost mix.
                let demand = 100.0 + (i as f64 * 137.0) % 400.0;
                let vehicles = 1 + (i * 3) % 7;
                RouteRecord::new(format!("r{i}"), demand, vehicles as u32)
            })
            .collect();
        let opt = TransitOptimizer::new(routes.clone());

        for budget in [0, 1, 5, 10, 15, 20, 40] {
            let selected = opt.optimize(budget).unwrap();
            let demand: f64 = routes
                .iter()
                .filter(|r| selected.contains(&r.route_id))
                .map(RouteRecord::total_demand)
                .sum();
            let cost: u32 = routes
                .iter()
                .filter(|r| selected.contains(&r.route_id))
                .map(RouteRecord::vehicle_cost)
                .sum();
            assert!(cost <= budget, "budget respected at {budget}");
            assert_eq!(
                demand,
                brute_force_best(&routes, budget),
                "optimal at budget {budget}"
            );
        }
    }
}
