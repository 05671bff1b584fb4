//! Unit tests for tp-signal.

#[cfg(test)]
mod congestion {
    use tp_core::{FlowPeriod, RoadFlow};

    use crate::{CongestionLevel, TrafficSimulator};

    #[test]
    fn green_time_proportional_to_flow() {
        let sim = TrafficSimulator::new(vec![RoadFlow::with_counts(
            "a-b", 1000.0, 500.0, 300.0, 200.0,
        )]);
        let reports = sim.simulate_congestion();
        assert_eq!(reports.len(), 1);

        let r = &reports[0];
        assert_eq!(r.total_flow, 2000.0);
        assert_eq!(r.green_time.get(FlowPeriod::Morning), 30.0);
        assert_eq!(r.green_time.get(FlowPeriod::Afternoon), 15.0);
        assert_eq!(r.green_time.get(FlowPeriod::Evening), 9.0);
        assert_eq!(r.green_time.get(FlowPeriod::Night), 6.0);
        assert_eq!(r.dominant_period, FlowPeriod::Morning);
        assert_eq!(r.congestion, CongestionLevel::Moderate);
    }

    #[test]
    fn zero_flow_allocates_nothing() {
        let sim = TrafficSimulator::new(vec![RoadFlow::new("a-b")]);
        let r = &sim.simulate_congestion()[0];

        assert_eq!(r.total_flow, 0.0);
        for period in FlowPeriod::ALL {
            assert_eq!(r.green_time.get(period), 0.0);
        }
        assert_eq!(r.congestion, CongestionLevel::Low);
        // Ties (all zero) resolve to the first period in order.
        assert_eq!(r.dominant_period, FlowPeriod::Morning);
    }

    #[test]
    fn classification_boundaries() {
        assert_eq!(CongestionLevel::from_total_flow(3000.0), CongestionLevel::High);
        assert_eq!(CongestionLevel::from_total_flow(2999.9), CongestionLevel::Moderate);
        assert_eq!(CongestionLevel::from_total_flow(1500.0), CongestionLevel::Moderate);
        assert_eq!(CongestionLevel::from_total_flow(1499.0), CongestionLevel::Low);
    }

    #[test]
    fn dominant_tie_breaks_by_enumeration_order() {
        // Afternoon and evening share the maximum; afternoon comes first.
        let sim = TrafficSimulator::new(vec![RoadFlow::with_counts(
            "a-b", 100.0, 400.0, 400.0, 50.0,
        )]);
        let r = &sim.simulate_congestion()[0];
        assert_eq!(r.dominant_period, FlowPeriod::Afternoon);
    }

    #[test]
    fn allocations_round_to_one_decimal() {
        // Sevenths don't divide 60 evenly: 1/7 × 60 = 8.571…, 2/7 × 60 =
        // 17.142…, 4/7 × 60 = 34.285….
        let sim = TrafficSimulator::new(vec![RoadFlow::with_counts(
            "a-b", 1.0, 2.0, 4.0, 0.0,
        )]);
        let r = &sim.simulate_congestion()[0];
        assert_eq!(r.green_time.get(FlowPeriod::Morning), 8.6);
        assert_eq!(r.green_time.get(FlowPeriod::Afternoon), 17.1);
        assert_eq!(r.green_time.get(FlowPeriod::Evening), 34.3);
        assert_eq!(r.green_time.get(FlowPeriod::Night), 0.0);
    }
}

#[cfg(test)]
mod emergency {
    use std::collections::HashMap;

    use tp_core::{FlowPeriod, RoadFlow};

    use crate::{PlanReason, TrafficSimulator};

    #[test]
    fn flagged_road_gets_priority_split() {
        let sim = TrafficSimulator::new(vec![
            RoadFlow::with_counts("a-b", 100.0, 100.0, 100.0, 100.0),
            RoadFlow::with_counts("c-d", 100.0, 100.0, 100.0, 100.0),
        ]);
        let flags: HashMap<String, FlowPeriod> =
            [("a-b".to_owned(), FlowPeriod::Evening)].into_iter().collect();

        let plans = sim.prioritize_emergency(&flags);
        assert_eq!(plans.len(), 2);

        let flagged = &plans[0];
        assert_eq!(flagged.reason, PlanReason::EmergencyPriority(FlowPeriod::Evening));
        assert_eq!(flagged.allocation.get(FlowPeriod::Evening), 30.0);
        for period in [FlowPeriod::Morning, FlowPeriod::Afternoon, FlowPeriod::Night] {
            assert_eq!(flagged.allocation.get(period), 10.0);
        }

        let unflagged = &plans[1];
        assert_eq!(unflagged.reason, PlanReason::NormalCycle);
        for period in FlowPeriod::ALL {
            assert_eq!(unflagged.allocation.get(period), 15.0);
        }
    }

    #[test]
    fn reason_labels() {
        assert_eq!(
            PlanReason::EmergencyPriority(FlowPeriod::Morning).to_string(),
            "emergency priority -> morning"
        );
        assert_eq!(PlanReason::NormalCycle.to_string(), "normal cycle");
    }
}

#[cfg(test)]
mod greedy_vs_fixed {
    use tp_core::{FlowPeriod, RoadFlow};

    use crate::{CongestionLevel, TrafficSimulator};

    #[test]
    fn dominant_share_drives_greedy_allocation() {
        let sim = TrafficSimulator::new(vec![RoadFlow::with_counts(
            "a-b", 1000.0, 500.0, 300.0, 200.0,
        )]);
        let analysis = sim.analyze_greedy_vs_fixed();
        assert_eq!(analysis.len(), 1);

        let c = &analysis[0];
        assert_eq!(c.dominant_period, FlowPeriod::Morning);
        assert_eq!(c.greedy_allocation, 30.0);
        assert_eq!(c.fixed_allocation, 15.0);
        assert!(c.is_optimal);
        assert_eq!(c.congestion, CongestionLevel::Moderate);
    }

    #[test]
    fn perfectly_even_flow_matches_the_baseline() {
        let sim = TrafficSimulator::new(vec![RoadFlow::with_counts(
            "a-b", 500.0, 500.0, 500.0, 500.0,
        )]);
        let c = &sim.analyze_greedy_vs_fixed()[0];
        assert_eq!(c.greedy_allocation, 15.0);
        assert!(c.is_optimal, "greedy equals fixed at perfectly even flow");
    }

    #[test]
    fn zero_flow_records_are_skipped() {
        let sim = TrafficSimulator::new(vec![
            RoadFlow::new("dead-road"),
            RoadFlow::with_counts("live-road", 800.0, 100.0, 50.0, 50.0),
        ]);
        let analysis = sim.analyze_greedy_vs_fixed();
        assert_eq!(analysis.len(), 1);
        assert_eq!(analysis[0].road_id, "live-road");
    }
}
