//! Unit tests for tp-core primitives.

#[cfg(test)]
mod geo {
    use crate::Point;

    #[test]
    fn zero_distance() {
        let p = Point::new(3.5, -2.0);
        assert_eq!(p.distance_to(p), 0.0);
    }

    #[test]
    fn pythagorean_triple() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(a.distance_to(b), 5.0);
        assert_eq!(b.distance_to(a), 5.0);
    }

    #[test]
    fn display() {
        assert_eq!(Point::new(1.0, 2.5).to_string(), "(1.000, 2.500)");
    }
}

#[cfg(test)]
mod period {
    use crate::{FlowPeriod, TimePeriod};

    #[test]
    fn flow_period_order_is_fixed() {
        // Dominant-period tie-breaking depends on this exact order.
        assert_eq!(
            FlowPeriod::ALL,
            [
                FlowPeriod::Morning,
                FlowPeriod::Afternoon,
                FlowPeriod::Evening,
                FlowPeriod::Night,
            ]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(FlowPeriod::Afternoon.as_str(), "afternoon");
        assert_eq!(TimePeriod::Offpeak.as_str(), "offpeak");
        assert_eq!(TimePeriod::Morning.to_string(), "morning");
    }
}

#[cfg(test)]
mod flow {
    use crate::{FlowPeriod, RoadFlow};

    #[test]
    fn missing_counts_read_as_zero() {
        let rec = RoadFlow::new("a-b");
        assert_eq!(rec.count(FlowPeriod::Morning), 0.0);
        assert_eq!(rec.total(), 0.0);
    }

    #[test]
    fn total_sums_all_periods() {
        let rec = RoadFlow::with_counts("a-b", 1000.0, 500.0, 300.0, 200.0);
        assert_eq!(rec.total(), 2000.0);
        assert_eq!(rec.count(FlowPeriod::Night), 200.0);
    }

    #[test]
    fn set_count_overrides() {
        let mut rec = RoadFlow::new("a-b");
        rec.set_count(FlowPeriod::Evening, 750.0);
        assert_eq!(rec.count(FlowPeriod::Evening), 750.0);
        assert_eq!(rec.total(), 750.0);
    }
}
