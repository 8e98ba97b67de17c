//! Reductions behind report summaries.
//!
//! Every function is total: empty input or a zero denominator yields `0`.

/// What a report line contributes to the summary strip.
pub trait Contribution {
    fn jobs(&self) -> i64;

    fn cancellations(&self) -> i64 {
        0
    }

    /// Whole pounds.
    fn revenue(&self) -> i64;
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub count: usize,
    pub jobs: i64,
    pub cancellations: i64,
    pub revenue: i64,
}

impl Totals {
    pub fn of<'a, T, I>(items: I) -> Self
    where
        T: Contribution + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        items.into_iter().fold(Self::default(), |acc, item| Self {
            count: acc.count + 1,
            jobs: acc.jobs + item.jobs(),
            cancellations: acc.cancellations + item.cancellations(),
            revenue: acc.revenue + item.revenue(),
        })
    }

    /// Revenue divided by jobs, rounded to pence.
    pub fn revenue_per_job(&self) -> f64 {
        round2(ratio(self.revenue, self.jobs))
    }

    /// Cancellations as a percentage of jobs.
    pub fn cancellation_rate(&self) -> f64 {
        share(self.cancellations, self.jobs)
    }
}

/// `part / whole`, or `0` when `whole` is zero.
pub fn ratio(part: i64, whole: i64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64
    }
}

/// `part / whole * 100`, or `0` when `whole` is zero.
pub fn share(part: i64, whole: i64) -> f64 {
    ratio(part, whole) * 100.0
}

/// Arithmetic mean, `0` for no values.
pub fn mean<I: IntoIterator<Item = f64>>(values: I) -> f64 {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0_u32), |(sum, count), value| (sum + value, count + 1));
    if count == 0 { 0.0 } else { sum / f64::from(count) }
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        revenue: i64,
        jobs: i64,
    }

    impl Contribution for Line {
        fn jobs(&self) -> i64 {
            self.jobs
        }

        fn revenue(&self) -> i64 {
            self.revenue
        }
    }

    #[test]
    fn test_totals_and_average_per_job() {
        let lines = [Line { revenue: 100, jobs: 2 }, Line { revenue: 50, jobs: 1 }];
        let totals = Totals::of(&lines);

        assert_eq!(totals.revenue, 150);
        assert_eq!(totals.jobs, 3);
        assert_eq!(totals.count, 2);
        assert!((totals.revenue_per_job() - 50.0).abs() < f64::EPSILON, "average should be 50");
    }

    #[test]
    fn test_empty_input_yields_zeros() {
        let totals = Totals::of(Vec::<Line>::new().iter());

        assert_eq!(totals, Totals::default());
        assert!(totals.revenue_per_job().abs() < f64::EPSILON, "no jobs means zero average");
        assert!(mean(std::iter::empty()).abs() < f64::EPSILON, "empty mean is zero");
        assert!(share(5, 0).abs() < f64::EPSILON, "zero total means zero share");
    }

    #[test]
    fn test_round2() {
        assert!((round2(58.098_592) - 58.1).abs() < 1e-9, "rounds to pence");
        assert!((round2(ratio(8250, 142)) - 58.1).abs() < 1e-9, "8250 / 142 ≈ 58.10");
    }

    #[test]
    fn test_mean_of_rates() {
        let avg = mean([92.0, 88.0, 86.0]);
        assert!((avg - 88.666_666).abs() < 1e-3, "unexpected mean {avg}");
    }
}
