use std::fmt::Debug;

use crate::des::continuous::Formatter;
use crate::des::scale::Domain;
use crate::style::defaults;

/// Number of ticks generated for a bar of the given length when no
/// explicit values or count are designed. Longer bars carry more ticks.
pub(crate) fn auto_tick_count(length: f32) -> usize {
    ((length / defaults::TICK_DENSITY).round() as usize)
        .clamp(defaults::MIN_AUTO_TICKS, defaults::MAX_AUTO_TICKS)
}

/// Sample `count` evenly spaced values over the domain, both extremes
/// included. `count` is raised to 2 if needed.
pub(crate) fn sample_even(domain: Domain, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let step = domain.span() / (count - 1) as f64;
    let mut values: Vec<f64> = (0..count).map(|i| domain.start() + i as f64 * step).collect();
    // pin the last sample to avoid accumulation drift
    values[count - 1] = domain.end();
    values
}

/// Thin tick indices until consecutive labels fit.
///
/// Labels at `positions` with the given `extents` must be separated by at
/// least half their extents plus `min_gap`. The first and last indices are
/// always kept; interior indices are dropped by trying increasing strides
/// until the kept set fits, degenerating to the two extremes. The result
/// never has more indices than the input.
pub(crate) fn thin_to_fit(positions: &[f32], extents: &[f32], min_gap: f32) -> Vec<usize> {
    let n = positions.len();
    debug_assert_eq!(n, extents.len());

    let all: Vec<usize> = (0..n).collect();
    if n <= 2 || fits(&all, positions, extents, min_gap) {
        return all;
    }

    for stride in 2..n {
        let mut kept: Vec<usize> = (0..n - 1).step_by(stride).collect();
        if *kept.last().unwrap() != n - 1 {
            kept.push(n - 1);
        }
        if fits(&kept, positions, extents, min_gap) {
            log::debug!("thinned tick labels from {} to {}", n, kept.len());
            return kept;
        }
    }

    log::debug!("thinned tick labels from {} down to the extremes", n);
    vec![0, n - 1]
}

fn fits(kept: &[usize], positions: &[f32], extents: &[f32], min_gap: f32) -> bool {
    kept.windows(2).all(|w| {
        let (i, j) = (w[0], w[1]);
        (positions[j] - positions[i]).abs() >= (extents[i] + extents[j]) / 2.0 + min_gap
    })
}

/// Formats tick domain values into labels
pub trait LabelFormatter: Debug {
    /// Format one tick value
    fn format_label(&self, value: f64) -> String;
}

/// Select a formatter implementation for the designed formatting and the
/// scale domain
pub(crate) fn label_formatter(fmt: Formatter, domain: Domain) -> Box<dyn LabelFormatter> {
    match fmt {
        Formatter::Auto => auto_label_formatter(domain),
        Formatter::Prec(prec) => Box::new(PrecLabelFormat(prec)),
        Formatter::Percent(prec) => Box::new(PercentLabelFormat(prec)),
        Formatter::Sci => Box::new(SciLabelFormat),
    }
}

fn auto_label_formatter(domain: Domain) -> Box<dyn LabelFormatter> {
    let max = domain.start().abs().max(domain.end().abs());
    if max >= 10000.0 || (max > 0.0 && max < 0.01) {
        Box::new(SciLabelFormat)
    } else if max >= 100.0 {
        Box::new(PrecLabelFormat(0))
    } else if max >= 10.0 {
        Box::new(PrecLabelFormat(1))
    } else {
        Box::new(PrecLabelFormat(2))
    }
}

#[derive(Debug, Clone)]
struct PrecLabelFormat(usize);

impl LabelFormatter for PrecLabelFormat {
    fn format_label(&self, value: f64) -> String {
        format!("{:.*}", self.0, value)
    }
}

#[derive(Debug)]
struct SciLabelFormat;

impl LabelFormatter for SciLabelFormat {
    fn format_label(&self, value: f64) -> String {
        format!("{value:.2e}")
    }
}

#[derive(Debug)]
struct PercentLabelFormat(usize);

impl LabelFormatter for PercentLabelFormat {
    fn format_label(&self, value: f64) -> String {
        format!("{:.*}%", self.0, value * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{Near, assert_near};

    #[test]
    fn auto_count_follows_length() {
        assert_eq!(auto_tick_count(200.0), 5);
        assert_eq!(auto_tick_count(400.0), 10);
        // clamped on both ends
        assert_eq!(auto_tick_count(10.0), 2);
        assert_eq!(auto_tick_count(10000.0), 11);
    }

    #[test]
    fn sample_even_includes_extremes() {
        let samples = sample_even(Domain::new(0.0, 100.0), 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], 0.0);
        assert_eq!(samples[4], 100.0);
        assert_near!(abs, samples[1], 25.0);
        assert_near!(abs, samples[2], 50.0);
        assert_near!(abs, samples[3], 75.0);
    }

    #[test]
    fn sample_even_zero_span() {
        let samples = sample_even(Domain::new(5.0, 5.0), 3);
        assert_eq!(samples, vec![5.0, 5.0, 5.0]);
    }

    #[test]
    fn thin_keeps_fitting_set() {
        let positions = [0.0, 100.0, 200.0];
        let extents = [10.0, 10.0, 10.0];
        assert_eq!(thin_to_fit(&positions, &extents, 3.0), vec![0, 1, 2]);
    }

    #[test]
    fn thin_drops_interior_first() {
        // 5 ticks, 25px apart, labels 40px wide: every other tick must go
        let positions = [0.0, 25.0, 50.0, 75.0, 100.0];
        let extents = [40.0; 5];
        let kept = thin_to_fit(&positions, &extents, 3.0);
        assert_eq!(*kept.first().unwrap(), 0);
        assert_eq!(*kept.last().unwrap(), 4);
        assert!(kept.len() < 5);
    }

    #[test]
    fn thin_degenerates_to_extremes() {
        let positions = [0.0, 5.0, 10.0, 15.0, 20.0];
        let extents = [50.0; 5];
        assert_eq!(thin_to_fit(&positions, &extents, 3.0), vec![0, 4]);
    }

    #[test]
    fn thin_never_grows() {
        let positions = [0.0, 20.0, 40.0, 60.0, 80.0, 100.0];
        let extents = [25.0; 6];
        let kept = thin_to_fit(&positions, &extents, 3.0);
        assert!(kept.len() <= positions.len());
    }

    #[test]
    fn formatter_prec_and_percent() {
        let fmt = label_formatter(Formatter::Prec(1), Domain::new(0.0, 1.0));
        assert_eq!(fmt.format_label(0.25), "0.2");

        let fmt = label_formatter(Formatter::Percent(0), Domain::new(0.0, 1.0));
        assert_eq!(fmt.format_label(0.25), "25%");
    }

    #[test]
    fn formatter_auto_magnitude() {
        let fmt = label_formatter(Formatter::Auto, Domain::new(0.0, 100000.0));
        assert_eq!(fmt.format_label(50000.0), "5.00e4");

        let fmt = label_formatter(Formatter::Auto, Domain::new(0.0, 100.0));
        assert_eq!(fmt.format_label(25.0), "25");

        let fmt = label_formatter(Formatter::Auto, Domain::new(0.0, 1.0));
        assert_eq!(fmt.format_label(0.25), "0.25");
    }
}
