use crate::core::data::complex::Complex;
use crate::core::data::viewport::Viewport;

/// Quartic ease-out from `begin` to `end` at step `i` of `steps`.
///
/// Large moves early, small ones late. The last step lands on `end` exactly;
/// paths of fewer than two steps stay at `begin`.
#[must_use]
pub fn ease_out_quartic(begin: f64, end: f64, i: usize, steps: usize) -> f64 {
    if steps < 2 {
        return begin;
    }

    let last = steps - 1;
    if i >= last {
        return end;
    }

    let t = i as f64 / last as f64;

    begin - ((t - 1.0).powi(4) - 1.0) * (end - begin)
}

/// Viewports along an eased trajectory between two views.
///
/// Centre real, centre imaginary and width are eased independently. The
/// iterator is finite; call [`ease_path`] again to replay it.
#[derive(Debug, Clone)]
pub struct EasePath {
    begin: Viewport,
    end: Viewport,
    steps: usize,
    next: usize,
}

impl Iterator for EasePath {
    type Item = Viewport;

    fn next(&mut self) -> Option<Viewport> {
        if self.next >= self.steps {
            return None;
        }

        let i = self.next;
        self.next += 1;

        if self.steps == 1 {
            return Some(self.begin);
        }

        let (begin_real, begin_imag, begin_width) = self.begin.as_tuple();
        let (end_real, end_imag, end_width) = self.end.as_tuple();

        Some(Viewport::from((
            ease_out_quartic(begin_real, end_real, i, self.steps),
            ease_out_quartic(begin_imag, end_imag, i, self.steps),
            ease_out_quartic(begin_width, end_width, i, self.steps),
        )))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.steps - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for EasePath {}

/// Eases from `begin` to `end` over `steps` viewports.
///
/// Zero steps yield nothing and a single step yields `begin`.
#[must_use]
pub fn ease_path(begin: Viewport, end: Viewport, steps: usize) -> EasePath {
    EasePath {
        begin,
        end,
        steps,
        next: 0,
    }
}

/// Eases from `begin` towards a view of `end_width` centred on `target`.
#[must_use]
pub fn zoom_toward(begin: Viewport, target: Complex, end_width: f64, steps: usize) -> EasePath {
    ease_path(begin, Viewport::new(target, end_width), steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widths(path: EasePath) -> Vec<f64> {
        path.map(|viewport| viewport.width).collect()
    }

    #[test]
    fn test_unit_ease_values() {
        let values: Vec<f64> = (0..5).map(|i| ease_out_quartic(0.0, 1.0, i, 5)).collect();

        assert_eq!(values, vec![0.0, 0.68359375, 0.9375, 0.99609375, 1.0]);
    }

    #[test]
    fn test_last_step_is_end_for_inexact_endpoints() {
        // 3.0 + (0.002 - 3.0) rounds away from 0.002
        assert_eq!(ease_out_quartic(3.0, 0.002, 59, 60), 0.002);
        assert_eq!(ease_out_quartic(-0.5, -0.743643887037151, 59, 60), -0.743643887037151);
    }

    #[test]
    fn test_short_paths_stay_at_begin() {
        assert_eq!(ease_out_quartic(3.0, 0.002, 0, 0), 3.0);
        assert_eq!(ease_out_quartic(3.0, 0.002, 0, 1), 3.0);
    }

    #[test]
    fn test_zoom_path_ends_on_target_view() {
        let begin = Viewport::from((-0.5, 0.0, 3.0));
        let target = Complex::new(-0.743643887037151, 0.13182590420533);
        let path: Vec<Viewport> = zoom_toward(begin, target, 0.002, 60).collect();

        assert_eq!(path[59], Viewport::new(target, 0.002));
    }

    #[test]
    fn test_path_starts_at_begin_and_ends_at_end() {
        let begin = Viewport::from((0.0, 0.0, 0.0));
        let end = Viewport::from((1.0, 1.0, 1.0));
        let path: Vec<Viewport> = ease_path(begin, end, 5).collect();

        assert_eq!(path.len(), 5);
        assert_eq!(path[0], begin);
        assert_eq!(path[4], end);
    }

    #[test]
    fn test_steps_shrink_over_time() {
        let values = widths(ease_path(
            Viewport::from((0.0, 0.0, 0.0)),
            Viewport::from((0.0, 0.0, 1.0)),
            5,
        ));
        let deltas: Vec<f64> = values.windows(2).map(|w| (w[1] - w[0]).abs()).collect();

        assert!(deltas.windows(2).all(|d| d[1] < d[0]), "{:?}", deltas);
    }

    #[test]
    fn test_axes_are_eased_independently() {
        let begin = Viewport::from((-0.5, 0.0, 3.0));
        let end = Viewport::from((-1.5, 0.5, 1.0));
        let path: Vec<Viewport> = ease_path(begin, end, 3).collect();

        // t = 0.5: (0.5 - 1)^4 = 0.0625
        assert_eq!(path[1].as_tuple(), (-1.4375, 0.46875, 1.125));
    }

    #[test]
    fn test_zoom_out_is_also_eased() {
        let values = widths(ease_path(
            Viewport::from((0.0, 0.0, 1.0)),
            Viewport::from((0.0, 0.0, 0.0)),
            5,
        ));

        assert_eq!(values, vec![1.0, 0.31640625, 0.0625, 0.00390625, 0.0]);
    }

    #[test]
    fn test_zero_and_single_step_paths() {
        let begin = Viewport::from((1.0, 2.0, 3.0));
        let end = Viewport::from((4.0, 5.0, 6.0));

        assert_eq!(ease_path(begin, end, 0).count(), 0);
        assert_eq!(ease_path(begin, end, 1).collect::<Vec<_>>(), vec![begin]);
    }

    #[test]
    fn test_path_is_replayable() {
        let begin = Viewport::from((-0.5, 0.0, 3.0));
        let end = Viewport::from((-0.75, 0.1, 0.01));

        let first: Vec<Viewport> = ease_path(begin, end, 12).collect();
        let second: Vec<Viewport> = ease_path(begin, end, 12).collect();

        assert_eq!(first, second);
    }

    #[test]
    fn test_exact_size() {
        let mut path = ease_path(Viewport::default(), Viewport::from((1.0, 1.0, 1.0)), 4);

        assert_eq!(path.len(), 4);
        path.next();
        assert_eq!(path.len(), 3);
    }

    #[test]
    fn test_zoom_toward_target() {
        let begin = Viewport::from((-0.5, 0.0, 3.0));
        let target = Complex::new(-0.75, 0.1);
        let path: Vec<Viewport> = zoom_toward(begin, target, 0.5, 6).collect();

        assert_eq!(path.len(), 6);
        assert_eq!(path[0], begin);
        assert_eq!(path[5], Viewport::new(target, 0.5));
    }
}
