use super::{Axis, Rect};

/// Cut `bounds` into one slice per value along `axis`, in input order.
///
/// Each slice spans `value / total` of the extent along `axis` and the full
/// extent of the other axis. Boundaries come from the running sum, and the last
/// slice ends exactly on the far edge, so consecutive slices share edges and
/// cover `bounds` with no gap or overlap. A zero total splits evenly.
pub fn partition(values: &[f64], bounds: Rect, axis: Axis) -> Vec<Rect> {
    let n = values.len();
    let total: f64 = values.iter().sum();

    let (start, end) = match axis {
        Axis::X => (bounds.x0, bounds.x1),
        Axis::Y => (bounds.y0, bounds.y1),
    };
    let extent = end - start;

    let mut result = Vec::with_capacity(n);
    let mut cumulative = 0.0;
    let mut lo = start;
    for (i, &value) in values.iter().enumerate() {
        cumulative += value;
        // Once the running sum reaches the total, everything else sits on the far edge.
        let hi = if i + 1 == n || (total > 0.0 && cumulative >= total) {
            end
        } else if total > 0.0 {
            (start + extent * (cumulative / total)).min(end)
        } else {
            (start + extent * ((i + 1) as f64 / n as f64)).min(end)
        };

        result.push(match axis {
            Axis::X => Rect::new(lo, bounds.y0, hi, bounds.y1),
            Axis::Y => Rect::new(bounds.x0, lo, bounds.x1, hi),
        });
        lo = hi;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn proportional_vertical_slices() {
        let rects = partition(&[10.0, 30.0], Rect::new(0.0, 0.0, 100.0, 100.0), Axis::X);
        assert_eq!(rects, [Rect::new(0.0, 0.0, 25.0, 100.0), Rect::new(25.0, 0.0, 100.0, 100.0)]);
    }

    #[test]
    fn horizontal_slices_keep_width() {
        let rects = partition(&[1.0, 1.0, 2.0], Rect::new(10.0, 20.0, 30.0, 60.0), Axis::Y);
        assert_eq!(rects[0], Rect::new(10.0, 20.0, 30.0, 30.0));
        assert_eq!(rects[1], Rect::new(10.0, 30.0, 30.0, 40.0));
        assert_eq!(rects[2], Rect::new(10.0, 40.0, 30.0, 60.0));
    }

    #[test]
    fn zero_value_gets_zero_width() {
        let rects = partition(&[3.0, 0.0, 1.0], Rect::new(0.0, 0.0, 8.0, 4.0), Axis::X);
        assert_eq!(rects[1].area(), 0.0);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 6.0, 4.0));
        assert_eq!(rects[2], Rect::new(6.0, 0.0, 8.0, 4.0));
    }

    #[test]
    fn trailing_zero_value_collapses_on_far_edge() {
        let rects = partition(&[5.0, 0.0], Rect::new(0.0, 0.0, 10.0, 10.0), Axis::X);
        assert_eq!(rects[0], Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(rects[1], Rect::new(10.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn all_zero_splits_evenly() {
        let rects = partition(&[0.0, 0.0, 0.0, 0.0], Rect::new(0.0, 0.0, 8.0, 2.0), Axis::X);
        for (i, r) in rects.iter().enumerate() {
            assert_eq!(r.x0, 2.0 * i as f64);
            assert_eq!(r.width(), 2.0);
        }
    }

    #[test]
    fn no_values_no_slices() {
        assert!(partition(&[], Rect::new(0.0, 0.0, 1.0, 1.0), Axis::Y).is_empty());
    }
}
