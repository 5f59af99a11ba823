use super::slice_dice::partition;
use super::{Axis, Rect};

/// Target aspect ratio of squarified tiles.
const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// Squarified layout that keeps children in input order.
///
/// Children are packed into rows along the shorter side of the remaining
/// space; a row keeps growing while that improves its worst aspect ratio.
/// Each row is then sliced proportionally, like slice-and-dice.
pub fn squarify(values: &[f64], bounds: Rect) -> Vec<Rect> {
    let n = values.len();
    let mut result = Vec::with_capacity(n);
    let mut remaining_value: f64 = values.iter().sum();
    let Rect { mut x0, mut y0, x1, y1 } = bounds;

    // Nothing to weigh: fall back to an even split.
    if remaining_value <= 0.0 {
        return partition(values, bounds, Axis::X);
    }

    // Rows past the last weighted value would only hold zero-area tiles.
    let last_weighted = values.iter().rposition(|&v| v > 0.0);

    let mut i0 = 0;
    while i0 < n {
        let dx = x1 - x0;
        let dy = y1 - y0;

        // Degenerate remaining space or only zero values left: slice what's left.
        if dx <= 0.0 || dy <= 0.0 || remaining_value <= 0.0 {
            let axis = if dx >= dy { Axis::X } else { Axis::Y };
            result.extend(partition(&values[i0..], Rect::new(x0, y0, x1, y1), axis));
            break;
        }

        let (i1, row_value) = best_row(values, i0, dx, dy, remaining_value);
        let row = &values[i0..i1];
        let fraction = row_value / remaining_value;
        let fills_rest = i1 == n || last_weighted.map_or(true, |last| i1 > last);

        if dx < dy {
            // Wide-short row across the top
            let y_next = if fills_rest { y1 } else { y0 + dy * fraction };
            result.extend(partition(row, Rect::new(x0, y0, x1, y_next), Axis::X));
            y0 = y_next;
        } else {
            // Tall-narrow column on the left
            let x_next = if fills_rest { x1 } else { x0 + dx * fraction };
            result.extend(partition(row, Rect::new(x0, y0, x_next, y1), Axis::Y));
            x0 = x_next;
        }

        remaining_value -= row_value;
        i0 = i1;
    }

    result
}

/// Grow a row from `i0` while its worst aspect ratio keeps improving.
/// Returns the exclusive end index and the row's value.
fn best_row(values: &[f64], i0: usize, dx: f64, dy: f64, remaining_value: f64) -> (usize, f64) {
    let n = values.len();

    // Leading zero values ride along with the first non-zero one.
    let mut i1 = i0;
    let mut sum = 0.0;
    while i1 < n && sum <= 0.0 {
        sum += values[i1];
        i1 += 1;
    }

    let mut min_value = sum;
    let mut max_value = sum;
    let alpha = (dy / dx).max(dx / dy) / (remaining_value * GOLDEN_RATIO);
    let mut min_ratio = worst_ratio(sum, min_value, max_value, alpha);

    while i1 < n {
        let value = values[i1];
        let candidate_sum = sum + value;
        let candidate_min = min_value.min(value);
        let candidate_max = max_value.max(value);
        let ratio = worst_ratio(candidate_sum, candidate_min, candidate_max, alpha);
        if ratio > min_ratio {
            break;
        }
        sum = candidate_sum;
        min_value = candidate_min;
        max_value = candidate_max;
        min_ratio = ratio;
        i1 += 1;
    }

    (i1, sum)
}

fn worst_ratio(sum: f64, min_value: f64, max_value: f64, alpha: f64) -> f64 {
    let beta = sum * sum * alpha;
    if beta <= 0.0 || min_value <= 0.0 {
        return f64::INFINITY;
    }
    (max_value / beta).max(beta / min_value)
}
