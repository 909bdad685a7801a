//! Simple moving average over closing prices.
//!
//! O(n) sliding-window sum. SMA(n)[i] = mean(P[i-n+1 ..= i]).
//! Warmup: the first (n-1) indices have no value.

/// Trailing simple moving average of `closes` with the given window.
///
/// Output is parallel to the input; indices without a full window are `None`.
/// A zero window produces all-`None` output (rejected upstream by the engine).
pub fn simple_moving_average(closes: &[f64], window: usize) -> Vec<Option<f64>> {
    if window == 0 {
        return vec![None; closes.len()];
    }

    let mut values = Vec::with_capacity(closes.len());
    let mut window_sum: f64 = 0.0;

    for (i, &close) in closes.iter().enumerate() {
        window_sum += close;
        if i >= window {
            window_sum -= closes[i - window];
        }

        if i + 1 >= window {
            values.push(Some(window_sum / window as f64));
        } else {
            values.push(None);
        }
    }

    values
}
