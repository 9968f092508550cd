/// Trailing moving average over `data` with the given window length.
///
/// The output has the same length as the input. Element `i` is the mean of
/// `data[max(0, i - window + 1) ..= i]`: an expanding mean over the first
/// `window - 1` points, then a full trailing mean of exactly `window` points.
/// The expanding left edge keeps the average plottable over the whole visible
/// range, at the cost of a biased average near the start of the window.
///
/// Single pass with a running sum, so a refresh tick costs O(n) no matter how
/// large the window is. A window of 0 is treated as 1.
pub fn trailing_average(data: &[f64], window: usize) -> Vec<f64> {
    let window = window.max(1);
    let mut out = Vec::with_capacity(data.len());
    let mut sum = 0.0;

    for (i, &value) in data.iter().enumerate() {
        sum += value;
        if i >= window {
            sum -= data[i - window];
        }
        let span = (i + 1).min(window);
        out.push(sum / span as f64);
    }

    out
}
