//! Sequence construction for model input
//!
//! The model has a fixed receptive field of `sequence_length` samples.
//! Shorter histories are left-padded with zeros (no prior readings);
//! longer histories become overlapping windows sliding by one sample so
//! the caller can aggregate over every sub-sequence of a run.

use ndarray::Array2;

/// Turn a chronological weight series into a batch of fixed-length
/// windows, shape `(num_windows, sequence_length)`.
///
/// - `N >= L`: `N - L + 1` overlapping windows, window `i` covering
///   elements `[i, i + L)`.
/// - `N < L` (including empty input): exactly one window, the series
///   left-padded with zeros to length `L`.
///
/// Always produces at least one window.
pub fn build_windows(weights: &[f64], sequence_length: usize) -> Array2<f32> {
    let n = weights.len();

    if n < sequence_length {
        let mut windows = Array2::<f32>::zeros((1, sequence_length));
        let pad = sequence_length - n;
        for (i, &w) in weights.iter().enumerate() {
            windows[[0, pad + i]] = w as f32;
        }
        return windows;
    }

    let count = n - sequence_length + 1;
    let mut windows = Array2::<f32>::zeros((count, sequence_length));
    for i in 0..count {
        for j in 0..sequence_length {
            windows[[i, j]] = weights[i + j] as f32;
        }
    }
    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_one_zero_window() {
        let windows = build_windows(&[], 8);
        assert_eq!(windows.dim(), (1, 8));
        assert!(windows.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn short_input_is_left_padded() {
        let windows = build_windows(&[1.0, 2.0, 3.0], 5);
        assert_eq!(windows.dim(), (1, 5));

        let row: Vec<f32> = windows.row(0).to_vec();
        assert_eq!(row, vec![0.0, 0.0, 1.0, 2.0, 3.0]);
    }

    #[test]
    fn exact_length_is_one_window() {
        let input = [1.0, 2.0, 3.0, 4.0];
        let windows = build_windows(&input, 4);
        assert_eq!(windows.dim(), (1, 4));
        assert_eq!(windows.row(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn long_input_slides_by_one() {
        let input = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let windows = build_windows(&input, 4);
        assert_eq!(windows.dim(), (3, 4));

        assert_eq!(windows.row(0).to_vec(), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(windows.row(1).to_vec(), vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(windows.row(2).to_vec(), vec![3.0, 4.0, 5.0, 6.0]);
    }
}
