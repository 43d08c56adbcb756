use crate::error::{Error, Result};
use crate::monotonic::{Extremum, MonotonicDeque};

/// Returns the maximum of every window of `width` consecutive elements.
///
/// The result has `seq.len() - width + 1` elements; element `i` is the
/// maximum of `seq[i..i + width]`.
///
/// # Errors
///
/// [`Error::InvalidWindow`] if `width` is zero or larger than `seq.len()`.
///
/// # Example
///
/// ```
/// use windowing_rs::sliding_window_max;
///
/// let maxima = sliding_window_max(&[1, 3, -1, -3, 5, 3, 6, 7], 3).unwrap();
/// assert_eq!(maxima, vec![3, 3, 5, 5, 6, 7]);
/// ```
pub fn sliding_window_max<T: Ord + Clone>(seq: &[T], width: usize) -> Result<Vec<T>> {
    window_extrema(seq, width, Extremum::Max)
}

/// Returns the minimum of every window of `width` consecutive elements.
///
/// Same contract as [`sliding_window_max`].
pub fn sliding_window_min<T: Ord + Clone>(seq: &[T], width: usize) -> Result<Vec<T>> {
    window_extrema(seq, width, Extremum::Min)
}

fn window_extrema<T: Ord + Clone>(seq: &[T], width: usize, extremum: Extremum) -> Result<Vec<T>> {
    if width == 0 || width > seq.len() {
        return Err(Error::InvalidWindow {
            width,
            len: seq.len(),
        });
    }

    let mut deque = MonotonicDeque::new(width, extremum);
    let mut out = Vec::with_capacity(seq.len() - width + 1);

    for i in 0..seq.len() {
        deque.push(i, seq);
        if i + 1 >= width {
            if let Some(front) = deque.front() {
                out.push(seq[front].clone());
            }
        }
    }

    Ok(out)
}
