//! Running median over a fixed window of raw samples.
//!
//! Raw readings carry occasional single-sample spikes that a mean would smear
//! across the output; a median drops them outright. The fusion pipeline runs
//! one filter per accelerometer axis in front of the complementary filter.

use crate::circular_buffer::CircularBuffer;

/// Median filter over the last `N` samples.
///
/// Odd `N` gives the true median once the window is full.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
pub struct MedianFilter<const N: usize> {
    window: CircularBuffer<i16, N>,
}

impl<const N: usize> MedianFilter<N> {
    pub fn new() -> Self {
        Self {
            window: CircularBuffer::new(),
        }
    }

    /// Push one sample into the window, evicting the oldest when full.
    pub fn update(&mut self, sample: i16) {
        self.window.push(sample);
    }

    /// Median of the samples currently in the window.
    ///
    /// Only samples actually written participate: a partially filled window
    /// reports the median of what it holds, an empty window reports 0. For an
    /// even count the upper of the two middle values is returned.
    pub fn median(&self) -> i16 {
        let filled = self.window.filled();
        if filled.is_empty() {
            return 0;
        }
        let mut scratch = [0i16; N];
        let scratch = &mut scratch[..filled.len()];
        scratch.copy_from_slice(filled);
        let (_, median, _) = scratch.select_nth_unstable(filled.len() / 2);
        *median
    }
}

impl<const N: usize> Default for MedianFilter<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::MedianFilter;

    #[test]
    fn median_of_full_window() {
        let mut filter: MedianFilter<5> = MedianFilter::new();
        for sample in [3, 1, 4, 1, 5] {
            filter.update(sample);
        }
        assert_eq!(filter.median(), 3);
    }

    #[test]
    fn median_of_partial_window() {
        let mut filter: MedianFilter<5> = MedianFilter::new();
        assert_eq!(filter.median(), 0);

        filter.update(7);
        assert_eq!(filter.median(), 7);

        // even count: upper middle value
        filter.update(3);
        assert_eq!(filter.median(), 7);

        filter.update(5);
        assert_eq!(filter.median(), 5);
    }

    #[test]
    fn median_follows_the_window() {
        let mut filter: MedianFilter<3> = MedianFilter::new();
        for sample in [1, 2, 3] {
            filter.update(sample);
        }
        assert_eq!(filter.median(), 2);

        // spike enters, oldest sample leaves
        filter.update(100);
        assert_eq!(filter.median(), 3);

        filter.update(100);
        filter.update(100);
        assert_eq!(filter.median(), 100);
    }

    #[test]
    fn spike_rejection() {
        let mut filter: MedianFilter<5> = MedianFilter::new();
        for sample in [16380, 16385, 32767, 16382, 16384] {
            filter.update(sample);
        }
        assert_eq!(filter.median(), 16384);
    }

    #[test]
    fn negative_samples() {
        let mut filter: MedianFilter<3> = MedianFilter::new();
        for sample in [-5, -1, -3] {
            filter.update(sample);
        }
        assert_eq!(filter.median(), -3);
    }
}
