#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One measurement returned by the sensor.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanSample {
    /// Distance to an object. Never negative.
    pub distance: f32,
    /// Scan angle in radian.
    pub angle: f32,
}

/// Struct to hold one lap of lidar scan data.
///
/// The two buffers are allocated once with the sensor's point count and are
/// overwritten in place by every acquisition. The length never changes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanFrame {
    distances: Vec<f32>,
    angles_radian: Vec<f32>,
}

impl ScanFrame {
    /// Allocates a zeroed frame holding `n_points` samples.
    pub fn new(n_points: usize) -> ScanFrame {
        ScanFrame {
            distances: vec![0.; n_points],
            angles_radian: vec![0.; n_points],
        }
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn distances(&self) -> &[f32] {
        &self.distances
    }

    pub fn angles_radian(&self) -> &[f32] {
        &self.angles_radian
    }

    /// Output buffers handed to the driver. Both slices have `self.len()` elements.
    pub fn buffers_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.distances, &mut self.angles_radian)
    }

    pub fn samples(&self) -> impl ExactSizeIterator<Item = ScanSample> + '_ {
        self.distances
            .iter()
            .zip(self.angles_radian.iter())
            .map(|(&distance, &angle)| ScanSample { distance, angle })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_frame_is_zeroed() {
        let frame = ScanFrame::new(269);
        assert_eq!(frame.len(), 269);
        assert!(!frame.is_empty());
        assert!(frame.distances().iter().all(|d| *d == 0.));
        assert!(frame.angles_radian().iter().all(|a| *a == 0.));
    }

    #[test]
    fn test_buffers_are_overwritten_in_place() {
        let mut frame = ScanFrame::new(3);
        {
            let (distances, angles) = frame.buffers_mut();
            distances.copy_from_slice(&[1.0, 2.0, 0.5]);
            angles.copy_from_slice(&[0.0, 1.5, 3.0]);
        }
        assert_eq!(frame.len(), 3);

        let samples: Vec<_> = frame.samples().collect();
        assert_eq!(
            samples,
            vec![
                ScanSample { distance: 1.0, angle: 0.0 },
                ScanSample { distance: 2.0, angle: 1.5 },
                ScanSample { distance: 0.5, angle: 3.0 },
            ]
        );

        let (distances, _) = frame.buffers_mut();
        distances[1] = 4.0;
        assert_eq!(frame.distances(), &[1.0, 4.0, 0.5]);
        assert_eq!(frame.len(), 3);
    }

    #[test]
    fn test_empty_frame() {
        let frame = ScanFrame::new(0);
        assert!(frame.is_empty());
        assert_eq!(frame.samples().len(), 0);
    }
}
