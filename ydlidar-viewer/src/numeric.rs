use ydlidar_data::{Point2D, ScanFrame};

pub fn polar_to_cartesian(distance: f64, angle_radian: f64) -> Point2D {
    Point2D {
        x: distance * f64::cos(angle_radian),
        y: distance * f64::sin(angle_radian),
    }
}

/// Replaces the contents of `points` with one point per sample of `frame`.
pub fn frame_to_points(frame: &ScanFrame, points: &mut Vec<Point2D>) {
    points.clear();
    points.extend(
        frame
            .samples()
            .map(|s| polar_to_cartesian(s.distance as f64, s.angle as f64)),
    );
}
