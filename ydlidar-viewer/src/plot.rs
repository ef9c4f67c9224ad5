use crate::constants::{DEFAULT_FPS, DEFAULT_PLOT_RANGE, POINT_RADIUS, WINDOW_SIZE, WINDOW_TITLE};
use crate::error::ViewerError;
use piston_window::{EventLoop, PistonWindow, WindowSettings};
use plotters::drawing::IntoDrawingArea;
use plotters::prelude::{ChartBuilder, Circle, GREEN, WHITE};
use plotters::style::Color;
use plotters_piston::{draw_piston_window, PistonBackend};
use std::error::Error;
use ydlidar_data::Point2D;

/// Whether the display is still there after presenting a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderStatus {
    Open,
    Closed,
}

/// Something that shows the latest scan.
pub trait ScanRenderer {
    /// Replaces the displayed points and presents them.
    fn draw(&mut self, points: &[Point2D]) -> RenderStatus;

    /// Presents the last drawn points again.
    fn idle(&mut self) -> RenderStatus;
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlotSettings {
    pub title: String,
    /// Width and height of the square window in pixels.
    pub window_size: u32,
    /// Both axes span `-range..range`.
    pub range: f64,
    pub max_fps: u64,
}

impl Default for PlotSettings {
    fn default() -> Self {
        PlotSettings {
            title: WINDOW_TITLE.to_string(),
            window_size: WINDOW_SIZE,
            range: DEFAULT_PLOT_RANGE,
            max_fps: DEFAULT_FPS,
        }
    }
}

/// Scatter plot in a piston window.
pub struct PistonRenderer {
    window: PistonWindow,
    settings: PlotSettings,
    points: Vec<(f64, f64)>,
}

impl PistonRenderer {
    pub fn open(settings: &PlotSettings) -> Result<PistonRenderer, ViewerError> {
        let mut window: PistonWindow =
            WindowSettings::new(settings.title.as_str(), [settings.window_size; 2])
                .exit_on_esc(true)
                .build()
                .map_err(|e| ViewerError::Window(e.to_string()))?;
        window.set_max_fps(settings.max_fps);

        Ok(PistonRenderer {
            window,
            settings: settings.clone(),
            points: Vec::new(),
        })
    }

    fn present(&mut self) -> RenderStatus {
        let points = &self.points;
        let settings = &self.settings;
        let draw = |b: PistonBackend| -> Result<(), Box<dyn Error>> {
            let root = b.into_drawing_area();
            root.fill(&WHITE)?;

            let range = settings.range;
            let mut cc = ChartBuilder::on(&root)
                .caption(settings.title.as_str(), ("sans-serif", 20))
                .margin(10)
                .x_label_area_size(30)
                .y_label_area_size(30)
                .build_cartesian_2d(-range..range, -range..range)?;
            cc.configure_mesh().x_desc("X (m)").y_desc("Y (m)").draw()?;

            let circles = points
                .iter()
                .map(|(x, y)| Circle::new((*x, *y), POINT_RADIUS, GREEN.filled()));
            cc.draw_series(circles)?;

            Ok(())
        };

        match draw_piston_window(&mut self.window, draw) {
            Some(_) => RenderStatus::Open,
            None => RenderStatus::Closed,
        }
    }
}

impl ScanRenderer for PistonRenderer {
    fn draw(&mut self, points: &[Point2D]) -> RenderStatus {
        self.points.clear();
        self.points.extend(points.iter().map(|&p| <(f64, f64)>::from(p)));
        self.present()
    }

    fn idle(&mut self) -> RenderStatus {
        self.present()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_settings() {
        let settings = PlotSettings::default();
        assert_eq!(settings.title, "YDLiDAR X2 Live Scan");
        assert_eq!(settings.window_size, 800);
        assert_eq!(settings.range, 64.);
        assert_eq!(settings.max_fps, 60);
    }
}
