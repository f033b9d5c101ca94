use crate::error::CError;
use log::info;
use nalgebra::DVector;
use plotters::coord::Shift;
use plotters::prelude::*;
use std::path::Path;

/// Image formats a chart can be saved as. Raster formats are not supported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FigureFormat {
    SVG,
}

impl FigureFormat {
    /// Infer the image format from the extension of `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is missing or unrecognized.
    pub fn new(path: &Path) -> Result<Self, CError> {
        let ext = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        match ext.to_lowercase().as_str() {
            "svg" => Ok(FigureFormat::SVG),
            _ => Err(CError::UnsupportedFileFormat(path.display().to_string())),
        }
    }
}

/// Labels and size of a concentration chart.
#[derive(Clone, Debug)]
pub struct PlotOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: u32,
    pub height: u32,
}

impl Default for PlotOptions {
    fn default() -> Self {
        PlotOptions {
            title: "Evolution of [A](t)".to_string(),
            x_label: "time (s)".to_string(),
            y_label: "[A](t) (mol/L)".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Draw `series` against `times` as a line chart and write it to `path`.
///
/// # Errors
///
/// Returns [`CError::UnsupportedFileFormat`] for an unknown extension,
/// [`CError::InvalidParameter`] if the two vectors differ in length, and
/// [`CError::Plot`] if drawing or writing the file fails.
pub fn render_decay(
    times: &DVector<f64>,
    series: &DVector<f64>,
    path: &Path,
    options: &PlotOptions,
) -> Result<(), CError> {
    if times.len() != series.len() {
        return Err(CError::InvalidParameter(format!(
            "{} sampling times for {} concentrations",
            times.len(),
            series.len()
        )));
    }
    let points: Vec<(f64, f64)> = times.iter().copied().zip(series.iter().copied()).collect();
    let size = (options.width, options.height);

    let result = match FigureFormat::new(path)? {
        FigureFormat::SVG => {
            let root = SVGBackend::new(path, size).into_drawing_area();
            draw_decay_chart(&root, &points, options)
        }
    };
    result.map_err(|e| CError::Plot(e.to_string()))?;

    info!("wrote decay chart to {}", path.display());
    Ok(())
}

fn draw_decay_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    points: &[(f64, f64)],
    options: &PlotOptions,
) -> Result<(), Box<dyn std::error::Error>>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)?;

    let x_max = points.iter().map(|(t, _)| *t).fold(0.0f64, f64::max);
    let y_max = points.iter().map(|(_, c)| *c).fold(0.0f64, f64::max);
    // plotters cannot build an empty range
    let x_max = if x_max > 0.0 { x_max } else { 1.0 };
    let y_max = if y_max > 0.0 { y_max * 1.05 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption(&options.title, ("sans-serif", 20))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..x_max, 0.0..y_max)?;

    chart
        .configure_mesh()
        .x_desc(&options.x_label)
        .y_desc(&options.y_label)
        .draw()?;

    chart
        .draw_series(LineSeries::new(points.iter().copied(), &BLUE))?
        .label("[A](t)")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
