//! Figure rendering: input beams and the enclosing ellipse.

use anyhow::Result;
use minbeam::prelude::*;
use plotters::prelude::*;

const OUTLINE_SAMPLES: usize = 512;
const CANVAS_PX: u32 = 800;

/// Render the input beams as thin translucent outlines and the enclosing
/// ellipse as a heavy outline, on an equal-aspect square canvas whose axes
/// span 1.2× the result's major axis.
pub fn render(beams: &[Beam], enclosure: &Enclosure, path: &str) -> Result<()> {
    let extent = 0.6 * enclosure.beam.major;
    let root = BitMapBackend::new(path, (CANVAS_PX, CANVAS_PX)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .build_cartesian_2d(-extent..extent, -extent..extent)?;
    chart.configure_mesh().disable_axes().draw()?;

    for beam in beams {
        chart.draw_series(LineSeries::new(outline(beam), BLACK.mix(0.2)))?;
    }
    chart.draw_series(LineSeries::new(
        outline(&enclosure.beam),
        RED.stroke_width(2),
    ))?;

    root.present()?;
    Ok(())
}

/// Closed outline of a beam as `(x, y)` pairs.
fn outline(beam: &Beam) -> impl Iterator<Item = (f64, f64)> {
    let mut pts: Vec<(f64, f64)> = boundary_points(beam, OUTLINE_SAMPLES)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect();
    if let Some(first) = pts.first().copied() {
        pts.push(first);
    }
    pts.into_iter()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn renders_a_png() {
        let beams = draw_beams(
            BeamDrawCfg {
                count: 3,
                ..Default::default()
            },
            ReplayToken::new(1, 0),
        );
        let cfg = EncloseCfg {
            sample: SampleCfg {
                samples_per_beam: 100,
            },
            search: SearchCfg {
                hops: 5,
                ..Default::default()
            },
        };
        let enc = minbeam_with(&beams, &cfg, ReplayToken::new(1, 1)).unwrap();

        let dir = tempdir().unwrap();
        let out = dir.path().join("beam.png");
        render(&beams, &enc, out.to_str().unwrap()).unwrap();
        assert!(out.exists());
        assert!(std::fs::metadata(&out).unwrap().len() > 0);
    }
}
