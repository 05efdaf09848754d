use std::sync::Arc;

use log::debug;

use crate::controllers::explorer::command::{
    decreased_iterations, increased_iterations, ExplorerCommand,
};
use crate::controllers::explorer::errors::ExplorerError;
use crate::core::actions::compute_frame::{FrameComputer, FrameRequest, FrameRequestError};
use crate::core::actions::generate_pixel_buffer::generate_pixel_buffer::generate_pixel_buffer;
use crate::core::data::complex::Complex;
use crate::core::data::iteration_grid::IterationGrid;
use crate::core::data::pixel_buffer::PixelBuffer;
use crate::core::data::viewport::{PanDirection, Viewport};
use crate::core::fractals::colour_mapping::{colour_scheme_factory, ColourScheme, ColourSchemeKind};
use crate::core::fractals::fractal_config::{FractalConfig, FractalKind, JULIA_MIN_C_DELTA};
use crate::core::fractals::iteration_policy::IterationPolicy;

/// One exploration session: the current view, fractal parameters and colour
/// scheme, driven by [`ExplorerCommand`]s and rendered on demand.
///
/// Rendering goes through a [`FrameComputer`], so a render after commands that
/// only touch colours or the legend reuses the previous grid.
pub struct ExplorerController {
    config: FractalConfig,
    viewport: Viewport,
    policy: IterationPolicy,
    colour_scheme: ColourScheme,
    linear_kind: ColourSchemeKind,
    show_key: bool,
    computer: FrameComputer,
}

impl ExplorerController {
    pub fn new(
        config: FractalConfig,
        width: u32,
        height: u32,
        workers: u32,
    ) -> Result<Self, ExplorerError> {
        if config.max_iterations() == 0 {
            return Err(FrameRequestError::ZeroMaxIterations.into());
        }

        let viewport = config.region().viewport(width, height)?;
        let policy = config.build_policy()?;
        let colour_scheme_kind = config.colour_scheme_kind();
        let colour_scheme = colour_scheme_factory(colour_scheme_kind, config.max_iterations());
        let linear_kind = linear_kind_for(&config);

        Ok(Self {
            show_key: config.shows_key_by_default(),
            computer: FrameComputer::new(workers)?,
            config,
            viewport,
            policy,
            colour_scheme,
            linear_kind,
        })
    }

    #[must_use]
    pub fn kind(&self) -> FractalKind {
        self.config.kind()
    }

    #[must_use]
    pub fn config(&self) -> &FractalConfig {
        &self.config
    }

    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    #[must_use]
    pub fn max_iterations(&self) -> u32 {
        self.config.max_iterations()
    }

    #[must_use]
    pub fn colour_scheme(&self) -> &ColourScheme {
        &self.colour_scheme
    }

    #[must_use]
    pub fn is_key_visible(&self) -> bool {
        self.show_key
    }

    pub fn apply(&mut self, command: ExplorerCommand) -> Result<(), ExplorerError> {
        debug!("{} explorer: {:?}", self.kind(), command);

        match command {
            ExplorerCommand::Pan(direction) => self.viewport.pan(direction),
            ExplorerCommand::ZoomIn => self.viewport.zoom_in(),
            ExplorerCommand::ZoomOut => self.viewport.zoom_out(),
            ExplorerCommand::IncreaseIterations => {
                self.set_max_iterations(increased_iterations(self.max_iterations()));
            }
            ExplorerCommand::DecreaseIterations => {
                self.set_max_iterations(decreased_iterations(self.max_iterations()));
            }
            ExplorerCommand::ToggleColourScheme => self.toggle_colour_scheme(),
            ExplorerCommand::ToggleKey => self.show_key = !self.show_key,
            ExplorerCommand::Resize { width, height } => self.viewport.resize(width, height)?,
            command if command.is_julia_only() => self.apply_julia(command)?,
            command => {
                return Err(ExplorerError::UnsupportedCommand {
                    command,
                    kind: self.kind(),
                });
            }
        }

        Ok(())
    }

    fn apply_julia(&mut self, command: ExplorerCommand) -> Result<(), ExplorerError> {
        let kind = self.kind();
        let FractalConfig::Julia(julia) = &mut self.config else {
            return Err(ExplorerError::UnsupportedCommand { command, kind });
        };

        match command {
            ExplorerCommand::MoveConstant(direction) => {
                let step = julia.c_delta;
                let shift = match direction {
                    PanDirection::Left => Complex::from_real(-step),
                    PanDirection::Right => Complex::from_real(step),
                    PanDirection::Up => Complex::from_imag(step),
                    PanDirection::Down => Complex::from_imag(-step),
                };
                julia.c = julia.c + shift;
                self.policy = self.config.build_policy()?;
            }
            ExplorerCommand::IncreaseConstantStep => julia.c_delta *= 2.0,
            ExplorerCommand::DecreaseConstantStep => {
                julia.c_delta = (julia.c_delta / 2.0).max(JULIA_MIN_C_DELTA);
            }
            _ => return Err(ExplorerError::UnsupportedCommand { command, kind }),
        }

        Ok(())
    }

    fn set_max_iterations(&mut self, max_iterations: u32) {
        self.config.set_max_iterations(max_iterations);
        self.colour_scheme.set_max_iterations(max_iterations);
    }

    fn toggle_colour_scheme(&mut self) {
        let next = if self.colour_scheme.rule().is_binary() {
            self.linear_kind
        } else {
            ColourSchemeKind::Binary
        };

        self.config.set_colour_scheme_kind(next);
        self.colour_scheme = colour_scheme_factory(next, self.max_iterations());
    }

    /// Iteration grid for the current state, recomputed only when the view,
    /// the fractal parameters or the bound changed.
    pub fn grid(&self) -> Result<Arc<IterationGrid>, ExplorerError> {
        let request = FrameRequest::new(self.viewport, self.policy.clone(), self.max_iterations())?;
        Ok(self.computer.compute(&request)?)
    }

    pub fn render(&self) -> Result<PixelBuffer, ExplorerError> {
        let grid = self.grid()?;
        Ok(generate_pixel_buffer(&grid, &self.colour_scheme)?)
    }

    /// Legend text describing the current view.
    #[must_use]
    pub fn key_lines(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(6);

        if !matches!(self.config, FractalConfig::Newton(_)) {
            lines.push(format!("maxIters: {}", self.max_iterations()));
        }
        lines.push(format!("zoom:    {:.6}", self.viewport.zoom_depth()));
        lines.push(format!(
            "x-range: {:.6}, {:.6}",
            self.viewport.x_min(),
            self.viewport.x_max()
        ));
        lines.push(format!(
            "y-range: {:.6}, {:.6}",
            self.viewport.y_min(),
            self.viewport.y_max()
        ));

        if let FractalConfig::Julia(julia) = &self.config {
            lines.push(format!("C: {}", julia.c));
            lines.push(format!("ΔC: {}", julia.c_delta));
        }

        lines
    }
}

/// Linear scheme the colour toggle returns to: the configured one, else the
/// fractal's own preset, else the fallback preset.
fn linear_kind_for(config: &FractalConfig) -> ColourSchemeKind {
    [
        config.colour_scheme_kind(),
        FractalConfig::for_kind(config.kind()).colour_scheme_kind(),
    ]
    .into_iter()
    .find(|kind| !kind.is_binary())
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::actions::compute_frame::FrameError;
    use crate::core::data::colour::Colour;
    use crate::core::fractals::fractal_config::JULIA_DEFAULT_C_DELTA;

    fn explorer(kind: FractalKind) -> ExplorerController {
        ExplorerController::new(FractalConfig::for_kind(kind), 40, 30, 2).unwrap()
    }

    fn julia_constant(explorer: &ExplorerController) -> Complex {
        match explorer.config() {
            FractalConfig::Julia(julia) => julia.c,
            other => panic!("not a julia config: {:?}", other),
        }
    }

    #[test]
    fn test_render_has_viewport_size() {
        let buffer = explorer(FractalKind::Mandelbrot).render().unwrap();

        assert_eq!(buffer.width(), 40);
        assert_eq!(buffer.height(), 30);
        assert_eq!(buffer.buffer_size(), 1200);
    }

    #[test]
    fn test_render_colours_follow_grid() {
        let explorer = explorer(FractalKind::Newton);
        let grid = explorer.grid().unwrap();
        let buffer = explorer.render().unwrap();

        for (i, &cell) in grid.cells().iter().enumerate() {
            if cell < 0 {
                assert_eq!(buffer.buffer()[i], Colour::BLACK.packed());
            }
        }
    }

    #[test]
    fn test_colour_only_commands_reuse_grid() {
        let mut explorer = explorer(FractalKind::Mandelbrot);
        let before = explorer.grid().unwrap();

        explorer.apply(ExplorerCommand::ToggleColourScheme).unwrap();
        explorer.apply(ExplorerCommand::ToggleKey).unwrap();

        assert!(Arc::ptr_eq(&before, &explorer.grid().unwrap()));
    }

    #[test]
    fn test_view_commands_recompute_grid() {
        let mut explorer = explorer(FractalKind::Mandelbrot);
        let before = explorer.grid().unwrap();

        explorer.apply(ExplorerCommand::ZoomIn).unwrap();

        assert!(!Arc::ptr_eq(&before, &explorer.grid().unwrap()));
    }

    #[test]
    fn test_iteration_commands() {
        let mut explorer = explorer(FractalKind::Mandelbrot);

        explorer.apply(ExplorerCommand::IncreaseIterations).unwrap();
        assert_eq!(explorer.max_iterations(), 320);
        assert_eq!(explorer.colour_scheme().max_iterations(), 320);

        explorer.apply(ExplorerCommand::DecreaseIterations).unwrap();
        explorer.apply(ExplorerCommand::DecreaseIterations).unwrap();
        assert_eq!(explorer.max_iterations(), 192);
    }

    #[test]
    fn test_toggle_colour_scheme_round_trips() {
        let mut explorer = explorer(FractalKind::Mandelbrot);

        explorer.apply(ExplorerCommand::ToggleColourScheme).unwrap();
        assert_eq!(explorer.colour_scheme().kind(), Some(ColourSchemeKind::Binary));

        explorer.apply(ExplorerCommand::ToggleColourScheme).unwrap();
        assert_eq!(
            explorer.colour_scheme().kind(),
            Some(ColourSchemeKind::MandelbrotLinear)
        );
    }

    #[test]
    fn test_zero_max_iterations_rejected_at_construction() {
        let mut config = FractalConfig::for_kind(FractalKind::Mandelbrot);
        config.set_max_iterations(0);

        let result = ExplorerController::new(config, 8, 8, 2);

        assert!(matches!(
            result,
            Err(ExplorerError::Frame(FrameError::InvalidRequest(
                FrameRequestError::ZeroMaxIterations
            )))
        ));
    }

    #[test]
    fn test_binary_start_toggles_to_own_linear_preset() {
        for (kind, linear) in [
            (FractalKind::Mandelbrot, ColourSchemeKind::MandelbrotLinear),
            (FractalKind::Newton, ColourSchemeKind::NewtonLinear),
        ] {
            let mut config = FractalConfig::for_kind(kind);
            config.set_colour_scheme_kind(ColourSchemeKind::Binary);
            let mut explorer = ExplorerController::new(config, 8, 8, 1).unwrap();

            explorer.apply(ExplorerCommand::ToggleColourScheme).unwrap();

            assert_eq!(explorer.colour_scheme().kind(), Some(linear));
        }
    }

    #[test]
    fn test_julia_toggles_to_default_linear() {
        let mut explorer = explorer(FractalKind::Julia);

        explorer.apply(ExplorerCommand::ToggleColourScheme).unwrap();

        assert_eq!(
            explorer.colour_scheme().kind(),
            Some(ColourSchemeKind::FallbackLinear)
        );
    }

    #[test]
    fn test_julia_constant_moves_by_step() {
        let mut explorer = explorer(FractalKind::Julia);
        let start = julia_constant(&explorer);

        explorer
            .apply(ExplorerCommand::MoveConstant(PanDirection::Right))
            .unwrap();
        explorer
            .apply(ExplorerCommand::MoveConstant(PanDirection::Up))
            .unwrap();

        assert_eq!(
            julia_constant(&explorer),
            start + Complex::new(JULIA_DEFAULT_C_DELTA, JULIA_DEFAULT_C_DELTA)
        );
    }

    #[test]
    fn test_moving_constant_recomputes_grid() {
        let mut explorer = explorer(FractalKind::Julia);
        let before = explorer.grid().unwrap();

        explorer
            .apply(ExplorerCommand::MoveConstant(PanDirection::Left))
            .unwrap();

        assert!(!Arc::ptr_eq(&before, &explorer.grid().unwrap()));
    }

    #[test]
    fn test_constant_step_is_floored() {
        let mut explorer = explorer(FractalKind::Julia);

        for _ in 0..10 {
            explorer.apply(ExplorerCommand::DecreaseConstantStep).unwrap();
        }
        let FractalConfig::Julia(julia) = explorer.config() else {
            panic!("not a julia config");
        };
        assert_eq!(julia.c_delta, JULIA_MIN_C_DELTA);

        explorer.apply(ExplorerCommand::IncreaseConstantStep).unwrap();
        let FractalConfig::Julia(julia) = explorer.config() else {
            panic!("not a julia config");
        };
        assert_eq!(julia.c_delta, 2.0 * JULIA_MIN_C_DELTA);
    }

    #[test]
    fn test_julia_commands_rejected_for_other_fractals() {
        let mut explorer = explorer(FractalKind::Mandelbrot);

        assert!(matches!(
            explorer.apply(ExplorerCommand::IncreaseConstantStep),
            Err(ExplorerError::UnsupportedCommand {
                kind: FractalKind::Mandelbrot,
                ..
            })
        ));
    }

    #[test]
    fn test_resize_changes_render_size() {
        let mut explorer = explorer(FractalKind::Mandelbrot);

        explorer
            .apply(ExplorerCommand::Resize {
                width: 10,
                height: 5,
            })
            .unwrap();

        assert_eq!(explorer.render().unwrap().buffer_size(), 50);
        assert!(explorer
            .apply(ExplorerCommand::Resize {
                width: 0,
                height: 5
            })
            .is_err());
    }

    #[test]
    fn test_key_lines() {
        let mandelbrot = explorer(FractalKind::Mandelbrot);
        let julia = explorer(FractalKind::Julia);
        let newton = explorer(FractalKind::Newton);

        let lines = mandelbrot.key_lines();
        assert_eq!(lines[0], "maxIters: 256");
        assert_eq!(lines[1], "zoom:    1.000000");
        assert_eq!(lines[2], "x-range: -2.100000, 1.200000");

        let lines = julia.key_lines();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[4], "C: 0.36500 + 0.11000i");
        assert_eq!(lines[5], "ΔC: 0.0078125");

        assert!(!newton.key_lines()[0].starts_with("maxIters"));
        assert!(!newton.is_key_visible());
        assert!(mandelbrot.is_key_visible());
    }
}
