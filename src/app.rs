// the viewer loop
//
// two working phases: Waiting (no valid sample yet) and Running. the first
// decodable status line triggers the one-time bootstrap - city load, bounds,
// pixel fit, optional window resize - and every later poll either ingests a
// fresh sample or leaves the state untouched. a failed city load lands in
// Failed: nothing can be drawn without positions, so the error is shown and
// polling stops.

use std::path::Path;
use std::time::{Duration, Instant};

use eframe::egui::{self, Align2, FontId, Pos2, Rect};
use tracing::{error, info, warn};

use crate::channel::StatusChannel;
use crate::decode::{self, Decoded, Sample};
use crate::problem;
use crate::series::SeriesStore;
use crate::settings::{GraphPosition, ViewerSettings};
use crate::transform::{self, Bounds, CanvasSpec};
use crate::ui::{self, SceneInput};

enum Phase {
    Waiting,
    Running(Box<RunState>),
    Failed(String),
}

/// everything that exists only while a run is being displayed
pub struct RunState {
    problem_name: String,
    /// problem-space coordinates, kept immutable for any future re-fit
    #[allow(dead_code)]
    cities: Vec<(f64, f64)>,
    /// derived pixel positions, index-aligned with `cities`
    pixels: Vec<Pos2>,
    canvas: CanvasSpec,
    fitted_size: (f32, f32),
    tour: Vec<usize>,
    series: SeriesStore,
    iteration: u64,
    started: Instant,
}

impl RunState {
    /// one-time bootstrap from the first valid sample and its city list.
    /// `cities` must be non-empty (the problem loader guarantees it).
    pub fn bootstrap(sample: Sample, cities: Vec<(f64, f64)>, canvas: CanvasSpec) -> Self {
        let bounds = Bounds::from_points(&cities).expect("city list is never empty");
        let view = transform::fit(&cities, &bounds, &canvas);

        let mut series = SeriesStore::new();
        series.append(sample.iter_best, sample.glob_best);

        Self {
            problem_name: sample.problem_name,
            cities,
            pixels: view.pixels,
            canvas,
            fitted_size: view.fitted_size,
            tour: sample.tour,
            series,
            iteration: sample.iteration,
            started: Instant::now(),
        }
    }

    /// absorb a fresh sample: the tour is replaced wholesale, the series
    /// grow by one pair
    pub fn ingest(&mut self, sample: Sample) {
        self.tour = sample.tour;
        self.series.append(sample.iter_best, sample.glob_best);
        self.iteration = sample.iteration;
    }

}

/// what one poll of the channel asks the app to do
enum Action {
    StartRun(Sample),
    Ingest(Sample),
    Nothing,
}

pub struct TourScopeApp {
    settings: ViewerSettings,
    channel: StatusChannel,
    phase: Phase,
}

impl TourScopeApp {
    pub fn new(settings: ViewerSettings, channel: StatusChannel) -> Self {
        Self {
            settings,
            channel,
            phase: Phase::Waiting,
        }
    }

    fn canvas_spec(&self) -> CanvasSpec {
        CanvasSpec {
            width: 1024.0,
            height: 768.0,
            margin: ui::WIN_MARGIN,
            text_height: if self.settings.show_text {
                ui::TEXT_HEIGHT
            } else {
                0.0
            },
            graph_height: if self.settings.show_graphs {
                ui::GRAPH_HEIGHT
            } else {
                0.0
            },
            graph_on_top: self.settings.graph_position == GraphPosition::Top,
        }
    }

    /// runtime display toggles, plus Ctrl+S to persist the current settings
    fn handle_keys(&mut self, ctx: &egui::Context) {
        ctx.input(|i| {
            if i.key_pressed(egui::Key::G) {
                self.settings.show_graphs = !self.settings.show_graphs;
            }
            if i.key_pressed(egui::Key::T) {
                self.settings.show_tour = !self.settings.show_tour;
            }
            if i.key_pressed(egui::Key::C) {
                self.settings.show_cities = !self.settings.show_cities;
            }
            if i.key_pressed(egui::Key::X) {
                self.settings.show_text = !self.settings.show_text;
            }
            if i.key_pressed(egui::Key::S) && i.modifiers.ctrl {
                if let Err(e) = self.settings.save() {
                    warn!("failed to save settings: {e}");
                }
            }
        });
    }

    /// non-blocking channel check; decode errors are recoverable and leave
    /// the current state in place for the next poll
    fn poll(&mut self, ctx: &egui::Context) {
        let line = match self.channel.poll_latest_line() {
            Ok(Some(line)) => line,
            Ok(None) => return, // producer hasn't written yet - not an error
            Err(e) => {
                warn!("cannot read status file: {e}");
                return;
            }
        };

        let action = match &self.phase {
            Phase::Waiting => match decode::decode(&line, None) {
                Ok(Decoded::Fresh(sample)) => Action::StartRun(sample),
                Ok(Decoded::Unchanged) => Action::Nothing,
                Err(e) => {
                    warn!("malformed status line while waiting: {e}");
                    Action::Nothing
                }
            },
            Phase::Running(run) => match decode::decode(&line, Some(run.iteration)) {
                Ok(Decoded::Fresh(sample)) => Action::Ingest(sample),
                Ok(Decoded::Unchanged) => Action::Nothing,
                Err(e) => {
                    // keep previous state, try again next poll
                    warn!("malformed status line: {e}");
                    Action::Nothing
                }
            },
            Phase::Failed(_) => Action::Nothing,
        };

        match action {
            Action::StartRun(sample) => self.phase = self.start_run(sample, ctx),
            Action::Ingest(sample) => {
                if let Phase::Running(run) = &mut self.phase {
                    run.ingest(sample);
                }
            }
            Action::Nothing => {}
        }
    }

    /// bootstrap on the first valid sample: load the problem, fit it to
    /// the canvas, and (once) resize the window to wrap the fitted extent
    fn start_run(&self, sample: Sample, ctx: &egui::Context) -> Phase {
        let cities = match problem::load_cities(Path::new(&sample.problem_file)) {
            Ok(cities) => cities,
            Err(e) => {
                error!("cannot load problem definition: {e}");
                return Phase::Failed(e.to_string());
            }
        };
        info!(
            "problem '{}': {} cities, first sample at iteration {}",
            sample.problem_name,
            cities.len(),
            sample.iteration
        );

        let run = RunState::bootstrap(sample, cities, self.canvas_spec());
        if self.settings.adjust_window {
            let (w, h) = run.fitted_size;
            ctx.send_viewport_cmd(egui::ViewportCommand::InnerSize(egui::vec2(w, h)));
        }
        Phase::Running(Box::new(run))
    }

    fn draw(&self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::BACKGROUND))
            .show(ctx, |panel| {
                let canvas = panel.max_rect();
                let painter = panel.painter();

                match &self.phase {
                    Phase::Waiting => {
                        painter.text(
                            canvas.center(),
                            Align2::CENTER_CENTER,
                            format!(
                                "waiting for solver output in '{}'...",
                                self.channel.path().display()
                            ),
                            FontId::proportional(16.0),
                            ui::TEXT,
                        );
                    }
                    Phase::Failed(msg) => {
                        painter.text(
                            canvas.center(),
                            Align2::CENTER_CENTER,
                            msg,
                            FontId::proportional(16.0),
                            ui::ITER_LINE,
                        );
                    }
                    Phase::Running(run) => {
                        let elapsed = run.started.elapsed().as_secs_f64();
                        let input = SceneInput {
                            pixels: &run.pixels,
                            tour: &run.tour,
                            problem_name: &run.problem_name,
                            latest: run.series.latest(),
                            elapsed_secs: elapsed,
                            text_offset: run.canvas.graph_offset(),
                        };
                        ui::draw_scene(painter, canvas, &input, &self.settings);

                        if self.settings.show_graphs {
                            let strip = if run.canvas.graph_on_top {
                                Rect::from_min_size(
                                    canvas.min,
                                    egui::vec2(canvas.width(), ui::GRAPH_HEIGHT),
                                )
                            } else {
                                Rect::from_min_size(
                                    Pos2::new(canvas.left(), canvas.bottom() - ui::GRAPH_HEIGHT),
                                    egui::vec2(canvas.width(), ui::GRAPH_HEIGHT),
                                )
                            };
                            ui::draw_graph_strip(painter, strip, &run.series, elapsed, &self.settings);
                        }
                    }
                }
            });
    }
}

impl eframe::App for TourScopeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_keys(ctx);
        self.poll(ctx);
        self.draw(ctx);

        // cap the visual refresh rate independently of the producer
        let interval = 1.0 / self.settings.refresh_rate_hz.max(0.5);
        ctx.request_repaint_after(Duration::from_secs_f32(interval));
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if self.settings.delete_channel_on_exit {
            match self.channel.remove() {
                Ok(()) => info!("deleted status file '{}'", self.channel.path().display()),
                Err(e) => warn!(
                    "unable to delete status file '{}': {e}",
                    self.channel.path().display()
                ),
            }
        }
    }
}
