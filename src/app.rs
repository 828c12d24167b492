use crate::ffmpeg::{FrameSource, JobExecutor, TranscodeJob};
use crate::media::MediaFile;
use crate::session::{Effect, Session, SessionEvent};
use crate::ui::{load_frame_texture, PreviewState};
use eframe::egui;
use tracing::{error, warn};

pub struct SmolApp {
    pub media: MediaFile,
    pub session: Session,
    pub preview: PreviewState,
    pub status_message: String,
    frames: Box<dyn FrameSource>,
    executor: Box<dyn JobExecutor>,
}

impl SmolApp {
    pub fn new(
        ctx: &egui::Context,
        media: MediaFile,
        session: Session,
        frames: Box<dyn FrameSource>,
        executor: Box<dyn JobExecutor>,
    ) -> Self {
        let start = session.range().start;
        let preview = render_preview(ctx, frames.as_ref(), &media, start);
        Self {
            status_message: format!("Loaded: {}", media.filename()),
            media,
            session,
            preview,
            frames,
            executor,
        }
    }

    /// Run events through the session in order and carry out what it asks for.
    pub fn dispatch(&mut self, ctx: &egui::Context, events: Vec<SessionEvent>) {
        for event in events {
            let effects = self.session.handle(event);
            for effect in effects {
                self.apply(ctx, effect);
            }
        }
    }

    fn apply(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::RefreshPreview(time) => {
                self.preview = render_preview(ctx, self.frames.as_ref(), &self.media, time);
            }
            Effect::Launch { range, settings } => {
                let job = TranscodeJob::new(&self.media.path, range, settings);
                match self.executor.submit(&job) {
                    Ok(submitted) => {
                        self.status_message = format!(
                            "Encoding {} (pid {})",
                            submitted.output.display(),
                            submitted.pid
                        );
                    }
                    Err(e) => {
                        error!("Failed to start encode: {:#}", e);
                        self.status_message = format!("Failed to start encode: {:#}", e);
                    }
                }
            }
            Effect::Report(message) => {
                warn!("Transcode refused: {}", message);
                self.status_message = message;
            }
        }
    }
}

/// Blocks the UI thread while the frame is extracted.
fn render_preview(
    ctx: &egui::Context,
    frames: &dyn FrameSource,
    media: &MediaFile,
    time: f64,
) -> PreviewState {
    let texture = frames
        .frame_at(&media.path, time)
        .and_then(|png| load_frame_texture(ctx, &png, "preview"));

    match texture {
        Ok(texture) => PreviewState::Frame { texture, time },
        Err(e) => {
            warn!("No preview at {:.1}s: {:#}", time, e);
            PreviewState::Failed {
                time,
                message: format!("{:#}", e),
            }
        }
    }
}

impl eframe::App for SmolApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        crate::ui::render_main_window(self, ctx);
    }
}
