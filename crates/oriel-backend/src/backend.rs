use crate::atlas::{AtlasError, FontAtlas, RgbaBitmap};
use crate::coords::{Vec2, Viewport};
use crate::draw::DrawData;
use crate::gpu::{Gpu, TextureId};
use crate::input::{InputFrame, PadSampler, PadSource, PointerConfig};
use crate::render::DrawTranslator;
use crate::time::{FrameClock, FrameTime, TickSource};

/// Name reported for the input half of the backend.
pub const PLATFORM_NAME: &str = "oriel_pad";

/// Name reported for the renderer half of the backend.
pub const RENDERER_NAME: &str = "oriel_gpu";

/// Backend configuration.
///
/// Defaults describe the target handheld: a fixed 480x272 display with an
/// identity framebuffer scale.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Display extent in pixels.
    pub display_size: Viewport,

    /// UI-to-framebuffer scale published to the UI layer, which echoes it
    /// back inside each frame's draw data.
    pub framebuffer_scale: Vec2,

    /// Pointer synthesis tuning.
    pub pointer: PointerConfig,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            display_size: Viewport::new(480.0, 272.0),
            framebuffer_scale: Vec2::splat(1.0),
            pointer: PointerConfig::default(),
        }
    }
}

/// Everything the UI host mirrors into its io state.
///
/// Read it after construction and after any atlas change; `atlas_texture`
/// is the id the UI layer must store and echo inside draw commands.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BackendInfo {
    pub platform_name: &'static str,
    pub renderer_name: &'static str,
    /// This backend always drives the UI from a gamepad.
    pub has_gamepad: bool,
    pub display_size: Viewport,
    pub framebuffer_scale: Vec2,
    /// `None` until an atlas is installed, and again after shutdown.
    pub atlas_texture: Option<TextureId>,
}

/// The backend aggregate. Owns all state that crosses frames:
///
/// - the baked font atlas and its published texture id
/// - the pad sampler's pointer position
/// - the frame clock's tick baseline
///
/// The host calls `install_font_atlas` once at startup, `begin_frame` and
/// `render` every frame, and `shutdown` before dropping GPU resources.
pub struct Backend {
    config: BackendConfig,
    atlas: Option<FontAtlas>,
    sampler: PadSampler,
    clock: FrameClock,
    translator: DrawTranslator,
}

impl Backend {
    pub fn new(config: BackendConfig) -> Self {
        let sampler = PadSampler::new(config.display_size, config.pointer);
        let translator = DrawTranslator::new(config.display_size);
        Self {
            config,
            atlas: None,
            sampler,
            clock: FrameClock::new(),
            translator,
        }
    }

    /// Bakes the UI layer's exported font bitmap and publishes its id.
    ///
    /// Replaces any previously installed atlas. The returned id is what
    /// the UI layer must echo inside draw commands.
    pub fn install_font_atlas(&mut self, bitmap: RgbaBitmap<'_>) -> Result<TextureId, AtlasError> {
        let atlas = FontAtlas::build(bitmap)?;
        let id = atlas.id();
        match self.atlas.replace(atlas) {
            Some(old) => log::info!("font atlas replaced ({} -> {})", old.id().raw(), id.raw()),
            None => log::info!("font atlas installed ({})", id.raw()),
        }
        Ok(id)
    }

    /// Snapshot of what the UI host should mirror into its io state.
    pub fn info(&self) -> BackendInfo {
        BackendInfo {
            platform_name: PLATFORM_NAME,
            renderer_name: RENDERER_NAME,
            has_gamepad: true,
            display_size: self.config.display_size,
            framebuffer_scale: self.config.framebuffer_scale,
            atlas_texture: self.atlas.as_ref().map(FontAtlas::id),
        }
    }

    /// Runs the per-frame input and timing step.
    ///
    /// Samples the pad exactly once, fills `frame` with this frame's
    /// events, and returns the delta-time snapshot. The host forwards both
    /// to the UI layer before building the frame's layout.
    pub fn begin_frame(
        &mut self,
        pad: &mut impl PadSource,
        ticks: &impl TickSource,
        frame: &mut InputFrame,
    ) -> FrameTime {
        let sample = pad.sample();
        self.sampler.sample(&sample, frame);
        self.clock.tick(ticks)
    }

    /// Translates one frame of UI draw data into GPU commands.
    ///
    /// A silent no-op until an atlas is installed: without it nothing can
    /// be textured correctly, so nothing may be drawn.
    pub fn render(&mut self, gpu: &mut impl Gpu, data: &DrawData) {
        let Some(atlas) = &self.atlas else {
            return;
        };
        self.translator.translate(gpu, data, atlas);
    }

    /// Releases the atlas and clears the published texture id.
    ///
    /// Idempotent; calling before any install is also fine.
    pub fn shutdown(&mut self) {
        if self.atlas.take().is_some() {
            log::info!("font atlas released");
        }
    }
}
