use bytemuck::Zeroable;

use crate::atlas::FontAtlas;
use crate::coords::{Vec2, Viewport};
use crate::draw::{DrawCallback, DrawCmd, DrawData};
use crate::gpu::{Gpu, GpuVertex, PipelineState, ScissorRect};

use super::scissor::clip_to_scissor;

/// What one command does to the frame. Classification is separated from
/// execution so the cursor-advance rule is uniform across all outcomes.
#[derive(Debug)]
enum CommandAction {
    Callback(DrawCallback),
    ClippedOut,
    Emit(ScissorRect),
}

/// Translates one frame of UI draw data into GPU commands.
///
/// Long-lived: holds the display bounds plus the one-shot diagnostic flags,
/// nothing frame-local. The heavy state (vertex scratch) belongs to the
/// [`Gpu`] implementation's per-frame arena.
#[derive(Debug)]
pub struct DrawTranslator {
    display: Viewport,
    warned_foreign_texture: bool,
    warned_bad_indices: bool,
}

impl DrawTranslator {
    pub fn new(display: Viewport) -> Self {
        Self {
            display,
            warned_foreign_texture: false,
            warned_bad_indices: false,
        }
    }

    /// Walks `data` and drives `gpu`.
    ///
    /// Empty frames (and invalid display bounds) return before any GPU
    /// call. Scratch-arena exhaustion abandons the remaining commands and
    /// lists of the frame; a partial frame beats a crash, and the arena
    /// resets next frame anyway.
    pub fn translate(&mut self, gpu: &mut impl Gpu, data: &DrawData, atlas: &FontAtlas) {
        if data.total_vertex_count() == 0 || !self.display.is_valid() {
            return;
        }

        gpu.set_pipeline_state(&PipelineState::default());
        gpu.bind_texture(atlas.binding());

        let texel_scale = atlas.texel_scale();

        for list in &data.lists {
            // Commands slice the shared index array in order; the cursor
            // advances by elem_count for every command, emitted or not.
            let mut cursor = 0usize;

            for cmd in &list.commands {
                let end = cursor.checked_add(cmd.elem_count);
                let Some(end) = end.filter(|&end| end <= list.indices.len()) else {
                    if !self.warned_bad_indices {
                        log::debug!(
                            "draw command consumes {} of {} remaining indices; dropping list",
                            cmd.elem_count,
                            list.indices.len() - cursor,
                        );
                        self.warned_bad_indices = true;
                    }
                    break;
                };

                match self.classify(cmd, atlas) {
                    CommandAction::Callback(callback) => callback(list, cmd),
                    CommandAction::ClippedOut => {}
                    CommandAction::Emit(rect) => {
                        gpu.set_scissor(rect);

                        let Some(verts) = gpu.begin_triangles(cmd.elem_count) else {
                            log::debug!("vertex scratch exhausted; dropping rest of frame");
                            return;
                        };
                        for (slot, &idx) in verts.iter_mut().zip(&list.indices[cursor..end]) {
                            let Some(src) = list.vertices.get(idx as usize) else {
                                // Degenerate and fully transparent: the bad
                                // index puts nothing on screen.
                                *slot = GpuVertex::zeroed();
                                if !self.warned_bad_indices {
                                    log::debug!(
                                        "draw list references vertex {idx} of {}",
                                        list.vertices.len(),
                                    );
                                    self.warned_bad_indices = true;
                                }
                                continue;
                            };
                            let pos = (Vec2::new(src.pos[0], src.pos[1]) - data.display_pos)
                                * data.framebuffer_scale;
                            *slot = GpuVertex {
                                u: src.uv[0] * texel_scale.x,
                                v: src.uv[1] * texel_scale.y,
                                color: src.color,
                                x: pos.x,
                                y: pos.y,
                                z: 0.0,
                            };
                        }
                        gpu.submit_triangles();
                    }
                }

                cursor = end;
            }
        }
    }

    fn classify(&mut self, cmd: &DrawCmd, atlas: &FontAtlas) -> CommandAction {
        if let Some(callback) = cmd.callback {
            return CommandAction::Callback(callback);
        }

        if let Some(tex) = cmd.texture {
            if tex != atlas.id() && !self.warned_foreign_texture {
                log::debug!(
                    "draw command names texture {} but only the atlas ({}) is bound",
                    tex.raw(),
                    atlas.id().raw(),
                );
                self.warned_foreign_texture = true;
            }
        }

        match clip_to_scissor(cmd.clip_rect, self.display) {
            Some(rect) => CommandAction::Emit(rect),
            None => CommandAction::ClippedOut,
        }
    }
}
