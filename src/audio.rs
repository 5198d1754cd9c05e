//! WebAudio glue: decode user files, own the decoded asset slot, and
//! manage the at-most-one live source node.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::PlayerError;

fn js_detail(value: JsValue) -> String {
    format!("{value:?}")
}

/// One live `AudioBufferSourceNode`. Source nodes are single-use: once
/// stopped they cannot be restarted, so every play action creates a fresh
/// handle and a successful stop consumes it.
pub struct PlaybackHandle {
    source: web::AudioBufferSourceNode,
}

impl PlaybackHandle {
    fn start(ctx: &web::AudioContext, buffer: &web::AudioBuffer) -> Result<Self, PlayerError> {
        let source = web::AudioBufferSourceNode::new(ctx)
            .map_err(|e| PlayerError::Playback(js_detail(e)))?;
        source.set_buffer(Some(buffer));
        source
            .connect_with_audio_node(&ctx.destination())
            .map_err(|e| PlayerError::Playback(js_detail(e)))?;
        source
            .start()
            .map_err(|e| PlayerError::Playback(js_detail(e)))?;
        Ok(Self { source })
    }

    fn stop(&self) -> Result<(), PlayerError> {
        self.source
            .stop()
            .map_err(|e| PlayerError::Playback(js_detail(e)))
    }
}

/// Owns the audio context, the decoded asset slot, and the active handle.
pub struct AudioDeck {
    ctx: Option<web::AudioContext>,
    buffer: Option<web::AudioBuffer>,
    handle: Option<PlaybackHandle>,
}

impl Default for AudioDeck {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioDeck {
    pub fn new() -> Self {
        Self {
            ctx: None,
            buffer: None,
            handle: None,
        }
    }

    /// The context is created lazily, inside a user gesture, to satisfy
    /// browser autoplay policies.
    pub fn context(&mut self) -> Result<web::AudioContext, PlayerError> {
        if let Some(ctx) = &self.ctx {
            return Ok(ctx.clone());
        }
        let ctx = web::AudioContext::new().map_err(|e| PlayerError::Playback(js_detail(e)))?;
        self.ctx = Some(ctx.clone());
        Ok(ctx)
    }

    /// Replace the decoded asset, stopping any active playback first. The
    /// old buffer is discarded.
    pub fn adopt_buffer(&mut self, buffer: web::AudioBuffer) {
        if let Some(handle) = self.handle.take() {
            if let Err(e) = handle.stop() {
                log::warn!("[audio] stopping previous source: {e}");
            }
        }
        self.buffer = Some(buffer);
    }

    /// Create and start a fresh source bound to the current asset.
    pub fn start(&mut self) -> Result<(), PlayerError> {
        let ctx = self.context()?;
        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| PlayerError::Playback("no audio loaded".into()))?;
        if let Some(old) = self.handle.take() {
            if let Err(e) = old.stop() {
                log::warn!("[audio] stopping stale source: {e}");
            }
        }
        self.handle = Some(PlaybackHandle::start(&ctx, buffer)?);
        Ok(())
    }

    /// Stop the active source. The handle is only dropped on success, so a
    /// failed stop leaves the deck in its previous state.
    pub fn stop(&mut self) -> Result<(), PlayerError> {
        let handle = self
            .handle
            .as_ref()
            .ok_or_else(|| PlayerError::Playback("nothing is playing".into()))?;
        handle.stop()?;
        self.handle = None;
        Ok(())
    }
}

/// Read and decode a user-selected file into an in-memory buffer.
pub async fn decode_file(
    ctx: &web::AudioContext,
    file: web::File,
) -> Result<web::AudioBuffer, PlayerError> {
    let bytes = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| PlayerError::Decode(js_detail(e)))?;
    let bytes: js_sys::ArrayBuffer = bytes
        .dyn_into()
        .map_err(|_| PlayerError::Decode("file read did not produce an ArrayBuffer".into()))?;
    let promise = ctx
        .decode_audio_data(&bytes)
        .map_err(|e| PlayerError::Decode(js_detail(e)))?;
    let decoded = JsFuture::from(promise)
        .await
        .map_err(|e| PlayerError::Decode(js_detail(e)))?;
    decoded
        .dyn_into::<web::AudioBuffer>()
        .map_err(|_| PlayerError::Decode("decode did not produce an AudioBuffer".into()))
}
