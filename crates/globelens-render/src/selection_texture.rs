//! Byte-packed selection fade buffer, uploaded as a 1-D texture.

use globelens_core::SelectionSet;

/// CPU-side backing store for one domain's selection texture.
///
/// Every update pass advances the fades, repacks the whole buffer and
/// marks it dirty; there is no change detection.
#[derive(Debug, Clone)]
pub struct SelectionTexture {
    data: Vec<u8>,
    fade_max: u8,
    dirty: bool,
}

impl SelectionTexture {
    /// Creates a zeroed buffer with one byte per selection slot.
    #[must_use]
    pub fn new(len: usize, fade_max: u8) -> Self {
        Self {
            data: vec![0; len],
            fade_max,
            dirty: true,
        }
    }

    /// Advances the domain's fades by one frame and repacks the buffer.
    pub fn update(&mut self, selection: &mut SelectionSet, delta: f32, rate: f32) {
        selection.advance_fades(delta, rate);
        for (byte, fade) in self.data.iter_mut().zip(selection.fades()) {
            *byte = (fade * f32::from(self.fade_max)).floor() as u8;
        }
        self.dirty = true;
    }

    /// The packed bytes, one per selection slot.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Buffer length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Whether the buffer needs a GPU re-upload.
    #[must_use]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Consumes the dirty flag; returns whether an upload is due.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}
