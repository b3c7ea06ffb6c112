use super::helpers;

pub(crate) const TRANSMISSION_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8Unorm;

/// Square offscreen copy of the backdrop that the hero sphere refracts.
///
/// Its edge length is the tier's `transmission_resolution`; it is recreated
/// only when that value changes.
pub(crate) struct TransmissionTarget {
    pub(crate) tex: wgpu::Texture,
    pub(crate) view: wgpu::TextureView,
    pub(crate) size: u32,
}

impl TransmissionTarget {
    pub(crate) fn new(device: &wgpu::Device, size: u32) -> Self {
        let (tex, view) = Self::create(device, size);
        Self { tex, view, size }
    }

    /// Returns true when the texture was recreated.
    pub(crate) fn ensure_size(&mut self, device: &wgpu::Device, size: u32) -> bool {
        if size == self.size {
            return false;
        }
        (self.tex, self.view) = Self::create(device, size);
        self.size = size;
        true
    }

    fn create(device: &wgpu::Device, size: u32) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture(
            device,
            "transmission_tex",
            size,
            size,
            TRANSMISSION_FORMAT,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        )
    }
}
