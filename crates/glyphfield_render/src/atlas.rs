//! Bitmap glyph atlas
//!
//! The two binary digits are stored side by side in a single-channel
//! texture, one `GLYPH_WIDTH` x `GLYPH_HEIGHT` cell per glyph in
//! [`Glyph::index`] order.

use glyphfield_core::Glyph;

/// Width of one glyph cell in texels
pub const GLYPH_WIDTH: u32 = 5;
/// Height of one glyph cell in texels
pub const GLYPH_HEIGHT: u32 = 7;
/// Number of cells in the atlas
pub const GLYPH_COUNT: u32 = 2;

const ZERO: [&str; GLYPH_HEIGHT as usize] = [
    ".###.", //
    "#...#", //
    "#..##", //
    "#.#.#", //
    "##..#", //
    "#...#", //
    ".###.", //
];

const ONE: [&str; GLYPH_HEIGHT as usize] = [
    "..#..", //
    ".##..", //
    "..#..", //
    "..#..", //
    "..#..", //
    "..#..", //
    ".###.", //
];

fn bitmap(glyph: Glyph) -> &'static [&'static str; GLYPH_HEIGHT as usize] {
    match glyph {
        Glyph::Zero => &ZERO,
        Glyph::One => &ONE,
    }
}

/// Rasterize every glyph into a row-major R8 coverage buffer
pub fn rasterize() -> Vec<u8> {
    let width = (GLYPH_WIDTH * GLYPH_COUNT) as usize;
    let mut texels = vec![0u8; width * GLYPH_HEIGHT as usize];

    for glyph in [Glyph::Zero, Glyph::One] {
        let x0 = (glyph.index() * GLYPH_WIDTH) as usize;
        for (row, line) in bitmap(glyph).iter().enumerate() {
            for (col, cell) in line.bytes().enumerate() {
                if cell == b'#' {
                    texels[row * width + x0 + col] = 255;
                }
            }
        }
    }
    texels
}

/// Width-to-height ratio of a rendered glyph
pub fn glyph_aspect() -> f32 {
    GLYPH_WIDTH as f32 / GLYPH_HEIGHT as f32
}

/// GPU texture holding the rasterized glyphs
pub struct GlyphAtlas {
    pub view: wgpu::TextureView,
    pub sampler: wgpu::Sampler,
}

impl GlyphAtlas {
    /// Upload the atlas texture
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let size = wgpu::Extent3d {
            width: GLYPH_WIDTH * GLYPH_COUNT,
            height: GLYPH_HEIGHT,
            depth_or_array_layers: 1,
        };

        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Glyph Atlas"),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::R8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &rasterize(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(size.width),
                rows_per_image: Some(size.height),
            },
            size,
        );

        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        // Nearest keeps the pixel font crisp and stops neighbouring cells bleeding
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Glyph Atlas Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        Self { view, sampler }
    }
}
