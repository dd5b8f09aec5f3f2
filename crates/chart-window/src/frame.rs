// File: crates/chart-window/src/frame.rs
// Summary: Pixel format conversion between chart-core RGBA buffers and softbuffer frames.

/// Pack RGBA8 bytes into softbuffer's `0RGB` pixels (top byte zero, alpha dropped).
/// Copies as many pixels as both buffers hold.
pub fn rgba_to_0rgb(rgba: &[u8], out: &mut [u32]) {
    for (dst, px) in out.iter_mut().zip(rgba.chunks_exact(4)) {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        *dst = (r << 16) | (g << 8) | b;
    }
}
