/// Largest pixel coordinate magnitude [`PixelRect::covering`] produces.
const COVERING_LIMIT: i32 = 1 << 24;

#[inline]
fn to_pixel(v: f32) -> i32 {
    // NaN casts to 0.
    v.clamp(-(COVERING_LIMIT as f32), COVERING_LIMIT as f32) as i32
}

/// Half-open integer pixel rectangle `[x0, x1) × [y0, y1)`.
///
/// Signed so that bounding boxes of off-screen geometry can be represented
/// before they are clipped against the viewport.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct PixelRect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl PixelRect {
    #[inline]
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[inline]
    pub const fn from_size(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i32, height as i32)
    }

    /// Smallest rect containing every pixel whose sample point may lie inside
    /// the given floating-point bounds.
    ///
    /// Bounds are clamped to `±COVERING_LIMIT` first, so projections of
    /// vertices close to the eye plane stay representable.
    pub fn covering(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self::new(
            to_pixel((min_x - 0.5).floor()),
            to_pixel((min_y - 0.5).floor()),
            to_pixel((max_x - 0.5).ceil()) + 1,
            to_pixel((max_y - 0.5).ceil()) + 1,
        )
    }

    #[inline]
    pub fn width(self) -> i32 {
        self.x1 - self.x0
    }

    #[inline]
    pub fn height(self) -> i32 {
        self.y1 - self.y0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }

    /// Half-open containment: [min, max).
    #[inline]
    pub fn contains(self, x: i32, y: i32) -> bool {
        x >= self.x0 && y >= self.y0 && x < self.x1 && y < self.y1
    }

    #[inline]
    pub fn intersect(self, other: PixelRect) -> Option<PixelRect> {
        let r = PixelRect::new(
            self.x0.max(other.x0),
            self.y0.max(other.y0),
            self.x1.min(other.x1),
            self.y1.min(other.y1),
        );
        if r.is_empty() { None } else { Some(r) }
    }

    /// Expands the rect outward to even coordinates so it tiles into 2×2 quads.
    #[inline]
    pub fn aligned_to_quads(self) -> PixelRect {
        PixelRect::new(
            self.x0 & !1,
            self.y0 & !1,
            (self.x1 + 1) & !1,
            (self.y1 + 1) & !1,
        )
    }
}
