// Fixed-point playfield geometry
//
// All simulation coordinates are integers in sub-pixel units.
// One logical display pixel is SUB_PX_SIZE sub-pixel units.

/// Sub-pixel units per logical display pixel
pub const SUB_PX_SIZE: i32 = 256;

/// Physics substeps run per rendered frame
pub const STEPS_PER_FRAME: i32 = 8;

/// Logical playfield size in display pixels (independent of terminal size)
pub const RESOLUTION_X: i32 = 256;
pub const RESOLUTION_Y: i32 = 192;

/// Playfield size in sub-pixel units
pub const FIELD_WIDTH: i32 = RESOLUTION_X * SUB_PX_SIZE;
pub const FIELD_HEIGHT: i32 = RESOLUTION_Y * SUB_PX_SIZE;

/// Ball speed bound on each axis, in sub-pixel units per frame
pub const MAX_BALL_SPEED: i32 = 4 * SUB_PX_SIZE;

/// Convert whole display pixels to sub-pixel units
pub const fn px(pixels: i32) -> i32 {
    pixels * SUB_PX_SIZE
}

/// Convert sub-pixel units to (fractional) display pixels for drawing
pub fn to_display(sub_px: i32) -> f32 {
    sub_px as f32 / SUB_PX_SIZE as f32
}
