use cuberoll_common::Cardinal;
use glam::{Vec2, Vec3};

/// Horizontal look directions shorter than this are treated as degenerate.
pub const FACING_EPSILON: f32 = 1e-4;

/// Snap a look direction to the cardinal axis it is most aligned with on the
/// ground plane.
///
/// Returns `None` when the horizontal projection is too short to normalize
/// (camera looking straight up or down); callers keep their previous facing.
/// When `|x| == |z|` the Z axis wins.
pub fn resolve_facing(look: Vec3) -> Option<Cardinal> {
    let flat = Vec2::new(look.x, look.z);
    let len = flat.length();
    if len.is_nan() || len < FACING_EPSILON {
        return None;
    }
    let dir = flat / len;
    let facing = if dir.x.abs() > dir.y.abs() {
        if dir.x > 0.0 {
            Cardinal::PosX
        } else {
            Cardinal::NegX
        }
    } else if dir.y > 0.0 {
        Cardinal::PosZ
    } else {
        Cardinal::NegZ
    };
    Some(facing)
}
