//! Schematic hand pose.
//!
//! Pure function of `(surface, sensor frame)`: a translucent palm disc with
//! five three-segment fingers, bent by the flex channels and turned by the
//! orientation channels.  The x/y tilt stands in for a true 3D projection
//! by scaling the drawing axes by `cos(angle/10°)`.

use crate::canvas::Canvas;
use sign_sensor::{Finger, SensorFrame};
use std::f32::consts::TAU;

const PALM_RADIUS:  f32 = 30.0;
const FINGER_LEN:   f32 = 60.0;
const SEGMENT_LEN:  f32 = FINGER_LEN * 0.5;
const SEGMENT_BEND: f32 = 0.7;
const FINGER_WIDTH: f32 = 6.0;
const JOINT_RADIUS: f32 = 4.0;
const PALM_SIDES:   usize = 32;

/// Base direction of each finger, degrees clockwise from palm-up.
const FINGER_BASE_DEG: [f32; 5] = [-30.0, -15.0, 0.0, 15.0, 30.0];

const PALM_FILL:    u32 = 0x333B_75D9; // accent at 20% alpha
const PALM_EDGE:    u32 = 0xFFE5_E7EB;
const FINGER_COLOR: u32 = 0xFF3B_75D9;
const JOINT_COLOR:  u32 = 0xFF25_63EB;

// ════════════════════════════════════════════════════════════════════════════
// HandTransform — orientation applied to local hand coordinates
// ════════════════════════════════════════════════════════════════════════════

/// Scale-then-rotate-then-translate mapping from hand space (origin at the
/// palm center, y up as negative) to surface pixels.
struct HandTransform {
    cx:    f32,
    cy:    f32,
    sin_r: f32,
    cos_r: f32,
    sx:    f32,
    sy:    f32,
}

impl HandTransform {
    fn new(frame: &SensorFrame, surface_w: usize, surface_h: usize) -> Self {
        let o = frame.orientation;
        let rot = (o.z as f32).to_radians();
        // Tilt stand-in: the x turn forshortens the vertical axis, the y
        // turn the horizontal one, each through cos(angle/10°).
        let sy = ((o.x as f32).to_radians() / 10.0).cos();
        let sx = ((o.y as f32).to_radians() / 10.0).cos();
        HandTransform {
            cx: surface_w as f32 / 2.0,
            cy: surface_h as f32 / 2.0 + 50.0,
            sin_r: rot.sin(),
            cos_r: rot.cos(),
            sx,
            sy,
        }
    }

    fn map(&self, x: f32, y: f32) -> (f32, f32) {
        let (x, y) = (x * self.sx, y * self.sy);
        (self.cx + x * self.cos_r - y * self.sin_r,
         self.cy + x * self.sin_r + y * self.cos_r)
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Finger geometry
// ════════════════════════════════════════════════════════════════════════════

/// Joint chain for one finger in hand space: palm-edge joint, two knuckles,
/// fingertip.  Each segment turns a further `bend × 0.7` radians from the
/// one before it; `bend` is `(100 − flex) / 100`.
fn finger_joints(base_deg: f32, bend: f32) -> [(f32, f32); 4] {
    let mut points = [(0.0f32, 0.0f32); 4];
    let mut angle = base_deg.to_radians();
    points[0] = (angle.sin() * PALM_RADIUS, -angle.cos() * PALM_RADIUS);
    for i in 1..4 {
        angle -= bend * SEGMENT_BEND;
        points[i] = (points[i - 1].0 + angle.sin() * SEGMENT_LEN,
                     points[i - 1].1 - angle.cos() * SEGMENT_LEN);
    }
    points
}

// ════════════════════════════════════════════════════════════════════════════
// draw_hand
// ════════════════════════════════════════════════════════════════════════════

/// Draw the hand for one frame, centered at (width/2, height/2 + 50).
pub fn draw_hand(canvas: &mut dyn Canvas, frame: &SensorFrame) {
    let t = HandTransform::new(frame, canvas.width(), canvas.height());

    // ── Palm: transformed circle, translucent fill + hairline edge ────────
    let palm: Vec<(f32, f32)> = (0..PALM_SIDES)
        .map(|i| {
            let a = i as f32 / PALM_SIDES as f32 * TAU;
            t.map(a.cos() * PALM_RADIUS, a.sin() * PALM_RADIUS)
        })
        .collect();
    canvas.fill_polygon(&palm, PALM_FILL);
    canvas.stroke_polygon(&palm, 1.0, PALM_EDGE);

    // ── Fingers ───────────────────────────────────────────────────────────
    for finger in Finger::all() {
        let bend = (100 - frame.flex_for(finger)) as f32 / 100.0;
        let joints = finger_joints(FINGER_BASE_DEG[finger.index()], bend);

        for seg in joints.windows(2) {
            let (x0, y0) = t.map(seg[0].0, seg[0].1);
            let (x1, y1) = t.map(seg[1].0, seg[1].1);
            canvas.stroke_line(x0, y0, x1, y1, FINGER_WIDTH, FINGER_COLOR);
        }
        // Joint markers on the palm edge and the two knuckles.
        for &(jx, jy) in &joints[..3] {
            let (x, y) = t.map(jx, jy);
            canvas.fill_circle(x, y, JOINT_RADIUS, JOINT_COLOR);
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════
