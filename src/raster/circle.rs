//! Midpoint circle rasterizer.
//!
//! Only the octant from 12 o'clock to 45 degrees is computed; the other
//! seven are mirrored from it. The decision variable starts at `1 - r` and
//! is updated after emitting each octant point, before `x` advances:
//!
//! - `d < 0`: the midpoint is inside the circle, keep `y`, `d += 2x + 3`
//! - otherwise step `y` inward as well, `d += 2(x - y) + 5`
//!
//! Radii are clamped to [`MAX_RADIUS`]. Mirrored points that fall outside
//! the `i32` plane are dropped rather than wrapped.

use super::Span;

/// Largest radius the rasterizers honour. Larger radii are drawn at this
/// size.
pub const MAX_RADIUS: u32 = 1 << 20;

/// Octant-local `(x, y)` offsets with `0 <= x <= y`, from `(0, r)` to the
/// diagonal.
#[derive(Debug, Clone)]
pub struct OctantSteps {
    x: i32,
    y: i32,
    decision: i32,
}

impl OctantSteps {
    /// Start at `(0, r)` with `r` clamped to [`MAX_RADIUS`].
    pub fn new(radius: u32) -> Self {
        let r = radius.min(MAX_RADIUS) as i32;
        Self {
            x: 0,
            y: r,
            decision: 1 - r,
        }
    }
}

impl Iterator for OctantSteps {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.x > self.y {
            return None;
        }

        let current = (self.x, self.y);

        if self.decision < 0 {
            self.decision += 2 * self.x + 3;
        } else {
            self.decision += 2 * (self.x - self.y) + 5;
            self.y -= 1;
        }
        self.x += 1;

        Some(current)
    }
}

impl std::iter::FusedIterator for OctantSteps {}

/// Lazy sequence of the perimeter pixels of a circle.
///
/// Every octant step is expanded to its eight mirror images. Points on the
/// axes and on the diagonal come out more than once; a last-write-wins
/// surface absorbs the duplicates.
#[derive(Debug, Clone)]
pub struct CirclePoints {
    cx: i32,
    cy: i32,
    steps: OctantSteps,
    current: Option<(i32, i32)>,
    mirror: u8,
}

/// Rasterize the circle of radius `r` centred on `(cx, cy)`.
///
/// A radius of zero yields the centre pixel (eight times). Near the edges of
/// the `i32` plane some mirror images are skipped.
pub fn rasterize_circle(cx: i32, cy: i32, r: u32) -> CirclePoints {
    let mut steps = OctantSteps::new(r);
    let current = steps.next();
    CirclePoints {
        cx,
        cy,
        steps,
        current,
        mirror: 0,
    }
}

impl Iterator for CirclePoints {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (x, y) = self.current?;
            let (cx, cy) = (self.cx, self.cy);

            let point = match self.mirror {
                0 => offset(cx, cy, x, y),
                1 => offset(cx, cy, -x, y),
                2 => offset(cx, cy, x, -y),
                3 => offset(cx, cy, -x, -y),
                4 => offset(cx, cy, y, x),
                5 => offset(cx, cy, -y, x),
                6 => offset(cx, cy, y, -x),
                _ => offset(cx, cy, -y, -x),
            };

            self.mirror += 1;
            if self.mirror == 8 {
                self.mirror = 0;
                self.current = self.steps.next();
            }

            if point.is_some() {
                return point;
            }
        }
    }
}

fn offset(cx: i32, cy: i32, dx: i32, dy: i32) -> Option<(i32, i32)> {
    Some((cx.checked_add(dx)?, cy.checked_add(dy)?))
}

impl std::iter::FusedIterator for CirclePoints {}

/// Horizontal spans covering a filled circle, top row first.
///
/// Each octant step `(x, y)` bounds rows `cy ± y` at half-width `x` and rows
/// `cy ± x` at half-width `y`; the widest bound per row wins. This touches
/// each perimeter point once instead of scanning the point list per row.
/// Rows outside the `i32` plane are skipped and span ends saturate.
pub fn circle_spans(cx: i32, cy: i32, r: u32) -> Vec<Span> {
    let r = r.min(MAX_RADIUS) as i32;

    // indexed by row offset + r
    let mut half_widths = vec![-1; 2 * r as usize + 1];
    let mut widen = |dy: i32, half_width: i32| {
        let entry = &mut half_widths[(dy + r) as usize];
        *entry = (*entry).max(half_width);
    };

    for (x, y) in OctantSteps::new(r as u32) {
        widen(y, x);
        widen(-y, x);
        widen(x, y);
        widen(-x, y);
    }

    half_widths
        .into_iter()
        .zip(-r..=r)
        .filter(|&(hw, _)| hw >= 0)
        .filter_map(|(hw, dy)| {
            let row = cy.checked_add(dy)?;
            Some(Span::new(row, cx.saturating_sub(hw), cx.saturating_add(hw)))
        })
        .collect()
}
