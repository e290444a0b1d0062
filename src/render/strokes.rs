use crate::render::{Canvas, Color};

/// Sets every pixel of column `x` between `from` and `to`, both inclusive.
pub(crate) fn stroke_vertical(canvas: &mut dyn Canvas, x: i32, from: i32, to: i32, color: Color) {
    let (top, bottom) = if from <= to { (from, to) } else { (to, from) };
    for y in top..=bottom {
        canvas.set_pixel(x, y, color);
    }
}

/// Sets every pixel of row `y` between `from` and `to`, both inclusive.
pub(crate) fn stroke_horizontal(
    canvas: &mut dyn Canvas,
    y: i32,
    from: i32,
    to: i32,
    color: Color,
) {
    let (left, right) = if from <= to { (from, to) } else { (to, from) };
    for x in left..=right {
        canvas.set_pixel(x, y, color);
    }
}

/// Fills `width x height` pixels starting at `(left, top)`.
pub(crate) fn fill_rect(
    canvas: &mut dyn Canvas,
    left: i32,
    top: i32,
    width: i32,
    height: i32,
    color: Color,
) {
    for y in top..top + height {
        for x in left..left + width {
            canvas.set_pixel(x, y, color);
        }
    }
}
