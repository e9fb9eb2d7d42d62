/*
 * Coordinates Module
 *
 * The simulation works in canvas space (origin top-left, y down) while
 * nannou reports and draws in window space (origin at the window centre,
 * y up). These two functions convert between them.
 */

use nannou::prelude::*;

// Convert a point from window space to canvas space
pub fn window_to_canvas(point: Point2, window_rect: Rect) -> Point2 {
    pt2(point.x - window_rect.left(), window_rect.top() - point.y)
}

// Convert a point from canvas space to window space
pub fn canvas_to_window(point: Point2, window_rect: Rect) -> Point2 {
    pt2(window_rect.left() + point.x, window_rect.top() - point.y)
}
