use crate::coords::{Rect, Vec2};
use crate::scene::{DrawCmd, DrawItem, DrawList};

use super::Pixmap;

/// Supersampling CPU rasterizer for [`DrawList`]s.
///
/// Anti-aliased paints take `samples_per_axis²` samples per pixel; aliased
/// paints take a single sample at the pixel center.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Rasterizer {
    pub samples_per_axis: u32,
}

impl Default for Rasterizer {
    fn default() -> Self {
        Self { samples_per_axis: 4 }
    }
}

impl Rasterizer {
    pub fn new(samples_per_axis: u32) -> Self {
        Self { samples_per_axis: samples_per_axis.max(1) }
    }

    /// Composites every item of `list` onto `target`, in paint order.
    pub fn render(&self, list: &DrawList, target: &mut Pixmap) {
        for item in list.items() {
            self.render_item(item, target);
        }
    }

    fn render_item(&self, item: &DrawItem, target: &mut Pixmap) {
        let Some(inverse) = item.transform.inverse() else {
            log::debug!("Rasterizer: singular transform, skipping {:?}", item.cmd);
            return;
        };

        let Some(area) = visible_area(item, target.bounds()) else { return; };

        let paint = *item.cmd.paint();
        let n = if paint.anti_alias { self.samples_per_axis.max(1) } else { 1 };
        let step = 1.0 / n as f32;
        let total = (n * n) as f32;

        let x0 = area.min().x.floor().max(0.0) as u32;
        let y0 = area.min().y.floor().max(0.0) as u32;
        let x1 = (area.max().x.ceil() as u32).min(target.width());
        let y1 = (area.max().y.ceil() as u32).min(target.height());

        for py in y0..y1 {
            for px in x0..x1 {
                let mut hits = 0u32;
                for j in 0..n {
                    for i in 0..n {
                        let s = Vec2::new(
                            px as f32 + (i as f32 + 0.5) * step,
                            py as f32 + (j as f32 + 0.5) * step,
                        );
                        if item.clip_rect.is_some_and(|clip| !clip.contains(s)) {
                            continue;
                        }
                        if covers(&item.cmd, inverse.apply(s)) {
                            hits += 1;
                        }
                    }
                }

                if hits > 0 {
                    if let Some(dst) = target.pixel_mut(px, py) {
                        *dst = paint.color.over(*dst, hits as f32 / total);
                    }
                }
            }
        }
    }
}

fn visible_area(item: &DrawItem, target: Rect) -> Option<Rect> {
    let mut area = item.device_bounds().intersect(target)?;
    if let Some(clip) = item.clip_rect {
        area = area.intersect(clip)?;
    }
    Some(area)
}

fn covers(cmd: &DrawCmd, local: Vec2) -> bool {
    match cmd {
        DrawCmd::Rect(r) => r.rect.normalized().contains(local),
        DrawCmd::Arc(a) => a.contains(local),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Transform2D;
    use crate::paint::{Color, Paint};
    use crate::scene::ArcCmd;

    fn white() -> Paint {
        Paint::fill(Color::from_straight(1.0, 1.0, 1.0, 1.0))
    }

    fn alpha_at(p: &Pixmap, x: u32, y: u32) -> f32 {
        p.pixel(x, y).map(|c| c.a).unwrap_or(0.0)
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn pixel_aligned_rect_is_fully_covered() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(2.0, 2.0, 3.0, 3.0), white(), Transform2D::IDENTITY, None);

        let mut pix = Pixmap::new(8, 8);
        Rasterizer::default().render(&list, &mut pix);

        assert_eq!(alpha_at(&pix, 2, 2), 1.0);
        assert_eq!(alpha_at(&pix, 4, 4), 1.0);
        assert_eq!(alpha_at(&pix, 5, 5), 0.0);
        assert_eq!(alpha_at(&pix, 1, 2), 0.0);
    }

    #[test]
    fn half_pixel_edge_is_partially_covered() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 1.5, 1.0), white(), Transform2D::IDENTITY, None);

        let mut pix = Pixmap::new(4, 4);
        Rasterizer::new(4).render(&list, &mut pix);

        assert_eq!(alpha_at(&pix, 0, 0), 1.0);
        assert_eq!(alpha_at(&pix, 1, 0), 0.5);
    }

    #[test]
    fn aliased_paint_is_binary() {
        let mut list = DrawList::new();
        let paint = white().with_anti_alias(false);
        list.push_rect(Rect::new(0.0, 0.0, 1.4, 1.0), paint, Transform2D::IDENTITY, None);

        let mut pix = Pixmap::new(4, 4);
        Rasterizer::new(4).render(&list, &mut pix);

        // Center sample of pixel 1 is at x = 1.5, outside the rect.
        assert_eq!(alpha_at(&pix, 0, 0), 1.0);
        assert_eq!(alpha_at(&pix, 1, 0), 0.0);
    }

    #[test]
    fn transform_is_applied() {
        let mut list = DrawList::new();
        list.push_rect(
            Rect::new(0.0, 0.0, 2.0, 2.0),
            white(),
            Transform2D::translation(4.0, 1.0),
            None,
        );

        let mut pix = Pixmap::new(8, 8);
        Rasterizer::default().render(&list, &mut pix);

        assert_eq!(alpha_at(&pix, 0, 0), 0.0);
        assert_eq!(alpha_at(&pix, 4, 1), 1.0);
        assert_eq!(alpha_at(&pix, 5, 2), 1.0);
    }

    #[test]
    fn clip_rect_limits_coverage() {
        let mut list = DrawList::new();
        list.push_rect(
            Rect::new(0.0, 0.0, 8.0, 8.0),
            white(),
            Transform2D::IDENTITY,
            Some(Rect::new(2.0, 0.0, 2.0, 8.0)),
        );

        let mut pix = Pixmap::new(8, 8);
        Rasterizer::default().render(&list, &mut pix);

        assert_eq!(alpha_at(&pix, 1, 3), 0.0);
        assert_eq!(alpha_at(&pix, 2, 3), 1.0);
        assert_eq!(alpha_at(&pix, 4, 3), 0.0);
    }

    #[test]
    fn singular_transform_draws_nothing() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 8.0, 8.0), white(), Transform2D::scale(0.0, 1.0), None);

        let mut pix = Pixmap::new(8, 8);
        Rasterizer::default().render(&list, &mut pix);

        assert_eq!(pix, Pixmap::new(8, 8));
    }

    // ── arcs ──────────────────────────────────────────────────────────────

    #[test]
    fn quarter_arc_fills_one_quadrant() {
        let mut list = DrawList::new();
        let oval = Rect::from_center_radius(Vec2::new(8.0, 8.0), 8.0);
        list.push_arc(ArcCmd::new(oval, 180.0, 90.0, white()), Transform2D::IDENTITY, None);

        let mut pix = Pixmap::new(16, 16);
        Rasterizer::default().render(&list, &mut pix);

        // Upper-left quadrant, well inside the radius.
        assert_eq!(alpha_at(&pix, 4, 4), 1.0);
        assert_eq!(alpha_at(&pix, 11, 4), 0.0);
        assert_eq!(alpha_at(&pix, 4, 11), 0.0);
        assert_eq!(alpha_at(&pix, 11, 11), 0.0);
        // Outer corner lies outside the circle.
        assert_eq!(alpha_at(&pix, 0, 0), 0.0);
    }
}
