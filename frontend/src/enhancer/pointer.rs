use std::rc::Rc;

use crate::dom::Surface;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Offset for the orb at `index`: further orbs move more, proportional to the
/// pointer's distance from the viewport centre.
pub fn parallax_offset(index: usize, pointer: Point, viewport: Point, step: f64) -> Point {
    let speed = (index + 1) as f64 * step;
    Point {
        x: (pointer.x - viewport.x / 2.0) * speed,
        y: (pointer.y - viewport.y / 2.0) * speed,
    }
}

pub struct Parallax {
    orbs: Vec<Rc<dyn Surface>>,
    step: f64,
}

impl Parallax {
    pub fn new(orbs: Vec<Rc<dyn Surface>>, step: f64) -> Self {
        Self { orbs, step }
    }

    pub fn on_pointer(&self, pointer: Point, viewport: Point) {
        for (index, orb) in self.orbs.iter().enumerate() {
            let offset = parallax_offset(index, pointer, viewport, self.step);
            orb.set_style("transform", &format!("translate({}px, {}px)", offset.x, offset.y));
        }
    }
}

/// Pointer position inside a card, written to `--mouse-x` / `--mouse-y` for
/// the card's hover glow.
pub fn track_glow(card: &dyn Surface, pointer: Point, card_origin: Point) {
    card.set_style("--mouse-x", &format!("{}px", pointer.x - card_origin.x));
    card.set_style("--mouse-y", &format!("{}px", pointer.y - card_origin.y));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeSurface;

    const VIEWPORT: Point = Point { x: 1000.0, y: 800.0 };

    #[test]
    fn centred_pointer_leaves_orbs_in_place() {
        let offset = parallax_offset(2, Point { x: 500.0, y: 400.0 }, VIEWPORT, 0.02);
        assert_eq!(offset, Point { x: 0.0, y: 0.0 });
    }

    #[test]
    fn later_orbs_move_further() {
        let orbs: Vec<Rc<FakeSurface>> = (0..2).map(|_| FakeSurface::new()).collect();
        let parallax = Parallax::new(
            orbs.iter().map(|o| o.clone() as Rc<dyn Surface>).collect(),
            0.5,
        );
        parallax.on_pointer(Point { x: 600.0, y: 300.0 }, VIEWPORT);

        assert_eq!(orbs[0].style("transform").as_deref(), Some("translate(50px, -50px)"));
        assert_eq!(orbs[1].style("transform").as_deref(), Some("translate(100px, -100px)"));
    }

    #[test]
    fn glow_is_relative_to_the_card() {
        let card = FakeSurface::new();
        track_glow(&*card, Point { x: 130.0, y: 260.0 }, Point { x: 100.0, y: 200.0 });
        assert_eq!(card.style("--mouse-x").as_deref(), Some("30px"));
        assert_eq!(card.style("--mouse-y").as_deref(), Some("60px"));
    }
}
