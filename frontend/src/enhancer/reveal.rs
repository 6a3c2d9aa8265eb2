use std::cell::RefCell;
use std::rc::Rc;

use crate::config::RevealConfig;
use crate::dom::Surface;
use crate::scheduler::Scheduler;

/// Attribute that ties an observed element back to its slot in `ScrollReveal`.
pub const REVEAL_INDEX: &str = "data-reveal-index";

/// One observer callback entry: which watched element, and whether it is
/// currently intersecting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sighting {
    pub index: usize,
    pub intersecting: bool,
}

/// An observer batch with each sighting still paired to the target it came
/// from, so finished targets can be unobserved. Entries whose index attribute
/// is missing or garbled are dropped.
pub struct Batch<T> {
    sightings: Vec<Sighting>,
    targets: Vec<(usize, T)>,
}

impl<T> Batch<T> {
    pub fn collect<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (Option<String>, bool, T)>,
    {
        let mut sightings = Vec::new();
        let mut targets = Vec::new();
        for (raw_index, intersecting, target) in entries {
            let Some(index) = raw_index.and_then(|raw| raw.trim().parse::<usize>().ok()) else {
                continue;
            };
            sightings.push(Sighting { index, intersecting });
            targets.push((index, target));
        }
        Self { sightings, targets }
    }

    pub fn sightings(&self) -> &[Sighting] {
        &self.sightings
    }

    pub fn target(&self, index: usize) -> Option<&T> {
        self.targets
            .iter()
            .find(|(candidate, _)| *candidate == index)
            .map(|(_, target)| target)
    }
}

/// Cards and headers that start hidden and fade up the first time they
/// scroll into view.
pub struct ScrollReveal {
    items: Vec<Rc<dyn Surface>>,
    revealed: RefCell<Vec<bool>>,
    scheduler: Rc<dyn Scheduler>,
    config: RevealConfig,
}

impl ScrollReveal {
    /// Hides every item immediately, before any observer is attached.
    pub fn new(items: Vec<Rc<dyn Surface>>, scheduler: Rc<dyn Scheduler>, config: RevealConfig) -> Self {
        let transition = format!(
            "opacity {secs}s ease, transform {secs}s ease",
            secs = config.transition_secs
        );
        let offset = format!("translateY({}px)", config.offset_px);
        for item in &items {
            item.set_style("opacity", "0");
            item.set_style("transform", &offset);
            item.set_style("transition", &transition);
        }

        let revealed = RefCell::new(vec![false; items.len()]);
        Self {
            items,
            revealed,
            scheduler,
            config,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.borrow().get(index).copied().unwrap_or(false)
    }

    /// Handles one observer batch and returns the indices that should no
    /// longer be observed. Each newly visible entry waits `stagger × position`
    /// so a batch cascades in order.
    pub fn on_batch(&self, batch: &[Sighting]) -> Vec<usize> {
        let mut done = Vec::new();
        for (position, sighting) in batch.iter().enumerate() {
            let index = sighting.index;
            if !sighting.intersecting || index >= self.items.len() || self.is_revealed(index) {
                continue;
            }
            self.revealed.borrow_mut()[index] = true;

            let item = self.items[index].clone();
            let delay = self.config.stagger_ms.saturating_mul(position as u32);
            self.scheduler.after(
                delay,
                Box::new(move || {
                    item.set_style("opacity", "1");
                    item.set_style("transform", "translateY(0)");
                }),
            );
            done.push(index);
        }
        done
    }

    /// Runs `on_batch` and hands back the targets that no longer need watching.
    pub fn settle<'a, T>(&self, batch: &'a Batch<T>) -> Vec<&'a T> {
        self.on_batch(batch.sightings())
            .into_iter()
            .filter_map(|index| batch.target(index))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{FakeSurface, ManualScheduler};

    fn setup(count: usize) -> (ScrollReveal, Vec<Rc<FakeSurface>>, ManualScheduler) {
        let surfaces: Vec<Rc<FakeSurface>> = (0..count).map(|_| FakeSurface::new()).collect();
        let items = surfaces
            .iter()
            .map(|s| s.clone() as Rc<dyn Surface>)
            .collect();
        let scheduler = ManualScheduler::new();
        let reveal = ScrollReveal::new(items, Rc::new(scheduler.clone()), RevealConfig::default());
        (reveal, surfaces, scheduler)
    }

    fn seen(index: usize) -> Sighting {
        Sighting { index, intersecting: true }
    }

    #[test]
    fn items_start_hidden() {
        let (reveal, surfaces, _) = setup(2);
        assert_eq!(reveal.len(), 2);
        for surface in &surfaces {
            assert_eq!(surface.style("opacity").as_deref(), Some("0"));
            assert_eq!(surface.style("transform").as_deref(), Some("translateY(30px)"));
            assert_eq!(
                surface.style("transition").as_deref(),
                Some("opacity 0.6s ease, transform 0.6s ease")
            );
        }
    }

    #[test]
    fn batch_reveals_in_a_staggered_cascade() {
        let (reveal, surfaces, scheduler) = setup(3);
        let done = reveal.on_batch(&[seen(0), seen(1), seen(2)]);
        assert_eq!(done, vec![0, 1, 2]);

        scheduler.advance(0);
        assert_eq!(surfaces[0].style("opacity").as_deref(), Some("1"));
        assert_eq!(surfaces[1].style("opacity").as_deref(), Some("0"));

        scheduler.advance(100);
        assert_eq!(surfaces[1].style("opacity").as_deref(), Some("1"));
        assert_eq!(surfaces[2].style("opacity").as_deref(), Some("0"));

        scheduler.advance(100);
        assert_eq!(surfaces[2].style("opacity").as_deref(), Some("1"));
        assert_eq!(surfaces[2].style("transform").as_deref(), Some("translateY(0)"));
    }

    #[test]
    fn non_intersecting_entries_stay_hidden_and_observed() {
        let (reveal, surfaces, scheduler) = setup(2);
        let done = reveal.on_batch(&[Sighting { index: 0, intersecting: false }, seen(1)]);
        assert_eq!(done, vec![1]);

        scheduler.advance(1000);
        assert_eq!(surfaces[0].style("opacity").as_deref(), Some("0"));
        assert_eq!(surfaces[1].style("opacity").as_deref(), Some("1"));
        assert!(!reveal.is_revealed(0));
    }

    #[test]
    fn each_item_reveals_once() {
        let (reveal, surfaces, scheduler) = setup(1);
        reveal.on_batch(&[seen(0)]);
        scheduler.advance(0);
        let writes = surfaces[0].style_writes();

        assert!(reveal.on_batch(&[seen(0)]).is_empty());
        scheduler.advance(1000);
        assert_eq!(surfaces[0].style_writes(), writes);
        assert!(reveal.is_revealed(0));
    }

    #[test]
    fn unknown_indices_are_ignored() {
        let (reveal, _, scheduler) = setup(1);
        assert!(reveal.on_batch(&[seen(7)]).is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    fn entry(index: &str, intersecting: bool, name: &'static str) -> (Option<String>, bool, &'static str) {
        (Some(index.to_string()), intersecting, name)
    }

    #[test]
    fn batch_maps_index_attributes_back_to_targets() {
        let batch = Batch::collect(vec![
            entry("1", true, "tech"),
            (None, true, "stray"),
            entry("x", true, "garbled"),
            entry("0", false, "header"),
        ]);
        assert_eq!(
            batch.sightings(),
            &[
                Sighting { index: 1, intersecting: true },
                Sighting { index: 0, intersecting: false },
            ]
        );
        assert_eq!(batch.target(0), Some(&"header"));
        assert_eq!(batch.target(2), None);
    }

    #[test]
    fn settle_unobserves_only_newly_revealed_targets() {
        let (reveal, surfaces, scheduler) = setup(3);
        let first = Batch::collect(vec![
            entry("0", true, "feature"),
            entry("1", false, "tech"),
            entry("2", true, "step"),
        ]);
        assert_eq!(reveal.settle(&first), vec![&"feature", &"step"]);

        let again = Batch::collect(vec![entry("2", true, "step"), entry("1", true, "tech")]);
        assert_eq!(reveal.settle(&again), vec![&"tech"]);

        // "tech" sat second in its batch, so it waits one stagger step.
        scheduler.advance(0);
        assert_eq!(surfaces[1].style("opacity").as_deref(), Some("0"));
        scheduler.advance(100);
        assert_eq!(surfaces[1].style("opacity").as_deref(), Some("1"));
    }
}
