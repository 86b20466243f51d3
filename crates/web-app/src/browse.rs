use log::{debug, error};
use swipefit_domain::{
    CartEntry, CartKey, CartStatus, CartStore, CatalogError, CatalogRepository, Difficulty,
    Equipment, PagedIndexController, ScrollCommand, Workout,
};

use crate::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub index: usize,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub name: &'static str,
    pub duration: &'static str,
    pub key: CartKey,
    pub status: CartStatus,
}

/// State of a screen that shows one catalog as swipeable cards.
pub struct Browser<R> {
    repository: R,
    equipment: Equipment,
    difficulty: Difficulty,
    workouts: Vec<Workout>,
    pager: PagedIndexController,
}

impl<R: CatalogRepository> Browser<R> {
    pub fn new(
        repository: R,
        equipment: Equipment,
        difficulty: Difficulty,
        settings: &Settings,
    ) -> Self {
        let mut browser = Self {
            repository,
            equipment,
            difficulty,
            workouts: vec![],
            pager: PagedIndexController::with_swipe_threshold(0, settings.swipe_threshold),
        };
        browser.workouts = browser.read_workouts();
        browser.pager.reset(browser.workouts.len());
        browser
    }

    /// Shows another catalog, starting at its first card.
    pub fn select(&mut self, equipment: Equipment, difficulty: Difficulty) {
        if equipment == self.equipment && difficulty == self.difficulty {
            return;
        }
        self.equipment = equipment;
        self.difficulty = difficulty;
        self.workouts = self.read_workouts();
        self.pager.reset(self.workouts.len());
    }

    /// Reloads the current catalog and keeps the position if it still exists.
    pub fn refresh(&mut self) {
        self.workouts = self.read_workouts();
        self.pager.resize(self.workouts.len());
    }

    #[must_use]
    pub fn equipment(&self) -> Equipment {
        self.equipment
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    #[must_use]
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    #[must_use]
    pub fn pager(&self) -> &PagedIndexController {
        &self.pager
    }

    pub fn on_gesture_start(&mut self, coordinate: f64) {
        self.pager.on_gesture_start(coordinate);
    }

    #[must_use]
    pub fn on_gesture_move(&self, coordinate: f64) -> Option<f64> {
        self.pager.on_gesture_move(coordinate)
    }

    pub fn on_gesture_end(&mut self, coordinate: f64, page_extent: f64) -> Option<ScrollCommand> {
        self.pager.on_gesture_end(coordinate, page_extent)
    }

    pub fn on_scroll_settle(&mut self, offset: f64, page_extent: f64) {
        self.pager.on_scroll_settle(offset, page_extent);
    }

    pub fn jump_to(&mut self, index: usize) -> ScrollCommand {
        self.pager.jump_to(index)
    }

    #[must_use]
    pub fn current_workout(&self) -> Option<&Workout> {
        self.workouts.get(self.pager.current_page()?)
    }

    #[must_use]
    pub fn dots(&self) -> Vec<Dot> {
        let current = self.pager.current_page();
        (0..self.pager.page_count())
            .map(|index| Dot {
                index,
                active: Some(index) == current,
            })
            .collect()
    }

    #[must_use]
    pub fn cards(&self, cart: &CartStore) -> Vec<Card> {
        self.workouts
            .iter()
            .map(|w| {
                let key = w.key(self.equipment, self.difficulty);
                Card {
                    name: w.name,
                    duration: w.duration,
                    status: cart.status(&key),
                    key,
                }
            })
            .collect()
    }

    /// Adds a snapshot of the current workout to the cart. Returns `None` if no workout is shown
    /// or its data is incomplete, and `Some(false)` if it is already in the cart.
    pub fn add_current(&self, cart: &mut CartStore) -> Option<bool> {
        let workout = self.current_workout()?;
        match CartEntry::try_from(workout.payload(self.equipment, self.difficulty)) {
            Ok(entry) => Some(cart.add(entry)),
            Err(err) => {
                error!("failed to add {} to cart: {err}", workout.name);
                None
            }
        }
    }

    /// Returns `None` if no workout is shown, and `Some(false)` if it was not in the cart.
    pub fn remove_current(&self, cart: &mut CartStore) -> Option<bool> {
        let workout = self.current_workout()?;
        Some(cart.remove(&workout.key(self.equipment, self.difficulty)))
    }

    fn read_workouts(&self) -> Vec<Workout> {
        match self.repository.read_workouts(self.equipment, self.difficulty) {
            Ok(workouts) => workouts,
            Err(err @ CatalogError::NotFound(..)) => {
                debug!("{err}");
                vec![]
            }
            Err(err) => {
                error!("failed to read catalog: {err}");
                vec![]
            }
        }
    }
}
