use anyhow::Result;
use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};

use crate::domain::find_extremum::{find_max, find_min};
use crate::domain::sort_strategy::{MergeSort, SortStrategy};
use crate::models::{
    element::{Element, ElementId},
    settings::Settings,
    surface::Surface,
};
use crate::stores::array_data_collection::ArrayDataCollection;
use crate::stores::data_collection::DataCollection;

use super::element_source::{ElementSource, RandomElementSource};

/// Actions a user can trigger on the organized collection.
///
/// Until the first `random_action` there is no collection and every other
/// action does nothing.
pub trait DataOrganizer {
    /// Replaces the collection with freshly generated elements, none selected
    fn random_action(&self) -> Result<()>;
    /// Selects the left-most largest element
    fn maximum_action(&self) -> Option<ElementId>;
    /// Selects the left-most smallest element
    fn minimum_action(&self) -> Option<ElementId>;
    /// Removes the selected element
    fn remove_action(&self);
    /// Sorts the collection in ascending order, leaving nothing selected
    fn sort_action(&self) -> Result<()>;
    fn is_sortable(&self) -> bool;
    fn paint(&self, surface: &mut dyn Surface);
    fn get_elements(&self) -> Vec<Element>;
    fn get_settings(&self) -> &Settings;
}

type SharedCollection = RwLock<Option<Box<dyn DataCollection + Send + Sync>>>;

pub struct OrganizerService {
    settings: Settings,
    collection: SharedCollection,
    source: Mutex<Box<dyn ElementSource + Send>>,
    sorter: Option<Box<dyn SortStrategy + Send + Sync>>,
}

impl OrganizerService {
    pub fn new(settings: Settings) -> Self {
        let source: Box<dyn ElementSource + Send> = match settings.seed {
            Some(seed) => Box::new(RandomElementSource::with_seed(seed)),
            None => Box::new(RandomElementSource::new()),
        };
        let sorter: Option<Box<dyn SortStrategy + Send + Sync>> = match settings.sortable {
            true => Some(Box::new(MergeSort)),
            false => None,
        };

        Self::with_parts(settings, source, sorter)
    }

    pub fn with_parts(
        settings: Settings,
        source: Box<dyn ElementSource + Send>,
        sorter: Option<Box<dyn SortStrategy + Send + Sync>>,
    ) -> Self {
        Self {
            settings,
            collection: RwLock::new(None),
            source: Mutex::new(source),
            sorter,
        }
    }
}

impl DataOrganizer for OrganizerService {
    fn random_action(&self) -> Result<()> {
        let (x, y) = self.settings.origin;
        let mut collection = ArrayDataCollection::with_origin(x, y);

        let mut source = self.source.lock();
        for _ in 0..self.settings.collection_size {
            let element = source.produce(self.settings.maximum_item_value, self.settings.item_color);
            collection.add(element)?;
        }
        collection.reset_to(None);

        debug!("Generated a collection of {} elements", collection.len());
        *self.collection.write() = Some(Box::new(collection));
        Ok(())
    }

    fn maximum_action(&self) -> Option<ElementId> {
        let mut w = self.collection.write();
        let collection = w.as_mut()?;
        let maximum = find_max(&mut **collection);
        debug!("Maximum selected: {:?}", maximum);
        maximum
    }

    fn minimum_action(&self) -> Option<ElementId> {
        let mut w = self.collection.write();
        let collection = w.as_mut()?;
        let minimum = find_min(&mut **collection);
        debug!("Minimum selected: {:?}", minimum);
        minimum
    }

    fn remove_action(&self) {
        if let Some(collection) = self.collection.write().as_mut() {
            collection.remove();
        }
    }

    fn sort_action(&self) -> Result<()> {
        let sorter = match &self.sorter {
            Some(sorter) => sorter,
            None => {
                warn!("Sort requested but this organizer cannot sort");
                return Ok(());
            }
        };

        match self.collection.write().as_mut() {
            Some(collection) => {
                sorter.sort(&mut **collection)?;
                info!("Collection sorted with {}", sorter.name());
            }
            None => warn!("Sort requested before any collection was generated"),
        }
        Ok(())
    }

    fn is_sortable(&self) -> bool {
        self.sorter.is_some()
    }

    fn paint(&self, surface: &mut dyn Surface) {
        if let Some(collection) = self.collection.read().as_ref() {
            collection.paint(surface);
        }
    }

    fn get_elements(&self) -> Vec<Element> {
        let mut elements: Vec<Element> = Vec::new();
        self.paint(&mut elements);
        elements
    }

    fn get_settings(&self) -> &Settings {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::element::OVERALL_WIDTH;

    /// Produces the given values in a loop
    struct FixedSource {
        values: Vec<i64>,
        next: usize,
    }

    impl ElementSource for FixedSource {
        fn produce(&mut self, _maximum_value: i64, color: (u8, u8, u8)) -> Element {
            let value = self.values[self.next % self.values.len()];
            self.next += 1;
            Element::with_color(value, color)
        }
    }

    fn organizer_with(values: &[i64], sortable: bool) -> OrganizerService {
        let settings = Settings {
            collection_size: values.len(),
            origin: (30, 60),
            ..Default::default()
        };
        let sorter: Option<Box<dyn SortStrategy + Send + Sync>> = match sortable {
            true => Some(Box::new(MergeSort)),
            false => None,
        };
        OrganizerService::with_parts(
            settings,
            Box::new(FixedSource { values: values.to_vec(), next: 0 }),
            sorter,
        )
    }

    fn values(organizer: &OrganizerService) -> Vec<i64> {
        organizer.get_elements().iter().map(|e| e.value()).collect()
    }

    fn selected(organizer: &OrganizerService) -> Vec<usize> {
        organizer
            .get_elements()
            .iter()
            .enumerate()
            .filter(|(_, e)| e.is_highlighted())
            .map(|(i, _)| i)
            .collect()
    }

    #[test]
    fn actions_without_collection_do_nothing() {
        let organizer = organizer_with(&[1], true);

        assert!(organizer.maximum_action().is_none());
        assert!(organizer.minimum_action().is_none());
        organizer.remove_action();
        assert!(organizer.sort_action().is_ok());
        assert!(organizer.get_elements().is_empty());
    }

    #[test]
    fn random_fills_collection_without_selection() {
        let organizer = OrganizerService::new(Settings {
            seed: Some(9),
            ..Default::default()
        });

        organizer.random_action().unwrap();

        let elements = organizer.get_elements();
        assert_eq!(elements.len(), 10);
        assert!(elements.iter().all(|e| (1..=16).contains(&e.value())));
        assert!(elements.iter().all(|e| !e.is_highlighted()));
        assert_eq!(elements[0].position().x, 0);
        assert_eq!(elements[9].position().x, 9 * OVERALL_WIDTH);
    }

    #[test]
    fn random_replaces_previous_collection() {
        let organizer = organizer_with(&[1, 2, 3], true);
        organizer.random_action().unwrap();
        organizer.random_action().unwrap();

        assert_eq!(values(&organizer), vec![1, 2, 3]);
    }

    #[test]
    fn maximum_then_remove() {
        let organizer = organizer_with(&[3, 7, 7, 2], true);
        organizer.random_action().unwrap();

        let maximum = organizer.maximum_action();
        assert_eq!(maximum, Some(organizer.get_elements()[1].id()));
        assert_eq!(selected(&organizer), vec![1]);

        organizer.remove_action();
        assert_eq!(values(&organizer), vec![3, 7, 2]);
        assert!(selected(&organizer).is_empty());
        assert_eq!(organizer.get_elements()[1].position().x, 30 + OVERALL_WIDTH);
    }

    #[test]
    fn minimum_selects_left_most() {
        let organizer = organizer_with(&[5, 1, 1, 9], true);
        organizer.random_action().unwrap();

        organizer.minimum_action();
        assert_eq!(selected(&organizer), vec![1]);
    }

    #[test]
    fn sort_orders_and_clears_selection() {
        let organizer = organizer_with(&[5, 3, 8, 1], true);
        organizer.random_action().unwrap();
        organizer.maximum_action();

        organizer.sort_action().unwrap();

        assert_eq!(values(&organizer), vec![1, 3, 5, 8]);
        assert!(selected(&organizer).is_empty());
        assert_eq!(organizer.get_elements()[0].position().x, 30);
    }

    #[test]
    fn sort_without_capability_is_noop() {
        let organizer = organizer_with(&[5, 3, 8, 1], false);
        organizer.random_action().unwrap();

        assert!(!organizer.is_sortable());
        organizer.sort_action().unwrap();
        assert_eq!(values(&organizer), vec![5, 3, 8, 1]);
    }

    #[test]
    fn settings_decide_sortability() {
        let organizer = OrganizerService::new(Settings {
            sortable: false,
            ..Default::default()
        });
        assert!(!organizer.is_sortable());
        assert!(OrganizerService::new(Settings::default()).is_sortable());
    }
}
