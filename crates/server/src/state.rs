use ridecompare::prelude::*;

pub struct AppState {
    pub estimator: Estimator,
    pub ranker: Ranker,
    pub catalog: Catalog,
    pub places: Places,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        let estimator = Estimator::default();
        let places = Places::from_table(estimator.table());
        let ranker = Ranker::new(estimator.config().clone());
        Self {
            estimator,
            ranker,
            catalog,
            places,
        }
    }
}
