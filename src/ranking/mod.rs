mod view;
pub use view::*;

use tracing::debug;

use crate::{catalog::RideOffer, config::Config};

/// The four projections of a catalog. Each view owns its offers, so the
/// fastest view's annotations never reach the others.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RideViews {
    pub all: Vec<RideOffer>,
    pub economy: Vec<RideOffer>,
    pub premium: Vec<RideOffer>,
    pub fastest: Vec<RideOffer>,
}

impl RideViews {
    pub fn get(&self, view: RideView) -> &[RideOffer] {
        match view {
            RideView::All => &self.all,
            RideView::Economy => &self.economy,
            RideView::Premium => &self.premium,
            RideView::Fastest => &self.fastest,
        }
    }

    /// The single flagged offer of a view, if there is one.
    pub fn recommended(&self, view: RideView) -> Option<&RideOffer> {
        self.get(view).iter().find(|offer| offer.recommended)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Ranker {
    config: Config,
}

impl Ranker {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn classify(&self, catalog: &[RideOffer]) -> RideViews {
        let (economy, premium): (Vec<RideOffer>, Vec<RideOffer>) = catalog
            .iter()
            .cloned()
            .partition(|offer| offer.fare < self.config.economy_threshold);
        let views = RideViews {
            all: catalog.to_vec(),
            economy,
            premium,
            fastest: self.fastest(catalog),
        };
        debug!(
            "Classified {} offers: {} economy, {} premium, {} fastest",
            views.all.len(),
            views.economy.len(),
            views.premium.len(),
            views.fastest.len()
        );
        views
    }

    pub fn view(&self, catalog: &[RideOffer], view: RideView) -> Vec<RideOffer> {
        match view {
            RideView::All => catalog.to_vec(),
            RideView::Economy => catalog
                .iter()
                .filter(|offer| offer.fare < self.config.economy_threshold)
                .cloned()
                .collect(),
            RideView::Premium => catalog
                .iter()
                .filter(|offer| offer.fare >= self.config.economy_threshold)
                .cloned()
                .collect(),
            RideView::Fastest => self.fastest(catalog),
        }
    }

    fn fastest(&self, catalog: &[RideOffer]) -> Vec<RideOffer> {
        let mut ordered: Vec<&RideOffer> = catalog.iter().collect();
        // Stable, ties keep catalog order
        ordered.sort_by_key(|offer| offer.total_time());
        ordered
            .into_iter()
            .take(self.config.fastest_limit)
            .enumerate()
            .map(|(i, offer)| {
                let mut offer = offer.clone();
                if i == 0 {
                    offer.recommended = true;
                    offer.recommend_reason = Some(self.config.fastest_reason.as_str().into());
                } else {
                    offer.recommended = false;
                    offer.recommend_reason = None;
                }
                offer
            })
            .collect()
    }
}

/// Classifies with the default fare threshold and fastest limit.
pub fn classify(catalog: &[RideOffer]) -> RideViews {
    Ranker::default().classify(catalog)
}

#[test]
fn empty_catalog_gives_empty_views() {
    let views = classify(&[]);
    assert_eq!(views, RideViews::default());
}

#[test]
fn view_matches_classify() {
    let catalog = crate::catalog::Catalog::demo();
    let ranker = Ranker::default();
    let views = ranker.classify(&catalog);
    for view in RideView::ALL {
        assert_eq!(ranker.view(&catalog, view), views.get(view));
    }
}
