//! Offline route estimation and ride ranking.
//!
//! [`estimate::estimate`] turns a pickup and destination into a distance and
//! duration, [`ranking::classify`] turns a catalog of ride offers into the
//! all, economy, premium and fastest views. Both are pure functions, renderers
//! call them with plain data and show what comes back.

pub mod catalog;
pub mod config;
pub mod estimate;
#[cfg(feature = "delay")]
pub mod pending;
pub mod places;
pub mod ranking;
pub mod shared;

pub mod prelude {
    pub use crate::catalog::{Catalog, Fare, Provider, RideOffer};
    pub use crate::config::Config;
    pub use crate::estimate::{
        EstimateSource, Estimator, RouteEstimate, RouteKey, RouteTable, can_compare, estimate,
    };
    #[cfg(feature = "delay")]
    pub use crate::pending::{RouteState, RouteWatcher};
    pub use crate::places::{CURRENT_LOCATION, Place, Places, locate};
    pub use crate::ranking::{Ranker, RideView, RideViews, classify};
    pub use crate::shared::{Distance, Duration, NormalizedKey, normalize};
}
