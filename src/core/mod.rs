pub mod app;
pub mod filter;
pub mod loader;
pub mod view;

pub use crate::domain::model::{
    Card, Facility, FilterState, Indicator, LatLon, LooseBool, MapSettings, Marker, MarkerLabel,
    Rendering, ViewSettings,
};
pub use crate::domain::ports::{ConfigProvider, DocumentView, FacilitySource, MapWidget};
pub use crate::utils::error::Result;
