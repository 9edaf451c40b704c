use crate::domain::model::{
    Card, Facility, FilterState, Indicator, LatLon, MapSettings, MarkerLabel, ViewSettings,
};
use crate::utils::error::LoadError;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

#[async_trait]
pub trait FacilitySource: Send + Sync {
    async fn fetch_facilities(&self) -> std::result::Result<Vec<Facility>, LoadError>;
}

/// Marker layer of the map. Tiles and projection are the widget's business.
pub trait MapWidget {
    fn clear_markers(&mut self);
    fn add_marker(&mut self, position: LatLon, label: &MarkerLabel);
    fn set_view(&mut self, center: LatLon, zoom: u8);
}

/// List area plus the loading/error/empty indicators.
pub trait DocumentView {
    fn set_list(&mut self, cards: &[Card]);
    fn show(&mut self, indicator: Indicator, message: &str);
    fn hide(&mut self, indicator: Indicator);
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn request_timeout(&self) -> Duration;
    fn headers(&self) -> HashMap<String, String>;
    fn map_settings(&self) -> MapSettings;
    fn view_settings(&self) -> ViewSettings;
    fn initial_filter(&self) -> FilterState;
}
