use crate::core::filter::filter_facilities;
use crate::core::{
    Card, DocumentView, Facility, FilterState, Indicator, MapWidget, Marker, MarkerLabel,
    Rendering, ViewSettings,
};

/// Turns the facility list plus filter state into markers and cards.
#[derive(Debug, Clone, Default)]
pub struct FilterView {
    settings: ViewSettings,
}

impl FilterView {
    pub fn new(settings: ViewSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &ViewSettings {
        &self.settings
    }

    /// Pure part of a render pass.
    pub fn build(&self, facilities: &[Facility], state: &FilterState) -> Rendering {
        let filtered = filter_facilities(facilities, state);

        let markers = filtered
            .iter()
            .filter_map(|f| {
                f.position().map(|position| Marker {
                    position,
                    label: self.marker_label(f),
                })
            })
            .collect();

        let cards = filtered.iter().map(|f| self.card(f)).collect();

        Rendering { markers, cards }
    }

    /// Clears both render targets and rebuilds them from scratch.
    pub fn render<M, D>(
        &self,
        facilities: &[Facility],
        state: &FilterState,
        map: &mut M,
        document: &mut D,
    ) -> Rendering
    where
        M: MapWidget + ?Sized,
        D: DocumentView + ?Sized,
    {
        let rendering = self.build(facilities, state);

        map.clear_markers();
        document.set_list(&[]);

        if rendering.is_empty() {
            tracing::debug!("No facilities match {:?}", state);
            document.show(Indicator::Empty, &self.settings.empty_message);
            return rendering;
        }
        document.hide(Indicator::Empty);

        for marker in &rendering.markers {
            map.add_marker(marker.position, &marker.label);
        }
        document.set_list(&rendering.cards);

        tracing::debug!(
            "Rendered {} cards and {} markers",
            rendering.cards.len(),
            rendering.markers.len()
        );
        rendering
    }

    fn title(&self, facility: &Facility) -> String {
        facility
            .name
            .clone()
            .unwrap_or_else(|| self.settings.no_name_placeholder.clone())
    }

    fn marker_label(&self, facility: &Facility) -> MarkerLabel {
        MarkerLabel {
            title: self.title(facility),
            subtitle: facility.kind.clone().unwrap_or_default(),
        }
    }

    fn card(&self, facility: &Facility) -> Card {
        Card {
            title: self.title(facility),
            practice_name: facility.practice_name.clone(),
            kind: facility.kind.clone().unwrap_or_default(),
            accessibility: facility
                .is_wheelchair_accessible()
                .then(|| self.settings.accessible_label.clone()),
            focus: facility.focus_point(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LatLon;
    use serde_json::json;

    #[derive(Default)]
    struct FakeMap {
        markers: Vec<(LatLon, MarkerLabel)>,
        clears: usize,
    }

    impl MapWidget for FakeMap {
        fn clear_markers(&mut self) {
            self.markers.clear();
            self.clears += 1;
        }

        fn add_marker(&mut self, position: LatLon, label: &MarkerLabel) {
            self.markers.push((position, label.clone()));
        }

        fn set_view(&mut self, _center: LatLon, _zoom: u8) {}
    }

    #[derive(Default)]
    struct FakeDocument {
        cards: Vec<Card>,
        empty_visible: bool,
    }

    impl DocumentView for FakeDocument {
        fn set_list(&mut self, cards: &[Card]) {
            self.cards = cards.to_vec();
        }

        fn show(&mut self, indicator: Indicator, _message: &str) {
            if indicator == Indicator::Empty {
                self.empty_visible = true;
            }
        }

        fn hide(&mut self, indicator: Indicator) {
            if indicator == Indicator::Empty {
                self.empty_visible = false;
            }
        }
    }

    fn parse(value: serde_json::Value) -> Vec<Facility> {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_single_accessible_facility() {
        let list = parse(json!([{
            "name": "Bad X", "type": "Pool",
            "latitude": 51.5, "longitude": 7.1,
            "wheelchairAccessible": "1"
        }]));
        let view = FilterView::default();
        let mut map = FakeMap::default();
        let mut doc = FakeDocument {
            empty_visible: true,
            ..Default::default()
        };

        view.render(&list, &FilterState::default(), &mut map, &mut doc);

        assert_eq!(map.markers.len(), 1);
        assert_eq!(map.markers[0].0, LatLon::new(51.5, 7.1));
        assert_eq!(map.markers[0].1.title, "Bad X");
        assert_eq!(map.markers[0].1.subtitle, "Pool");
        assert_eq!(doc.cards.len(), 1);
        assert_eq!(
            doc.cards[0].accessibility.as_deref(),
            Some("♿ wheelchair accessible")
        );
        assert!(!doc.empty_visible);
    }

    #[test]
    fn test_empty_list_shows_empty_indicator() {
        let view = FilterView::default();
        let mut map = FakeMap::default();
        let mut doc = FakeDocument::default();

        let rendering = view.render(&[], &FilterState::default(), &mut map, &mut doc);

        assert!(rendering.is_empty());
        assert!(doc.empty_visible);
        assert!(map.markers.is_empty());
        assert!(doc.cards.is_empty());
    }

    #[test]
    fn test_filtering_to_nothing_clears_previous_output() {
        let list = parse(json!([{"name": "Pool", "latitude": 1.0, "longitude": 2.0}]));
        let view = FilterView::default();
        let mut map = FakeMap::default();
        let mut doc = FakeDocument::default();

        view.render(&list, &FilterState::default(), &mut map, &mut doc);
        assert_eq!(map.markers.len(), 1);

        view.render(&list, &FilterState::new("museum", false), &mut map, &mut doc);
        assert!(map.markers.is_empty());
        assert!(doc.cards.is_empty());
        assert!(doc.empty_visible);
    }

    #[test]
    fn test_null_latitude_gets_card_but_no_marker() {
        let list = parse(json!([{"name": "Nowhere", "latitude": null, "longitude": 7.0}]));
        let view = FilterView::default();
        let mut map = FakeMap::default();
        let mut doc = FakeDocument::default();

        view.render(&list, &FilterState::default(), &mut map, &mut doc);

        assert!(map.markers.is_empty());
        assert_eq!(doc.cards.len(), 1);
        assert_eq!(doc.cards[0].focus, None);
    }

    #[test]
    fn test_missing_fields_use_placeholders() {
        let list = parse(json!([{}]));
        let rendering = FilterView::default().build(&list, &FilterState::default());

        let card = &rendering.cards[0];
        assert_eq!(card.title, "no name");
        assert_eq!(card.kind, "");
        assert_eq!(card.accessibility, None);
    }

    #[test]
    fn test_marker_at_zero_coordinates_but_no_focus() {
        let list = parse(json!([{"name": "Null Island", "latitude": 0, "longitude": 0}]));
        let rendering = FilterView::default().build(&list, &FilterState::default());

        assert_eq!(rendering.markers.len(), 1);
        assert_eq!(rendering.cards[0].focus, None);
    }

    #[test]
    fn test_render_is_idempotent() {
        let list = parse(json!([
            {"name": "A", "latitude": 1.0, "longitude": 2.0},
            {"name": "B"}
        ]));
        let view = FilterView::default();
        let state = FilterState::default();
        let mut map = FakeMap::default();
        let mut doc = FakeDocument::default();

        let first = view.render(&list, &state, &mut map, &mut doc);
        let markers_after_first = map.markers.clone();
        let cards_after_first = doc.cards.clone();
        let second = view.render(&list, &state, &mut map, &mut doc);

        assert_eq!(first, second);
        assert_eq!(map.markers, markers_after_first);
        assert_eq!(doc.cards, cards_after_first);
        assert_eq!(map.clears, 2);
    }
}
