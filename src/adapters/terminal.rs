use crate::core::{Card, DocumentView, Indicator, LatLon, MapWidget, MarkerLabel};
use std::collections::HashSet;
use std::io::Write;

/// Prints the marker layer as plain text lines.
pub struct TerminalMap<W: Write> {
    out: W,
    markers: Vec<(LatLon, MarkerLabel)>,
    center: Option<(LatLon, u8)>,
}

impl<W: Write> TerminalMap<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            markers: Vec::new(),
            center: None,
        }
    }

    pub fn markers(&self) -> &[(LatLon, MarkerLabel)] {
        &self.markers
    }

    pub fn center(&self) -> Option<(LatLon, u8)> {
        self.center
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> MapWidget for TerminalMap<W> {
    fn clear_markers(&mut self) {
        self.markers.clear();
    }

    fn add_marker(&mut self, position: LatLon, label: &MarkerLabel) {
        let line = if label.subtitle.is_empty() {
            format!(
                "📍 {:.5}, {:.5}  {}",
                position.latitude, position.longitude, label.title
            )
        } else {
            format!(
                "📍 {:.5}, {:.5}  {} · {}",
                position.latitude, position.longitude, label.title, label.subtitle
            )
        };
        write_line(&mut self.out, &line);
        self.markers.push((position, label.clone()));
    }

    fn set_view(&mut self, center: LatLon, zoom: u8) {
        write_line(
            &mut self.out,
            &format!(
                "🗺  map centered on {:.5}, {:.5} (zoom {})",
                center.latitude, center.longitude, zoom
            ),
        );
        self.center = Some((center, zoom));
    }
}

/// Prints cards and indicator changes.
pub struct TerminalDocument<W: Write> {
    out: W,
    cards: Vec<Card>,
    visible: HashSet<Indicator>,
}

impl<W: Write> TerminalDocument<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            cards: Vec::new(),
            visible: HashSet::new(),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn is_visible(&self, indicator: Indicator) -> bool {
        self.visible.contains(&indicator)
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> DocumentView for TerminalDocument<W> {
    fn set_list(&mut self, cards: &[Card]) {
        for (i, card) in cards.iter().enumerate() {
            let mut text = format!("[{}] {}\n", i + 1, card.title);
            if let Some(practice) = &card.practice_name {
                text.push_str(&format!("    {}\n", practice));
            }
            if !card.kind.is_empty() {
                text.push_str(&format!("    {}\n", card.kind));
            }
            if let Some(accessibility) = &card.accessibility {
                text.push_str(&format!("    {}\n", accessibility));
            }
            write_line(&mut self.out, text.trim_end());
        }
        self.cards = cards.to_vec();
    }

    fn show(&mut self, indicator: Indicator, message: &str) {
        let prefix = match indicator {
            Indicator::Loading => "⏳",
            Indicator::Error => "❌",
            Indicator::Empty => "ℹ️ ",
        };
        write_line(&mut self.out, &format!("{} {}", prefix, message));
        self.visible.insert(indicator);
    }

    fn hide(&mut self, indicator: Indicator) {
        self.visible.remove(&indicator);
    }
}

fn write_line<W: Write>(out: &mut W, line: &str) {
    if let Err(e) = writeln!(out, "{}", line).and_then(|_| out.flush()) {
        tracing::warn!("Failed to write to terminal: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_lines() {
        let mut map = TerminalMap::new(Vec::new());
        map.add_marker(
            LatLon::new(51.5, 7.1),
            &MarkerLabel {
                title: "Bad X".to_string(),
                subtitle: "Pool".to_string(),
            },
        );
        map.clear_markers();

        assert!(map.markers().is_empty());
        let out = String::from_utf8(map.into_inner()).unwrap();
        assert_eq!(out, "📍 51.50000, 7.10000  Bad X · Pool\n");
    }

    #[test]
    fn test_cards_and_indicators() {
        let mut doc = TerminalDocument::new(Vec::new());
        doc.set_list(&[Card {
            title: "Bad X".to_string(),
            practice_name: None,
            kind: "Pool".to_string(),
            accessibility: Some("♿ wheelchair accessible".to_string()),
            focus: None,
        }]);
        doc.show(Indicator::Error, "Facilities could not be loaded");
        assert!(doc.is_visible(Indicator::Error));
        doc.hide(Indicator::Error);
        assert!(!doc.is_visible(Indicator::Error));

        let out = String::from_utf8(doc.into_inner()).unwrap();
        assert_eq!(
            out,
            "[1] Bad X\n    Pool\n    ♿ wheelchair accessible\n❌ Facilities could not be loaded\n"
        );
    }
}
