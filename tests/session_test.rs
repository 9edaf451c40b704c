use anyhow::Result;
use facility_locator::app::run_session;
use facility_locator::core::{Indicator, LatLon, MapSettings, ViewSettings};
use facility_locator::{HttpFacilitySource, LocatorApp, TerminalDocument, TerminalMap};
use httpmock::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

fn facilities() -> serde_json::Value {
    serde_json::json!([
        {"name": "Hallenbad Buer", "type": "Pool", "latitude": 51.58, "longitude": 7.05, "wheelchairAccessible": 1},
        {"name": "Stadtbibliothek", "type": "Library", "latitude": 51.51, "longitude": 7.10, "wheelchairAccessible": "0"},
        {"name": "Apotheke am Markt", "type": "APOTHEKE", "latitude": null, "longitude": 7.08, "wheelchairAccessible": "true"}
    ])
}

#[tokio::test]
async fn test_session_commands_drive_the_view() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/facilities");
        then.status(200).json_body(facilities());
    });

    let source = HttpFacilitySource::new(
        server.url("/api/facilities"),
        Duration::from_secs(5),
        &HashMap::new(),
    )?;
    let mut app = LocatorApp::new(
        source,
        TerminalMap::new(Vec::new()),
        TerminalDocument::new(Vec::new()),
        MapSettings::default(),
        ViewSettings::default(),
    );

    let input: &[u8] = b"reload\nsearch POOL\nselect 1\naccessible on\nsearch\n";
    let mut out = Vec::new();
    run_session(&mut app, input, &mut out).await?;

    api_mock.assert_hits(1);
    assert_eq!(app.filter().query, "");
    assert!(app.filter().accessible_only);

    let titles: Vec<_> = app.document().cards().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Hallenbad Buer", "Apotheke am Markt"]);
    assert_eq!(app.map().markers().len(), 1);
    assert_eq!(app.map().center(), Some((LatLon::new(51.58, 7.05), 14)));
    assert!(out.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_session_reports_bad_input_and_stops_on_quit() -> Result<()> {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/api/facilities");
        then.status(200).json_body(facilities());
    });

    let source = HttpFacilitySource::new(
        server.url("/api/facilities"),
        Duration::from_secs(5),
        &HashMap::new(),
    )?;
    let mut app = LocatorApp::new(
        source,
        TerminalMap::new(Vec::new()),
        TerminalDocument::new(Vec::new()),
        MapSettings::default(),
        ViewSettings::default(),
    );

    let input: &[u8] = b"r\ndance\nsearch museum\nselect 3\nselect 1\nquit\nreload\n";
    let mut out = Vec::new();
    run_session(&mut app, input, &mut out).await?;

    api_mock.assert_hits(1);
    assert!(app.document().is_visible(Indicator::Empty));

    let out = String::from_utf8(out)?;
    assert!(out.contains("unknown command 'dance'"));
    assert!(out.contains("card 3 has no map position"));
    assert!(out.contains("card 1 has no map position"));
    Ok(())
}
