use mapsnap::prelude::*;

const NYC: LatLng = LatLng {
    lat: 40.7128,
    lng: -74.006,
};

#[test]
fn test_center_zoom_map_end_to_end() {
    let builder = MapBuilder::new(400, 300).center(NYC).zoom(12.0);

    let options = builder.options().unwrap();
    let url = MapboxStatic::new("tok", "streets-v12").url(&options);
    assert!(url.contains("/mapbox/streets-v12/static/-74.006,40.7128,12,0,0/"));
    assert!(url.contains("/400x300@2x?"));

    let mut view = builder.build().unwrap();

    // Nothing is placed until the image is up.
    let marker = Marker::new("city", NYC);
    assert!(marker.place(&view).is_none());
    view.mark_loaded();

    // The framed center projects to the image center; the pin's drawing
    // origin is half a width left and a full height above it.
    let placed = marker.place(&view).unwrap();
    assert!((placed.x - (200.0 - 15.0)).abs() < 1e-6);
    assert!((placed.y - (150.0 - 40.0)).abs() < 1e-6);

    // Refitting the resolved bounds recovers the requested framing.
    let (center, zoom) = view.center_zoom();
    assert!((center.lat - NYC.lat).abs() < 1e-6);
    assert!((center.lng - NYC.lng).abs() < 1e-6);
    assert!((zoom - 12.0).abs() < 0.1);
}

#[test]
fn test_bounds_framed_map_with_overlays() {
    let bounds = GeoBounds::new(1.0, -1.0, 1.0, -1.0);
    let builder = MapBuilder::new(200, 200).bounds(bounds).retina(false);

    let url = MapboxStatic::new("tok", "dark-v11").url(&builder.options().unwrap());
    assert!(url.contains("/static/[-1,-1,1,1]/200x200?"));

    let mut view = builder.build().unwrap();
    view.mark_loaded();

    let circle = CircleMarker::new("dot", LatLng::new(0.0, 0.0)).with_radius(5.0);
    assert_eq!(circle.place(&view).unwrap(), PixelPoint::new(95.0, 95.0));

    // A popup hosted by a marker rides on the marker's top edge and closes
    // through its event machine.
    let marker = Marker::new("pin", LatLng::new(0.0, 0.0));
    let mut popup = Popup::attached("info").with_close_on_click(true);

    let placement = popup.placement(&view, Some(&marker)).unwrap().unwrap();
    assert_eq!(placement.point, PixelPoint::new(100.0, 60.0));
    assert_eq!(placement.translate, (-0.5, -1.0));

    popup.handle_event(PopupEvent::Click);
    assert!(popup.placement(&view, Some(&marker)).unwrap().is_none());
}

#[test]
fn test_managed_popups_follow_load_state() {
    let mut manager = PopupManager::new();
    manager
        .add_popup(Popup::new("a", LonLat { lat: 0.5, lon: 0.5 }))
        .unwrap();
    manager.add_popup(Popup::new("b", [0.0, 0.0])).unwrap();

    let mut view = MapBuilder::new(200, 200)
        .bounds(GeoBounds::new(1.0, -1.0, 1.0, -1.0))
        .build()
        .unwrap();

    assert!(manager.placements(&view).is_empty());

    view.mark_loaded();
    let mut placements = manager.placements(&view);
    placements.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(placements.len(), 2);
    assert_eq!(placements[0].1.point, PixelPoint::new(150.0, 50.0));
    assert_eq!(placements[1].1.point, PixelPoint::new(100.0, 100.0));
}

#[test]
fn test_failed_image_keeps_overlays_unplaced() {
    let mut view = MapBuilder::new(200, 200)
        .bounds(GeoBounds::new(1.0, -1.0, 1.0, -1.0))
        .build()
        .unwrap();
    view.mark_failed();

    assert_eq!(view.load_state(), LoadState::Failed);
    assert!(Marker::new("m", LatLng::new(0.0, 0.0)).place(&view).is_none());
}

#[test]
fn test_world_framing_at_low_zoom() {
    let view = MapBuilder::new(512, 256)
        .center(LatLng::new(0.0, 0.0))
        .zoom(0.0)
        .build()
        .unwrap();

    assert_eq!(view.bounds().west, -180.0);
    assert_eq!(view.bounds().east, 180.0);
}
