use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use pretty_assertions::assert_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;

use iawd_pulse::error::AppError;
use iawd_pulse::map::svg::parse_map_paths;
use iawd_pulse::map::{
    initialize_panels, MapHotspot, MapPanelOptions, MapPanelState, PanelDescriptor,
};
use iawd_pulse::services::MapAssetService;

fn hotspot(city: &str, x: f64, y: f64) -> MapHotspot {
    MapHotspot {
        city: city.to_string(),
        info: format!("{} online", 10),
        country_code: Some("us".to_string()),
        x,
        y,
    }
}

fn grid_seeds() -> Vec<MapHotspot> {
    vec![
        hotspot("origin", 0.0, 0.0),
        hotspot("a", 1.0, 0.0),
        hotspot("b", 2.0, 0.0),
        hotspot("c", 10.0, 10.0),
        hotspot("d", 50.0, 50.0),
        hotspot("e", 3.0, 0.0),
    ]
}

#[test]
fn initialization_is_idempotent() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let first = panel.initialize(&grid_seeds());
    assert!(!first.is_noop());

    let second = panel.initialize(&grid_seeds());
    assert!(second.is_noop());
    assert_eq!(panel.hotspots().len(), 6);

    // The redundant ticket must not tear the live panel down.
    panel.teardown(second);
    assert!(panel.is_initialized());

    panel.teardown(first);
    assert!(!panel.is_initialized());
}

#[test]
fn teardown_runs_cleanup_once_in_insertion_order() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let ticket = panel.initialize(&grid_seeds());

    let order: Rc<RefCell<Vec<&'static str>>> = Rc::new(RefCell::new(Vec::new()));
    for name in ["listener", "ping-timer", "stats-timer"] {
        let order = order.clone();
        panel.register_cleanup(move || order.borrow_mut().push(name));
    }

    panel.hotspot_entered(0);
    panel.teardown(ticket);

    assert_eq!(
        *order.borrow(),
        vec!["listener", "ping-timer", "stats-timer"]
    );
    assert!(panel.arcs().is_empty());
    assert!(!panel.is_initialized());

    // Nothing responds after teardown.
    let mut rng = StdRng::seed_from_u64(3);
    panel.hotspot_entered(0);
    panel.pointer_moved(10.0, 10.0);
    panel.spawn_ping(&mut rng);
    panel.refresh_live_counters(&mut rng);
    panel.advance_clock(5000.0);
    assert!(panel.arcs().is_empty());
    assert!(panel.pings().is_empty());
    assert!(panel.live_counters().is_none());
    assert!(!panel.tooltip().visible);

    // The flag reset allows a later reinitialization.
    let again = panel.initialize(&grid_seeds());
    assert!(!again.is_noop());
}

#[test]
fn nearest_neighbour_selection_matches_distance_order() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&grid_seeds());

    panel.draw_connection_arcs(0.0, 0.0);

    let targets: Vec<usize> = panel.arcs().iter().map(|arc| arc.target).collect();
    assert_eq!(targets, vec![1, 2, 5, 3]);
    for index in targets {
        assert!(panel.is_hotspot_connected(index));
    }
}

#[test]
fn arc_clearing_is_total() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&grid_seeds());

    panel.draw_connection_arcs(0.0, 0.0);
    panel.advance_clock(2000.0);
    assert!(!panel.arcs().is_empty());
    assert!(!panel.data_particles().is_empty());

    panel.clear_connection_arcs();
    assert!(panel.arcs().is_empty());
    assert!(panel.data_particles().is_empty());
    for index in 0..panel.hotspots().len() {
        assert!(!panel.is_hotspot_connected(index));
    }
}

#[test]
fn redrawing_clears_the_previous_set_first() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&grid_seeds());

    panel.draw_connection_arcs(0.0, 0.0);
    panel.draw_connection_arcs(50.0, 50.0);

    // Only the new set survives; the new origin is excluded and the old
    // cluster reorders by distance from (50,50).
    let targets: Vec<usize> = panel.arcs().iter().map(|arc| arc.target).collect();
    assert_eq!(targets, vec![3, 5, 2, 1]);
    assert!(!panel.is_hotspot_connected(4));
}

#[test]
fn country_resolution_priority_applies_to_loaded_documents() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&[]);

    let svg = r#"<svg>
        <path id="ES" data-name="Kingdom of Spain" d="M0,0"/>
        <path class="USA" d="M1,1"/>
        <path id="swamp" class="wetland" d="M2,2"/>
    </svg>"#;
    panel.install_map_document(parse_map_paths(svg).unwrap());

    let names: Vec<Option<&str>> = panel
        .country_paths()
        .iter()
        .map(|path| path.name.as_deref())
        .collect();
    assert_eq!(
        names,
        vec![Some("Kingdom of Spain"), Some("United States"), None]
    );

    // Hovering the unnamed path highlights it without tooltip content.
    panel.country_entered(2);
    assert!(panel.country_paths()[2].hovered);
    assert!(!panel.tooltip().visible);
}

#[test]
fn flag_validation_gates_the_tooltip_flag() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let seeds = vec![
        MapHotspot {
            city: "New York".into(),
            info: "42 online".into(),
            country_code: Some("US".into()),
            x: 22.0,
            y: 34.0,
        },
        MapHotspot {
            city: "Nowhere".into(),
            info: "0 online".into(),
            country_code: Some("USA".into()),
            x: 40.0,
            y: 40.0,
        },
        MapHotspot {
            city: "Unset".into(),
            info: String::new(),
            country_code: None,
            x: 60.0,
            y: 60.0,
        },
    ];
    let _ticket = panel.initialize(&seeds);

    panel.hotspot_entered(0);
    let flag = panel.tooltip().flag.clone().expect("two-letter code accepted");
    assert_eq!(flag.src, "https://flagcdn.com/us.svg");

    panel.hotspot_entered(1);
    assert!(panel.tooltip().flag.is_none());

    panel.hotspot_entered(2);
    assert!(panel.tooltip().flag.is_none());
    assert!(!panel.tooltip().show_info);
}

#[test]
fn inactive_panels_suppress_spotlight_and_pings() {
    let active = Arc::new(AtomicBool::new(false));
    let gate: Arc<dyn Fn() -> bool> = {
        let active = active.clone();
        Arc::new(move || active.load(Ordering::SeqCst))
    };
    let mut panel = MapPanelState::new(MapPanelOptions {
        is_active: Some(gate),
        ..Default::default()
    });
    let _ticket = panel.initialize(&grid_seeds());
    let mut rng = StdRng::seed_from_u64(9);

    panel.pointer_moved(100.0, 100.0);
    assert_eq!(panel.spotlight().opacity, 0.0);
    panel.spawn_ping(&mut rng);
    assert!(panel.pings().is_empty());

    active.store(true, Ordering::SeqCst);
    panel.pointer_moved(100.0, 100.0);
    assert_eq!(panel.spotlight().opacity, 1.0);
    panel.spawn_ping(&mut rng);
    assert_eq!(panel.pings().len(), 1);
}

#[test]
fn default_gate_reads_the_visibility_flag() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&grid_seeds());
    let mut rng = StdRng::seed_from_u64(1);

    panel.set_visible(false);
    panel.spawn_ping(&mut rng);
    assert!(panel.pings().is_empty());

    panel.set_visible(true);
    panel.spawn_ping(&mut rng);
    assert_eq!(panel.pings().len(), 1);
}

#[test]
fn pings_expire_after_their_lifetime() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&grid_seeds());
    let mut rng = StdRng::seed_from_u64(5);

    panel.spawn_ping(&mut rng);
    panel.advance_clock(1000.0);
    panel.spawn_ping(&mut rng);
    assert_eq!(panel.pings().len(), 2);

    panel.advance_clock(2000.0);
    assert_eq!(panel.pings().len(), 1);
    panel.advance_clock(2000.0);
    assert!(panel.pings().is_empty());
}

#[derive(Clone)]
struct FailingAssets;

#[async_trait]
impl MapAssetService for FailingAssets {
    async fn fetch_map_svg(&self, _url: &str) -> Result<String, AppError> {
        Err(AppError::MapDocument("connection refused".to_string()))
    }
}

#[derive(Clone)]
struct CannedAssets(String);

#[async_trait]
impl MapAssetService for CannedAssets {
    async fn fetch_map_svg(&self, _url: &str) -> Result<String, AppError> {
        Ok(self.0.clone())
    }
}

/// The load path mirrors the runtime's fire-and-forget fetch: a failed
/// fetch or parse leaves previously installed paths untouched and never
/// escapes the load boundary.
#[tokio::test]
async fn fetch_failure_leaves_existing_paths_untouched() {
    let mut panel = MapPanelState::new(MapPanelOptions::default());
    let _ticket = panel.initialize(&[]);
    panel.install_map_document(parse_map_paths(r#"<svg><path id="US" d="M0,0"/></svg>"#).unwrap());
    assert_eq!(panel.country_paths().len(), 1);

    let service = FailingAssets;
    if let Ok(text) = service.fetch_map_svg(panel.map_svg_url()).await {
        panel.install_map_document(parse_map_paths(&text).unwrap_or_default());
    }
    assert_eq!(panel.country_paths().len(), 1);

    // A fetch that succeeds but fails to parse is equally silent.
    let service = CannedAssets("<svg><path d=\"M0,0".to_string());
    if let Ok(text) = service.fetch_map_svg(panel.map_svg_url()).await {
        if let Ok(seeds) = parse_map_paths(&text) {
            panel.install_map_document(seeds);
        }
    }
    assert_eq!(panel.country_paths().len(), 1);
}

#[test]
fn batch_initialized_panels_are_independent() {
    let panels = initialize_panels(vec![
        PanelDescriptor {
            hotspots: grid_seeds(),
            options: MapPanelOptions::default(),
        },
        PanelDescriptor {
            hotspots: grid_seeds()[..2].to_vec(),
            options: MapPanelOptions::default(),
        },
    ]);
    let mut panels = panels;

    assert!(panels.iter().all(|(panel, ticket)| {
        panel.is_initialized() && !ticket.is_noop()
    }));

    let (first, _) = &mut panels[0];
    first.draw_connection_arcs(0.0, 0.0);
    assert_eq!(first.arcs().len(), 4);
    assert!(panels[1].0.arcs().is_empty());
}
