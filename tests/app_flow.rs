mod common;

use bihmap::app::{App, Focus};
use bihmap::config::Config;
use bihmap::data::{MapData, Priority};
use bihmap::input::{handle_key, handle_mouse, Action};
use bihmap::ui;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{backend::TestBackend, Terminal};

fn fixture_app(config: Config) -> (tempfile::TempDir, App) {
    let dir = tempfile::tempdir().unwrap();
    common::write_fixture(dir.path());
    let data = MapData::load(dir.path()).unwrap();
    let export = dir.path().join("export.geojson");
    let app = App::new(data, config, Some(export)).unwrap();
    (dir, app)
}

fn render(terminal: &mut Terminal<TestBackend>, app: &mut App) -> String {
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn toggles_start_inactive_and_hide_everything() {
    let (_dir, app) = fixture_app(Config::default());

    assert!(app.view.table_mask.iter().all(|shown| !shown));
    assert!(app.map.groups.iter().all(|g| !g.visible));
    assert_eq!(app.map.visible_markers().count(), 0);
}

#[test]
fn show_all_starts_with_everything_but_orphan_categories() {
    let config = Config {
        show_all: true,
        ..Config::default()
    };
    let (_dir, app) = fixture_app(config);

    // Casino (priority 40) has no points of interest, hence no toggle.
    assert_eq!(app.view.table_mask, vec![true, true, true, false]);
    assert_eq!(app.map.visible_markers().count(), 4);
}

#[test]
fn number_keys_drive_table_and_markers() {
    let (_dir, mut app) = fixture_app(Config::default());

    // Toggle order follows first appearance: High, Low, Medium.
    assert_eq!(handle_key(&mut app, key(KeyCode::Char('2'))), Action::Continue);
    assert!(app.filter.is_active(Priority(30)));
    assert_eq!(app.view.table_mask, vec![false, false, true, false]);
    assert_eq!(app.view.visible_groups, vec![Priority(30)]);
    assert_eq!(app.status, "Low: ON");

    handle_key(&mut app, key(KeyCode::Char('1')));
    assert_eq!(app.view.table_mask, vec![true, false, true, false]);
    assert_eq!(app.map.visible_markers().count(), 3);

    handle_key(&mut app, key(KeyCode::Char('2')));
    assert_eq!(app.view.table_mask, vec![true, false, false, false]);
    assert_eq!(app.status, "Low: OFF");

    handle_key(&mut app, key(KeyCode::Char('9')));
    assert_eq!(app.status, "No priority toggle 9");
}

#[test]
fn renders_controls_and_filtered_table() {
    let (_dir, mut app) = fixture_app(Config::default());
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Choose Priority:"));
    assert!(screen.contains("1 High"));
    assert!(screen.contains("2 Low"));
    assert!(screen.contains("3 Medium"));
    assert!(screen.contains("Categories (0/4)"));
    assert!(screen.contains(" BiH "));
    assert!(!screen.contains("Hospital"));

    app.toggle_nth(0);
    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Categories (1/4)"));
    assert!(screen.contains("Hospital"));
    assert!(!screen.contains("Museum"));
}

#[test]
fn hovering_a_visible_marker_shows_tooltip() {
    let (_dir, mut app) = fixture_app(Config::default());
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    render(&mut terminal, &mut app);

    let area = app.map.area.unwrap();
    let kcus = app.map.groups[0].markers[0].clone();
    assert_eq!(kcus.name, "KCUS");
    let (col, row) = app.map.viewport.cell_of(area, kcus.x, kcus.y).unwrap();

    // Hidden group: no hover.
    handle_mouse(&mut app, mouse(MouseEventKind::Moved, col, row));
    assert!(app.map.hovered_marker().is_none());

    app.toggle_nth(0);
    handle_mouse(&mut app, mouse(MouseEventKind::Moved, col, row));
    let (priority, marker) = app.map.hovered_marker().unwrap();
    assert_eq!(priority, Priority(10));
    assert_eq!(marker.name, "KCUS");

    let screen = render(&mut terminal, &mut app);
    assert!(screen.contains("Name: KCUS"));
    assert!(screen.contains("POI: Hospital"));
}

#[test]
fn clicking_a_toggle_button_flips_it() {
    let (_dir, mut app) = fixture_app(Config::default());
    let mut terminal = Terminal::new(TestBackend::new(120, 30)).unwrap();
    render(&mut terminal, &mut app);

    let (priority, button) = app.toggle_areas[2];
    assert_eq!(priority, Priority(20));
    handle_mouse(
        &mut app,
        mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y),
    );
    assert!(app.filter.is_active(Priority(20)));
    assert_eq!(app.view.table_mask, vec![false, true, false, false]);
}

#[test]
fn focus_and_quit_keys() {
    let (_dir, mut app) = fixture_app(Config::default());
    assert_eq!(app.focus, Focus::Map);
    handle_key(&mut app, key(KeyCode::Tab));
    assert_eq!(app.focus, Focus::Table);
    assert_eq!(handle_key(&mut app, key(KeyCode::Char('q'))), Action::Quit);
}

#[test]
fn zoom_and_reset_keys() {
    let (_dir, mut app) = fixture_app(Config::default());
    let start = app.map.viewport.clone();

    handle_key(&mut app, key(KeyCode::Char('+')));
    handle_key(&mut app, key(KeyCode::Char('l')));
    assert!(app.map.viewport.zoom() > 1.0);
    assert!(app.map.viewport.center().0 > start.center().0);

    handle_key(&mut app, key(KeyCode::Char('0')));
    assert_eq!(app.map.viewport, start);
}

#[test]
fn save_exports_only_visible_markers() {
    let (dir, mut app) = fixture_app(Config::default());
    app.toggle_nth(1);

    handle_key(&mut app, key(KeyCode::Char('s')));
    assert!(app.error_message.is_none(), "{:?}", app.error_message);

    let text = std::fs::read_to_string(dir.path().join("export.geojson")).unwrap();
    let geojson: geojson::GeoJson = text.parse().unwrap();
    let geojson::GeoJson::FeatureCollection(collection) = geojson else {
        panic!("expected a FeatureCollection");
    };
    assert_eq!(collection.features.len(), 2);
    let names: Vec<_> = collection
        .features
        .iter()
        .map(|f| f.property("name").unwrap().as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Stari most", "Zemaljski muzej"]);
    assert_eq!(
        collection.features[0]
            .property("priority_name")
            .and_then(|v| v.as_str()),
        Some("Low")
    );
}
