use std::io::Write;

use tactics_content::{ConfigLoader, MapLoader, ScenarioLoader};
use tactics_core::{EntityKind, Position, Tile};
use tempfile::NamedTempFile;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn config_file_overrides_ai_thresholds() {
    let file = write_temp(
        r#"
max_turns = 12

[ai]
flee_hp_threshold = 35
combat_exit_delay = 2
"#,
    );

    let config = ConfigLoader::load(file.path()).unwrap();

    assert_eq!(config.max_turns, 12);
    assert_eq!(config.ai.flee_hp_threshold, 35);
    assert_eq!(config.ai.combat_exit_delay, 2);
    assert_eq!(config.ai.combat_entry_delay, 3);
}

#[test]
fn malformed_config_reports_path() {
    let file = write_temp("max_turns = \"many\"");

    let error = ConfigLoader::load(file.path()).unwrap_err().to_string();
    assert!(error.contains(&file.path().display().to_string()));
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ConfigLoader::load(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn layout_file_loads_grid() {
    let file = write_temp(r########"(rows: ["#####", "#.#.#", "#####"])"########);

    let grid = MapLoader::load(file.path()).unwrap();

    assert_eq!(grid.tile(Position::new(2, 1)), Tile::Wall);
    assert!(grid.can_enter(Position::new(3, 1)));
}

#[test]
fn scenario_file_populates_world() {
    let file = write_temp(
        r########"(
    rows: [
        "#######",
        "#.....#",
        "#.....#",
        "#######",
    ],
    items: {
        "sword": (name: "Short sword", kind: Melee(damage: 6)),
        "kit": (name: "Med kit", kind: MedKit(heal_amount: 25)),
        "charm": (name: "Charm", kind: Artefact),
    },
    spawns: [
        Human(at: (1, 1), hp: 100, equip: ["sword"], inventory: [("kit", 2)]),
        Human(at: (5, 2), hp: 60, controller: FirstPossible, glyph: Some('g')),
        ItemDrop(at: (3, 1), item: "charm"),
        Trap(at: (3, 2), damage: 4),
    ],
)"########,
    );

    let world = ScenarioLoader::load_world(file.path()).unwrap();

    assert_eq!(world.entities().count(), 4);
    let goblin = world.grid().entity_at(Position::new(5, 2)).unwrap();
    assert_eq!(world.entity(goblin).map(|e| e.glyph), Some('g'));

    let drop = world.grid().entity_at(Position::new(3, 1)).unwrap();
    assert!(matches!(
        world.entity(drop).map(|e| &e.kind),
        Some(EntityKind::ItemDrop(_))
    ));

    // Humans and the trap act; the drop does not.
    assert_eq!(world.living_actors().len(), 3);
}

#[test]
fn scenario_spawn_onto_wall_fails() {
    let file = write_temp(
        r########"(
    rows: ["###", "#.#", "###"],
    spawns: [Trap(at: (0, 0), damage: 1)],
)"########,
    );

    assert!(ScenarioLoader::load_world(file.path()).is_err());
}
