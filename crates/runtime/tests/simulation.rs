mod common;

use tactics_content::ScenarioLoader;
use tactics_core::{
    ActionMode, AiConfig, ControllerKind, Effect, EntityKind, GameConfig, Grid, Human, Position,
    RoundRobinController, Trap, World,
};
use tactics_runtime::Simulation;

fn immediate() -> GameConfig {
    GameConfig::default().with_ai(AiConfig::immediate())
}

#[test]
fn tactical_duel_ends_in_a_corpse() {
    let mut world = World::new(Grid::walled(7, 3));
    let (hero, _) = common::armed_human(&mut world, Position::new(1, 1), 100, 30);
    let (foe, _) = common::armed_human(&mut world, Position::new(2, 1), 60, 1);

    let mut simulation = Simulation::new(world, immediate());
    let records = simulation.run(4).unwrap();

    let fatal = records
        .iter()
        .find(|record| record.deaths.contains(&foe))
        .expect("foe dies during the duel");
    assert_eq!(fatal.entity, hero);
    assert_eq!(fatal.chosen, Some(ActionMode::Attack));
    assert!(fatal.turn < 2);

    let world = simulation.world();
    assert!(matches!(
        world.entity(foe).map(|entity| &entity.kind),
        Some(EntityKind::Corpse(_))
    ));
    assert_eq!(world.grid().entity_at(Position::new(2, 1)), Some(foe));
    assert_eq!(world.human(hero).map(|human| human.hp), Some(99));
}

#[test]
fn dead_actors_lose_their_turn() {
    let mut world = World::new(Grid::walled(7, 3));
    let (hero, _) = common::armed_human(&mut world, Position::new(1, 1), 100, 80);
    let (foe, _) = common::armed_human(&mut world, Position::new(2, 1), 50, 5);

    let mut simulation = Simulation::new(world, immediate());
    let round = simulation.step().unwrap();

    assert_eq!(round.len(), 1);
    assert_eq!(round[0].entity, hero);
    assert_eq!(round[0].deaths, vec![foe]);
    assert_eq!(simulation.world().living_actors(), vec![hero]);
}

#[test]
fn injected_turn_order_lets_the_weaker_strike_first() {
    let mut world = World::new(Grid::walled(7, 3));
    let (hero, _) = common::armed_human(&mut world, Position::new(1, 1), 100, 80);
    let (foe, _) = common::armed_human(&mut world, Position::new(2, 1), 50, 5);

    let mut simulation = Simulation::new(world, immediate()).with_turn_order(vec![foe, hero]);
    let round = simulation.step().unwrap();

    assert_eq!(
        round.iter().map(|record| record.entity).collect::<Vec<_>>(),
        vec![foe, hero]
    );
    let first_hit = round[0].report.as_ref().map(|report| report.target.clone());
    assert_eq!(
        first_hit,
        Some(Effect::Damaged {
            target: hero,
            amount: 5,
            remaining_hp: 95,
        })
    );
    assert_eq!(round[1].deaths, vec![foe]);
}

#[test]
fn external_actor_uses_the_bound_controller() {
    let mut world = World::new(Grid::walled(5, 5));
    let puppet = world
        .spawn_actor(
            Position::new(2, 2),
            EntityKind::Human(Human::new(10)),
            ControllerKind::External,
        )
        .unwrap();

    let mut simulation = Simulation::new(world, GameConfig::default());
    simulation
        .registry_mut()
        .bind(puppet, Box::new(RoundRobinController::default()));
    let records = simulation.run(2).unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].chosen, Some(ActionMode::Movement));
    assert_eq!(records[1].chosen, Some(ActionMode::Inventory));
}

const SKIRMISH: &str = r########"(
    rows: [
        "#######",
        "#.....#",
        "#.....#",
        "#######",
    ],
    items: {
        "axe": (name: "Axe", kind: Melee(damage: 25)),
        "club": (name: "Club", kind: Melee(damage: 5)),
        "charm": (name: "Charm", kind: Artefact),
    },
    spawns: [
        Human(at: (1, 1), hp: 100, equip: ["axe"]),
        Human(at: (2, 1), hp: 50, equip: ["club"]),
        ItemDrop(at: (5, 2), item: "charm"),
    ],
)"########;

#[test]
fn scenario_skirmish_waits_for_combat_delays() {
    let world = ScenarioLoader::parse(SKIRMISH).unwrap().build().unwrap();
    let hero = world.grid().entity_at(Position::new(1, 1)).unwrap();
    let foe = world.grid().entity_at(Position::new(2, 1)).unwrap();

    let mut simulation = Simulation::new(world, GameConfig::default());
    let records = simulation.run(6).unwrap();

    let hero_turns: Vec<_> = records.iter().filter(|record| record.entity == hero).collect();
    assert!(hero_turns[..2].iter().all(|record| record.chosen.is_none()));
    assert_eq!(hero_turns[2].chosen, Some(ActionMode::Attack));

    let fatal = records
        .iter()
        .find(|record| record.deaths.contains(&foe))
        .expect("foe falls to the second axe blow");
    assert_eq!((fatal.entity, fatal.turn), (hero, 3));
    assert_eq!(simulation.world().human(hero).map(|human| human.hp), Some(95));
}

#[test]
fn trap_wounds_a_neighbour_every_round() {
    let mut world = World::new(Grid::walled(7, 3));
    let trap = world
        .spawn(Position::new(2, 1), EntityKind::Trap(Trap { damage: 3 }))
        .unwrap();
    let victim = world
        .spawn_actor(
            Position::new(3, 1),
            EntityKind::Human(Human::new(100)),
            ControllerKind::Noop,
        )
        .unwrap();

    let mut simulation = Simulation::new(world, immediate());
    let records = simulation.run(3).unwrap();

    let springs: Vec<_> = records
        .iter()
        .filter(|record| record.entity == trap)
        .collect();
    assert_eq!(springs.len(), 3);
    assert!(
        springs
            .iter()
            .all(|record| record.chosen == Some(ActionMode::Attack))
    );
    assert_eq!(simulation.world().human(victim).map(|human| human.hp), Some(91));
}

#[test]
fn lone_trap_does_not_keep_the_run_going() {
    let mut world = World::new(Grid::walled(5, 5));
    world
        .spawn(Position::new(2, 2), EntityKind::Trap(Trap { damage: 3 }))
        .unwrap();

    let mut simulation = Simulation::new(world, immediate());
    let records = simulation.run(10).unwrap();

    assert!(records.is_empty());
    assert_eq!(simulation.turn(), 0);
}
