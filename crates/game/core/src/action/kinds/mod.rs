//! Concrete modes: each file pairs a context with its capability, outside
//! validator, and the interaction definitions entities and items carry.
pub mod attack;
pub mod equip;
pub mod heal;
pub mod inventory;
pub mod movement;
pub mod pickup;
pub mod reload;
pub mod use_item;

pub use attack::{AttackCapability, AttackContext, AttackType};
pub use equip::{EquipCapability, EquipContext, EquipOperation};
pub use heal::{HealCapability, HealContext};
pub use inventory::{InventoryCapability, InventoryContext, InventoryOperation};
pub use movement::{MovementCapability, MovementContext};
pub use pickup::{PickUpCapability, PickUpContext};
pub use reload::{ReloadCapability, ReloadContext};
pub use use_item::{UseItemCapability, UseItemContext};

use crate::state::{EntityId, World};

use super::failure::ActionFailure;

/// Same tile or one orthogonal step apart.
fn check_reach(world: &World, source: EntityId, target: EntityId) -> Result<(), ActionFailure> {
    let (Some(from), Some(to)) = (world.position_of(source), world.position_of(target)) else {
        return Err(ActionFailure::EntityGone);
    };
    if from.manhattan_distance(to) <= 1 {
        Ok(())
    } else {
        Err(ActionFailure::TooFar)
    }
}
