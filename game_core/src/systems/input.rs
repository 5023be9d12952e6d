use crate::{InputLatch, PaddleIntent};
use hecs::World;

/// Copy the latch onto every user-steered paddle
pub fn ingest_input(world: &mut World, input: &InputLatch) {
    for (_entity, intent) in world.query_mut::<&mut PaddleIntent>() {
        intent.up = input.move_up;
        intent.down = input.move_down;
    }
}
