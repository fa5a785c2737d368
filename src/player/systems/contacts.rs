//! Player domain: ground and wall contact probes against the physics world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::components::GameLayer;
use crate::player::config::PlayerConfig;
use crate::player::sim::Contacts;

/// Overlap-box queries: a ground box under the feet and a wall box centered
/// on the body, both tested against the terrain layer. Pure reads, no
/// mutation.
pub(crate) fn probe(spatial: &SpatialQuery, config: &PlayerConfig, position: Vec2) -> Contacts {
    let filter = SpatialQueryFilter::from_mask(GameLayer::Terrain);

    let ground_box = Collider::rectangle(config.ground_check_size.x, config.ground_check_size.y);
    let ground_center = position - Vec2::new(0.0, config.ground_check_offset);
    let on_ground = !spatial
        .shape_intersections(&ground_box, ground_center, 0.0, &filter)
        .is_empty();

    let wall_box = Collider::rectangle(config.wall_check_size.x, config.wall_check_size.y);
    let on_wall = !spatial
        .shape_intersections(&wall_box, position, 0.0, &filter)
        .is_empty();

    Contacts { on_ground, on_wall }
}
